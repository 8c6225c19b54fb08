//! Object kinds that accept GRANT/REVOKE and the privileges each one allows

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StatementError;

/// Keyword accepted in place of an explicit privilege list.
pub const ALL_KEYWORD: &str = "ALL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Table,
    Schema,
    Sequence,
    Function,
    Language,
    Tablespace,
    Type,
}

impl TargetKind {
    pub const VARIANTS: [TargetKind; 7] = [
        TargetKind::Table,
        TargetKind::Schema,
        TargetKind::Sequence,
        TargetKind::Function,
        TargetKind::Language,
        TargetKind::Tablespace,
        TargetKind::Type,
    ];

    /// The object-type keyword used in `GRANT ... ON <KEYWORD> ...`
    pub fn keyword(&self) -> &'static str {
        match self {
            TargetKind::Table => "TABLE",
            TargetKind::Schema => "SCHEMA",
            TargetKind::Sequence => "SEQUENCE",
            TargetKind::Function => "FUNCTION",
            TargetKind::Language => "LANGUAGE",
            TargetKind::Tablespace => "TABLESPACE",
            TargetKind::Type => "TYPE",
        }
    }

    /// Privileges PostgreSQL accepts for this kind, in declaration order
    pub fn privileges(&self) -> &'static [&'static str] {
        match self {
            TargetKind::Table => &["SELECT", "INSERT", "UPDATE", "DELETE"],
            TargetKind::Schema => &["CREATE", "USAGE"],
            TargetKind::Sequence => &["USAGE", "SELECT", "UPDATE"],
            TargetKind::Function => &["EXECUTE"],
            TargetKind::Language => &["USAGE"],
            TargetKind::Tablespace => &["CREATE"],
            TargetKind::Type => &["USAGE"],
        }
    }

    pub fn allows(&self, privilege: &str) -> bool {
        self.privileges().iter().any(|p| *p == privilege)
    }

    /// Whether target names of this kind live inside a schema and may be
    /// written as `schema.object`
    pub fn is_schema_qualified(&self) -> bool {
        matches!(
            self,
            TargetKind::Table | TargetKind::Sequence | TargetKind::Function | TargetKind::Type
        )
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword().to_lowercase())
    }
}

impl FromStr for TargetKind {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        TargetKind::VARIANTS
            .into_iter()
            .find(|kind| kind.keyword() == normalized)
            .ok_or_else(|| StatementError::UnsupportedTargetKind(s.to_string()))
    }
}

/// Privilege selection for a GRANT/REVOKE request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Privileges {
    #[default]
    All,
    List(Vec<String>),
}

impl Privileges {
    /// Parse a caller-supplied privilege string.
    ///
    /// Input is uppercased; `ALL` (or `ALL PRIVILEGES`) selects every privilege,
    /// anything else is a comma separated list. Entries are not checked here,
    /// see [`Privileges::validate`].
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_uppercase();
        if normalized == ALL_KEYWORD || normalized == "ALL PRIVILEGES" {
            return Privileges::All;
        }

        Privileges::List(
            normalized
                .split(',')
                .map(|p| p.trim().to_string())
                .collect(),
        )
    }

    /// Fails on the first privilege the kind does not accept
    pub fn validate(&self, kind: TargetKind) -> Result<(), StatementError> {
        match self {
            Privileges::All => Ok(()),
            Privileges::List(list) => match list.iter().find(|p| !kind.allows(p)) {
                Some(failed) => Err(StatementError::UnsupportedPrivilege {
                    privilege: failed.clone(),
                    kind,
                }),
                None => Ok(()),
            },
        }
    }

    /// The privilege clause between `GRANT`/`REVOKE` and `ON`
    pub fn clause(&self) -> String {
        match self {
            Privileges::All => "ALL PRIVILEGES".to_string(),
            Privileges::List(list) => list.join(","),
        }
    }
}

impl From<&str> for Privileges {
    fn from(input: &str) -> Self {
        Privileges::parse(input)
    }
}
