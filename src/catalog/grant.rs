//! GRANT/REVOKE requests
use super::privilege::{Privileges, TargetKind};
use crate::error::StatementError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantRequest {
    pub kind: TargetKind,
    pub target: String,
    pub role: String,
    pub privileges: Privileges,
}

impl GrantRequest {
    /// Build a request from loosely typed input, normalizing the target kind
    /// and the privilege list.
    ///
    /// The kind is checked before the privileges, so an unknown kind is always
    /// reported as [`StatementError::UnsupportedTargetKind`].
    pub fn parse(
        target: &str,
        role: &str,
        kind: &str,
        privileges: &str,
    ) -> Result<Self, StatementError> {
        let kind: TargetKind = kind.parse()?;
        let privileges = Privileges::parse(privileges);
        privileges.validate(kind)?;

        Ok(Self {
            kind,
            target: target.to_string(),
            role: role.to_string(),
            privileges,
        })
    }
}
