pub mod runner;

pub use runner::{MigrationRunner, StepReport};

use crate::catalog::{ALL_KEYWORD, TargetKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One schema or privilege change in a plan file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MigrationStep {
    CreateSchema {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        owner: Option<String>,
    },
    DropSchema {
        name: String,
        #[serde(default)]
        cascade: bool,
    },
    Grant {
        target: String,
        role: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        #[serde(default = "default_privileges")]
        privileges: String,
    },
    Revoke {
        target: String,
        role: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        #[serde(default = "default_privileges")]
        privileges: String,
    },
}

fn default_privileges() -> String {
    ALL_KEYWORD.to_string()
}

impl MigrationStep {
    /// Human readable summary printed before the step runs, e.g.
    /// `grant on table users to app_user`
    pub fn describe(&self, default_kind: TargetKind) -> String {
        match self {
            MigrationStep::CreateSchema { name, owner } => match owner.as_deref() {
                Some(owner) if !owner.is_empty() => {
                    format!("create schema {} with owner {}", name, owner)
                }
                _ => format!("create schema {}", name),
            },
            MigrationStep::DropSchema { name, cascade } => {
                if *cascade {
                    format!("drop schema {} cascade", name)
                } else {
                    format!("drop schema {}", name)
                }
            }
            MigrationStep::Grant {
                target, role, kind, ..
            } => format!(
                "grant on {} {} to {}",
                describe_kind(kind.as_deref(), default_kind),
                target,
                role
            ),
            MigrationStep::Revoke {
                target, role, kind, ..
            } => format!(
                "revoke on {} {} from {}",
                describe_kind(kind.as_deref(), default_kind),
                target,
                role
            ),
        }
    }
}

fn describe_kind(kind: Option<&str>, default_kind: TargetKind) -> String {
    match kind {
        Some(kind) => kind.trim().to_lowercase(),
        None => default_kind.to_string(),
    }
}

/// Ordered list of steps loaded from a YAML plan file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MigrationPlan {
    #[serde(default)]
    pub steps: Vec<MigrationStep>,
}

impl MigrationPlan {
    pub fn from_yaml(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents).context("Failed to parse migration plan")
    }
}

pub fn load_plan(path: &Path) -> Result<MigrationPlan> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read migration plan {}", path.display()))?;
    MigrationPlan::from_yaml(&contents)
        .with_context(|| format!("Invalid migration plan {}", path.display()))
}
