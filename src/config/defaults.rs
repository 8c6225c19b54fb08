use crate::catalog::TargetKind;
use crate::config::types::*;

// Config, Database derive Default

impl Default for Statements {
    fn default() -> Self {
        Self {
            default_kind: TargetKind::Table,
            strict_identifiers: true,
        }
    }
}
