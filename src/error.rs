//! Typed errors returned by statement rendering

use crate::catalog::TargetKind;

/// Validation failures raised before any SQL is rendered.
///
/// A builder call either returns a complete statement or one of these; it
/// never hands back a partially rendered string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatementError {
    #[error("Unsupported target kind '{0}'")]
    UnsupportedTargetKind(String),

    #[error("Privilege '{privilege}' not supported for {kind}")]
    UnsupportedPrivilege { privilege: String, kind: TargetKind },

    #[error("Invalid {context} name '{name}': {reason}")]
    InvalidIdentifier {
        context: &'static str,
        name: String,
        reason: &'static str,
    },
}

impl StatementError {
    pub(crate) fn invalid_identifier(
        context: &'static str,
        name: &str,
        reason: &'static str,
    ) -> Self {
        StatementError::InvalidIdentifier {
            context,
            name: name.to_string(),
            reason,
        }
    }
}
