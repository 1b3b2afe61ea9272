//! Error taxonomy shared by every SysPlanner crate.
//!
//! Both variants are caller-recoverable input errors. Persistence and
//! configuration failures live in their own crates (`StoreError`,
//! `ConfigError`) and converge in `planner-cli`.

use thiserror::Error;

use crate::enums::ValidationReason;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A supplied field was missing or malformed.
    #[error("Validation error ({reason}): {}", reason.message())]
    Validation { reason: ValidationReason },

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },
}

impl CoreError {
    #[must_use]
    pub fn task_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "task".to_string(),
            id: id.to_string(),
        }
    }

    /// The validation reason, if this is a validation failure.
    #[must_use]
    pub const fn validation_reason(&self) -> Option<ValidationReason> {
        match self {
            Self::Validation { reason } => Some(*reason),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ValidationReason> for CoreError {
    fn from(reason: ValidationReason) -> Self {
        Self::Validation { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_carries_code_and_text() {
        let err = CoreError::from(ValidationReason::BadDateFormat);
        assert_eq!(
            err.to_string(),
            "Validation error (bad_date_format): date must be in YYYY-MM-DD format"
        );
        assert_eq!(
            err.validation_reason(),
            Some(ValidationReason::BadDateFormat)
        );
    }

    #[test]
    fn not_found_names_the_task() {
        let err = CoreError::task_not_found("tsk-00000000");
        assert_eq!(err.to_string(), "Entity not found: task tsk-00000000");
        assert_eq!(err.validation_reason(), None);
    }
}
