//! Error types for the action and form layers.
//!
//! Store actions themselves never fail; these errors come from the gating
//! the screens apply before forwarding to the store.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Entity lookup missed
    #[error("{kind} introuvable: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Grade entry on a session that is neither draft nor returned
    #[error("Session {0} verrouillée: les notes ne sont plus modifiables")]
    SessionLocked(String),

    /// Edit on an attendance session that was already submitted
    #[error("Appel déjà soumis pour la session {0}")]
    AttendanceSubmitted(String),

    /// Grade above its scale
    #[error("Note {value} supérieure au barème /{max}")]
    GradeOutOfRange { value: f64, max: u8 },

    /// Text that does not parse as a grade
    #[error("Saisie invalide: {0}")]
    InvalidInput(String),

    /// Seed file could not be read or decoded
    #[error("Seed error: {0}")]
    Seed(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }

    pub fn seed(msg: impl Into<String>) -> Self {
        Self::Seed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_entity() {
        let err = AppError::not_found("Session", "GS9");
        assert_eq!(err.to_string(), "Session introuvable: GS9");

        let err = AppError::GradeOutOfRange { value: 21.0, max: 20 };
        assert!(err.to_string().contains("/20"));
    }
}
