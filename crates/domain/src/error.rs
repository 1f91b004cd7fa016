//! Error types shared across the workspace.
//!
//! Dispatch-time errors ([`ApplianceNotFound`](SmartHomeError::ApplianceNotFound),
//! [`UnsupportedCommand`](SmartHomeError::UnsupportedCommand),
//! [`CommandNotApplicable`](SmartHomeError::CommandNotApplicable),
//! [`InvalidMode`](SmartHomeError::InvalidMode)) are recoverable and reported
//! to the operator. Duplicate registrations are fatal at startup and
//! [`TypeMismatch`](SmartHomeError::TypeMismatch) signals a programming error.

use crate::appliance_type::ApplianceType;
use crate::command::Command;

/// Top-level error for appliance control.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    /// No appliance of the requested type is registered.
    #[error("appliance not found: {0}")]
    ApplianceNotFound(ApplianceType),

    /// The command has no handler for any appliance type.
    #[error("unsupported command: {0}")]
    UnsupportedCommand(Command),

    /// The command exists but does not apply to this appliance type.
    #[error("cannot execute {command} on appliance type {appliance}")]
    CommandNotApplicable {
        command: Command,
        appliance: ApplianceType,
    },

    /// AC mode input could not be interpreted.
    #[error("invalid AC mode: {0}")]
    InvalidMode(#[from] InvalidModeError),

    /// Two appliances share the same type.
    #[error("duplicate appliance of type {0}")]
    DuplicateAppliance(ApplianceType),

    /// Two handlers were registered for the same command and appliance type.
    #[error("duplicate handler for {command} on appliance type {appliance}")]
    DuplicateHandler {
        command: Command,
        appliance: ApplianceType,
    },

    /// A handler received an appliance variant it does not operate on.
    #[error("handler for {expected} received a {actual} appliance")]
    TypeMismatch {
        expected: ApplianceType,
        actual: ApplianceType,
    },
}

/// Why an AC mode input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidModeError {
    /// No input was given.
    #[error("no mode given")]
    Missing,

    /// Not a number and not a known mode name.
    #[error("{0:?} is neither a number (0-4) nor a mode name (OFF, COOL, HEAT, FAN, AUTO)")]
    Unknown(String),

    /// A numeric code outside 0-4, rejected by policy.
    #[error("mode code {0} is out of range [0, 4]")]
    OutOfRange(i64),
}

/// A textual value did not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {input}")]
pub struct ParseValueError {
    /// What was being parsed, e.g. `"command"`.
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_command_not_applicable() {
        let err = SmartHomeError::CommandNotApplicable {
            command: Command::SetMode,
            appliance: ApplianceType::Light,
        };
        assert_eq!(
            err.to_string(),
            "cannot execute SET_MODE on appliance type LIGHT"
        );
    }

    #[test]
    fn should_convert_invalid_mode_error() {
        let err: SmartHomeError = InvalidModeError::Unknown("dry".to_string()).into();
        assert!(matches!(
            err,
            SmartHomeError::InvalidMode(InvalidModeError::Unknown(_))
        ));
        assert_eq!(
            err.to_string(),
            "invalid AC mode: \"dry\" is neither a number (0-4) nor a mode name (OFF, COOL, HEAT, FAN, AUTO)"
        );
    }

    #[test]
    fn should_display_out_of_range_code() {
        let err = InvalidModeError::OutOfRange(7);
        assert_eq!(err.to_string(), "mode code 7 is out of range [0, 4]");
    }

    #[test]
    fn should_display_type_mismatch() {
        let err = SmartHomeError::TypeMismatch {
            expected: ApplianceType::Fan,
            actual: ApplianceType::Light,
        };
        assert_eq!(err.to_string(), "handler for FAN received a LIGHT appliance");
    }
}
