use splitty_application::{LoadError, SplittyError};
use splitty_infrastructure::InfraError;

/// Formats a pipeline error for the terminal.
pub fn format_error(error: &SplittyError) -> String {
    match error {
        SplittyError::Load(LoadError::UnknownParticipant { role, name, .. }) => {
            format!("Error: {error}\nAdd '{name}' to the configured {role}s or fix the record.")
        }
        SplittyError::InternalConsistency(_) | SplittyError::ImbalancedLedger(_) => {
            format!("Error: {error}\nThis is a bug; the input was valid.")
        }
        SplittyError::Load(_) | SplittyError::Source(_) => format!("Error: {error}"),
    }
}

pub fn format_infra_error(error: &InfraError) -> String {
    match error {
        InfraError::InvalidConfig { source, .. } => format!("Error: {error}\n{source}"),
        _ => format!("Error: {error}"),
    }
}
