use std::io;

use thiserror::Error;

/// Library-wide error type for gcp-onboard operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// One or more resource identifiers failed the scope format check.
    #[error("Validation errors:\n{}", format_bullets(.0))]
    InvalidResourceIds(Vec<String>),

    /// Member email does not look like an email address.
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// The chosen scope needs an identifier flag that was not supplied.
    #[error("{flag} is required for {scope} scope")]
    MissingScopeArgument { scope: String, flag: &'static str },

    /// Scope name is not one of organization, folder, project.
    #[error("Invalid scope '{0}': must be one of organization, folder, project")]
    InvalidScope(String),

    /// Member type is not one of user, serviceAccount, group.
    #[error("Invalid member type '{0}': must be one of user, serviceAccount, group")]
    InvalidMemberType(String),

    /// Profile name is not one of standard, poc.
    #[error("Invalid profile '{0}': must be one of standard, poc")]
    InvalidProfile(String),

    /// No active gcloud account.
    #[error("Not authenticated with gcloud. {0}\nPlease run 'gcloud auth login' first.")]
    NotAuthenticated(String),

    /// User declined the confirmation or interrupted a prompt.
    #[error("Cancelled.")]
    Cancelled,

    /// Resource input resolved to an empty list.
    #[error("No resource IDs provided.")]
    NoResources,

    /// Discovery found nothing to enable APIs on.
    #[error("No projects found. Cannot enable APIs.")]
    NoProjectsDiscovered,

    /// Menu answer outside the offered choices.
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// Prompt could not be rendered or read.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },
}

fn format_bullets(items: &[String]) -> String {
    items.iter().map(|item| format!("  - {item}")).collect::<Vec<_>>().join("\n")
}

impl AppError {
    pub fn prompt_error<S: Into<String>>(what: S, details: impl std::fmt::Display) -> Self {
        AppError::Prompt { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers branching on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidResourceIds(_)
            | AppError::InvalidEmail(_)
            | AppError::MissingScopeArgument { .. }
            | AppError::InvalidScope(_)
            | AppError::InvalidMemberType(_)
            | AppError::InvalidProfile(_)
            | AppError::InvalidChoice(_)
            | AppError::NoResources => io::ErrorKind::InvalidInput,
            AppError::NotAuthenticated(_) => io::ErrorKind::PermissionDenied,
            AppError::Cancelled => io::ErrorKind::Interrupted,
            AppError::NoProjectsDiscovered => io::ErrorKind::NotFound,
            AppError::Prompt { .. } => io::ErrorKind::Other,
        }
    }
}
