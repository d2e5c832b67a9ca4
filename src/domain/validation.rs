use once_cell::sync::Lazy;
use regex::Regex;

use super::{AppError, Scope};

static PROJECT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9-]{4,28}[a-z0-9]$").expect("valid project id regex"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}

/// Organization IDs are non-empty decimal strings.
pub fn is_valid_org_id(id: &str) -> bool {
    is_numeric_id(id)
}

/// Folder IDs follow the organization rule.
pub fn is_valid_folder_id(id: &str) -> bool {
    is_numeric_id(id)
}

/// Lowercase letter first, 6-30 characters, no trailing hyphen.
pub fn is_valid_project_id(id: &str) -> bool {
    PROJECT_ID.is_match(id)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Check one identifier, returning the user-facing reason on failure.
pub fn check_resource_id(scope: Scope, id: &str) -> Result<(), String> {
    match scope {
        Scope::Organization if !is_valid_org_id(id) => {
            Err(format!("Invalid organization ID: {id} (must be numeric)"))
        }
        Scope::Folder if !is_valid_folder_id(id) => {
            Err(format!("Invalid folder ID: {id} (must be numeric)"))
        }
        Scope::Project if !is_valid_project_id(id) => Err(format!(
            "Invalid project ID: {id} (must be 6-30 chars, lowercase letters, digits, hyphens)"
        )),
        _ => Ok(()),
    }
}

/// Validate every identifier and report all failures together.
pub fn validate_resources(scope: Scope, ids: &[String]) -> Result<(), AppError> {
    let errors: Vec<String> =
        ids.iter().filter_map(|id| check_resource_id(scope, id).err()).collect();
    if errors.is_empty() { Ok(()) } else { Err(AppError::InvalidResourceIds(errors)) }
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if is_valid_email(email) { Ok(()) } else { Err(AppError::InvalidEmail(email.to_string())) }
}

/// Split comma- or whitespace-separated identifiers, dropping empties.
pub fn parse_resource_ids(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
