use tracing::info;

use crate::domain::AppError;
use crate::ports::{CloudCliPort, DEFAULT_TIMEOUT, output_lines};

fn auth_list_args() -> Vec<String> {
    ["auth", "list", "--filter=status:ACTIVE", "--format=value(account)"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Return the active gcloud account, failing when nobody is logged in.
pub fn active_account<C: CloudCliPort>(cloud: &C) -> Result<String, AppError> {
    match cloud.run(&auth_list_args(), DEFAULT_TIMEOUT) {
        Ok(output) => {
            let account = output_lines(&output)
                .next()
                .ok_or_else(|| AppError::NotAuthenticated("No active account found.".into()))?;
            info!(account, "gcloud account is active");
            Ok(account.to_string())
        }
        Err(failure) => Err(AppError::NotAuthenticated(failure.to_string())),
    }
}
