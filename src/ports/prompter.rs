use crate::domain::AppError;

/// Interactive questions asked during onboarding.
///
/// Implementations return `AppError::Cancelled` when the user interrupts
/// or input ends.
pub trait PromptPort {
    /// Yes/no question. Only an explicit yes returns `true`.
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;

    /// Free text, falling back to `default` on empty input.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError>;

    /// Pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError>;
}

impl<T: PromptPort + ?Sized> PromptPort for &T {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        (**self).confirm(prompt)
    }

    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        (**self).input(prompt, default)
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, AppError> {
        (**self).select(prompt, items, default)
    }
}

/// Affirmative answers accepted on a plain-text confirmation.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
