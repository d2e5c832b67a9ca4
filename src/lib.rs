//! gcp-onboard: grant auditor IAM roles and enable required APIs across GCP resources.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{GcloudCommandAdapter, TerminalPrompter};
use app::AppContext;
use app::commands::{interactive, onboard as onboard_cmd};

pub use app::commands::onboard::{ApiPhase, OnboardOutcome, OnboardPlan, OnboardRequest};
pub use app::config::OnboardConfig;
pub use domain::{AppError, Member, MemberType, PhaseReport, Profile, Scope};

fn context(config: &OnboardConfig) -> AppContext<GcloudCommandAdapter, TerminalPrompter> {
    let cloud = GcloudCommandAdapter::new(config.gcloud_binary.clone());
    AppContext::new(cloud, TerminalPrompter::new())
}

/// Run onboarding from already-parsed inputs.
///
/// Validates every identifier and the member email, checks for an active
/// gcloud account, shows the plan, and asks for confirmation unless
/// `auto_approve` is set.
pub fn onboard(
    config: &OnboardConfig,
    request: OnboardRequest,
    auto_approve: bool,
) -> Result<OnboardOutcome, AppError> {
    onboard_cmd::run(&context(config), request, auto_approve)
}

/// Run onboarding by prompting for every input.
pub fn onboard_interactive(
    config: &OnboardConfig,
    profile: Profile,
) -> Result<OnboardOutcome, AppError> {
    interactive::run(&context(config), profile)
}
