//! Onboarding pipeline: validate, preview, confirm, bind roles, enable APIs.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::render;
use crate::domain::validation::{validate_email, validate_resources};
use crate::domain::{AppError, Member, MemberType, PhaseReport, Profile, Scope};
use crate::ports::{CloudCliPort, PromptPort};

use super::{assign_roles, auth, enable_apis};

/// Raw inputs from flags or prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardRequest {
    pub scope: Scope,
    pub resources: Vec<String>,
    pub email: String,
    pub member_type: MemberType,
    pub profile: Profile,
    pub enable_apis: bool,
}

/// Validated inputs ready for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardPlan {
    pub scope: Scope,
    pub resources: Vec<String>,
    pub member: Member,
    pub profile: Profile,
    pub roles: &'static [&'static str],
    pub enable_apis: bool,
}

/// How the API phase ended.
#[derive(Debug)]
pub enum ApiPhase {
    Completed(PhaseReport),
    /// Nothing was enabled: no projects resolved, or the user declined.
    Aborted(AppError),
}

#[derive(Debug)]
pub struct OnboardOutcome {
    pub roles: PhaseReport,
    pub apis: Option<ApiPhase>,
}

impl OnboardOutcome {
    /// 0 only when every requested operation succeeded.
    pub fn exit_code(&self) -> i32 {
        let api_failed = match &self.apis {
            None => false,
            Some(ApiPhase::Completed(report)) => report.has_failures(),
            Some(ApiPhase::Aborted(_)) => true,
        };
        if self.roles.has_failures() || api_failed { 1 } else { 0 }
    }
}

/// Reject empty or malformed identifier lists.
///
/// Organization scope keeps only the first identifier.
pub fn normalize_resources(
    scope: Scope,
    mut resources: Vec<String>,
) -> Result<Vec<String>, AppError> {
    if resources.is_empty() {
        return Err(AppError::NoResources);
    }
    if !scope.accepts_multiple() && resources.len() > 1 {
        println!("Organization scope only supports a single organization ID.");
        warn!(
            kept = %resources[0],
            dropped = resources.len() - 1,
            "extra organization IDs ignored"
        );
        resources.truncate(1);
    }
    validate_resources(scope, &resources)?;
    Ok(resources)
}

/// Validate a request into an executable plan.
pub fn prepare(request: OnboardRequest) -> Result<OnboardPlan, AppError> {
    let OnboardRequest { scope, resources, email, member_type, profile, enable_apis } = request;

    let resources = normalize_resources(scope, resources)?;
    validate_email(&email)?;

    Ok(OnboardPlan {
        scope,
        resources,
        member: Member::new(email, member_type),
        profile,
        roles: profile.roles(scope),
        enable_apis,
    })
}

/// Flag-driven run: validate, check auth, then execute.
pub fn run<C: CloudCliPort, P: PromptPort>(
    ctx: &AppContext<C, P>,
    request: OnboardRequest,
    auto_approve: bool,
) -> Result<OnboardOutcome, AppError> {
    let plan = prepare(request)?;
    auth::active_account(ctx.cloud())?;
    execute(ctx, &plan, auto_approve)
}

/// Show the plan, confirm, and run both phases.
pub fn execute<C: CloudCliPort, P: PromptPort>(
    ctx: &AppContext<C, P>,
    plan: &OnboardPlan,
    auto_approve: bool,
) -> Result<OnboardOutcome, AppError> {
    println!("{}", render::plan_preview(plan));

    if !auto_approve {
        println!();
        if !ctx.prompter().confirm("Proceed?")? {
            return Err(AppError::Cancelled);
        }
    }

    info!(
        scope = %plan.scope,
        profile = %plan.profile,
        member = %plan.member,
        "starting role assignment"
    );
    let roles = assign_roles::assign_roles(
        ctx.cloud(),
        plan.scope,
        &plan.resources,
        &plan.member,
        plan.roles,
    );
    println!("{}", render::role_summary(&roles));

    let apis = if plan.enable_apis {
        let phase =
            match enable_apis::run_enable_apis(ctx, plan.scope, &plan.resources, auto_approve) {
                Ok(report) => ApiPhase::Completed(report),
                Err(err) => {
                    println!("{err}");
                    ApiPhase::Aborted(err)
                }
            };
        Some(phase)
    } else {
        println!("{}", render::enable_apis_hint(plan.scope, &plan.resources));
        None
    };

    Ok(OnboardOutcome { roles, apis })
}
