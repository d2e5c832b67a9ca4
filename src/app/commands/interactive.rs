//! Prompt-driven onboarding used when no scope flag is given.

use crate::app::AppContext;
use crate::app::render;
use crate::domain::validation::{parse_resource_ids, validate_email};
use crate::domain::{AppError, DEFAULT_MEMBER, MemberType, Profile, Scope};
use crate::ports::{CloudCliPort, PromptPort};

use super::auth;
use super::onboard::{self, OnboardOutcome, OnboardRequest};

fn scope_label(scope: Scope) -> String {
    match scope {
        Scope::Organization => "Organization (recommended)".to_string(),
        other => other.display_name().to_string(),
    }
}

fn resource_prompt(scope: Scope) -> &'static str {
    match scope {
        Scope::Organization => "Enter organization ID",
        Scope::Folder => "Enter folder ID(s) (comma or space separated)",
        Scope::Project => "Enter project ID(s) (comma or space separated)",
    }
}

fn prompt_scope<P: PromptPort>(prompter: &P) -> Result<Scope, AppError> {
    let items: Vec<String> = Scope::ALL.iter().map(|scope| scope_label(*scope)).collect();
    let index = prompter.select("Select scope", &items, 0)?;
    Ok(Scope::ALL[index])
}

fn prompt_member_type<P: PromptPort>(prompter: &P) -> Result<MemberType, AppError> {
    let items: Vec<String> = MemberType::ALL.iter().map(|t| t.as_str().to_string()).collect();
    let index = prompter.select("Member type", &items, 0)?;
    Ok(MemberType::ALL[index])
}

/// Ask for everything, then run the same pipeline as flag mode.
pub fn run<C: CloudCliPort, P: PromptPort>(
    ctx: &AppContext<C, P>,
    profile: Profile,
) -> Result<OnboardOutcome, AppError> {
    let prompter = ctx.prompter();
    println!("{}", render::header());

    let account = auth::active_account(ctx.cloud())?;
    println!("\nAuthenticated as: {account}\n");

    let scope = prompt_scope(prompter)?;

    let raw = prompter.input(resource_prompt(scope), None)?;
    let resources = onboard::normalize_resources(scope, parse_resource_ids(&raw))?;

    let email = prompter.input("Enter member email", Some(DEFAULT_MEMBER))?;
    validate_email(&email)?;
    let member_type = prompt_member_type(prompter)?;

    let enable_apis = prompter.confirm("Enable required GCP APIs on projects in scope?")?;

    let plan = onboard::prepare(OnboardRequest {
        scope,
        resources,
        email,
        member_type,
        profile,
        enable_apis,
    })?;
    onboard::execute(ctx, &plan, false)
}
