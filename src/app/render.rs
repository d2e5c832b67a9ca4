//! Human-readable plan and summary blocks.

use crate::domain::{PhaseReport, REQUIRED_APIS, Scope};

use super::commands::onboard::OnboardPlan;

const RULE_WIDTH: usize = 64;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// `[i/n] ` when several items are processed, empty otherwise.
pub fn position_prefix(index: usize, total: usize) -> String {
    if total > 1 { format!("[{index}/{total}] ") } else { String::new() }
}

pub fn header() -> String {
    format!("\n{}\n         Tamnoon GCP Onboarding - Permission Setup\n{}", rule(), rule())
}

/// Plan shown before anything is changed.
pub fn plan_preview(plan: &OnboardPlan) -> String {
    let mut lines = vec![header(), String::new()];
    lines.push(format!("Scope:       {}", plan.scope.display_name()));
    if plan.resources.len() == 1 {
        lines.push(format!("Resource:    {}", plan.resources[0]));
    } else {
        lines.push(format!("Resources:   {}", plan.resources.join(", ")));
    }
    lines.push(format!("Member:      {}", plan.member));
    lines.push(String::new());
    if plan.resources.len() > 1 {
        lines.push(format!("Roles to assign per {}:", plan.scope));
    } else {
        lines.push("Roles to assign:".to_string());
    }
    lines.extend(plan.roles.iter().map(|role| format!("  - {role}")));
    if plan.enable_apis {
        lines.push(String::new());
        lines.push(format!("API enablement: Yes ({} APIs per project)", REQUIRED_APIS.len()));
    }
    lines.join("\n")
}

pub fn role_summary(report: &PhaseReport) -> String {
    let mut lines = vec![String::new(), rule(), "ROLE ASSIGNMENT SUMMARY".to_string()];
    match report.resources.as_slice() {
        [single] => {
            let tally = &single.tally;
            if tally.is_clean() {
                lines.push(format!("SUCCESS: {}/{} roles assigned", tally.succeeded, tally.total()));
            } else {
                lines.push(format!(
                    "PARTIAL: {}/{} roles assigned ({} failed)",
                    tally.succeeded,
                    tally.total(),
                    tally.failed()
                ));
                lines.extend(
                    tally.failures.iter().map(|f| format!("  {}: {}", f.item, f.error)),
                );
            }
        }
        resources => {
            lines.push(format!("SUMMARY: {} resources processed", resources.len()));
            for result in resources {
                let tally = &result.tally;
                if tally.is_clean() {
                    lines.push(format!(
                        "  {}: {}/{} roles \u{2713}",
                        result.resource_id,
                        tally.succeeded,
                        tally.total()
                    ));
                } else {
                    lines.push(format!(
                        "  {}: {}/{} roles ({} failed)",
                        result.resource_id,
                        tally.succeeded,
                        tally.total(),
                        tally.failed()
                    ));
                }
            }
        }
    }
    lines.push(rule());
    lines.join("\n")
}

/// APIs, target projects and operation count before enabling.
pub fn api_plan(projects: &[String], apis: &[&str]) -> String {
    let mut lines = vec![String::new(), format!("APIs to enable ({}):", apis.len())];
    lines.extend(apis.iter().map(|api| format!("  - {api}")));
    lines.push(String::new());
    lines.push(format!("Target projects ({}):", projects.len()));
    lines.extend(projects.iter().map(|project| format!("  - {project}")));
    lines.push(String::new());
    lines.push(format!(
        "Total operations: {} APIs x {} projects = {}",
        apis.len(),
        projects.len(),
        apis.len() * projects.len()
    ));
    lines.join("\n")
}

pub fn api_summary(report: &PhaseReport) -> String {
    let mut lines = vec![String::new(), rule(), "API ENABLEMENT SUMMARY".to_string()];
    match report.resources.as_slice() {
        [single] => {
            let tally = &single.tally;
            if tally.is_clean() {
                lines.push(format!(
                    "SUCCESS: {}/{} APIs enabled on {}",
                    tally.succeeded,
                    tally.total(),
                    single.resource_id
                ));
            } else {
                lines.push(format!(
                    "PARTIAL: {}/{} APIs enabled on {} ({} failed)",
                    tally.succeeded,
                    tally.total(),
                    single.resource_id,
                    tally.failed()
                ));
                lines.extend(
                    tally.failures.iter().map(|f| format!("  {}: {}", f.item, f.error)),
                );
            }
        }
        projects => {
            let total = report.total_succeeded() + report.total_failed();
            lines.push(format!(
                "{} projects processed: {}/{} API enablements succeeded",
                projects.len(),
                report.total_succeeded(),
                total
            ));
            for result in projects {
                let tally = &result.tally;
                if tally.is_clean() {
                    lines.push(format!(
                        "  {}: {}/{} \u{2713}",
                        result.resource_id,
                        tally.succeeded,
                        tally.total()
                    ));
                } else {
                    lines.push(format!(
                        "  {}: {}/{} ({} failed)",
                        result.resource_id,
                        tally.succeeded,
                        tally.total(),
                        tally.failed()
                    ));
                }
            }
        }
    }
    lines.push(rule());
    lines.join("\n")
}

/// Re-run command that adds API enablement for the same resources.
pub fn enable_apis_hint(scope: Scope, resources: &[String]) -> String {
    let ids = match scope {
        Scope::Organization => resources.first().cloned().unwrap_or_default(),
        Scope::Folder | Scope::Project => resources.join(" "),
    };
    format!(
        "To enable required GCP APIs on projects in scope, re-run with --enable-apis:\n  \
         gcp-onboard --scope {scope} {} {ids} --enable-apis\n",
        scope.id_flag()
    )
}
