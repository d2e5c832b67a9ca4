use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::render::{self, position_prefix};
use crate::domain::{AppError, OperationTally, PhaseReport, REQUIRED_APIS, Scope};
use crate::ports::{CloudCliPort, LONG_TIMEOUT, PromptPort};

use super::discovery;

fn enable_args(project_id: &str, api: &str) -> Vec<String> {
    vec![
        "services".into(),
        "enable".into(),
        api.to_string(),
        format!("--project={project_id}"),
        "--quiet".into(),
    ]
}

/// Enable each API on one project. Re-enabling is a no-op upstream.
pub fn enable_apis_on_project<C: CloudCliPort>(
    cloud: &C,
    project_id: &str,
    apis: &[&str],
    prefix: &str,
) -> OperationTally {
    println!("\n{prefix}Enabling APIs on project {project_id}...");
    let mut tally = OperationTally::default();

    for api in apis {
        match cloud.run(&enable_args(project_id, api), LONG_TIMEOUT) {
            Ok(_) => {
                println!("  \u{2713} {api}");
                tally.record_success();
            }
            Err(failure) => {
                println!("  \u{2717} {api} ({failure})");
                debug!(project_id, api, error = %failure, "enablement failed");
                tally.record_failure(*api, failure.to_string());
            }
        }
    }
    tally
}

/// Resolve target projects, confirm, and enable the required APIs.
///
/// Fails with `NoProjectsDiscovered` before any enablement call when the
/// scope resolves to nothing.
pub fn run_enable_apis<C: CloudCliPort, P: PromptPort>(
    ctx: &AppContext<C, P>,
    scope: Scope,
    resources: &[String],
    auto_approve: bool,
) -> Result<PhaseReport, AppError> {
    let projects = discovery::resolve_projects(ctx.cloud(), scope, resources);
    if projects.is_empty() {
        return Err(AppError::NoProjectsDiscovered);
    }

    println!("{}", render::api_plan(&projects, REQUIRED_APIS));
    if !auto_approve {
        println!();
        if !ctx.prompter().confirm("Proceed?")? {
            return Err(AppError::Cancelled);
        }
    }

    info!(projects = projects.len(), apis = REQUIRED_APIS.len(), "enabling APIs");
    let mut report = PhaseReport::default();
    for (index, project_id) in projects.iter().enumerate() {
        let prefix = position_prefix(index + 1, projects.len());
        let tally = enable_apis_on_project(ctx.cloud(), project_id, REQUIRED_APIS, &prefix);
        report.push(project_id.clone(), tally);
    }

    println!("{}", render::api_summary(&report));
    Ok(report)
}
