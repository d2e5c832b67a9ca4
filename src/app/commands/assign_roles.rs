use tracing::{debug, info};

use crate::app::render::position_prefix;
use crate::domain::{Member, OperationTally, PhaseReport, Scope};
use crate::ports::{CloudCliPort, DEFAULT_TIMEOUT};

/// Arguments for one `add-iam-policy-binding` call.
pub fn binding_args(scope: Scope, resource_id: &str, member: &Member, role: &str) -> Vec<String> {
    let mut args: Vec<String> = scope.binding_command().iter().map(|s| s.to_string()).collect();
    args.push("add-iam-policy-binding".into());
    args.push(resource_id.to_string());
    args.push(format!("--member={member}"));
    args.push(format!("--role={role}"));
    args.push("--quiet".into());
    args
}

/// Bind every role on one resource. A failed role never stops the rest.
pub fn assign_roles_to_resource<C: CloudCliPort>(
    cloud: &C,
    scope: Scope,
    resource_id: &str,
    member: &Member,
    roles: &[&str],
    prefix: &str,
) -> OperationTally {
    println!("\n{prefix}Assigning roles to {scope} {resource_id}...");
    let mut tally = OperationTally::default();

    for role in roles {
        match cloud.run(&binding_args(scope, resource_id, member, role), DEFAULT_TIMEOUT) {
            Ok(_) => {
                println!("  \u{2713} {role}");
                tally.record_success();
            }
            Err(failure) => {
                println!("  \u{2717} {role} ({failure})");
                debug!(resource_id, role, error = %failure, "binding failed");
                tally.record_failure(*role, failure.to_string());
            }
        }
    }
    tally
}

/// Bind roles on each resource in input order.
pub fn assign_roles<C: CloudCliPort>(
    cloud: &C,
    scope: Scope,
    resources: &[String],
    member: &Member,
    roles: &[&str],
) -> PhaseReport {
    info!(%scope, resources = resources.len(), roles = roles.len(), "assigning roles");
    let mut report = PhaseReport::default();
    for (index, resource_id) in resources.iter().enumerate() {
        let prefix = position_prefix(index + 1, resources.len());
        let tally = assign_roles_to_resource(cloud, scope, resource_id, member, roles, &prefix);
        report.push(resource_id.clone(), tally);
    }
    report
}
