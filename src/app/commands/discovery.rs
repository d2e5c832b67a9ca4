//! Resolve the active projects under an organization or folder tree.
//!
//! Listing failures are never fatal here: a failed branch contributes no
//! projects and the walk continues.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::Scope;
use crate::ports::{CloudCliPort, DEFAULT_TIMEOUT, LONG_TIMEOUT, output_lines};

const FOLDER_PREFIX: &str = "folders/";

fn org_projects_args() -> Vec<String> {
    vec![
        "projects".into(),
        "list".into(),
        "--filter=lifecycleState:ACTIVE".into(),
        "--format=value(projectId)".into(),
    ]
}

fn folder_projects_args(folder_id: &str) -> Vec<String> {
    vec![
        "projects".into(),
        "list".into(),
        format!("--filter=parent.id={folder_id} AND lifecycleState:ACTIVE"),
        "--format=value(projectId)".into(),
    ]
}

fn child_folders_args(folder_id: &str) -> Vec<String> {
    vec![
        "resource-manager".into(),
        "folders".into(),
        "list".into(),
        format!("--folder={folder_id}"),
        "--format=value(name)".into(),
    ]
}

/// Ordered project list that ignores repeats.
#[derive(Debug, Default)]
struct ProjectSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl ProjectSet {
    fn insert(&mut self, project_id: &str) {
        if self.seen.insert(project_id.to_string()) {
            self.ordered.push(project_id.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Active projects visible under the organization.
pub fn projects_in_org<C: CloudCliPort>(cloud: &C, org_id: &str) -> Vec<String> {
    println!("\nDiscovering projects in organization {org_id}...");
    match cloud.run(&org_projects_args(), LONG_TIMEOUT) {
        Ok(output) => {
            let mut projects = ProjectSet::default();
            output_lines(&output).for_each(|project| projects.insert(project));
            let projects = projects.into_vec();
            println!("  Found {} active project(s)", projects.len());
            projects
        }
        Err(failure) => {
            warn!(org_id, error = %failure, "organization project listing failed");
            println!("  Failed to list projects: {failure}");
            Vec::new()
        }
    }
}

/// Active projects anywhere below the given folders.
///
/// Depth-first with an explicit stack; each folder is expanded at most once
/// even if the hierarchy loops back on itself.
pub fn projects_in_folders<C: CloudCliPort>(cloud: &C, folder_ids: &[String]) -> Vec<String> {
    println!("\nDiscovering projects in {} folder(s)...", folder_ids.len());

    let mut visited: HashSet<String> = HashSet::new();
    let mut projects = ProjectSet::default();
    let mut stack: Vec<String> = folder_ids.iter().rev().cloned().collect();

    while let Some(folder_id) = stack.pop() {
        if !visited.insert(folder_id.clone()) {
            continue;
        }
        debug!(folder_id = %folder_id, "expanding folder");

        match cloud.run(&folder_projects_args(&folder_id), LONG_TIMEOUT) {
            Ok(output) => output_lines(&output).for_each(|project| projects.insert(project)),
            Err(failure) => {
                warn!(folder_id = %folder_id, error = %failure, "listing folder projects failed");
            }
        }

        match cloud.run(&child_folders_args(&folder_id), DEFAULT_TIMEOUT) {
            Ok(output) => {
                let children: Vec<String> = output_lines(&output)
                    .map(|name| name.strip_prefix(FOLDER_PREFIX).unwrap_or(name).to_string())
                    .collect();
                stack.extend(children.into_iter().rev());
            }
            Err(failure) => {
                warn!(folder_id = %folder_id, error = %failure, "listing child folders failed");
            }
        }
    }

    let projects = projects.into_vec();
    println!("  Found {} active project(s)", projects.len());
    projects
}

/// Projects an API enablement run targets for `scope`.
pub fn resolve_projects<C: CloudCliPort>(
    cloud: &C,
    scope: Scope,
    resources: &[String],
) -> Vec<String> {
    match scope {
        Scope::Project => resources.to_vec(),
        Scope::Organization => match resources.first() {
            Some(org_id) => projects_in_org(cloud, org_id),
            None => Vec::new(),
        },
        Scope::Folder => projects_in_folders(cloud, resources),
    }
}
