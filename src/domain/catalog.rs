//! Fixed role and API tables.
//!
//! These never change during a run and have no runtime customization
//! surface; the only variation point is the [`Profile`] that picks a role
//! table.

use std::fmt;

use super::Scope;

const AUDITOR_ROLES: &[&str] = &[
    "roles/viewer",
    "roles/browser",
    "roles/iam.securityReviewer",
    "roles/cloudasset.viewer",
    "roles/logging.privateLogViewer",
    "roles/serviceusage.serviceUsageConsumer",
];

const POC_ORG_ROLES: &[&str] = &[
    "roles/resourcemanager.organizationViewer",
    "roles/viewer",
    "roles/logging.privateLogViewer",
    "roles/serviceusage.serviceUsageConsumer",
];

const POC_FOLDER_ROLES: &[&str] = &[
    "roles/resourcemanager.folderViewer",
    "roles/viewer",
    "roles/logging.privateLogViewer",
    "roles/serviceusage.serviceUsageConsumer",
];

const POC_PROJECT_ROLES: &[&str] =
    &["roles/viewer", "roles/logging.privateLogViewer", "roles/serviceusage.serviceUsageConsumer"];

/// APIs enabled on every target project, in execution order.
pub const REQUIRED_APIS: &[&str] = &[
    // Core
    "cloudresourcemanager.googleapis.com",
    "iam.googleapis.com",
    "logging.googleapis.com",
    "cloudasset.googleapis.com",
    "policyanalyzer.googleapis.com",
    "recommender.googleapis.com",
    "serviceusage.googleapis.com",
    // Compute & networking
    "compute.googleapis.com",
    // Serverless
    "run.googleapis.com",
    "cloudfunctions.googleapis.com",
    "eventarc.googleapis.com",
    "pubsub.googleapis.com",
    "apigateway.googleapis.com",
    // Data & storage
    "bigquery.googleapis.com",
    "storage-api.googleapis.com",
    "sqladmin.googleapis.com",
    "secretmanager.googleapis.com",
];

/// Which role table a run applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Full auditor onboarding.
    #[default]
    Standard,
    /// Reduced proof-of-concept grant.
    Poc,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Standard => "standard",
            Profile::Poc => "poc",
        }
    }

    pub fn from_name(name: &str) -> Option<Profile> {
        match name.to_lowercase().as_str() {
            "standard" => Some(Profile::Standard),
            "poc" => Some(Profile::Poc),
            _ => None,
        }
    }

    /// Ordered roles granted at `scope`.
    pub fn roles(&self, scope: Scope) -> &'static [&'static str] {
        match (self, scope) {
            (Profile::Standard, _) => AUDITOR_ROLES,
            (Profile::Poc, Scope::Organization) => POC_ORG_ROLES,
            (Profile::Poc, Scope::Folder) => POC_FOLDER_ROLES,
            (Profile::Poc, Scope::Project) => POC_PROJECT_ROLES,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
