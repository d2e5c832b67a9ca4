//! CLI Adapter.

use clap::Parser;

use crate::app::config::OnboardConfig;
use crate::app::logging;
use crate::domain::validation::parse_resource_ids;
use crate::domain::{AppError, DEFAULT_MEMBER, MemberType, Profile, Scope};
use crate::{OnboardOutcome, OnboardRequest};

#[derive(Parser, Debug)]
#[command(name = "gcp-onboard")]
#[command(version)]
#[command(
    about = "Assign Tamnoon auditor roles and enable required APIs across GCP resources",
    long_about = None,
    after_help = "Examples:
  gcp-onboard
  gcp-onboard --scope organization --org-id 123456789
  gcp-onboard --scope folder --folder-ids 111 222 333
  gcp-onboard --scope project --project-ids proj-a proj-b -y
  gcp-onboard --scope project --project-ids proj-a --enable-apis
  gcp-onboard --scope organization --org-id 123456789 --member team@company.com --member-type group"
)]
struct Cli {
    /// Scope level: organization, folder, or project. Omit for interactive mode
    #[arg(long)]
    scope: Option<String>,
    /// Organization ID (organization scope)
    #[arg(long, value_name = "ORG_ID")]
    org_id: Option<String>,
    /// One or more folder IDs (folder scope)
    #[arg(long, value_name = "ID", num_args = 1..)]
    folder_ids: Vec<String>,
    /// One or more project IDs (project scope)
    #[arg(long, value_name = "ID", num_args = 1..)]
    project_ids: Vec<String>,
    /// Member email that receives the roles
    #[arg(long, default_value = DEFAULT_MEMBER)]
    member: String,
    /// Member type: user, serviceAccount, or group
    #[arg(long, default_value = "user")]
    member_type: String,
    /// Enable required GCP APIs on projects in scope
    #[arg(long)]
    enable_apis: bool,
    /// Skip confirmation prompts
    #[arg(short = 'y', long)]
    yes: bool,
    /// Role set to grant: standard or poc
    #[arg(long, default_value = "standard")]
    profile: String,
    /// Log gcloud invocations to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = OnboardConfig::from_env();
    logging::init_logging(config.log_filter.as_deref(), cli.verbose);

    let result: Result<i32, AppError> = dispatch(cli, config).map(|outcome| outcome.exit_code());

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(AppError::Cancelled) => {
            println!("Cancelled.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn dispatch(cli: Cli, config: OnboardConfig) -> Result<OnboardOutcome, AppError> {
    let profile = parse_profile(&cli.profile)?;
    match cli.scope.as_deref() {
        None => crate::onboard_interactive(&config, profile),
        Some(scope) => {
            let request = build_request(&cli, scope, profile)?;
            crate::onboard(&config, request, cli.yes)
        }
    }
}

fn parse_profile(name: &str) -> Result<Profile, AppError> {
    Profile::from_name(name).ok_or_else(|| AppError::InvalidProfile(name.to_string()))
}

/// Flag values may also be comma separated.
fn split_ids(values: &[String]) -> Vec<String> {
    values.iter().flat_map(|value| parse_resource_ids(value)).collect()
}

fn build_request(cli: &Cli, scope: &str, profile: Profile) -> Result<OnboardRequest, AppError> {
    let scope = Scope::from_name(scope).ok_or_else(|| AppError::InvalidScope(scope.to_string()))?;
    let resources = match scope {
        Scope::Organization => cli.org_id.iter().cloned().collect(),
        Scope::Folder => split_ids(&cli.folder_ids),
        Scope::Project => split_ids(&cli.project_ids),
    };
    if resources.is_empty() {
        return Err(AppError::MissingScopeArgument {
            scope: scope.to_string(),
            flag: scope.id_flag(),
        });
    }
    let member_type = MemberType::from_name(&cli.member_type)
        .ok_or_else(|| AppError::InvalidMemberType(cli.member_type.clone()))?;

    Ok(OnboardRequest {
        scope,
        resources,
        email: cli.member.trim().to_string(),
        member_type,
        profile,
        enable_apis: cli.enable_apis,
    })
}
