use clap::{Parser, Subcommand};
use classkeep_config::{AuthzConfig, LoggingConfig};
use dotenvy::dotenv;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "classkeep-cli")]
#[command(about = "Classkeep CLI - Inspect permissions and evaluate access decisions", long_about = None)]
struct Cli {
    /// Print listings and decisions as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every permission in the catalog
    Permissions {
        /// Only list members of this group
        #[arg(short = 'g', long)]
        group: Option<String>,
    },
    /// List permission groups with their member permissions
    Groups,
    /// Show the default permissions of a role
    Defaults {
        /// Role tag (admin, manager, teacher, volunteer)
        role: String,
    },
    /// Evaluate whether a role with the given grants may access a permission or group
    Check {
        /// Role tag; prompted for when omitted
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Granted permission id (repeatable)
        #[arg(long = "grant")]
        grants: Vec<String>,

        /// Permission id to check
        #[arg(short = 'p', long, conflicts_with = "group", required_unless_present = "group")]
        permission: Option<String>,

        /// Group id to check
        #[arg(short = 'g', long)]
        group: Option<String>,

        /// Evaluate the grants as given, without the empty-list teacher fallback
        #[arg(long)]
        raw: bool,
    },
    /// Show the permissions in force for a role and stored grant list
    Effective {
        /// Role tag; prompted for when omitted
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Stored permission id (repeatable)
        #[arg(long = "grant")]
        grants: Vec<String>,
    },
    /// Show the permission tree and visible groups of a user from a directory file
    User {
        /// User id to look up
        user_id: String,

        /// JSON file mapping user ids to { role, permissions } records
        #[arg(short = 'd', long)]
        directory: PathBuf,
    },
    /// Validate a catalog definition file
    Validate {
        /// Path to the JSON catalog definition
        path: PathBuf,
    },
}

fn main() {
    dotenv().ok();

    // A subscriber may already be installed by an embedding process.
    let _ = classkeep_observability::init_logging(&LoggingConfig::from_env());

    let cli = Cli::parse();
    let json = cli.json;

    let result = match cli.command {
        Commands::Validate { path } => commands::validate(&path),
        command => match classkeep_authz::AccessControl::from_config(&AuthzConfig::from_env()) {
            Ok(access) => dispatch(&access, command, json),
            Err(e) => {
                eprintln!("\n❌ Failed to load permission catalog: {}", e);
                std::process::exit(1);
            }
        },
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn dispatch(
    access: &classkeep_authz::AccessControl,
    command: Commands,
    json: bool,
) -> anyhow::Result<i32> {
    match command {
        Commands::Permissions { group } => commands::permissions(access, group.as_deref(), json),
        Commands::Groups => commands::groups(access, json),
        Commands::Defaults { role } => commands::defaults(access, &role, json),
        Commands::Check {
            role,
            grants,
            permission,
            group,
            raw,
        } => {
            let role = commands::resolve_role_tag(role)?;
            let target = match (permission, group) {
                (Some(permission), _) => commands::Target::Permission(permission),
                (None, Some(group)) => commands::Target::Group(group),
                (None, None) => anyhow::bail!("either --permission or --group is required"),
            };
            commands::check(access, &role, grants, target, raw, json)
        }
        Commands::Effective { role, grants } => {
            let role = commands::resolve_role_tag(role)?;
            commands::effective(access, &role, grants, json)
        }
        Commands::User { user_id, directory } => {
            commands::user(access, &user_id, &directory, json)
        }
        Commands::Validate { path } => commands::validate(&path),
    }
}
