use crate::core::dashboard::{DashboardTab, EXPORT_FILE_NAME};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "Edit portfolio profile, projects and skills")]
pub struct CliConfig {
    /// Path to TOML configuration file (optional)
    #[arg(long, global = true, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Override [storage].data_dir
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the portfolio, or one section of it
    Show {
        #[arg(long, value_enum)]
        tab: Option<DashboardTab>,
    },
    /// Unlock editing for this data directory
    Login {
        #[arg(long)]
        password: String,
    },
    /// Lock editing again
    Logout,
    /// Change profile fields; omitted fields keep their value
    Profile(ProfileArgs),
    #[command(subcommand)]
    Project(ProjectCommand),
    #[command(subcommand)]
    Skill(SkillCommand),
    /// Rewrite the bio with the generative API
    EnhanceBio,
    /// Write the portfolio as pretty JSON
    Export {
        #[arg(long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },
    /// Replace everything with the built-in defaults
    Reset,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ProjectCommand {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Comma separated
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        link: Option<String>,
        /// Rewrite the description with the generative API first
        #[arg(long)]
        enhance: bool,
    },
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        link: Option<String>,
    },
    Delete {
        id: String,
    },
    /// Rewrite the description with the generative API
    Enhance {
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SkillCommand {
    Add {
        name: String,
        /// 0-100, defaults to 80
        #[arg(long)]
        level: Option<u8>,
        #[arg(long)]
        icon: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        level: Option<u8>,
        #[arg(long)]
        icon: Option<String>,
    },
    Delete {
        id: String,
    },
    /// Suggest a one-sentence description of a skill
    Describe {
        id: String,
    },
    /// Add generated skills for the profile title
    Suggest,
}

impl Command {
    /// Read-only commands and the login pair skip the admin gate.
    pub fn requires_admin(&self) -> bool {
        !matches!(
            self,
            Command::Show { .. } | Command::Login { .. } | Command::Logout
        )
    }
}
