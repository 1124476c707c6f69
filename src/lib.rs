pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FolioConfig;

pub use adapters::{GeminiClient, LocalStorage, MemoryStorage};
pub use crate::core::{
    dashboard::{Dashboard, DashboardTab, ProjectDraft},
    enhance::{ContentEnhancer, EnhanceKind},
    gate::AccessGate,
    store::PortfolioStore,
};
pub use domain::model::{PortfolioData, Profile, Project, Skill, Socials};
pub use utils::error::{FolioError, Result};
