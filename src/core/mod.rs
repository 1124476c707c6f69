pub mod dashboard;
pub mod enhance;
pub mod gate;
pub mod render;
pub mod store;

pub use crate::domain::model::{PortfolioData, Profile, Project, Skill, Socials};
pub use crate::domain::ports::{GenerativeClient, ResponseFormat, Storage};
pub use crate::utils::error::Result;
