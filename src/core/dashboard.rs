use crate::core::enhance::{ContentEnhancer, EnhanceKind};
use crate::core::store::PortfolioStore;
use crate::domain::model::{PortfolioData, Project, Skill};
use crate::domain::ports::{GenerativeClient, Storage};
use crate::utils::error::Result;
use std::fmt;
use std::path::Path;

pub const EXPORT_FILE_NAME: &str = "portfolio-data.json";

/// Level given to skills added by name.
pub const NEW_SKILL_LEVEL: u8 = 80;
/// Level given to skills accepted from generated suggestions.
pub const SUGGESTED_SKILL_LEVEL: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DashboardTab {
    #[default]
    Profile,
    Projects,
    Skills,
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DashboardTab::Profile => "profile",
            DashboardTab::Projects => "projects",
            DashboardTab::Skills => "skills",
        };
        f.write_str(name)
    }
}

/// Input for a new project; id and fallback image are filled in on add.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

/// Split a comma separated tag list, dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Millisecond timestamp ids, bumped when two land in the same millisecond.
#[derive(Debug, Default)]
struct IdClock {
    last: i64,
}

impl IdClock {
    fn next(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }
}

/// Editing operations behind the admin screens: the store plus the
/// optional text enhancer.
pub struct Dashboard<S: Storage, C: GenerativeClient> {
    store: PortfolioStore<S>,
    enhancer: ContentEnhancer<C>,
    ids: IdClock,
}

impl<S: Storage, C: GenerativeClient> Dashboard<S, C> {
    pub fn new(store: PortfolioStore<S>, enhancer: ContentEnhancer<C>) -> Self {
        Self {
            store,
            enhancer,
            ids: IdClock::default(),
        }
    }

    pub fn data(&self) -> &PortfolioData {
        self.store.get()
    }

    pub fn store_mut(&mut self) -> &mut PortfolioStore<S> {
        &mut self.store
    }

    pub async fn enhance_bio(&mut self) -> Result<PortfolioData> {
        let mut profile = self.store.get().profile.clone();
        profile.bio = self.enhancer.enhance(&profile.bio, EnhanceKind::Bio).await;
        self.store.update_profile(profile).await
    }

    /// `Ok(None)` when no project has this id.
    pub async fn enhance_project(&mut self, id: &str) -> Result<Option<Project>> {
        let Some(mut project) = self.store.get().project(id).cloned() else {
            return Ok(None);
        };

        project.description = self
            .enhancer
            .enhance(&project.description, EnhanceKind::Project)
            .await;
        self.store.update_project(project.clone()).await?;
        Ok(Some(project))
    }

    /// Rewrite a draft's description before it is added.
    pub async fn enhance_draft(&self, mut draft: ProjectDraft) -> ProjectDraft {
        if !draft.description.trim().is_empty() {
            draft.description = self
                .enhancer
                .enhance(&draft.description, EnhanceKind::Project)
                .await;
        }
        draft
    }

    /// One-sentence description of a skill. Nothing is stored.
    pub async fn describe_skill(&self, id: &str) -> Option<String> {
        let skill = self.store.get().skill(id)?;
        Some(self.enhancer.enhance(&skill.name, EnhanceKind::Skill).await)
    }

    /// Ask for skills matching the profile title and add the ones not
    /// already listed. Returns the skills that were added.
    pub async fn generate_skills(&mut self) -> Result<Vec<Skill>> {
        let title = self.store.get().profile.title.trim().to_string();
        if title.is_empty() {
            return Ok(Vec::new());
        }

        let mut added = Vec::new();
        for name in self.enhancer.suggest_skills(&title).await {
            if self.store.get().has_skill_named(&name) {
                tracing::debug!("Skipping suggested skill already listed: {}", name);
                continue;
            }
            let skill = Skill::new(self.ids.next().to_string(), name, SUGGESTED_SKILL_LEVEL);
            self.store.add_skill(skill.clone()).await?;
            added.push(skill);
        }

        tracing::info!("Added {} suggested skills for '{}'", added.len(), title);
        Ok(added)
    }

    /// `Ok(None)` when title or description is blank.
    pub async fn add_project(&mut self, draft: ProjectDraft) -> Result<Option<Project>> {
        if draft.title.trim().is_empty() || draft.description.trim().is_empty() {
            return Ok(None);
        }

        let stamp = self.ids.next();
        let image_url = draft
            .image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/800/600", stamp));

        let project = Project {
            id: stamp.to_string(),
            title: draft.title,
            description: draft.description,
            image_url,
            tags: draft.tags,
            link: draft.link.filter(|l| !l.trim().is_empty()),
        };
        self.store.add_project(project.clone()).await?;
        Ok(Some(project))
    }

    /// `Ok(None)` when the name is blank.
    pub async fn add_skill_named(&mut self, name: &str) -> Result<Option<Skill>> {
        self.add_skill_at(name, NEW_SKILL_LEVEL, None).await
    }

    /// Like [`Self::add_skill_named`] with an explicit level and icon.
    pub async fn add_skill_at(
        &mut self,
        name: &str,
        level: u8,
        icon: Option<String>,
    ) -> Result<Option<Skill>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let mut skill = Skill::new(self.ids.next().to_string(), name, level);
        skill.icon = icon;
        self.store.add_skill(skill.clone()).await?;
        Ok(Some(skill))
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.store.get())?)
    }

    pub async fn export_to(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        tokio::fs::write(path, json).await?;
        tracing::info!("Exported portfolio to {}", path.display());
        Ok(())
    }
}
