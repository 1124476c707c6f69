use crate::domain::model::{PortfolioData, Profile, Project, Skill};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::validation::validate_range;

/// Storage key holding the whole serialized aggregate.
pub const PORTFOLIO_KEY: &str = "portfolio.json";

/// Owns the current portfolio snapshot and writes it through to storage.
///
/// Every mutator builds the next aggregate, persists it whole, and only then
/// swaps it in, so a failed write leaves the in-memory snapshot untouched.
/// Callers are trusted: duplicate ids are accepted as given.
pub struct PortfolioStore<S: Storage> {
    storage: S,
    data: PortfolioData,
}

impl<S: Storage> PortfolioStore<S> {
    /// Load the persisted aggregate, or the defaults when nothing is stored.
    /// Corrupt data is an error rather than a silent reset.
    pub async fn open(storage: S) -> Result<Self> {
        let data = match storage.read_file(PORTFOLIO_KEY).await? {
            Some(bytes) => {
                let data: PortfolioData = serde_json::from_slice(&bytes)?;
                tracing::debug!(
                    "Loaded portfolio with {} projects and {} skills",
                    data.projects.len(),
                    data.skills.len()
                );
                data
            }
            None => {
                tracing::info!("No saved portfolio found, starting from defaults");
                PortfolioData::default()
            }
        };

        Ok(Self { storage, data })
    }

    pub fn get(&self) -> &PortfolioData {
        &self.data
    }

    pub fn snapshot(&self) -> PortfolioData {
        self.data.clone()
    }

    pub async fn update_profile(&mut self, profile: Profile) -> Result<PortfolioData> {
        let next = PortfolioData {
            profile,
            ..self.data.clone()
        };
        self.commit(next).await
    }

    pub async fn add_project(&mut self, project: Project) -> Result<PortfolioData> {
        let mut next = self.data.clone();
        next.projects.push(project);
        self.commit(next).await
    }

    pub async fn update_project(&mut self, project: Project) -> Result<PortfolioData> {
        if self.data.project(&project.id).is_none() {
            tracing::debug!("update_project: no project with id {}", project.id);
        }

        let mut next = self.data.clone();
        next.projects = next
            .projects
            .into_iter()
            .map(|p| if p.id == project.id { project.clone() } else { p })
            .collect();
        self.commit(next).await
    }

    pub async fn delete_project(&mut self, id: &str) -> Result<PortfolioData> {
        let mut next = self.data.clone();
        next.projects.retain(|p| p.id != id);
        self.commit(next).await
    }

    pub async fn add_skill(&mut self, skill: Skill) -> Result<PortfolioData> {
        validate_range("level", skill.level, 0, 100)?;

        let mut next = self.data.clone();
        next.skills.push(skill);
        self.commit(next).await
    }

    pub async fn update_skill(&mut self, skill: Skill) -> Result<PortfolioData> {
        validate_range("level", skill.level, 0, 100)?;
        if self.data.skill(&skill.id).is_none() {
            tracing::debug!("update_skill: no skill with id {}", skill.id);
        }

        let mut next = self.data.clone();
        next.skills = next
            .skills
            .into_iter()
            .map(|s| if s.id == skill.id { skill.clone() } else { s })
            .collect();
        self.commit(next).await
    }

    pub async fn delete_skill(&mut self, id: &str) -> Result<PortfolioData> {
        let mut next = self.data.clone();
        next.skills.retain(|s| s.id != id);
        self.commit(next).await
    }

    pub async fn reset(&mut self) -> Result<PortfolioData> {
        tracing::info!("Resetting portfolio to defaults");
        self.commit(PortfolioData::default()).await
    }

    async fn commit(&mut self, next: PortfolioData) -> Result<PortfolioData> {
        let encoded = serde_json::to_vec(&next)?;
        self.storage.write_file(PORTFOLIO_KEY, &encoded).await?;
        self.data = next;
        Ok(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStorage;
    use crate::utils::error::FolioError;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            description: "desc".to_string(),
            image_url: "https://img".to_string(),
            tags: vec!["Rust".to_string()],
            link: None,
        }
    }

    #[tokio::test]
    async fn test_open_without_saved_data_uses_defaults() {
        let storage = MemoryStorage::new();
        let store = PortfolioStore::open(storage.clone()).await.unwrap();

        assert_eq!(store.get(), &PortfolioData::default());
        assert_eq!(storage.get_file(PORTFOLIO_KEY).await, None);
    }

    #[tokio::test]
    async fn test_open_with_corrupt_data_fails() {
        let storage = MemoryStorage::new();
        storage.write_file(PORTFOLIO_KEY, b"{not json").await.unwrap();

        let result = PortfolioStore::open(storage).await;
        assert!(matches!(result, Err(FolioError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_every_mutation_is_persisted() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open(storage.clone()).await.unwrap();

        let after = store.add_project(project("p1")).await.unwrap();
        let saved: PortfolioData =
            serde_json::from_slice(&storage.get_file(PORTFOLIO_KEY).await.unwrap()).unwrap();

        assert_eq!(saved, after);
    }

    #[tokio::test]
    async fn test_add_project_appends_in_order() {
        let mut store = PortfolioStore::open(MemoryStorage::new()).await.unwrap();
        let before = store.get().projects.len();

        store.add_project(project("a")).await.unwrap();
        let data = store.add_project(project("b")).await.unwrap();

        assert_eq!(data.projects.len(), before + 2);
        assert_eq!(data.projects[before].id, "a");
        assert_eq!(data.projects[before + 1].id, "b");
    }

    #[tokio::test]
    async fn test_update_project_replaces_matching_id_only() {
        let mut store = PortfolioStore::open(MemoryStorage::new()).await.unwrap();
        let mut changed = store.get().projects[1].clone();
        changed.title = "Renamed".to_string();

        let data = store.update_project(changed.clone()).await.unwrap();

        assert_eq!(data.project(&changed.id), Some(&changed));
        assert_eq!(data.projects[0], PortfolioData::default().projects[0]);
    }

    #[tokio::test]
    async fn test_update_unknown_project_is_noop() {
        let mut store = PortfolioStore::open(MemoryStorage::new()).await.unwrap();
        let before = store.snapshot();

        let after = store.update_project(project("missing")).await.unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_update_skill_replaces_matching_id_only() {
        let mut store = PortfolioStore::open(MemoryStorage::new()).await.unwrap();
        let defaults = PortfolioData::default();
        let mut changed = store.get().skill("3").cloned().unwrap();
        changed.name = "Go".to_string();
        changed.level = 55;

        let data = store.update_skill(changed.clone()).await.unwrap();

        assert_eq!(data.skill("3"), Some(&changed));
        assert_eq!(data.skills.len(), defaults.skills.len());
        for (after, before) in data.skills.iter().zip(&defaults.skills) {
            if after.id != "3" {
                assert_eq!(after, before);
            }
        }
    }

    #[tokio::test]
    async fn test_update_unknown_skill_is_noop() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open(storage.clone()).await.unwrap();
        let before = store.snapshot();

        let after = store
            .update_skill(Skill::new("missing", "Cobol", 10))
            .await
            .unwrap();

        assert_eq!(after, before);
        // The unchanged aggregate is still written back.
        assert!(storage.get_file(PORTFOLIO_KEY).await.is_some());
    }

    #[tokio::test]
    async fn test_delete_unknown_ids_are_noops() {
        let mut store = PortfolioStore::open(MemoryStorage::new()).await.unwrap();
        let before = store.snapshot();

        store.delete_project("missing").await.unwrap();
        let after = store.delete_skill("missing").await.unwrap();

        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_skill_level_out_of_range_is_rejected() {
        let storage = MemoryStorage::new();
        let mut store = PortfolioStore::open(storage.clone()).await.unwrap();
        let before = store.snapshot();

        let result = store.add_skill(Skill::new("x", "Rust", 101)).await;
        assert!(matches!(result, Err(FolioError::ValidationError { .. })));

        let mut skill = before.skills[0].clone();
        skill.level = 200;
        assert!(store.update_skill(skill).await.is_err());

        assert_eq!(store.get(), &before);
        assert_eq!(storage.get_file(PORTFOLIO_KEY).await, None);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_accepted() {
        let mut store = PortfolioStore::open(MemoryStorage::new()).await.unwrap();
        store.add_project(project("dup")).await.unwrap();
        let data = store.add_project(project("dup")).await.unwrap();

        assert_eq!(data.projects.iter().filter(|p| p.id == "dup").count(), 2);
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let mut store = PortfolioStore::open(MemoryStorage::new()).await.unwrap();
        store.delete_skill("1").await.unwrap();
        store.add_project(project("p")).await.unwrap();

        let data = store.reset().await.unwrap();
        assert_eq!(data, PortfolioData::default());
    }
}
