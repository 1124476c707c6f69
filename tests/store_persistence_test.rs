use anyhow::Result;
use folio::core::store::PORTFOLIO_KEY;
use folio::{LocalStorage, PortfolioData, PortfolioStore, Profile, Project, Skill, Socials};
use tempfile::TempDir;

fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: "Folio".to_string(),
        description: "Terminal portfolio editor".to_string(),
        image_url: "https://picsum.photos/seed/1/800/600".to_string(),
        tags: vec!["Rust".to_string(), "CLI".to_string()],
        link: Some("https://example.com/folio".to_string()),
    }
}

#[tokio::test]
async fn test_persist_and_reload_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path());

    let mut store = PortfolioStore::open(storage.clone()).await?;
    store.add_project(sample_project("p-1")).await?;
    store
        .add_skill(Skill {
            id: "s-1".to_string(),
            name: "Rust".to_string(),
            level: 80,
            icon: Some("ferris".to_string()),
        })
        .await?;
    let written = store
        .update_profile(Profile {
            name: "Ada".to_string(),
            title: "Systems Engineer".to_string(),
            bio: "Builds things.".to_string(),
            email: "ada@example.com".to_string(),
            socials: Socials {
                github: Some("https://github.com/ada".to_string()),
                twitter: None,
                linkedin: None,
            },
        })
        .await?;

    let reloaded = PortfolioStore::open(storage).await?;
    assert_eq!(reloaded.get(), &written);
    assert!(temp_dir.path().join(PORTFOLIO_KEY).exists());
    Ok(())
}

#[tokio::test]
async fn test_add_then_delete_skill_restores_default_list() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = PortfolioStore::open(LocalStorage::new(temp_dir.path()))
        .await
        .unwrap();
    let defaults = PortfolioData::default();

    let added = store.add_skill(Skill::new("x", "Rust", 80)).await.unwrap();
    assert_eq!(added.skills.len(), defaults.skills.len() + 1);
    assert_eq!(added.skill("x").map(|s| s.name.as_str()), Some("Rust"));

    let after = store.delete_skill("x").await.unwrap();
    assert_eq!(after.skills, defaults.skills);
}

#[tokio::test]
async fn test_add_project_is_retrievable_by_id() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = PortfolioStore::open(LocalStorage::new(temp_dir.path()))
        .await
        .unwrap();
    let before = store.get().projects.len();

    let data = store.add_project(sample_project("new")).await.unwrap();

    assert_eq!(data.projects.len(), before + 1);
    assert_eq!(data.project("new"), Some(&sample_project("new")));
}

#[tokio::test]
async fn test_update_profile_leaves_collections_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = PortfolioStore::open(LocalStorage::new(temp_dir.path()))
        .await
        .unwrap();
    let before = store.snapshot();

    let mut profile = before.profile.clone();
    profile.bio = "A different bio.".to_string();
    let after = store.update_profile(profile).await.unwrap();

    assert_eq!(after.profile.bio, "A different bio.");
    assert_eq!(after.projects, before.projects);
    assert_eq!(after.skills, before.skills);
}

#[tokio::test]
async fn test_corrupt_file_is_reported_not_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(PORTFOLIO_KEY);
    std::fs::write(&path, "{\"profile\": 42}").unwrap();

    let result = PortfolioStore::open(LocalStorage::new(temp_dir.path())).await;

    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"profile\": 42}");
}

#[tokio::test]
async fn test_last_writer_wins_across_stores() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let mut first = PortfolioStore::open(storage.clone()).await.unwrap();
    let mut second = PortfolioStore::open(storage.clone()).await.unwrap();

    first.add_project(sample_project("from-first")).await.unwrap();
    second.delete_project("1").await.unwrap();

    let reloaded = PortfolioStore::open(storage).await.unwrap();
    assert!(reloaded.get().project("from-first").is_none());
    assert!(reloaded.get().project("1").is_none());
}
