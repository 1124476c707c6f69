use clap::Parser;
use folio::config::cli::{Command, ProfileArgs, ProjectCommand, SkillCommand};
use folio::core::dashboard::{parse_tags, NEW_SKILL_LEVEL};
use folio::core::render;
use folio::utils::error::ErrorSeverity;
use folio::utils::{logger, validation::Validate};
use folio::{
    AccessGate, CliConfig, ContentEnhancer, Dashboard, FolioConfig, GeminiClient, LocalStorage,
    PortfolioStore, Profile, ProjectDraft, Result,
};

type CliDashboard = Dashboard<LocalStorage, GeminiClient>;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: CliConfig) -> Result<()> {
    let mut config = FolioConfig::load(&cli.config)?;
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    config.validate()?;

    let storage = LocalStorage::new(config.storage.data_dir());
    tracing::debug!("Using data directory {}", storage.base_path().display());

    let mut gate = AccessGate::restore(config.admin.password(), storage.clone()).await?;
    if cli.command.requires_admin() {
        gate.require()?;
    }

    let enhancer = match GeminiClient::new(&config.generative) {
        Ok(client) => ContentEnhancer::new(client),
        Err(e) => {
            tracing::debug!("Text enhancement disabled: {}", e);
            ContentEnhancer::disabled()
        }
    };

    let store = PortfolioStore::open(storage).await?;
    let mut dashboard = Dashboard::new(store, enhancer);

    match cli.command {
        Command::Show { tab } => {
            let text = match tab {
                Some(tab) => render::render_tab(dashboard.data(), tab),
                None => render::render_all(dashboard.data()),
            };
            print!("{}", text);
        }
        Command::Login { password } => {
            gate.login(&password).await?;
            println!("✅ Logged in");
        }
        Command::Logout => {
            gate.logout().await?;
            println!("Logged out");
        }
        Command::Profile(args) => {
            let profile = apply_profile_args(dashboard.data().profile.clone(), args);
            dashboard.store_mut().update_profile(profile).await?;
            println!("✅ Profile updated");
        }
        Command::Project(command) => run_project(&mut dashboard, command).await?,
        Command::Skill(command) => run_skill(&mut dashboard, command).await?,
        Command::EnhanceBio => {
            let data = dashboard.enhance_bio().await?;
            println!("{}", data.profile.bio);
        }
        Command::Export { output } => {
            dashboard.export_to(&output).await?;
            println!("📁 Exported to {}", output.display());
        }
        Command::Reset => {
            dashboard.store_mut().reset().await?;
            println!("✅ Portfolio reset to defaults");
        }
    }

    Ok(())
}

/// Empty strings clear an optional field.
fn non_blank(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

fn apply_profile_args(mut profile: Profile, args: ProfileArgs) -> Profile {
    if let Some(name) = args.name {
        profile.name = name;
    }
    if let Some(title) = args.title {
        profile.title = title;
    }
    if let Some(bio) = args.bio {
        profile.bio = bio;
    }
    if let Some(email) = args.email {
        profile.email = email;
    }
    if let Some(github) = args.github {
        profile.socials.github = non_blank(github);
    }
    if let Some(twitter) = args.twitter {
        profile.socials.twitter = non_blank(twitter);
    }
    if let Some(linkedin) = args.linkedin {
        profile.socials.linkedin = non_blank(linkedin);
    }
    profile
}

async fn run_project(dashboard: &mut CliDashboard, command: ProjectCommand) -> Result<()> {
    match command {
        ProjectCommand::Add {
            title,
            description,
            tags,
            image_url,
            link,
            enhance,
        } => {
            let mut draft = ProjectDraft {
                title,
                description,
                image_url,
                tags: tags.as_deref().map(parse_tags).unwrap_or_default(),
                link,
            };
            if enhance {
                draft = dashboard.enhance_draft(draft).await;
            }
            match dashboard.add_project(draft).await? {
                Some(project) => println!("✅ Added project {} ({})", project.title, project.id),
                None => eprintln!("Title and description are required"),
            }
        }
        ProjectCommand::Update {
            id,
            title,
            description,
            tags,
            image_url,
            link,
        } => {
            let Some(mut project) = dashboard.data().project(&id).cloned() else {
                eprintln!("No project with id {}", id);
                return Ok(());
            };
            if let Some(title) = title {
                project.title = title;
            }
            if let Some(description) = description {
                project.description = description;
            }
            if let Some(tags) = tags {
                project.tags = parse_tags(&tags);
            }
            if let Some(image_url) = image_url {
                project.image_url = image_url;
            }
            if let Some(link) = link {
                project.link = non_blank(link);
            }
            dashboard.store_mut().update_project(project).await?;
            println!("✅ Updated project {}", id);
        }
        ProjectCommand::Delete { id } => {
            dashboard.store_mut().delete_project(&id).await?;
            println!("Deleted project {}", id);
        }
        ProjectCommand::Enhance { id } => {
            match dashboard.enhance_project(&id).await? {
                Some(project) => println!("{}", project.description),
                None => eprintln!("No project with id {}", id),
            }
        }
    }
    Ok(())
}

async fn run_skill(dashboard: &mut CliDashboard, command: SkillCommand) -> Result<()> {
    match command {
        SkillCommand::Add { name, level, icon } => {
            let level = level.unwrap_or(NEW_SKILL_LEVEL);
            match dashboard.add_skill_at(&name, level, icon).await? {
                Some(skill) => println!("✅ Added skill {} ({})", skill.name, skill.id),
                None => eprintln!("Skill name is required"),
            }
        }
        SkillCommand::Update {
            id,
            name,
            level,
            icon,
        } => {
            let Some(mut skill) = dashboard.data().skill(&id).cloned() else {
                eprintln!("No skill with id {}", id);
                return Ok(());
            };
            if let Some(name) = name {
                skill.name = name;
            }
            if let Some(level) = level {
                skill.level = level;
            }
            if let Some(icon) = icon {
                skill.icon = non_blank(icon);
            }
            dashboard.store_mut().update_skill(skill).await?;
            println!("✅ Updated skill {}", id);
        }
        SkillCommand::Delete { id } => {
            dashboard.store_mut().delete_skill(&id).await?;
            println!("Deleted skill {}", id);
        }
        SkillCommand::Describe { id } => {
            match dashboard.describe_skill(&id).await {
                Some(text) => println!("{}", text),
                None => eprintln!("No skill with id {}", id),
            }
        }
        SkillCommand::Suggest => {
            let added = dashboard.generate_skills().await?;
            if added.is_empty() {
                println!("No new skills suggested");
            }
            for skill in added {
                println!("✅ Added skill {} ({})", skill.name, skill.id);
            }
        }
    }
    Ok(())
}
