//! Plain-text views of the portfolio for the terminal.

use crate::core::dashboard::DashboardTab;
use crate::domain::model::{PortfolioData, Profile, Project, Skill};

const BAR_WIDTH: usize = 20;

/// Join lines, each terminated by a newline.
fn block(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn render_profile(profile: &Profile) -> String {
    let mut lines = vec![
        profile.name.clone(),
        profile.title.clone(),
        String::new(),
        profile.bio.clone(),
        String::new(),
        format!("Email:    {}", profile.email),
    ];

    let socials = [
        ("GitHub", &profile.socials.github),
        ("Twitter", &profile.socials.twitter),
        ("LinkedIn", &profile.socials.linkedin),
    ];
    lines.extend(socials.into_iter().filter_map(|(label, url)| {
        url.as_deref()
            .filter(|u| !u.is_empty())
            .map(|url| format!("{:<9} {}", format!("{}:", label), url))
    }));
    block(lines)
}

pub fn render_project(project: &Project) -> String {
    let mut lines = vec![
        format!("[{}] {}", project.id, project.title),
        format!("    {}", project.description),
    ];
    if !project.tags.is_empty() {
        lines.push(format!("    Tags:  {}", project.tags.join(", ")));
    }
    if let Some(link) = &project.link {
        lines.push(format!("    Link:  {}", link));
    }
    lines.push(format!("    Image: {}", project.image_url));
    block(lines)
}

pub fn render_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects yet.\n".to_string();
    }
    projects
        .iter()
        .map(render_project)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn level_bar(level: u8) -> String {
    let filled = usize::from(level.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn render_skills(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return "No skills yet.\n".to_string();
    }

    let width = skills.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);
    block(
        skills
            .iter()
            .map(|skill| {
                format!(
                    "{:<width$}  {} {:>3}%  ({})",
                    skill.name,
                    level_bar(skill.level),
                    skill.level,
                    skill.id,
                    width = width
                )
            })
            .collect(),
    )
}

pub fn render_tab(data: &PortfolioData, tab: DashboardTab) -> String {
    match tab {
        DashboardTab::Profile => render_profile(&data.profile),
        DashboardTab::Projects => render_projects(&data.projects),
        DashboardTab::Skills => render_skills(&data.skills),
    }
}

pub fn render_all(data: &PortfolioData) -> String {
    format!(
        "{}\n== Projects ==\n\n{}\n== Skills ==\n\n{}",
        render_profile(&data.profile),
        render_projects(&data.projects),
        render_skills(&data.skills)
    )
}
