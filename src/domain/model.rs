use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub socials: Socials,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// `level` is a percentage in `0..=100`; the store rejects anything above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            icon: None,
        }
    }
}

/// The aggregate. Persisted and exported as a single JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl PortfolioData {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn has_skill_named(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.skills.iter().any(|s| s.name.to_lowercase() == wanted)
    }
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Jahedul Islam Jishan".to_string(),
                title: "Full Stack Developer".to_string(),
                bio: "I am a 3rd-year student at Jagannath University, Dhaka (IER). I specialize in building scalable web applications using the MERN stack, Golang, and cloud technologies like Docker and AWS.".to_string(),
                email: "contact@jahedulislam.dev".to_string(),
                socials: Socials {
                    github: Some("https://github.com/jahedulislamdev".to_string()),
                    linkedin: Some("https://www.linkedin.com/in/jahedulislamdev".to_string()),
                    twitter: Some(String::new()),
                },
            },
            projects: vec![
                default_project(
                    "1",
                    "Sharevite",
                    "A modern social platform for connecting people and sharing moments. Built for high performance and real-time interaction.",
                    "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&q=80",
                    &["React", "Firebase", "TailwindCSS"],
                    "https://sharevite-2ccb7.web.app/",
                ),
                default_project(
                    "2",
                    "Cartique",
                    "A comprehensive e-commerce solution featuring secure authentication, cart management, and a seamless checkout experience.",
                    "https://images.unsplash.com/photo-1556742049-0cfed4f7a07d?w=800&q=80",
                    &["React", "Firebase", "Stripe"],
                    "https://cartique-auth.web.app/",
                ),
                default_project(
                    "3",
                    "Vehicle Rental System",
                    "Robust backend system for managing vehicle rentals, including inventory tracking, booking logic, and user management.",
                    "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?w=800&q=80",
                    &["Node.js", "MongoDB", "Express.js"],
                    "https://github.com/jahedulislamdev/Vehicle-Rental-System_A2",
                ),
            ],
            skills: vec![
                Skill::new("1", "JavaScript / TypeScript", 90),
                Skill::new("2", "Node.js & Express", 85),
                Skill::new("3", "Golang", 75),
                Skill::new("4", "React", 90),
                Skill::new("5", "MongoDB & PostgreSQL", 80),
                Skill::new("6", "Docker & AWS", 70),
                Skill::new("7", "Firebase", 85),
                Skill::new("8", "TailwindCSS & Bootstrap", 95),
                Skill::new("9", "Nginx", 60),
            ],
        }
    }
}

fn default_project(
    id: &str,
    title: &str,
    description: &str,
    image_url: &str,
    tags: &[&str],
    link: &str,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        link: Some(link.to_string()),
    }
}
