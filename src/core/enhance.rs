use crate::domain::ports::{GenerativeClient, ResponseFormat};

/// What kind of content is being rewritten; selects the instruction sent
/// along with the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhanceKind {
    Bio,
    Project,
    Skill,
}

impl EnhanceKind {
    pub fn prompt(self, text: &str) -> String {
        match self {
            EnhanceKind::Bio => format!(
                "Rewrite the following portfolio bio to be more professional yet warm and inviting. Keep it under 100 words. Input: \"{}\"",
                text
            ),
            EnhanceKind::Project => format!(
                "Improve this project description to sound impactful and technical but accessible. Keep it under 50 words. Input: \"{}\"",
                text
            ),
            EnhanceKind::Skill => format!(
                "Suggest a short, one-sentence description for the skill: \"{}\".",
                text
            ),
        }
    }
}

fn skills_prompt(role: &str) -> String {
    format!(
        "List 5 key technical skills for a \"{}\". Return ONLY a JSON array of strings. Example: [\"React\", \"TypeScript\"].",
        role
    )
}

/// Models sometimes wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}

/// Best-effort rewriting on top of a [`GenerativeClient`].
///
/// Nothing here returns an error: without a client, or when the call fails,
/// the caller gets its input back (or an empty suggestion list).
pub struct ContentEnhancer<C: GenerativeClient> {
    client: Option<C>,
}

impl<C: GenerativeClient> ContentEnhancer<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub async fn enhance(&self, text: &str, kind: EnhanceKind) -> String {
        let Some(client) = &self.client else {
            tracing::warn!("Generative API key not configured, leaving {:?} text unchanged", kind);
            return text.to_string();
        };

        match client.generate(&kind.prompt(text), ResponseFormat::Text).await {
            Ok(reply) if !reply.trim().is_empty() => reply.trim().to_string(),
            Ok(_) => {
                tracing::error!("Generative API returned an empty {:?} rewrite", kind);
                text.to_string()
            }
            Err(e) => {
                tracing::error!("Generative API error: {}", e);
                text.to_string()
            }
        }
    }

    pub async fn suggest_skills(&self, role: &str) -> Vec<String> {
        let Some(client) = &self.client else {
            tracing::warn!("Generative API key not configured, no skill suggestions");
            return Vec::new();
        };

        let reply = match client.generate(&skills_prompt(role), ResponseFormat::Json).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Generative API error: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(strip_code_fence(&reply)) {
            Ok(names) => names
                .into_iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
            Err(e) => {
                tracing::error!("Skill suggestions were not a JSON string array: {}", e);
                Vec::new()
            }
        }
    }
}
