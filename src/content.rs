use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::config::InteractionConfig;

pub const CONTENT_FILE: &str = "portfolio.json";

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(|| load(CONTENT_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    pub icon: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub skills: Vec<Skill>,
    pub languages: Vec<String>,
    pub projects: Vec<Project>,
    pub contacts: Vec<ContactLink>,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
}

pub fn parse_content(raw: &str) -> Result<SiteContent, ContentError> {
    serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))
}

fn load(name: &str) -> Result<SiteContent, ContentError> {
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    parse_content(raw)
}

/// The embedded page content, parsed on first use.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

pub fn interaction_config() -> InteractionConfig {
    match site_content() {
        Ok(content) => content.interaction.clone(),
        Err(e) => {
            log::error!("falling back to default interaction settings: {}", e);
            InteractionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = site_content().expect("embedded content should parse");

        let skills = content.skills.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(skills, vec!["Java Programming", "DBMS", "C Programming"]);

        let projects = content
            .projects
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(projects, vec!["Snake Game", "Flight Ticket Booking"]);
        assert!(content.projects.iter().all(|p| !p.tags.is_empty()));

        assert_eq!(content.languages, vec!["English", "Tamil"]);
        assert_eq!(content.interaction, InteractionConfig::default());
    }

    #[test]
    fn test_contacts_are_verbatim() {
        let content = site_content().unwrap();
        let email = content
            .contacts
            .iter()
            .find(|c| c.label == "Email")
            .expect("email contact");
        assert_eq!(email.value, "kavinkishore250@gmail.com");
        assert_eq!(email.href.as_deref(), Some("mailto:kavinkishore250@gmail.com"));

        let location = content.contacts.iter().find(|c| c.label == "Location").unwrap();
        assert!(location.href.is_none());

        let linkedin = content.contacts.iter().find(|c| c.label == "LinkedIn").unwrap();
        assert!(linkedin.external);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load("nope.json"), Err(ContentError::Missing(_))));
    }

    #[test]
    fn test_bad_json() {
        let err = parse_content(r#"{ "skills": 3 }"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("Couldn't parse content"));
    }
}
