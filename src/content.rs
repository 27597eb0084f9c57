use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const CONTENT_FILE: &str = "portfolio.json";

/// Captured by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Skill chips shown on an experience card before collapsing into "+N more".
pub const SKILL_PREVIEW_LIMIT: usize = 5;

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(load_embedded);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Portfolio content not found: {0}")]
    Missing(String),
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub headline: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub email: String,
    pub image: String,
    /// Hosted 3D scene rendered inside the hero iframe.
    pub scene_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    #[serde(rename = "type")]
    pub engagement: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub skills: Vec<String>,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub socials: Vec<SocialLink>,
    pub nav: Vec<NavLink>,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))
    }
}

impl Profile {
    pub fn document_title(&self) -> String {
        format!("{} - Full Stack Developer | Portfolio", self.name)
    }

    pub fn copyright_line(&self, year: Option<i32>) -> String {
        match year {
            Some(year) => format!("© {year} {}. All rights reserved.", self.name),
            None => format!("© {}. All rights reserved.", self.name),
        }
    }
}

impl Experience {
    /// Returns the leading `limit` skill tags and how many were left out.
    pub fn skill_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.skills.len().min(limit);
        (&self.skills[..shown], self.skills.len() - shown)
    }
}

/// Site content embedded at compile time, parsed on first access.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

fn load_embedded() -> Result<Portfolio, ContentError> {
    let file =
        Assets::get(CONTENT_FILE).ok_or_else(|| ContentError::Missing(CONTENT_FILE.to_string()))?;
    let portfolio = serde_json::from_slice::<Portfolio>(&file.data)
        .map_err(|e| ContentError::Parse(e.to_string()))?;
    log::debug!(
        "loaded portfolio content: {} projects, {} experience entries",
        portfolio.projects.len(),
        portfolio.experience.len()
    );
    Ok(portfolio)
}

pub fn build_year() -> Option<i32> {
    year_of(BUILD_TIME)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience_with(skills: &[&str]) -> Experience {
        Experience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            engagement: "Full-time".to_string(),
            duration: "1 yr".to_string(),
            location: "Remote".to_string(),
            description: "Built things".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            accent: "text-blue-400".to_string(),
        }
    }

    #[test]
    fn embedded_content_parses() {
        let p = portfolio().expect("embedded content should parse");
        assert_eq!(p.profile.initials, "SK");
        assert_eq!(p.skills.len(), 6);
        assert_eq!(p.experience.len(), 8);
        assert_eq!(p.projects.len(), 8);
    }

    #[test]
    fn embedded_lists_keep_source_order() {
        let p = portfolio().unwrap();
        let titles = p.projects.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles.first(), Some(&"Amazon Clone"));
        assert_eq!(titles.last(), Some(&"Ticket Validator"));
        assert_eq!(p.experience[0].position, "Python Developer");
        assert_eq!(p.experience[7].company, "Open Source Community");
        let nav = p.nav.iter().map(|n| n.href.as_str()).collect::<Vec<_>>();
        assert_eq!(nav, vec!["#about", "#projects", "#contact"]);
    }

    #[test]
    fn engagement_reads_type_key() {
        let p = portfolio().unwrap();
        assert_eq!(p.experience[0].engagement, "Internship");
        assert_eq!(p.experience[7].engagement, "Volunteer");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let res = Portfolio::from_json("{\"profile\": 3}");
        assert!(matches!(res, Err(ContentError::Parse(_))));
    }

    #[test]
    fn skill_preview_collapses_overflow() {
        let exp = experience_with(&["a", "b", "c", "d", "e", "f"]);
        let (shown, hidden) = exp.skill_preview(SKILL_PREVIEW_LIMIT);
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[4], "e");
        assert_eq!(hidden, 1);
    }

    #[test]
    fn skill_preview_short_list_shows_everything() {
        let exp = experience_with(&["a", "b"]);
        let (shown, hidden) = exp.skill_preview(SKILL_PREVIEW_LIMIT);
        assert_eq!(shown, ["a".to_string(), "b".to_string()]);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn copyright_year_from_build_time() {
        assert_eq!(year_of("2026-03-01T12:00:00+00:00"), Some(2026));
        assert_eq!(year_of("not a date"), None);
        assert!(build_year().is_some());
    }

    #[test]
    fn copyright_line_without_year() {
        let p = portfolio().unwrap();
        assert_eq!(
            p.profile.copyright_line(None),
            "© Shradha Kapoor. All rights reserved."
        );
        assert_eq!(
            p.profile.copyright_line(Some(2025)),
            "© 2025 Shradha Kapoor. All rights reserved."
        );
    }
}
