//! Site content model.
//!
//! One immutable [`SiteContent`] value describes everything the renderer
//! writes into the page: identity, about section, skills, project cards,
//! and social links. The host constructs it in code or deserializes it from
//! embedded data; this crate never reads files.
//!
//! ## Optional fields
//!
//! - `Project::url` absent → the card shows a badge instead of a link.
//! - `Project::badge` absent → the badge text falls back to `"Coming Soon"`.
//! - `Project::secondary` present → an extra link next to the primary action.
//! - `SocialLink::url` absent → the entry is skipped entirely.
//!
//! Field names serialize as camelCase and unknown keys are rejected to catch
//! typos early.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content validation error: {0}")]
    Validation(String),
}

/// Everything the page says about its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteContent {
    /// Short mark for the nav corner (e.g. initials).
    pub logo: String,
    pub name: String,
    pub role: String,
    /// One-line pitch under the headline.
    pub tagline: String,
    pub about: About,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Closing line in the contact section.
    pub contact_cta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct About {
    pub intro: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// A project card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub blurb: String,
    /// Primary link target. When absent the card renders a badge instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Badge text shown when `url` is absent. A set `url` wins over a badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Optional second link rendered alongside the primary action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SecondaryLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SecondaryLink {
    pub text: String,
    pub url: String,
}

/// A social profile link. Entries without a `url` are not rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SiteContent {
    /// Reject content the renderer cannot do anything sensible with.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::Validation("name must not be empty".into()));
        }
        if self.role.trim().is_empty() {
            return Err(ContentError::Validation("role must not be empty".into()));
        }
        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "project {i} has an empty title"
                )));
            }
            if let Some(secondary) = &project.secondary {
                if secondary.url.trim().is_empty() {
                    return Err(ContentError::Validation(format!(
                        "project {i} has a secondary link with an empty url"
                    )));
                }
            }
        }
        for (i, social) in self.socials.iter().enumerate() {
            if social.label.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "social link {i} has an empty label"
                )));
            }
        }
        Ok(())
    }

    /// Demo content. Deliberately exercises every optional-field shape:
    /// a project with url and secondary link, a badge-only project, a bare
    /// project that falls back to "Coming Soon", and a social entry without
    /// a url.
    pub fn stock() -> Self {
        Self {
            logo: "AV".to_string(),
            name: "Avery Vale".to_string(),
            role: "Frontend Developer".to_string(),
            tagline: "Fast, accessible interfaces with just enough motion.".to_string(),
            about: About {
                intro: "I build component-driven UIs where performance and \
                        accessibility are features, not afterthoughts. Most of \
                        my time goes into design systems, micro-interactions, \
                        and keeping bundles honest."
                    .to_string(),
                bullets: vec![
                    "Responsive, mobile-first layouts".to_string(),
                    "Motion that supports the content".to_string(),
                    "Semantic markup and ARIA done right".to_string(),
                ],
            },
            skills: vec![
                "TypeScript".to_string(),
                "Design systems".to_string(),
                "CSS architecture".to_string(),
                "Animation".to_string(),
                "Accessibility".to_string(),
                "Build tooling".to_string(),
            ],
            projects: vec![
                Project {
                    title: "Tidewatch".to_string(),
                    blurb: "Live coastal conditions dashboard with smooth chart transitions."
                        .to_string(),
                    url: Some("https://example.com/tidewatch".to_string()),
                    badge: None,
                    secondary: Some(SecondaryLink {
                        text: "Source".to_string(),
                        url: "https://example.com/tidewatch/source".to_string(),
                    }),
                },
                Project {
                    title: "Ledgerline".to_string(),
                    blurb: "Plain-text budgeting with an interface that stays out of the way."
                        .to_string(),
                    url: None,
                    badge: Some("In progress".to_string()),
                    secondary: None,
                },
                Project {
                    title: "Driftless".to_string(),
                    blurb: "A tiny scroll-effects toolkit for static pages.".to_string(),
                    url: None,
                    badge: None,
                    secondary: None,
                },
            ],
            socials: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: Some("https://github.com/averyvale".to_string()),
                },
                SocialLink {
                    label: "Mastodon".to_string(),
                    url: Some("https://hachyderm.io/@averyvale".to_string()),
                },
                SocialLink {
                    // No url: the renderer skips this entry.
                    label: "Dribbble".to_string(),
                    url: None,
                },
            ],
            contact_cta: "Have something in mind? I answer every message.".to_string(),
        }
    }
}
