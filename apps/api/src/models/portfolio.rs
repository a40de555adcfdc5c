use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::themes::Theme;

/// A single work-experience entry. Date fields are free-text labels
/// ("Mar 2020", "2017-06") and are never parsed as calendar values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Unique within the owning portfolio. Blank ids are assigned on commit.
    #[serde(default)]
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    /// When set, the entry renders with "Present" regardless of `end_date`.
    #[serde(default)]
    pub is_current: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique within the owning portfolio. Blank ids are assigned on commit.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
}

/// Per-platform profile URLs. Stored with the record; the render engine does
/// not consume them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// The per-user portfolio record. Created with empty defaults alongside its
/// owning user and mutated exclusively through `PortfolioUpdate` merges.
///
/// `theme` is stored as an identifier string: mutation boundaries validate it
/// against the closed [`Theme`] set, and the render engine resolves anything
/// unrecognized to the minimal bundle instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: Uuid,
    pub user_id: Uuid,
    pub theme: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub bio: String,
    pub profile_photo_url: Option<String>,
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_location: String,
    pub social_links: SocialLinks,
    pub is_published: bool,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    /// The empty record every new user starts from: minimal theme,
    /// unpublished, all lists empty.
    pub fn new_default(user_id: Uuid) -> Self {
        Portfolio {
            id: Uuid::new_v4(),
            user_id,
            theme: Theme::Minimal.as_str().to_string(),
            first_name: String::new(),
            last_name: String::new(),
            title: String::new(),
            bio: String::new(),
            profile_photo_url: None,
            skills: Vec::new(),
            experiences: Vec::new(),
            projects: Vec::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            contact_location: String::new(),
            social_links: SocialLinks::default(),
            is_published: false,
            updated_at: Utc::now(),
        }
    }

    /// The stored theme resolved against the closed set, falling back to
    /// minimal for unrecognized identifiers.
    pub fn resolved_theme(&self) -> Theme {
        Theme::resolve(&self.theme)
    }
}

/// Partial update payload shared by PATCH requests and wizard step commits.
///
/// `None` preserves the stored value; `Some` overwrites it, explicitly empty
/// values included. The payload carries no `updated_at` field: the store
/// stamps the merge time itself and never trusts the client's clock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioUpdate {
    pub theme: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    /// An explicitly empty string clears the photo.
    pub profile_photo_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experiences: Option<Vec<Experience>>,
    pub projects: Option<Vec<Project>>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_location: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub is_published: Option<bool>,
}

impl PortfolioUpdate {
    /// Field-by-field merge into the stored record. Skills pass through
    /// trimming and insertion-order de-duplication so a repeated value never
    /// grows the list. Refreshing `updated_at` is the store's job, not the
    /// caller's.
    pub fn apply_to(self, portfolio: &mut Portfolio) {
        if let Some(theme) = self.theme {
            portfolio.theme = theme;
        }
        if let Some(first_name) = self.first_name {
            portfolio.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            portfolio.last_name = last_name;
        }
        if let Some(title) = self.title {
            portfolio.title = title;
        }
        if let Some(bio) = self.bio {
            portfolio.bio = bio;
        }
        if let Some(photo) = self.profile_photo_url {
            portfolio.profile_photo_url = if photo.is_empty() { None } else { Some(photo) };
        }
        if let Some(skills) = self.skills {
            portfolio.skills = normalize_skills(skills);
        }
        if let Some(experiences) = self.experiences {
            portfolio.experiences = experiences;
        }
        if let Some(projects) = self.projects {
            portfolio.projects = projects;
        }
        if let Some(contact_email) = self.contact_email {
            portfolio.contact_email = contact_email;
        }
        if let Some(contact_phone) = self.contact_phone {
            portfolio.contact_phone = contact_phone;
        }
        if let Some(contact_location) = self.contact_location {
            portfolio.contact_location = contact_location;
        }
        if let Some(social_links) = self.social_links {
            portfolio.social_links = social_links;
        }
        if let Some(is_published) = self.is_published {
            portfolio.is_published = is_published;
        }
    }
}

/// Trims each skill, drops blanks, then de-duplicates case sensitively with
/// the first occurrence winning and later repeats dropped.
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty() && seen.insert(skill.clone()))
        .collect()
}
