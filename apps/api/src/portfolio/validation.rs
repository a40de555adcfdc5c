//! Field rules applied before any merge reaches the store. A failed check
//! rejects the whole payload; nothing is partially applied.

use std::collections::HashSet;

use url::Url;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::{Experience, PortfolioUpdate, Project};
use crate::themes::Theme;

pub const BIO_MIN_LEN: usize = 10;
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// Collected failures for the personal-details rules. Empty means the
/// fields pass. An empty contact email is "not provided" and passes.
pub fn details_issues(
    first_name: &str,
    last_name: &str,
    title: &str,
    bio: &str,
    contact_email: &str,
) -> Vec<String> {
    let mut issues = Vec::new();
    if first_name.is_empty() {
        issues.push("First name is required".to_string());
    }
    if last_name.is_empty() {
        issues.push("Last name is required".to_string());
    }
    if title.is_empty() {
        issues.push("Professional title is required".to_string());
    }
    if bio.chars().count() < BIO_MIN_LEN {
        issues.push(format!("Bio must be at least {BIO_MIN_LEN} characters"));
    }
    if !contact_email.is_empty() && !is_valid_email(contact_email) {
        issues.push("Contact email must be a valid email address".to_string());
    }
    issues
}

/// Per-entry rules for the experience list. The list itself may be empty.
pub fn experience_issues(entries: &[Experience]) -> Vec<String> {
    let mut issues = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let n = idx + 1;
        if entry.company.is_empty() {
            issues.push(format!("Experience {n}: company is required"));
        }
        if entry.position.is_empty() {
            issues.push(format!("Experience {n}: position is required"));
        }
        if entry.start_date.is_empty() {
            issues.push(format!("Experience {n}: start date is required"));
        }
        if entry.description.chars().count() < DESCRIPTION_MIN_LEN {
            issues.push(format!(
                "Experience {n}: description must be at least {DESCRIPTION_MIN_LEN} characters"
            ));
        }
    }
    issues.extend(duplicate_id_issues(
        "Experience",
        entries.iter().map(|e| e.id.as_str()),
    ));
    issues
}

/// Per-entry rules for the project list. The list itself may be empty.
/// Links count as "not provided" when empty.
pub fn project_issues(entries: &[Project]) -> Vec<String> {
    let mut issues = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let n = idx + 1;
        if entry.title.is_empty() {
            issues.push(format!("Project {n}: title is required"));
        }
        if entry.description.chars().count() < DESCRIPTION_MIN_LEN {
            issues.push(format!(
                "Project {n}: description must be at least {DESCRIPTION_MIN_LEN} characters"
            ));
        }
        if let Some(link) = &entry.demo_link {
            if !link.is_empty() && !is_valid_link(link) {
                issues.push(format!("Project {n}: demo link must be a valid URL"));
            }
        }
        if let Some(link) = &entry.github_link {
            if !link.is_empty() && !is_valid_link(link) {
                issues.push(format!("Project {n}: GitHub link must be a valid URL"));
            }
        }
    }
    issues.extend(duplicate_id_issues(
        "Project",
        entries.iter().map(|p| p.id.as_str()),
    ));
    issues
}

/// Light syntactic email check: one '@', a non-empty local part, and a
/// dot-separated domain with non-empty labels.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// A link passes when it parses as an absolute URL.
pub fn is_valid_link(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Re-derives a technology list the way the project form builds one:
/// elements may arrive comma-joined, so split on commas, trim, drop empties.
pub fn normalize_technologies(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns collected issues into a single rejection.
pub fn ensure_valid(issues: Vec<String>) -> Result<(), AppError> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(issues.join("; ")))
    }
}

/// Screens a partial update before it reaches the store: theme identifiers
/// must be in the closed set, non-blank entry ids must be unique, blank ids
/// get server-assigned UUIDs, technology lists are re-derived.
pub fn prepare_update(mut update: PortfolioUpdate) -> Result<PortfolioUpdate, AppError> {
    if let Some(theme) = &update.theme {
        ensure_known_theme(theme)?;
    }

    let mut issues = Vec::new();
    if let Some(experiences) = &update.experiences {
        issues.extend(duplicate_id_issues(
            "Experience",
            experiences.iter().map(|e| e.id.as_str()),
        ));
    }
    if let Some(projects) = &update.projects {
        issues.extend(duplicate_id_issues(
            "Project",
            projects.iter().map(|p| p.id.as_str()),
        ));
    }
    ensure_valid(issues)?;

    if let Some(experiences) = &mut update.experiences {
        for entry in experiences.iter_mut() {
            if entry.id.is_empty() {
                entry.id = Uuid::new_v4().to_string();
            }
        }
    }
    if let Some(projects) = &mut update.projects {
        for entry in projects.iter_mut() {
            if entry.id.is_empty() {
                entry.id = Uuid::new_v4().to_string();
            }
            entry.technologies = normalize_technologies(&entry.technologies);
        }
    }
    Ok(update)
}

/// Rejects identifiers outside the closed theme set.
pub fn ensure_known_theme(theme_id: &str) -> Result<Theme, AppError> {
    Theme::from_id(theme_id).ok_or_else(|| {
        let known: Vec<&str> = Theme::ALL.iter().map(|t| t.as_str()).collect();
        AppError::InvalidTheme(format!(
            "Unknown theme '{theme_id}'. Valid themes: {}",
            known.join(", ")
        ))
    })
}

/// Blank ids never collide (each gets a fresh UUID later); repeats among the
/// non-blank ids do.
fn duplicate_id_issues<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();
    for id in ids.filter(|id| !id.is_empty()) {
        if !seen.insert(id) {
            issues.push(format!("{kind} entries reuse id '{id}'"));
        }
    }
    issues
}
