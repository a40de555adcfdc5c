//! Step form payloads. Each "next" request carries the current step's form,
//! tagged by step id, and converts into the same partial update a direct
//! PATCH would send.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::portfolio::{Experience, PortfolioUpdate, Project, SocialLinks};
use crate::portfolio::validation::{
    details_issues, ensure_known_theme, ensure_valid, experience_issues, prepare_update,
    project_issues,
};
use crate::wizard::WizardStep;

/// The committable step forms. Preview has no form: it commits nothing and
/// is only ever reached, never submitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "lowercase")]
pub enum StepForm {
    Theme(ThemeForm),
    Details(DetailsForm),
    Experience(ExperienceForm),
    Projects(ProjectsForm),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsForm {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub bio: String,
    /// Absent preserves the stored photo; an empty string clears it.
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_location: String,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceForm {
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsForm {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl StepForm {
    /// The step this form belongs to.
    pub fn step(&self) -> WizardStep {
        match self {
            StepForm::Theme(_) => WizardStep::Theme,
            StepForm::Details(_) => WizardStep::Details,
            StepForm::Experience(_) => WizardStep::Experience,
            StepForm::Projects(_) => WizardStep::Projects,
        }
    }

    /// Validates the form and converts it into the merge it commits. A
    /// failure rejects the whole form; nothing reaches the store.
    pub fn into_update(self) -> Result<PortfolioUpdate, AppError> {
        let update = match self {
            StepForm::Theme(form) => {
                ensure_known_theme(&form.theme)?;
                PortfolioUpdate {
                    theme: Some(form.theme),
                    ..Default::default()
                }
            }
            StepForm::Details(form) => {
                ensure_valid(details_issues(
                    &form.first_name,
                    &form.last_name,
                    &form.title,
                    &form.bio,
                    &form.contact_email,
                ))?;
                PortfolioUpdate {
                    first_name: Some(form.first_name),
                    last_name: Some(form.last_name),
                    title: Some(form.title),
                    bio: Some(form.bio),
                    profile_photo_url: form.profile_photo_url,
                    skills: Some(form.skills),
                    contact_email: Some(form.contact_email),
                    contact_phone: Some(form.contact_phone),
                    contact_location: Some(form.contact_location),
                    social_links: form.social_links,
                    ..Default::default()
                }
            }
            StepForm::Experience(form) => {
                ensure_valid(experience_issues(&form.experiences))?;
                PortfolioUpdate {
                    experiences: Some(form.experiences),
                    ..Default::default()
                }
            }
            StepForm::Projects(form) => {
                ensure_valid(project_issues(&form.projects))?;
                PortfolioUpdate {
                    projects: Some(form.projects),
                    ..Default::default()
                }
            }
        };
        prepare_update(update)
    }
}
