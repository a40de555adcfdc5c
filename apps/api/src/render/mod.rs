//! Turns a portfolio record into complete HTML documents.
//!
//! Rendering is pure and total: the same record always yields the same
//! markup, every record yields the same five sections (About Me, Skills,
//! Experience, Projects, Contact), and missing data renders as absence,
//! never as placeholder text. Record fields are precomputed into a view
//! model so the templates stay free of formatting logic; the engine escapes
//! all user content, and only the theme's own CSS fragments pass through
//! unescaped.

use askama::Template;

use crate::models::portfolio::{Experience, Portfolio, Project};
use crate::themes::ThemeStyle;

/// Precomputed inputs shared by the preview and print documents.
pub struct PortfolioView {
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub photo_url: Option<String>,
    pub skills: Vec<String>,
    pub experiences: Vec<ExperienceView>,
    pub projects: Vec<ProjectView>,
    pub contacts: Vec<ContactView>,
}

pub struct ExperienceView {
    pub position: String,
    pub company: String,
    pub date_range: String,
    pub description: String,
}

pub struct ProjectView {
    pub title: String,
    pub technologies: String,
    pub description: String,
    pub demo_link: Option<String>,
    pub github_link: Option<String>,
}

/// One populated contact row. The preview renders `icon` + `value`, the
/// print document renders `label: value`.
pub struct ContactView {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewTemplate<'a> {
    view: &'a PortfolioView,
    style: &'a ThemeStyle,
}

#[derive(Template)]
#[template(path = "print.html")]
struct PrintTemplate<'a> {
    view: &'a PortfolioView,
}

/// Renders the themed on-screen document. Unknown theme identifiers fall
/// back to the minimal bundle rather than failing.
pub fn render_preview(portfolio: &Portfolio) -> askama::Result<String> {
    let view = build_view(portfolio);
    let style = portfolio.resolved_theme().style();
    PreviewTemplate {
        view: &view,
        style: &style,
    }
    .render()
}

/// Renders the print document: fixed light styling regardless of theme, a
/// forced page break between Experience and Projects, label-prefixed
/// contact lines, and the delayed print-then-close script.
pub fn render_print(portfolio: &Portfolio) -> askama::Result<String> {
    let view = build_view(portfolio);
    PrintTemplate { view: &view }.render()
}

fn build_view(portfolio: &Portfolio) -> PortfolioView {
    let full_name = format!("{} {}", portfolio.first_name, portfolio.last_name)
        .trim()
        .to_string();

    let photo_url = portfolio
        .profile_photo_url
        .as_ref()
        .filter(|url| !url.is_empty())
        .cloned();

    PortfolioView {
        full_name,
        title: portfolio.title.clone(),
        bio: portfolio.bio.clone(),
        photo_url,
        skills: portfolio.skills.clone(),
        experiences: portfolio.experiences.iter().map(experience_view).collect(),
        projects: portfolio.projects.iter().map(project_view).collect(),
        contacts: contact_views(portfolio),
    }
}

fn experience_view(entry: &Experience) -> ExperienceView {
    ExperienceView {
        position: entry.position.clone(),
        company: entry.company.clone(),
        date_range: date_range(&entry.start_date, entry.end_date.as_deref(), entry.is_current),
        description: entry.description.clone(),
    }
}

fn project_view(entry: &Project) -> ProjectView {
    ProjectView {
        title: entry.title.clone(),
        technologies: entry.technologies.join(", "),
        description: entry.description.clone(),
        demo_link: nonempty(entry.demo_link.as_deref()),
        github_link: nonempty(entry.github_link.as_deref()),
    }
}

/// A current entry always reads "Present"; a finished entry shows its end
/// label; an entry with neither shows the bare start label.
fn date_range(start: &str, end: Option<&str>, is_current: bool) -> String {
    if is_current {
        return format!("{start} - Present");
    }
    match end {
        Some(end) if !end.is_empty() => format!("{start} - {end}"),
        _ => start.to_string(),
    }
}

fn nonempty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn contact_views(portfolio: &Portfolio) -> Vec<ContactView> {
    let mut contacts = Vec::new();
    if !portfolio.contact_email.is_empty() {
        contacts.push(ContactView {
            icon: "fas fa-envelope",
            label: "Email",
            value: portfolio.contact_email.clone(),
        });
    }
    if !portfolio.contact_phone.is_empty() {
        contacts.push(ContactView {
            icon: "fas fa-phone",
            label: "Phone",
            value: portfolio.contact_phone.clone(),
        });
    }
    if !portfolio.contact_location.is_empty() {
        contacts.push(ContactView {
            icon: "fas fa-map-marker-alt",
            label: "Location",
            value: portfolio.contact_location.clone(),
        });
    }
    contacts
}
