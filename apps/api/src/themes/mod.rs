//! The closed set of visual identities a portfolio can render with, each
//! mapped to a fixed bundle of style tokens.
//!
//! Identifiers outside the set are rejected at every mutation boundary.
//! Records that nevertheless carry an unknown identifier (older data, direct
//! store edits) resolve to `Minimal` at render time instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

const SHADOW_DEFAULT: &str =
    "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)";
const SHADOW_ELEGANT: &str = "0 1px 3px 0 rgba(0, 0, 0, 0.1)";
const SHADOW_MODERN: &str =
    "0 10px 15px -3px rgba(0, 0, 0, 0.05), 0 4px 6px -2px rgba(0, 0, 0, 0.025)";

/// The six supported themes. This enum is the single source of truth for
/// which identifiers are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Minimal,
    Tech,
    Creative,
    Elegant,
    Nature,
    Modern,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Minimal
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog metadata for one theme, served to clients picking a design.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The full style token bundle one theme contributes to rendered markup.
/// Every field is a CSS fragment the templates interpolate verbatim.
#[derive(Debug, Clone)]
pub struct ThemeStyle {
    pub font_family: &'static str,
    pub body_color: &'static str,
    pub body_bg: &'static str,
    pub header_padding: &'static str,
    pub header_color: &'static str,
    pub header_bg: &'static str,
    pub header_border_bottom: &'static str,
    pub title_color: &'static str,
    pub photo_border: &'static str,
    pub section_bg: &'static str,
    pub section_radius: &'static str,
    pub section_shadow: &'static str,
    pub section_title_rule: &'static str,
    pub section_title_color: &'static str,
    pub bio_color: &'static str,
    pub skill_bg: &'static str,
    pub skill_color: &'static str,
    pub item_heading_color: &'static str,
    pub accent_color: &'static str,
    pub date_color: &'static str,
    pub text_color: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Minimal,
        Theme::Tech,
        Theme::Creative,
        Theme::Elegant,
        Theme::Nature,
        Theme::Modern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Minimal => "minimal",
            Theme::Tech => "tech",
            Theme::Creative => "creative",
            Theme::Elegant => "elegant",
            Theme::Nature => "nature",
            Theme::Modern => "modern",
        }
    }

    /// Strict lookup: `None` for anything outside the closed set.
    /// Mutation boundaries use this to reject unknown identifiers.
    pub fn from_id(id: &str) -> Option<Theme> {
        match id {
            "minimal" => Some(Theme::Minimal),
            "tech" => Some(Theme::Tech),
            "creative" => Some(Theme::Creative),
            "elegant" => Some(Theme::Elegant),
            "nature" => Some(Theme::Nature),
            "modern" => Some(Theme::Modern),
            _ => None,
        }
    }

    /// Lenient lookup for render paths: unknown identifiers fall back to
    /// `Minimal` so rendering stays total.
    pub fn resolve(id: &str) -> Theme {
        Theme::from_id(id).unwrap_or_default()
    }

    pub fn info(&self) -> ThemeInfo {
        match self {
            Theme::Minimal => ThemeInfo {
                id: "minimal",
                name: "Minimal",
                description: "Clean, modern design with focus on content",
            },
            Theme::Tech => ThemeInfo {
                id: "tech",
                name: "Tech",
                description: "Bold design for tech professionals",
            },
            Theme::Creative => ThemeInfo {
                id: "creative",
                name: "Creative",
                description: "Vibrant design for creative professionals",
            },
            Theme::Elegant => ThemeInfo {
                id: "elegant",
                name: "Elegant",
                description: "Sophisticated design with a premium feel",
            },
            Theme::Nature => ThemeInfo {
                id: "nature",
                name: "Nature",
                description: "Organic, earthy design for environment-focused professionals",
            },
            Theme::Modern => ThemeInfo {
                id: "modern",
                name: "Modern",
                description: "Contemporary design with bold colors and clean layout",
            },
        }
    }

    pub fn style(&self) -> ThemeStyle {
        match self {
            Theme::Minimal => ThemeStyle {
                font_family: "'Inter', sans-serif",
                body_color: "#334155",
                body_bg: "#f8fafc",
                header_padding: "2rem 1rem",
                header_color: "#1e293b",
                header_bg: "transparent",
                header_border_bottom: "none",
                title_color: "#64748b",
                photo_border: "#e0f2fe",
                section_bg: "white",
                section_radius: "0.5rem",
                section_shadow: SHADOW_DEFAULT,
                section_title_rule: "#e2e8f0",
                section_title_color: "#1e293b",
                bio_color: "#4b5563",
                skill_bg: "#f1f5f9",
                skill_color: "#0f172a",
                item_heading_color: "#1e293b",
                accent_color: "#0ea5e9",
                date_color: "#64748b",
                text_color: "#4b5563",
            },
            Theme::Tech => ThemeStyle {
                font_family: "'Inter', sans-serif",
                body_color: "#cbd5e1",
                body_bg: "#0f172a",
                header_padding: "2rem 1rem",
                header_color: "#f8fafc",
                header_bg: "#0f172a",
                header_border_bottom: "none",
                title_color: "#94a3b8",
                photo_border: "#38bdf8",
                section_bg: "#1e293b",
                section_radius: "0.25rem",
                section_shadow: SHADOW_DEFAULT,
                section_title_rule: "#0ea5e9",
                section_title_color: "#f8fafc",
                bio_color: "#cbd5e1",
                skill_bg: "#0c4a6e",
                skill_color: "#e0f2fe",
                item_heading_color: "#f8fafc",
                accent_color: "#38bdf8",
                date_color: "#94a3b8",
                text_color: "#cbd5e1",
            },
            Theme::Creative => ThemeStyle {
                font_family: "'Poppins', sans-serif",
                body_color: "#334155",
                body_bg: "#fef3c7",
                header_padding: "2rem 1rem",
                header_color: "#1e293b",
                header_bg: "#fef3c7",
                header_border_bottom: "none",
                title_color: "#d97706",
                photo_border: "#fcd34d",
                section_bg: "white",
                section_radius: "0.75rem",
                section_shadow: SHADOW_DEFAULT,
                section_title_rule: "#f59e0b",
                section_title_color: "#1e293b",
                bio_color: "#4b5563",
                skill_bg: "#fcd34d",
                skill_color: "#92400e",
                item_heading_color: "#1e293b",
                accent_color: "#d97706",
                date_color: "#64748b",
                text_color: "#4b5563",
            },
            Theme::Elegant => ThemeStyle {
                font_family: "'Playfair Display', serif",
                body_color: "#374151",
                body_bg: "#f9fafb",
                header_padding: "2rem 1rem 3rem",
                header_color: "#1e293b",
                header_bg: "#f9fafb",
                header_border_bottom: "1px solid #e5e7eb",
                title_color: "#6b7280",
                photo_border: "#e5e7eb",
                section_bg: "#ffffff",
                section_radius: "0.125rem",
                section_shadow: SHADOW_ELEGANT,
                section_title_rule: "#6b7280",
                section_title_color: "#1e293b",
                bio_color: "#4b5563",
                skill_bg: "#f3f4f6",
                skill_color: "#374151",
                item_heading_color: "#1e293b",
                accent_color: "#6b7280",
                date_color: "#64748b",
                text_color: "#4b5563",
            },
            Theme::Nature => ThemeStyle {
                font_family: "'Inter', sans-serif",
                body_color: "#334155",
                body_bg: "#f0fdf4",
                header_padding: "2rem 1rem",
                header_color: "#1e293b",
                header_bg: "#f0fdf4",
                header_border_bottom: "none",
                title_color: "#4d7c0f",
                photo_border: "#dcfce7",
                section_bg: "#f8fafc",
                section_radius: "0.5rem",
                section_shadow: SHADOW_DEFAULT,
                section_title_rule: "#4d7c0f",
                section_title_color: "#1e293b",
                bio_color: "#4b5563",
                skill_bg: "#dcfce7",
                skill_color: "#166534",
                item_heading_color: "#1e293b",
                accent_color: "#4d7c0f",
                date_color: "#64748b",
                text_color: "#4b5563",
            },
            Theme::Modern => ThemeStyle {
                font_family: "'Montserrat', sans-serif",
                body_color: "#334155",
                body_bg: "#f0f4fd",
                header_padding: "3rem 1rem 3.5rem",
                header_color: "#1e293b",
                header_bg: "#eef2ff",
                header_border_bottom: "2px solid #4f46e5",
                title_color: "#4f46e5",
                photo_border: "#c7d2fe",
                section_bg: "#f5f5ff",
                section_radius: "0.5rem",
                section_shadow: SHADOW_MODERN,
                section_title_rule: "#4f46e5",
                section_title_color: "#1e293b",
                bio_color: "#4b5563",
                skill_bg: "#e0e7ff",
                skill_color: "#3730a3",
                item_heading_color: "#1e293b",
                accent_color: "#4f46e5",
                date_color: "#64748b",
                text_color: "#4b5563",
            },
        }
    }
}
