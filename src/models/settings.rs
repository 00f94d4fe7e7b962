use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate_email_domain;
use crate::repositories::Record;

pub const DEFAULT_HERO_TITLE: &str = "INNOVATE. BUILD. TRANSFORM WITH AXIOM.";
pub const DEFAULT_HERO_SUBTITLE: &str =
    "We design smart digital experiences that move businesses forward.";

/// Editable site-wide settings. The `sitesettings` collection holds a single
/// document of this shape; every field has a default so an empty payload is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct SiteSettings {
    #[serde(default = "default_hero_title")]
    pub hero_title: String,
    #[serde(default = "default_hero_subtitle")]
    pub hero_subtitle: String,
    /// E.164 phone number used for WhatsApp links.
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    #[validate(email, custom(function = "validate_email_domain"))]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub address_line: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default = "default_stat")]
    #[validate(range(min = 0))]
    pub stat_projects: Option<i64>,
    #[serde(default = "default_stat")]
    #[validate(range(min = 0))]
    pub stat_clients: Option<i64>,
    #[serde(default = "default_stat")]
    #[validate(range(min = 0))]
    pub stat_awards: Option<i64>,
    #[serde(default = "default_dark_theme")]
    pub theme_default_dark: bool,
}

fn default_hero_title() -> String {
    DEFAULT_HERO_TITLE.to_string()
}

fn default_hero_subtitle() -> String {
    DEFAULT_HERO_SUBTITLE.to_string()
}

fn default_stat() -> Option<i64> {
    Some(0)
}

fn default_dark_theme() -> bool {
    true
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            hero_title: default_hero_title(),
            hero_subtitle: default_hero_subtitle(),
            whatsapp_number: None,
            contact_email: None,
            address_line: None,
            city: None,
            country: None,
            stat_projects: default_stat(),
            stat_clients: default_stat(),
            stat_awards: default_stat(),
            theme_default_dark: default_dark_theme(),
        }
    }
}

impl Record for SiteSettings {
    const COLLECTION: &'static str = "sitesettings";
    const LABEL: &'static str = "Site settings";
}
