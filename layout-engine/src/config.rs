//! Site-wide configuration: default page metadata and head links

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// A `<link>` entry for a favicon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavIcon {
    pub rel: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Site defaults, loaded once and shared by every layout instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_title: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub site_keywords: String,
    #[serde(default)]
    pub site_canonical_url: String,
    #[serde(default)]
    pub fav_icons: Vec<FavIcon>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Dashboard".to_string(),
            site_description: String::new(),
            site_keywords: String::new(),
            site_canonical_url: String::new(),
            fav_icons: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON site configuration.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if self.site_title.trim().is_empty() {
            return Err(LayoutError::InvalidConfig("siteTitle must not be empty".to_string()));
        }
        if let Some(icon) = self.fav_icons.iter().find(|icon| icon.href.is_empty()) {
            return Err(LayoutError::InvalidConfig(format!(
                "favicon with rel '{}' has an empty href",
                icon.rel
            )));
        }
        Ok(())
    }
}

/// Per-instance layout options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// The sidebar turns slim instead of hiding when collapsed at lg/xl
    pub slim_capable: bool,
    /// Client reported as a mobile device; starts with the sidebar collapsed
    pub is_mobile: bool,
}
