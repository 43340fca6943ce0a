//! The site configuration record.

use serde::{Deserialize, Serialize};

use crate::nav::{SidebarItem, SidebarSection, Social, TopNavItem};
use crate::theme::{Theme, Themed};

/// Everything the docs generator needs to know about the site.
///
/// The record is built once when the configuration is loaded and is
/// read-only afterwards. Field names follow the generator's camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title
    pub title: String,

    /// Page title template, `%s` is replaced by the page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,

    /// Absolute URL the site is deployed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Site description for SEO
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Favicon per color scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<Themed<String>>,

    /// Header logo per color scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<Themed<String>>,

    /// Theme colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    /// Top navigation entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_nav: Vec<TopNavItem>,

    /// Social links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub socials: Vec<Social>,

    /// Sidebar sections, top to bottom
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<SidebarSection>,
}

impl SiteConfig {
    /// Create a config with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_template: None,
            base_url: None,
            description: None,
            icon_url: None,
            logo_url: None,
            theme: None,
            top_nav: Vec::new(),
            socials: Vec::new(),
            sidebar: Vec::new(),
        }
    }

    /// The first top navigation entry that is active for `path`.
    pub fn active_top_nav(&self, path: &str) -> Option<&TopNavItem> {
        self.top_nav.iter().find(|item| item.is_active(path))
    }

    /// Every linked sidebar item in display order.
    pub fn sidebar_links(&self) -> impl Iterator<Item = &SidebarItem> {
        self.sidebar.iter().flat_map(|section| section.leaves())
    }

    /// Find the sidebar section and item linking to `route`.
    pub fn find_sidebar_item(&self, route: &str) -> Option<(&SidebarSection, &SidebarItem)> {
        self.sidebar
            .iter()
            .find_map(|section| section.find(route).map(|item| (section, item)))
    }
}
