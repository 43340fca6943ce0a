//! Top navigation, social links and the sidebar tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An entry in the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopNavItem {
    /// Display text
    pub text: String,

    /// Target path or URL
    pub link: String,

    /// Path prefix that marks this entry as active
    #[serde(default, rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_prefix: Option<String>,
}

impl TopNavItem {
    /// Whether this entry should be highlighted for `path`.
    ///
    /// With a match prefix the entry is active on the prefix and everything
    /// below it; without one it is only active on its own link.
    pub fn is_active(&self, path: &str) -> bool {
        match &self.match_prefix {
            Some(prefix) => has_path_prefix(path, prefix),
            None => normalize_route(path) == normalize_route(&self.link),
        }
    }
}

/// Icons the generator knows how to draw for social links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Github,
    Telegram,
    Warpcast,
    X,
}

impl SocialIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialIcon::Discord => "discord",
            SocialIcon::Github => "github",
            SocialIcon::Telegram => "telegram",
            SocialIcon::Warpcast => "warpcast",
            SocialIcon::X => "x",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A social link shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Social {
    pub icon: SocialIcon,
    pub link: String,
}

/// A named, collapsible group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarSection {
    /// Section heading
    pub text: String,

    /// Whether the section starts collapsed
    #[serde(default)]
    pub collapsed: bool,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

/// A sidebar entry: a leaf link, or a nested group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarItem {
    /// Display text
    pub text: String,

    /// Target path; required on leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Whether a nested group starts collapsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    /// Nested entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

impl SidebarItem {
    /// Create a leaf item.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            collapsed: None,
            items: Vec::new(),
        }
    }

    /// Whether this item groups other items.
    pub fn is_group(&self) -> bool {
        !self.items.is_empty()
    }

    /// Whether this item links to `route`, ignoring a trailing slash.
    pub fn links_to(&self, route: &str) -> bool {
        self.link
            .as_deref()
            .is_some_and(|link| normalize_route(link) == normalize_route(route))
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a SidebarItem>) {
        if self.link.is_some() {
            out.push(self);
        }
        for child in &self.items {
            child.collect_leaves(out);
        }
    }
}

impl SidebarSection {
    /// All linked items in the section, depth-first in display order.
    ///
    /// A group that also carries a link is yielded before its children.
    pub fn leaves(&self) -> Vec<&SidebarItem> {
        let mut out = Vec::new();
        for item in &self.items {
            item.collect_leaves(&mut out);
        }
        out
    }

    /// Find the linked item for `route`.
    pub fn find(&self, route: &str) -> Option<&SidebarItem> {
        self.leaves().into_iter().find(|item| item.links_to(route))
    }
}

/// Strip a trailing slash, keeping the root path intact.
pub(crate) fn normalize_route(route: &str) -> &str {
    if route.len() > 1 {
        route.trim_end_matches('/')
    } else {
        route
    }
}

/// Whether `path` equals `prefix` or lies below it.
pub(crate) fn has_path_prefix(path: &str, prefix: &str) -> bool {
    let prefix = normalize_route(prefix);
    if prefix == "/" {
        return path.starts_with('/');
    }

    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs_nav() -> TopNavItem {
        TopNavItem {
            text: "Docs".to_string(),
            link: "/guides/quickstart".to_string(),
            match_prefix: Some("/docs".to_string()),
        }
    }

    #[test]
    fn match_prefix_highlights_subtree() {
        let nav = docs_nav();

        assert!(nav.is_active("/docs"));
        assert!(nav.is_active("/docs/install"));
        assert!(!nav.is_active("/docsearch"));
        assert!(!nav.is_active("/guides/quickstart"));
    }

    #[test]
    fn without_match_only_own_link_is_active() {
        let nav = TopNavItem {
            match_prefix: None,
            ..docs_nav()
        };

        assert!(nav.is_active("/guides/quickstart/"));
        assert!(!nav.is_active("/guides"));
    }

    #[test]
    fn parses_match_keyword() {
        let nav: TopNavItem = serde_json::from_str(
            r#"{"text": "Docs", "link": "/guides/quickstart", "match": "/docs"}"#,
        )
        .unwrap();

        assert_eq!(nav, docs_nav());
    }

    #[test]
    fn rejects_unknown_icon() {
        let result: Result<Social, _> =
            serde_json::from_str(r#"{"icon": "myspace", "link": "https://myspace.com"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn icon_displays_wire_name() {
        assert_eq!(SocialIcon::Github.to_string(), "github");
        assert_eq!(
            serde_json::to_string(&SocialIcon::Warpcast).unwrap(),
            "\"warpcast\""
        );
    }

    #[test]
    fn collapsed_defaults_to_false() {
        let section: SidebarSection = serde_json::from_str(
            r#"{"text": "Guides", "items": [{"text": "Quickstart", "link": "/guides/quickstart"}]}"#,
        )
        .unwrap();

        assert!(!section.collapsed);
        assert_eq!(section.items.len(), 1);
    }

    #[test]
    fn leaves_walk_nested_groups_in_order() {
        let section = SidebarSection {
            text: "Reference".to_string(),
            collapsed: false,
            items: vec![
                SidebarItem::link("Overview", "/reference"),
                SidebarItem {
                    text: "Modules".to_string(),
                    link: None,
                    collapsed: Some(true),
                    items: vec![
                        SidebarItem::link("Ownable", "/reference/ownable"),
                        SidebarItem::link("Pausable", "/reference/pausable"),
                    ],
                },
                SidebarItem::link("Errors", "/reference/errors"),
            ],
        };

        let texts: Vec<_> = section.leaves().iter().map(|i| i.text.as_str()).collect();

        assert_eq!(texts, vec!["Overview", "Ownable", "Pausable", "Errors"]);
        assert!(section.items[1].is_group());
        assert_eq!(
            section.find("/reference/pausable/").map(|i| i.text.as_str()),
            Some("Pausable")
        );
    }

    #[test]
    fn root_prefix_matches_everything() {
        assert!(has_path_prefix("/anything", "/"));
        assert!(has_path_prefix("/guides/", "/guides/"));
    }
}
