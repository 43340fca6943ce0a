//! Page title formatting.

use crate::schema::SiteConfig;

/// Placeholder replaced by the page title in `titleTemplate`.
pub const PLACEHOLDER: &str = "%s";

impl SiteConfig {
    /// Format the document title for a page.
    ///
    /// Uses `titleTemplate` when set, otherwise `"{page} – {title}"`. An
    /// empty page title yields the site title.
    pub fn page_title(&self, page: &str) -> String {
        if page.is_empty() {
            return self.title.clone();
        }

        match &self.title_template {
            Some(template) if template.contains(PLACEHOLDER) => {
                template.replacen(PLACEHOLDER, page, 1)
            }
            _ => format!("{} – {}", page, self.title),
        }
    }

    /// Format the document title for a sidebar route.
    ///
    /// Returns `None` when no sidebar item links to `route`.
    pub fn title_for_route(&self, route: &str) -> Option<String> {
        self.find_sidebar_item(route)
            .map(|(_, item)| self.page_title(&item.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_template() {
        let config = SiteConfig::bloks();

        assert_eq!(config.page_title("Quickstart"), "Quickstart · Bloks");
    }

    #[test]
    fn replaces_only_first_placeholder() {
        let config = SiteConfig {
            title_template: Some("%s | %s".to_string()),
            ..SiteConfig::new("Docs")
        };

        assert_eq!(config.page_title("Intro"), "Intro | %s");
    }

    #[test]
    fn falls_back_without_template() {
        let config = SiteConfig::new("Docs");

        assert_eq!(config.page_title("Intro"), "Intro – Docs");
    }

    #[test]
    fn empty_page_uses_site_title() {
        assert_eq!(SiteConfig::bloks().page_title(""), "Bloks");
    }

    #[test]
    fn formats_route_from_sidebar() {
        let config = SiteConfig::bloks();

        assert_eq!(
            config.title_for_route("/guides/quickstart/"),
            Some("Quickstart · Bloks".to_string())
        );
        assert_eq!(
            config.title_for_route("/introduction/why-bloks"),
            Some("Why Blocks · Bloks".to_string())
        );
        assert_eq!(config.title_for_route("/nope"), None);
    }
}
