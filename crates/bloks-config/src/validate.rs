//! Structural and consistency checks for a site configuration.
//!
//! Errors describe a config the generator would reject or render wrongly.
//! Warnings describe documentation inconsistencies the schema allows, such
//! as a top-nav match prefix that no sidebar page falls under.

use std::collections::HashSet;
use std::fmt;

use crate::loader::ConfigError;
use crate::nav::{has_path_prefix, normalize_route, SidebarItem};
use crate::schema::SiteConfig;
use crate::theme::Themed;
use crate::title::PLACEHOLDER;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A single finding, tied to a dotted field path such as `sidebar[0].items[1].link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub field: String,
    pub message: String,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(field, message)
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}

/// All diagnostics produced by [`SiteConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// True when there are no errors. Warnings do not count.
    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Fail with [`ConfigError::Invalid`] if the report contains errors.
    pub fn into_result(self) -> Result<Report, ConfigError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(self))
        }
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl SiteConfig {
    /// Check the configuration for structural problems and inconsistencies.
    pub fn validate(&self) -> Report {
        let mut report = Report::default();

        self.check_site(&mut report);
        self.check_assets(&mut report);
        self.check_top_nav(&mut report);
        self.check_socials(&mut report);
        self.check_sidebar(&mut report);

        report
    }

    fn check_site(&self, report: &mut Report) {
        if self.title.trim().is_empty() {
            report.push(Diagnostic::error("title", "site title is empty"));
        }

        if let Some(template) = &self.title_template {
            if !template.contains(PLACEHOLDER) {
                report.push(
                    Diagnostic::error("titleTemplate", "template has no %s placeholder")
                        .with_hint(format!("for example \"%s · {}\"", self.title)),
                );
            }
        }

        if let Some(base_url) = &self.base_url {
            if !is_absolute_url(base_url) {
                report.push(Diagnostic::error(
                    "baseUrl",
                    format!("'{}' is not an absolute http(s) URL", base_url),
                ));
            }
        }
    }

    fn check_assets(&self, report: &mut Report) {
        if let Some(icon) = &self.icon_url {
            check_pair(report, "iconUrl", icon);
        }
        if let Some(logo) = &self.logo_url {
            check_pair(report, "logoUrl", logo);
        }
        if let Some(theme) = &self.theme {
            for (field, pair) in theme.colors() {
                check_pair(report, field, pair);
            }
        }
    }

    fn check_top_nav(&self, report: &mut Report) {
        let sidebar_links: Vec<&str> = self
            .sidebar_links()
            .filter_map(|item| item.link.as_deref())
            .collect();

        for (i, item) in self.top_nav.iter().enumerate() {
            let field = format!("topNav[{}]", i);
            check_text(report, &field, &item.text);
            check_link(report, &format!("{}.link", field), &item.link);

            let Some(prefix) = &item.match_prefix else {
                continue;
            };

            if !prefix.starts_with('/') {
                report.push(Diagnostic::error(
                    format!("{}.match", field),
                    format!("match prefix '{}' must start with '/'", prefix),
                ));
            } else if !sidebar_links
                .iter()
                .any(|link| has_path_prefix(link, prefix))
            {
                report.push(
                    Diagnostic::warning(
                        format!("{}.match", field),
                        format!("no sidebar page lives under '{}'", prefix),
                    )
                    .with_hint("the entry is never highlighted from a sidebar page"),
                );
            }
        }
    }

    fn check_socials(&self, report: &mut Report) {
        for (i, social) in self.socials.iter().enumerate() {
            let field = format!("socials[{}].link", i);
            if !social.link.is_empty() && !is_absolute_url(&social.link) {
                report.push(Diagnostic::error(
                    field,
                    format!("{} link '{}' is not an absolute URL", social.icon, social.link),
                ));
            } else {
                check_link(report, &field, &social.link);
            }
        }
    }

    fn check_sidebar(&self, report: &mut Report) {
        let mut seen = HashSet::new();

        for (i, section) in self.sidebar.iter().enumerate() {
            let field = format!("sidebar[{}]", i);
            check_text(report, &field, &section.text);

            if section.items.is_empty() {
                report.push(Diagnostic::warning(
                    format!("{}.items", field),
                    format!("section '{}' has no items", section.text),
                ));
            }

            for (j, item) in section.items.iter().enumerate() {
                check_sidebar_item(report, &format!("{}.items[{}]", field, j), item, &mut seen);
            }
        }
    }
}

fn check_sidebar_item<'a>(
    report: &mut Report,
    field: &str,
    item: &'a SidebarItem,
    seen: &mut HashSet<&'a str>,
) {
    check_text(report, field, &item.text);

    match &item.link {
        Some(link) => {
            let link_field = format!("{}.link", field);
            if link.is_empty() {
                report.push(Diagnostic::error(link_field, "link is empty"));
            } else if !link.starts_with('/') {
                report.push(
                    Diagnostic::error(
                        link_field,
                        format!("sidebar link '{}' is not a site path", link),
                    )
                    .with_hint("sidebar links point at pages and start with '/'"),
                );
            } else if !seen.insert(normalize_route(link)) {
                report.push(Diagnostic::warning(
                    link_field,
                    format!("'{}' appears more than once in the sidebar", link),
                ));
            }
        }
        None if !item.is_group() => {
            report.push(Diagnostic::error(
                field,
                format!("item '{}' has neither a link nor nested items", item.text),
            ));
        }
        None => {}
    }

    for (k, child) in item.items.iter().enumerate() {
        check_sidebar_item(report, &format!("{}.items[{}]", field, k), child, seen);
    }
}

fn check_pair(report: &mut Report, field: &str, pair: &Themed<String>) {
    for (scheme, value) in pair.schemes() {
        if value.trim().is_empty() {
            report.push(Diagnostic::error(
                format!("{}.{}", field, scheme),
                format!("{} value is empty", scheme),
            ));
        }
    }
}

fn check_text(report: &mut Report, field: &str, text: &str) {
    if text.trim().is_empty() {
        report.push(Diagnostic::error(format!("{}.text", field), "text is empty"));
    }
}

fn check_link(report: &mut Report, field: &str, link: &str) {
    if link.is_empty() {
        report.push(Diagnostic::error(field, "link is empty"));
    } else if !link.starts_with('/') && !is_absolute_url(link) {
        report.push(Diagnostic::error(
            field,
            format!("'{}' is neither a site path nor an absolute URL", link),
        ));
    }
}

fn is_absolute_url(url: &str) -> bool {
    ["https://", "http://"].iter().any(|scheme| {
        url.strip_prefix(scheme)
            .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'))
    })
}
