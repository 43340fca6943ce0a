//! Site configuration schema for the Bloks documentation site.
//!
//! This crate provides the typed configuration record consumed by the docs
//! generator (titles, theme colors, navigation and sidebar), together with
//! loading, validation and the small lookups built on top of it.

pub mod loader;
pub mod nav;
pub mod preset;
pub mod schema;
pub mod theme;
pub mod title;
pub mod validate;

pub use loader::{ConfigError, ConfigFormat};
pub use nav::{SidebarItem, SidebarSection, Social, SocialIcon, TopNavItem};
pub use schema::SiteConfig;
pub use theme::{ColorVariables, Theme, ThemeVariables, Themed};
pub use validate::{Diagnostic, Report, Severity};
