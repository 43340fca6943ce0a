//! Color-scheme aware values and theme colors.

use serde::{Deserialize, Serialize};

/// A value that has one variant per color scheme.
///
/// Both variants are required; a pair with only `light` or only `dark`
/// fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Themed<T> {
    /// Value used with the light color scheme
    pub light: T,

    /// Value used with the dark color scheme
    pub dark: T,
}

impl<T> Themed<T> {
    pub fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }
}

impl<T: Into<String>> Themed<T> {
    /// Convert both variants to owned strings.
    pub fn into_strings(self) -> Themed<String> {
        Themed {
            light: self.light.into(),
            dark: self.dark.into(),
        }
    }
}

impl Themed<String> {
    /// Iterate over `(scheme, value)` pairs, light first.
    pub fn schemes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("light", self.light.as_str()), ("dark", self.dark.as_str())].into_iter()
    }
}

/// Theme overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    /// Accent color for links and highlights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<Themed<String>>,

    /// CSS variable overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<ThemeVariables>,
}

/// CSS variable overrides, grouped the way the generator groups them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeVariables {
    #[serde(default)]
    pub color: ColorVariables,
}

/// Color variable overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorVariables {
    /// Page background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Themed<String>>,

    /// Borders and separators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Themed<String>>,
}

impl Theme {
    /// All color pairs with their dotted field paths, in declaration order.
    pub fn colors(&self) -> Vec<(&'static str, &Themed<String>)> {
        let mut colors = Vec::new();

        if let Some(accent) = &self.accent_color {
            colors.push(("theme.accentColor", accent));
        }

        if let Some(vars) = &self.variables {
            if let Some(background) = &vars.color.background {
                colors.push(("theme.variables.color.background", background));
            }
            if let Some(border) = &vars.color.border {
                colors.push(("theme.variables.color.border", border));
            }
        }

        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_partial_pair() {
        let result: Result<Themed<String>, _> = serde_json::from_str(r##"{"light": "#fff"}"##);

        assert!(result.is_err());
    }

    #[test]
    fn parses_nested_variables() {
        let theme: Theme = serde_json::from_str(
            r##"{
                "accentColor": { "light": "#121212", "dark": "#fafafa" },
                "variables": {
                    "color": {
                        "border": { "light": "#EEEEEE", "dark": "#333333" }
                    }
                }
            }"##,
        )
        .unwrap();

        let paths: Vec<_> = theme.colors().into_iter().map(|(path, _)| path).collect();

        assert_eq!(
            paths,
            vec!["theme.accentColor", "theme.variables.color.border"]
        );
    }

    #[test]
    fn rejects_flattened_colors() {
        let result: Result<Theme, _> =
            serde_json::from_str(r##"{"background": {"light": "#fff", "dark": "#000"}}"##);

        assert!(result.is_err());
    }
}
