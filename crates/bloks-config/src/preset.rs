//! The Bloks documentation site.

use crate::nav::{SidebarItem, SidebarSection, Social, SocialIcon, TopNavItem};
use crate::schema::SiteConfig;
use crate::theme::{ColorVariables, Theme, ThemeVariables, Themed};

impl SiteConfig {
    /// Configuration of the Bloks documentation site.
    pub fn bloks() -> Self {
        Self {
            title: "Bloks".to_string(),
            title_template: Some("%s · Bloks".to_string()),
            base_url: Some("https://bloks.sh".to_string()),
            description: Some(
                "Build onchain products faster with a modular Solidity framework.".to_string(),
            ),
            icon_url: Some(Themed::new("/favicons/light.png", "/favicons/dark.png").into_strings()),
            logo_url: Some(Themed::new("/icon-light.png", "/icon-dark.png").into_strings()),
            theme: Some(Theme {
                accent_color: Some(Themed::new("#121212", "#fafafa").into_strings()),
                variables: Some(ThemeVariables {
                    color: ColorVariables {
                        background: Some(Themed::new("#EDECEC", "#222222").into_strings()),
                        border: Some(Themed::new("#EEEEEE", "#333333").into_strings()),
                    },
                }),
            }),
            top_nav: vec![TopNavItem {
                text: "Docs".to_string(),
                link: "/guides/quickstart".to_string(),
                match_prefix: Some("/docs".to_string()),
            }],
            socials: vec![
                Social {
                    icon: SocialIcon::Github,
                    link: "https://github.com/ilikesymmetry/bloks".to_string(),
                },
                Social {
                    icon: SocialIcon::X,
                    link: "https://x.com/ilikesymmetry".to_string(),
                },
            ],
            sidebar: vec![
                SidebarSection {
                    text: "Introduction".to_string(),
                    collapsed: false,
                    items: vec![
                        SidebarItem::link("Why Blocks", "/introduction/why-bloks"),
                        SidebarItem::link("Architecture", "/introduction/architecture"),
                    ],
                },
                SidebarSection {
                    text: "Guides".to_string(),
                    collapsed: false,
                    items: vec![SidebarItem::link("Quickstart", "/guides/quickstart")],
                },
            ],
        }
    }
}
