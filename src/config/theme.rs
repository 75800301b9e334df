// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

use super::footer::Footer;
use super::nav::NavItem;
use super::search::Search;
use super::sidebar::SidebarEntry;
use super::social::SocialLink;

/// Everything the generator reads from `themeConfig`: navigation trees,
/// social links, footer text and the UI label overrides it recognizes.
#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,

    pub outline_title: String,

    pub lang_menu_label: String,
    pub return_to_top_label: String,
    pub sidebar_menu_label: String,
    pub dark_mode_switch_label: String,
    pub light_mode_switch_title: String,
    pub dark_mode_switch_title: String,

    /// Top navigation bar, in display order.
    pub nav: Vec<NavItem>,

    /// Side panel tree, in display order.
    pub sidebar: Vec<SidebarEntry>,

    pub social_links: Vec<SocialLink>,

    pub footer: Footer,

    pub search: Search,

    pub doc_footer: DocFooter,

    pub last_updated: LastUpdated,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            logo: None,
            site_title: None,
            outline_title: "On this page".to_string(),
            lang_menu_label: "Change language".to_string(),
            return_to_top_label: "Return to top".to_string(),
            sidebar_menu_label: "Menu".to_string(),
            dark_mode_switch_label: "Appearance".to_string(),
            light_mode_switch_title: "Switch to light theme".to_string(),
            dark_mode_switch_title: "Switch to dark theme".to_string(),
            nav: vec![],
            sidebar: vec![],
            social_links: vec![],
            footer: Footer::default(),
            search: Search::default(),
            doc_footer: DocFooter::default(),
            last_updated: LastUpdated::default(),
        }
    }
}

/// Labels of the previous/next links under each page.
#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
#[serde(default)]
pub struct DocFooter {
    pub prev: String,
    pub next: String,
}

impl Default for DocFooter {
    fn default() -> Self {
        Self {
            prev: "Previous page".to_string(),
            next: "Next page".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
#[serde(default)]
pub struct LastUpdated {
    pub text: String,
}

impl Default for LastUpdated {
    fn default() -> Self {
        Self {
            text: "Last updated".to_string(),
        }
    }
}
