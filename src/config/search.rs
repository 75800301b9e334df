// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

/// Translation strings for the built-in search panel.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Serialize)]
#[serde(default)]
pub struct Search {
    pub button: SearchButton,
    pub modal: SearchModal,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchButton {
    pub button_text: String,
    pub button_aria_label: String,
}

impl Default for SearchButton {
    fn default() -> Self {
        Self {
            button_text: "Search".to_string(),
            button_aria_label: "Search".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchModal {
    pub no_results_text: String,
    pub reset_button_title: String,
    pub footer: SearchModalFooter,
}

impl Default for SearchModal {
    fn default() -> Self {
        Self {
            no_results_text: "No results for".to_string(),
            reset_button_title: "Reset search".to_string(),
            footer: SearchModalFooter::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchModalFooter {
    pub select_text: String,
    pub navigate_text: String,
    pub close_text: String,
}

impl Default for SearchModalFooter {
    fn default() -> Self {
        Self {
            select_text: "to select".to_string(),
            navigate_text: "to navigate".to_string(),
            close_text: "to close".to_string(),
        }
    }
}
