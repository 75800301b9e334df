// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Footer message and copyright line. The copyright may carry a `{year}`
/// placeholder filled in at emit time.
#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
#[serde(default)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            message: "Released under the MIT License.".to_string(),
            copyright: "Copyright © {year}".to_string(),
        }
    }
}

impl Footer {
    pub fn interpolate(&self, year: i32) -> Footer {
        Footer {
            message: self.message.clone(),
            copyright: self.copyright.replace(YEAR_PLACEHOLDER, &year.to_string()),
        }
    }
}
