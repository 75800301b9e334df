// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_BASE_URL: &str = "/";

/// Site metadata: everything the generator reads outside of `themeConfig`.
#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
#[serde(default)]
pub struct Site {
    /// Deployment path prefix. Must start and end with `/` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    pub lang: String,
    pub title: String,
    pub description: String,

    /// Extra head tags, e.g. the favicon link.
    pub head: Vec<HeadTag>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            base: None,
            lang: DEFAULT_LANG.to_string(),
            title: "Documentation".to_string(),
            description: "A sitepress documentation site".to_string(),
            head: vec![],
        }
    }
}

impl Site {
    pub fn base_url(&self) -> &str {
        self.base.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// URLs keep posix style, so the type of the return value is [`String`].
    pub fn full_url(&self, path: &str) -> String {
        let base_url = self.base_url();
        if let Some(stripped) = path.strip_prefix('/') {
            return format!("{}{}", base_url, stripped);
        } else if let Some(stripped) = path.strip_prefix("./") {
            return format!("{}{}", base_url, stripped);
        }
        format!("{}{}", base_url, path)
    }
}

/// A head tag descriptor, serialized as the two-element form the generator
/// reads: `["link", { rel = "icon", href = "/favicon.ico" }]`.
///
/// Attribute order is preserved on the wire.
#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
pub struct HeadTag(pub String, pub IndexMap<String, String>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_without_base() {
        let site = Site::default();
        assert_eq!(site.full_url("/favicon.ico"), "/favicon.ico");
        assert_eq!(site.full_url("./logo.png"), "/logo.png");
        assert_eq!(site.full_url("logo.png"), "/logo.png");
    }

    #[test]
    fn test_full_url_with_base() {
        let site = Site {
            base: Some("/knowledge-base/".to_string()),
            ..Site::default()
        };
        assert_eq!(site.full_url("/favicon.ico"), "/knowledge-base/favicon.ico");
        assert_eq!(site.full_url("logo.png"), "/knowledge-base/logo.png");
    }
}
