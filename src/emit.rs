// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use crate::config::Config;
use crate::validate;

/// Build the configuration document the generator consumes. `year` fills
/// the footer copyright placeholder.
pub fn document(config: &Config, year: i32) -> eyre::Result<serde_json::Value> {
    validate::validate(config)?;
    let resolved = config.resolved(year);
    Ok(serde_json::to_value(resolved)?)
}

pub fn to_json_string(config: &Config, year: i32) -> eyre::Result<String> {
    let document = document(config, year)?;
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::nav::NavItem;
    use crate::config::sidebar::SidebarEntry;
    use crate::config::parse_config;

    const FULL: &str = include_str!("../fixtures/full.toml");
    const MINIMAL: &str = include_str!("../fixtures/minimal.toml");
    const BASED: &str = include_str!("../fixtures/based.toml");

    fn nav_item(text: &str, link: &str) -> NavItem {
        NavItem {
            text: text.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_full_variant_top_nav() {
        let config = parse_config(FULL).unwrap();
        assert_eq!(
            config.theme.nav,
            vec![
                nav_item("首页", "/"),
                nav_item("文档", "/src/introduction/introduction"),
            ]
        );
    }

    #[test]
    fn test_minimal_variant_sidebar() {
        let config = parse_config(MINIMAL).unwrap();
        assert_eq!(config.theme.sidebar.len(), 1);
        match &config.theme.sidebar[0] {
            SidebarEntry::Group(group) => {
                assert_eq!(
                    group.items,
                    vec![SidebarEntry::Link(nav_item("基础入门", "/src/vue/basicEntry"))]
                );
            }
            SidebarEntry::Link(_) => panic!("expected a group"),
        }
    }

    #[test]
    fn test_full_variant_copyright_interpolation() {
        let config = parse_config(FULL).unwrap();
        let document = document(&config, 2025).unwrap();
        assert_eq!(
            document["themeConfig"]["footer"]["copyright"],
            "版权所有 © 2019-2025 尤雨溪"
        );
    }

    #[test]
    fn test_based_variant_prefixes_head_links() {
        let config = parse_config(BASED).unwrap();
        let document = document(&config, 2025).unwrap();
        assert_eq!(document["base"], "/knowledge-base/");
        assert_eq!(
            document["head"][0][1]["href"],
            "/knowledge-base/favicon.ico"
        );
    }

    #[test]
    fn test_document_shape() {
        let config = parse_config(FULL).unwrap();
        let document = document(&config, 2025).unwrap();

        // site metadata at the top level, everything else under themeConfig
        assert_eq!(document["lang"], "zh-CN");
        assert_eq!(document["head"][0][0], "link");
        assert!(document.get("base").is_none());
        assert_eq!(document["themeConfig"]["docFooter"]["prev"], "上一页");
        assert_eq!(document["themeConfig"]["lastUpdated"]["text"], "最后更新于");
        assert_eq!(document["themeConfig"]["socialLinks"][0]["icon"], "github");
    }

    #[test]
    fn test_round_trip_equality() {
        for fixture in [FULL, MINIMAL, BASED] {
            let config = parse_config(fixture).unwrap();
            let resolved = config.resolved(2025);
            let document = document(&config, 2025).unwrap();
            let reparsed: crate::config::Config = serde_json::from_value(document).unwrap();
            assert_eq!(reparsed, resolved);
        }
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let config = parse_config(r#"title = """#).unwrap();
        assert!(document(&config, 2025).is_err());
    }
}
