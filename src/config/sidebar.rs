// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

use super::nav::NavItem;

/// One entry in the side panel: either a collapsible group of further
/// entries or a plain page link. Untagged on the wire, a group is
/// recognized by its `items` field.
#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    Group(SidebarGroup),
    Link(NavItem),
}

/// A named, collapsible cluster of sidebar entries. The order of `items`
/// is the display order.
#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
pub struct SidebarGroup {
    pub text: String,

    #[serde(default)]
    pub collapsed: bool,

    pub items: Vec<SidebarEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize)]
    struct Doc {
        sidebar: Vec<SidebarEntry>,
    }

    #[test]
    fn test_untagged_group_and_link() {
        let doc: Doc = toml::from_str(
            r#"
            sidebar = [
                { text = "技术文档", collapsed = true, items = [
                    { text = "基础入门", link = "/src/vue/basicEntry" },
                ] },
                { text = "关于", link = "/about" },
            ]
            "#,
        )
        .unwrap();
        let entries = doc.sidebar;

        match &entries[0] {
            SidebarEntry::Group(group) => {
                assert_eq!(group.text, "技术文档");
                assert!(group.collapsed);
                assert_eq!(group.items.len(), 1);
            }
            SidebarEntry::Link(_) => panic!("expected a group"),
        }
        match &entries[1] {
            SidebarEntry::Link(item) => assert_eq!(item.link, "/about"),
            SidebarEntry::Group(_) => panic!("expected a link"),
        }
    }

    #[test]
    fn test_nested_groups() {
        let group: SidebarGroup = toml::from_str(
            r#"
            text = "Vue"
            items = [
                { text = "组件", items = [
                    { text = "基础", link = "/src/vue/component" },
                ] },
            ]
            "#,
        )
        .unwrap();

        assert!(!group.collapsed);
        match &group.items[0] {
            SidebarEntry::Group(inner) => match &inner.items[0] {
                SidebarEntry::Link(item) => assert_eq!(item.link, "/src/vue/component"),
                SidebarEntry::Group(_) => panic!("expected a link"),
            },
            SidebarEntry::Link(_) => panic!("expected a nested group"),
        }
    }
}
