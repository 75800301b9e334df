// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::sync::LazyLock;

use itertools::Itertools;
use regex_lite::Regex;

use crate::config::nav::NavItem;
use crate::config::sidebar::{SidebarEntry, SidebarGroup};
use crate::config::Config;

/// Structural shape of a BCP-47 language tag, e.g. `en`, `zh-CN`.
static LANG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").unwrap());

/// Check a configuration before handing it to the generator, failing on
/// the first violation. Error messages name the offending field path.
pub fn validate(config: &Config) -> eyre::Result<()> {
    let site = &config.site;

    require_non_empty(&site.title, "title")?;
    require_non_empty(&site.description, "description")?;

    if !LANG_TAG.is_match(&site.lang) {
        return Err(eyre::eyre!(
            "lang `{}` is not a valid BCP-47 language tag",
            site.lang
        ));
    }

    if let Some(base) = &site.base {
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(eyre::eyre!("base `{}` must start and end with `/`", base));
        }
    }

    for (i, tag) in site.head.iter().enumerate() {
        require_non_empty(&tag.0, &format!("head[{i}]"))?;
    }

    let theme = &config.theme;

    for (i, item) in theme.nav.iter().enumerate() {
        check_nav_item(item, &format!("themeConfig.nav[{i}]"))?;
    }
    if let Some(link) = duplicate_link(theme.nav.iter().map(|item| item.link.as_str())) {
        return Err(eyre::eyre!("duplicate link `{link}` in themeConfig.nav"));
    }

    for (i, entry) in theme.sidebar.iter().enumerate() {
        check_sidebar_entry(entry, &format!("themeConfig.sidebar[{i}]"))?;
    }

    for (i, social) in theme.social_links.iter().enumerate() {
        let at = format!("themeConfig.socialLinks[{i}].link");
        let parsed = url::Url::parse(&social.link)
            .map_err(|e| eyre::eyre!("{at}: invalid URL `{}`: {e}", social.link))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(eyre::eyre!(
                "{at}: scheme `{}` not supported, must be http or https",
                parsed.scheme()
            ));
        }
    }

    require_non_empty(&theme.footer.message, "themeConfig.footer.message")?;
    require_non_empty(&theme.footer.copyright, "themeConfig.footer.copyright")?;

    // Every recognized UI label must carry a non-empty string in the
    // site's declared language.
    require_non_empty(&theme.outline_title, "themeConfig.outlineTitle")?;
    require_non_empty(&theme.doc_footer.prev, "themeConfig.docFooter.prev")?;
    require_non_empty(&theme.doc_footer.next, "themeConfig.docFooter.next")?;
    require_non_empty(&theme.last_updated.text, "themeConfig.lastUpdated.text")?;
    require_non_empty(&theme.lang_menu_label, "themeConfig.langMenuLabel")?;
    require_non_empty(&theme.return_to_top_label, "themeConfig.returnToTopLabel")?;
    require_non_empty(&theme.sidebar_menu_label, "themeConfig.sidebarMenuLabel")?;
    require_non_empty(
        &theme.dark_mode_switch_label,
        "themeConfig.darkModeSwitchLabel",
    )?;
    require_non_empty(
        &theme.light_mode_switch_title,
        "themeConfig.lightModeSwitchTitle",
    )?;
    require_non_empty(
        &theme.dark_mode_switch_title,
        "themeConfig.darkModeSwitchTitle",
    )?;

    let search = &theme.search;
    require_non_empty(&search.button.button_text, "search.button.buttonText")?;
    require_non_empty(
        &search.button.button_aria_label,
        "search.button.buttonAriaLabel",
    )?;
    require_non_empty(&search.modal.no_results_text, "search.modal.noResultsText")?;
    require_non_empty(
        &search.modal.reset_button_title,
        "search.modal.resetButtonTitle",
    )?;
    require_non_empty(&search.modal.footer.select_text, "search.modal.footer.selectText")?;
    require_non_empty(
        &search.modal.footer.navigate_text,
        "search.modal.footer.navigateText",
    )?;
    require_non_empty(&search.modal.footer.close_text, "search.modal.footer.closeText")?;

    Ok(())
}

fn require_non_empty(value: &str, at: &str) -> eyre::Result<()> {
    if value.trim().is_empty() {
        return Err(eyre::eyre!("{at} must be a non-empty string"));
    }
    Ok(())
}

fn check_link(link: &str, at: &str) -> eyre::Result<()> {
    if link.is_empty() {
        return Err(eyre::eyre!("{at} must be a non-empty path"));
    }
    if !link.starts_with('/') {
        return Err(eyre::eyre!("{at}: `{link}` must start with `/`"));
    }
    Ok(())
}

fn check_nav_item(item: &NavItem, at: &str) -> eyre::Result<()> {
    require_non_empty(&item.text, &format!("{at}.text"))?;
    check_link(&item.link, &format!("{at}.link"))
}

fn check_sidebar_entry(entry: &SidebarEntry, at: &str) -> eyre::Result<()> {
    match entry {
        SidebarEntry::Group(group) => check_sidebar_group(group, at),
        SidebarEntry::Link(item) => check_nav_item(item, at),
    }
}

fn check_sidebar_group(group: &SidebarGroup, at: &str) -> eyre::Result<()> {
    require_non_empty(&group.text, &format!("{at}.text"))?;

    // Placeholder groups are omitted from the data, never shipped empty.
    if group.items.is_empty() {
        return Err(eyre::eyre!("{at}.items is empty, omit the group instead"));
    }

    for (i, entry) in group.items.iter().enumerate() {
        check_sidebar_entry(entry, &format!("{at}.items[{i}]"))?;
    }

    let links = group.items.iter().filter_map(|entry| match entry {
        SidebarEntry::Link(item) => Some(item.link.as_str()),
        SidebarEntry::Group(_) => None,
    });
    if let Some(link) = duplicate_link(links) {
        return Err(eyre::eyre!("duplicate link `{link}` in {at}.items"));
    }

    Ok(())
}

fn duplicate_link<'a>(links: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    links.duplicates().next()
}
