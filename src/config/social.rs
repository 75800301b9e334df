// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An icon-and-URL pair shown in the site header.
#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

/// The icons the generator knows how to render.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum SocialIcon {
    #[serde(rename = "github")]
    Github,

    #[serde(rename = "gitee")]
    Gitee,

    #[serde(rename = "twitter")]
    Twitter,

    #[serde(rename = "discord")]
    Discord,

    #[serde(rename = "youtube")]
    Youtube,

    #[serde(rename = "bilibili")]
    Bilibili,
}

#[derive(Debug)]
pub struct ParseSocialIconError;

impl FromStr for SocialIcon {
    type Err = ParseSocialIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(SocialIcon::Github),
            "gitee" => Ok(SocialIcon::Gitee),
            "twitter" => Ok(SocialIcon::Twitter),
            "discord" => Ok(SocialIcon::Discord),
            "youtube" => Ok(SocialIcon::Youtube),
            "bilibili" => Ok(SocialIcon::Bilibili),
            _ => Err(ParseSocialIconError),
        }
    }
}

impl std::fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialIcon::Github => write!(f, "github"),
            SocialIcon::Gitee => write!(f, "gitee"),
            SocialIcon::Twitter => write!(f, "twitter"),
            SocialIcon::Discord => write!(f, "discord"),
            SocialIcon::Youtube => write!(f, "youtube"),
            SocialIcon::Bilibili => write!(f, "bilibili"),
        }
    }
}
