// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

/// A leaf navigation entry: display text plus a root-relative page link.
#[derive(Deserialize, Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}
