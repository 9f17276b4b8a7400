use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which half of `[[A|B]]` is the page and which is the displayed text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WikilinkStyle {
    /// `[[Title|Link]]`
    #[default]
    TitleLink,
    /// `[[Link|Title]]`
    LinkTitle,
}

/// Per-render environment, owned by the caller and visible to every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderEnv {
    pub wikilink_style: WikilinkStyle,
    /// URL of the page being rendered; `./` links resolve against it.
    pub page_url: Option<String>,
    /// Caller-defined values, passed through untouched.
    pub extras: BTreeMap<String, String>,
}

impl RenderEnv {
    #[must_use]
    pub fn with_wikilink_style(mut self, style: WikilinkStyle) -> Self {
        self.wikilink_style = style;
        self
    }

    #[must_use]
    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }
}
