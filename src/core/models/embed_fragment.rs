use std::fmt;

use crate::global_constants;

/// Markdown image reference for one gif, terminated by a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFragment(String);

impl EmbedFragment {
    pub fn from_url(url: &str) -> Self {
        Self(format!(
            "![{}]({}){}",
            global_constants::EMBED_ALT_TEXT,
            url,
            global_constants::EMBED_BLOCK_SEPARATOR
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmbedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
