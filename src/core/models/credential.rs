use std::fmt;

use super::GifError;

/// Giphy API key as configured by the user.
///
/// An empty (or whitespace-only) key means the extension is not configured;
/// [`Credential::check`] is the gate every network entry point goes through.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credential {
    api_key: String,
}

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn check(&self) -> Result<&str, GifError> {
        if self.is_configured() {
            Ok(&self.api_key)
        } else {
            Err(GifError::Configuration)
        }
    }
}

// Keeps the key out of log output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_configured() {
            write!(f, "Credential(configured)")
        } else {
            write!(f, "Credential(unconfigured)")
        }
    }
}
