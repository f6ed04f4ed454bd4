#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeDuration {
    Transient,
    UntilDismissed,
}

/// User-visible message shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub duration: NoticeDuration,
}

impl Notice {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: NoticeDuration::Transient,
        }
    }

    pub fn until_dismissed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: NoticeDuration::UntilDismissed,
        }
    }
}
