use crate::core::interfaces::adapters::HostSurface;
use crate::core::models::{Notice, NoticeDuration};

/// Host surface for the terminal: notices go to stderr and the settings
/// panel is replaced by a hint pointing at the `set-api-key` subcommand.
pub struct ConsoleHostSurface;

impl ConsoleHostSurface {
    pub fn initialize() -> Self {
        Self
    }
}

impl HostSurface for ConsoleHostSurface {
    fn show_notice(&self, notice: Notice) {
        match notice.duration {
            NoticeDuration::UntilDismissed => eprintln!("[!] {}", notice.message),
            NoticeDuration::Transient => eprintln!("{}", notice.message),
        }
    }

    fn open_settings_tab(&self, tab_id: &str) {
        log::info!("[HOST] Opening settings tab {}", tab_id);
        eprintln!("Run `giphy-inserter set-api-key <KEY>` to configure {}.", tab_id);
    }
}
