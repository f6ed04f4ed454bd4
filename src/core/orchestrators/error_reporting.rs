use crate::core::interfaces::adapters::HostSurface;
use crate::core::models::{GifError, Notice};
use crate::global_constants;

/// Shows `error` to the user. A missing API key also sends the user to
/// the settings panel of this extension.
pub fn surface_error(host: &dyn HostSurface, error: &GifError) {
    match error {
        GifError::Configuration => {
            log::warn!("[PLUGIN] API key is not configured");
            host.show_notice(Notice::until_dismissed(
                global_constants::NOTICE_CONFIGURE_API_KEY,
            ));
            host.open_settings_tab(global_constants::PLUGIN_ID);
        }
        GifError::Fetch(fetch_error) => {
            log::error!("[PLUGIN] Giphy request failed: {}", fetch_error);
            host.show_notice(Notice::transient(format!(
                "{}: {}",
                global_constants::NOTICE_FETCH_FAILED,
                fetch_error
            )));
        }
        GifError::Insertion(reason) => {
            log::error!("[PLUGIN] Insertion failed: {}", reason);
            host.show_notice(Notice::transient(global_constants::NOTICE_INSERT_FAILED));
        }
    }
}
