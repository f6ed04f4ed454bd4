mod credential;
mod embed_fragment;
mod gif_error;
mod notice;
mod plugin_surface;
mod user_settings;

pub use credential::Credential;
pub use embed_fragment::EmbedFragment;
pub use gif_error::{FetchError, GifError};
pub use notice::{Notice, NoticeDuration};
pub use plugin_surface::{CommandDescriptor, SettingsField, SettingsPanel};
pub use user_settings::UserSettings;
