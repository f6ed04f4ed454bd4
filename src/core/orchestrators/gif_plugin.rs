use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use super::error_reporting::surface_error;
use super::search_flow::{SearchFlowController, SearchFlowMessage};
use crate::core::interfaces::adapters::{GifProvider, HostSurface, InsertionSink};
use crate::core::models::{
    CommandDescriptor, Credential, EmbedFragment, GifError, SettingsField, SettingsPanel,
    UserSettings,
};
use crate::global_constants;

pub const RANDOM_GIF_COMMAND: CommandDescriptor = CommandDescriptor {
    id: global_constants::COMMAND_RANDOM_GIF_ID,
    name: global_constants::COMMAND_RANDOM_GIF_NAME,
};

pub const SEARCH_GIFS_COMMAND: CommandDescriptor = CommandDescriptor {
    id: global_constants::COMMAND_SEARCH_GIFS_ID,
    name: global_constants::COMMAND_SEARCH_GIFS_NAME,
};

/// The extension as the host sees it: lifecycle callbacks, the settings
/// record and the two commands.
pub struct GifPlugin {
    settings: UserSettings,
    settings_path: PathBuf,
    provider: Arc<dyn GifProvider>,
    host: Arc<dyn HostSurface>,
    active: bool,
}

impl GifPlugin {
    pub fn on_activate(
        settings_path: PathBuf,
        provider: Arc<dyn GifProvider>,
        host: Arc<dyn HostSurface>,
    ) -> Self {
        let settings = UserSettings::load_from(&settings_path).unwrap_or_else(|e| {
            log::warn!("[PLUGIN] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        log::info!("[PLUGIN] Activated");

        Self {
            settings,
            settings_path,
            provider,
            host,
            active: true,
        }
    }

    pub fn on_deactivate(&mut self) {
        self.active = false;
        log::info!("[PLUGIN] Deactivated");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn commands() -> [CommandDescriptor; 2] {
        [RANDOM_GIF_COMMAND, SEARCH_GIFS_COMMAND]
    }

    #[allow(dead_code)]
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn on_render_settings(&self) -> SettingsPanel {
        SettingsPanel {
            tab_id: global_constants::PLUGIN_ID,
            fields: vec![SettingsField {
                name: global_constants::SETTING_API_KEY_NAME,
                description: global_constants::SETTING_API_KEY_DESCRIPTION,
                placeholder: global_constants::SETTING_API_KEY_PLACEHOLDER,
                value: self.settings.api_key.clone(),
            }],
        }
    }

    /// Called on every edit of the API key field; persists immediately.
    pub fn update_api_key(&mut self, api_key: &str) -> anyhow::Result<()> {
        self.settings.api_key = api_key.to_string();
        self.settings.save_to(&self.settings_path)
    }

    pub async fn insert_random_gif(
        &self,
        sink: &dyn InsertionSink,
    ) -> Result<EmbedFragment, GifError> {
        let result = self.run_insert_random_gif(sink).await;

        if let Err(error) = &result {
            surface_error(self.host.as_ref(), error);
        }

        result
    }

    async fn run_insert_random_gif(
        &self,
        sink: &dyn InsertionSink,
    ) -> Result<EmbedFragment, GifError> {
        let credential = self.checked_credential()?;
        let fragment = self.provider.fetch_random(&credential).await?;

        sink.insert_at_cursor(fragment.as_str())
            .map_err(|error| GifError::Insertion(error.to_string()))?;

        log::info!("[PLUGIN] Inserted random gif");
        Ok(fragment)
    }

    /// Opens a search surface inserting into `sink`. Must be called from
    /// within a tokio runtime.
    pub fn open_gif_search(
        &self,
        sink: Box<dyn InsertionSink>,
    ) -> Result<(SearchFlowController, UnboundedReceiver<SearchFlowMessage>), GifError> {
        let credential = self.checked_credential().inspect_err(|error| {
            surface_error(self.host.as_ref(), error);
        })?;

        Ok(SearchFlowController::open(
            Arc::clone(&self.provider),
            credential,
            sink,
            Arc::clone(&self.host),
        ))
    }

    fn checked_credential(&self) -> Result<Credential, GifError> {
        let credential = self.settings.credential();
        credential.check()?;
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{FetchError, NoticeDuration};
    use crate::test_support::{MockGifProvider, RecordingHostSurface, RecordingSink};

    struct TestContext {
        temp_dir: PathBuf,
        provider: Arc<MockGifProvider>,
        host: Arc<RecordingHostSurface>,
    }

    impl TestContext {
        fn new(api_key: Option<&str>, provider: MockGifProvider) -> Self {
            let temp_dir = std::env::temp_dir()
                .join(format!("giphy-inserter-plugin-{}", uuid::Uuid::new_v4()));

            if let Some(api_key) = api_key {
                UserSettings {
                    api_key: api_key.to_string(),
                }
                .save_to(&temp_dir.join("settings.json"))
                .unwrap();
            }

            Self {
                temp_dir,
                provider: Arc::new(provider),
                host: Arc::new(RecordingHostSurface::new()),
            }
        }

        fn settings_path(&self) -> PathBuf {
            self.temp_dir.join("settings.json")
        }

        fn activate(&self) -> GifPlugin {
            GifPlugin::on_activate(self.settings_path(), self.provider.clone(), self.host.clone())
        }
    }

    impl Drop for TestContext {
        fn drop(&mut self) {
            std::fs::remove_dir_all(&self.temp_dir).ok();
        }
    }

    #[test]
    fn test_activation_without_settings_file_uses_empty_key() {
        let context = TestContext::new(None, MockGifProvider::new());

        let plugin = context.activate();

        assert!(plugin.is_active());
        assert_eq!(plugin.settings(), &UserSettings::default());
        assert!(context.settings_path().exists());
    }

    #[test]
    fn test_commands_expose_random_and_search() {
        let commands = GifPlugin::commands();

        assert_eq!(commands[0].id, "add-random-gifs");
        assert_eq!(commands[0].name, "Add random gifs");
        assert_eq!(commands[1].id, "search-gifs");
        assert_eq!(commands[1].name, "Search gifs");
    }

    #[test]
    fn test_render_settings_shows_current_key() {
        let context = TestContext::new(Some("ABC123"), MockGifProvider::new());
        let plugin = context.activate();

        let panel = plugin.on_render_settings();

        assert_eq!(panel.tab_id, "giphy-plugin");
        assert_eq!(panel.fields.len(), 1);
        assert_eq!(panel.fields[0].name, "API Key");
        assert_eq!(panel.fields[0].placeholder, "Enter API key");
        assert_eq!(panel.fields[0].value, "ABC123");
    }

    #[test]
    fn test_update_api_key_persists_and_survives_reactivation() {
        let context = TestContext::new(None, MockGifProvider::new());
        let mut plugin = context.activate();

        plugin.update_api_key("NEWKEY").unwrap();
        plugin.on_deactivate();
        assert!(!plugin.is_active());

        let reactivated = context.activate();
        assert_eq!(reactivated.settings().api_key, "NEWKEY");
    }

    #[tokio::test]
    async fn test_insert_random_gif_writes_fragment_to_sink() {
        let context = TestContext::new(Some("ABC123"), MockGifProvider::new());
        let plugin = context.activate();
        let sink = RecordingSink::new();

        let fragment = plugin.insert_random_gif(&sink).await.unwrap();

        assert_eq!(
            sink.get_inserted(),
            vec!["![gif](https://media.giphy.com/random.gif)\n\n".to_string()]
        );
        assert_eq!(fragment.as_str(), sink.get_inserted()[0]);
        assert!(context.host.get_notices().is_empty());
    }

    #[tokio::test]
    async fn test_insert_random_gif_without_key_redirects_to_settings() {
        let context = TestContext::new(Some(""), MockGifProvider::new());
        let plugin = context.activate();
        let sink = RecordingSink::new();

        let result = plugin.insert_random_gif(&sink).await;

        assert_eq!(result, Err(GifError::Configuration));
        assert_eq!(context.provider.get_random_call_count(), 0);
        assert!(sink.get_inserted().is_empty());
        assert_eq!(context.host.get_opened_tabs(), vec!["giphy-plugin".to_string()]);
        assert_eq!(
            context.host.get_notices()[0].duration,
            NoticeDuration::UntilDismissed
        );
    }

    #[tokio::test]
    async fn test_insert_random_gif_failure_shows_transient_notice() {
        let provider = MockGifProvider::new()
            .with_random_result(Err(GifError::Fetch(FetchError::Network("offline".to_string()))));
        let context = TestContext::new(Some("ABC123"), provider);
        let plugin = context.activate();
        let sink = RecordingSink::new();

        let result = plugin.insert_random_gif(&sink).await;

        assert!(matches!(result, Err(GifError::Fetch(_))));
        assert!(sink.get_inserted().is_empty());
        assert_eq!(
            context.host.get_notices()[0].duration,
            NoticeDuration::Transient
        );
        assert!(context.host.get_opened_tabs().is_empty());
    }

    #[tokio::test]
    async fn test_open_gif_search_without_key_does_not_open_surface() {
        let context = TestContext::new(None, MockGifProvider::new());
        let plugin = context.activate();

        let result = plugin.open_gif_search(Box::new(RecordingSink::new()));

        assert!(matches!(result, Err(GifError::Configuration)));
        assert_eq!(context.host.get_opened_tabs(), vec!["giphy-plugin".to_string()]);
    }

    #[tokio::test]
    async fn test_open_gif_search_with_key_opens_idle_surface() {
        let context = TestContext::new(Some("ABC123"), MockGifProvider::new());
        let plugin = context.activate();

        let (controller, _receiver) = plugin
            .open_gif_search(Box::new(RecordingSink::new()))
            .unwrap();

        assert!(controller.has_input_focus());
        assert!(!controller.is_closed());
        assert!(context.host.get_notices().is_empty());
    }
}
