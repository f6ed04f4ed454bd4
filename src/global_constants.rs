#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Giphy Inserter";
pub const PLUGIN_ID: &str = "giphy-plugin";

pub const GIPHY_RANDOM_URL: &str = "https://api.giphy.com/v1/gifs/random";
pub const GIPHY_SEARCH_URL: &str = "https://api.giphy.com/v1/gifs/search";
pub const GIPHY_RATING: &str = "g";
pub const GIPHY_RANDOM_TAG: &str = "";
pub const GIPHY_SEARCH_LANGUAGE: &str = "en";
pub const GIPHY_SEARCH_BUNDLE: &str = "messaging_non_clips";
pub const GIPHY_SEARCH_PAGE_SIZE: usize = 25;
pub const GIPHY_SEARCH_OFFSET: usize = 0;

pub const SEARCH_DEBOUNCE_MS: u64 = 1000;

pub const EMBED_ALT_TEXT: &str = "gif";
pub const EMBED_BLOCK_SEPARATOR: &str = "\n\n";

pub const COMMAND_RANDOM_GIF_ID: &str = "add-random-gifs";
pub const COMMAND_RANDOM_GIF_NAME: &str = "Add random gifs";
pub const COMMAND_SEARCH_GIFS_ID: &str = "search-gifs";
pub const COMMAND_SEARCH_GIFS_NAME: &str = "Search gifs";

pub const SEARCH_MODAL_TITLE: &str = "Search for a gif";
pub const SEARCH_INPUT_PLACEHOLDER: &str = "Search for a gif";

pub const SETTING_API_KEY_NAME: &str = "API Key";
pub const SETTING_API_KEY_DESCRIPTION: &str = "Enter your Giphy API key";
pub const SETTING_API_KEY_PLACEHOLDER: &str = "Enter API key";

pub const NOTICE_CONFIGURE_API_KEY: &str =
    "Please configure your Giphy API key in the plugin settings.";
pub const NOTICE_FETCH_FAILED: &str = "Could not load gifs from Giphy";
pub const NOTICE_INSERT_FAILED: &str = "Could not insert the gif into the document";

pub const SETTINGS_DIRECTORY_NAME: &str = "giphy-inserter";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
