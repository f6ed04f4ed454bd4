mod error_reporting;
mod gif_plugin;
mod search_flow;

pub use gif_plugin::GifPlugin;
pub use search_flow::{SearchFlowController, SearchFlowMessage, SearchPhase};
