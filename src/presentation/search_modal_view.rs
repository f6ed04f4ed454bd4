use crate::core::orchestrators::{SearchFlowController, SearchFlowMessage, SearchPhase};
use crate::global_constants;

/// Line-oriented rendering of the search surface.
///
/// Every input line replaces the query text. `:<n>` picks the n-th
/// thumbnail (1-based) and `:q` closes the surface.
pub struct SearchModalView;

impl SearchModalView {
    pub fn parse_input(line: &str) -> Option<SearchFlowMessage> {
        let Some(command) = line.trim_end().strip_prefix(':') else {
            return Some(SearchFlowMessage::QueryChanged(line.to_string()));
        };

        match command {
            "q" | "close" => Some(SearchFlowMessage::Close),
            number => match number.parse::<usize>() {
                Ok(position) if position >= 1 => {
                    Some(SearchFlowMessage::ThumbnailSelected(position - 1))
                }
                _ => {
                    log::debug!("[SEARCH_VIEW] Unknown command :{}", number);
                    None
                }
            },
        }
    }

    pub fn render_ui(controller: &SearchFlowController) -> String {
        let mut lines = vec![format!("== {} ==", global_constants::SEARCH_MODAL_TITLE)];

        if controller.raw_query().is_empty() {
            lines.push(format!("> ({})", global_constants::SEARCH_INPUT_PLACEHOLDER));
        } else {
            lines.push(format!("> {}", controller.raw_query()));
        }

        match controller.phase() {
            SearchPhase::Debouncing | SearchPhase::Fetching => lines.push("searching...".to_string()),
            SearchPhase::Idle | SearchPhase::Settled | SearchPhase::Closed => {}
        }

        if controller.results().is_empty() {
            lines.push("no gifs".to_string());
        }

        for (index, url) in controller.results().iter().enumerate() {
            lines.push(format!("{:>2}. {}", index + 1, url));
        }

        lines.join("\n")
    }
}
