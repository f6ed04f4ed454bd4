mod search_modal_view;

pub use search_modal_view::SearchModalView;
