// Components module - reusable UI building blocks
//
// - Title bar: App name, search spinner
// - Search input: The query line
// - Autocomplete: Suggestion dropdown overlay
// - Selection list: Chosen repositories with remove controls
// - Logs panel: System log entries (F2)
// - Status bar: State, counts, key hints

pub mod autocomplete;
pub mod formatters;
pub mod logs_panel;
pub mod scrollbar;
pub mod search_input;
pub mod selection_list;
pub mod status_bar;
pub mod title_bar;
