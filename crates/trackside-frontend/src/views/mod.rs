pub mod commands;
pub mod dashboard_page;
pub mod notifications_panel;
mod root_view;

pub use commands::{UiCommand, parse_command};
pub use root_view::run_event_loop;
