//! Terminal UI for playing against the search: board view, last-search
//! metrics and session statistics.

mod app;
mod game_view;

pub use app::App;
