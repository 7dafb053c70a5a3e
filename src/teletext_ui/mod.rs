// src/teletext_ui/mod.rs - Teletext style pages for tables and team snapshots

pub mod colors;
pub mod core;
pub mod pages;
pub mod utils;

pub use core::{TeletextPage, TeletextRow};
pub use pages::{
    create_league_list_page, create_not_found_page, create_snapshot_page, create_table_page,
};
pub use utils::{fit_to_width, format_goal_difference, get_ansi_code};
