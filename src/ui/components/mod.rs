//! Reusable UI components.

mod badges;
mod help_bar;
mod input;
mod status_log;
mod suggestion_menu;

pub use badges::{layout_badges, render_badges, BadgeFlow};
pub use help_bar::{render_help_bar, HintContext};
pub use input::TextInput;
pub use status_log::{StatusEntry, StatusKind, StatusLog};
pub use suggestion_menu::{layout_menu, render_suggestion_menu, MenuLayout};
