// Render module split into focused submodules: one per screen region.

pub mod cards;
pub mod dialog;
pub mod full;
pub mod header;
pub mod modeline;
pub mod styles;
pub mod util;

pub use cards::{card_lines, card_text, render_card, render_cards};
pub use dialog::{render_hire_dialog, render_status_line};
pub use full::{render_full, render_main_content};
pub use header::{render_filter_menu, render_header};
pub use modeline::{render_modeline, render_modeline_padded};
