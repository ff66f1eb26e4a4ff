// UI module root: screen state lives in `model`, key handling in `update`, drawing in `render`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

pub use model::{FilterOption, HireDialog, LoadFinished, LoadTask, Screen, initial_screen};
pub use render::{card_lines, render_cards, render_full, render_main_content, render_modeline_padded};
pub use run::{print_records, run};
pub use update::handle_update;

// Messages used by the update logic
#[derive(Debug)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    KeyBackspace,
    KeyEnter,
    KeyEsc,
    KeyTab,
    Rune(char),
    KeyUp,
    KeyDown,
    Loaded(LoadFinished),
}
