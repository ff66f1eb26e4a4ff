use crate::ui::Msg;
use crate::ui::model::{CARD_LINES, FilterOption, RESERVED_LINES, Screen};

pub fn handle_update(m: &mut Screen, msg: Msg) {
    match msg {
        Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        Msg::Loaded(done) => m.apply_load(done),
        key => {
            // the confirmation notice only survives until the next key press
            m.notice = None;
            if m.hire_dialog_open() {
                handle_dialog_key(m, key);
            } else if m.filter_menu_open {
                handle_filter_key(m, key);
            } else {
                handle_list_key(m, key);
            }
        }
    }
}

fn handle_window_size(m: &mut Screen, width: usize, height: usize) {
    m.screen_width = width;
    m.screen_height = height;
    let body = height.saturating_sub(RESERVED_LINES);
    m.per_page = usize::max(body / CARD_LINES, 1);
}

fn handle_dialog_key(m: &mut Screen, key: Msg) {
    match key {
        Msg::KeyEnter | Msg::Rune('s' | 'S' | 'y' | 'Y') => {
            m.confirm_hire();
        }
        Msg::KeyEsc | Msg::Rune('n' | 'N') => m.cancel_hire(),
        _ => {}
    }
}

fn handle_filter_key(m: &mut Screen, key: Msg) {
    match key {
        Msg::KeyUp => m.move_filter_cursor(false),
        Msg::KeyDown => m.move_filter_cursor(true),
        Msg::KeyEnter => {
            if let Some(opt) = FilterOption::ALL.get(m.filter_cursor) {
                m.select_filter(*opt);
            }
        }
        Msg::Rune(r) => {
            // digits pick an option by its position in the menu
            if let Some(opt) = r
                .to_digit(10)
                .and_then(|d| (d as usize).checked_sub(1))
                .and_then(|i| FilterOption::ALL.get(i))
            {
                m.select_filter(*opt);
            }
        }
        Msg::KeyTab | Msg::KeyEsc => m.toggle_filter_menu(),
        _ => {}
    }
}

fn handle_list_key(m: &mut Screen, key: Msg) {
    match key {
        Msg::KeyTab => m.toggle_filter_menu(),
        Msg::KeyUp => m.move_cursor(false),
        Msg::KeyDown => m.move_cursor(true),
        Msg::KeyEnter => {
            if let Some(record) = m.card_under_cursor().cloned() {
                m.open_hire_dialog(record);
            }
        }
        Msg::KeyBackspace => {
            let mut text = m.search_query.clone();
            text.pop();
            m.set_search_query(text);
        }
        Msg::Rune(r) => {
            if !r.is_control() {
                let mut text = m.search_query.clone();
                text.push(r);
                m.set_search_query(text);
            }
        }
        _ => {}
    }
}
