use crate::ui::model::{RESERVED_LINES, Screen};
use crate::ui::render::cards::render_card_page;
use crate::ui::render::dialog::{render_hire_dialog, render_notice, render_status_line};
use crate::ui::render::header::{render_filter_menu, render_header};
use crate::ui::render::styles::STYLE_FAINT;
use crate::ui::render::util::{fit_width, normalize_and_pad, pad_line, screen_width_or_default};

pub const EMPTY_LIST: &str = "No hay superhéroes para mostrar.";

/// Everything between the header and the status row.
pub fn render_main_content(m: &Screen) -> String {
    let total_width = screen_width_or_default(m.screen_width);

    let lines: Vec<String> = if m.hire_dialog_open() {
        render_hire_dialog(m)
    } else {
        let mut lines = Vec::new();
        if m.filter_menu_open {
            lines.extend(render_filter_menu(m));
        }
        lines.extend(render_notice(m));
        if m.records.is_empty() && !m.is_loading() {
            lines.push(STYLE_FAINT.render(&fit_width(EMPTY_LIST, total_width)));
        }
        lines.extend(render_card_page(m));
        lines
    };

    let per = if m.screen_height == 0 {
        lines.len()
    } else {
        m.screen_height.saturating_sub(RESERVED_LINES)
    };
    // Ensure we return exactly `per` lines each normalized to the terminal width.
    normalize_and_pad(lines, total_width, per)
}

pub fn render_full(m: &Screen) -> String {
    let total_width = screen_width_or_default(m.screen_width);
    let mut lines = render_header(m);
    lines.extend(m.render_main_content().lines().map(str::to_string));
    lines.push(pad_line(&render_status_line(m), total_width));
    let first_line = crate::ui::render::modeline::render_modeline_padded(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(first_line);
    lines.join("\n")
}
