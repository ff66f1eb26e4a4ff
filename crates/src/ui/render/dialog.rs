use crate::ui::model::Screen;
use crate::ui::render::styles::{STYLE_BOX, STYLE_BUTTON, STYLE_FAINT, STYLE_NOTICE, STYLE_TAGLINE};
use crate::ui::render::util::{box_width, fit_width, screen_width_or_default, wrap_words};

pub fn hire_question(name: &str) -> String {
    format!("¿Quieres contratar a {name}?")
}

/// Confirmation box shown in place of the card list while a hire is pending.
pub fn render_hire_dialog(m: &Screen) -> Vec<String> {
    let Some(record) = m.selected_record() else {
        return Vec::new();
    };
    let bw = box_width(screen_width_or_default(m.screen_width));
    let inner = bw.saturating_sub(2);
    let mut body: Vec<String> = wrap_words(&hire_question(&record.name), inner)
        .iter()
        .map(|l| STYLE_TAGLINE.render(l))
        .collect();
    body.push(String::new());
    let (yes, no) = (" Sí (s) ", " No (n) ");
    if yes.chars().count() + 2 + no.chars().count() <= inner {
        body.push(format!("{}  {}", STYLE_BUTTON.render(yes), STYLE_BUTTON.render(no)));
    } else {
        // stack the buttons when they do not fit side by side
        body.push(STYLE_BUTTON.render(&fit_width(yes, inner)));
        body.push(STYLE_BUTTON.render(&fit_width(no, inner)));
    }
    let w_i32: i32 = bw.try_into().unwrap_or(i32::MAX);
    STYLE_BOX
        .clone()
        .width(w_i32)
        .render(&body.join("\n"))
        .lines()
        .map(str::to_string)
        .collect()
}

// Wrapped rows of the one-shot hire confirmation.
pub fn render_notice(m: &Screen) -> Vec<String> {
    let Some(notice) = &m.notice else {
        return Vec::new();
    };
    let w = screen_width_or_default(m.screen_width);
    wrap_words(notice, w)
        .iter()
        .map(|l| STYLE_NOTICE.render(l))
        .collect()
}

/// Single status row: load progress or the record count.
pub fn render_status_line(m: &Screen) -> String {
    let w = screen_width_or_default(m.screen_width);
    let text = if m.is_loading() {
        "Cargando superhéroes...".to_string()
    } else {
        match m.records.len() {
            1 => "1 superhéroe".to_string(),
            n => format!("{n} superhéroes"),
        }
    };
    STYLE_FAINT.render(&fit_width(&text, w))
}
