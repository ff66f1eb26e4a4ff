use crate::ui::model::{FilterOption, Screen};
use crate::ui::render::styles::{
    STYLE_LABEL, STYLE_PLACEHOLDER, STYLE_SELECTED, STYLE_SUBTITLE, STYLE_TAGLINE, STYLE_TITLE,
};
use crate::ui::render::util::{fit_width, pad_line, screen_width_or_default};
use lipgloss::Style;

pub const TITLE: &str = "SASH";
pub const SUBTITLE: &str = "sacv";
pub const TAGLINE: &str = "Sección Amarilla de Super Heroes S.A. de C.V.";
pub const SEARCH_LABEL: &str = "Buscar: ";
pub const SEARCH_PLACEHOLDER: &str = "Super heroe super fuerte...";
pub const FILTER_LABEL: &str = "Filtrar por: ";

// Styled pieces of one row. When the plain text is wider than the screen the
// row is cut with an ellipsis and keeps only the first piece's style.
fn fit_row(parts: &[(&Style, &str)], w: usize) -> String {
    let plain: String = parts.iter().map(|(_, t)| *t).collect();
    if plain.chars().count() <= w {
        return parts.iter().map(|(style, t)| style.render(t)).collect();
    }
    match parts.first() {
        Some((style, _)) => style.render(&fit_width(&plain, w)),
        None => String::new(),
    }
}

/// Title, tagline, search box and filter selector; always HEADER_LINES lines.
pub fn render_header(m: &Screen) -> Vec<String> {
    let w = screen_width_or_default(m.screen_width);
    let plain = Style::new();

    let title = fit_row(
        &[(&*STYLE_TITLE, TITLE), (&plain, " "), (&*STYLE_SUBTITLE, SUBTITLE)],
        w,
    );
    let tagline = STYLE_TAGLINE.render(&fit_width(TAGLINE, w));

    let room = w.saturating_sub(SEARCH_LABEL.chars().count());
    let search_line = if room == 0 {
        STYLE_LABEL.render(&fit_width(SEARCH_LABEL, w))
    } else if m.search_query.is_empty() {
        let placeholder = fit_width(SEARCH_PLACEHOLDER, room);
        fit_row(
            &[
                (&*STYLE_LABEL, SEARCH_LABEL),
                (&*STYLE_PLACEHOLDER, placeholder.as_str()),
            ],
            w,
        )
    } else {
        // keep the tail visible while typing past the edge
        let chars: Vec<char> = m.search_query.chars().collect();
        let skip = chars.len().saturating_sub(room);
        let tail: String = chars[skip..].iter().collect();
        format!("{}{}", STYLE_LABEL.render(SEARCH_LABEL), tail)
    };

    let marker = if m.filter_menu_open { " ▴" } else { " ▾" };
    let filter_line = fit_row(
        &[
            (&*STYLE_LABEL, FILTER_LABEL),
            (&*STYLE_TAGLINE, m.selected_filter.label()),
            (&plain, marker),
        ],
        w,
    );

    vec![title, tagline, search_line, filter_line]
        .into_iter()
        .map(|l| pad_line(&l, w))
        .collect()
}

/// Dropdown rows, numbered so they can be picked with a digit.
pub fn render_filter_menu(m: &Screen) -> Vec<String> {
    let w = screen_width_or_default(m.screen_width);
    FilterOption::ALL
        .iter()
        .enumerate()
        .map(|(idx, opt)| {
            let current = if *opt == m.selected_filter { " ✓" } else { "" };
            let text = fit_width(&format!("  {}. {}{}", idx + 1, opt.label(), current), w);
            if idx == m.filter_cursor {
                STYLE_SELECTED.render(&text)
            } else {
                STYLE_LABEL.render(&text)
            }
        })
        .collect()
}
