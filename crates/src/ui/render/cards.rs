use crate::record::Record;
use crate::ui::model::Screen;
use crate::ui::render::styles::{STYLE_BOX, STYLE_LABEL, STYLE_NAME, STYLE_SELECTED};
use crate::ui::render::util::{box_width, fit_width, screen_width_or_default};

/// The text rows of one card: name first, then the labelled fields.
pub fn card_lines(r: &Record) -> Vec<String> {
    vec![
        r.name.clone(),
        format!("Poderes: {}", r.powers_joined()),
        format!("Edad: {}", r.age),
        format!("Liga: {}", r.league),
        format!("Activo: {}", r.active_label()),
    ]
}

// Plain-text card used by the one-shot listing modes.
pub fn card_text(r: &Record) -> String {
    let mut lines = card_lines(r).into_iter();
    let mut out = lines.next().unwrap_or_default();
    for l in lines {
        out.push_str("\n  ");
        out.push_str(&l);
    }
    out
}

pub fn render_card(r: &Record, total_width: usize, selected: bool) -> String {
    let bw = box_width(total_width);
    // padding takes one column on each side
    let inner = bw.saturating_sub(2);
    let mut rows = card_lines(r).into_iter();
    let name = rows.next().unwrap_or_default();
    let mut body: Vec<String> = Vec::with_capacity(5);
    if selected {
        body.push(STYLE_SELECTED.render(&fit_width(&format!("› {name}"), inner)));
    } else {
        body.push(STYLE_NAME.render(&fit_width(&name, inner)));
    }
    body.extend(rows.map(|l| STYLE_LABEL.render(&fit_width(&l, inner))));
    let w_i32: i32 = bw.try_into().unwrap_or(i32::MAX);
    STYLE_BOX.clone().width(w_i32).render(&body.join("\n"))
}

/// One rendered card per record, in record order.
pub fn render_cards(m: &Screen) -> Vec<String> {
    let total_width = screen_width_or_default(m.screen_width);
    m.records
        .iter()
        .enumerate()
        .map(|(idx, r)| render_card(r, total_width, idx == m.cursor))
        .collect()
}

// Lines of the cards on the cursor's page.
pub fn render_card_page(m: &Screen) -> Vec<String> {
    let total_width = screen_width_or_default(m.screen_width);
    let per = if m.per_page == 0 { m.records.len() } else { m.per_page };
    let start = m.page().saturating_mul(per);
    m.records
        .iter()
        .enumerate()
        .skip(start)
        .take(per)
        .flat_map(|(idx, r)| {
            render_card(r, total_width, idx == m.cursor)
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
