use crate::ui::model::{DEFAULT_WIDTH, Screen};
use crate::ui::render::styles::STYLE_MODELINE;
use lipgloss::Color;

// key/description pairs for whatever currently has focus
fn key_pairs(m: &Screen) -> Vec<(&'static str, &'static str)> {
    if m.hire_dialog_open() {
        vec![("s", "sí"), ("n", "no")]
    } else if m.filter_menu_open {
        vec![("↑/↓", "mover"), ("⏎", "elegir"), ("⇥", "cerrar")]
    } else {
        vec![("⏎", "contratar"), ("⇥", "filtro"), ("⌫", "borrar"), ("⎋", "salir")]
    }
}

pub fn render_modeline(m: &Screen, inner_max: usize, mode: &str) -> String {
    let total_pages = m.total_pages();
    let page = m.page();

    // prepare inner styles without padding so spacing is under our control
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(247, 231, 51))
        .bold(true)
        .padding(0, 0, 0, 0);
    let desc_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let pag_style = STYLE_MODELINE.clone().faint(true).padding(0, 0, 0, 0);

    // Build rendered pairs and their plain widths in one pass
    let pairs: Vec<(String, usize)> = key_pairs(m)
        .iter()
        .map(|(k, d)| {
            let plain_len = d.chars().count() + 1 + k.chars().count();
            let rendered = format!(
                "{}{}{}",
                desc_style.render(d),
                inner_style.render(":"),
                key_style.render(k)
            );
            (rendered, plain_len)
        })
        .collect();

    let pair_sep_rendered = inner_style.render("  ");
    let pair_sep_width = 2usize;

    // pagination only shows up in the list view
    let mut pag_plain = String::new();
    let mut pag_rendered = String::new();
    if total_pages > 1 && !m.hire_dialog_open() && !m.filter_menu_open {
        pag_plain = format!("Pág {}/{} ↑/↓", page + 1, total_pages);
        let arrows = format!("{}/{}", key_style.render("↑"), key_style.render("↓"));
        pag_rendered = pag_style.render(&format!("Pág {}/{} {arrows}", page + 1, total_pages));
    }
    let mut pag_width = pag_plain.chars().count();

    let width_of = |count: usize| -> usize {
        if count == 0 {
            0
        } else {
            pairs.iter().take(count).map(|(_, w)| *w).sum::<usize>() + pair_sep_width * (count - 1)
        }
    };

    // mode block carries one column of padding on each side
    let mode_w = mode.chars().count() + 2;
    let sep_w = " | ".chars().count();
    let avail = inner_max.saturating_sub(mode_w + sep_w);

    // drop rightmost pairs until left + pag fits into avail
    let mut pairs_count = pairs.len();
    while pairs_count > 0 && width_of(pairs_count) + pag_width > avail {
        pairs_count -= 1;
    }
    let left_width = width_of(pairs_count);
    let left_joined_rendered = pairs
        .iter()
        .take(pairs_count)
        .map(|(r, _)| r.clone())
        .collect::<Vec<_>>()
        .join(&pair_sep_rendered);

    // still too wide: shorten pagination to just "Pág X/Y"
    if left_width + pag_width > avail && !pag_plain.is_empty() {
        let short_pag = format!("Pág {}/{}", page + 1, total_pages);
        pag_width = short_pag.chars().count();
        pag_rendered = pag_style.render(&short_pag);
        if left_width + pag_width > avail {
            pag_width = 0;
            pag_rendered.clear();
        }
    }

    let pad = avail.saturating_sub(left_width + pag_width + 2);
    let filler = if pad > 0 {
        STYLE_MODELINE.clone().width(pad as i32).render("")
    } else {
        String::new()
    };

    let mode_style = STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .padding(0, 1, 0, 1)
        .bold(true);
    let mode_styled = mode_style.render(mode);
    // on very narrow screens only the mode block is left
    let sep_styled = if inner_max >= mode_w + sep_w {
        inner_style.render(" | ")
    } else {
        String::new()
    };
    let trailing_pad = STYLE_MODELINE.render(" ");

    format!("{mode_styled}{sep_styled}{left_joined_rendered}{filler}{pag_rendered}{trailing_pad}")
}

pub fn render_modeline_padded(m: &Screen) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let inner_max = total_width.saturating_sub(3);
    let mode = m.mode();
    let modeline = render_modeline(m, inner_max, &mode);
    let modeline_single = modeline.replace('\n', " ");
    STYLE_MODELINE
        .clone()
        .width(total_width as i32)
        .render(&modeline_single)
}
