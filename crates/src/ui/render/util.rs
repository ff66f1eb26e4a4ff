use crate::ui::model::DEFAULT_WIDTH;
use lipgloss::Style;

pub fn normalize_and_pad(lines: Vec<String>, total_width: usize, per: usize) -> String {
    let line_style = Style::new().width(total_width as i32);
    // a row wider than the screen wraps; count the physical lines it produced
    let mut normalized: Vec<String> = lines
        .into_iter()
        .flat_map(|l| {
            line_style
                .render(&l)
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();
    if normalized.len() > per {
        normalized.truncate(per);
    } else {
        while normalized.len() < per {
            normalized.push(line_style.render(""));
        }
    }
    normalized.join("\n")
}

pub fn pad_line(line: &str, total_width: usize) -> String {
    Style::new().width(total_width as i32).render(line)
}

pub fn screen_width_or_default(width: usize) -> usize {
    if width > 0 { width } else { DEFAULT_WIDTH }
}

// Width of a bordered, horizontally padded box that spans the screen.
pub fn box_width(total_width: usize) -> usize {
    total_width.saturating_sub(2)
}

// Truncate plain text to `width` columns, marking the cut with an ellipsis.
pub fn fit_width(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    out
}

// Greedy word wrap; words longer than a line are truncated.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word = fit_width(word, width);
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
