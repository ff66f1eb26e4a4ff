use lipgloss::{Color, Style, rounded_border};
use once_cell::sync::Lazy;

// Styles kept local to render module
pub static STYLE_TITLE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(247, 231, 51))
        .bold(true)
});
pub static STYLE_SUBTITLE: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_TAGLINE: Lazy<Style> = Lazy::new(|| Style::new().bold(true));
pub static STYLE_PLACEHOLDER: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_LABEL: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(200, 200, 200)));
pub static STYLE_NAME: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(255, 246, 116))
        .bold(true)
});
pub static STYLE_SELECTED: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_NOTICE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 205, 0))
        .bold(true)
});
pub static STYLE_BUTTON: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(247, 231, 51))
        .foreground(Color::from_rgb(0, 0, 0))
        .bold(true)
});
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
        .padding(0, 1, 0, 1)
});
pub static STYLE_BOX: Lazy<Style> =
    Lazy::new(|| Style::new().border(rounded_border()).padding(0, 1, 0, 1));
pub static STYLE_FAINT: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
