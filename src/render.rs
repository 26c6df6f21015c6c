use colored::{Color, Colorize};

/// Semantic role of a piece of output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Title,
    Header,
    Name,
    Path,
    Info,
    Success,
    Warning,
    Error,
    Prompt,
    Size,
    Skipped,
    Separator,
}

pub trait Render {
    fn render(&self, text: &str, style: Style) -> String;
}

/// Terminal colours via `colored`. Honours `NO_COLOR` and non-tty output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColoredRender;

impl Render for ColoredRender {
    fn render(&self, text: &str, style: Style) -> String {
        let styled = match style {
            Style::Title => text.bold().color(Color::TrueColor { r: 95, g: 0, b: 255 }),
            Style::Header => text.bold().color(Color::TrueColor { r: 95, g: 95, b: 255 }),
            Style::Name => text.bold().bright_magenta(),
            Style::Path => text.color(Color::TrueColor { r: 148, g: 148, b: 148 }),
            Style::Info => text.color(Color::TrueColor { r: 208, g: 208, b: 208 }),
            Style::Success => text.bright_green(),
            Style::Warning => text.yellow(),
            Style::Error => text.bold().bright_red(),
            Style::Prompt => text.bright_yellow(),
            Style::Size => text.magenta(),
            Style::Skipped => text.italic().dimmed(),
            Style::Separator => text.dimmed(),
        };
        styled.to_string()
    }
}

/// Passes text through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRender;

impl Render for PlainRender {
    fn render(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}
