//! Coloured and width-aware terminal output

use owo_colors::{colors::css, OwoColorize};

/// A horizontal rule of `preferred` characters, shortened to fit narrow
/// terminals.
pub fn rule(ch: char, preferred: usize) -> String {
    let width = terminal_size::terminal_size()
        .map_or(preferred, |(w, _)| preferred.min(usize::from(w.0)));
    ch.to_string().repeat(width).dim()
}

/// Apply `style` only when stdout supports colour.
fn paint(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color::on(supports_color::Stream::Stdout).is_some() {
        style(text)
    } else {
        text.to_string()
    }
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Color as a heading (bold blue)
    fn info(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        paint(self, |s| s.fg::<css::Green>().to_string())
    }

    fn warning(&self) -> String {
        paint(self, |s| s.fg::<css::Orange>().to_string())
    }

    fn info(&self) -> String {
        paint(self, |s| s.fg::<css::LightBlue>().bold().to_string())
    }

    fn dim(&self) -> String {
        paint(self, |s| s.dimmed().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_never_exceeds_preferred_width() {
        let rule = rule('=', 50);
        assert!(rule.matches('=').count() <= 50);
    }
}
