use std::fmt;

use owo_colors::OwoColorize;

use super::card_rule;
use crate::presentation::view_models::{DisplayOptions, NotFoundViewModel};

pub struct NotFoundView<'a> {
    pub data: &'a NotFoundViewModel,
    pub options: &'a DisplayOptions,
}

impl fmt::Display for NotFoundView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rule = card_rule();
        writeln!(f, "{}", rule)?;
        if self.options.enable_color {
            writeln!(f, "  {}", "Scanchain".bright_green().bold())?;
        } else {
            writeln!(f, "  Scanchain")?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        if self.options.enable_color {
            writeln!(f, "  {}", "404 · Page not found".bold())?;
        } else {
            writeln!(f, "  404 · Page not found")?;
        }
        writeln!(
            f,
            "  Nothing lives at '{}'. Follow a Scanchain batch QR link to view a passport.",
            self.data.path
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_the_unmatched_path() {
        let vm = NotFoundViewModel {
            path: "/settings".to_string(),
        };
        let options = DisplayOptions {
            enable_color: false,
            ..DisplayOptions::default()
        };
        let out = NotFoundView { data: &vm, options: &options }.to_string();
        assert!(out.contains("404"));
        assert!(out.contains("'/settings'"));
    }
}
