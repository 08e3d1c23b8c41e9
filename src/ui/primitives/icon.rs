use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Arrow,
    Leaf,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Info) => theme::icons::INFO,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Leaf) => theme::icons::LEAF,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Info) => theme::icons_ascii::INFO,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Leaf) => theme::icons_ascii::LEAF,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Leaf => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Info => theme::colors::INFO,
            Icon::Arrow => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}
