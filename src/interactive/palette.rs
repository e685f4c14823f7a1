//! Theme colors

use crate::core::Mark;
use crate::settings::Theme;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub key: Color,
    pub green: Color,
    pub yellow: Color,
    pub grey: Color,
    pub on_mark: Color,
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(240, 248, 255),
                text: Color::Rgb(16, 42, 67),
                muted: Color::Rgb(130, 150, 170),
                border: Color::Rgb(160, 190, 215),
                accent: Color::Rgb(0, 119, 182),
                key: Color::Rgb(202, 226, 242),
                green: Color::Rgb(106, 170, 100),
                yellow: Color::Rgb(201, 180, 88),
                grey: Color::Rgb(120, 124, 126),
                on_mark: Color::White,
            },
            Theme::Dark => Self {
                background: Color::Rgb(8, 24, 40),
                text: Color::Rgb(225, 238, 250),
                muted: Color::Rgb(90, 110, 130),
                border: Color::Rgb(50, 80, 110),
                accent: Color::Rgb(72, 202, 228),
                key: Color::Rgb(30, 55, 80),
                green: Color::Rgb(83, 141, 78),
                yellow: Color::Rgb(181, 159, 59),
                grey: Color::Rgb(58, 58, 60),
                on_mark: Color::White,
            },
        }
    }

    #[must_use]
    pub const fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::Green => self.green,
            Mark::Yellow => self.yellow,
            Mark::Grey => self.grey,
        }
    }
}
