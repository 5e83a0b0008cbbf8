use ratatui::style::Color;

use crate::deck::Theme;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Colors of the section body for one page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xf7),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    focus: Color::Rgb(0xfd, 0xe6, 0xd8),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x11, 0x18, 0x27),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    border: Color::Rgb(0x37, 0x41, 0x51),
    focus: Color::Rgb(0x26, 0x26, 0x26),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}
