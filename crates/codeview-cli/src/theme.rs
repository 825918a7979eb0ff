//! Built-in color themes.

use std::fmt;
use std::str::FromStr;

use codeview_core::TokenKind;
use crossterm::style::Color;

use crate::error::CliError;

const fn rgb(hex: u32) -> Color {
    Color::Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

/// The selectable themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    VsDark,
    Light,
    Dracula,
    Nord,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [
        ThemeName::VsDark,
        ThemeName::Light,
        ThemeName::Dracula,
        ThemeName::Nord,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::VsDark => "vs-dark",
            Self::Light => "light",
            Self::Dracula => "dracula",
            Self::Nord => "nord",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::VsDark => VS_DARK,
            Self::Light => LIGHT,
            Self::Dracula => DRACULA,
            Self::Nord => NORD,
        }
    }
}

impl FromStr for ThemeName {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| CliError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors used to paint a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub gutter: Color,
    pub highlight_line: Color,
    pub active_line: Color,
    pub added_line: Color,
    pub removed_line: Color,
    pub comment: Color,
    pub string: Color,
    pub keyword: Color,
    pub number: Color,
    pub class_name: Color,
    pub function: Color,
    pub variable: Color,
    pub operator: Color,
    pub tag: Color,
    pub attr_name: Color,
    pub selector: Color,
    pub property: Color,
    pub markup: Color,
}

impl Palette {
    /// Foreground color for a token kind.
    pub fn token(&self, kind: TokenKind) -> Color {
        match kind {
            TokenKind::Comment => self.comment,
            TokenKind::String | TokenKind::Code => self.string,
            TokenKind::Keyword => self.keyword,
            TokenKind::Number => self.number,
            TokenKind::ClassName => self.class_name,
            TokenKind::Function => self.function,
            TokenKind::Variable | TokenKind::Identifier => self.variable,
            TokenKind::Operator => self.operator,
            TokenKind::Tag => self.tag,
            TokenKind::AttrName => self.attr_name,
            TokenKind::Selector => self.selector,
            TokenKind::Property => self.property,
            TokenKind::Header | TokenKind::Link => self.markup,
            TokenKind::Text => self.foreground,
        }
    }
}

const VS_DARK: Palette = Palette {
    background: rgb(0x1e1e1e),
    foreground: rgb(0xd4d4d4),
    gutter: rgb(0x858585),
    highlight_line: rgb(0x2a2d2e),
    active_line: rgb(0x264f78),
    added_line: rgb(0x1e3a1e),
    removed_line: rgb(0x4b1818),
    comment: rgb(0x6a9955),
    string: rgb(0xce9178),
    keyword: rgb(0x569cd6),
    number: rgb(0xb5cea8),
    class_name: rgb(0x4ec9b0),
    function: rgb(0xdcdcaa),
    variable: rgb(0x9cdcfe),
    operator: rgb(0xd4d4d4),
    tag: rgb(0x569cd6),
    attr_name: rgb(0x9cdcfe),
    selector: rgb(0xd7ba7d),
    property: rgb(0x9cdcfe),
    markup: rgb(0x569cd6),
};

const LIGHT: Palette = Palette {
    background: rgb(0xfdf6e3),
    foreground: rgb(0x586e75),
    gutter: rgb(0x93a1a1),
    highlight_line: rgb(0xeee8d5),
    active_line: rgb(0xe0dcc7),
    added_line: rgb(0xe6f4d7),
    removed_line: rgb(0xfbe3e4),
    comment: rgb(0x93a1a1),
    string: rgb(0x2aa198),
    keyword: rgb(0x859900),
    number: rgb(0xd33682),
    class_name: rgb(0xb58900),
    function: rgb(0x268bd2),
    variable: rgb(0x586e75),
    operator: rgb(0x657b83),
    tag: rgb(0x268bd2),
    attr_name: rgb(0xb58900),
    selector: rgb(0xcb4b16),
    property: rgb(0x268bd2),
    markup: rgb(0xcb4b16),
};

const DRACULA: Palette = Palette {
    background: rgb(0x282a36),
    foreground: rgb(0xf8f8f2),
    gutter: rgb(0x6272a4),
    highlight_line: rgb(0x343746),
    active_line: rgb(0x44475a),
    added_line: rgb(0x2b3b2f),
    removed_line: rgb(0x442a34),
    comment: rgb(0x6272a4),
    string: rgb(0xf1fa8c),
    keyword: rgb(0xff79c6),
    number: rgb(0xbd93f9),
    class_name: rgb(0x8be9fd),
    function: rgb(0x50fa7b),
    variable: rgb(0xf8f8f2),
    operator: rgb(0xff79c6),
    tag: rgb(0xff79c6),
    attr_name: rgb(0x50fa7b),
    selector: rgb(0x50fa7b),
    property: rgb(0x8be9fd),
    markup: rgb(0xbd93f9),
};

const NORD: Palette = Palette {
    background: rgb(0x2e3440),
    foreground: rgb(0xd8dee9),
    gutter: rgb(0x4c566a),
    highlight_line: rgb(0x3b4252),
    active_line: rgb(0x434c5e),
    added_line: rgb(0x3a4a3c),
    removed_line: rgb(0x4a3a40),
    comment: rgb(0x616e88),
    string: rgb(0xa3be8c),
    keyword: rgb(0x81a1c1),
    number: rgb(0xb48ead),
    class_name: rgb(0x8fbcbb),
    function: rgb(0x88c0d0),
    variable: rgb(0xd8dee9),
    operator: rgb(0x81a1c1),
    tag: rgb(0x81a1c1),
    attr_name: rgb(0x8fbcbb),
    selector: rgb(0x8fbcbb),
    property: rgb(0x88c0d0),
    markup: rgb(0x88c0d0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_round_trip() {
        for theme in ThemeName::ALL {
            assert_eq!(theme.name().parse::<ThemeName>().unwrap(), theme);
        }
    }

    #[test]
    fn test_unknown_theme() {
        let err = "solarized".parse::<ThemeName>().unwrap_err();
        assert!(matches!(err, CliError::UnknownTheme(name) if name == "solarized"));
    }

    #[test]
    fn test_token_colors() {
        let palette = ThemeName::VsDark.palette();
        assert_eq!(palette.token(TokenKind::Keyword), rgb(0x569cd6));
        assert_eq!(palette.token(TokenKind::Text), palette.foreground);
    }
}
