pub use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorScheme {
    pub foreground: Option<ColorWrapper>,
    pub background: Option<ColorWrapper>,
    pub bold: bool,
    pub underline: bool,
}

// Wrapper type for Color that implements Serialize/Deserialize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct ColorWrapper(Color);

impl From<ColorWrapper> for String {
    fn from(wrapper: ColorWrapper) -> Self {
        format!("{:?}", wrapper.0)
    }
}

impl From<String> for ColorWrapper {
    fn from(s: String) -> Self {
        ColorWrapper(Color::from_str(&s).unwrap_or(Color::White))
    }
}

impl From<Color> for ColorWrapper {
    fn from(color: Color) -> Self {
        ColorWrapper(color)
    }
}

/// Rendering roles for the extracted batch: the app banner, each file's
/// name and language tag, and the warning style used for diagnostic
/// records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub banner: ColorScheme,
    pub filename: ColorScheme,
    pub language: ColorScheme,
    pub summary: ColorScheme,
    pub warning: ColorScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            banner: ColorScheme {
                foreground: Some(ColorWrapper(Color::Green)),
                background: None,
                bold: true,
                underline: false,
            },
            filename: ColorScheme {
                foreground: Some(ColorWrapper(Color::Blue)),
                background: None,
                bold: true,
                underline: false,
            },
            language: ColorScheme {
                foreground: Some(ColorWrapper(Color::Cyan)),
                background: None,
                bold: false,
                underline: false,
            },
            summary: ColorScheme {
                foreground: Some(ColorWrapper(Color::Yellow)),
                background: None,
                bold: false,
                underline: false,
            },
            warning: ColorScheme {
                foreground: Some(ColorWrapper(Color::Red)),
                background: None,
                bold: true,
                underline: false,
            },
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self::default()
    }

    pub fn light() -> Self {
        Self {
            banner: ColorScheme {
                foreground: Some(ColorWrapper(Color::BrightGreen)),
                ..Default::default()
            },
            filename: ColorScheme {
                foreground: Some(ColorWrapper(Color::BrightBlue)),
                ..Default::default()
            },
            language: ColorScheme {
                foreground: Some(ColorWrapper(Color::BrightCyan)),
                ..Default::default()
            },
            summary: ColorScheme {
                foreground: Some(ColorWrapper(Color::BrightYellow)),
                ..Default::default()
            },
            warning: ColorScheme {
                foreground: Some(ColorWrapper(Color::BrightRed)),
                ..Default::default()
            },
        }
    }

    pub fn monochrome() -> Self {
        Self {
            banner: ColorScheme {
                foreground: None,
                background: None,
                bold: true,
                underline: true,
            },
            filename: ColorScheme {
                foreground: None,
                background: None,
                bold: true,
                underline: false,
            },
            language: ColorScheme {
                foreground: None,
                background: None,
                bold: false,
                underline: false,
            },
            summary: ColorScheme {
                foreground: None,
                background: None,
                bold: false,
                underline: false,
            },
            warning: ColorScheme {
                foreground: None,
                background: None,
                bold: true,
                underline: true,
            },
        }
    }

    /// Resolve the theme named in the display config; unknown names fall
    /// back to dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "monochrome" => Self::monochrome(),
            _ => Self::dark(),
        }
    }
}

impl ColorScheme {
    pub fn apply(&self, text: &str) -> colored::ColoredString {
        let mut colored_text: colored::ColoredString = text.into();

        if let Some(fg) = &self.foreground {
            colored_text = colored_text.color(fg.0);
        }
        if let Some(bg) = &self.background {
            colored_text = colored_text.on_color(bg.0);
        }
        if self.bold {
            colored_text = colored_text.bold();
        }
        if self.underline {
            colored_text = colored_text.underline();
        }

        colored_text
    }
}
