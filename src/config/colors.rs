// Color Scheme Configuration - Customizable TUI colors
//
// Allows users to customize terminal UI colors for accessibility
// and personal preference.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Predefined color themes for different terminal backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    /// White text on black background (default)
    #[default]
    Dark,
    /// Black text on white background
    Light,
    /// High contrast yellow/white on black
    #[serde(rename = "high-contrast", alias = "highcontrast")]
    HighContrast,
    /// Solarized Dark palette
    Solarized,
}

impl ColorTheme {
    /// Convert theme to color scheme
    pub fn to_scheme(&self) -> ColorScheme {
        match self {
            Self::Dark => ColorScheme::default(),
            Self::Light => Self::light_scheme(),
            Self::HighContrast => Self::high_contrast_scheme(),
            Self::Solarized => Self::solarized_scheme(),
        }
    }

    fn light_scheme() -> ColorScheme {
        ColorScheme {
            ui: UiColors {
                border: ColorSpec::Named("darkgray".to_string()),
                separator: ColorSpec::Named("gray".to_string()),
                input: ColorSpec::Named("black".to_string()),
                cursor: ColorSpec::Rgb(0, 0, 255), // Blue
            },
            form: FormColors {
                label: ColorSpec::Named("black".to_string()),
                focused: ColorSpec::Rgb(0, 0, 139), // Dark blue
                selected_bg: ColorSpec::Rgb(0, 0, 139),
                selected_fg: ColorSpec::Named("white".to_string()),
                button: ColorSpec::Rgb(0, 0, 139),
            },
            messages: MessageColors {
                error: ColorSpec::Named("red".to_string()),
                notice: ColorSpec::Rgb(0, 128, 0), // Dark green
                placeholder: ColorSpec::Named("gray".to_string()),
            },
        }
    }

    fn high_contrast_scheme() -> ColorScheme {
        ColorScheme {
            ui: UiColors {
                border: ColorSpec::Named("white".to_string()),
                separator: ColorSpec::Named("gray".to_string()),
                input: ColorSpec::Named("yellow".to_string()),
                cursor: ColorSpec::Named("yellow".to_string()),
            },
            form: FormColors {
                label: ColorSpec::Named("white".to_string()),
                focused: ColorSpec::Named("yellow".to_string()),
                selected_bg: ColorSpec::Named("yellow".to_string()),
                selected_fg: ColorSpec::Named("black".to_string()),
                button: ColorSpec::Named("yellow".to_string()),
            },
            messages: MessageColors {
                error: ColorSpec::Named("red".to_string()),
                notice: ColorSpec::Named("yellow".to_string()),
                placeholder: ColorSpec::Named("gray".to_string()),
            },
        }
    }

    fn solarized_scheme() -> ColorScheme {
        // Solarized Dark color palette
        ColorScheme {
            ui: UiColors {
                border: ColorSpec::Rgb(101, 123, 131),    // Solarized base0
                separator: ColorSpec::Rgb(88, 110, 117),  // Solarized base01
                input: ColorSpec::Rgb(147, 161, 161),     // Solarized base1
                cursor: ColorSpec::Rgb(38, 139, 210),     // Solarized blue
            },
            form: FormColors {
                label: ColorSpec::Rgb(147, 161, 161),
                focused: ColorSpec::Rgb(38, 139, 210),
                selected_bg: ColorSpec::Rgb(38, 139, 210),
                selected_fg: ColorSpec::Rgb(0, 43, 54), // Solarized base03
                button: ColorSpec::Rgb(42, 161, 152),   // Solarized cyan
            },
            messages: MessageColors {
                error: ColorSpec::Rgb(220, 50, 47),      // Solarized red
                notice: ColorSpec::Rgb(133, 153, 0),     // Solarized green
                placeholder: ColorSpec::Rgb(88, 110, 117),
            },
        }
    }

    /// Get theme name for display
    pub fn name(&self) -> &str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::HighContrast => "High Contrast",
            Self::Solarized => "Solarized",
        }
    }
}

/// Color scheme for TUI elements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Border and UI element colors
    #[serde(default = "default_ui_colors")]
    pub ui: UiColors,

    /// Form field colors
    #[serde(default = "default_form_colors")]
    pub form: FormColors,

    /// Inline messages (validation errors, notices)
    #[serde(default = "default_message_colors")]
    pub messages: MessageColors,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            ui: default_ui_colors(),
            form: default_form_colors(),
            messages: default_message_colors(),
        }
    }
}

/// UI element colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiColors {
    /// Borders
    #[serde(default = "default_gray")]
    pub border: ColorSpec,

    /// Separator lines
    #[serde(default = "default_dark_gray")]
    pub separator: ColorSpec,

    /// Input text
    #[serde(default = "default_white")]
    pub input: ColorSpec,

    /// Cursor
    #[serde(default = "default_cyan")]
    pub cursor: ColorSpec,
}

fn default_ui_colors() -> UiColors {
    UiColors {
        border: default_gray(),
        separator: default_dark_gray(),
        input: default_white(),
        cursor: default_cyan(),
    }
}

/// Form field colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormColors {
    /// Field labels
    #[serde(default = "default_white")]
    pub label: ColorSpec,

    /// Border of the focused field
    #[serde(default = "default_cyan")]
    pub focused: ColorSpec,

    /// Selected option background
    #[serde(default = "default_cyan")]
    pub selected_bg: ColorSpec,

    /// Selected option text
    #[serde(default = "default_black")]
    pub selected_fg: ColorSpec,

    /// Buttons
    #[serde(default = "default_cyan")]
    pub button: ColorSpec,
}

fn default_form_colors() -> FormColors {
    FormColors {
        label: default_white(),
        focused: default_cyan(),
        selected_bg: default_cyan(),
        selected_fg: default_black(),
        button: default_cyan(),
    }
}

/// Inline message colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageColors {
    /// Validation errors
    #[serde(default = "default_red")]
    pub error: ColorSpec,

    /// Status notices ("Message generated", "Copied")
    #[serde(default = "default_green")]
    pub notice: ColorSpec,

    /// Placeholder text in empty inputs
    #[serde(default = "default_dark_gray")]
    pub placeholder: ColorSpec,
}

fn default_message_colors() -> MessageColors {
    MessageColors {
        error: default_red(),
        notice: default_green(),
        placeholder: default_dark_gray(),
    }
}

/// Color specification - supports named colors and RGB
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (e.g., "red", "green", "cyan")
    Named(String),
    /// RGB color (e.g., [255, 0, 0])
    Rgb(u8, u8, u8),
}

impl ColorSpec {
    /// Convert to ratatui Color
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Named(name) => parse_named_color(name),
            ColorSpec::Rgb(r, g, b) => Color::Rgb(*r, *g, *b),
        }
    }
}

/// Parse named color string to ratatui Color
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::White, // Default fallback
    }
}

// Default color constructors
fn default_green() -> ColorSpec {
    ColorSpec::Named("green".to_string())
}

fn default_dark_gray() -> ColorSpec {
    ColorSpec::Named("darkgray".to_string())
}

fn default_cyan() -> ColorSpec {
    ColorSpec::Named("cyan".to_string())
}

fn default_gray() -> ColorSpec {
    ColorSpec::Named("gray".to_string())
}

fn default_white() -> ColorSpec {
    ColorSpec::Named("white".to_string())
}

fn default_red() -> ColorSpec {
    ColorSpec::Named("red".to_string())
}

fn default_black() -> ColorSpec {
    ColorSpec::Named("black".to_string())
}
