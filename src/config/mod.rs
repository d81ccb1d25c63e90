// Configuration module
// Public interface for configuration loading

mod colors;
mod loader;
mod settings;

pub use colors::{ColorScheme, ColorSpec, ColorTheme, FormColors, MessageColors, UiColors};
pub use loader::{config_dir, config_source, load_config};
pub use settings::{Config, LoggingConfig};
