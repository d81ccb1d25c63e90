use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::compose::{ComposerVariant, OutreachRequest};
use crate::config::ColorTheme;

/// Compose outreach messages for failed account-automation tasks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file (defaults to ~/.sentinel/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Message layout (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub variant: Option<ComposerVariant>,

    /// Color theme for the TUI (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ColorTheme>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Launch the interactive terminal UI (default)
    Tui,
    /// Compose a message from flags and print it
    Compose(ComposeArgs),
    /// Print the known task or reason categories
    List {
        #[arg(value_enum)]
        what: ListTarget,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    Tasks,
    Reasons,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ComposeArgs {
    #[arg(long, default_value = "")]
    pub account_id: String,

    #[arg(long, default_value = "")]
    pub user_id: String,

    #[arg(long = "workspace", default_value = "")]
    pub work_space: String,

    /// Application provider (full variant only)
    #[arg(long)]
    pub provider: Option<String>,

    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Task key, e.g. "Password Rotation"
    #[arg(long, default_value = "")]
    pub task: String,

    /// Issue reason key, e.g. "Network"
    #[arg(long, default_value = "")]
    pub reason: String,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub api_token: Option<String>,

    /// Print `{"variant": ..., "message": ...}` instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl ComposeArgs {
    pub fn to_request(&self) -> OutreachRequest {
        OutreachRequest {
            account_id: self.account_id.clone(),
            user_id: self.user_id.clone(),
            work_space: self.work_space.clone(),
            provider: non_empty(&self.provider),
            user_first_name: self.first_name.clone(),
            task_type: self.task.clone(),
            issue_reason: self.reason.clone(),
            user_email: non_empty(&self.email),
            cerby_api_token: self.api_token.clone(),
        }
    }
}

/// `--flag ""` means the flag was not given
fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compose() {
        let cli = Cli::try_parse_from([
            "sentinel",
            "--variant",
            "compact",
            "compose",
            "--account-id",
            "123",
            "--workspace",
            "acme",
            "--task",
            "Password Rotation",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.variant, Some(ComposerVariant::Compact));
        let Some(Commands::Compose(args)) = cli.command else {
            panic!("expected compose");
        };
        let request = args.to_request();
        assert_eq!(request.account_id, "123");
        assert_eq!(request.work_space, "acme");
        assert_eq!(request.task_type, "Password Rotation");
        assert!(args.json);
    }

    #[test]
    fn test_empty_optional_flags_are_absent() {
        let cli = Cli::try_parse_from([
            "sentinel", "compose", "--email", "", "--provider", " ",
        ])
        .unwrap();
        let Some(Commands::Compose(args)) = cli.command else {
            panic!("expected compose");
        };
        let request = args.to_request();
        assert_eq!(request.user_email, None);
        assert_eq!(request.provider, None);
    }

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["sentinel", "--theme", "high-contrast"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.theme, Some(ColorTheme::HighContrast));
    }

    #[test]
    fn test_list_target() {
        let cli = Cli::try_parse_from(["sentinel", "list", "reasons"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                what: ListTarget::Reasons
            })
        ));
    }
}
