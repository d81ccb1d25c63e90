// One-shot commands: `compose` and `list`

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::{ComposeArgs, ListTarget};
use super::form::validate_request;
use crate::compose::{ComposerVariant, IssueReason, TaskType};

#[derive(Debug, Serialize)]
struct ComposeOutput<'a> {
    variant: &'a str,
    message: String,
}

/// Validate the flags like the form does and return the text to print
pub fn run_compose(variant: ComposerVariant, args: &ComposeArgs) -> Result<String> {
    let request = args.to_request();
    let errors = validate_request(variant, &request);
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(|e| format!("  - {}", e)).collect();
        anyhow::bail!("Cannot compose message:\n{}", details.join("\n"));
    }

    let message = variant.compose(&request);
    tracing::debug!(
        variant = variant.name(),
        task_type = %request.task_type,
        issue_reason = %request.issue_reason,
        "Composed message"
    );

    if args.json {
        let output = ComposeOutput {
            variant: variant.name(),
            message,
        };
        serde_json::to_string_pretty(&output).context("Failed to serialize message")
    } else {
        Ok(message)
    }
}

pub fn run_list(target: ListTarget) -> String {
    match target {
        ListTarget::Tasks => format_categories(
            "Tasks",
            TaskType::ALL.iter().map(|t| (t.key(), t.label())),
        ),
        ListTarget::Reasons => format_categories(
            "Issue reasons",
            IssueReason::ALL.iter().map(|r| (r.key(), r.label())),
        ),
    }
}

/// Keys are what `compose --task/--reason` expect; labels are shown only
/// when they differ
fn format_categories<'a>(
    title: &str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut output = format!("{}:\n", title);
    for (key, label) in entries {
        if key == label {
            output.push_str(&format!("  {}\n", key));
        } else {
            output.push_str(&format!("  {}  ({})\n", key, label));
        }
    }
    output
}
