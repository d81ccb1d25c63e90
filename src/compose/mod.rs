// Message composer
//
// Pure mapping from an OutreachRequest to the outreach text a support agent
// reviews before sending. No validation happens here: missing optional values
// interpolate as the empty string and unknown categories use the fallback
// sentences from `tables`.

mod tables;

pub use tables::{action_summary, issue_explanation, IssueReason, TaskType};

use serde::{Deserialize, Serialize};

const CLOSING: &str = "Please indicate if you require any further assistance from the Cerby Team. \
Replying to this email will route you directly to one of your support specialists. \n\n\
Best, \n\
The Cerby Team";

const SEPARATOR: &str = "-----------------------------------------------------------------------";

/// Input for one composition, built from a submitted form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachRequest {
    pub account_id: String,
    pub user_id: String,
    pub work_space: String,
    #[serde(default)]
    pub provider: Option<String>,
    pub user_first_name: String,
    pub task_type: String,
    pub issue_reason: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub cerby_api_token: Option<String>,
}

/// Which message layout to produce.
///
/// `Full` carries the provider, the per-reason explanation and the contact
/// email. `Compact` uses the action summary as the body and a shorter
/// metadata block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ComposerVariant {
    #[default]
    Full,
    Compact,
}

impl ComposerVariant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Compact => "compact",
        }
    }

    /// Whether the form for this variant asks for provider and email
    pub fn collects_contact_details(&self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn compose(&self, request: &OutreachRequest) -> String {
        match self {
            Self::Full => compose_full(request),
            Self::Compact => compose_compact(request),
        }
    }
}

/// Review link for the failed account inside the customer's workspace
pub fn review_url(work_space: &str, account_id: &str) -> String {
    format!("https://{}.cerby.com/account?id={}", work_space, account_id)
}

fn greeting(request: &OutreachRequest) -> String {
    format!(
        "Hi {}, this is an automated message. ",
        request.user_first_name
    )
}

fn compose_full(request: &OutreachRequest) -> String {
    let provider = request.provider.as_deref().unwrap_or_default();
    let issue = issue_explanation(&request.issue_reason, provider);
    let action = action_summary(&request.task_type, &request.issue_reason);

    let mut message = format!(
        "{}\n\n\
         The Cerby support system detected a failed {} attempt to the following {} account from Cerby: {}\n\n\
         {}\n\n\
         {}\n\n\
         {}\n\n\
         Other information:\n",
        greeting(request),
        request.task_type,
        provider,
        review_url(&request.work_space, &request.account_id),
        issue,
        CLOSING,
        SEPARATOR,
    );

    if let Some(email) = &request.user_email {
        message.push_str(&format!("  Email to reach out to: {}\n", email));
    }
    message.push_str(&format!("  User ID: {}\n", request.user_id));
    message.push_str(&format!("  {}\n", action));
    message.push_str(&format!(
        "  API Token: {}",
        request.cerby_api_token.as_deref().unwrap_or_default()
    ));
    message
}

fn compose_compact(request: &OutreachRequest) -> String {
    let action = action_summary(&request.task_type, &request.issue_reason);

    format!(
        "{}\n\n\
         The Cerby support system detected a failed {} attempt to the following account from Cerby: {}\n\n\
         {}\n\n\
         {}\n\n\
         {}\n\n\
         Other information:\n  \
         User ID: {}\n  \
         API Token: {}",
        greeting(request),
        request.task_type,
        review_url(&request.work_space, &request.account_id),
        action,
        CLOSING,
        SEPARATOR,
        request.user_id,
        request.cerby_api_token.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OutreachRequest {
        OutreachRequest {
            account_id: "123".to_string(),
            user_id: "u1".to_string(),
            work_space: "acme".to_string(),
            provider: Some("Slack".to_string()),
            user_first_name: "Sam".to_string(),
            task_type: "Password Rotation".to_string(),
            issue_reason: "Network".to_string(),
            user_email: Some("sam@acme.com".to_string()),
            cerby_api_token: Some("tok".to_string()),
        }
    }

    #[test]
    fn test_full_message_sections_in_order() {
        let message = ComposerVariant::Full.compose(&sample());

        let positions: Vec<usize> = [
            "Hi Sam, this is an automated message.",
            "detected a failed Password Rotation attempt to the following Slack account",
            "https://acme.cerby.com/account?id=123",
            "hiccups in the network performance",
            "Best, \nThe Cerby Team",
            SEPARATOR,
            "  Email to reach out to: sam@acme.com",
            "  User ID: u1",
            "  The password rotation was unsuccessful due to the following issue: Network.",
            "  API Token: tok",
        ]
        .iter()
        .map(|needle| {
            message
                .find(needle)
                .unwrap_or_else(|| panic!("missing {:?} in:\n{}", needle, message))
        })
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(message.ends_with("API Token: tok"));
    }

    #[test]
    fn test_full_message_omits_email_line_without_email() {
        let mut request = sample();
        request.user_email = None;
        let message = ComposerVariant::Full.compose(&request);
        assert!(!message.contains("Email to reach out to"));
        assert!(message.contains("  User ID: u1\n"));
    }

    #[test]
    fn test_missing_optionals_interpolate_as_empty() {
        let request = OutreachRequest {
            task_type: "Setup MFA".to_string(),
            issue_reason: "Network".to_string(),
            ..Default::default()
        };
        let message = ComposerVariant::Full.compose(&request);
        assert!(message.contains("to the following  account from Cerby: https://.cerby.com/account?id="));
        assert!(message.ends_with("  API Token: "));
    }

    #[test]
    fn test_compact_uses_action_summary_as_body() {
        let message = ComposerVariant::Compact.compose(&sample());
        assert!(message.contains(
            "account?id=123\n\nThe password rotation was unsuccessful due to the following issue: Network.\n\n"
        ));
        assert!(!message.contains("hiccups in the network performance"));
        assert!(!message.contains("sam@acme.com"));
        assert!(!message.contains("Slack"));
        assert!(message.ends_with("  User ID: u1\n  API Token: tok"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        for variant in [ComposerVariant::Full, ComposerVariant::Compact] {
            assert_eq!(variant.compose(&sample()), variant.compose(&sample()));
        }
    }

    #[test]
    fn test_review_url() {
        assert_eq!(
            review_url("acme", "123"),
            "https://acme.cerby.com/account?id=123"
        );
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = r#"{
            "accountId": "1", "userId": "u", "workSpace": "w",
            "userFirstName": "F", "taskType": "Access Account", "issueReason": "Network"
        }"#;
        let request: OutreachRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.work_space, "w");
        assert_eq!(request.provider, None);
        assert_eq!(request.cerby_api_token, None);
    }

    #[test]
    fn test_variant_serde_lowercase() {
        let s = serde_json::to_string(&ComposerVariant::Compact).unwrap();
        assert_eq!(s, "\"compact\"");
    }
}
