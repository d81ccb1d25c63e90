// Static lookup tables for task types and issue reasons
//
// Keys are matched by exact, case-sensitive string equality. Anything that
// does not match falls back to a generic sentence echoing the raw value.

use serde::{Deserialize, Serialize};

/// Kind of automation task that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    AccessAccount,
    PasswordRotation,
    DisableMfa,
    EmailSwapIn,
    HealthcheckMfa,
    SetupMfa,
    GetBusinessSync,
    ProvideAccess,
    RevokeAccess,
    UpdateAccess,
}

impl TaskType {
    /// All task types, in the order the form offers them
    pub const ALL: [TaskType; 10] = [
        TaskType::AccessAccount,
        TaskType::PasswordRotation,
        TaskType::DisableMfa,
        TaskType::EmailSwapIn,
        TaskType::HealthcheckMfa,
        TaskType::SetupMfa,
        TaskType::GetBusinessSync,
        TaskType::ProvideAccess,
        TaskType::RevokeAccess,
        TaskType::UpdateAccess,
    ];

    /// Wire value used for lookups (also the display label)
    pub fn key(&self) -> &'static str {
        match self {
            Self::AccessAccount => "Access Account",
            Self::PasswordRotation => "Password Rotation",
            Self::DisableMfa => "Disable MFA",
            Self::EmailSwapIn => "Email Swap In",
            Self::HealthcheckMfa => "Healthcheck MFA",
            Self::SetupMfa => "Setup MFA",
            Self::GetBusinessSync => "Get Business (Sync)",
            Self::ProvideAccess => "Provide Access (Add a user)",
            Self::RevokeAccess => "Revoke Access (Remove a user)",
            Self::UpdateAccess => "Update Access",
        }
    }

    pub fn label(&self) -> &'static str {
        self.key()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Action-summary sentence with the reason substituted in
    pub fn summary(&self, issue_reason: &str) -> String {
        let action = match self {
            Self::AccessAccount => "The access to the account",
            Self::PasswordRotation => "The password rotation",
            Self::DisableMfa => "The request to disable multi-factor authentication",
            Self::EmailSwapIn => "The request to swap the email",
            Self::HealthcheckMfa => "The health check for multi-factor authentication",
            Self::SetupMfa => "The request to set up multi-factor authentication",
            Self::GetBusinessSync => "The request to sync with your tenant",
            Self::ProvideAccess => "The request to add a user to your tenant",
            Self::RevokeAccess => "The request to revoke access to a user on your tenant",
            Self::UpdateAccess => "The request to update user access",
        };
        format!(
            "{} was unsuccessful due to the following issue: {}.",
            action, issue_reason
        )
    }
}

/// Why an automation task failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueReason {
    ManagedContactMissing,
    Interference,
    InvalidCredentials,
    InvalidTotp,
    IpAddress,
    MissingBusinessId,
    Network,
    PreStoredPassword,
    TwoFactorNotManaged,
    AccountLimited,
    CaptchaIssue,
}

impl IssueReason {
    /// All reasons, in the order the form offers them.
    /// The list is never narrowed by the selected task.
    pub const ALL: [IssueReason; 11] = [
        IssueReason::ManagedContactMissing,
        IssueReason::Interference,
        IssueReason::InvalidCredentials,
        IssueReason::InvalidTotp,
        IssueReason::IpAddress,
        IssueReason::MissingBusinessId,
        IssueReason::Network,
        IssueReason::PreStoredPassword,
        IssueReason::TwoFactorNotManaged,
        IssueReason::AccountLimited,
        IssueReason::CaptchaIssue,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::ManagedContactMissing => "Cerby Managed Email/Phone Not Managed",
            Self::Interference => "Interference",
            Self::InvalidCredentials => "Invalid Credentials",
            Self::InvalidTotp => "Invalid TOTP",
            Self::IpAddress => "IP Address",
            Self::MissingBusinessId => "Missing BusinessID",
            Self::Network => "Network",
            Self::PreStoredPassword => "Pre-Stored Password/Browser Interference",
            Self::TwoFactorNotManaged => "2FA Not Managed",
            Self::AccountLimited => "Account Limited",
            Self::CaptchaIssue => "Captcha Issue",
        }
    }

    /// Label shown in option lists (differs from the key for two entries)
    pub fn label(&self) -> &'static str {
        match self {
            Self::ManagedContactMissing => "CMe / CMp ot Managed",
            Self::PreStoredPassword => "Pre-Stored Password / Browser Interference",
            other => other.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }

    /// Multi-paragraph explanation for the customer.
    ///
    /// Only `MissingBusinessId` depends on the provider.
    pub fn explanation(&self, provider: &str) -> String {
        match self {
            Self::MissingBusinessId => format!(
                "This app has a field called Business ID, which means you must add the information \
                 required to perform any automation with this account. You can find your business ID \
                 on the URL of the app you are trying to add before the domain.\n\n\
                 This is the structure we are looking for: \"https://(Business ID).{}.com\"\n\n\
                 After you add the business ID to your Cerby app, the automation should work without a problem.",
                provider
            ),
            other => other.static_explanation().to_string(),
        }
    }

    fn static_explanation(&self) -> &'static str {
        match self {
            Self::ManagedContactMissing => MANAGED_CONTACT_MISSING,
            Self::Interference => INTERFERENCE,
            Self::InvalidCredentials => INVALID_CREDENTIALS,
            Self::InvalidTotp => INVALID_TOTP,
            Self::IpAddress => IP_ADDRESS,
            Self::Network => NETWORK,
            Self::PreStoredPassword => PRE_STORED_PASSWORD,
            Self::TwoFactorNotManaged => TWO_FACTOR_NOT_MANAGED,
            Self::AccountLimited => ACCOUNT_LIMITED,
            Self::CaptchaIssue => CAPTCHA_ISSUE,
            // Provider-dependent, handled in explanation()
            Self::MissingBusinessId => "",
        }
    }
}

/// Issue explanation for a raw reason string, with the generic fallback
pub fn issue_explanation(issue_reason: &str, provider: &str) -> String {
    match IssueReason::from_key(issue_reason) {
        Some(reason) => reason.explanation(provider),
        None => format!(
            "An unknown issue occurred. The reason provided is: {}.",
            issue_reason
        ),
    }
}

/// Action summary for a raw task string, with the generic fallback
pub fn action_summary(task_type: &str, issue_reason: &str) -> String {
    match TaskType::from_key(task_type) {
        Some(task) => task.summary(issue_reason),
        None => format!(
            "We detected an issue with the task: {}. The reason provided is: {}.",
            task_type, issue_reason
        ),
    }
}

const MANAGED_CONTACT_MISSING: &str = "Essentially, the code was not sent to Cerby and the automation can't complete the 2FA challenge.\n\n\
For this, we recommend creating a Cerby-managed email/phone. This way, the automation can fill in the confirmation code \
on your behalf. You can find more details in the following documentation: \
https://help.cerby.com/en/articles/6393770-video-how-to-add-a-cerby-managed-email-or-phone-number-to-your-account";

const INTERFERENCE: &str = "This may happen when the automation workflow is filling in the login details, and the tab \
is unexpectedly closed or interrupted. Our recommendation is to wait until the automation has been completed automatically.\n\n\
If auto-login is failing, you can manually fill in the detail using the extension. On the username and password field, \
you should be able to see the Cerby logo and select the right fill to insert. You can see the steps in this short video: \
https://share.vidyard.com/watch/9B1zeTZ9ZyHfZMMegibWAp";

const INVALID_CREDENTIALS: &str = "Apparently, the credentials (username and/or password) stored inside Cerby for this \
account need to be corrected. Please verify the credentials inside Cerby and the Application are the same, update them \
with the correct ones if needed, and try again.";

const INVALID_TOTP: &str = "This may happen when the application is not accepting the generated TOTP as a valid \
verification code.\n\n\
As a workaround, you can manually fill in the TOTP detail using the extension. Inside the code field, at the right, you \
should be able to see the cerby logo and select the right fill to insert.";

const IP_ADDRESS: &str = "This usually happens when an application identifies multiple retries or logins that have \
been performed from a single IP Address.\n\n\
As a workaround, perhaps you could try from a different IP address, this can be achieved by using a VPN or switching to \
an alternate Wi-Fi network.";

const NETWORK: &str = "This may happen when the automation workflow is filling in the login details and the \
application takes longer than expected to load. This could be caused due to hiccups in the network performance.\n\n\
Feel free to retry the login, or if auto-login is failing, you can manually fill in the details using the extension. \
On the username and password field, you should be able to see the Cerby logo and select the right fill to insert. \n\n\
You can see the steps in this short video: https://share.vidyard.com/watch/9B1zeTZ9ZyHfZMMegibWAp";

const PRE_STORED_PASSWORD: &str = "Apparently, the introduced password was incorrect. This usually happens when the \
credentials are stored on a local password manager.\n\n\
If auto-login is failing, you can manually fill in the detail using the extension. On the username and password field, \
you should be able to see the Cerby logo and select the right fill to insert. \n\n\
You can follow the steps in our help video: https://share.vidyard.com/watch/9B1zeTZ9ZyHfZMMegibWAp";

const TWO_FACTOR_NOT_MANAGED: &str = "Essentially, there is no way Cerby is able to complete the 2FA challenge \
automatically.\n\n\
For this, we recommend enabling 2FA with Cerby as described in this document: \
https://help.cerby.com/en/articles/6992597-how-to-turn-on-2fa-for-google-manually";

const ACCOUNT_LIMITED: &str = "Based on our logs, we identified the error message you encountered as \"Too many \
attempts. Try again later\" or \u{201c}Maximum number of attempts reached.\u{201d}\n\n\
As a workaround, our recommendation is to perform a manual login with the \u{201c}Phone\u{201d} option as described in \
this video: https://help.cerby.com/en/articles/8092336-video-how-to-log-in-to-tiktok-using-a-cerby-managed-phone-number\n\n\
If you still face this error, we recommend using an alternative browser (Chrome, Firefox, Edge, or Safari).";

const CAPTCHA_ISSUE: &str = "Unfortunately, Cerby is unable to solve those Captchas on your behalf, so the \
expectation is for you to solve it manually.\n\n\
Feel free to retry the login, or if you continue having issues let us know if you would like us to assist you in any way.";
