// Outreach form - state behind the "/" view
//
// Holds the field values, focus, inline validation errors, the generated
// message and the API-token visibility toggle. Rendering lives in
// `tui::render`; this module only reacts to key and pointer events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use thiserror::Error;
use tui_textarea::TextArea;

use super::app::Route;
use super::input::{InputOutcome, SelectInput, SelectOption, TextInput};
use super::pointer::{hit, PointerHub, PointerSubscription};
use crate::compose::{ComposerVariant, IssueReason, OutreachRequest, TaskType};

/// Placeholder shown in the reason select before a task is chosen
pub const REASON_PLACEHOLDER: &str = "Please select a task first";
/// Placeholder shown in the task select
pub const TASK_PLACEHOLDER: &str = "Select a task";

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AccountId,
    UserId,
    WorkSpace,
    Provider,
    UserFirstName,
    UserEmail,
    TaskType,
    IssueReason,
    ApiToken,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AccountId => "Account ID 🆔",
            Self::UserId => "User ID 👤",
            Self::WorkSpace => "Workspace 🏢",
            Self::Provider => "Provider 🌐",
            Self::UserFirstName => "User First Name 🙋",
            Self::UserEmail => "User Email ✉",
            Self::TaskType => "Task 🛠",
            Self::IssueReason => "Reason for the Issue ❗",
            Self::ApiToken => "API Token 🔑",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::AccountId => "Enter Account ID",
            Self::UserId => "Enter User ID",
            Self::WorkSpace => "Enter Workspace / Will be fetched from API",
            Self::Provider => "Enter Application Provider",
            Self::UserFirstName => "Enter User First Name / Will be fetched from API",
            Self::UserEmail => "Enter User Email (optional)",
            Self::TaskType => TASK_PLACEHOLDER,
            Self::IssueReason => REASON_PLACEHOLDER,
            Self::ApiToken => "Enter Cerby API Token",
        }
    }

    /// Inline message shown when a required field is left empty
    pub fn required_message(&self) -> &'static str {
        match self {
            Self::AccountId => "Account ID is required",
            Self::UserId => "User ID is required",
            Self::WorkSpace => "Workspace is required",
            Self::Provider => "Provider is required",
            Self::UserFirstName => "User first name is required",
            Self::UserEmail => "User email is required",
            Self::TaskType => "Please select a task",
            Self::IssueReason => "Please select a reason",
            Self::ApiToken => "API token is required",
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::TaskType | Self::IssueReason)
    }

    /// Fields laid out above the buttons for a variant
    pub fn form_fields(variant: ComposerVariant) -> Vec<Field> {
        let mut fields = vec![Self::AccountId, Self::UserId, Self::WorkSpace];
        if variant.collects_contact_details() {
            fields.push(Self::Provider);
        }
        fields.push(Self::UserFirstName);
        if variant.collects_contact_details() {
            fields.push(Self::UserEmail);
        }
        fields.push(Self::TaskType);
        fields.push(Self::IssueReason);
        fields
    }
}

/// Field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{}", .0.required_message())]
    Required(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) => *field,
        }
    }
}

/// Required-field check shared by the form and the `compose` command.
///
/// Task and reason only need to be non-empty: unknown values are composed
/// with the fallback sentences.
pub fn validate_request(variant: ComposerVariant, request: &OutreachRequest) -> Vec<FieldError> {
    let provider = request.provider.as_deref().unwrap_or_default();
    let checks = [
        (Field::AccountId, request.account_id.as_str()),
        (Field::UserId, request.user_id.as_str()),
        (Field::WorkSpace, request.work_space.as_str()),
        (Field::Provider, provider),
        (Field::UserFirstName, request.user_first_name.as_str()),
        (Field::TaskType, request.task_type.as_str()),
        (Field::IssueReason, request.issue_reason.as_str()),
    ];

    checks
        .into_iter()
        .filter(|(field, _)| *field != Field::Provider || variant.collects_contact_details())
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| FieldError::Required(field))
        .collect()
}

/// Focusable elements of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Field(Field),
    Submit,
    Reset,
    TokenToggle,
    Message,
}

/// What a form event asks of the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    /// A message was generated
    Submitted,
    /// Submission blocked by this many field errors
    Rejected(usize),
    Reset,
    /// Copy the generated message to the clipboard
    Copy(String),
}

/// Screen regions recorded by the last render, used for pointer hits
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    pub submit: Option<Rect>,
    pub reset: Option<Rect>,
    pub token_toggle: Option<Rect>,
    pub token_field: Option<Rect>,
}

pub struct OutreachForm {
    variant: ComposerVariant,
    account_id: TextInput,
    user_id: TextInput,
    work_space: TextInput,
    provider: TextInput,
    user_first_name: TextInput,
    user_email: TextInput,
    api_token: TextInput,
    task_type: SelectInput,
    issue_reason: SelectInput,

    errors: Vec<FieldError>,
    message: TextArea<'static>,
    message_editable: bool,
    show_token_field: bool,
    focus: Focus,

    pointer: Option<PointerSubscription>,
    pub hit_regions: HitRegions,
}

impl OutreachForm {
    pub fn new(variant: ComposerVariant) -> Self {
        let task_options = TaskType::ALL
            .iter()
            .map(|t| SelectOption::new(t.key(), t.label()))
            .collect();
        let reason_options = IssueReason::ALL
            .iter()
            .map(|r| SelectOption::new(r.key(), r.label()))
            .collect();

        Self {
            variant,
            account_id: TextInput::new(Field::AccountId.placeholder()),
            user_id: TextInput::new(Field::UserId.placeholder()),
            work_space: TextInput::new(Field::WorkSpace.placeholder()),
            provider: TextInput::new(Field::Provider.placeholder()),
            user_first_name: TextInput::new(Field::UserFirstName.placeholder()),
            user_email: TextInput::new(Field::UserEmail.placeholder()),
            api_token: TextInput::new(Field::ApiToken.placeholder()),
            task_type: SelectInput::new(task_options),
            issue_reason: SelectInput::new(reason_options),

            errors: Vec::new(),
            message: Self::create_message_area(""),
            message_editable: false,
            show_token_field: false,
            focus: Focus::Field(Field::AccountId),

            pointer: None,
            hit_regions: HitRegions::default(),
        }
    }

    fn create_message_area(text: &str) -> TextArea<'static> {
        let mut area = TextArea::new(text.lines().map(str::to_string).collect());
        area.set_placeholder_text("Submit the form to generate a recommended message");
        area
    }

    // ── Activation ────────────────────────────────────────────────────────────

    /// Start listening for pointer-down events (view mounted)
    pub fn activate(&mut self, hub: &PointerHub) {
        if self.pointer.is_none() {
            self.pointer = Some(hub.subscribe(Route::Compose));
        }
    }

    /// Stop listening (view unmounted)
    pub fn deactivate(&mut self) {
        self.pointer = None;
    }

    pub fn is_listening(&self) -> bool {
        self.pointer.is_some()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn variant(&self) -> ComposerVariant {
        self.variant
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus_order().contains(&focus) {
            self.focus = focus;
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn fields(&self) -> Vec<Field> {
        Field::form_fields(self.variant)
    }

    pub fn text_input(&self, field: Field) -> Option<&TextInput> {
        match field {
            Field::AccountId => Some(&self.account_id),
            Field::UserId => Some(&self.user_id),
            Field::WorkSpace => Some(&self.work_space),
            Field::Provider => Some(&self.provider),
            Field::UserFirstName => Some(&self.user_first_name),
            Field::UserEmail => Some(&self.user_email),
            Field::ApiToken => Some(&self.api_token),
            Field::TaskType | Field::IssueReason => None,
        }
    }

    fn text_input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::AccountId => Some(&mut self.account_id),
            Field::UserId => Some(&mut self.user_id),
            Field::WorkSpace => Some(&mut self.work_space),
            Field::Provider => Some(&mut self.provider),
            Field::UserFirstName => Some(&mut self.user_first_name),
            Field::UserEmail => Some(&mut self.user_email),
            Field::ApiToken => Some(&mut self.api_token),
            Field::TaskType | Field::IssueReason => None,
        }
    }

    pub fn select_input(&self, field: Field) -> Option<&SelectInput> {
        match field {
            Field::TaskType => Some(&self.task_type),
            Field::IssueReason => Some(&self.issue_reason),
            _ => None,
        }
    }

    /// Text shown in a select box when nothing is chosen
    pub fn select_placeholder(&self, field: Field) -> &'static str {
        match field {
            Field::IssueReason if !self.task_type.value().is_empty() => "Select a reason",
            other => other.placeholder(),
        }
    }

    /// Fill a text field programmatically
    pub fn set_text(&mut self, field: Field, value: &str) {
        if let Some(input) = self.text_input_mut(field) {
            input.set_value(value);
        }
    }

    /// Choose a task or reason by its key; returns false for unknown keys
    pub fn choose(&mut self, field: Field, value: &str) -> bool {
        let chosen = match field {
            Field::TaskType => self.task_type.select_value(value),
            Field::IssueReason => self.issue_reason.select_value(value),
            _ => false,
        };
        if chosen && field == Field::TaskType {
            self.on_task_changed();
        }
        chosen
    }

    pub fn message_text(&self) -> String {
        self.message.lines().join("\n")
    }

    pub fn message_area(&self) -> &TextArea<'static> {
        &self.message
    }

    pub fn is_message_editable(&self) -> bool {
        self.message_editable
    }

    pub fn is_token_field_shown(&self) -> bool {
        self.show_token_field
    }

    // ── Focus ─────────────────────────────────────────────────────────────────

    /// Tab order for the current state
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = self.fields().into_iter().map(Focus::Field).collect();
        order.extend([Focus::Submit, Focus::Reset, Focus::TokenToggle]);
        if self.show_token_field {
            order.push(Focus::Field(Field::ApiToken));
        }
        if self.message_editable {
            order.push(Focus::Message);
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(index + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(index + order.len() - 1) % order.len()];
    }

    // ── Operations ────────────────────────────────────────────────────────────

    /// Build the request from current values
    pub fn request(&self) -> OutreachRequest {
        let collects = self.variant.collects_contact_details();
        let optional = |input: &TextInput| {
            if input.value().is_empty() {
                None
            } else {
                Some(input.value().to_string())
            }
        };

        OutreachRequest {
            account_id: self.account_id.value().to_string(),
            user_id: self.user_id.value().to_string(),
            work_space: self.work_space.value().to_string(),
            provider: if collects { Some(self.provider.value().to_string()) } else { None },
            user_first_name: self.user_first_name.value().to_string(),
            task_type: self.task_type.value().to_string(),
            issue_reason: self.issue_reason.value().to_string(),
            user_email: if collects { optional(&self.user_email) } else { None },
            cerby_api_token: Some(self.api_token.value().to_string()),
        }
    }

    /// Validate and compose. Errors stay visible until the next submit or reset.
    pub fn submit(&mut self) -> FormAction {
        let request = self.request();
        let errors = validate_request(self.variant, &request);

        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "Outreach form rejected");
            let count = errors.len();
            if let Some(first) = errors.first() {
                self.focus = Focus::Field(first.field());
            }
            self.errors = errors;
            return FormAction::Rejected(count);
        }

        let message = self.variant.compose(&request);
        tracing::info!(
            variant = self.variant.name(),
            task_type = %request.task_type,
            issue_reason = %request.issue_reason,
            "Outreach message generated"
        );

        self.errors.clear();
        self.message = Self::create_message_area(&message);
        self.message_editable = true;
        FormAction::Submitted
    }

    /// Clear every field, the message and the errors; hide the token field
    pub fn reset(&mut self) -> FormAction {
        for field in [
            Field::AccountId,
            Field::UserId,
            Field::WorkSpace,
            Field::Provider,
            Field::UserFirstName,
            Field::UserEmail,
            Field::ApiToken,
        ] {
            if let Some(input) = self.text_input_mut(field) {
                input.clear();
            }
        }
        self.task_type.clear();
        self.issue_reason.clear();
        self.errors.clear();
        self.message = Self::create_message_area("");
        self.message_editable = false;
        self.show_token_field = false;
        self.focus = Focus::Field(Field::AccountId);
        tracing::debug!("Outreach form reset");
        FormAction::Reset
    }

    pub fn toggle_token_field(&mut self) {
        self.show_token_field = !self.show_token_field;
        if !self.show_token_field && self.focus == Focus::Field(Field::ApiToken) {
            self.focus = Focus::TokenToggle;
        }
    }

    fn hide_token_field(&mut self) {
        if self.show_token_field {
            self.toggle_token_field();
        }
    }

    /// A task chosen while no reason is picked defaults the reason to the
    /// first option. Reasons are never narrowed by task.
    fn on_task_changed(&mut self) {
        if self.issue_reason.selected_index().is_none() && !self.task_type.value().is_empty() {
            self.issue_reason.select(Some(0));
        }
    }

    fn activate_focus(&mut self) -> FormAction {
        match self.focus {
            Focus::Submit => self.submit(),
            Focus::Reset => self.reset(),
            Focus::TokenToggle => {
                self.toggle_token_field();
                FormAction::None
            }
            Focus::Field(field) if field.is_select() => {
                self.focus_next();
                FormAction::None
            }
            // Enter in a text field submits, like a browser form
            Focus::Field(_) => self.submit(),
            Focus::Message => FormAction::None,
        }
    }

    // ── Events ────────────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('t') => {
                    self.toggle_token_field();
                    FormAction::None
                }
                KeyCode::Char('y') if self.message_editable => {
                    FormAction::Copy(self.message_text())
                }
                _ if self.focus == Focus::Message => {
                    self.message.input(key);
                    FormAction::None
                }
                _ => FormAction::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return FormAction::None;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return FormAction::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Message => {
                if key.code == KeyCode::Esc {
                    self.focus = Focus::Submit;
                } else if self.message_editable {
                    self.message.input(key);
                }
                FormAction::None
            }
            Focus::Field(field) if field.is_select() => {
                let outcome = match field {
                    Field::TaskType => self.task_type.handle_key(key),
                    _ => self.issue_reason.handle_key(key),
                };
                if outcome == InputOutcome::Changed && field == Field::TaskType {
                    self.on_task_changed();
                }
                if outcome == InputOutcome::Ignored && key.code == KeyCode::Enter {
                    return self.activate_focus();
                }
                FormAction::None
            }
            Focus::Field(field) => {
                if key.code == KeyCode::Enter {
                    return self.activate_focus();
                }
                if let Some(input) = self.text_input_mut(field) {
                    input.handle_key(key);
                }
                FormAction::None
            }
            Focus::Submit | Focus::Reset | Focus::TokenToggle => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.activate_focus(),
                KeyCode::Left | KeyCode::Up => {
                    self.focus_prev();
                    FormAction::None
                }
                KeyCode::Right | KeyCode::Down => {
                    self.focus_next();
                    FormAction::None
                }
                _ => FormAction::None,
            },
        }
    }

    /// Bracketed paste. Only text fields and the generated message take
    /// pasted text; buttons and selects ignore it.
    pub fn paste(&mut self, text: &str) -> FormAction {
        match self.focus {
            Focus::Message if self.message_editable => {
                self.message.insert_str(text.replace("\r\n", "\n"));
            }
            Focus::Field(field) if !field.is_select() => {
                if let Some(input) = self.text_input_mut(field) {
                    input.insert_str(text);
                }
            }
            _ => tracing::trace!(focus = ?self.focus, "Paste ignored"),
        }
        FormAction::None
    }

    /// Pointer-down anywhere on screen. Clicking a button activates it; a
    /// click outside both the token toggle and the token field hides the
    /// field.
    pub fn handle_pointer_down(&mut self, column: u16, row: u16) -> FormAction {
        let regions = self.hit_regions.clone();

        if hit(regions.token_toggle, column, row) {
            self.focus = Focus::TokenToggle;
            self.toggle_token_field();
            return FormAction::None;
        }
        if self.show_token_field && hit(regions.token_field, column, row) {
            self.focus = Focus::Field(Field::ApiToken);
            return FormAction::None;
        }

        self.hide_token_field();

        if hit(regions.submit, column, row) {
            self.focus = Focus::Submit;
            return self.submit();
        }
        if hit(regions.reset, column, row) {
            self.focus = Focus::Reset;
            return self.reset();
        }
        FormAction::None
    }
}
