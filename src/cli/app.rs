// Navigation shell
//
// Owns both views for the lifetime of the process, routes terminal events to
// the active one and tells the runner about side effects (quit, clipboard).
// Only the active view holds a pointer subscription.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::form::{FormAction, OutreachForm};
use super::macros_view::{MacrosAction, MacrosView};
use super::pointer::{hit, PointerHub};
use crate::compose::ComposerVariant;

/// In-app routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Outreach composer form
    Compose,
    /// Macro management
    Outreach,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Compose => "/",
            Self::Outreach => "/outreach",
        }
    }

    /// Label in the navigation bar
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Compose => "Home",
            Self::Outreach => "Manage Outreaches",
        }
    }
}

/// Side effects the runner performs on the app's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    CopyToClipboard(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line status shown at the bottom of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

pub struct App {
    route: Route,
    form: OutreachForm,
    macros: MacrosView,
    pointer: PointerHub,
    notice: Option<Notice>,
    /// Navigation bar entries recorded by the last render
    pub nav_regions: Vec<(Route, Rect)>,
}

impl App {
    pub fn new(variant: ComposerVariant) -> Self {
        let pointer = PointerHub::new();
        let mut form = OutreachForm::new(variant);
        form.activate(&pointer);

        Self {
            route: Route::Compose,
            form,
            macros: MacrosView::new(),
            pointer,
            notice: None,
            nav_regions: Vec::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn form(&self) -> &OutreachForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OutreachForm {
        &mut self.form
    }

    pub fn macros(&self) -> &MacrosView {
        &self.macros
    }

    pub fn macros_mut(&mut self) -> &mut MacrosView {
        &mut self.macros
    }

    pub fn pointer_hub(&self) -> &PointerHub {
        &self.pointer
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Switch views. The outgoing view releases its pointer subscription and
    /// the incoming one acquires its own. View state is kept.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            tracing::debug!(path = route.path(), "Already on route");
            return;
        }

        match self.route {
            Route::Compose => self.form.deactivate(),
            Route::Outreach => self.macros.deactivate(),
        }
        match route {
            Route::Compose => self.form.activate(&self.pointer),
            Route::Outreach => self.macros.activate(&self.pointer),
        }

        tracing::debug!(from = self.route.path(), to = route.path(), "Navigated");
        self.route = route;
        self.notice = None;
    }

    /// Record the outcome of a clipboard copy requested earlier
    pub fn report_copy(&mut self, result: anyhow::Result<()>) {
        self.notice = Some(match result {
            Ok(()) => Notice::info("Message copied to clipboard"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                Notice::error(format!("Copy failed: {}", e))
            }
        });
    }

    pub fn handle_event(&mut self, event: Event) -> Option<AppCommand> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => {
                match self.route {
                    Route::Compose => {
                        self.form.paste(&text);
                    }
                    Route::Outreach => self.macros.paste(&text),
                }
                None
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Some(AppCommand::Quit),
            KeyCode::F(1) => {
                self.navigate(Route::Compose);
                return None;
            }
            KeyCode::F(2) => {
                self.navigate(Route::Outreach);
                return None;
            }
            _ => {}
        }

        match self.route {
            Route::Compose => {
                let action = self.form.handle_key(key);
                self.apply_form_action(action)
            }
            Route::Outreach => {
                let action = self.macros.handle_key(key);
                self.apply_macros_action(action);
                None
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<AppCommand> {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return None;
        }

        if let Some(route) = self
            .nav_regions
            .iter()
            .find(|(_, rect)| hit(Some(*rect), mouse.column, mouse.row))
            .map(|(route, _)| *route)
        {
            self.navigate(route);
            return None;
        }

        let mut command = None;
        for owner in self.pointer.listeners() {
            match owner {
                Route::Compose => {
                    let action = self.form.handle_pointer_down(mouse.column, mouse.row);
                    command = self.apply_form_action(action);
                }
                Route::Outreach => {
                    let action = self.macros.handle_pointer_down(mouse.column, mouse.row);
                    self.apply_macros_action(action);
                }
            }
        }
        command
    }

    fn apply_form_action(&mut self, action: FormAction) -> Option<AppCommand> {
        match action {
            FormAction::None => None,
            FormAction::Submitted => {
                self.notice = Some(Notice::info("Recommended message generated"));
                None
            }
            FormAction::Rejected(count) => {
                self.notice = Some(Notice::error(format!(
                    "{} field{} need attention",
                    count,
                    if count == 1 { "" } else { "s" }
                )));
                None
            }
            FormAction::Reset => {
                self.notice = None;
                None
            }
            FormAction::Copy(text) => Some(AppCommand::CopyToClipboard(text)),
        }
    }

    fn apply_macros_action(&mut self, action: MacrosAction) {
        match action {
            MacrosAction::None => {}
            MacrosAction::Created => {
                self.notice = Some(Notice::info(format!(
                    "Macro created ({} total)",
                    self.macros.macros().len()
                )));
            }
            MacrosAction::Rejected => {
                self.notice = Some(Notice::error("Macro name and message are required"));
            }
            MacrosAction::Navigate(route) => self.navigate(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Compose.path(), "/");
        assert_eq!(Route::Outreach.path(), "/outreach");
    }

    #[test]
    fn test_compose_view_listens_on_start() {
        let app = App::new(ComposerVariant::Full);
        assert!(app.pointer_hub().is_subscribed(Route::Compose));
    }

    #[test]
    fn test_navigation_releases_and_reacquires_listener() {
        let mut app = App::new(ComposerVariant::Full);
        app.navigate(Route::Outreach);
        assert_eq!(app.pointer_hub().listeners(), vec![Route::Outreach]);
        assert!(!app.form().is_listening());
        assert!(app.macros().is_listening());

        app.navigate(Route::Compose);
        assert_eq!(app.pointer_hub().listeners(), vec![Route::Compose]);
        assert!(!app.macros().is_listening());
    }

    #[test]
    fn test_navigate_to_same_route_keeps_single_listener() {
        let mut app = App::new(ComposerVariant::Full);
        app.navigate(Route::Compose);
        app.navigate(Route::Compose);
        assert_eq!(app.pointer_hub().listener_count(), 1);
    }

    #[test]
    fn test_failed_copy_reports_error_notice() {
        let mut app = App::new(ComposerVariant::Full);
        app.report_copy(Err(anyhow::anyhow!("no display")));
        let notice = app.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("no display"));
    }
}
