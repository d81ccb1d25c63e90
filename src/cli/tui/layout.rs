// Screen layout
//
// Pure functions from the terminal area (plus view state) to the rectangles
// each widget is drawn into. Pointer hit-testing uses the same rectangles.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::cli::app::Route;
use crate::cli::form::{Field, OutreachForm};
use crate::cli::macros_view::MacrosView;

pub const SUBMIT_LABEL: &str = "Submit ✅";
pub const RESET_LABEL: &str = "Reset 🔄";
pub const SHOW_TOKEN_LABEL: &str = "Show API Token 🔑";
pub const HIDE_TOKEN_LABEL: &str = "Hide API Token 🔑";

const FIELD_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;
const PLUS_WIDTH: u16 = 5;

/// Top-level split: navigation line, view body, status line
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub nav: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation
            Constraint::Min(0),    // View
            Constraint::Length(1), // Status
        ])
        .split(area);

    ScreenLayout {
        nav: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Clickable navigation entries, left to right
pub fn nav_entries(nav: Rect) -> Vec<(Route, Rect)> {
    let mut x = nav.x + 1;
    let mut entries = Vec::new();
    for route in [Route::Compose, Route::Outreach] {
        // Rendered as "[label]"
        let width = route.nav_label().len() as u16 + 2;
        if x + width > nav.right() {
            break;
        }
        entries.push((route, Rect::new(x, nav.y, width, 1)));
        x += width + 2;
    }
    entries
}

/// One form field: its input box and the inline error line, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    pub field: Field,
    pub input: Rect,
    pub error: Option<Rect>,
}

#[derive(Debug, Clone)]
pub struct ComposeLayout {
    pub fields: Vec<FieldSlot>,
    pub submit: Rect,
    pub reset: Rect,
    pub token_toggle: Rect,
    pub token_field: Option<FieldSlot>,
    pub message: Rect,
}

pub fn compose_layout(body: Rect, form: &OutreachForm) -> ComposeLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);
    let (left, right) = (columns[0], columns[1]);

    // (field, has_error) in display order; the token field sits below the buttons
    let fields: Vec<(Field, bool)> = form
        .fields()
        .into_iter()
        .map(|f| (f, form.error_for(f).is_some()))
        .collect();

    let mut constraints = Vec::new();
    for (_, has_error) in &fields {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        if *has_error {
            constraints.push(Constraint::Length(1));
        }
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    if form.is_token_field_shown() {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
    }
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(left);

    let mut next = 0;
    let mut slots = Vec::with_capacity(fields.len());
    for (field, has_error) in fields {
        let input = rows[next];
        next += 1;
        let error = if has_error {
            next += 1;
            Some(rows[next - 1])
        } else {
            None
        };
        slots.push(FieldSlot { field, input, error });
    }

    let button_row = rows[next];
    next += 1;
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(button_width(SUBMIT_LABEL)),
            Constraint::Length(button_width(RESET_LABEL)),
            Constraint::Length(button_width(SHOW_TOKEN_LABEL)),
            Constraint::Min(0),
        ])
        .split(button_row);

    let token_field = if form.is_token_field_shown() {
        Some(FieldSlot {
            field: Field::ApiToken,
            input: rows[next],
            error: None,
        })
    } else {
        None
    };

    ComposeLayout {
        fields: slots,
        submit: buttons[0],
        reset: buttons[1],
        token_toggle: buttons[2],
        token_field,
        message: right,
    }
}

/// Bordered button: label plus one cell of padding each side
fn button_width(label: &str) -> u16 {
    ratatui::text::Line::from(label).width() as u16 + 4
}

#[derive(Debug, Clone, Copy)]
pub struct MacrosLayout {
    pub list: Rect,
    pub title: Rect,
    pub name: Rect,
    pub name_error: Option<Rect>,
    pub message: Rect,
    pub message_error: Option<Rect>,
    pub create: Rect,
    /// Fixed control in the bottom-right corner of the view
    pub new_macro: Rect,
}

pub fn macros_layout(body: Rect, view: &MacrosView) -> MacrosLayout {
    use crate::macros::MacroError;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(body);

    let name_error = view.errors().contains(&MacroError::EmptyName);
    let message_error = view.errors().contains(&MacroError::EmptyMessage);

    let mut constraints = vec![Constraint::Length(2), Constraint::Length(FIELD_HEIGHT)];
    if name_error {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(8));
    if message_error {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(columns[1]);

    let mut next = 0;
    let mut take = || {
        next += 1;
        rows[next - 1]
    };
    let title = take();
    let name = take();
    let name_error = if name_error { Some(take()) } else { None };
    let message = take();
    let message_error = if message_error { Some(take()) } else { None };
    let create = take();

    let new_macro = Rect::new(
        body.right().saturating_sub(PLUS_WIDTH + 1).max(body.x),
        body.bottom().saturating_sub(BUTTON_HEIGHT).max(body.y),
        PLUS_WIDTH.min(body.width),
        BUTTON_HEIGHT.min(body.height),
    );

    MacrosLayout {
        list: columns[0],
        title,
        name,
        name_error,
        message,
        message_error,
        create,
        new_macro,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::ComposerVariant;

    #[test]
    fn test_screen_layout_fills_area() {
        let layout = screen_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.nav.height, 1);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.body.height, 38);
    }

    #[test]
    fn test_nav_entries_do_not_overlap() {
        let entries = nav_entries(Rect::new(0, 0, 80, 1));
        assert_eq!(entries.len(), 2);
        assert!(entries[0].1.right() < entries[1].1.x);
    }

    #[test]
    fn test_error_row_follows_field() {
        let mut form = OutreachForm::new(ComposerVariant::Full);
        form.submit();
        let layout = compose_layout(Rect::new(0, 1, 120, 60), &form);

        let first = layout.fields[0];
        let error = first.error.expect("account id error row");
        assert_eq!(error.y, first.input.bottom());
        assert_eq!(layout.fields[1].input.y, error.bottom());
    }

    #[test]
    fn test_token_field_only_when_shown() {
        let mut form = OutreachForm::new(ComposerVariant::Full);
        let body = Rect::new(0, 1, 120, 60);
        assert!(compose_layout(body, &form).token_field.is_none());

        form.toggle_token_field();
        let layout = compose_layout(body, &form);
        let token = layout.token_field.expect("token field");
        assert_eq!(token.input.y, layout.submit.bottom());
    }

    #[test]
    fn test_plus_button_in_bottom_right() {
        let view = MacrosView::new();
        let body = Rect::new(0, 1, 100, 30);
        let layout = macros_layout(body, &view);
        assert_eq!(layout.new_macro.bottom(), body.bottom());
        assert!(layout.new_macro.right() < body.right());
    }
}
