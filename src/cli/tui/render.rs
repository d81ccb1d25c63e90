// Frame rendering
//
// Draws the active view from app state. Every pass records the regions the
// pointer handlers hit-test against, so a click always refers to what is
// currently on screen.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use super::layout::{
    compose_layout, macros_layout, nav_entries, screen_layout, FieldSlot, HIDE_TOKEN_LABEL,
    RESET_LABEL, SHOW_TOKEN_LABEL, SUBMIT_LABEL,
};
use crate::cli::app::{App, NoticeKind, Route};
use crate::cli::form::{Field, Focus, HitRegions, OutreachForm};
use crate::cli::input::TextInput;
use crate::cli::macros_view::{MacroFocus, MacroHitRegions, MacrosView};
use crate::config::ColorScheme;
use crate::macros::MacroError;

const TITLE: &str = "Cerby's Sentinel 🐶🚀";

pub fn draw(frame: &mut Frame, app: &mut App, colors: &ColorScheme) {
    let screen = screen_layout(frame.area());

    let entries = nav_entries(screen.nav);
    render_nav(frame, screen.nav, &entries, app.route(), colors);
    app.nav_regions = entries;

    match app.route() {
        Route::Compose => render_compose(frame, screen.body, app.form_mut(), colors),
        Route::Outreach => render_macros(frame, screen.body, app.macros_mut(), colors),
    }

    render_status(frame, screen.status, app, colors);
}

fn render_nav(
    frame: &mut Frame,
    area: Rect,
    entries: &[(Route, Rect)],
    current: Route,
    colors: &ColorScheme,
) {
    for (route, rect) in entries {
        let mut style = Style::default().fg(colors.form.label.to_color());
        if *route == current {
            style = style
                .fg(colors.form.focused.to_color())
                .add_modifier(Modifier::BOLD);
        }
        let label = Paragraph::new(format!("[{}]", route.nav_label())).style(style);
        frame.render_widget(label, *rect);
    }

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Right)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, area);
}

fn field_block<'a>(title: &'a str, focused: bool, colors: &ColorScheme) -> Block<'a> {
    let border = if focused {
        colors.form.focused.to_color()
    } else {
        colors.ui.border.to_color()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            title,
            Style::default().fg(colors.form.label.to_color()),
        ))
}

/// Single-line input with placeholder and horizontal scroll; places the
/// terminal cursor when focused
fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &TextInput,
    focused: bool,
    colors: &ColorScheme,
) {
    let block = field_block(title, focused, colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if input.value().is_empty() {
        let placeholder = Paragraph::new(input.placeholder())
            .style(Style::default().fg(colors.messages.placeholder.to_color()));
        frame.render_widget(placeholder, inner);
        if focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    let before_cursor: String = input.value().chars().take(input.cursor()).collect();
    let cursor_x = Line::from(before_cursor).width() as u16;
    let visible = inner.width.saturating_sub(1);
    let scroll = cursor_x.saturating_sub(visible);

    let text = Paragraph::new(input.value())
        .style(Style::default().fg(colors.ui.input.to_color()))
        .scroll((0, scroll));
    frame.render_widget(text, inner);

    if focused && inner.width > 0 {
        frame.set_cursor_position(Position::new(inner.x + cursor_x - scroll, inner.y));
    }
}

fn render_select(
    frame: &mut Frame,
    area: Rect,
    form: &OutreachForm,
    field: Field,
    focused: bool,
    colors: &ColorScheme,
) {
    let block = field_block(field.label(), focused, colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(select) = form.select_input(field) else {
        return;
    };

    let line = match select.selected_label() {
        Some(label) => {
            let value = Span::styled(
                label.to_string(),
                Style::default().fg(colors.ui.input.to_color()),
            );
            if focused {
                Line::from(vec![Span::raw("‹ "), value, Span::raw(" ›")])
            } else {
                Line::from(value)
            }
        }
        None => Line::from(Span::styled(
            form.select_placeholder(field),
            Style::default().fg(colors.messages.placeholder.to_color()),
        )),
    };
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_error(frame: &mut Frame, area: Option<Rect>, text: &str, colors: &ColorScheme) {
    if let Some(area) = area {
        let error = Paragraph::new(format!(" {}", text))
            .style(Style::default().fg(colors.messages.error.to_color()));
        frame.render_widget(error, area);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, colors: &ColorScheme) {
    let mut style = Style::default().fg(colors.form.button.to_color());
    if focused {
        style = Style::default()
            .fg(colors.form.selected_fg.to_color())
            .bg(colors.form.selected_bg.to_color())
            .add_modifier(Modifier::BOLD);
    }
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.form.button.to_color())),
        );
    frame.render_widget(button, area);
}

/// Message editor inside a titled block. The textarea's own cursor is only
/// drawn while it has focus.
fn render_textarea(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    textarea: &TextArea<'static>,
    focused: bool,
    colors: &ColorScheme,
) {
    let block = field_block(title, focused, colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut textarea = textarea.clone();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_style(
        Style::default().fg(colors.messages.placeholder.to_color()),
    );
    textarea.set_style(Style::default().fg(colors.ui.input.to_color()));
    if focused {
        textarea.set_cursor_style(
            Style::default()
                .fg(colors.ui.cursor.to_color())
                .add_modifier(Modifier::REVERSED),
        );
    } else {
        textarea.set_cursor_style(Style::default());
    }
    frame.render_widget(&textarea, inner);
}

fn render_slot(frame: &mut Frame, slot: FieldSlot, form: &OutreachForm, colors: &ColorScheme) {
    let focused = form.focus() == Focus::Field(slot.field);
    if slot.field.is_select() {
        render_select(frame, slot.input, form, slot.field, focused, colors);
    } else if let Some(input) = form.text_input(slot.field) {
        render_text_input(frame, slot.input, slot.field.label(), input, focused, colors);
    }
    if let Some(error) = form.error_for(slot.field) {
        render_error(frame, slot.error, &error.to_string(), colors);
    }
}

fn render_compose(frame: &mut Frame, area: Rect, form: &mut OutreachForm, colors: &ColorScheme) {
    let layout = compose_layout(area, form);

    for slot in &layout.fields {
        render_slot(frame, *slot, form, colors);
    }

    let focus = form.focus();
    render_button(frame, layout.submit, SUBMIT_LABEL, focus == Focus::Submit, colors);
    render_button(frame, layout.reset, RESET_LABEL, focus == Focus::Reset, colors);
    let toggle_label = if form.is_token_field_shown() {
        HIDE_TOKEN_LABEL
    } else {
        SHOW_TOKEN_LABEL
    };
    render_button(
        frame,
        layout.token_toggle,
        toggle_label,
        focus == Focus::TokenToggle,
        colors,
    );

    if let Some(slot) = layout.token_field {
        render_slot(frame, slot, form, colors);
    }

    render_textarea(
        frame,
        layout.message,
        "Recommended Message 📨",
        form.message_area(),
        focus == Focus::Message,
        colors,
    );

    form.hit_regions = HitRegions {
        submit: Some(layout.submit),
        reset: Some(layout.reset),
        token_toggle: Some(layout.token_toggle),
        token_field: layout.token_field.map(|slot| slot.input),
    };
}

fn render_macros(frame: &mut Frame, area: Rect, view: &mut MacrosView, colors: &ColorScheme) {
    let layout = macros_layout(area, view);

    let items: Vec<ListItem> = view
        .macros()
        .iter()
        .skip(view.list_offset())
        .map(|m| ListItem::new(format!("• {}", m.name)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.ui.border.to_color()))
            .title(format!("Macros List 📜 ({})", view.macros().len())),
    );
    frame.render_widget(list, layout.list);

    let title = Paragraph::new("Manage Macros 📋").style(
        Style::default()
            .fg(colors.form.label.to_color())
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, layout.title);

    let focus = view.focus();
    render_text_input(
        frame,
        layout.name,
        "Macro Name",
        view.name_input(),
        focus == MacroFocus::Name,
        colors,
    );
    if view.errors().contains(&MacroError::EmptyName) {
        render_error(frame, layout.name_error, &MacroError::EmptyName.to_string(), colors);
    }

    render_textarea(
        frame,
        layout.message,
        "Macro Message",
        view.message_area(),
        focus == MacroFocus::Message,
        colors,
    );
    if view.errors().contains(&MacroError::EmptyMessage) {
        render_error(
            frame,
            layout.message_error,
            &MacroError::EmptyMessage.to_string(),
            colors,
        );
    }

    let create_width = Line::from("Create Macro").width() as u16 + 4;
    let create = Rect {
        width: create_width.min(layout.create.width),
        ..layout.create
    };
    render_button(frame, create, "Create Macro", focus == MacroFocus::Create, colors);
    render_button(frame, layout.new_macro, "+", focus == MacroFocus::NewMacro, colors);

    view.hit_regions = MacroHitRegions {
        name: Some(layout.name),
        message: Some(layout.message),
        create: Some(create),
        new_macro: Some(layout.new_macro),
    };
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, colors: &ColorScheme) {
    let line = match app.notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => colors.messages.notice.to_color(),
                NoticeKind::Error => colors.messages.error.to_color(),
            };
            Line::from(Span::styled(notice.text.clone(), Style::default().fg(color)))
        }
        None => {
            let hints = match app.route() {
                Route::Compose => {
                    "Tab: next  Ctrl+S: submit  Ctrl+R: reset  Ctrl+T: token  Ctrl+Y: copy  F2: macros  Ctrl+Q: quit"
                }
                Route::Outreach => {
                    "Tab: next  Ctrl+S: create  PgUp/PgDn: scroll  F1: home  Ctrl+Q: quit"
                }
            };
            Line::from(Span::styled(
                hints,
                Style::default().fg(colors.ui.separator.to_color()),
            ))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
