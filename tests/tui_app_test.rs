// Drive the interactive app with synthetic terminal events
//
// Keys and clicks go through `App::handle_event` exactly as the runner feeds
// them; frames are rendered into a TestBackend so pointer hit regions match
// what would be on screen.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Cell, layout::Rect, style::Modifier, Terminal};

use sentinel::cli::app::{App, AppCommand, NoticeKind, Route};
use sentinel::cli::form::{Field, Focus};
use sentinel::cli::macros_view::MacroFocus;
use sentinel::cli::tui::render::draw;
use sentinel::compose::ComposerVariant;
use sentinel::config::ColorScheme;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

fn center(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    let colors = ColorScheme::default();
    terminal.draw(|frame| draw(frame, app, &colors)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for row in buffer.content.chunks(buffer.area.width as usize) {
        for cell in row {
            text.push_str(cell.symbol());
        }
        text.push('\n');
    }
    text
}

fn cell_at(terminal: &Terminal<TestBackend>, column: u16, row: u16) -> Cell {
    let buffer = terminal.backend().buffer();
    buffer.content[(row as usize) * (buffer.area.width as usize) + column as usize].clone()
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(140, 60)).unwrap()
}

#[test]
fn test_fill_form_with_keys_and_submit() {
    let mut app = App::new(ComposerVariant::Full);

    type_text(&mut app, "123");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "u1");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "acme");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "Slack");
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "Sam");
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Tab)); // email is optional
    assert_eq!(app.form().focus(), Focus::Field(Field::TaskType));
    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Down));

    assert_eq!(app.handle_event(ctrl('s')), None);
    let notice = app.notice().expect("notice after submit");
    assert_eq!(notice.kind, NoticeKind::Info);

    let request = app.form().request();
    assert_eq!(request.task_type, "Access Account");
    assert_eq!(request.issue_reason, "Interference");
    assert!(app.form().is_message_editable());
    assert!(app
        .form()
        .message_text()
        .contains("https://acme.cerby.com/account?id=123"));
}

#[test]
fn test_empty_submit_shows_inline_errors() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();

    app.handle_event(ctrl('s'));
    let screen = render(&mut terminal, &mut app);

    assert!(screen.contains("Account ID is required"));
    assert!(screen.contains("Please select a reason"));
    assert_eq!(app.notice().unwrap().kind, NoticeKind::Error);
    assert!(screen.contains("7 fields need attention"));
}

#[test]
fn test_copy_requests_clipboard_after_generation() {
    let mut app = App::new(ComposerVariant::Compact);
    assert_eq!(app.handle_event(ctrl('y')), None);

    for (field, value) in [
        (Field::AccountId, "1"),
        (Field::UserId, "u"),
        (Field::WorkSpace, "w"),
        (Field::UserFirstName, "Ann"),
    ] {
        app.form_mut().set_text(field, value);
    }
    app.form_mut().choose(Field::TaskType, "Setup MFA");
    app.handle_event(ctrl('s'));

    match app.handle_event(ctrl('y')) {
        Some(AppCommand::CopyToClipboard(text)) => assert!(text.starts_with("Hi Ann")),
        other => panic!("expected clipboard command, got {:?}", other),
    }
}

#[test]
fn test_click_outside_hides_token_field() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();

    render(&mut terminal, &mut app);
    let toggle = app.form().hit_regions.token_toggle.unwrap();
    let (x, y) = center(toggle);
    app.handle_event(click(x, y));
    assert!(app.form().is_token_field_shown());

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Enter Cerby API Token"));
    let field = app.form().hit_regions.token_field.unwrap();
    let (x, y) = center(field);
    app.handle_event(click(x, y));
    assert!(app.form().is_token_field_shown());
    assert_eq!(app.form().focus(), Focus::Field(Field::ApiToken));

    // Far corner of the message pane
    app.handle_event(click(130, 50));
    assert!(!app.form().is_token_field_shown());
}

#[test]
fn test_click_on_reset_clears_form() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();
    type_text(&mut app, "123");

    render(&mut terminal, &mut app);
    let (x, y) = center(app.form().hit_regions.reset.unwrap());
    app.handle_event(click(x, y));

    assert_eq!(app.form().request().account_id, "");
}

#[test]
fn test_nav_click_switches_view_and_releases_listener() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();

    render(&mut terminal, &mut app);
    let (_, rect) = app
        .nav_regions
        .iter()
        .copied()
        .find(|(route, _)| *route == Route::Outreach)
        .unwrap();
    app.handle_event(click(rect.x, rect.y));

    assert_eq!(app.route(), Route::Outreach);
    assert!(!app.pointer_hub().is_subscribed(Route::Compose));
    assert!(app.pointer_hub().is_subscribed(Route::Outreach));

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Manage Macros"));
    assert!(screen.contains("Create Macro"));
}

#[test]
fn test_clicks_ignored_by_inactive_form() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();

    render(&mut terminal, &mut app);
    let toggle = app.form().hit_regions.token_toggle.unwrap();
    app.navigate(Route::Outreach);

    let (x, y) = center(toggle);
    app.handle_event(click(x, y));
    assert!(!app.form().is_token_field_shown());
}

#[test]
fn test_create_macro_through_keys() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();
    app.handle_event(key(KeyCode::F(2)));

    type_text(&mut app, "Greeting");
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.macros().focus(), MacroFocus::Message);
    type_text(&mut app, "Hello there");
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Enter));

    let macros = app.macros().macros();
    assert_eq!(macros.len(), 1);
    assert_eq!(macros[0].name, "Greeting");
    assert_eq!(macros[0].message, "Hello there");

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Greeting"));
    assert!(!screen.contains("Hello there"), "list shows names only");
}

#[test]
fn test_empty_macro_rejected() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();
    app.navigate(Route::Outreach);

    app.handle_event(ctrl('s'));
    assert!(app.macros().macros().is_empty());

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Macro name is required"));
    assert!(screen.contains("Message is required"));
}

#[test]
fn test_paste_into_single_line_field_drops_newlines() {
    let mut app = App::new(ComposerVariant::Full);
    app.handle_event(Event::Paste("12\n3".to_string()));
    assert_eq!(app.form().request().account_id, "123");
    assert!(app.form().errors().is_empty());
}

#[test]
fn test_paste_on_button_changes_nothing() {
    let mut app = App::new(ComposerVariant::Full);
    app.form_mut().set_text(Field::AccountId, "123");
    app.form_mut().set_text(Field::WorkSpace, "w");
    app.form_mut().set_focus(Focus::Reset);

    app.handle_event(Event::Paste("sam acme".to_string()));

    let request = app.form().request();
    assert_eq!(request.account_id, "123");
    assert_eq!(request.work_space, "w");
    assert_eq!(app.form().focus(), Focus::Reset);
}

#[test]
fn test_paste_on_select_keeps_choice() {
    let mut app = App::new(ComposerVariant::Full);
    app.form_mut().choose(Field::TaskType, "Setup MFA");
    app.form_mut().set_focus(Focus::Field(Field::TaskType));

    app.handle_event(Event::Paste("jjj".to_string()));
    assert_eq!(app.form().request().task_type, "Setup MFA");
}

#[test]
fn test_paste_into_macro_inputs() {
    let mut app = App::new(ComposerVariant::Full);
    app.navigate(Route::Outreach);

    app.handle_event(Event::Paste("Greet\ning".to_string()));
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(Event::Paste("Hi,\r\nthere".to_string()));
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.macros().focus(), MacroFocus::Create);
    app.handle_event(Event::Paste("ignored".to_string()));

    assert_eq!(app.macros().name_input().value(), "Greeting");
    assert_eq!(app.macros().message_text(), "Hi,\nthere");
}

#[test]
fn test_click_macro_buttons() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();
    app.navigate(Route::Outreach);
    render(&mut terminal, &mut app);

    let regions = app.macros().hit_regions.clone();
    let (x, y) = center(regions.message.unwrap());
    app.handle_event(click(x, y));
    assert_eq!(app.macros().focus(), MacroFocus::Message);

    app.macros_mut().set_name("Greeting");
    app.macros_mut().set_message("Hello there");
    let (x, y) = center(regions.create.unwrap());
    app.handle_event(click(x, y));
    assert_eq!(app.macros().macros().len(), 1);
    assert_eq!(app.macros().name_input().value(), "");

    let (x, y) = center(regions.new_macro.unwrap());
    app.handle_event(click(x, y));
    assert_eq!(app.route(), Route::Outreach);
    assert!(app.pointer_hub().is_subscribed(Route::Outreach));

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("(1)"));
}

#[test]
fn test_create_click_with_empty_inputs_shows_both_errors() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();
    app.navigate(Route::Outreach);
    render(&mut terminal, &mut app);

    let (x, y) = center(app.macros().hit_regions.create.unwrap());
    app.handle_event(click(x, y));

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Macro name is required"));
    assert!(screen.contains("Message is required"));
}

#[test]
fn test_message_cursor_uses_theme_color() {
    let mut app = App::new(ComposerVariant::Full);
    let mut terminal = terminal();
    app.navigate(Route::Outreach);
    app.handle_event(key(KeyCode::Tab));
    type_text(&mut app, "Hi");
    render(&mut terminal, &mut app);

    let message = app.macros().hit_regions.message.unwrap();
    let cell = cell_at(&terminal, message.x + 1 + 2, message.y + 1);
    assert_eq!(cell.fg, ColorScheme::default().ui.cursor.to_color());
    assert!(cell.modifier.contains(Modifier::REVERSED));
}

#[test]
fn test_form_state_survives_navigation() {
    let mut app = App::new(ComposerVariant::Full);
    type_text(&mut app, "123");
    app.handle_event(key(KeyCode::F(2)));
    app.handle_event(key(KeyCode::F(1)));

    assert_eq!(app.form().request().account_id, "123");
    assert!(app.pointer_hub().is_subscribed(Route::Compose));
}

#[test]
fn test_quit() {
    let mut app = App::new(ComposerVariant::Full);
    assert_eq!(app.handle_event(ctrl('q')), Some(AppCommand::Quit));
}
