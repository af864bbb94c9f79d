mod content;
mod input;
mod pages;
mod site;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use content::Profile;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use site::SiteApp;

/// Query the grid container's bounding rect and convert a pixel position to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Map browser keys onto the site's key vocabulary.
fn key_to_char(code: &KeyCode) -> Option<char> {
    match code {
        KeyCode::Char(c) => Some(*c),
        KeyCode::Left => Some('h'),
        KeyCode::Right => Some('l'),
        KeyCode::Up => Some('k'),
        KeyCode::Down => Some('j'),
        KeyCode::Home => Some('g'),
        KeyCode::Enter => Some('\n'),
        _ => None,
    }
}

/// Feed an event to the app and log page changes to the console.
fn dispatch(app: &Rc<RefCell<SiteApp>>, event: &InputEvent) {
    let mut app = app.borrow_mut();
    let before = app.active_page();
    app.handle_input(event);
    let after = app.active_page();
    if before != after {
        web_sys::console::log_1(&format!("nav: {} -> {}", before, after).into());
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let profile = Profile::embedded().map_err(|e| {
        web_sys::console::error_1(&format!("profile: embedded content is invalid: {e}").into());
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;

    let app = Rc::new(RefCell::new(SiteApp::new(profile)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch tap handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let matched = cs.hit_test(col, row);
            web_sys::console::log_1(
                &format!(
                    "click: pixel=({}, {}), cell=({}, {}), action={:?}, targets={}",
                    mouse_event.x,
                    mouse_event.y,
                    col,
                    row,
                    matched,
                    cs.targets.len()
                )
                .into(),
            );
            drop(cs);

            if let Some(action_id) = matched {
                dispatch(&app, &InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(c) = key_to_char(&key_event.code) {
                dispatch(&app, &InputEvent::Key(c));
            }
        }
    });

    terminal.draw_web(move |f| {
        app.borrow_mut().draw(f, js_sys::Date::now(), &click_state);
    });

    Ok(())
}
