mod app;
mod character;
mod content;
mod input;
mod levels;
mod progress;
mod screens;
mod share;
mod telegram;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use app::{App, BACK_TO_HUB};
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use progress::ProgressStore;
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::{GameTime, TICKS_PER_SEC};

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
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

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

fn clock_seed() -> u64 {
    now_ms().to_bits()
}

#[cfg(target_arch = "wasm32")]
fn progress_store() -> ProgressStore {
    ProgressStore::local()
}

// Host builds (tests) have no localStorage; progress lives in memory.
#[cfg(not(target_arch = "wasm32"))]
fn progress_store() -> ProgressStore {
    ProgressStore::in_memory()
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    telegram::init();

    let app = Rc::new(RefCell::new(App::new(progress_store(), clock_seed())));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
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

            let cell = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs);
            let action = cell.and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            if let Some(action) = action {
                app.borrow_mut().handle_input(&InputEvent::Click(action));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c.to_ascii_lowercase()),
                KeyCode::Up => InputEvent::Key('w'),
                KeyCode::Down => InputEvent::Key('s'),
                KeyCode::Left => InputEvent::Key('a'),
                KeyCode::Right => InputEvent::Key('d'),
                KeyCode::Enter => InputEvent::Key('\n'),
                KeyCode::Esc => InputEvent::Click(BACK_TO_HUB),
                _ => return,
            };
            app.borrow_mut().handle_input(&event);
        }
    });

    let mut game_time = GameTime::new(TICKS_PER_SEC);
    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let delta_ticks = game_time.update(now_ms());
            app.borrow_mut().tick(delta_ticks);

            let size = f.area();

            // Update terminal dimensions and clear click targets
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            app.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
