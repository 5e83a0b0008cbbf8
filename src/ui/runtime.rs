use std::io;
use std::time::Instant;

use ratatui::layout::Rect;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::deck::Deck;
use crate::shutdown::ShutdownHandle;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse, handle_paste};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the presentation until the user quits or shutdown is signalled.
pub fn run(deck: Deck, config: Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let mut app = App::new(deck, &config, Instant::now())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err.to_string()))?;

    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(body_height(Rect::new(0, 0, cols, rows)));
    }

    loop {
        // Clicks are resolved against the area of the last drawn frame.
        let screen = terminal.draw(|frame| draw(frame, &app))?.area;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, screen),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(body_height(Rect::new(0, 0, cols, rows)))
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the input thread.
    shutdown.signal();
    drop(guard);
    info!("presentation closed");
    Ok(())
}

fn body_height(screen: Rect) -> u16 {
    body_rect(screen).height.max(1)
}
