use std::sync::mpsc::{self, Receiver};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::app::App;

/// Terminal input the app reacts to. Nothing here is time driven: the
/// screen only changes on a key press or a resize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
}

impl AppEvent {
    /// Drops terminal events that can never change what is on screen.
    fn from_terminal(ev: Event) -> Option<Self> {
        match ev {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
            Event::Resize(_, _) => Some(AppEvent::Resize),
            _ => None,
        }
    }
}

/// Where events come from. `None` means the source is exhausted.
pub trait EventSource {
    fn next_event(&self) -> Option<AppEvent>;
}

/// Reads the terminal on a background thread.
///
/// The thread stops when the terminal read fails or when the source is
/// dropped and its channel closes.
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            while let Ok(ev) = event::read() {
                let Some(ev) = AppEvent::from_terminal(ev) else {
                    continue;
                };
                if tx.send(ev).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn next_event(&self) -> Option<AppEvent> {
        self.rx.recv().ok()
    }
}

/// Scripted events for driving the app without a terminal
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn next_event(&self) -> Option<AppEvent> {
        self.rx.recv().ok()
    }
}

/// Feeds events into an [`App`] and asks for a redraw whenever one changed
/// something.
pub struct Runner<E: EventSource> {
    events: E,
}

impl<E: EventSource> Runner<E> {
    pub fn new(events: E) -> Self {
        Self { events }
    }

    /// Draws once, then handles events until the app quits or the source
    /// runs dry. A key that changes nothing does not redraw.
    pub fn run<F, DrawError>(&self, app: &mut App, mut draw: F) -> Result<(), DrawError>
    where
        F: FnMut(&App) -> Result<(), DrawError>,
    {
        draw(app)?;

        while !app.should_quit {
            let Some(ev) = self.events.next_event() else {
                break;
            };

            let changed = match ev {
                AppEvent::Key(key) => app.handle_key(key),
                AppEvent::Resize => true,
            };

            if changed && !app.should_quit {
                draw(app)?;
            }
        }

        Ok(())
    }
}
