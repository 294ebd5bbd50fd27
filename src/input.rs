use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// something the host wants the emulator to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(char),
    KeyUp(char),
    Quit,
}

/// reads keypresses
pub trait Input {
    /// everything that's happened since the last poll; never blocks
    fn poll(&mut self) -> Result<Vec<InputEvent>, io::Error>;
}

/// terminals only tell us about presses (and autorepeats), so a key counts as
/// released once it's gone this long without another one
pub const KEY_HOLD: Duration = Duration::from_millis(150);

/// simple implementation of Input, using crossterm on the controlling terminal
pub struct TermInput {
    held: HashMap<char, Instant>,
}

impl TermInput {
    pub fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(TermInput {
            held: HashMap::new(),
        })
    }

    fn translate(&mut self, evt: KeyEvent, now: Instant, events: &mut Vec<InputEvent>) {
        match evt.code {
            KeyCode::Esc => events.push(InputEvent::Quit),
            // raw mode swallows SIGINT
            KeyCode::Char('c') if evt.modifiers.contains(KeyModifiers::CONTROL) => {
                events.push(InputEvent::Quit)
            }
            KeyCode::Char(key) => {
                let key = key.to_ascii_lowercase();
                if self.held.insert(key, now).is_none() {
                    events.push(InputEvent::KeyDown(key));
                }
            }
            other => trace!("Ignoring key {:?}", other),
        }
    }

    /// let go of anything that hasn't repeated recently
    fn release_stale(&mut self, now: Instant, events: &mut Vec<InputEvent>) {
        let stale: Vec<char> = self
            .held
            .iter()
            .filter(|(_, pressed)| now.duration_since(**pressed) >= KEY_HOLD)
            .map(|(key, _)| *key)
            .collect();
        for key in stale {
            self.held.remove(&key);
            events.push(InputEvent::KeyUp(key));
        }
    }
}

impl Drop for TermInput {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Couldn't restore the terminal: {}", e);
        }
    }
}

impl Input for TermInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>, io::Error> {
        let mut events = Vec::new();
        let now = Instant::now();
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(evt) => self.translate(evt, now, &mut events),
                other => trace!("Ignoring event {:?}", other),
            }
        }
        self.release_stale(now, &mut events);
        Ok(events)
    }
}

/// scripted Input implementation for testing; each poll hands out the next batch
#[derive(Debug, Default)]
pub struct DummyInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl DummyInput {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        DummyInput {
            batches: batches.into(),
        }
    }
}

impl Input for DummyInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>, io::Error> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}
