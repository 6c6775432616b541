use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        submission::SendCompletion,
    },
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Terminal keys plus sender completions, both surfaced on the UI thread.
pub struct CrosstermEventSource {
    completions: Receiver<SendCompletion>,
}

impl CrosstermEventSource {
    pub fn new(completions: Receiver<SendCompletion>) -> Self {
        Self { completions }
    }
}

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        match self.completions.try_recv() {
            Ok(completion) => return Ok(Some(AppEvent::SendCompleted(completion))),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => {}
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            Event::Resize(..) => Ok(Some(AppEvent::Tick)),
            _ => Ok(None),
        }
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let named = |name: &str| Some(AppEvent::InputKey(KeyInput::new(name, false)));

    match key.code {
        KeyCode::Esc => Some(AppEvent::QuitRequested),
        KeyCode::Char('c') if ctrl => Some(AppEvent::QuitRequested),
        KeyCode::Enter => Some(AppEvent::SubmitRequested),
        KeyCode::Backspace => named("backspace"),
        KeyCode::Delete => named("delete"),
        KeyCode::Left => named("left"),
        KeyCode::Right => named("right"),
        KeyCode::Home => named("home"),
        KeyCode::End => named("end"),
        KeyCode::Char(ch) => Some(AppEvent::InputKey(KeyInput::new(ch.to_string(), ctrl))),
        _ => None,
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}
