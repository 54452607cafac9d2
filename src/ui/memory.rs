//! Recording reporter

use crate::runner::StepStatus;
use crate::ui::{Level, Reporter};
use std::sync::Mutex;

/// One recorded reporter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Step {
        name: String,
        label: &'static str,
        detail: Option<String>,
    },
    Message {
        level: Level,
        text: String,
    },
    Done(String),
}

/// Keeps every event in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<Event>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Status labels a step went through, in order
    pub fn step_labels(&self, name: &str) -> Vec<&'static str> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                Event::Step { name: n, label, .. } if n == name => Some(*label),
                _ => None,
            })
            .collect()
    }

    /// Texts of messages logged at the given level
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                Event::Message { level: l, text } if *l == level => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn is_done(&self) -> bool {
        self.lock().iter().any(|e| matches!(e, Event::Done(_)))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Event>> {
        // A poisoned lock still holds every event recorded before the panic
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, event: Event) {
        self.lock().push(event);
    }
}

impl Reporter for MemoryReporter {
    fn step(&self, name: &str, status: &StepStatus) {
        self.push(Event::Step {
            name: name.to_string(),
            label: status.label(),
            detail: status.detail(),
        });
    }

    fn message(&self, level: Level, message: &str) {
        self.push(Event::Message {
            level,
            text: message.to_string(),
        });
    }

    fn done(&self, message: &str) {
        self.push(Event::Done(message.to_string()));
    }
}
