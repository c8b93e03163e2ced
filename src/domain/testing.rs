//! Test doubles for the filtering core.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::actions::FilterAction;
use super::criteria::Criterion;
use super::{CommandLine, Completable, Opinion, SenderAdapter};

/// Sender with a fixed permission set that records messages.
pub struct RecordingSender {
    name: String,
    permissions: Vec<String>,
    messages: Mutex<Vec<String>>,
}

impl RecordingSender {
    pub fn new(name: &str, permissions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl SenderAdapter for RecordingSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    fn send_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Shared counters of the callbacks a [`RecordingAction`] received.
#[derive(Default)]
pub struct ActionLog {
    denials: AtomicUsize,
    bypasses: AtomicUsize,
}

impl ActionLog {
    pub fn denials(&self) -> usize {
        self.denials.load(Ordering::SeqCst)
    }

    pub fn bypasses(&self) -> usize {
        self.bypasses.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct RecordingAction {
    log: Arc<ActionLog>,
}

impl RecordingAction {
    pub fn events(&self) -> Arc<ActionLog> {
        Arc::clone(&self.log)
    }
}

impl FilterAction for RecordingAction {
    fn on_denial(&self, _line: &CommandLine, _sender: &dyn SenderAdapter) {
        self.log.denials.fetch_add(1, Ordering::SeqCst);
    }

    fn on_bypass(&self, _line: &CommandLine, _sender: &dyn SenderAdapter) {
        self.log.bypasses.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Criterion with a fixed answer that counts how often it is asked.
pub struct SpyCriterion {
    matches: bool,
    opinion: Opinion,
    calls: CallCounter,
}

impl SpyCriterion {
    pub fn new(matches: bool, opinion: Opinion) -> Self {
        Self {
            matches,
            opinion,
            calls: CallCounter::default(),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl Criterion for SpyCriterion {
    fn matches(&self, _line: &CommandLine) -> bool {
        self.calls.0.fetch_add(1, Ordering::SeqCst);
        self.matches
    }

    fn opinion(&self) -> Opinion {
        self.opinion
    }

    fn describe(&self) -> String {
        format!("spy -> {}", self.opinion)
    }
}

/// Completable with a fixed merged command.
pub struct FixedCompletable {
    pub line: Option<CommandLine>,
    pub sender: RecordingSender,
}

impl Completable for FixedCompletable {
    fn find_merged_command(&self) -> Option<CommandLine> {
        self.line.clone()
    }

    fn sender(&self) -> &dyn SenderAdapter {
        &self.sender
    }
}
