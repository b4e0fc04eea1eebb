//! Deterministic test doubles for gated and wrapped operations
//!
//! Handles are cheap clones sharing state, so a test can hand one copy to a
//! wrapper and keep another for assertions.

use crate::gate::{CredentialSource, NoticeSink};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

/// Answers prompts from a fixed script, then fails with `UnexpectedEof`
#[derive(Debug, Clone, Default)]
pub struct ScriptedCredentials {
    answers: Rc<RefCell<VecDeque<String>>>,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedCredentials {
    /// Script the answers in the order they will be given
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Rc::new(RefCell::new(answers.into_iter().map(Into::into).collect())),
            prompts: Rc::default(),
        }
    }

    /// Every prompt shown so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl CredentialSource for ScriptedCredentials {
    fn read_credential(&self, prompt: &str) -> io::Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "credential script exhausted")
        })
    }
}

/// Collects denial notices instead of printing them
#[derive(Debug, Clone, Default)]
pub struct RecordingNotice {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotice {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl NoticeSink for RecordingNotice {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Counts how many times a probed operation actually ran
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Rc<Cell<usize>>,
}

impl CallCounter {
    /// Counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls
    pub fn count(&self) -> usize {
        self.calls.get()
    }

    /// Wrap `f` so each invocation bumps this counter
    pub fn probe<A, R, F>(&self, f: F) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        let calls = Rc::clone(&self.calls);
        move |args| {
            calls.set(calls.get() + 1);
            f(args)
        }
    }
}
