//! Access gate wrapper
//!
//! A [`Gate`] asks a [`CredentialSource`] for a credential each time the
//! wrapped operation is called. On a match the inner operation runs with the
//! original arguments and its result comes back as `Some`. Otherwise the
//! denial notice goes to the gate's [`NoticeSink`], the inner operation is
//! never called, and the result is `None`.
//!
//! The secret check is a placeholder for demonstrating call gating, not an
//! authentication mechanism.

use crate::config::GateConfig;
use std::io::{self, BufRead, Write};

/// Supplies a credential on demand. Reads are blocking and synchronous.
pub trait CredentialSource {
    /// Obtain one credential, showing `prompt` if the source is interactive
    fn read_credential(&self, prompt: &str) -> io::Result<String>;
}

impl<S: CredentialSource + ?Sized> CredentialSource for Box<S> {
    fn read_credential(&self, prompt: &str) -> io::Result<String> {
        (**self).read_credential(prompt)
    }
}

/// Prompts on stderr and reads a single line from stdin
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinCredentials;

impl CredentialSource for StdinCredentials {
    fn read_credential(&self, prompt: &str) -> io::Result<String> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(prompt.as_bytes())?;
        stderr.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before a credential was entered",
            ));
        }
        Ok(strip_line_ending(&line).to_string())
    }
}

/// Always yields the same credential without prompting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCredential(String);

impl FixedCredential {
    /// Create a source that answers every prompt with `credential`
    pub fn new(credential: impl Into<String>) -> Self {
        Self(credential.into())
    }
}

impl CredentialSource for FixedCredential {
    fn read_credential(&self, _prompt: &str) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

/// Receives the human-readable denial notice
pub trait NoticeSink {
    /// Emit `message` to the user
    fn notify(&self, message: &str);
}

/// Writes notices to stderr, one per line
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotice;

impl NoticeSink for StderrNotice {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Credential check placed in front of an operation
pub struct Gate {
    source: Box<dyn CredentialSource>,
    notice: Box<dyn NoticeSink>,
    secret: String,
    prompt: String,
    denial_notice: String,
}

impl Gate {
    /// Gate reading from `source` with the default secret, prompt, and notice
    pub fn new(source: impl CredentialSource + 'static) -> Self {
        Self::from_config(source, &GateConfig::default())
    }

    /// Interactive gate prompting on the terminal
    pub fn stdin() -> Self {
        Self::new(StdinCredentials)
    }

    /// Gate using the secret, prompt, and notice text from `config`
    pub fn from_config(source: impl CredentialSource + 'static, config: &GateConfig) -> Self {
        Self {
            source: Box::new(source),
            notice: Box::new(StderrNotice),
            secret: config.secret.clone(),
            prompt: config.prompt.clone(),
            denial_notice: config.denial_notice.clone(),
        }
    }

    /// Replace the expected secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Replace the prompt shown by interactive sources
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Replace the denial notice text
    pub fn with_denial_notice(mut self, notice: impl Into<String>) -> Self {
        self.denial_notice = notice.into();
        self
    }

    /// Send denial notices somewhere other than stderr
    pub fn with_notice_sink(mut self, sink: impl NoticeSink + 'static) -> Self {
        self.notice = Box::new(sink);
        self
    }

    /// Ask for one credential and report whether it matches.
    ///
    /// A failed read counts as a mismatch. On mismatch the denial notice
    /// is emitted before returning.
    pub fn admit(&self) -> bool {
        let granted = match self.source.read_credential(&self.prompt) {
            Ok(credential) => credential == self.secret,
            Err(err) => {
                tracing::warn!(error = %err, "credential read failed");
                false
            }
        };

        if granted {
            tracing::debug!("access granted");
        } else {
            tracing::info!("access denied");
            self.notice.notify(&self.denial_notice);
        }
        granted
    }

    /// Wrap `f` so every call is preceded by a credential check
    pub fn guard<A, R, F>(self, f: F) -> impl Fn(A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        move |args| {
            if self.admit() {
                Some(f(args))
            } else {
                None
            }
        }
    }
}

impl std::fmt::Debug for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gate")
            .field("prompt", &self.prompt)
            .field("denial_notice", &self.denial_notice)
            .finish_non_exhaustive()
    }
}

/// Gate `f` behind the interactive terminal prompt and the default secret
pub fn require_auth<A, R, F>(f: F) -> impl Fn(A) -> Option<R>
where
    F: Fn(A) -> R,
{
    Gate::stdin().guard(f)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
