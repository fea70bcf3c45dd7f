// crates/fs_probe/src/outcome.rs

/// Result of a best-effort probe.
///
/// A probe never fails outright; when something goes wrong it falls back to
/// a safe default and says so through `Defaulted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Defaulted { value: T, reason: String },
}

impl<T> Outcome<T> {
    pub fn defaulted(value: T, reason: impl Into<String>) -> Self {
        Outcome::Defaulted {
            value,
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Completed(value) => value,
            Outcome::Defaulted { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Completed(value) => value,
            Outcome::Defaulted { value, .. } => value,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Outcome::Defaulted { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Completed(_) => None,
            Outcome::Defaulted { reason, .. } => Some(reason),
        }
    }
}

/// Receives the failures that best-effort probes swallow.
pub trait ProbeObserver: Send + Sync {
    fn probe_failed(&self, operation: &str, detail: &str);
}

/// Forwards swallowed failures to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ProbeObserver for LogObserver {
    fn probe_failed(&self, operation: &str, detail: &str) {
        log::warn!("{}: {}", operation, detail);
    }
}
