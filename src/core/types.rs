//! Core type definitions used throughout the codebase

/// Point cost / budget unit
pub type Points = u32;

/// How an action's status message should be presented
///
/// Display-only; it is never written out:
///
/// ```compile_fail
/// use heresy_roster::core::types::Severity;
///
/// let _ = serde_json::to_string(&Severity::Info);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Short tag printed in front of status messages
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Success => "ok",
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
