//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded
    ConfigLoaded,
    /// Translation of a query tree begins
    TranslateBegin,
    /// Translation produced a filter
    TranslateComplete,
    /// Translation hit an unsupported node kind
    TranslateRejected,
    /// A numeric range bound had an unparseable width
    RangeBoundDegraded,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TranslateBegin => "TRANSLATE_BEGIN",
            Event::TranslateComplete => "TRANSLATE_COMPLETE",
            Event::TranslateRejected => "TRANSLATE_REJECTED",
            Event::RangeBoundDegraded => "RANGE_BOUND_DEGRADED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::TranslateBegin | Event::TranslateComplete => Severity::Trace,
            Event::ConfigLoaded => Severity::Info,
            Event::TranslateRejected | Event::RangeBoundDegraded => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
