// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Unified status reporting
//!
//! Every user-visible failure in the app flows through one channel: a
//! [`Reporter`] that pages hold a clone of. Reports land in the status
//! banner of the TUI and in the tracing log. There is no second path —
//! no blocking alerts, no bare stderr writes.

use tokio::sync::mpsc;

/// How loud a report is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Routine progress ("model loaded")
    Info,
    /// Degraded but usable ("camera offline")
    Warn,
    /// Operation aborted ("speech recognition unavailable")
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// A single status report destined for the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub message: String,
}

impl Report {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Type alias for the report sender
pub type ReportSender = mpsc::UnboundedSender<Report>;

/// Type alias for the report receiver
pub type ReportReceiver = mpsc::UnboundedReceiver<Report>;

/// Create a new report channel
pub fn channel() -> (Reporter, ReportReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Reporter { tx }, rx)
}

/// Cloneable handle pages use to surface status and failures.
///
/// Sending never blocks and never fails loudly; if the UI has gone away
/// the report still reaches the tracing log.
#[derive(Clone)]
pub struct Reporter {
    tx: ReportSender,
}

impl Reporter {
    pub fn info(&self, msg: impl Into<String>) {
        self.send(Severity::Info, msg.into());
    }

    pub fn warn(&self, msg: impl Into<String>) {
        self.send(Severity::Warn, msg.into());
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.send(Severity::Error, msg.into());
    }

    fn send(&self, severity: Severity, message: String) {
        match severity {
            Severity::Info => tracing::info!(target: "sonny.report", "{message}"),
            Severity::Warn => tracing::warn!(target: "sonny.report", "{message}"),
            Severity::Error => tracing::error!(target: "sonny.report", "{message}"),
        }
        let _ = self.tx.send(Report { severity, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_arrive_in_order() {
        let (reporter, mut rx) = channel();
        reporter.info("model loaded");
        reporter.warn("camera offline");
        reporter.error("speech unavailable");

        assert_eq!(
            rx.try_recv().unwrap(),
            Report::new(Severity::Info, "model loaded")
        );
        assert_eq!(rx.try_recv().unwrap().severity, Severity::Warn);
        assert_eq!(rx.try_recv().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_send_ignores_closed_receiver() {
        let (reporter, rx) = channel();
        drop(rx);
        // Must not panic
        reporter.error("nobody listening");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Info.label(), "info");
        assert_eq!(Severity::Warn.label(), "warn");
        assert_eq!(Severity::Error.label(), "error");
    }
}
