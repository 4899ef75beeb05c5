use sequin_protocol_ag_ui::Event;
use tracing::warn;

use crate::verifier::{SequenceVerifier, Violation};

/// Logging, collecting wrapper around a [`SequenceVerifier`].
///
/// The verifier itself is a silent oracle; what to do with a verdict is the
/// caller's decision. This is the default consumer: every violation is
/// logged through `tracing` with structured fields and retained for later
/// inspection, while the stream keeps being checked.
#[derive(Debug, Default)]
pub struct SequenceMonitor {
    verifier: SequenceVerifier,
    violations: Vec<Violation>,
}

impl SequenceMonitor {
    /// Create a monitor with a fresh verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the next event, logging and recording any violation.
    ///
    /// Returns the violation for this event, if any, borrowed from the
    /// monitor's record.
    pub fn observe(&mut self, event: &Event) -> Option<&Violation> {
        let violation = self.verifier.verify(event)?;
        warn!(
            kind = violation.kind.as_str(),
            event_type = %event.kind(),
            "event sequence violation: {}",
            violation.message
        );
        self.violations.push(violation);
        self.violations.last()
    }

    /// Whether no violation has been recorded since construction or the last
    /// [`reset`](Self::reset).
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations recorded so far.
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// All recorded violations, in arrival order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the monitor, yielding the recorded violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Access the underlying verifier's state.
    pub fn verifier(&self) -> &SequenceVerifier {
        &self.verifier
    }

    /// Reset the verifier and drop the recorded violations.
    pub fn reset(&mut self) {
        self.verifier.reset();
        self.violations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verifier::ViolationKind;

    #[test]
    fn clean_stream_records_nothing() {
        let mut monitor = SequenceMonitor::new();
        for event in [
            Event::run_started("t1", "r1", None),
            Event::text_message_start("m1"),
            Event::text_message_content("m1", "hi"),
            Event::text_message_end("m1"),
            Event::run_finished("t1", "r1", None),
        ] {
            assert!(monitor.observe(&event).is_none());
        }
        assert!(monitor.is_clean());
        assert_eq!(monitor.violation_count(), 0);
    }

    #[test]
    fn violations_are_recorded_in_order() {
        let mut monitor = SequenceMonitor::new();
        monitor.observe(&Event::run_finished("t1", "r1", None));
        monitor.observe(&Event::run_started("t1", "r1", None));
        monitor.observe(&Event::text_message_end("gone"));

        assert!(!monitor.is_clean());
        assert_eq!(monitor.violation_count(), 2);
        let violations = monitor.into_violations();
        assert_eq!(violations[0].kind, ViolationKind::Sequence);
        assert_eq!(violations[1].kind, ViolationKind::MissingStart);
    }

    #[test]
    fn observe_returns_the_recorded_violation() {
        let mut monitor = SequenceMonitor::new();
        let violation = monitor
            .observe(&Event::run_error("boom", None))
            .expect("terminal without run must be rejected");
        assert_eq!(violation.kind, ViolationKind::Sequence);
    }

    #[test]
    fn reset_clears_verifier_and_record() {
        let mut monitor = SequenceMonitor::new();
        monitor.observe(&Event::run_started("t1", "r1", None));
        monitor.observe(&Event::run_started("t1", "r2", None));
        assert_eq!(monitor.violation_count(), 1);

        monitor.reset();
        assert!(monitor.is_clean());
        assert!(!monitor.verifier().is_run_active());
        assert!(monitor.observe(&Event::run_started("t1", "r3", None)).is_none());
    }
}
