//! Conformance checking for AG-UI event sequences.
//!
//! [`SequenceVerifier`] validates an ordered stream of AG-UI lifecycle events
//! against the protocol's ordering and pairing rules: runs must start before
//! they finish, message/tool-call/step/reasoning blocks must be opened before
//! they stream content or close, and nothing except a new run (or `CUSTOM` /
//! `RAW` passthrough) may follow a terminal event.
//!
//! The verifier is a pure in-memory oracle: it is fed one event at a time,
//! returns either `None` or a [`Violation`], performs no I/O, and never
//! decides how a caller should react. [`SequenceMonitor`] is the
//! batteries-included consumer that logs and collects violations.

mod monitor;
mod verifier;

pub use monitor::SequenceMonitor;
pub use verifier::{SequenceVerifier, Violation, ViolationKind};
