//! AG-UI protocol event model.
//!
//! Typed representation of the AG-UI event stream exchanged between an agent
//! backend and a frontend runtime. The [`Event`] enum covers the full kind
//! vocabulary with wire-faithful serde encoding (`type`-tagged, camelCase
//! fields); [`EventKind`] exposes the vocabulary as a fieldless enum for
//! dispatch and diagnostics.
//!
//! See: <https://docs.ag-ui.com/concepts/events>
#![allow(missing_docs)]

mod events;
mod kind;

pub use events::{BaseEvent, Event, ReasoningEncryptedValueSubtype, Role};
pub use kind::EventKind;
