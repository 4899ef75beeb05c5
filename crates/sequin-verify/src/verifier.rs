use sequin_protocol_ag_ui::{Event, EventKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// Violations
// ============================================================================

/// Classification of a protocol violation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A terminal event arrived with no active run.
    Sequence,
    /// A content/end/finish event referenced an id or name that was never
    /// opened (or was already closed).
    MissingStart,
    /// A start event reused an id that is still open, or a run started while
    /// another was in progress.
    Duplicate,
    /// A non-exempt event arrived after the run had already terminated.
    AfterFinish,
}

impl ViolationKind {
    /// Stable string form (`sequence`, `missing_start`, `duplicate`,
    /// `after_finish`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::MissingStart => "missing_start",
            Self::Duplicate => "duplicate",
            Self::AfterFinish => "after_finish",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected event, with the reason for rejection.
///
/// Produced fresh per rejected [`SequenceVerifier::verify`] call; the
/// verifier keeps no record of it. Implements `Error` so callers can bubble
/// it through their own error types, but the verifier itself never returns
/// `Result` — a violation is an ordinary value, not control flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    /// Violation classification.
    pub kind: ViolationKind,
    /// Human-readable description naming the offending kind and, where one
    /// exists, the offending correlation id or name.
    pub message: String,
    /// The offending event.
    pub event: Event,
}

impl Violation {
    fn new(kind: ViolationKind, message: String, event: &Event) -> Self {
        Self {
            kind,
            message,
            event: event.clone(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::error::Error for Violation {}

// Sequence Verifier
// ============================================================================

/// State machine validating AG-UI event ordering and pairing rules.
///
/// Feed events in arrival order through [`verify`](Self::verify); each call
/// returns `None` for a conforming event or a [`Violation`] describing the
/// first-order reason the event is invalid. A rejected event changes no
/// state, so verification continues from the last accepted event — there is
/// no multi-event error recovery.
///
/// The tracked state is minimal: whether a run is live, whether it has
/// terminated, the sets of currently-open message ids, tool call ids, and
/// step names, and whether a reasoning block is open. An accepted
/// `RUN_STARTED` clears the correlation trackers itself, so callers only
/// need [`reset`](Self::reset) when switching to a logically distinct
/// session.
///
/// Calls take `&mut self`; a single instance must be confined to one event
/// loop or guarded externally. Independent instances are fully independent.
#[derive(Debug, Clone, Default)]
pub struct SequenceVerifier {
    run_active: bool,
    run_finished: bool,
    open_message_ids: HashSet<String>,
    open_tool_call_ids: HashSet<String>,
    open_step_names: HashSet<String>,
    reasoning_open: bool,
}

impl SequenceVerifier {
    /// Create a verifier with no run in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the next event in the stream.
    ///
    /// Returns `None` if the event conforms, or the violation otherwise.
    /// State is mutated only when the event is accepted.
    pub fn verify(&mut self, event: &Event) -> Option<Violation> {
        let kind = event.kind();

        // Post-termination gate: once a run has finished, only a new run or
        // the CUSTOM/RAW passthroughs are allowed, before any other rule.
        if self.run_finished
            && !matches!(
                kind,
                EventKind::RunStarted | EventKind::Custom | EventKind::Raw
            )
        {
            return Some(Violation::new(
                ViolationKind::AfterFinish,
                format!("{kind} received after the run already terminated"),
                event,
            ));
        }

        match kind {
            EventKind::RunStarted => {
                if self.run_active && !self.run_finished {
                    return Some(Violation::new(
                        ViolationKind::Duplicate,
                        "RUN_STARTED while a run is already in progress".to_string(),
                        event,
                    ));
                }
                self.begin_run();
                None
            }

            EventKind::RunFinished | EventKind::RunError => {
                if !self.run_active {
                    return Some(Violation::new(
                        ViolationKind::Sequence,
                        format!("{kind} with no active run"),
                        event,
                    ));
                }
                // run_active intentionally stays true: only a new RUN_STARTED
                // or reset() clears the joint run state.
                self.run_finished = true;
                None
            }

            EventKind::TextMessageStart => {
                if let Some(id) = event.message_id() {
                    if self.open_message_ids.contains(id) {
                        return Some(Violation::new(
                            ViolationKind::Duplicate,
                            format!("TEXT_MESSAGE_START for messageId {id} which is already open"),
                            event,
                        ));
                    }
                    self.open_message_ids.insert(id.to_string());
                }
                None
            }

            EventKind::TextMessageContent | EventKind::TextMessageEnd => {
                if let Some(id) = event.message_id() {
                    if !self.open_message_ids.contains(id) {
                        return Some(Violation::new(
                            ViolationKind::MissingStart,
                            format!("{kind} for unknown messageId {id}"),
                            event,
                        ));
                    }
                    if kind == EventKind::TextMessageEnd {
                        self.open_message_ids.remove(id);
                    }
                }
                None
            }

            EventKind::ToolCallStart => {
                if let Some(id) = event.tool_call_id() {
                    if self.open_tool_call_ids.contains(id) {
                        return Some(Violation::new(
                            ViolationKind::Duplicate,
                            format!("TOOL_CALL_START for toolCallId {id} which is already open"),
                            event,
                        ));
                    }
                    self.open_tool_call_ids.insert(id.to_string());
                }
                None
            }

            EventKind::ToolCallArgs | EventKind::ToolCallEnd => {
                if let Some(id) = event.tool_call_id() {
                    if !self.open_tool_call_ids.contains(id) {
                        return Some(Violation::new(
                            ViolationKind::MissingStart,
                            format!("{kind} for unknown toolCallId {id}"),
                            event,
                        ));
                    }
                    if kind == EventKind::ToolCallEnd {
                        self.open_tool_call_ids.remove(id);
                    }
                }
                None
            }

            // Steps have no duplicate-start check; re-starting an open step
            // name is accepted. Asymmetric with messages and tool calls on
            // purpose.
            EventKind::StepStarted => {
                if let Some(name) = event.step_name() {
                    self.open_step_names.insert(name.to_string());
                }
                None
            }

            EventKind::StepFinished => {
                if let Some(name) = event.step_name() {
                    if !self.open_step_names.contains(name) {
                        return Some(Violation::new(
                            ViolationKind::MissingStart,
                            format!("STEP_FINISHED for unknown stepName {name}"),
                            event,
                        ));
                    }
                    self.open_step_names.remove(name);
                }
                None
            }

            EventKind::ReasoningStart | EventKind::ReasoningMessageStart => {
                self.reasoning_open = true;
                None
            }

            EventKind::ReasoningContent | EventKind::ReasoningMessageContent => {
                if !self.reasoning_open {
                    return Some(Violation::new(
                        ViolationKind::MissingStart,
                        format!("{kind} with no open reasoning block"),
                        event,
                    ));
                }
                None
            }

            EventKind::ReasoningEnd | EventKind::ReasoningMessageEnd => {
                if !self.reasoning_open {
                    return Some(Violation::new(
                        ViolationKind::MissingStart,
                        format!("{kind} with no open reasoning block"),
                        event,
                    ));
                }
                self.reasoning_open = false;
                None
            }

            // Always-valid passthrough kinds: chunks, tool results, state and
            // activity snapshots/deltas, custom and raw wrappers. Subject
            // only to the post-termination gate above (which exempts CUSTOM
            // and RAW).
            EventKind::TextMessageChunk
            | EventKind::ToolCallChunk
            | EventKind::ReasoningMessageChunk
            | EventKind::ReasoningEncryptedValue
            | EventKind::ToolCallResult
            | EventKind::StateSnapshot
            | EventKind::StateDelta
            | EventKind::MessagesSnapshot
            | EventKind::ActivitySnapshot
            | EventKind::ActivityDelta
            | EventKind::Activity
            | EventKind::Custom
            | EventKind::Raw => None,
        }
    }

    /// Restore the freshly-constructed state. Idempotent.
    pub fn reset(&mut self) {
        self.run_active = false;
        self.run_finished = false;
        self.clear_run_trackers();
    }

    /// Whether a run has started and not been superseded.
    ///
    /// Stays true after a terminal event; see [`is_run_finished`](Self::is_run_finished).
    pub fn is_run_active(&self) -> bool {
        self.run_active
    }

    /// Whether the current run has observed a terminal event.
    pub fn is_run_finished(&self) -> bool {
        self.run_finished
    }

    /// Number of message ids currently open.
    pub fn open_message_count(&self) -> usize {
        self.open_message_ids.len()
    }

    /// Number of tool call ids currently open.
    pub fn open_tool_call_count(&self) -> usize {
        self.open_tool_call_ids.len()
    }

    /// Number of step names currently open.
    pub fn open_step_count(&self) -> usize {
        self.open_step_names.len()
    }

    /// Whether a reasoning block is currently open.
    pub fn is_reasoning_open(&self) -> bool {
        self.reasoning_open
    }

    /// Transition into a fresh run, dropping all correlation state from the
    /// previous one. Shared by the RUN_STARTED accept path and nothing else;
    /// `reset` clears the run flags instead of raising them.
    fn begin_run(&mut self) {
        self.run_active = true;
        self.run_finished = false;
        self.clear_run_trackers();
    }

    fn clear_run_trackers(&mut self) {
        self.open_message_ids.clear();
        self.open_tool_call_ids.clear();
        self.open_step_names.clear();
        self.reasoning_open = false;
    }
}
