use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::kind::EventKind;

/// Role attached to AG-UI message events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    System,
    #[default]
    Assistant,
    User,
    Tool,
    Activity,
    Reasoning,
}

/// Fields shared by every AG-UI event (BaseEvent).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BaseEvent {
    /// Event timestamp in milliseconds since epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Raw event data from external systems.
    #[serde(rename = "rawEvent", skip_serializing_if = "Option::is_none")]
    pub raw_event: Option<Value>,
}

/// Entity kind for `REASONING_ENCRYPTED_VALUE`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReasoningEncryptedValueSubtype {
    ToolCall,
    Message,
}

/// AG-UI protocol event.
///
/// One variant per wire kind, tagged by the `type` discriminator. Lifecycle
/// events delimit runs and steps; message, tool-call, and reasoning events
/// stream content in start/content/end triples correlated by id; the
/// remaining kinds carry state, activity, or opaque payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Event {
    // ------------------------------------------------------------------
    // Run and step lifecycle
    // ------------------------------------------------------------------
    /// Start of an agent run.
    #[serde(rename = "RUN_STARTED")]
    RunStarted {
        #[serde(rename = "threadId")]
        thread_id: String,
        #[serde(rename = "runId")]
        run_id: String,
        #[serde(rename = "parentRunId", skip_serializing_if = "Option::is_none")]
        parent_run_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        input: Option<Value>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Successful completion of an agent run.
    #[serde(rename = "RUN_FINISHED")]
    RunFinished {
        #[serde(rename = "threadId")]
        thread_id: String,
        #[serde(rename = "runId")]
        run_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<Value>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Run terminated with an error.
    #[serde(rename = "RUN_ERROR")]
    RunError {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Start of a named step within a run.
    #[serde(rename = "STEP_STARTED")]
    StepStarted {
        #[serde(rename = "stepName")]
        step_name: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Completion of a named step.
    #[serde(rename = "STEP_FINISHED")]
    StepFinished {
        #[serde(rename = "stepName")]
        step_name: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    // ------------------------------------------------------------------
    // Text messages
    // ------------------------------------------------------------------
    /// Opens a streamed text message.
    #[serde(rename = "TEXT_MESSAGE_START")]
    TextMessageStart {
        #[serde(rename = "messageId")]
        message_id: String,
        role: Role,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Incremental text content for an open message.
    #[serde(rename = "TEXT_MESSAGE_CONTENT")]
    TextMessageContent {
        #[serde(rename = "messageId")]
        message_id: String,
        delta: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Closes a streamed text message.
    #[serde(rename = "TEXT_MESSAGE_END")]
    TextMessageEnd {
        #[serde(rename = "messageId")]
        message_id: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Self-contained text chunk (alternative to start/content/end).
    #[serde(rename = "TEXT_MESSAGE_CHUNK")]
    TextMessageChunk {
        #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
        message_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        role: Option<Role>,
        #[serde(skip_serializing_if = "Option::is_none")]
        delta: Option<String>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    // ------------------------------------------------------------------
    // Tool calls
    // ------------------------------------------------------------------
    /// Opens a tool call.
    #[serde(rename = "TOOL_CALL_START")]
    ToolCallStart {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        #[serde(rename = "toolCallName")]
        tool_call_name: String,
        #[serde(rename = "parentMessageId", skip_serializing_if = "Option::is_none")]
        parent_message_id: Option<String>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Incremental tool argument text for an open tool call.
    #[serde(rename = "TOOL_CALL_ARGS")]
    ToolCallArgs {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        delta: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Closes a tool call's argument stream.
    #[serde(rename = "TOOL_CALL_END")]
    ToolCallEnd {
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Self-contained tool-call chunk (alternative to start/args/end).
    #[serde(rename = "TOOL_CALL_CHUNK")]
    ToolCallChunk {
        #[serde(rename = "toolCallId", skip_serializing_if = "Option::is_none")]
        tool_call_id: Option<String>,
        #[serde(rename = "toolCallName", skip_serializing_if = "Option::is_none")]
        tool_call_name: Option<String>,
        #[serde(rename = "parentMessageId", skip_serializing_if = "Option::is_none")]
        parent_message_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        delta: Option<String>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Result of an executed tool call.
    #[serde(rename = "TOOL_CALL_RESULT")]
    ToolCallResult {
        #[serde(rename = "messageId")]
        message_id: String,
        #[serde(rename = "toolCallId")]
        tool_call_id: String,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        role: Option<Role>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    // ------------------------------------------------------------------
    // Reasoning
    // ------------------------------------------------------------------
    /// Opens a reasoning phase for a message.
    #[serde(rename = "REASONING_START")]
    ReasoningStart {
        #[serde(rename = "messageId")]
        message_id: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Incremental reasoning content within an open reasoning phase.
    #[serde(rename = "REASONING_CONTENT")]
    ReasoningContent {
        #[serde(rename = "messageId")]
        message_id: String,
        delta: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Closes a reasoning phase.
    #[serde(rename = "REASONING_END")]
    ReasoningEnd {
        #[serde(rename = "messageId")]
        message_id: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Opens a streamed reasoning message.
    #[serde(rename = "REASONING_MESSAGE_START")]
    ReasoningMessageStart {
        #[serde(rename = "messageId")]
        message_id: String,
        role: Role,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Incremental reasoning message text.
    #[serde(rename = "REASONING_MESSAGE_CONTENT")]
    ReasoningMessageContent {
        #[serde(rename = "messageId")]
        message_id: String,
        delta: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Closes a streamed reasoning message.
    #[serde(rename = "REASONING_MESSAGE_END")]
    ReasoningMessageEnd {
        #[serde(rename = "messageId")]
        message_id: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Self-contained reasoning chunk (alternative to start/content/end).
    #[serde(rename = "REASONING_MESSAGE_CHUNK")]
    ReasoningMessageChunk {
        #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
        message_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        delta: Option<String>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Opaque encrypted reasoning value attached to a message or tool call.
    #[serde(rename = "REASONING_ENCRYPTED_VALUE")]
    ReasoningEncryptedValue {
        subtype: ReasoningEncryptedValueSubtype,
        #[serde(rename = "entityId")]
        entity_id: String,
        #[serde(rename = "encryptedValue")]
        encrypted_value: String,
        #[serde(flatten)]
        base: BaseEvent,
    },

    // ------------------------------------------------------------------
    // State and activity
    // ------------------------------------------------------------------
    /// Complete state snapshot.
    #[serde(rename = "STATE_SNAPSHOT")]
    StateSnapshot {
        snapshot: Value,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Incremental state changes as RFC 6902 JSON Patch operations.
    #[serde(rename = "STATE_DELTA")]
    StateDelta {
        delta: Vec<Value>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Complete message history snapshot.
    #[serde(rename = "MESSAGES_SNAPSHOT")]
    MessagesSnapshot {
        messages: Vec<Value>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Activity snapshot for a message.
    #[serde(rename = "ACTIVITY_SNAPSHOT")]
    ActivitySnapshot {
        #[serde(rename = "messageId")]
        message_id: String,
        #[serde(rename = "activityType")]
        activity_type: String,
        content: HashMap<String, Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        replace: Option<bool>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Incremental activity changes as RFC 6902 JSON Patch operations.
    #[serde(rename = "ACTIVITY_DELTA")]
    ActivityDelta {
        #[serde(rename = "messageId")]
        message_id: String,
        #[serde(rename = "activityType")]
        activity_type: String,
        patch: Vec<Value>,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Inline activity event.
    #[serde(rename = "ACTIVITY")]
    Activity {
        #[serde(rename = "messageId")]
        message_id: String,
        #[serde(rename = "activityType")]
        activity_type: String,
        content: Value,
        #[serde(flatten)]
        base: BaseEvent,
    },

    // ------------------------------------------------------------------
    // Opaque
    // ------------------------------------------------------------------
    /// Custom application-defined event.
    #[serde(rename = "CUSTOM")]
    Custom {
        name: String,
        value: Value,
        #[serde(flatten)]
        base: BaseEvent,
    },

    /// Wrapped event from an external system.
    #[serde(rename = "RAW")]
    Raw {
        event: Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        source: Option<String>,
        #[serde(flatten)]
        base: BaseEvent,
    },
}

impl Event {
    /// The kind of this event, matching the wire `type` discriminator.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::RunStarted { .. } => EventKind::RunStarted,
            Self::RunFinished { .. } => EventKind::RunFinished,
            Self::RunError { .. } => EventKind::RunError,
            Self::StepStarted { .. } => EventKind::StepStarted,
            Self::StepFinished { .. } => EventKind::StepFinished,
            Self::TextMessageStart { .. } => EventKind::TextMessageStart,
            Self::TextMessageContent { .. } => EventKind::TextMessageContent,
            Self::TextMessageEnd { .. } => EventKind::TextMessageEnd,
            Self::TextMessageChunk { .. } => EventKind::TextMessageChunk,
            Self::ToolCallStart { .. } => EventKind::ToolCallStart,
            Self::ToolCallArgs { .. } => EventKind::ToolCallArgs,
            Self::ToolCallEnd { .. } => EventKind::ToolCallEnd,
            Self::ToolCallChunk { .. } => EventKind::ToolCallChunk,
            Self::ToolCallResult { .. } => EventKind::ToolCallResult,
            Self::ReasoningStart { .. } => EventKind::ReasoningStart,
            Self::ReasoningContent { .. } => EventKind::ReasoningContent,
            Self::ReasoningEnd { .. } => EventKind::ReasoningEnd,
            Self::ReasoningMessageStart { .. } => EventKind::ReasoningMessageStart,
            Self::ReasoningMessageContent { .. } => EventKind::ReasoningMessageContent,
            Self::ReasoningMessageEnd { .. } => EventKind::ReasoningMessageEnd,
            Self::ReasoningMessageChunk { .. } => EventKind::ReasoningMessageChunk,
            Self::ReasoningEncryptedValue { .. } => EventKind::ReasoningEncryptedValue,
            Self::StateSnapshot { .. } => EventKind::StateSnapshot,
            Self::StateDelta { .. } => EventKind::StateDelta,
            Self::MessagesSnapshot { .. } => EventKind::MessagesSnapshot,
            Self::ActivitySnapshot { .. } => EventKind::ActivitySnapshot,
            Self::ActivityDelta { .. } => EventKind::ActivityDelta,
            Self::Activity { .. } => EventKind::Activity,
            Self::Custom { .. } => EventKind::Custom,
            Self::Raw { .. } => EventKind::Raw,
        }
    }

    /// The `messageId` correlation field, for variants that carry one.
    pub fn message_id(&self) -> Option<&str> {
        match self {
            Self::TextMessageStart { message_id, .. }
            | Self::TextMessageContent { message_id, .. }
            | Self::TextMessageEnd { message_id, .. }
            | Self::ReasoningStart { message_id, .. }
            | Self::ReasoningContent { message_id, .. }
            | Self::ReasoningEnd { message_id, .. }
            | Self::ReasoningMessageStart { message_id, .. }
            | Self::ReasoningMessageContent { message_id, .. }
            | Self::ReasoningMessageEnd { message_id, .. }
            | Self::ToolCallResult { message_id, .. }
            | Self::ActivitySnapshot { message_id, .. }
            | Self::ActivityDelta { message_id, .. }
            | Self::Activity { message_id, .. } => Some(message_id.as_str()),
            Self::TextMessageChunk { message_id, .. }
            | Self::ReasoningMessageChunk { message_id, .. } => message_id.as_deref(),
            _ => None,
        }
    }

    /// The `toolCallId` correlation field, for variants that carry one.
    pub fn tool_call_id(&self) -> Option<&str> {
        match self {
            Self::ToolCallStart { tool_call_id, .. }
            | Self::ToolCallArgs { tool_call_id, .. }
            | Self::ToolCallEnd { tool_call_id, .. }
            | Self::ToolCallResult { tool_call_id, .. } => Some(tool_call_id.as_str()),
            Self::ToolCallChunk { tool_call_id, .. } => tool_call_id.as_deref(),
            _ => None,
        }
    }

    /// The `stepName` correlation field, for the step lifecycle pair.
    pub fn step_name(&self) -> Option<&str> {
        match self {
            Self::StepStarted { step_name, .. } | Self::StepFinished { step_name, .. } => {
                Some(step_name.as_str())
            }
            _ => None,
        }
    }

    /// Mutable access to the shared base fields.
    fn base_mut(&mut self) -> &mut BaseEvent {
        match self {
            Self::RunStarted { base, .. }
            | Self::RunFinished { base, .. }
            | Self::RunError { base, .. }
            | Self::StepStarted { base, .. }
            | Self::StepFinished { base, .. }
            | Self::TextMessageStart { base, .. }
            | Self::TextMessageContent { base, .. }
            | Self::TextMessageEnd { base, .. }
            | Self::TextMessageChunk { base, .. }
            | Self::ToolCallStart { base, .. }
            | Self::ToolCallArgs { base, .. }
            | Self::ToolCallEnd { base, .. }
            | Self::ToolCallChunk { base, .. }
            | Self::ToolCallResult { base, .. }
            | Self::ReasoningStart { base, .. }
            | Self::ReasoningContent { base, .. }
            | Self::ReasoningEnd { base, .. }
            | Self::ReasoningMessageStart { base, .. }
            | Self::ReasoningMessageContent { base, .. }
            | Self::ReasoningMessageEnd { base, .. }
            | Self::ReasoningMessageChunk { base, .. }
            | Self::ReasoningEncryptedValue { base, .. }
            | Self::StateSnapshot { base, .. }
            | Self::StateDelta { base, .. }
            | Self::MessagesSnapshot { base, .. }
            | Self::ActivitySnapshot { base, .. }
            | Self::ActivityDelta { base, .. }
            | Self::Activity { base, .. }
            | Self::Custom { base, .. }
            | Self::Raw { base, .. } => base,
        }
    }

    /// Set the event timestamp.
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.base_mut().timestamp = Some(timestamp);
        self
    }

    /// Current timestamp in milliseconds.
    pub fn now_millis() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

// Factory constructors, one per variant.
impl Event {
    /// Create a run-started event.
    pub fn run_started(
        thread_id: impl Into<String>,
        run_id: impl Into<String>,
        parent_run_id: Option<String>,
    ) -> Self {
        Self::RunStarted {
            thread_id: thread_id.into(),
            run_id: run_id.into(),
            parent_run_id,
            input: None,
            base: BaseEvent::default(),
        }
    }

    /// Create a run-finished event.
    pub fn run_finished(
        thread_id: impl Into<String>,
        run_id: impl Into<String>,
        result: Option<Value>,
    ) -> Self {
        Self::RunFinished {
            thread_id: thread_id.into(),
            run_id: run_id.into(),
            result,
            base: BaseEvent::default(),
        }
    }

    /// Create a run-error event.
    pub fn run_error(message: impl Into<String>, code: Option<String>) -> Self {
        Self::RunError {
            message: message.into(),
            code,
            base: BaseEvent::default(),
        }
    }

    /// Create a step-started event.
    pub fn step_started(step_name: impl Into<String>) -> Self {
        Self::StepStarted {
            step_name: step_name.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a step-finished event.
    pub fn step_finished(step_name: impl Into<String>) -> Self {
        Self::StepFinished {
            step_name: step_name.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a text-message-start event.
    pub fn text_message_start(message_id: impl Into<String>) -> Self {
        Self::TextMessageStart {
            message_id: message_id.into(),
            role: Role::Assistant,
            base: BaseEvent::default(),
        }
    }

    /// Create a text-message-content event.
    pub fn text_message_content(message_id: impl Into<String>, delta: impl Into<String>) -> Self {
        Self::TextMessageContent {
            message_id: message_id.into(),
            delta: delta.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a text-message-end event.
    pub fn text_message_end(message_id: impl Into<String>) -> Self {
        Self::TextMessageEnd {
            message_id: message_id.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a text-message-chunk event.
    pub fn text_message_chunk(
        message_id: Option<String>,
        role: Option<Role>,
        delta: Option<String>,
    ) -> Self {
        Self::TextMessageChunk {
            message_id,
            role,
            delta,
            base: BaseEvent::default(),
        }
    }

    /// Create a tool-call-start event.
    pub fn tool_call_start(
        tool_call_id: impl Into<String>,
        tool_call_name: impl Into<String>,
        parent_message_id: Option<String>,
    ) -> Self {
        Self::ToolCallStart {
            tool_call_id: tool_call_id.into(),
            tool_call_name: tool_call_name.into(),
            parent_message_id,
            base: BaseEvent::default(),
        }
    }

    /// Create a tool-call-args event.
    pub fn tool_call_args(tool_call_id: impl Into<String>, delta: impl Into<String>) -> Self {
        Self::ToolCallArgs {
            tool_call_id: tool_call_id.into(),
            delta: delta.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a tool-call-end event.
    pub fn tool_call_end(tool_call_id: impl Into<String>) -> Self {
        Self::ToolCallEnd {
            tool_call_id: tool_call_id.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a tool-call-chunk event.
    pub fn tool_call_chunk(
        tool_call_id: Option<String>,
        tool_call_name: Option<String>,
        parent_message_id: Option<String>,
        delta: Option<String>,
    ) -> Self {
        Self::ToolCallChunk {
            tool_call_id,
            tool_call_name,
            parent_message_id,
            delta,
            base: BaseEvent::default(),
        }
    }

    /// Create a tool-call-result event.
    pub fn tool_call_result(
        message_id: impl Into<String>,
        tool_call_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::ToolCallResult {
            message_id: message_id.into(),
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            role: Some(Role::Tool),
            base: BaseEvent::default(),
        }
    }

    /// Create a reasoning-start event.
    pub fn reasoning_start(message_id: impl Into<String>) -> Self {
        Self::ReasoningStart {
            message_id: message_id.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a reasoning-content event.
    pub fn reasoning_content(message_id: impl Into<String>, delta: impl Into<String>) -> Self {
        Self::ReasoningContent {
            message_id: message_id.into(),
            delta: delta.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a reasoning-end event.
    pub fn reasoning_end(message_id: impl Into<String>) -> Self {
        Self::ReasoningEnd {
            message_id: message_id.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a reasoning-message-start event.
    pub fn reasoning_message_start(message_id: impl Into<String>) -> Self {
        Self::ReasoningMessageStart {
            message_id: message_id.into(),
            role: Role::Assistant,
            base: BaseEvent::default(),
        }
    }

    /// Create a reasoning-message-content event.
    pub fn reasoning_message_content(
        message_id: impl Into<String>,
        delta: impl Into<String>,
    ) -> Self {
        Self::ReasoningMessageContent {
            message_id: message_id.into(),
            delta: delta.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a reasoning-message-end event.
    pub fn reasoning_message_end(message_id: impl Into<String>) -> Self {
        Self::ReasoningMessageEnd {
            message_id: message_id.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a reasoning-message-chunk event.
    pub fn reasoning_message_chunk(message_id: Option<String>, delta: Option<String>) -> Self {
        Self::ReasoningMessageChunk {
            message_id,
            delta,
            base: BaseEvent::default(),
        }
    }

    /// Create a reasoning-encrypted-value event.
    pub fn reasoning_encrypted_value(
        subtype: ReasoningEncryptedValueSubtype,
        entity_id: impl Into<String>,
        encrypted_value: impl Into<String>,
    ) -> Self {
        Self::ReasoningEncryptedValue {
            subtype,
            entity_id: entity_id.into(),
            encrypted_value: encrypted_value.into(),
            base: BaseEvent::default(),
        }
    }

    /// Create a state-snapshot event.
    pub fn state_snapshot(snapshot: Value) -> Self {
        Self::StateSnapshot {
            snapshot,
            base: BaseEvent::default(),
        }
    }

    /// Create a state-delta event.
    pub fn state_delta(delta: Vec<Value>) -> Self {
        Self::StateDelta {
            delta,
            base: BaseEvent::default(),
        }
    }

    /// Create a messages-snapshot event.
    pub fn messages_snapshot(messages: Vec<Value>) -> Self {
        Self::MessagesSnapshot {
            messages,
            base: BaseEvent::default(),
        }
    }

    /// Create an activity-snapshot event.
    pub fn activity_snapshot(
        message_id: impl Into<String>,
        activity_type: impl Into<String>,
        content: HashMap<String, Value>,
        replace: Option<bool>,
    ) -> Self {
        Self::ActivitySnapshot {
            message_id: message_id.into(),
            activity_type: activity_type.into(),
            content,
            replace,
            base: BaseEvent::default(),
        }
    }

    /// Create an activity-delta event.
    pub fn activity_delta(
        message_id: impl Into<String>,
        activity_type: impl Into<String>,
        patch: Vec<Value>,
    ) -> Self {
        Self::ActivityDelta {
            message_id: message_id.into(),
            activity_type: activity_type.into(),
            patch,
            base: BaseEvent::default(),
        }
    }

    /// Create an inline activity event.
    pub fn activity(
        message_id: impl Into<String>,
        activity_type: impl Into<String>,
        content: Value,
    ) -> Self {
        Self::Activity {
            message_id: message_id.into(),
            activity_type: activity_type.into(),
            content,
            base: BaseEvent::default(),
        }
    }

    /// Create a custom event.
    pub fn custom(name: impl Into<String>, value: Value) -> Self {
        Self::Custom {
            name: name.into(),
            value,
            base: BaseEvent::default(),
        }
    }

    /// Create a raw event.
    pub fn raw(event: Value, source: Option<String>) -> Self {
        Self::Raw {
            event,
            source,
            base: BaseEvent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_matches_wire_tag_for_every_variant() {
        let events = vec![
            Event::run_started("t1", "r1", None),
            Event::run_finished("t1", "r1", None),
            Event::run_error("boom", None),
            Event::step_started("step_1"),
            Event::step_finished("step_1"),
            Event::text_message_start("m1"),
            Event::text_message_content("m1", "hi"),
            Event::text_message_end("m1"),
            Event::text_message_chunk(None, None, Some("hi".into())),
            Event::tool_call_start("tc1", "search", None),
            Event::tool_call_args("tc1", "{}"),
            Event::tool_call_end("tc1"),
            Event::tool_call_chunk(Some("tc1".into()), None, None, None),
            Event::tool_call_result("m1", "tc1", "ok"),
            Event::reasoning_start("m1"),
            Event::reasoning_content("m1", "hmm"),
            Event::reasoning_end("m1"),
            Event::reasoning_message_start("m1"),
            Event::reasoning_message_content("m1", "hmm"),
            Event::reasoning_message_end("m1"),
            Event::reasoning_message_chunk(None, Some("hmm".into())),
            Event::reasoning_encrypted_value(
                ReasoningEncryptedValueSubtype::Message,
                "m1",
                "opaque",
            ),
            Event::state_snapshot(json!({})),
            Event::state_delta(vec![]),
            Event::messages_snapshot(vec![]),
            Event::activity_snapshot("m1", "progress", HashMap::new(), None),
            Event::activity_delta("m1", "progress", vec![]),
            Event::activity("m1", "progress", json!({})),
            Event::custom("ping", json!(null)),
            Event::raw(json!({}), None),
        ];
        assert_eq!(events.len(), 30);
        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["type"], event.kind().as_str(), "{:?}", event.kind());
        }
    }

    #[test]
    fn correlation_accessors_cover_their_families() {
        assert_eq!(Event::text_message_start("m1").message_id(), Some("m1"));
        assert_eq!(Event::text_message_end("m1").message_id(), Some("m1"));
        assert_eq!(Event::tool_call_args("tc1", "{}").tool_call_id(), Some("tc1"));
        assert_eq!(Event::step_finished("s1").step_name(), Some("s1"));
        assert_eq!(Event::run_started("t1", "r1", None).message_id(), None);
        assert_eq!(Event::text_message_chunk(None, None, None).message_id(), None);
        assert_eq!(
            Event::tool_call_chunk(Some("tc1".into()), None, None, None).tool_call_id(),
            Some("tc1")
        );
    }

    #[test]
    fn with_timestamp_sets_base_field() {
        let event = Event::custom("ping", json!(1)).with_timestamp(42);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["timestamp"], 42);
    }
}
