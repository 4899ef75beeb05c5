#![allow(missing_docs)]

//! End-to-end conformance scenarios for the AG-UI sequence verifier,
//! exercising whole event streams the way a transport layer would feed them.

use sequin_protocol_ag_ui::Event;
use sequin_verify::{SequenceVerifier, ViolationKind};

fn verify_all(verifier: &mut SequenceVerifier, events: &[Event]) -> Vec<Option<ViolationKind>> {
    events
        .iter()
        .map(|event| verifier.verify(event).map(|v| v.kind))
        .collect()
}

#[test]
fn full_message_run_is_clean() {
    let mut verifier = SequenceVerifier::new();
    let verdicts = verify_all(
        &mut verifier,
        &[
            Event::run_started("t1", "r1", None),
            Event::text_message_start("m1"),
            Event::text_message_content("m1", "hello"),
            Event::text_message_end("m1"),
            Event::run_finished("t1", "r1", None),
        ],
    );
    assert_eq!(verdicts, vec![None; 5]);
}

#[test]
fn message_end_for_unknown_id_is_missing_start() {
    let mut verifier = SequenceVerifier::new();
    let verdicts = verify_all(
        &mut verifier,
        &[
            Event::run_started("t1", "r1", None),
            Event::text_message_end("gone"),
        ],
    );
    assert_eq!(verdicts, vec![None, Some(ViolationKind::MissingStart)]);
}

#[test]
fn second_run_start_while_live_is_duplicate() {
    let mut verifier = SequenceVerifier::new();
    let verdicts = verify_all(
        &mut verifier,
        &[
            Event::run_started("t1", "r1", None),
            Event::run_started("t1", "r2", None),
        ],
    );
    assert_eq!(verdicts, vec![None, Some(ViolationKind::Duplicate)]);
}

#[test]
fn tool_call_after_finish_is_rejected() {
    let mut verifier = SequenceVerifier::new();
    let verdicts = verify_all(
        &mut verifier,
        &[
            Event::run_started("t1", "r1", None),
            Event::run_finished("t1", "r1", None),
            Event::tool_call_start("tc", "search", None),
        ],
    );
    assert_eq!(
        verdicts,
        vec![None, None, Some(ViolationKind::AfterFinish)]
    );
}

#[test]
fn finish_without_start_is_sequence() {
    let mut verifier = SequenceVerifier::new();
    let violation = verifier
        .verify(&Event::run_finished("t1", "r1", None))
        .unwrap();
    assert_eq!(violation.kind, ViolationKind::Sequence);
}

#[test]
fn reset_clears_reasoning_state_across_runs() {
    let mut verifier = SequenceVerifier::new();
    assert!(verifier
        .verify(&Event::run_started("t1", "r1", None))
        .is_none());
    assert!(verifier.verify(&Event::reasoning_start("m1")).is_none());

    verifier.reset();

    assert!(verifier
        .verify(&Event::run_started("t1", "r2", None))
        .is_none());
    let violation = verifier
        .verify(&Event::reasoning_content("m1", "hmm"))
        .unwrap();
    assert_eq!(violation.kind, ViolationKind::MissingStart);
}

#[test]
fn interleaved_message_ids_all_pass() {
    let mut verifier = SequenceVerifier::new();
    let verdicts = verify_all(
        &mut verifier,
        &[
            Event::run_started("t1", "r1", None),
            Event::text_message_start("a"),
            Event::text_message_start("b"),
            Event::text_message_content("b", "from b"),
            Event::text_message_content("a", "from a"),
            Event::text_message_end("b"),
            Event::text_message_content("a", "more a"),
            Event::text_message_end("a"),
            Event::run_finished("t1", "r1", None),
        ],
    );
    assert_eq!(verdicts, vec![None; 9]);
}

#[test]
fn interleaved_tool_calls_and_messages_pass() {
    let mut verifier = SequenceVerifier::new();
    let verdicts = verify_all(
        &mut verifier,
        &[
            Event::run_started("t1", "r1", None),
            Event::step_started("step_1"),
            Event::text_message_start("m1"),
            Event::tool_call_start("tc1", "search", Some("m1".into())),
            Event::tool_call_args("tc1", r#"{"q":"rust"}"#),
            Event::text_message_content("m1", "looking that up"),
            Event::tool_call_end("tc1"),
            Event::tool_call_result("m2", "tc1", "found it"),
            Event::text_message_end("m1"),
            Event::step_finished("step_1"),
            Event::run_finished("t1", "r1", None),
        ],
    );
    assert_eq!(verdicts, vec![None; 11]);
}

#[test]
fn new_run_start_resets_without_explicit_reset() {
    let mut verifier = SequenceVerifier::new();
    verify_all(
        &mut verifier,
        &[
            Event::run_started("t1", "r1", None),
            Event::text_message_start("m1"),
            Event::step_started("step_1"),
            Event::run_error("model timeout", Some("TIMEOUT".to_string())),
        ],
    );

    // No reset() between runs: RUN_STARTED alone must clear the trackers.
    assert!(verifier
        .verify(&Event::run_started("t1", "r2", None))
        .is_none());
    let verdicts = verify_all(
        &mut verifier,
        &[
            Event::text_message_end("m1"),
            Event::step_finished("step_1"),
        ],
    );
    assert_eq!(
        verdicts,
        vec![
            Some(ViolationKind::MissingStart),
            Some(ViolationKind::MissingStart)
        ]
    );
}

#[test]
fn both_reasoning_families_share_the_gate() {
    let mut verifier = SequenceVerifier::new();
    let verdicts = verify_all(
        &mut verifier,
        &[
            Event::run_started("t1", "r1", None),
            Event::reasoning_start("m1"),
            Event::reasoning_content("m1", "part content"),
            Event::reasoning_message_start("m1"),
            Event::reasoning_message_content("m1", "streamed content"),
            Event::reasoning_message_end("m1"),
            Event::run_finished("t1", "r1", None),
        ],
    );
    assert_eq!(verdicts, vec![None; 7]);

    // The block was closed by REASONING_MESSAGE_END, so a bare REASONING_END
    // in a later run has nothing to match.
    assert!(verifier
        .verify(&Event::run_started("t1", "r2", None))
        .is_none());
    let violation = verifier.verify(&Event::reasoning_end("m1")).unwrap();
    assert_eq!(violation.kind, ViolationKind::MissingStart);
}

#[test]
fn verdict_matches_a_fresh_verifier_after_reset() {
    let events = [
        Event::run_started("t1", "r1", None),
        Event::text_message_start("m1"),
        Event::text_message_start("m1"),
        Event::text_message_end("m1"),
        Event::run_finished("t1", "r1", None),
        Event::step_started("late"),
    ];

    let mut fresh = SequenceVerifier::new();
    let expected = verify_all(&mut fresh, &events);

    let mut reused = SequenceVerifier::new();
    verify_all(
        &mut reused,
        &[
            Event::run_started("t0", "r0", None),
            Event::tool_call_start("tc0", "noop", None),
            Event::reasoning_start("m0"),
        ],
    );
    reused.reset();
    assert_eq!(verify_all(&mut reused, &events), expected);
}
