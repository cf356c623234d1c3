//! crates/commands/tests/commands.rs
//! End-to-end coverage of the command surface over a recording backend.

use channel::{BackendEvent, Channel, MemoryBackend, Recorder};
use commands::{CommandError, Reply, dispatch};
use symbols::{Facility, Severity};

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_owned()).collect()
}

fn recording_channel() -> (Channel, Recorder) {
    let backend = MemoryBackend::default();
    let recorder = backend.recorder();
    (Channel::new(Box::new(backend)), recorder)
}

fn run(channel: &Channel, tokens: &[&str]) -> Result<Reply, CommandError> {
    dispatch(channel, &argv(tokens))
}

#[test]
fn open_applies_global_options_and_opens_the_connection() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["open", "-facility", "mail", "-ident", "svc"]).expect("open succeeds");

    assert_eq!(
        recorder.events(),
        vec![BackendEvent::Opened {
            ident: Some("svc".to_owned()),
            options: 0,
            facility: Facility::Mail.code(),
        }]
    );
    assert_eq!(
        run(&channel, &["isopen"]).expect("isopen succeeds"),
        Reply::IsOpen(true)
    );
}

#[test]
fn isopen_is_false_before_any_open() {
    let (channel, _recorder) = recording_channel();
    assert_eq!(
        run(&channel, &["isopen"]).expect("isopen succeeds"),
        Reply::IsOpen(false)
    );
}

#[test]
fn sticky_level_is_reused_by_the_next_call() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["log", "-level", "error", "disk full"]).expect("first log succeeds");
    run(&channel, &["log", "disk full 2"]).expect("second log succeeds");

    let priorities: Vec<i32> = recorder
        .events()
        .into_iter()
        .filter_map(|e| match e {
            BackendEvent::Emitted { priority, .. } => Some(priority),
            _ => None,
        })
        .collect();
    assert_eq!(priorities, vec![Severity::Error.code(), Severity::Error.code()]);
}

#[test]
fn explicit_positional_level_updates_the_sticky_level() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["log", "warning", "low disk"]).expect("log succeeds");
    run(&channel, &["log", "still low"]).expect("log succeeds");

    let priorities: Vec<i32> = recorder
        .events()
        .into_iter()
        .filter_map(|e| match e {
            BackendEvent::Emitted { priority, .. } => Some(priority),
            _ => None,
        })
        .collect();
    assert_eq!(
        priorities,
        vec![Severity::Warning.code(), Severity::Warning.code()]
    );
}

#[test]
fn global_option_under_log_is_rejected_without_touching_global_state() {
    let (channel, recorder) = recording_channel();

    let err = run(&channel, &["log", "-ident", "newident", "msg"]).expect_err("log fails");
    assert_eq!(err.category(), "wrong_option_class");
    assert_eq!(err.index(), 0);

    // Nothing was opened or emitted, and the global record kept no ident.
    assert!(recorder.events().is_empty());
    let Reply::Pairs(pairs) = run(&channel, &["cget", "-global"]).expect("cget succeeds") else {
        panic!("cget returns pairs");
    };
    assert!(pairs.iter().all(|(flag, _)| flag != "-ident"));
}

#[test]
fn unrecognized_option_reports_its_index_and_stops_the_scan() {
    let (channel, _recorder) = recording_channel();

    let err = run(&channel, &["open", "-pid", "-bogus", "-perror"]).expect_err("open fails");
    assert_eq!(err.category(), "invalid_option");
    assert_eq!(err.index(), 1);
    assert_eq!(err.argv(), argv(&["-pid", "-bogus", "-perror"]).as_slice());

    // -pid before the failure stays applied, -perror after it does not.
    let Reply::Pairs(pairs) = run(&channel, &["cget", "-global"]).expect("cget succeeds") else {
        panic!("cget returns pairs");
    };
    assert!(pairs.contains(&("-pid".to_owned(), "1".to_owned())));
    assert!(!pairs.contains(&("-perror".to_owned(), "1".to_owned())));
}

#[test]
fn missing_option_value_is_reported_for_a_dangling_flag() {
    let (channel, _recorder) = recording_channel();

    let err = run(&channel, &["open", "-ident"]).expect_err("open fails");
    assert_eq!(err.category(), "missing_argument_value");
    assert_eq!(err.index(), 0);
}

#[test]
fn unknown_facility_aborts_before_any_mutation() {
    let (channel, _recorder) = recording_channel();

    let err = run(&channel, &["open", "-facility", "nosuch"]).expect_err("open fails");
    assert_eq!(err.category(), "unknown_symbol");

    let Reply::Pairs(pairs) = run(&channel, &["cget", "-global"]).expect("cget succeeds") else {
        panic!("cget returns pairs");
    };
    assert!(pairs.contains(&("-facility".to_owned(), "user".to_owned())));
}

#[test]
fn configure_then_cget_global_reports_the_new_facility() {
    let (channel, _recorder) = recording_channel();

    run(&channel, &["configure", "-facility", "local0"]).expect("configure succeeds");

    let Reply::Pairs(pairs) = run(&channel, &["cget", "-global"]).expect("cget succeeds") else {
        panic!("cget returns pairs");
    };
    assert!(pairs.contains(&("-facility".to_owned(), "local0".to_owned())));
}

#[test]
fn configure_change_forces_a_reopen_before_the_next_emission() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["open"]).expect("open succeeds");
    run(&channel, &["configure", "-facility", "local0"]).expect("configure succeeds");
    run(&channel, &["log", "hi"]).expect("log succeeds");

    let events = recorder.events();
    assert_eq!(events.len(), 4);
    assert!(matches!(
        events[0],
        BackendEvent::Opened { facility, .. } if facility == Facility::User.code()
    ));
    assert_eq!(events[1], BackendEvent::Closed);
    assert!(matches!(
        events[2],
        BackendEvent::Opened { facility, .. } if facility == Facility::Local0.code()
    ));
    assert!(matches!(events[3], BackendEvent::Emitted { .. }));
}

#[test]
fn log_opens_a_closed_connection_on_demand() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["log", "first"]).expect("log succeeds");

    let events = recorder.events();
    assert!(matches!(events[0], BackendEvent::Opened { .. }));
    assert_eq!(
        events[1],
        BackendEvent::Emitted {
            priority: Severity::Debug.code(),
            message: "first".to_owned(),
        }
    );
}

#[test]
fn close_preserves_the_configuration_for_the_next_open() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["open", "-ident", "svc", "-facility", "cron"]).expect("open succeeds");
    run(&channel, &["close"]).expect("close succeeds");
    assert_eq!(
        run(&channel, &["isopen"]).expect("isopen succeeds"),
        Reply::IsOpen(false)
    );

    run(&channel, &["log", "back again"]).expect("log succeeds");
    let reopened = recorder
        .events()
        .into_iter()
        .filter(|e| matches!(e, BackendEvent::Opened { .. }))
        .next_back();
    assert_eq!(
        reopened,
        Some(BackendEvent::Opened {
            ident: Some("svc".to_owned()),
            options: 0,
            facility: Facility::Cron.code(),
        })
    );
}

#[test]
fn log_without_positionals_updates_sticky_state_without_emitting() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["log", "-level", "notice", "-format", "svc: %s"]).expect("log succeeds");
    assert!(recorder.events().is_empty());

    let Reply::Pairs(pairs) = run(&channel, &["cget"]).expect("cget succeeds") else {
        panic!("cget returns pairs");
    };
    assert!(pairs.contains(&("-format".to_owned(), "svc: %s".to_owned())));
    assert!(pairs.contains(&("-level".to_owned(), "notice".to_owned())));
}

#[test]
fn format_template_is_applied_to_the_emitted_text() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["log", "-format", "worker[%s]", "overload"]).expect("log succeeds");
    assert_eq!(
        recorder.events().last(),
        Some(&BackendEvent::Emitted {
            priority: Severity::Debug.code(),
            message: "worker[overload]".to_owned(),
        })
    );
}

#[test]
fn per_call_facility_override_combines_into_the_priority() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["log", "-facility", "cron", "-level", "info", "job done"])
        .expect("log succeeds");

    let events = recorder.events();
    // The override never touches the connection: one open, one emission.
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        BackendEvent::Opened { facility, .. } if facility == Facility::User.code()
    ));
    assert_eq!(
        events[1],
        BackendEvent::Emitted {
            priority: Facility::Cron.code() | Severity::Info.code(),
            message: "job done".to_owned(),
        }
    );
}

#[test]
fn cget_reports_the_facility_override() {
    let (channel, _recorder) = recording_channel();

    run(&channel, &["log", "-facility", "lpr"]).expect("log succeeds");

    let Reply::Pairs(pairs) = run(&channel, &["cget"]).expect("cget succeeds") else {
        panic!("cget returns pairs");
    };
    assert!(pairs.contains(&("-facility".to_owned(), "lpr".to_owned())));
}

#[test]
fn end_of_options_marker_turns_flags_into_message_text() {
    let (channel, recorder) = recording_channel();

    run(&channel, &["log", "--", "-level"]).expect("log succeeds");
    assert_eq!(
        recorder.events().last(),
        Some(&BackendEvent::Emitted {
            priority: Severity::Debug.code(),
            message: "-level".to_owned(),
        })
    );
}

#[test]
fn trailing_end_of_options_marker_is_an_error() {
    let (channel, _recorder) = recording_channel();
    let err = run(&channel, &["log", "--"]).expect_err("log fails");
    assert_eq!(err.category(), "missing_argument_value");
}

#[test]
fn three_positionals_are_too_many() {
    let (channel, _recorder) = recording_channel();
    let err = run(&channel, &["log", "error", "msg", "extra"]).expect_err("log fails");
    assert_eq!(err.category(), "wrong_arguments");
    assert_eq!(err.index(), 2);
}

#[test]
fn unknown_positional_level_is_an_unknown_symbol() {
    let (channel, _recorder) = recording_channel();
    let err = run(&channel, &["log", "fatal", "msg"]).expect_err("log fails");
    assert_eq!(err.category(), "unknown_symbol");
    assert_eq!(err.index(), 0);
}

#[test]
fn close_and_isopen_accept_no_arguments() {
    let (channel, _recorder) = recording_channel();

    let err = run(&channel, &["close", "now"]).expect_err("close fails");
    assert_eq!(err.category(), "wrong_arguments");

    let err = run(&channel, &["isopen", "-pid"]).expect_err("isopen fails");
    assert_eq!(err.category(), "wrong_option_class");
}

#[test]
fn single_shot_form_configures_and_emits_in_one_invocation() {
    let (channel, recorder) = recording_channel();

    run(
        &channel,
        &["-facility", "local3", "-ident", "svc", "error", "boom"],
    )
    .expect("single-shot form succeeds");

    let events = recorder.events();
    assert_eq!(
        events[0],
        BackendEvent::Opened {
            ident: Some("svc".to_owned()),
            options: 0,
            facility: Facility::Local3.code(),
        }
    );
    assert_eq!(
        events[1],
        BackendEvent::Emitted {
            priority: Severity::Error.code(),
            message: "boom".to_owned(),
        }
    );
}

#[test]
fn empty_argument_vector_is_rejected() {
    let (channel, _recorder) = recording_channel();
    let err = dispatch(&channel, &[]).expect_err("dispatch fails");
    assert_eq!(err.category(), "wrong_arguments");
}

#[test]
fn errors_carry_the_scanned_argument_vector() {
    let (channel, _recorder) = recording_channel();
    let err = run(&channel, &["open", "-facility"]).expect_err("open fails");
    assert_eq!(err.argv(), argv(&["-facility"]).as_slice());
}
