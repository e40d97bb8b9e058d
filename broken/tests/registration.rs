//! Registration tests: builder validation and registry inspection.

use broken::{
    BrokenError, ConfigError, MatchEverything, MatchLevel,
    actions::LoggingAction,
    testing::{CountingAction, RecordingAction},
};

mod common;
use common::{AppFault, AppKind, dispatcher};

#[test]
fn test_missing_criteria_is_rejected() {
    let dispatcher = dispatcher();
    let result = dispatcher
        .with_handler(AppKind::Exception)
        .action(CountingAction::new())
        .add();

    assert_eq!(result, Err(ConfigError::MissingCriteria));
    assert!(dispatcher.is_empty());
}

#[test]
fn test_missing_action_is_rejected() {
    let dispatcher = dispatcher();
    let result = dispatcher.with_handler(AppKind::Exception).strict().add();

    assert_eq!(result, Err(ConfigError::MissingAction));
    assert!(dispatcher.is_empty());
}

#[test]
fn test_missing_kind_is_rejected() {
    let dispatcher = dispatcher();
    let result = dispatcher
        .handler()
        .criteria(MatchEverything)
        .action(CountingAction::new())
        .add();

    assert_eq!(result, Err(ConfigError::MissingKind));
    assert!(dispatcher.is_empty());
}

#[test]
fn test_config_error_converts_to_top_level() {
    fn register(dispatcher: &broken::Dispatcher<AppFault>) -> Result<(), BrokenError> {
        dispatcher.with_handler(AppKind::Io).instance_of().add()?;
        Ok(())
    }

    let err = register(&dispatcher()).unwrap_err();
    assert!(matches!(err, BrokenError::Config(ConfigError::MissingAction)));
}

#[test]
fn test_rejected_registration_does_not_affect_dispatch() {
    let dispatcher = dispatcher();
    let counter = CountingAction::new();
    let _ = dispatcher
        .with_handler(AppKind::Exception)
        .action(counter.clone())
        .add();

    let report = dispatcher
        .handle(&AppFault::new(AppKind::Exception))
        .unwrap();

    assert_eq!(counter.count(), 0);
    assert!(!report.handled());
}

#[test]
fn test_builder_with_late_kind() {
    let dispatcher = dispatcher();
    let recorder = RecordingAction::new();
    dispatcher
        .handler()
        .strict()
        .action(recorder.clone())
        .kind(AppKind::Io)
        .named("io")
        .add()
        .unwrap();

    let fault = AppFault::new(AppKind::Io);
    dispatcher.handle(&fault).unwrap();
    assert_eq!(recorder.faults(), vec![fault]);
}

#[test]
fn test_handlers_are_listed_in_registration_order() {
    let dispatcher = dispatcher();
    dispatcher.register_instance_of(AppKind::Exception, LoggingAction::named("fallback"));
    dispatcher
        .with_handler(AppKind::Io)
        .strict()
        .action(CountingAction::new())
        .set_skip_if_handled(true)
        .named("io-metrics")
        .add()
        .unwrap();

    let handlers = dispatcher.handlers();
    assert_eq!(dispatcher.len(), 2);
    assert_eq!(handlers[0].kind(), AppKind::Exception);
    assert_eq!(handlers[0].name(), None);
    assert!(!handlers[0].skips_if_handled());
    assert_eq!(handlers[1].name(), Some("io-metrics"));
    assert!(handlers[1].skips_if_handled());

    let io = AppFault::new(AppKind::Io);
    assert_eq!(handlers[0].evaluate(&io), MatchLevel::BLANKET_MATCH);
    assert_eq!(handlers[1].evaluate(&io), MatchLevel::PERFECT_MATCH);
}

#[test]
fn test_clones_share_registry() {
    let dispatcher = dispatcher();
    let clone = dispatcher.clone();
    let counter = CountingAction::new();

    clone.register_instance_of(AppKind::Exception, counter.clone());
    dispatcher
        .handle(&AppFault::new(AppKind::Runtime))
        .unwrap();

    assert_eq!(dispatcher.len(), 1);
    assert_eq!(counter.count(), 1);
}

#[test]
fn test_logging_action_never_fails() {
    let dispatcher = dispatcher();
    dispatcher.register(AppKind::Exception, MatchEverything, LoggingAction::new(), false);

    let report = dispatcher
        .handle(&AppFault::new(AppKind::Completion))
        .unwrap();
    assert!(report.handled());
}
