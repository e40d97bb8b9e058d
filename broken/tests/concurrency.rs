//! Concurrent registration and dispatch.

use broken::testing::{CountingAction, RecordingAction};
use std::{
    sync::{Arc, Barrier},
    thread,
};

mod common;
use common::{AppFault, AppKind, dispatcher};

#[test]
fn test_register_while_dispatching() {
    const WRITERS: usize = 4;
    const PER_WRITER: usize = 50;
    const READERS: usize = 4;

    let dispatcher = dispatcher();
    let counter = CountingAction::new();
    let barrier = Arc::new(Barrier::new(WRITERS + READERS));

    let mut workers = Vec::new();
    for _ in 0..WRITERS {
        let dispatcher = dispatcher.clone();
        let counter = counter.clone();
        let barrier = barrier.clone();
        workers.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..PER_WRITER {
                dispatcher.register_instance_of(AppKind::Exception, counter.clone());
            }
        }));
    }
    for _ in 0..READERS {
        let dispatcher = dispatcher.clone();
        let barrier = barrier.clone();
        workers.push(thread::spawn(move || {
            barrier.wait();
            let mut last = 0;
            for _ in 0..PER_WRITER {
                let report = dispatcher
                    .handle(&AppFault::new(AppKind::Runtime))
                    .unwrap();
                // Snapshots only grow.
                assert!(report.matched >= last);
                assert_eq!(report.matched, report.executed);
                last = report.matched;
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(dispatcher.len(), WRITERS * PER_WRITER);

    counter.reset();
    let report = dispatcher
        .handle(&AppFault::new(AppKind::Io))
        .unwrap();
    assert_eq!(report.executed, WRITERS * PER_WRITER);
    assert_eq!(counter.count(), WRITERS * PER_WRITER);
}

#[test]
fn test_parallel_dispatches_are_independent() {
    let dispatcher = dispatcher();
    let specific = RecordingAction::new();
    let fallback = RecordingAction::new();
    dispatcher.register_strict(AppKind::Io, specific.clone());
    dispatcher.register(AppKind::Exception, broken::InstanceOf, fallback.clone(), true);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dispatcher = dispatcher.clone();
            thread::spawn(move || {
                let kind = if i % 2 == 0 { AppKind::Io } else { AppKind::Runtime };
                dispatcher.handle(&AppFault::new(kind)).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().handled());
    }

    // Each Io fault suppressed the fallback only within its own call.
    assert_eq!(specific.count(), 4);
    assert_eq!(fallback.count(), 4);
    assert!(fallback.faults().iter().all(|f| f.kind == AppKind::Runtime));
}

#[test]
fn test_registration_from_inside_an_action() {
    let dispatcher = dispatcher();
    let late = CountingAction::new();

    let registrar = dispatcher.clone();
    let to_register = late.clone();
    dispatcher.register_strict(AppKind::Io, move |_: &AppFault| {
        registrar.register_strict(AppKind::Io, to_register.clone());
    });

    // The running dispatch iterates its own snapshot and does not see the new handler.
    let report = dispatcher.handle(&AppFault::new(AppKind::Io)).unwrap();
    assert_eq!(report.executed, 1);
    assert_eq!(late.count(), 0);

    dispatcher.handle(&AppFault::new(AppKind::Io)).unwrap();
    assert_eq!(late.count(), 1);
    assert_eq!(dispatcher.len(), 3);
}
