#![allow(dead_code)]

use broken::{Dispatcher, Fault, error_kinds};
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Test Kinds
// ============================================================================

error_kinds! {
    pub enum AppKind {
        Exception,
        Runtime: Exception,
        IllegalArgument: Runtime,
        NumberFormat: IllegalArgument,
        Io: Exception,
        Execution: Exception => execution,
        Completion: Runtime => completion,
    }
}

// ============================================================================
// Test Fault
// ============================================================================

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Debug, PartialEq)]
pub struct AppFault {
    pub id: usize,
    pub kind: AppKind,
    pub cause: Option<Box<AppFault>>,
}

impl AppFault {
    pub fn new(kind: AppKind) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::SeqCst),
            kind,
            cause: None,
        }
    }

    pub fn caused_by(kind: AppKind, cause: AppFault) -> Self {
        Self {
            cause: Some(Box::new(cause)),
            ..Self::new(kind)
        }
    }
}

impl Fault for AppFault {
    type Kind = AppKind;

    fn kind(&self) -> AppKind {
        self.kind
    }

    fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }
}

impl std::fmt::Display for AppFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} #{}", self.kind, self.id)
    }
}

impl std::error::Error for AppFault {}

pub fn dispatcher() -> Dispatcher<AppFault> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Dispatcher::new()
}
