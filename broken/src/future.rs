//! Adapter for asynchronous task failure channels.
//!
//! A task runtime usually reports failures wrapped in an execution or
//! completion wrapper. The adapter peels those wrappers off (see
//! [`unwrap_task_failure`]) and dispatches the real fault.

use crate::dispatcher::Dispatcher;
use broken_core::{DispatchError, Fault};
use broken_std::unwrap_task_failure;
use futures::FutureExt;
use std::future::Future;

impl<E: Fault> Dispatcher<E> {
    /// Create a failure callback for an asynchronous task.
    ///
    /// The callback unwraps task wrappers, dispatches the result, and yields
    /// `Ok(None)`: it never supplies a replacement value. Action failures are
    /// returned as errors.
    ///
    /// The callback owns a clone of this dispatcher, so handlers registered
    /// after it was created are still seen.
    pub fn future_handler<T>(
        &self,
    ) -> impl Fn(E) -> Result<Option<T>, DispatchError> + Send + Sync + use<E, T> {
        let dispatcher = self.clone();
        move |failure: E| -> Result<Option<T>, DispatchError> {
            dispatcher.handle(unwrap_task_failure(&failure))?;
            Ok(None)
        }
    }
}

/// Dispatch the failure of a fallible future.
///
/// ```rust,ignore
/// let value = fetch_config()
///     .handle_failure(&dispatcher)
///     .await?;          // Option<Config>: None if fetching failed
/// ```
pub trait FailureExt<T, E>: Future<Output = Result<T, E>> + Sized + Send
where
    E: Fault,
{
    /// Resolve to `Some(value)` on success, or dispatch the failure through
    /// [`Dispatcher::future_handler`] and resolve to its result.
    fn handle_failure(
        self,
        dispatcher: &Dispatcher<E>,
    ) -> impl Future<Output = Result<Option<T>, DispatchError>> + Send;
}

impl<F, T, E> FailureExt<T, E> for F
where
    F: Future<Output = Result<T, E>> + Send,
    E: Fault,
{
    fn handle_failure(
        self,
        dispatcher: &Dispatcher<E>,
    ) -> impl Future<Output = Result<Option<T>, DispatchError>> + Send {
        let recover = dispatcher.future_handler::<T>();
        self.map(move |result| match result {
            Ok(value) => Ok(Some(value)),
            Err(failure) => recover(failure),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TaskWrapper, error_kinds, testing::RecordingAction};

    error_kinds! {
        enum Kind {
            Exception,
            Execution: Exception => execution,
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TestFault {
        kind: Kind,
        cause: Option<Box<TestFault>>,
    }

    impl Fault for TestFault {
        type Kind = Kind;

        fn kind(&self) -> Kind {
            self.kind
        }

        fn cause(&self) -> Option<&Self> {
            self.cause.as_deref()
        }
    }

    #[test]
    fn test_macro_marks_wrapper() {
        assert_eq!(
            crate::ErrorKind::task_wrapper(Kind::Execution),
            Some(TaskWrapper::Execution)
        );
    }

    #[test]
    fn test_future_handler_sees_later_registrations() {
        let dispatcher = Dispatcher::<TestFault>::new();
        let callback = dispatcher.future_handler::<u8>();

        let recorder = RecordingAction::new();
        dispatcher.register_strict(Kind::Exception, recorder.clone());

        let real = TestFault {
            kind: Kind::Exception,
            cause: None,
        };
        let wrapped = TestFault {
            kind: Kind::Execution,
            cause: Some(Box::new(real.clone())),
        };

        assert_eq!(callback(wrapped).unwrap(), None);
        assert_eq!(recorder.faults(), vec![real]);
    }
}
