use futures::future::BoxFuture;
use tokio::sync::mpsc;

/// Handle for sending actions back into the store from inside an effect.
///
/// Sends are fire-and-forget: if the owning store has been torn down the
/// action is silently discarded.
#[derive(Clone)]
pub struct ActionSender<A> {
    tx: mpsc::UnboundedSender<A>,
}

impl<A> ActionSender<A> {
    pub(crate) fn new(tx: mpsc::UnboundedSender<A>) -> Self {
        Self { tx }
    }

    pub fn send(&self, action: A) {
        let _ = self.tx.send(action);
    }
}

/// An asynchronous side effect returned by a reducer.
///
/// An effect is an opaque unit of async work that may emit zero or more
/// follow-up actions through the [`ActionSender`] it is handed when the store
/// starts it. The store owns the spawned task; dropping the store aborts it,
/// and an aborted effect delivers no further actions.
pub struct Effect<A> {
    operation: Box<dyn FnOnce(ActionSender<A>) -> BoxFuture<'static, ()> + Send>,
}

impl<A: Send + 'static> Effect<A> {
    /// Create an effect from an async operation.
    ///
    /// The operation receives an [`ActionSender`] and can feed any number of
    /// actions back into the dispatch pipeline before completing.
    pub fn run<F, Fut>(operation: F) -> Self
    where
        F: FnOnce(ActionSender<A>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            operation: Box::new(move |send| Box::pin(operation(send))),
        }
    }

    pub(crate) fn into_future(self, send: ActionSender<A>) -> BoxFuture<'static, ()> {
        (self.operation)(send)
    }
}
