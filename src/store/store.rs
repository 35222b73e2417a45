use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tracing::debug;

use crate::store::effect::{ActionSender, Effect};

/// Unidirectional-data-flow state container.
///
/// The store owns a feature's state and serializes every mutation through a
/// pure reducer: `(state, action, dependency) -> optional Effect`. Actions are
/// applied strictly in arrival order on a single worker task, so two reducer
/// invocations never interleave. After each reduction the new state is
/// published to observers *before* the returned effect starts, and effects
/// feed their follow-up actions back through the same dispatch pipeline.
///
/// Dropping the store aborts the worker together with every in-flight effect;
/// a cancelled effect cannot deliver further actions.
pub struct Store<S, A> {
    action_tx: mpsc::UnboundedSender<A>,
    state_rx: watch::Receiver<S>,
    worker: JoinHandle<()>,
}

impl<S, A> Store<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: std::fmt::Debug + Send + 'static,
{
    /// Create a store from an initial state, a reducer and its dependency.
    ///
    /// The reducer must be pure: it may mutate the state it is handed and
    /// return an effect descriptor, but the dependency is read-only and
    /// executing the effect is the store's job, never the reducer's.
    pub fn new<D, R>(initial_state: S, reducer: R, dependency: D) -> Self
    where
        D: Send + 'static,
        R: Fn(&mut S, A, &D) -> Option<Effect<A>> + Send + 'static,
    {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<A>();
        let (state_tx, state_rx) = watch::channel(initial_state.clone());
        let feedback = action_tx.clone();

        let worker = tokio::spawn(async move {
            let mut state = initial_state;
            // Effect tasks live here; dropping the set aborts them all.
            let mut effects: JoinSet<()> = JoinSet::new();

            while let Some(action) = action_rx.recv().await {
                debug!(?action, "applying action");
                let effect = reducer(&mut state, action, &dependency);

                // Publish before the effect runs so it never observes a state
                // snapshot it is about to invalidate.
                state_tx.send_replace(state.clone());

                if let Some(effect) = effect {
                    let send = ActionSender::new(feedback.clone());
                    effects.spawn(effect.into_future(send));
                }

                // Reap finished effect tasks without blocking the pipeline.
                while effects.try_join_next().is_some() {}
            }
        });

        Self {
            action_tx,
            state_rx,
            worker,
        }
    }

    /// Enqueue an action onto the processing sequence.
    ///
    /// Actions from a single caller are applied in dispatch order. Dispatching
    /// after teardown is a no-op.
    pub fn dispatch(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    /// Observe the state with replay-latest semantics: the receiver's
    /// `borrow()` yields the current value immediately and `changed()` wakes
    /// on every subsequent publication.
    pub fn observe(&self) -> watch::Receiver<S> {
        self.state_rx.clone()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.state_rx.borrow().clone()
    }

    /// A cloneable handle that can feed actions into this store, e.g. from a
    /// timer. Outstanding handles become inert once the store is dropped.
    pub fn action_sender(&self) -> ActionSender<A> {
        ActionSender::new(self.action_tx.clone())
    }
}

impl<S, A> Drop for Store<S, A> {
    fn drop(&mut self) {
        // Tears down the worker and, with it, every outstanding effect task.
        self.worker.abort();
    }
}
