use core::future::Future;

use tokio::task::{JoinError, JoinSet};
use tracing::{debug, trace};

use crate::group::{panic_error, GroupOption, Options};
use crate::types::{Accumulator, Error};

/// The async counterpart of [`Group`](crate::Group).
///
/// Futures are spawned onto the current tokio runtime, or awaited in place
/// when the group is inline. Failures go through the same accumulation step
/// as `Group`: ignored errors are dropped, `first_only` keeps the first
/// recorded failure verbatim, and everything else is joined in completion
/// order.
///
/// Dropping the group aborts every task that has not finished.
///
/// # Examples
///
/// ```
/// use errgroup_rail::async_ext::AsyncGroup;
/// use errgroup_rail::new;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let failure = new("shard 3 unavailable");
/// let expected = failure.clone();
///
/// let mut group = AsyncGroup::default();
/// group.add(async { Ok(()) }).await;
/// group.add(async move { Err(failure) }).await;
///
/// let err = group.wait().await.unwrap_err();
/// assert!(err.is(&expected));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct AsyncGroup {
    options: Options,
    errors: Accumulator,
    tasks: JoinSet<Result<(), Error>>,
}

impl AsyncGroup {
    /// Creates a group from default options with `opts` applied.
    pub fn new<I>(opts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GroupOption>,
    {
        Self::from_options(Options::default().with(opts))
    }

    /// Creates a group that uses `options` as is.
    pub fn from_options(options: Options) -> Self {
        Self {
            options,
            errors: Accumulator::new(),
            tasks: JoinSet::new(),
        }
    }

    /// The options this group was built with.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of spawned tasks that have not been collected by `wait` yet.
    #[inline]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Runs `fut` and records its failure.
    ///
    /// Inline groups await `fut` here, so failures keep call order. Other
    /// groups spawn it and return immediately.
    ///
    /// # Panics
    ///
    /// Outside an inline group, panics when called outside a tokio runtime.
    pub async fn add<Fut>(&mut self, fut: Fut)
    where
        Fut: Future<Output = Result<(), Error>> + Send + 'static,
    {
        if self.options.inline {
            trace!(inline = true, "awaiting operation");
            let result = fut.await;
            self.record(result);
            return;
        }
        self.tasks.spawn(fut);
        trace!(inline = false, pending = self.tasks.len(), "spawned operation");
    }

    /// Waits for every spawned task and returns the accumulated failure.
    pub async fn wait(&mut self) -> Result<(), Error> {
        while let Some(joined) = self.tasks.join_next().await {
            let result = joined.unwrap_or_else(|err| Err(join_error(err)));
            self.record(result);
        }
        match self.errors.to_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record(&mut self, result: Result<(), Error>) {
        let Err(err) = result else {
            return;
        };
        if self.options.ignores(&err) {
            debug!(error = %err, "ignoring error");
            return;
        }
        if !self.errors.offer(err.clone(), self.options.first_only) {
            debug!(error = %err, "discarding error after the first");
        }
    }
}

fn join_error(err: JoinError) -> Error {
    if err.is_panic() {
        panic_error(err.into_panic())
    } else {
        Error::wrapped("errgroup: task cancelled".to_owned(), Error::foreign(err))
    }
}
