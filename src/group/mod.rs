//! Run batches of fallible operations and reduce their failures.
//!
//! A [`Group`] accepts operations through [`Group::add`], runs them on their
//! own threads (or serially on the caller's thread with
//! [`with_inline`]), and folds every failure into one error that
//! [`Group::wait`] returns once all operations have finished.
//!
//! # Examples
//!
//! ```
//! use errgroup_rail::{new, thunks, with_inline, with_ignored_errors, Group};
//!
//! let eof = new("eof");
//! let broken = new("broken pipe");
//!
//! let group = Group::new([with_inline(), with_ignored_errors([eof.clone()])]);
//! let (ignored, kept) = (eof.clone(), broken.clone());
//! group.add(thunks![
//!     || Ok(()),
//!     move || Err(ignored),
//!     move || Err(kept),
//! ]);
//!
//! let err = group.wait().unwrap_err();
//! assert!(err.is(&broken));
//! assert!(!err.is(&eof));
//! ```
use crate::types::{Accumulator, Error};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use tracing::{debug, trace, warn};

pub mod entry;
pub mod options;

pub use entry::{all, all_inline, first, first_inline};
pub use options::{with_first_only, with_ignored_errors, with_inline, GroupOption, Options};

const WORKER_NAME: &str = "errgroup-worker";

/// Collects failures from operations run in parallel or inline.
///
/// A `Group` is single-use in the sense that its accumulated error only
/// grows: later `add` calls are allowed after `wait`, and their failures
/// join the earlier ones. `add` and `wait` take `&self`, so a group can be
/// shared between threads.
///
/// `Group::default()` is equivalent to a group built from default
/// [`Options`].
#[derive(Debug, Default)]
pub struct Group {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    options: Options,
    errors: Mutex<Accumulator>,
    pending: Mutex<usize>,
    idle: Condvar,
}

impl Group {
    /// Creates a group from default options with `opts` applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use errgroup_rail::{with_first_only, Group};
    ///
    /// let group = Group::new([with_first_only()]);
    /// assert!(group.options().first_only);
    /// ```
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
            shared: Arc::new(Shared {
                options,
                ..Shared::default()
            }),
        }
    }

    /// The options this group was built with.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.shared.options
    }

    /// Runs every operation in `fns` and records its failure.
    ///
    /// Inline groups call each operation on this thread, in order, before
    /// returning. Other groups start one thread per operation and return
    /// immediately. Pass an `Option<F>` to add an operation that may be
    /// absent.
    pub fn add<I, F>(&self, fns: I)
    where
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Result<(), Error> + Send + 'static,
    {
        for f in fns {
            self.add_one(f);
        }
    }

    /// Runs a single operation; see [`add`](Self::add).
    pub fn add_one<F>(&self, f: F)
    where
        F: FnOnce() -> Result<(), Error> + Send + 'static,
    {
        if self.shared.options.inline {
            trace!(inline = true, "running operation");
            self.shared.record(f());
            return;
        }

        let pending = self.shared.begin();
        trace!(inline = false, pending, "dispatching operation");

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name(WORKER_NAME.to_owned())
            .spawn(move || {
                let _finish = Finish(&shared);
                let result = panic::catch_unwind(AssertUnwindSafe(f))
                    .unwrap_or_else(|payload| Err(panic_error(payload)));
                // recording may evaluate lazy errors, which can panic too
                let recorded = panic::catch_unwind(AssertUnwindSafe(|| shared.record(result)));
                if let Err(payload) = recorded {
                    shared.record(Err(panic_error(payload)));
                }
            });

        if let Err(err) = spawned {
            warn!(error = %err, "failed to spawn worker thread");
            self.shared.record(Err(Error::wrapped(
                "errgroup: spawn worker".to_owned(),
                Error::foreign(err),
            )));
            self.shared.finish();
        }
    }

    /// Blocks until every operation added so far has finished, then returns
    /// the accumulated failure.
    ///
    /// Returns `Ok(())` when nothing failed or every failure was ignored.
    /// With `first_only` the error is the first recorded one, verbatim;
    /// otherwise it is the join of every recorded error in completion order.
    /// May be called any number of times.
    pub fn wait(&self) -> Result<(), Error> {
        {
            let pending = lock(&self.shared.pending);
            let _idle = self
                .shared
                .idle
                .wait_while(pending, |pending| *pending > 0)
                .unwrap_or_else(PoisonError::into_inner);
        }

        match lock(&self.shared.errors).to_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl From<Options> for Group {
    #[inline]
    fn from(options: Options) -> Self {
        Self::from_options(options)
    }
}

/// Marks one operation as done when dropped, including while unwinding.
struct Finish<'a>(&'a Shared);

impl Drop for Finish<'_> {
    fn drop(&mut self) {
        self.0.finish();
    }
}

impl Shared {
    fn begin(&self) -> usize {
        let mut pending = lock(&self.pending);
        *pending += 1;
        *pending
    }

    fn finish(&self) {
        let mut pending = lock(&self.pending);
        *pending -= 1;
        if *pending == 0 {
            self.idle.notify_all();
        }
    }

    /// The accumulation step; the errors lock is held only to push.
    fn record(&self, result: Result<(), Error>) {
        let Err(err) = result else {
            return;
        };

        if self.options.ignores(&err) {
            debug!(error = %err, "ignoring error");
            return;
        }

        let kept = lock(&self.errors).offer(err.clone(), self.options.first_only);
        if !kept {
            debug!(error = %err, "discarding error after the first");
        }
    }
}

/// Mutex guards only ever protect values that are consistent between
/// statements, so a poisoned lock is still safe to use.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn panic_error(payload: Box<dyn Any + Send>) -> Error {
    let detail = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    };
    warn!(panic = %detail, "operation panicked");
    Error::new(format!("errgroup: operation panicked: {detail}"))
}
