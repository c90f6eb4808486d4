//! Mutex-guarded disjoint set for use across threads.
//!
//! Lookups on the compressing variants rewrite parent pointers, so even a
//! "read-only" `find` needs exclusive access. The wrapper treats the whole
//! structure as one unit of mutual exclusion: every call takes a single lock.

use std::sync::{Mutex, MutexGuard};

use crate::{
    DisjointSet,
    error::{DsuError, Result},
};

const RESOURCE: &str = "shared disjoint set";

/// A [`DisjointSet`] that can be shared between threads by reference.
///
/// # Examples
/// ```
/// use std::thread;
///
/// use dsu_core::{RankDisjointSet, SharedDisjointSet};
///
/// let shared = SharedDisjointSet::new(RankDisjointSet::new(4));
/// thread::scope(|scope| {
///     scope.spawn(|| shared.union(0, 1));
///     scope.spawn(|| shared.union(2, 3));
/// });
/// assert_eq!(shared.set_count()?, 2);
/// # Ok::<(), dsu_core::DsuError>(())
/// ```
#[derive(Debug)]
pub struct SharedDisjointSet<D> {
    inner: Mutex<D>,
}

impl<D: DisjointSet> SharedDisjointSet<D> {
    /// Wraps `set` behind a mutex.
    #[must_use]
    pub const fn new(set: D) -> Self {
        Self {
            inner: Mutex::new(set),
        }
    }

    /// Creates `len` singleton sets behind a mutex.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self::new(D::with_len(len))
    }

    fn lock(&self) -> Result<MutexGuard<'_, D>> {
        self.inner
            .lock()
            .map_err(|_| DsuError::LockPoisoned { resource: RESOURCE })
    }

    /// Runs `op` with exclusive access, holding the lock for its whole
    /// duration so a batch of operations is applied atomically.
    ///
    /// # Errors
    /// Returns [`DsuError::LockPoisoned`] if a previous holder panicked.
    pub fn with_lock<R>(&self, op: impl FnOnce(&mut D) -> R) -> Result<R> {
        let mut guard = self.lock()?;
        Ok(op(&mut guard))
    }

    /// See [`DisjointSet::find`].
    ///
    /// # Errors
    /// Returns [`DsuError::OutOfBounds`] for ids outside the universe and
    /// [`DsuError::LockPoisoned`] if a previous holder panicked.
    pub fn find(&self, element: usize) -> Result<usize> {
        self.lock()?.find(element)
    }

    /// See [`DisjointSet::union`].
    ///
    /// # Errors
    /// Returns [`DsuError::OutOfBounds`] for ids outside the universe and
    /// [`DsuError::LockPoisoned`] if a previous holder panicked.
    pub fn union(&self, left: usize, right: usize) -> Result<()> {
        self.lock()?.union(left, right)
    }

    /// See [`DisjointSet::connected`]. Both lookups happen under one lock.
    ///
    /// # Errors
    /// Returns [`DsuError::OutOfBounds`] for ids outside the universe and
    /// [`DsuError::LockPoisoned`] if a previous holder panicked.
    pub fn connected(&self, left: usize, right: usize) -> Result<bool> {
        self.lock()?.connected(left, right)
    }

    /// See [`DisjointSet::set_count`].
    ///
    /// # Errors
    /// Returns [`DsuError::LockPoisoned`] if a previous holder panicked.
    pub fn set_count(&self) -> Result<usize> {
        Ok(self.lock()?.set_count())
    }

    /// Unwraps the inner structure.
    ///
    /// # Errors
    /// Returns [`DsuError::LockPoisoned`] if a previous holder panicked.
    pub fn into_inner(self) -> Result<D> {
        self.inner
            .into_inner()
            .map_err(|_| DsuError::LockPoisoned { resource: RESOURCE })
    }
}
