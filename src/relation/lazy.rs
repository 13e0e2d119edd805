//! Lazily fetched relation accessor.
//!
//! Mirrors the lazy-loading strategy of ORM relation managers: the loader
//! is injected up front, nothing is fetched until the set is first
//! inspected, and the fetched records are cached for the lifetime of the
//! accessor. A failed load is reported to the caller and attempted again on
//! the next call.

use once_cell::sync::OnceCell;

use crate::relation::{RelatedSet, RelationError};

/// Related records fetched on first use.
///
/// # Example
///
/// ```
/// use colonnade::{LazySet, RelatedSet};
///
/// let set = LazySet::new(|| Ok(vec!["fetched".to_string()]));
/// assert!(!set.is_loaded());
/// assert!(set.exists()?);
/// assert!(set.is_loaded());
/// # Ok::<(), colonnade::RelationError>(())
/// ```
pub struct LazySet<R> {
    loader: Box<dyn Fn() -> Result<Vec<R>, RelationError> + Send + Sync>,
    cache: OnceCell<Vec<R>>,
}

impl<R> LazySet<R> {
    /// Create an accessor that fetches through `loader` on first use.
    pub fn new(loader: impl Fn() -> Result<Vec<R>, RelationError> + Send + Sync + 'static) -> Self {
        LazySet {
            loader: Box::new(loader),
            cache: OnceCell::new(),
        }
    }

    /// Whether the records have been fetched yet.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    fn load(&self) -> Result<&Vec<R>, RelationError> {
        self.cache.get_or_try_init(|| (self.loader)())
    }
}

impl<R: Clone> RelatedSet for LazySet<R> {
    type Record = R;

    fn exists(&self) -> Result<bool, RelationError> {
        Ok(!self.load()?.is_empty())
    }

    fn all(&self) -> Result<Vec<R>, RelationError> {
        Ok(self.load()?.clone())
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for LazySet<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cache.get() {
            Some(records) => f.debug_struct("LazySet").field("records", records).finish(),
            None => f.write_str("LazySet(<not loaded>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn loader_runs_at_most_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let set = LazySet::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1, 2, 3])
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(set.exists().unwrap());
        assert_eq!(set.all().unwrap(), vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_load_is_reported_and_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let set: LazySet<i32> = LazySet::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(RelationError::Fetch("connection reset".to_string()))
        });

        assert!(matches!(set.exists(), Err(RelationError::Fetch(_))));
        assert!(!set.is_loaded());
        assert!(matches!(set.all(), Err(RelationError::Fetch(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
