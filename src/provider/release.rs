//! Explicit release of resources held by materialized rows

use anyhow::Result;

/// Implemented by rows that own resources which must be freed explicitly
///
/// A provider only calls `release` when it was built with the capability
/// (see [`DataProviderBuilder::releasing_rows`](super::DataProviderBuilder::releasing_rows));
/// rows of other providers are simply dropped.
pub trait Release {
    fn release(&mut self) -> Result<()>;
}

impl<R: Release + ?Sized> Release for Box<R> {
    fn release(&mut self) -> Result<()> {
        (**self).release()
    }
}

/// Release hook stored by a provider
pub type ReleaseFn<V> = fn(&mut V) -> Result<()>;

pub(crate) fn release_row<V: Release>(row: &mut V) -> Result<()> {
    row.release()
}

/// Release `rows` in materialization order
///
/// A failing row is logged and the sweep continues with the next one.
/// Returns the number of rows that failed to release.
pub(crate) fn release_rows<V>(rows: Vec<V>, release: Option<ReleaseFn<V>>) -> usize {
    let Some(release) = release else {
        return 0;
    };

    let mut failures = 0;
    for (position, mut row) in rows.into_iter().enumerate() {
        match release(&mut row) {
            Ok(()) => tracing::trace!(position, "Released row"),
            Err(e) => {
                failures += 1;
                tracing::warn!(position, error = %e, "Failed to release row");
            }
        }
    }
    failures
}
