//! Concurrent fetching across several inputs.
//!
//! Runs one async fetch per input with bounded concurrency and returns the
//! results in the order the inputs were given, regardless of completion order.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use crate::error::{Error, Result};

/// Type alias for boxed futures used in concurrent fetching
type SlotFuture<T> = Pin<Box<dyn Future<Output = (usize, Result<T>)> + Send>>;

/// Fetch one result per input, at most `max_concurrent` in flight at a time.
///
/// Results come back in input order. The first fetch error aborts the whole
/// batch and propagates.
pub async fn fetch_ordered<T, F, Fut>(
    inputs: Vec<String>,
    fetch: F,
    max_concurrent: usize,
) -> Result<Vec<T>>
where
    T: Send + 'static,
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    if inputs.is_empty() {
        return Ok(Vec::new());
    }

    debug!(
        "Fetching {} inputs with max {} concurrent",
        inputs.len(),
        max_concurrent
    );

    let total = inputs.len();
    let mut slots: Vec<Option<T>> = (0..total).map(|_| None).collect();
    let mut futures: FuturesUnordered<SlotFuture<T>> = FuturesUnordered::new();
    let mut pending = inputs.into_iter().enumerate();

    let make_future = |(idx, input): (usize, String), f: &F| -> SlotFuture<T> {
        let fut = f(input);
        Box::pin(async move { (idx, fut.await) })
    };

    // Seed initial batch up to max_concurrent
    for entry in pending.by_ref().take(max_concurrent) {
        futures.push(make_future(entry, &fetch));
    }

    // Process results and spawn new requests to maintain concurrency
    while let Some((idx, result)) = futures.next().await {
        slots[idx] = Some(result?);
        debug!("Input {} of {} completed", idx + 1, total);

        if let Some(next) = pending.next() {
            futures.push(make_future(next, &fetch));
        }
    }

    slots
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| Error::Other("Concurrent fetch left a result slot empty".to_string()))
}
