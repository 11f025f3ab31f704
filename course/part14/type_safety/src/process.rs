use std::future::Future;

use futures::{pin_mut, Stream, StreamExt};
use tracing::debug;

/// Runs every item of `items` through `processor`, one at a time and in order.
///
/// Each item's future is awaited before the next item is pulled from the stream, so nothing runs
/// concurrently.
pub async fn async_process<T, S, F, Fut>(items: S, mut processor: F) -> Vec<T>
where
    S: Stream<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = T>,
{
    pin_mut!(items);

    let mut results = Vec::new();
    while let Some(item) = items.next().await {
        results.push(processor(item).await);
        debug!(processed = results.len(), "processed item");
    }

    results
}

/// Like [`async_process`], but gives up on the first item the processor fails on.
pub async fn try_async_process<T, E, S, F, Fut>(items: S, mut processor: F) -> Result<Vec<T>, E>
where
    S: Stream<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    pin_mut!(items);

    let mut results = Vec::new();
    while let Some(item) = items.next().await {
        results.push(processor(item).await?);
        debug!(processed = results.len(), "processed item");
    }

    Ok(results)
}
