//! Rate-limited emission for server-sent feeds

use futures::{Stream, StreamExt};
use std::time::Duration;

/// Re-emit `source` with a timer before every element
///
/// The timer for an element only starts once the previous element has been
/// taken, so consecutive elements are at least `interval` apart and never
/// batched. The first element also waits one full `interval`. Completes when
/// `source` completes.
pub fn paced<S>(source: S, interval: Duration) -> impl Stream<Item = S::Item>
where
    S: Stream,
{
    source.then(move |item| async move {
        tokio::time::sleep(interval).await;
        item
    })
}
