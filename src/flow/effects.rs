//! Constructors for actor output streams.

use std::future::Future;

use futures::stream::{self, StreamExt};

use super::actor::Effects;

/// No effect at all.
pub fn none<E: Send + 'static>() -> Effects<E> {
    stream::empty().boxed()
}

/// Exactly one, immediately available effect.
pub fn just<E: Send + 'static>(effect: E) -> Effects<E> {
    stream::iter([effect]).boxed()
}

/// Effects that are all known up front, in order.
pub fn iter<E, I>(effects: I) -> Effects<E>
where
    E: Send + 'static,
    I: IntoIterator<Item = E>,
    I::IntoIter: Send + 'static,
{
    stream::iter(effects).boxed()
}

/// One effect computed asynchronously.
pub fn once<E, F>(fut: F) -> Effects<E>
where
    E: Send + 'static,
    F: Future<Output = E> + Send + 'static,
{
    stream::once(fut).boxed()
}

/// Several effects computed by one asynchronous step, emitted in order.
pub fn many<E, F>(fut: F) -> Effects<E>
where
    E: Send + 'static,
    F: Future<Output = Vec<E>> + Send + 'static,
{
    stream::once(fut)
        .flat_map(|effects| stream::iter(effects))
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn constructors_preserve_order() {
        assert!(none::<u8>().collect::<Vec<_>>().await.is_empty());
        assert_eq!(just(1).collect::<Vec<_>>().await, vec![1]);
        assert_eq!(iter(vec![1, 2, 3]).collect::<Vec<_>>().await, vec![1, 2, 3]);
        assert_eq!(once(async { 4 }).collect::<Vec<_>>().await, vec![4]);
        assert_eq!(
            many(async { vec![5, 6] }).collect::<Vec<_>>().await,
            vec![5, 6]
        );
    }

    #[tokio::test]
    async fn chained_steps_run_in_sequence() {
        let effects = just(0).chain(once(async { 1 })).chain(many(async { vec![2, 3] }));
        assert_eq!(effects.collect::<Vec<_>>().await, vec![0, 1, 2, 3]);
    }
}
