use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{ready, Context, Poll};
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::Stream;
use tracing::{debug, warn};

/// Default number of events buffered for listeners that fall behind.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// In-process fan-out of events to every currently registered listener.
///
/// Uses `tokio::sync::broadcast`: each listener owns a cursor into a bounded ring
/// buffer. A listener that falls more than `capacity` events behind skips the oldest
/// ones and carries on; publishers never wait for slow listeners.
///
/// Cloning is cheap and every clone publishes into the same channel. The channel closes
/// (and every [`Subscription`] ends) once the last clone is dropped.
#[derive(Clone)]
pub struct EventChannel<E> {
    sender: broadcast::Sender<E>,
    published: Arc<AtomicU64>,
}

impl<E: Clone + Send + 'static> EventChannel<E> {
    /// Create a channel buffering up to `capacity` events per lagging listener.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            published: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Deliver `event` to every listener registered right now.
    ///
    /// Returns the number of listeners reached. Zero listeners is not an error, and the
    /// call never blocks.
    pub fn publish(&self, event: E) -> usize {
        self.published.fetch_add(1, Ordering::Relaxed);
        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(receivers, "Event published");
                receivers
            }
            Err(_) => {
                debug!("Event published with no listeners");
                0
            }
        }
    }

    /// Register a listener. It sees every event published from now on, none from before.
    pub fn subscribe(&self) -> Subscription<E> {
        let receiver = self.sender.subscribe();
        debug!(listeners = self.listener_count(), "Listener registered");
        Subscription {
            inner: BroadcastStream::new(receiver),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Total events published since creation, delivered or not.
    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}

/// One listener's registration on an [`EventChannel`].
///
/// A `Stream` of events in publish order. Dropping it (or calling [`close`](Self::close))
/// deregisters the listener immediately, so a disconnected client never keeps receiving.
pub struct Subscription<E> {
    inner: BroadcastStream<E>,
}

impl<E> Subscription<E> {
    /// Explicitly end this subscription.
    pub fn close(self) {
        drop(self);
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        debug!("Listener deregistered");
    }
}

impl<E: Clone + Send + 'static> Stream for Subscription<E> {
    type Item = E;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<E>> {
        loop {
            match ready!(Pin::new(&mut self.inner).poll_next(cx)) {
                Some(Ok(event)) => return Poll::Ready(Some(event)),
                Some(Err(BroadcastStreamRecvError::Lagged(skipped))) => {
                    warn!(lagged = skipped, "Listener fell behind, events skipped");
                }
                None => return Poll::Ready(None),
            }
        }
    }
}
