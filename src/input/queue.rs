//! Thread-safe buffering of pending unicode input characters.

use ::parking_lot::Mutex;
use ::std::collections::VecDeque;
use ::tracing::trace;

/// Initial allocation for the [`CharQueue`]. This is a hint only: the queue
/// grows past it freely and characters are never dropped to stay under it.
pub const DEFAULT_QUEUE_CAPACITY: usize = 32;

/// The central buffer of pending unicode input characters.
///
/// # Producer/Consumer Shape
///
/// Platform key events arrive on the platform's own dispatch thread, at
/// whatever moment the user types. The application loop wants to read input
/// at a well-defined point in its own iteration, on its own thread. The
/// queue sits between the two: the dispatch-side hook appends resolved code
/// points at the tail, and the loop-side poll removes them from the head,
/// in arrival order.
///
/// Both operations are non-blocking. `push` never waits, never fails, and
/// never rejects a value - a `0` code point is stored like any other.
/// `pop` returns immediately with `None` when nothing is pending; there is
/// no blocking wait-for-data mode.
///
/// # Unbounded Growth
///
/// The queue is unbounded. If the consumer stops polling while the producer
/// keeps typing, the queue grows without limit - an accepted resource risk
/// rather than a guarded invariant. No input is ever trimmed or coalesced.
///
/// # Thread Safety
///
/// An internal mutex serializes access, so the queue is safe for any number
/// of producers and consumers, although the intended shape is exactly one
/// of each: the platform dispatch thread pushing and the application loop
/// popping.
pub struct CharQueue {
    /// Pending code points in arrival order. The dispatch thread appends at
    /// the tail; the application loop removes from the head.
    pending: Mutex<VecDeque<u32>>,
}

impl Default for CharQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CharQueue {
    /// Constructs a new, empty queue with the default initial allocation.
    ///
    /// <p style="background:rgba(255,181,77,0.16);padding:0.75em;">
    /// <strong>Warning:</strong> This API is for advanced use only.
    /// </p>
    ///
    /// You should not usually construct a [`CharQueue`] directly but rather
    /// let an [`InputBridge`] own one and hand its ends to the two threads.
    /// This constructor is public only for advanced uses, or to enable unit
    /// testing in your own app.
    ///
    /// [`InputBridge`]: crate::bridge::InputBridge
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Constructs a new, empty queue with room for `capacity` characters
    /// before the first reallocation. The capacity is not a bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Appends a code point at the tail of the queue.
    ///
    /// Never blocks and never rejects a value, `0` included.
    pub fn push(&self, code_point: u32) {
        self.pending.lock().push_back(code_point);
        trace!(code_point, "Queued input character");
    }

    /// Removes and returns the oldest pending code point, or `None` if the
    /// queue is empty. Never blocks.
    pub fn pop(&self) -> Option<u32> {
        self.pending.lock().pop_front()
    }

    /// The number of code points currently buffered.
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Returns `true` if no input is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;
    use ::std::{sync::Arc, thread};

    /// For any sequence of pushed values, popping yields the same values in
    /// the same order.
    #[test]
    fn test_fifo_order() {
        let queue = CharQueue::new();

        for code_point in [72, 101, 108] {
            queue.push(code_point);
        }

        assert_eq!(queue.pop(), Some(72));
        assert_eq!(queue.pop(), Some(101));
        assert_eq!(queue.pop(), Some(108));
        assert_eq!(queue.pop(), None);
    }

    /// Popping an empty queue reports empty, repeatedly and without side
    /// effects.
    #[test]
    fn test_pop_empty_is_idempotent() {
        let queue = CharQueue::new();

        for _ in 0..3 {
            assert_eq!(queue.pop(), None);
        }
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    /// A queued NUL is stored and returned like any other code point. The
    /// raw polling surface cannot distinguish it from an empty queue; the
    /// queue itself preserves the value.
    #[test]
    fn test_zero_is_queued() {
        let queue = CharQueue::new();

        queue.push(0);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), None);
    }

    /// The initial capacity is an allocation hint only; pushing past it
    /// loses nothing.
    #[test]
    fn test_growth_past_initial_capacity() {
        let queue = CharQueue::with_capacity(4);

        for code_point in 1..=64 {
            queue.push(code_point);
        }

        assert_eq!(queue.len(), 64);
        for code_point in 1..=64 {
            assert_eq!(queue.pop(), Some(code_point));
        }
    }

    /// One thread pushes a long strictly-increasing sequence while another
    /// concurrently pops as fast as it can. The consumer must observe the
    /// full sequence in order, with no loss and no duplicates.
    #[test]
    fn test_concurrent_push_pop_preserves_order() {
        const COUNT: u32 = 100_000;

        let queue = Arc::new(CharQueue::new());

        let producer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for code_point in 1..=COUNT {
                    queue.push(code_point);
                }
            })
        };

        let mut observed = Vec::with_capacity(COUNT as usize);
        while observed.len() < COUNT as usize {
            if let Some(code_point) = queue.pop() {
                observed.push(code_point);
            }
        }
        producer.join().expect("Producer thread panicked");

        assert!(observed.into_iter().eq(1..=COUNT));
        assert_eq!(queue.pop(), None);
    }
}
