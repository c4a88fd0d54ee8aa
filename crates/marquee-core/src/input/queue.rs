use heapless::Deque;

use super::{InputEvent, InputProvider};

/// Bounded event queue filled by the host's subscription callbacks and
/// drained by the controller each tick.
///
/// When full, the oldest event is dropped so the newest input wins.
pub struct QueueInput<const N: usize> {
    events: Deque<InputEvent, N>,
}

impl<const N: usize> Default for QueueInput<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> QueueInput<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        if self.events.push_back(event).is_err() {
            let _ = self.events.pop_front();
            let _ = self.events.push_back(event);
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<const N: usize> InputProvider for QueueInput<N> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
