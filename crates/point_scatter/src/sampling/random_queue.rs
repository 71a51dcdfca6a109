//! Unordered bag that pops uniformly random elements.
use rand::RngCore;

use crate::sampling::rand_index;

/// A restricted queue whose `pop` removes a uniformly random element.
///
/// There is deliberately no iteration or peeking. Removal uses `swap_remove`, so the
/// internal order is meaningless after the first pop.
#[derive(Debug, Clone)]
pub struct RandomQueue<T> {
    items: Vec<T>,
}

impl<T> Default for RandomQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RandomQueue<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return a uniformly random element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Callers check [`Self::is_not_empty`] first.
    pub fn pop(&mut self, rng: &mut dyn RngCore) -> T {
        if self.items.is_empty() {
            panic!("RandomQueue::pop called on empty queue");
        }
        let index = rand_index(rng, self.items.len());
        self.items.swap_remove(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.items.is_empty()
    }
}
