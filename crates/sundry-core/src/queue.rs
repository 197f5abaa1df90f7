// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Growable FIFO ring buffer.
//!
//! [`RingQueue`] stores its elements in a contiguous slot buffer addressed by
//! two wrapping indices, `start` (first live element) and `end` (next
//! insertion point). The queue is empty exactly when `start == end`; to keep
//! that encoding unambiguous one slot is always left free, so the buffer is
//! never fully saturated.
//!
//! Capacity follows occupancy:
//! - a push that would consume the last free slot first grows the buffer by
//!   [`QueueConfig::growth_factor`];
//! - a pop whose post-pop length falls under
//!   `capacity / QueueConfig::shrink_divisor` first shrinks it by the same
//!   factor.
//!
//! Both resizes move the live elements to the front of a fresh buffer in FIFO
//! order and never go below [`QueueConfig::min_capacity`].

use std::fmt;
use std::iter::FusedIterator;

use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, QueueConfig};

/// Error returned by the read/removal operations of [`RingQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The queue holds no elements.
    #[error("queue empty")]
    Empty,
}

/// FIFO queue over a self-resizing circular buffer.
///
/// Mutation needs `&mut self`; share across threads behind a lock such as
/// `Mutex<RingQueue<T>>`.
#[derive(Clone)]
pub struct RingQueue<T> {
    slots: Vec<Option<T>>,
    start: usize,
    end: usize,
    policy: QueueConfig,
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with the default policy (capacity 4, doubling,
    /// shrink under one third).
    pub fn new() -> Self {
        Self::empty_with(QueueConfig::default())
    }

    /// Creates an empty queue with a custom resize policy.
    pub fn with_config(policy: QueueConfig) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self::empty_with(policy))
    }

    /// Builds a queue holding `values` in order under a custom resize policy.
    ///
    /// The buffer is sized to the values plus the reserved free slot, and
    /// never below the policy's floor.
    pub fn from_vec_with_config(
        values: Vec<T>,
        policy: QueueConfig,
    ) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self::filled_with(values, policy))
    }

    /// Creates an empty queue that can take `additional` pushes before its
    /// first growth.
    pub fn with_capacity(additional: usize) -> Self {
        let policy = QueueConfig::default();
        let capacity = additional.saturating_add(1).max(policy.min_capacity);
        Self {
            slots: empty_slots(capacity),
            start: 0,
            end: 0,
            policy,
        }
    }

    fn filled_with(values: Vec<T>, policy: QueueConfig) -> Self {
        let len = values.len();
        let capacity = (len + 1).max(policy.min_capacity);
        let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
        slots.resize_with(capacity, || None);
        Self {
            slots,
            start: 0,
            end: len % capacity,
            policy,
        }
    }

    fn empty_with(policy: QueueConfig) -> Self {
        Self {
            slots: empty_slots(policy.min_capacity),
            start: 0,
            end: 0,
            policy,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.wrap_sub(self.end, self.start)
    }

    /// Returns `true` when the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Size of the backing buffer, including the reserved free slot.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The resize policy in effect.
    pub fn policy(&self) -> &QueueConfig {
        &self.policy
    }

    fn free_slots(&self) -> usize {
        self.capacity() - self.len()
    }

    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        (index + addend) % self.capacity()
    }

    // Decrements wrap below zero: wrap_sub(0, 1) == capacity - 1.
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        let cap = self.capacity();
        (index + cap - subtrahend % cap) % cap
    }

    /// Appends `value` at the logical end, growing the buffer first when only
    /// one free slot would remain.
    pub fn push(&mut self, value: T) {
        if self.free_slots() <= 1 {
            let grown = self
                .capacity()
                .saturating_mul(self.policy.growth_factor)
                .max(self.policy.min_capacity);
            self.resize(grown);
        }
        self.slots[self.end] = Some(value);
        self.end = self.wrap_add(self.end, 1);
    }

    /// Removes and returns the front element.
    ///
    /// If the length after this pop would fall under
    /// `capacity / shrink_divisor`, the buffer is shrunk before the element is
    /// taken. Fails with [`QueueError::Empty`] without touching the queue when
    /// there is nothing to pop.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let remaining = self.len() - 1;
        if remaining.saturating_mul(self.policy.shrink_divisor) < self.capacity() {
            let shrunk = (self.capacity() / self.policy.growth_factor)
                .max(self.policy.min_capacity)
                .max(self.len() + 1);
            if shrunk < self.capacity() {
                self.resize(shrunk);
            }
        }
        let value = self.slots[self.start].take().ok_or(QueueError::Empty)?;
        self.start = self.wrap_add(self.start, 1);
        Ok(value)
    }

    /// Borrows the front element.
    pub fn peek_front(&self) -> Result<&T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        self.slots[self.start].as_ref().ok_or(QueueError::Empty)
    }

    /// Borrows the most recently pushed element.
    pub fn peek_back(&self) -> Result<&T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        self.slots[self.wrap_sub(self.end, 1)]
            .as_ref()
            .ok_or(QueueError::Empty)
    }

    /// Drops every element and returns the buffer to the policy's floor.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.policy.min_capacity);
        self.start = 0;
        self.end = 0;
    }

    /// Iterates live elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            head: self.start,
            remaining: self.len(),
        }
    }

    /// Materializes the live elements in FIFO order, joining the two wrapped
    /// segments when the live region crosses the end of the buffer.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    // Moves live elements to indices 0..len of a fresh buffer.
    fn resize(&mut self, capacity: usize) {
        let len = self.len();
        let old_capacity = self.capacity();
        debug_assert!(len < capacity, "resize must keep one slot free");
        let mut slots = empty_slots(capacity);
        for (offset, slot) in slots.iter_mut().take(len).enumerate() {
            *slot = self.slots[(self.start + offset) % old_capacity].take();
        }
        self.slots = slots;
        self.start = 0;
        self.end = len % capacity;
        debug!(from = old_capacity, to = capacity, len, "ring queue resized");
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for RingQueue<T> {
    /// Builds a queue holding `values` in order. Fewer than four values get
    /// the minimum capacity; otherwise the buffer is sized to the values plus
    /// the reserved free slot.
    fn from(values: Vec<T>) -> Self {
        Self::filled_with(values, QueueConfig::default())
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

/// Borrowing FIFO iterator returned by [`RingQueue::iter`].
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    head: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.slots[self.head].as_ref();
        self.head = (self.head + 1) % self.slots.len();
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.slots[(self.head + self.remaining) % self.slots.len()].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for RingQueue<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Drains the queue front to back without triggering shrinks.
    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len();
        let capacity = self.capacity();
        let start = self.start;
        let values: Vec<T> = (0..len)
            .filter_map(|offset| self.slots[(start + offset) % capacity].take())
            .collect();
        values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_three_reads_back_in_order() {
        let mut q = RingQueue::from(Vec::new());
        q.push(1);
        q.push(2);
        q.push(3);
        assert_eq!(q.to_vec(), vec![1, 2, 3]);
        assert_eq!(q.len(), 3);
        assert_eq!(q.capacity(), 4);
    }

    #[test]
    fn fifth_push_grows_exactly_once_to_eight() {
        let mut q = RingQueue::new();
        let mut capacities = vec![q.capacity()];
        for v in 1..=5 {
            q.push(v);
            if capacities.last() != Some(&q.capacity()) {
                capacities.push(q.capacity());
            }
        }
        assert_eq!(capacities, vec![4, 8]);
        assert_eq!(q.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn drained_queue_reports_empty() {
        let mut q = RingQueue::new();
        for v in 0..3 {
            q.push(v);
        }
        for v in 0..3 {
            assert_eq!(q.pop(), Ok(v));
        }
        assert_eq!(q.len(), 0);
        assert_eq!(q.pop(), Err(QueueError::Empty));
    }

    #[test]
    fn heavy_pop_shrinks_and_keeps_order() {
        let mut q = RingQueue::new();
        for v in 1..=8 {
            q.push(v);
        }
        assert_eq!(q.capacity(), 16);
        for v in 1..=6 {
            assert_eq!(q.pop(), Ok(v));
        }
        assert_eq!(q.capacity(), 4);
        assert_eq!(q.to_vec(), vec![7, 8]);
    }

    #[test]
    fn failed_reads_leave_state_alone() {
        let mut q: RingQueue<u8> = RingQueue::new();
        let before = (q.start, q.end, q.capacity());
        assert_eq!(q.pop(), Err(QueueError::Empty));
        assert_eq!(q.peek_front(), Err(QueueError::Empty));
        assert_eq!(q.peek_back(), Err(QueueError::Empty));
        assert_eq!((q.start, q.end, q.capacity()), before);
    }

    #[test]
    fn wrap_sub_handles_underflow() {
        let q: RingQueue<u8> = RingQueue::new();
        assert_eq!(q.wrap_sub(0, 1), 3);
        assert_eq!(q.wrap_sub(2, 3), 3);
        assert_eq!(q.wrap_add(3, 1), 0);
    }

    #[test]
    fn peeks_follow_wraparound() {
        let mut q = RingQueue::with_capacity(7);
        for v in 0..6 {
            q.push(v);
        }
        for _ in 0..3 {
            q.pop().unwrap();
        }
        // Live region now crosses the end of the buffer.
        for v in 6..9 {
            q.push(v);
        }
        assert_eq!(q.capacity(), 8);
        assert!(q.end < q.start);
        assert_eq!(q.peek_front(), Ok(&3));
        assert_eq!(q.peek_back(), Ok(&8));
        assert_eq!(q.to_vec(), vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(
            q.iter().rev().copied().collect::<Vec<_>>(),
            vec![8, 7, 6, 5, 4, 3]
        );
    }

    #[test]
    fn from_vec_reserves_a_free_slot() {
        let q = RingQueue::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(q.len(), 5);
        assert_eq!(q.capacity(), 6);
        assert_eq!(q.peek_back(), Ok(&5));
    }

    #[test]
    fn initial_contents_under_custom_policy() {
        let policy = QueueConfig {
            min_capacity: 16,
            growth_factor: 4,
            shrink_divisor: 8,
        };
        let mut q = RingQueue::from_vec_with_config(vec![1, 2, 3], policy).unwrap();
        assert_eq!(q.policy(), &policy);
        assert_eq!(q.capacity(), 16);
        assert_eq!(q.to_vec(), vec![1, 2, 3]);

        q.extend(4..=15);
        assert_eq!(q.capacity(), 16);
        q.push(16);
        assert_eq!(q.capacity(), 64);

        let big = RingQueue::from_vec_with_config((0..20).collect(), policy).unwrap();
        assert_eq!(big.capacity(), 21);
        assert_eq!(big.peek_back(), Ok(&19));

        let bad = QueueConfig {
            growth_factor: 1,
            ..QueueConfig::default()
        };
        assert!(matches!(
            RingQueue::from_vec_with_config(vec![1], bad),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn default_constructors_share_the_default_policy() {
        let default = QueueConfig::default();
        assert_eq!(RingQueue::<u8>::new().policy(), &default);
        assert_eq!(RingQueue::<u8>::with_capacity(10).policy(), &default);
        assert_eq!(RingQueue::from(vec![1_u8]).policy(), &default);
    }

    #[test]
    fn clear_resets_to_floor() {
        let mut q: RingQueue<_> = (0..100).collect();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.capacity(), 4);
    }

    #[test]
    fn owned_iteration_drains_in_order() {
        let mut q = RingQueue::with_capacity(4);
        q.extend([1, 2, 3, 4]);
        q.pop().unwrap();
        q.push(5);
        let drained: Vec<_> = q.into_iter().collect();
        assert_eq!(drained, vec![2, 3, 4, 5]);
    }

    #[test]
    fn moves_non_clone_values() {
        let mut q = RingQueue::new();
        q.push(String::from("a"));
        q.push(String::from("b"));
        assert_eq!(q.pop().as_deref(), Ok("a"));
        assert_eq!(format!("{q:?}"), r#"["b"]"#);
    }
}
