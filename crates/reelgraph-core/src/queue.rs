//! An indexed binary min-heap with decrease-key support.
//!
//! [`PriorityQueue`] stores (priority, element) pairs in an array-backed
//! binary heap and keeps an auxiliary map from element to its current heap
//! index. The map is what makes [`PriorityQueue::is_present`] O(1) and
//! [`PriorityQueue::change_priority`] O(log n) instead of O(n): every
//! structural move (sift-up, sift-down, swap) updates it in lockstep with
//! the array.
//!
//! Invariants, after every mutation:
//!
//! - heap property: each node's priority is `<=` its children's priorities;
//! - each element appears at most once;
//! - the index map exactly mirrors the array's (element -> index) relation.
//!
//! Tie-breaking among equal priorities is arbitrary — whatever the heap's
//! structural order yields. Callers must not depend on ties resolving a
//! particular way.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// One heap slot: an element tagged with its current priority.
#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: u64,
    element: usize,
}

/// A min-priority queue over `usize` elements with O(log n) decrease-key.
///
/// Priorities are unsigned, so the "priorities cannot be negative"
/// precondition of the data structure is enforced by the type system rather
/// than a runtime check.
///
/// # Examples
///
/// ```
/// use reelgraph_core::PriorityQueue;
///
/// let mut q = PriorityQueue::new();
/// q.push(5, 100)?;
/// q.push(3, 200)?;
/// q.change_priority(1, 100)?;
///
/// assert_eq!(q.pop()?, 100);
/// assert_eq!(q.pop()?, 200);
/// assert!(q.is_empty());
/// # Ok::<(), reelgraph_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    heap: Vec<Entry>,
    location: HashMap<usize, usize>,
}

impl PriorityQueue {
    /// Creates an empty priority queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            location: HashMap::new(),
        }
    }

    /// Inserts `element` with the given priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateElement`] if `element` is already present.
    /// The queue is left unmodified on error.
    pub fn push(&mut self, priority: u64, element: usize) -> Result<()> {
        if self.location.contains_key(&element) {
            return Err(Error::DuplicateElement(element));
        }
        let index = self.heap.len();
        self.heap.push(Entry { priority, element });
        self.location.insert(element, index);
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the element with the minimum priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn pop(&mut self) -> Result<usize> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let root = self.heap.pop().map_or(0, |e| e.element);
        self.location.remove(&root);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Returns the minimum priority without removing its element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn top_priority(&self) -> Result<u64> {
        self.heap.first().map(|e| e.priority).ok_or(Error::EmptyQueue)
    }

    /// Returns the element with the minimum priority without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyQueue`] if the queue is empty.
    pub fn top_element(&self) -> Result<usize> {
        self.heap.first().map(|e| e.element).ok_or(Error::EmptyQueue)
    }

    /// Changes the priority of an element already in the queue.
    ///
    /// Lowering the priority sifts the element up; raising it sifts the
    /// element down. Exactly one of the two restores runs, chosen by
    /// comparing the new priority against the old one. Setting the same
    /// priority is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if `element` is not present.
    pub fn change_priority(&mut self, new_priority: u64, element: usize) -> Result<()> {
        let index = *self
            .location
            .get(&element)
            .ok_or(Error::UnknownElement(element))?;
        let old_priority = self.heap[index].priority;
        self.heap[index].priority = new_priority;
        if new_priority < old_priority {
            self.sift_up(index);
        } else if new_priority > old_priority {
            self.sift_down(index);
        }
        Ok(())
    }

    /// Returns the current priority of an element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if `element` is not present.
    pub fn priority_of(&self, element: usize) -> Result<u64> {
        let index = *self
            .location
            .get(&element)
            .ok_or(Error::UnknownElement(element))?;
        Ok(self.heap[index].priority)
    }

    /// Returns `true` if `element` is in the queue.
    #[must_use]
    pub fn is_present(&self, element: usize) -> bool {
        self.location.contains_key(&element)
    }

    /// Returns `true` if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Removes all elements from the queue.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.location.clear();
    }

    /// Moves the entry at `index` toward the root until its parent is no
    /// larger than it.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[parent].priority <= self.heap[index].priority {
                break;
            }
            self.swap(parent, index);
            index = parent;
        }
    }

    /// Moves the entry at `index` toward the leaves until both children are
    /// no smaller than it.
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < self.heap.len() && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Swaps two heap slots and updates the index map for both.
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.location.insert(self.heap[i].element, i);
        self.location.insert(self.heap[j].element, j);
    }

    /// Panics unless the heap property holds and the index map mirrors the
    /// array. Test-only.
    #[cfg(test)]
    fn assert_invariants(&self) {
        for index in 1..self.heap.len() {
            let parent = (index - 1) / 2;
            assert!(
                self.heap[parent].priority <= self.heap[index].priority,
                "heap property violated at index {index}"
            );
        }
        assert_eq!(self.location.len(), self.heap.len());
        for (index, entry) in self.heap.iter().enumerate() {
            assert_eq!(self.location.get(&entry.element), Some(&index));
        }
    }
}
