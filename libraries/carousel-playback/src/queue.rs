//! Pending "play next" queue
//!
//! Singly-linked FIFO of playlist indices. Links are slot numbers in an
//! arena; slots freed by `dequeue` are recycled by later `enqueue` calls.

use crate::error::{Container, PlaybackError, Result};

#[derive(Debug, Clone, Copy)]
struct Slot {
    index: usize,
    next: Option<usize>,
}

/// FIFO of playlist indices requested for priority playback
///
/// The queue stores whatever it is given; bounds checking against the
/// playlist happens before anything is enqueued.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    slots: Vec<Slot>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl PendingQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add index at the tail
    pub fn enqueue(&mut self, index: usize) {
        let slot = Slot { index, next: None };
        let at = match self.free.pop() {
            Some(at) => {
                self.slots[at] = slot;
                at
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.slots[tail].next = Some(at),
            None => self.head = Some(at),
        }
        self.tail = Some(at);
        self.len += 1;
    }

    /// Remove and return the head entry
    pub fn dequeue(&mut self) -> Result<usize> {
        let head = self
            .head
            .ok_or(PlaybackError::EmptyContainer(Container::Queue))?;
        let Slot { index, next } = self.slots[head];

        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        self.free.push(head);
        self.len -= 1;

        Ok(index)
    }

    /// Head entry without removing it
    pub fn peek(&self) -> Result<usize> {
        self.head
            .map(|head| self.slots[head].index)
            .ok_or(PlaybackError::EmptyContainer(Container::Queue))
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Drop every pending entry
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Entries front to back
    pub fn iter(&self) -> QueueIter<'_> {
        QueueIter {
            slots: &self.slots,
            cursor: self.head,
        }
    }
}

/// Iterator over a [`PendingQueue`], head first
#[derive(Debug, Clone)]
pub struct QueueIter<'a> {
    slots: &'a [Slot],
    cursor: Option<usize>,
}

impl Iterator for QueueIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let slot = self.slots[self.cursor?];
        self.cursor = slot.next;
        Some(slot.index)
    }
}
