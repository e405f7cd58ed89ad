//! Playback history tracking
//!
//! Singly-linked stack of playlist indices; the most recently played
//! index sits on top and is what "previous" navigation unwinds.

use crate::error::{Container, PlaybackError, Result};

type Link = Option<Box<StackNode>>;

#[derive(Debug)]
struct StackNode {
    index: usize,
    next: Link,
}

/// LIFO of played playlist indices
#[derive(Debug, Default)]
pub struct History {
    top: Link,
    len: usize,
}

impl History {
    /// Create empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a played index
    pub fn push(&mut self, index: usize) {
        let node = Box::new(StackNode {
            index,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.len += 1;
    }

    /// Pop most recent index
    pub fn pop(&mut self) -> Result<usize> {
        let node = self
            .top
            .take()
            .ok_or(PlaybackError::EmptyContainer(Container::History))?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.index)
    }

    /// Most recent index without removing it
    pub fn peek(&self) -> Result<usize> {
        self.top
            .as_ref()
            .map(|node| node.index)
            .ok_or(PlaybackError::EmptyContainer(Container::History))
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        self.unlink();
        self.len = 0;
    }

    /// Indices from most recent to oldest
    pub fn iter(&self) -> HistoryIter<'_> {
        HistoryIter {
            cursor: self.top.as_deref(),
        }
    }

    // Iterative so long histories don't recurse through Box drops
    fn unlink(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl Drop for History {
    fn drop(&mut self) {
        self.unlink();
    }
}

/// Iterator over a [`History`], top first
#[derive(Debug, Clone)]
pub struct HistoryIter<'a> {
    cursor: Option<&'a StackNode>,
}

impl Iterator for HistoryIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(node.index)
    }
}
