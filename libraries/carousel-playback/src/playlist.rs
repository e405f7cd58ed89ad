//! Circular doubly-linked playlist
//!
//! Nodes live in an arena owned by the [`Playlist`] and link to each other
//! through [`NodeId`] handles instead of pointers:
//!
//! ```text
//!        ┌──────────────────────────────────────┐
//!        ▼                                      │
//!     [head] ⇄ [node 1] ⇄ [node 2] ⇄ ... ⇄ [tail]
//!        │                                      ▲
//!        └──────────────────────────────────────┘
//! ```
//!
//! Songs are only ever appended, so a node's arena slot is also its
//! zero-based position in the playlist.

use crate::error::{PlaybackError, Result};
use crate::types::Song;

/// Handle to a node inside a [`Playlist`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A song plus its links in the cycle
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistNode {
    song: Song,
    next: NodeId,
    prev: NodeId,
}

impl PlaylistNode {
    pub fn song(&self) -> &Song {
        &self.song
    }

    pub fn next(&self) -> NodeId {
        self.next
    }

    pub fn prev(&self) -> NodeId {
        self.prev
    }
}

/// Ordered, wrap-around collection of songs
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    nodes: Vec<PlaylistNode>,
    head: Option<NodeId>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song at the end of the cycle, just before head
    pub fn append(&mut self, song: Song) -> NodeId {
        let id = NodeId(self.nodes.len());

        match self.head {
            None => {
                // Sole node points at itself both ways
                self.nodes.push(PlaylistNode {
                    song,
                    next: id,
                    prev: id,
                });
                self.head = Some(id);
            }
            Some(head) => {
                let tail = self.nodes[head.0].prev;
                self.nodes.push(PlaylistNode {
                    song,
                    next: head,
                    prev: tail,
                });
                self.nodes[tail.0].next = id;
                self.nodes[head.0].prev = id;
            }
        }

        id
    }

    /// Handle of the node at `index`, found by walking `next` from head
    pub fn id_at(&self, index: usize) -> Result<NodeId> {
        let len = self.len();
        let head = match self.head {
            Some(head) if index < len => head,
            _ => return Err(PlaybackError::IndexOutOfRange { index, len }),
        };

        let mut cursor = head;
        for _ in 0..index {
            cursor = self.nodes[cursor.0].next;
        }
        Ok(cursor)
    }

    /// Node at zero-based `index`
    pub fn get(&self, index: usize) -> Result<&PlaylistNode> {
        let id = self.id_at(index)?;
        Ok(&self.nodes[id.0])
    }

    /// Look up a node by handle
    pub fn node(&self, id: NodeId) -> Option<&PlaylistNode> {
        self.nodes.get(id.0)
    }

    pub fn song(&self, id: NodeId) -> Option<&Song> {
        self.node(id).map(PlaylistNode::song)
    }

    /// Structurally next node (wraps from tail to head)
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).map(PlaylistNode::next)
    }

    /// Structurally previous node (wraps from head to tail)
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).map(PlaylistNode::prev)
    }

    /// Zero-based playlist position of a node
    pub fn position(&self, id: NodeId) -> Option<usize> {
        (id.0 < self.nodes.len()).then_some(id.0)
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Songs in cycle order, starting at head, one full lap
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            playlist: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }
}

impl FromIterator<Song> for Playlist {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        let mut playlist = Playlist::new();
        playlist.extend(iter);
        playlist
    }
}

impl Extend<Song> for Playlist {
    fn extend<I: IntoIterator<Item = Song>>(&mut self, iter: I) {
        for song in iter {
            self.append(song);
        }
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over one lap of a [`Playlist`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    playlist: &'a Playlist,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.playlist.node(self.cursor?)?;
        self.remaining -= 1;
        self.cursor = Some(node.next);
        Some(&node.song)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist_of(n: usize) -> Playlist {
        (0..n)
            .map(|i| Song::new(format!("Song{}", i + 1), format!("Artist{}", i + 1), 200))
            .collect()
    }

    #[test]
    fn empty_playlist() {
        let playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.len(), 0);
        assert_eq!(playlist.head(), None);
        assert_eq!(playlist.iter().count(), 0);
    }

    #[test]
    fn single_node_links_to_itself() {
        let mut playlist = Playlist::new();
        let id = playlist.append(Song::new("Only", "One", 60));

        assert_eq!(playlist.head(), Some(id));
        assert_eq!(playlist.next(id), Some(id));
        assert_eq!(playlist.prev(id), Some(id));
    }

    #[test]
    fn append_splices_before_head() {
        let mut playlist = Playlist::new();
        let a = playlist.append(Song::new("A", "X", 1));
        let b = playlist.append(Song::new("B", "X", 1));
        let c = playlist.append(Song::new("C", "X", 1));

        assert_eq!(playlist.head(), Some(a));
        assert_eq!(playlist.next(a), Some(b));
        assert_eq!(playlist.next(b), Some(c));
        assert_eq!(playlist.next(c), Some(a));
        assert_eq!(playlist.prev(a), Some(c));
        assert_eq!(playlist.prev(c), Some(b));
        assert_eq!(playlist.prev(b), Some(a));
    }

    #[test]
    fn walking_len_steps_returns_to_origin() {
        let playlist = playlist_of(5);

        for start in 0..playlist.len() {
            let origin = playlist.id_at(start).unwrap();

            let mut forward = origin;
            let mut backward = origin;
            for _ in 0..playlist.len() {
                forward = playlist.next(forward).unwrap();
                backward = playlist.prev(backward).unwrap();
            }

            assert_eq!(forward, origin);
            assert_eq!(backward, origin);
        }
    }

    #[test]
    fn get_by_index() {
        let playlist = playlist_of(4);
        assert_eq!(playlist.get(0).unwrap().song().title, "Song1");
        assert_eq!(playlist.get(3).unwrap().song().title, "Song4");
    }

    #[test]
    fn get_out_of_range() {
        let playlist = playlist_of(4);
        assert_eq!(
            playlist.get(4).unwrap_err(),
            PlaybackError::IndexOutOfRange { index: 4, len: 4 }
        );
        assert!(playlist.get(usize::MAX).is_err());
    }

    #[test]
    fn get_on_empty_always_fails() {
        let playlist = Playlist::new();
        assert_eq!(
            playlist.get(0).unwrap_err(),
            PlaybackError::IndexOutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn position_matches_index() {
        let playlist = playlist_of(6);
        for index in 0..6 {
            let id = playlist.id_at(index).unwrap();
            assert_eq!(playlist.position(id), Some(index));
        }
    }

    #[test]
    fn iter_is_one_lap_from_head() {
        let playlist = playlist_of(3);
        let titles: Vec<&str> = playlist.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Song1", "Song2", "Song3"]);
        assert_eq!(playlist.iter().len(), 3);
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let big = playlist_of(5);
        let small = playlist_of(2);
        let id = big.id_at(4).unwrap();

        assert!(small.node(id).is_none());
        assert_eq!(small.position(id), None);
    }
}
