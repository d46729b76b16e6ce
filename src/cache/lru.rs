//! LRU List Module
//!
//! Recency ordering for the cache engine.
//!
//! Nodes live in a `Vec` arena and link to each other by index, so moving,
//! inserting and removing a node are all O(1) without unsafe pointers.
//! Each node carries its own key, which lets the engine enumerate or evict
//! without a reverse lookup into the index.

use super::entry::CacheEntry;

/// Handle locating a node inside the list arena.
pub type NodeId = usize;

/// Null link.
const SENTINEL: NodeId = usize::MAX;

#[derive(Debug)]
struct Node<V> {
    key: String,
    entry: Option<CacheEntry<V>>,
    prev: NodeId,
    next: NodeId,
}

// == LRU List ==
/// Doubly-linked recency list.
///
/// - Front (head) = most recently used
/// - Back (tail) = least recently used
#[derive(Debug)]
pub struct LruList<V> {
    arena: Vec<Node<V>>,
    head: NodeId,
    tail: NodeId,
    /// Head of the chain of recycled slots
    free_head: NodeId,
    len: usize,
}

impl<V> Default for LruList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LruList<V> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            head: SENTINEL,
            tail: SENTINEL,
            free_head: SENTINEL,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // == Push Front ==
    /// Inserts a node at the front (most recent) and returns its handle.
    pub fn push_front(&mut self, key: String, entry: CacheEntry<V>) -> NodeId {
        let id = self.alloc(key, entry);
        self.link_front(id);
        self.len += 1;
        id
    }

    // == Move To Front ==
    /// Marks a node as most recently used.
    pub fn move_to_front(&mut self, id: NodeId) {
        if self.head == id {
            return;
        }
        self.unlink(id);
        self.link_front(id);
    }

    // == Remove ==
    /// Unlinks a node and returns its key and entry.
    ///
    /// Returns None if the handle does not point at a live node.
    pub fn remove(&mut self, id: NodeId) -> Option<(String, CacheEntry<V>)> {
        let entry = self.arena.get_mut(id)?.entry.take()?;
        self.unlink(id);
        let key = std::mem::take(&mut self.arena[id].key);

        self.arena[id].next = self.free_head;
        self.free_head = id;
        self.len -= 1;

        Some((key, entry))
    }

    // == Pop Back ==
    /// Removes and returns the least recently used node.
    pub fn pop_back(&mut self) -> Option<(String, CacheEntry<V>)> {
        match self.back() {
            Some(id) => self.remove(id),
            None => None,
        }
    }

    /// Handle of the least recently used node.
    pub fn back(&self) -> Option<NodeId> {
        (self.tail != SENTINEL).then_some(self.tail)
    }

    /// Handle of the most recently used node.
    pub fn front(&self) -> Option<NodeId> {
        (self.head != SENTINEL).then_some(self.head)
    }

    // == Accessors ==
    /// Returns the entry stored at `id`.
    pub fn entry(&self, id: NodeId) -> Option<&CacheEntry<V>> {
        self.arena.get(id).and_then(|node| node.entry.as_ref())
    }

    /// Returns a mutable reference to the entry stored at `id`.
    pub fn entry_mut(&mut self, id: NodeId) -> Option<&mut CacheEntry<V>> {
        self.arena.get_mut(id).and_then(|node| node.entry.as_mut())
    }

    /// Returns the key stored at `id`.
    pub fn key(&self, id: NodeId) -> Option<&str> {
        self.arena
            .get(id)
            .filter(|node| node.entry.is_some())
            .map(|node| node.key.as_str())
    }

    /// Iterates from most to least recently used.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    // == Clear ==
    /// Drops every node and resets the arena.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = SENTINEL;
        self.tail = SENTINEL;
        self.free_head = SENTINEL;
        self.len = 0;
    }

    // == Length ==
    /// Returns the number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // --- Internal linked-list operations ---

    fn alloc(&mut self, key: String, entry: CacheEntry<V>) -> NodeId {
        let node = Node {
            key,
            entry: Some(entry),
            prev: SENTINEL,
            next: SENTINEL,
        };

        if self.free_head != SENTINEL {
            let id = self.free_head;
            self.free_head = self.arena[id].next;
            self.arena[id] = node;
            id
        } else {
            self.arena.push(node);
            self.arena.len() - 1
        }
    }

    fn unlink(&mut self, id: NodeId) {
        let prev = self.arena[id].prev;
        let next = self.arena[id].next;

        if prev != SENTINEL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }

        if next != SENTINEL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.arena[id].prev = SENTINEL;
        self.arena[id].next = SENTINEL;
    }

    fn link_front(&mut self, id: NodeId) {
        self.arena[id].prev = SENTINEL;
        self.arena[id].next = self.head;

        if self.head != SENTINEL {
            self.arena[self.head].prev = id;
        }
        self.head = id;

        if self.tail == SENTINEL {
            self.tail = id;
        }
    }
}

// == Iterator ==
/// Iterator over `(handle, key, entry)` from front to back.
pub struct Iter<'a, V> {
    list: &'a LruList<V>,
    current: NodeId,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (NodeId, &'a str, &'a CacheEntry<V>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == SENTINEL {
            return None;
        }
        let id = self.current;
        let list = self.list;
        let node = &list.arena[id];
        self.current = node.next;
        node.entry.as_ref().map(|entry| (id, node.key.as_str(), entry))
    }
}
