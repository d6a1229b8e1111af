//! Ordering Chain Module
//!
//! Singly linked list whose nodes live in an index arena.
//!
//! Nodes are stored in a `Vec` of slots and point forward by slot index.
//! Freed slots are recycled through a free list. Head and tail indices are
//! cached so appending and popping the front are O(1); unlinking a node in
//! the middle needs its predecessor, which the `position` scans return
//! alongside the match as a [`Cursor`].
//!
//! ```text
//!   head ─► [3] ─► [0] ─► [5] ◄── tail
//! ```

// == Link ==
#[derive(Debug)]
struct Link<T> {
    item: T,
    next: Option<usize>,
}

// == Cursor ==
/// Location of a node found by a scan: its slot and its predecessor's slot.
///
/// A cursor is only valid until the chain is next mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    prev: Option<usize>,
    idx: usize,
}

// == Chain ==
/// Arena-backed singly linked list.
#[derive(Debug)]
pub(crate) struct Chain<T> {
    slots: Vec<Option<Link<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> {
    // == Constructor ==
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Length ==
    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Front / Back ==
    /// Returns the item at the head of the chain.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.link(idx)).map(|link| &link.item)
    }

    /// Returns the item at the tail of the chain.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.link(idx)).map(|link| &link.item)
    }

    /// Returns a mutable reference to the item under `cursor`.
    pub fn get_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        self.link_mut(cursor.idx).map(|link| &mut link.item)
    }

    // == Push Back ==
    /// Appends an item at the tail.
    pub fn push_back(&mut self, item: T) {
        let link = Link { item, next: None };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(link);
                idx
            }
            None => {
                self.slots.push(Some(link));
                self.slots.len() - 1
            }
        };
        self.attach_back(idx);
        self.len += 1;
    }

    // == Pop Front ==
    /// Removes and returns the item at the head.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        self.unlink(Cursor { prev: None, idx })
    }

    // == Scans ==
    /// Finds the first node, from the head, whose item matches `pred`.
    pub fn position<F>(&self, mut pred: F) -> Option<Cursor>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let link = self.link(idx)?;
            if pred(&link.item) {
                return Some(Cursor { prev, idx });
            }
            prev = Some(idx);
            current = link.next;
        }
        None
    }

    /// Finds the last node, i.e. the one nearest the tail, whose item matches `pred`.
    ///
    /// Without back links this still walks the whole chain.
    pub fn rposition<F>(&self, mut pred: F) -> Option<Cursor>
    where
        F: FnMut(&T) -> bool,
    {
        let mut found = None;
        let mut prev = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let link = self.link(idx)?;
            if pred(&link.item) {
                found = Some(Cursor { prev, idx });
            }
            prev = Some(idx);
            current = link.next;
        }
        found
    }

    // == Unlink ==
    /// Splices the node under `cursor` out of the chain and returns its item.
    pub fn unlink(&mut self, cursor: Cursor) -> Option<T> {
        let link = self.slots.get_mut(cursor.idx)?.take()?;
        self.detach(cursor, link.next);
        self.free.push(cursor.idx);
        self.len -= 1;
        Some(link.item)
    }

    // == Move To Back ==
    /// Relinks the node under `cursor` at the tail, keeping its slot.
    pub fn move_to_back(&mut self, cursor: Cursor) {
        if self.tail == Some(cursor.idx) {
            return;
        }
        let Some(next) = self.link(cursor.idx).map(|link| link.next) else {
            return;
        };
        self.detach(cursor, next);
        if let Some(link) = self.link_mut(cursor.idx) {
            link.next = None;
        }
        self.attach_back(cursor.idx);
    }

    // == Clear ==
    /// Drops every node and resets the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iteration ==
    /// Iterates items from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            current: self.head,
        }
    }

    fn link(&self, idx: usize) -> Option<&Link<T>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn link_mut(&mut self, idx: usize) -> Option<&mut Link<T>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    fn attach_back(&mut self, idx: usize) {
        match self.tail {
            Some(tail) => {
                if let Some(link) = self.link_mut(tail) {
                    link.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    // Patches the predecessor (or head) past `cursor.idx`.
    fn detach(&mut self, cursor: Cursor, next: Option<usize>) {
        match cursor.prev {
            Some(prev) => {
                if let Some(link) = self.link_mut(prev) {
                    link.next = next;
                }
            }
            None => self.head = next,
        }
        if self.tail == Some(cursor.idx) {
            self.tail = cursor.prev;
        }
    }
}

// == Iterator ==
/// Head-to-tail iterator over a [`Chain`].
pub(crate) struct Iter<'a, T> {
    chain: &'a Chain<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.chain.link(self.current?)?;
        self.current = link.next;
        Some(&link.item)
    }
}
