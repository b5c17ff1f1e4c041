//! Declared-count lists
//!
//! Sub-record lists are announced by a count code (90 vertices, 72 knots,
//! 93 edges...) before their items arrive. A [`CountedList`] keeps the
//! announced count next to the items and never grows past it.

/// Mismatch between an announced count and the items received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imbalance {
    /// What the list holds, e.g. `"LWPOLYLINE vertices"`
    pub list: String,
    pub declared: usize,
    pub received: usize,
    /// Items dropped because they exceeded the announced count
    pub dropped: usize,
}

impl Imbalance {
    pub fn describe(&self) -> String {
        if self.dropped > 0 {
            format!(
                "{}: declared {}, dropped {} extra item(s)",
                self.list, self.declared, self.dropped
            )
        } else {
            format!(
                "{}: declared {}, received {}",
                self.list, self.declared, self.received
            )
        }
    }
}

/// Growable list bounded by an optional announced count
#[derive(Debug, Clone)]
pub struct CountedList<T> {
    declared: Option<usize>,
    items: Vec<T>,
    dropped: usize,
}

impl<T> CountedList<T> {
    /// Announced counts larger than this do not pre-allocate fully
    const MAX_RESERVE: usize = 4096;

    pub fn new() -> Self {
        Self {
            declared: None,
            items: Vec::new(),
            dropped: 0,
        }
    }

    /// Announce the number of items to expect
    pub fn declare(&mut self, count: usize) {
        self.declared = Some(count);
        self.items.reserve(count.min(Self::MAX_RESERVE));
    }

    /// Forget the announced count
    pub fn undeclare(&mut self) {
        self.declared = None;
    }

    pub fn declared(&self) -> Option<usize> {
        self.declared
    }

    /// Append an item. Returns `false` and drops it when the announced
    /// count is already reached.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            self.dropped += 1;
            return false;
        }
        self.items.push(item);
        true
    }

    /// Announced count reached; a declared count of 0 is full at once
    pub fn is_full(&self) -> bool {
        self.declared.map_or(false, |d| self.items.len() >= d)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Compare received items with the announced count
    pub fn imbalance(&self, list: &str) -> Option<Imbalance> {
        let declared = self.declared?;
        if self.dropped > 0 || self.items.len() < declared {
            Some(Imbalance {
                list: list.to_string(),
                declared,
                received: self.items.len(),
                dropped: self.dropped,
            })
        } else {
            None
        }
    }

    /// Take the items and reset the list
    pub fn take(&mut self) -> Vec<T> {
        self.declared = None;
        self.dropped = 0;
        std::mem::take(&mut self.items)
    }

    pub fn clear(&mut self) {
        self.declared = None;
        self.dropped = 0;
        self.items.clear();
    }
}

impl<T> Default for CountedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A list whose items are built from several pairs each
///
/// The item is started by its leading code (10 for a vertex). Following
/// codes fill the current item until the next leading code. When the
/// start was dropped for exceeding the count, the following codes are
/// ignored too.
#[derive(Debug, Clone)]
pub struct ItemList<T> {
    list: CountedList<T>,
    filling: bool,
}

impl<T> ItemList<T> {
    pub fn new() -> Self {
        Self {
            list: CountedList::new(),
            filling: false,
        }
    }

    pub fn declare(&mut self, count: usize) {
        self.list.declare(count);
    }

    /// Start a new item
    pub fn start(&mut self, item: T) {
        self.filling = self.list.push(item);
    }

    /// The item currently being filled, if it was accepted
    pub fn current(&mut self) -> Option<&mut T> {
        if self.filling {
            self.list.last_mut()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn items(&self) -> &[T] {
        self.list.items()
    }

    pub fn imbalance(&self, list: &str) -> Option<Imbalance> {
        self.list.imbalance(list)
    }

    pub fn take(&mut self) -> Vec<T> {
        self.filling = false;
        self.list.take()
    }

    pub fn clear(&mut self) {
        self.filling = false;
        self.list.clear();
    }
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self::new()
    }
}
