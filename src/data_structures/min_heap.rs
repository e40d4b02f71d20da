use std::fmt::Debug;

/// An array-backed binary min-heap used as the priority queue in shortest
/// path algorithms.
///
/// Entries are `(value, priority)` pairs ordered by priority. Duplicate
/// values and duplicate priorities are allowed; the heap makes no stability
/// guarantee among equal priorities. Stale entries for an already-settled
/// vertex are expected to be filtered by the caller at pop time (lazy
/// deletion) rather than removed from the heap.
#[derive(Debug, Clone)]
pub struct MinHeap<V, P>
where
    V: Copy + Debug,
    P: Copy + Ord + Debug,
{
    /// Backing store in heap order: parent of `i` is `(i - 1) / 2`,
    /// children are `2i + 1` and `2i + 2`
    entries: Vec<(V, P)>,
}

impl<V, P> MinHeap<V, P>
where
    V: Copy + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
        }
    }

    /// Creates a new empty heap with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts an entry, restoring heap order upward. O(log k)
    pub fn push(&mut self, value: V, priority: P) {
        self.entries.push((value, priority));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority, or `None`
    /// if the heap is empty. O(log k)
    pub fn pop(&mut self) -> Option<(V, P)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        min
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.entries.first().copied()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Swaps the entry at `index` upward while its parent's priority is
    /// strictly greater
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].1 > self.entries[index].1 {
                self.entries.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Swaps the entry at `index` downward with its smaller child until
    /// neither child has a smaller priority
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < len && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<V, P> Default for MinHeap<V, P>
where
    V: Copy + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
