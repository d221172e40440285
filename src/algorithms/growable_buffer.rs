// https://en.wikipedia.org/wiki/Dynamic_array#Geometric_expansion_and_amortized_cost

use serde::{Deserialize, Serialize};
use tracing::info;

/// Capacity used when the caller doesn't ask for one.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

/// Notification emitted every time a [GrowableBuffer] reallocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub old_capacity: usize,
    pub new_capacity: usize,
    pub items_copied: usize,
}

/// Totals over every resize performed while filling a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeStats {
    pub resizes: usize,
    pub total_copies: usize,
}

impl ResizeStats {
    fn record(&mut self, event: &ResizeEvent) {
        self.resizes += 1;
        self.total_copies += event.items_copied;
    }
}

/// Everything observed while filling a buffer with `0..n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferSimulation {
    contents: Vec<usize>,
    events: Vec<ResizeEvent>,
    stats: ResizeStats,
}

impl BufferSimulation {
    pub fn contents(&self) -> &[usize] {
        &self.contents
    }

    pub fn events(&self) -> &[ResizeEvent] {
        &self.events
    }

    pub fn stats(&self) -> ResizeStats {
        self.stats
    }

    pub fn final_capacity(&self) -> Option<usize> {
        self.events.last().map(|e| e.new_capacity)
    }
}

/// A fixed-capacity buffer that reallocates to double its capacity when full.
///
/// Slots `0..len()` are occupied and the rest are empty. Writes only ever
/// happen at index `len()`.
#[derive(Debug, Clone)]
pub struct GrowableBuffer<T> {
    slots: Vec<Option<T>>,
    size: usize,
}

impl<T> GrowableBuffer<T> {
    /// Creates an empty buffer with room for `capacity` items.
    ///
    /// A capacity of 0 is raised to 1 so that doubling always makes progress.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the item at `index`, if that slot is occupied.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.size {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Iterates over the occupied slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.size].iter().flatten()
    }

    /// Appends `value`, doubling the capacity first if the buffer is full.
    ///
    /// Returns the [ResizeEvent] if a reallocation happened. A resizing push
    /// costs O(len) for the copy; all others are O(1).
    pub fn push(&mut self, value: T) -> Option<ResizeEvent> {
        let event = if self.size == self.capacity() {
            Some(self.grow())
        } else {
            None
        };

        self.slots[self.size] = Some(value);
        self.size += 1;

        event
    }

    /// Consumes the buffer, returning the occupied items in order.
    pub fn into_vec(self) -> Vec<T> {
        let size = self.size;
        self.slots.into_iter().take(size).flatten().collect()
    }

    fn grow(&mut self) -> ResizeEvent {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;

        // Allocate fresh and move every occupied slot across
        let mut new_slots = empty_slots(new_capacity);
        for (dst, src) in new_slots.iter_mut().zip(self.slots[..self.size].iter_mut()) {
            *dst = src.take();
        }
        self.slots = new_slots;

        let event = ResizeEvent {
            old_capacity,
            new_capacity,
            items_copied: self.size,
        };
        info!(
            target: "growable_buffer",
            old_capacity = event.old_capacity,
            new_capacity = event.new_capacity,
            items_copied = event.items_copied,
            "Resizing: {} -> {} (copied {} items)",
            old_capacity,
            new_capacity,
            event.items_copied,
        );

        event
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    (0..capacity).map(|_| None).collect()
}

/// Fills a buffer of `initial_capacity` (raised to at least 1) with `0..n`,
/// calling `on_resize` for every reallocation, and returns the contents.
///
/// Individual resizing insertions cost O(current size), but because capacity
/// doubles the total copy work over `n` insertions stays below `2n`, so the
/// amortized cost per insertion is O(1).
///
/// # Example
/// ```rust
/// use perf_lab::algorithms::growable_buffer::add_n_items;
///
/// let mut resizes = Vec::new();
/// let items = add_n_items(6, 1, |e| resizes.push((e.old_capacity, e.new_capacity)));
///
/// assert_eq!(items, vec![0, 1, 2, 3, 4, 5]);
/// assert_eq!(resizes, vec![(1, 2), (2, 4), (4, 8)]);
/// ```
pub fn add_n_items<F>(n: usize, initial_capacity: usize, mut on_resize: F) -> Vec<usize>
where
    F: FnMut(ResizeEvent),
{
    let mut buffer = GrowableBuffer::with_capacity(initial_capacity);
    for i in 0..n {
        if let Some(event) = buffer.push(i) {
            on_resize(event);
        }
    }
    buffer.into_vec()
}

/// Runs [add_n_items] and records every resize along with the totals.
pub fn simulate(n: usize, initial_capacity: usize) -> BufferSimulation {
    let mut events = Vec::new();
    let mut stats = ResizeStats::default();

    let contents = add_n_items(n, initial_capacity, |event| {
        stats.record(&event);
        events.push(event);
    });

    BufferSimulation {
        contents,
        events,
        stats,
    }
}
