//! Round-robin cycling over a fixed list.
//!
//! A [`Cycler`] owns a snapshot of the list and a cursor. Each
//! [`Cycler::next_n`] call reads forward from the cursor, wraps past the end,
//! and leaves the cursor just after the last item it returned. Successive
//! batches therefore tile the infinite repetition of the list with no gaps and
//! no overlaps.
//!
//! The cursor is mutated through `&mut self`. To share one cycler between
//! threads, put it behind a `Mutex`.

/// Stateful round-robin reader over an owned snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycler<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T: Clone> Cycler<T> {
    /// Snapshot `words` and park the cursor at `start`.
    ///
    /// `start` wraps modulo the length, so `-1` means the last item.
    pub fn new(words: &[T], start: i64) -> Self {
        let items = words.to_vec();
        let cursor = normalize(start, items.len());
        Self { items, cursor }
    }

    /// Next `n` items in cyclic order.
    ///
    /// Returns exactly `n` items (revisiting the list if `n > len`), or an
    /// empty vector with the cursor untouched when the snapshot is empty or
    /// `n == 0`.
    pub fn next_n(&mut self, n: usize) -> Vec<T> {
        let len = self.items.len();
        if len == 0 || n == 0 {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(n);
        let mut i = self.cursor;
        for _ in 0..n {
            out.push(self.items[i].clone());
            i = (i + 1) % len;
        }
        self.cursor = i;
        out
    }
}

impl<T> Cycler<T> {
    /// Position the next read starts from.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The snapshot, in original order.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

/// Endless stream of single items; `None` only for an empty snapshot.
impl<T: Clone> Iterator for Cycler<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.cursor)?.clone();
        self.cursor = (self.cursor + 1) % self.items.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.items.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}

/// Closure form of [`Cycler`]: each call returns the next batch of `n` items.
///
/// Every returned closure owns its own snapshot and cursor.
pub fn cycle_of<T: Clone>(words: &[T], start: i64) -> impl FnMut(usize) -> Vec<T> {
    let mut cycler = Cycler::new(words, start);
    move |n| cycler.next_n(n)
}

/// Map any offset into `0..len` (0 when `len == 0`).
fn normalize(start: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    // i128 keeps `len` lossless even where usize is wider than i64.
    i128::from(start).rem_euclid(len as i128) as usize
}
