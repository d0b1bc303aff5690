use serde::Serialize;

/// Position in a ring of `len` items.
///
/// `peek_next` obeys `next = (current + 1) mod len`. An empty ring stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RotatingIndex {
    current: usize,
    len: usize,
}

impl RotatingIndex {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    /// Starts at `requested`, wrapped into range.
    pub fn starting_at(len: usize, requested: usize) -> Self {
        let mut idx = Self::new(len);
        idx.select(requested);
        idx
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn peek_next(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.current + 1) % self.len
    }

    pub fn peek_prev(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.current + self.len - 1) % self.len
    }

    /// Jumps to `idx` (indicator dots). Out-of-range values wrap.
    pub fn select(&mut self, idx: usize) -> usize {
        self.current = if self.len == 0 { 0 } else { idx % self.len };
        self.current
    }
}
