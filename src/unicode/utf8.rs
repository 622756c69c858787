use core::ops::Range;

/// Outcome of feeding one decoded byte to a [`PendingSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Step {
    /// The byte completed a character; the buffer is empty again
    Complete(char),
    /// The byte was buffered as part of an unfinished multi-byte character
    Incomplete,
    /// The byte cannot extend the buffered bytes; the buffer is left as is
    Invalid,
}

/// Bytes reassembled from consecutive percent-triplets that do not yet form
/// a whole character, together with where their triplets start in the source.
///
/// Triplets are only buffered while they are contiguous, so the source span
/// is always `start..start + 3 * len`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingSequence {
    bytes: [u8; 4],
    len: usize,
    start: usize,
}

impl PendingSequence {
    pub const fn new() -> Self {
        Self {
            bytes: [0; 4],
            len: 0,
            start: 0,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Source range covered by the buffered triplets
    #[inline]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.start + self.len * 3
    }

    #[inline]
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Feed `byte`, decoded from the triplet at source offset `triplet_start`.
    pub fn push(&mut self, byte: u8, triplet_start: usize) -> Utf8Step {
        // Buffered bytes are a strict prefix of a character, so at most 3.
        let mut candidate = self.bytes;
        candidate[self.len] = byte;
        let candidate = &candidate[..=self.len];

        match core::str::from_utf8(candidate) {
            Ok(text) => match text.chars().next() {
                Some(c) => {
                    self.len = 0;
                    Utf8Step::Complete(c)
                }
                None => Utf8Step::Invalid,
            },
            // Valid so far, more continuation bytes needed
            Err(e) if e.error_len().is_none() => {
                if self.len == 0 {
                    self.start = triplet_start;
                }
                self.bytes[self.len] = byte;
                self.len += 1;
                Utf8Step::Incomplete
            }
            Err(_) => Utf8Step::Invalid,
        }
    }
}
