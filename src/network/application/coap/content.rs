//! Response composition and request body parsing

use super::MAX_CHUNK_SIZE;
use core::fmt;
use heapless::Vec;

/// Fixed-capacity text buffer that handlers format their bodies into.
///
/// Writes past the capacity are silently dropped, so the length never exceeds
/// `N` no matter how much is formatted into it. Each handler invocation creates
/// its own buffer on the stack.
#[derive(Debug, Clone, Default)]
pub struct ContentBuffer<const N: usize = MAX_CHUNK_SIZE> {
    bytes: Vec<u8, N>,
}

impl<const N: usize> ContentBuffer<N> {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes written
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Fixed capacity of the buffer
    pub fn capacity(&self) -> usize {
        N
    }

    /// True when further writes will be dropped
    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }

    /// Discard the contents.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl<const N: usize> fmt::Write for ContentBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = N - self.bytes.len();
        let take = s.len().min(room);
        self.bytes.extend_from_slice(&s.as_bytes()[..take]).ok();
        Ok(())
    }
}

/// Parse a decimal integer the way C's `atoi` does.
///
/// Leading whitespace is skipped, one optional sign is accepted, then digits
/// are consumed up to the first non-digit. Anything unparseable yields `0`.
/// Values outside the `i32` range saturate.
pub fn parse_decimal(bytes: &[u8]) -> i32 {
    let mut rest = bytes;
    while let [b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c, tail @ ..] = rest {
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for &b in rest {
        if !b.is_ascii_digit() {
            break;
        }
        value = value * 10 + i64::from(b - b'0');
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
