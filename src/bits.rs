//! Bit sequences.
//!
//! Bits are `u8` values `0`/`1`, one per element, in stream order. The
//! printable form is one `'0'`/`'1'` character per bit with no framing.

use crate::error::{Error, Result};

/// Render bits as a `'0'`/`'1'` string.
pub fn bits_to_string(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b != 0 { '1' } else { '0' }).collect()
}

/// Parse a `'0'`/`'1'` string into bits.
///
/// # Errors
/// Returns `Error::InvalidBit` at the first other character.
pub fn string_to_bits(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .enumerate()
        .map(|(index, found)| match found {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(Error::InvalidBit { index, found }),
        })
        .collect()
}

/// Output buffer that holds back straddle bits until the next commit.
#[derive(Debug, Default)]
pub(crate) struct BitSink {
    bits: Vec<u8>,
    pending: usize,
}

impl BitSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Withhold one bit whose value the next commit decides.
    pub(crate) fn defer(&mut self) {
        self.pending += 1;
    }

    /// Emit `bit`, then every withheld bit as its complement.
    pub(crate) fn commit(&mut self, bit: u8) {
        self.bits.push(bit);
        self.bits.extend(std::iter::repeat(1 - bit).take(self.pending));
        self.pending = 0;
    }

    pub(crate) fn into_bits(self) -> Vec<u8> {
        self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_conversion() {
        let bits = vec![0, 1, 1, 0, 1];
        let s = bits_to_string(&bits);
        assert_eq!(s, "01101");
        assert_eq!(string_to_bits(&s).unwrap(), bits);
        assert_eq!(bits_to_string(&[]), "");
        assert!(string_to_bits("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_character() {
        match string_to_bits("0110x1") {
            Err(Error::InvalidBit { index, found }) => {
                assert_eq!(index, 4);
                assert_eq!(found, 'x');
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_sink_flushes_complements() {
        let mut sink = BitSink::new();
        sink.defer();
        sink.defer();
        sink.commit(0);
        sink.commit(1);
        sink.defer();
        sink.commit(1);
        assert_eq!(sink.into_bits(), vec![0, 1, 1, 1, 1, 0]);
    }
}
