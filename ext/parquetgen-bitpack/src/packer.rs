//! Packing of 8-value groups at a fixed bit width.
//!
//! Values are laid out LSB-first: value `i` occupies bits
//! `i * width .. (i + 1) * width` of the group, counting from the least
//! significant bit of the first byte. Eight values of width `w` fill exactly
//! `w` bytes.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::config::BitPackerConfig;
use crate::error::{BitPackError, Result};

/// Values per packed group
pub const GROUP_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    /// Value bits move up into the byte
    Left(u32),
    /// Value bits move down into the byte
    Right(u32),
}

#[derive(Debug, Clone, Copy)]
struct Contribution {
    value: usize,
    /// Bits of the value that land in this byte
    mask: u64,
    shift: Shift,
}

/// Every value slice that lands in one output byte, in value order
#[derive(Debug, Clone, Default)]
struct ByteSpec {
    contributions: Vec<Contribution>,
}

impl ByteSpec {
    fn for_byte(width: u32, byte: u32) -> Self {
        let byte_lo = byte * 8;
        let byte_hi = byte_lo + 8;
        let contributions = (0..GROUP_SIZE as u32)
            .filter_map(|value| {
                let value_lo = value * width;
                let value_hi = value_lo + width;
                if value_lo >= byte_hi || value_hi <= byte_lo {
                    return None;
                }

                let lo = value_lo.max(byte_lo) - value_lo;
                let hi = value_hi.min(byte_hi) - value_lo;
                let shift = if value_lo >= byte_lo {
                    Shift::Left(value_lo - byte_lo)
                } else {
                    Shift::Right(byte_lo - value_lo)
                };
                Some(Contribution {
                    value: value as usize,
                    mask: low_bits(hi) & !low_bits(lo),
                    shift,
                })
            })
            .collect();
        Self { contributions }
    }

    fn pack(&self, values: &[u64; GROUP_SIZE]) -> u8 {
        self.contributions.iter().fold(0u8, |byte, c| {
            let bits = values[c.value] & c.mask;
            let moved = match c.shift {
                Shift::Left(s) => bits << s,
                Shift::Right(s) => bits >> s,
            };
            byte | moved as u8
        })
    }

    fn unpack_into(&self, byte: u8, values: &mut [u64; GROUP_SIZE]) {
        let byte = byte as u64;
        for c in &self.contributions {
            values[c.value] |= match c.shift {
                Shift::Left(s) => (byte >> s) & c.mask,
                Shift::Right(s) => (byte << s) & c.mask,
            };
        }
    }
}

fn low_bits(n: u32) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// Number of bits needed to store `max_value`; zero for zero.
///
/// A column whose maximum definition level is `d` stores its levels at
/// `bit_width(d)` bits.
pub fn bit_width(max_value: u64) -> u8 {
    (u64::BITS - max_value.leading_zeros()) as u8
}

/// Packs and unpacks groups of 8 integers at widths `1..=max_width`.
///
/// The per-byte layout for every width is computed once at construction,
/// after which the packer is immutable and can be shared across threads.
///
/// # Example
/// ```rust
/// use parquetgen_bitpack::BitPacker;
///
/// let packer = BitPacker::new(3)?;
/// let packed = packer.pack(3, &[0, 1, 2, 3, 4, 5, 6, 7])?;
/// assert_eq!(packed, vec![0x88, 0xC6, 0xFA]);
/// assert_eq!(packer.unpack(3, &packed)?, [0, 1, 2, 3, 4, 5, 6, 7]);
/// # Ok::<(), parquetgen_bitpack::BitPackError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitPacker {
    max_width: u8,
    /// `tables[w - 1]` holds one ByteSpec per output byte at width `w`
    tables: Vec<Vec<ByteSpec>>,
}

impl BitPacker {
    /// Build tables for every width in `1..=max_width`
    pub fn new(max_width: u8) -> Result<Self> {
        if max_width == 0 || max_width > 64 {
            return Err(BitPackError::InvalidMaxWidth(max_width));
        }

        let tables: Vec<Vec<ByteSpec>> = (1..=max_width as u32)
            .map(|width| (0..width).map(|byte| ByteSpec::for_byte(width, byte)).collect())
            .collect();

        debug!(max_width, "built bit packing tables");
        Ok(Self { max_width, tables })
    }

    pub fn from_config(config: &BitPackerConfig) -> Result<Self> {
        Self::new(config.max_width)
    }

    pub fn max_width(&self) -> u8 {
        self.max_width
    }

    fn table(&self, width: u8) -> Result<&[ByteSpec]> {
        if width == 0 || width > self.max_width {
            return Err(BitPackError::UnsupportedWidth {
                width,
                max_width: self.max_width,
            });
        }
        Ok(&self.tables[width as usize - 1])
    }

    /// Pack 8 values into exactly `width` bytes.
    ///
    /// Bits above `width` in each value are dropped.
    pub fn pack(&self, width: u8, values: &[u64; GROUP_SIZE]) -> Result<Vec<u8>> {
        let table = self.table(width)?;
        Ok(table.iter().map(|spec| spec.pack(values)).collect())
    }

    /// Unpack exactly `width` bytes into 8 zero-extended values
    pub fn unpack(&self, width: u8, packed: &[u8]) -> Result<[u64; GROUP_SIZE]> {
        let table = self.table(width)?;
        if packed.len() != table.len() {
            return Err(BitPackError::InvalidLength {
                expected: table.len(),
                actual: packed.len(),
            });
        }

        let mut values = [0u64; GROUP_SIZE];
        for (spec, &byte) in table.iter().zip(packed) {
            spec.unpack_into(byte, &mut values);
        }
        Ok(values)
    }

    /// Pack any number of values, zero-padding the last group to 8
    pub fn pack_all(&self, width: u8, values: &[u64]) -> Result<Bytes> {
        let table = self.table(width)?;
        let groups = values.len().div_ceil(GROUP_SIZE);
        let mut out = BytesMut::with_capacity(groups * table.len());

        for chunk in values.chunks(GROUP_SIZE) {
            let mut group = [0u64; GROUP_SIZE];
            group[..chunk.len()].copy_from_slice(chunk);
            for spec in table {
                out.put_u8(spec.pack(&group));
            }
        }
        Ok(out.freeze())
    }

    /// Inverse of [`BitPacker::pack_all`]; padding values are dropped
    pub fn unpack_all(&self, width: u8, packed: &[u8], count: usize) -> Result<Vec<u64>> {
        let group_bytes = self.table(width)?.len();
        let groups = count.div_ceil(GROUP_SIZE);
        // a count too large to address can never match a real buffer
        let expected = groups.checked_mul(group_bytes).unwrap_or(usize::MAX);
        if packed.len() != expected {
            return Err(BitPackError::InvalidLength {
                expected,
                actual: packed.len(),
            });
        }

        let mut values = Vec::with_capacity(groups * GROUP_SIZE);
        for chunk in packed.chunks(group_bytes) {
            values.extend_from_slice(&self.unpack(width, chunk)?);
        }
        values.truncate(count);
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_bits() {
        assert_eq!(low_bits(0), 0);
        assert_eq!(low_bits(3), 0b111);
        assert_eq!(low_bits(64), u64::MAX);
    }

    #[test]
    fn test_byte_spec_width_three() {
        // byte 0 holds values 0, 1 and the low two bits of value 2
        let spec = ByteSpec::for_byte(3, 0);
        let layout: Vec<_> = spec
            .contributions
            .iter()
            .map(|c| (c.value, c.mask, c.shift))
            .collect();
        assert_eq!(
            layout,
            vec![
                (0, 0b111, Shift::Left(0)),
                (1, 0b111, Shift::Left(3)),
                (2, 0b011, Shift::Left(6)),
            ]
        );

        let spec = ByteSpec::for_byte(3, 1);
        assert_eq!(spec.contributions[0].value, 2);
        assert_eq!(spec.contributions[0].mask, 0b100);
        assert_eq!(spec.contributions[0].shift, Shift::Right(2));
    }

    #[test]
    fn test_single_bit_lsb_first() {
        let packer = BitPacker::new(1).unwrap();
        let packed = packer.pack(1, &[1, 0, 1, 1, 0, 0, 1, 0]).unwrap();
        assert_eq!(packed, vec![0b0100_1101]);
    }

    #[test]
    fn test_full_width_is_a_copy() {
        let packer = BitPacker::new(64).unwrap();
        let values = [u64::MAX, 0, 1, 1 << 63, 42, 7, u64::MAX - 1, 12345];
        let packed = packer.pack(64, &values).unwrap();
        assert_eq!(packed.len(), 64);
        assert_eq!(&packed[..8], &u64::MAX.to_le_bytes());
        assert_eq!(&packed[16..24], &1u64.to_le_bytes());
        assert_eq!(packer.unpack(64, &packed).unwrap(), values);
    }

    #[test]
    fn test_bit_width() {
        assert_eq!(bit_width(0), 0);
        assert_eq!(bit_width(1), 1);
        assert_eq!(bit_width(7), 3);
        assert_eq!(bit_width(8), 4);
        assert_eq!(bit_width(u64::MAX), 64);
    }
}
