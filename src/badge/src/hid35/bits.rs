//! Fixed-width bit field reader for card values.

/// Reads consecutive bit fields out of a fixed-width value, most significant
/// bit first. Position 0 is the leftmost bit of the `width`-bit frame.
pub(crate) struct FieldReader {
    value: u64,
    width: usize,
    pub(crate) bit_offset: usize,
}

impl FieldReader {
    pub fn new(value: u64, width: usize) -> Self {
        Self {
            value,
            width,
            bit_offset: 0,
        }
    }

    /// Read N bits as a u64 value (MSB-first)
    /// Bits are assembled with the first bit read = MSB of the result
    pub fn read_bits(&mut self, count: usize) -> Option<u64> {
        if count > 64 || count > self.remaining_bits() {
            return None;
        }

        let mut result = 0u64;
        for _ in 0..count {
            let shift = self.width - 1 - self.bit_offset;
            let bit = (self.value >> shift) & 1;
            result = (result << 1) | bit;
            self.bit_offset += 1;
        }

        Some(result)
    }

    /// Returns the number of bits remaining in the frame
    pub fn remaining_bits(&self) -> usize {
        self.width.saturating_sub(self.bit_offset)
    }
}

/// Render the low `width` bits of `value` as a zero-padded binary string
pub(crate) fn bit_string(value: u64, width: usize) -> String {
    format!("{:0width$b}", value, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fields_in_order() {
        let mut reader = FieldReader::new(0b1_0110_01, 7);
        assert_eq!(reader.read_bits(1), Some(0b1));
        assert_eq!(reader.read_bits(4), Some(0b0110));
        assert_eq!(reader.read_bits(2), Some(0b01));
        assert_eq!(reader.remaining_bits(), 0);
    }

    #[test]
    fn test_read_past_end() {
        let mut reader = FieldReader::new(0xFF, 8);
        assert_eq!(reader.read_bits(6), Some(0b111111));
        assert_eq!(reader.read_bits(3), None);
        // A failed read leaves the offset untouched
        assert_eq!(reader.bit_offset, 6);
        assert_eq!(reader.read_bits(2), Some(0b11));
    }

    #[test]
    fn test_leading_zeros_are_part_of_frame() {
        let mut reader = FieldReader::new(1, 35);
        assert_eq!(reader.read_bits(34), Some(0));
        assert_eq!(reader.read_bits(1), Some(1));
    }

    #[test]
    fn test_bit_string_padding() {
        assert_eq!(bit_string(5, 8), "00000101");
        assert_eq!(bit_string(0, 3), "000");
        assert_eq!(bit_string(0b1011, 4), "1011");
    }
}
