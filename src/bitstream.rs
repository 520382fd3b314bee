/// Frame bitstream access.
///
/// Frames pack MSB-first into bytes. The writer owns the frame buffer,
/// enforces the frame's bit capacity (writes past it are truncated), and
/// 1-stuffs the tail on finish; the reader is a per-frame cursor that
/// reports exhaustion through `None` so callers can distinguish a short
/// read from coded data.

/// MSB-first bit packer with a 16-bit accumulator.
pub struct BitstreamWriter {
    bytes: Vec<u8>,
    accumulator: u16,
    bits_free: usize,
    capacity: usize,
    bits_written: usize,
}

impl BitstreamWriter {
    /// `capacity` is the frame length in bits, always a whole byte count.
    pub fn new(capacity: usize) -> Self {
        debug_assert_eq!(capacity % 8, 0);
        BitstreamWriter {
            bytes: Vec::with_capacity(capacity / 8),
            accumulator: 0,
            bits_free: 16,
            capacity,
            bits_written: 0,
        }
    }

    /// Bits accepted so far, truncation included.
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// Append the low `count` bits of `value`, most significant first.
    /// Bits beyond the frame capacity are dropped from the low end, so a
    /// field straddling the frame boundary keeps its leading bits.
    pub fn write_bits(&mut self, value: u16, count: usize) {
        debug_assert!(count <= 16);
        let keep = count.min(self.capacity - self.bits_written);
        if keep == 0 {
            return;
        }
        self.push_bits(value >> (count - keep), keep);
        self.bits_written += keep;
    }

    fn push_bits(&mut self, value: u16, count: usize) {
        let masked = if count == 16 {
            value
        } else {
            value & ((1u16 << count) - 1)
        };
        if count <= self.bits_free {
            self.bits_free -= count;
            self.accumulator |= masked << self.bits_free;
        } else {
            let spill = count - self.bits_free;
            self.accumulator |= masked >> spill;
            self.bits_free = 0;
            self.flush_accumulator();
            self.bits_free = 16 - spill;
            self.accumulator = masked << self.bits_free;
        }
        if self.bits_free == 0 {
            self.flush_accumulator();
            self.bits_free = 16;
            self.accumulator = 0;
        }
    }

    fn flush_accumulator(&mut self) {
        self.bytes.push((self.accumulator >> 8) as u8);
        self.bytes.push(self.accumulator as u8);
    }

    /// Fill the remainder of the frame with 1 bits and return the packed
    /// bytes, exactly `capacity / 8` of them.
    pub fn finish(mut self) -> Vec<u8> {
        while self.bits_written < self.capacity {
            let chunk = (self.capacity - self.bits_written).min(16);
            self.write_bits(0xFFFF, chunk);
        }
        let used = 16 - self.bits_free;
        debug_assert!(used == 0 || used == 8);
        if used == 8 {
            self.bytes.push((self.accumulator >> 8) as u8);
        }
        debug_assert_eq!(self.bytes.len() * 8, self.capacity);
        self.bytes
    }
}

/// MSB-first bit cursor over one coded frame.
///
/// Reads return `None` once the frame's bit budget is exhausted; the
/// decoder leans on that to detect truncated coefficient data.
pub struct BitstreamReader<'a> {
    data: &'a [u8],
    pos: usize,
    current_byte: u8,
    bits_in_byte: usize,
    bits_remaining: usize,
}

impl<'a> BitstreamReader<'a> {
    pub fn new(data: &'a [u8], frame_bits: usize) -> Self {
        BitstreamReader {
            data,
            pos: 0,
            current_byte: 0,
            bits_in_byte: 0,
            bits_remaining: frame_bits.min(data.len() * 8),
        }
    }

    /// Bits still available in this frame.
    pub fn remaining(&self) -> usize {
        self.bits_remaining
    }

    pub fn read_bit(&mut self) -> Option<u16> {
        if self.bits_remaining == 0 {
            return None;
        }
        if self.bits_in_byte == 0 {
            self.current_byte = self.data[self.pos];
            self.pos += 1;
            self.bits_in_byte = 8;
        }
        self.bits_in_byte -= 1;
        self.bits_remaining -= 1;
        Some(((self.current_byte >> self.bits_in_byte) & 1) as u16)
    }

    /// Read `count` bits (at most 16) as one right-justified value.
    pub fn read_bits(&mut self, count: usize) -> Option<u16> {
        debug_assert!(count <= 16);
        let mut value = 0u16;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()?;
        }
        Some(value)
    }

    /// Walk a Huffman decode tree: each node holds two successor entries,
    /// a non-positive entry is a leaf storing the negated symbol.
    pub fn read_tree(&mut self, tree: &[[i16; 2]]) -> Option<i16> {
        let mut node = 0usize;
        loop {
            let bit = self.read_bit()?;
            let entry = tree[node][bit as usize];
            if entry <= 0 {
                return Some(-entry);
            }
            node = entry as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_packs_msb_first() {
        let mut w = BitstreamWriter::new(16);
        w.write_bits(0b1010, 4);
        w.write_bits(0b0101, 4);
        w.write_bits(0b1100_0011, 8);
        assert_eq!(w.finish(), vec![0xA5, 0xC3]);
    }

    #[test]
    fn test_writer_stuffs_ones() {
        let mut w = BitstreamWriter::new(24);
        w.write_bits(0, 4);
        assert_eq!(w.finish(), vec![0x0F, 0xFF, 0xFF]);
    }

    #[test]
    fn test_writer_truncates_at_capacity() {
        let mut w = BitstreamWriter::new(8);
        w.write_bits(0xAB, 8);
        // Straddling write keeps its leading bits, the rest is dropped.
        w.write_bits(0xFFFF, 16);
        assert_eq!(w.bits_written(), 8);
        assert_eq!(w.finish(), vec![0xAB]);

        let mut w = BitstreamWriter::new(8);
        w.write_bits(0xA, 4);
        w.write_bits(0b1100_1111, 8);
        // Only the top four bits of the second field fit.
        assert_eq!(w.finish(), vec![0xAC]);
    }

    #[test]
    fn test_cross_word_write() {
        let mut w = BitstreamWriter::new(40);
        w.write_bits(0x5, 3);
        w.write_bits(0xFFFF, 16);
        w.write_bits(0, 13);
        w.write_bits(0xFF, 8);
        assert_eq!(w.finish(), vec![0xBF, 0xFF, 0xE0, 0x00, 0xFF]);
    }

    #[test]
    fn test_reader_matches_writer() {
        let mut w = BitstreamWriter::new(48);
        w.write_bits(0x12, 5);
        w.write_bits(0x3, 2);
        w.write_bits(0x1FFF, 13);
        w.write_bits(0xA5C3, 16);
        let bytes = w.finish();

        let mut r = BitstreamReader::new(&bytes, 48);
        assert_eq!(r.read_bits(5), Some(0x12));
        assert_eq!(r.read_bits(2), Some(0x3));
        assert_eq!(r.read_bits(13), Some(0x1FFF));
        assert_eq!(r.read_bits(16), Some(0xA5C3));
        // The stuffed tail reads back as 1s.
        assert_eq!(r.remaining(), 12);
        for _ in 0..12 {
            assert_eq!(r.read_bit(), Some(1));
        }
        assert_eq!(r.read_bit(), None);
    }

    #[test]
    fn test_reader_exhaustion() {
        let bytes = [0xFFu8; 4];
        let mut r = BitstreamReader::new(&bytes, 10);
        assert_eq!(r.read_bits(10), Some(0x3FF));
        assert_eq!(r.read_bit(), None);
        assert_eq!(r.read_bits(1), None);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_tree_walk() {
        // Symbols: 0 -> "0", 1 -> "10", 2 -> "11".
        let tree: [[i16; 2]; 2] = [[0, 1], [-1, -2]];
        let bytes = [0b0_10_11_0_10u8];
        let mut r = BitstreamReader::new(&bytes, 7);
        assert_eq!(r.read_tree(&tree), Some(0));
        assert_eq!(r.read_tree(&tree), Some(1));
        assert_eq!(r.read_tree(&tree), Some(2));
        assert_eq!(r.read_tree(&tree), Some(0));
        // One bit left is not enough to reach a leaf.
        assert_eq!(r.read_tree(&tree), None);
    }
}
