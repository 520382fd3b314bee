/// Region power envelope: per-region log-domain power indices and their
/// differential Huffman coding.
///
/// Region 0 travels absolute (5 bits, offset by 7); every later region
/// is coded as a Huffman symbol for its difference from the previous
/// one. Encode applies the smoothing floor and range clamps in place, so
/// the caller keeps working with exactly the values the decoder will
/// reconstruct.

use crate::bitstream::{BitstreamReader, BitstreamWriter};
use crate::fixedpoint::*;
use crate::mode::{Mode, MAX_REGIONS, REGION_SIZE};
use crate::tables::{ENVELOPE_DIFF_CODES, ENVELOPE_DIFF_TREE, ENVELOPE_DIFF_WIDTHS};

/// Legal range of an absolute region power index.
pub const REGION_POWER_MIN: i16 = -8;
pub const REGION_POWER_MAX: i16 = 31;
/// Bias added to a difference before Huffman coding (symbols 0..23).
const DIFF_OFFSET: i16 = 12;
/// Offset added to region 0's index for its 5-bit absolute field.
const FIRST_INDEX_OFFSET: i16 = 7;
/// Mantissa threshold above which the log2 exponent rounds up.
const MANTISSA_ROUND_UP: i16 = 28960;

/// Huffman section for the difference into `region`: sections exist for
/// regions 1..=13, later regions reuse the last one.
fn diff_section(region: usize) -> usize {
    region.min(13) - 1
}

/// Compute the power index of every region from the coefficients:
/// a log2-style exponent of the sum of squared quarter-scale values,
/// clamped to the legal range. Silent regions pin to the minimum.
pub fn region_power_indices(coefs: &[i16], mode: &Mode, indices: &mut [i16]) {
    for r in 0..mode.num_regions {
        let base = r * REGION_SIZE;
        let mut acc = 0i32;
        for j in 0..REGION_SIZE {
            let t = shr(coefs[base + j], 2);
            acc = l_mac0(acc, t, t);
        }
        if acc == 0 {
            indices[r] = REGION_POWER_MIN;
            continue;
        }
        let nrm = norm_l(acc);
        let mantissa = extract_h(l_shl(acc, nrm));
        let mut exponent = 30 - nrm;
        if mantissa >= MANTISSA_ROUND_UP {
            exponent += 1;
        }
        indices[r] = exponent.clamp(REGION_POWER_MIN, REGION_POWER_MAX);
    }
}

/// Write the envelope, mutating `indices` to the values actually coded.
/// Returns the number of bits written.
pub fn encode_envelope(indices: &mut [i16], mode: &Mode, writer: &mut BitstreamWriter) -> usize {
    let n = mode.num_regions;

    // Smoothing floor, applied backward: a region may sit at most
    // DIFF_OFFSET - 1 below its upper neighbor.
    for r in (0..n - 1).rev() {
        if indices[r] < indices[r + 1] - (DIFF_OFFSET - 1) {
            indices[r] = indices[r + 1] - (DIFF_OFFSET - 1);
        }
    }
    indices[0] = indices[0].clamp(1 - FIRST_INDEX_OFFSET, 31 - FIRST_INDEX_OFFSET);

    let mut bits = 5;
    writer.write_bits((indices[0] + FIRST_INDEX_OFFSET) as u16, 5);
    for r in 1..n {
        let mut diff = indices[r] - indices[r - 1];
        if diff < -DIFF_OFFSET {
            diff = -DIFF_OFFSET;
            indices[r] = indices[r - 1] + diff;
        }
        let section = diff_section(r) * 24;
        let symbol = (diff + DIFF_OFFSET) as usize;
        debug_assert!(symbol < 24);
        let width = ENVELOPE_DIFF_WIDTHS[section + symbol];
        writer.write_bits(ENVELOPE_DIFF_CODES[section + symbol] as u16, width as usize);
        bits += width as usize;
    }
    bits
}

/// Read the envelope back. Returns `None` only on bit exhaustion; out of
/// range values decode as-is and are the caller's frame-error check.
pub fn decode_envelope(reader: &mut BitstreamReader, mode: &Mode) -> Option<[i16; MAX_REGIONS]> {
    let mut indices = [0i16; MAX_REGIONS];
    indices[0] = reader.read_bits(5)? as i16 - FIRST_INDEX_OFFSET;
    for r in 1..mode.num_regions {
        let section = diff_section(r) * 23;
        let symbol = reader.read_tree(&ENVELOPE_DIFF_TREE[section..section + 23])?;
        indices[r] = indices[r - 1] + symbol - DIFF_OFFSET;
    }
    Some(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wideband() -> Mode {
        Mode::new(16000, 24000).unwrap()
    }

    #[test]
    fn test_power_indices_from_energy() {
        let mode = wideband();
        let mut coefs = [0i16; 320];
        for i in 0..20 {
            coefs[i] = 1000 + 37 * i as i16;
        }
        for i in 20..40 {
            coefs[i] = -250;
        }
        for i in 40..60 {
            coefs[i] = 40;
        }
        let mut indices = [0i16; MAX_REGIONS];
        region_power_indices(&coefs, &mode, &mut indices);
        assert_eq!(&indices[..4], &[21, 16, 11, -8]);
        assert!(indices[3..14].iter().all(|&v| v == REGION_POWER_MIN));
    }

    #[test]
    fn test_envelope_roundtrip() {
        let mode = wideband();
        let mut indices = [0i16; MAX_REGIONS];
        indices[..14].copy_from_slice(&[21, 16, 12, 10, 9, 8, 8, 8, 7, 7, 7, 7, 7, 7]);
        let expected = indices;

        let mut writer = BitstreamWriter::new(mode.frame_bits);
        let bits = encode_envelope(&mut indices[..14], &mode, &mut writer);
        assert_eq!(bits, 42);
        assert_eq!(indices, expected, "well-formed envelope must code unchanged");

        let frame = writer.finish();
        let mut reader = BitstreamReader::new(&frame, mode.frame_bits);
        let decoded = decode_envelope(&mut reader, &mode).unwrap();
        assert_eq!(decoded[..14], expected[..14]);
        assert_eq!(reader.remaining(), mode.frame_bits - 42);
    }

    #[test]
    fn test_envelope_floor_and_clamps() {
        let mode = wideband();
        let mut indices = [0i16; MAX_REGIONS];
        indices[..14].copy_from_slice(&[30, 2, 25, -8, 14, 14, 0, 0, 0, 0, 0, 0, 0, 31]);

        let mut writer = BitstreamWriter::new(mode.frame_bits);
        encode_envelope(&mut indices[..14], &mode, &mut writer);
        let frame = writer.finish();
        let mut reader = BitstreamReader::new(&frame, mode.frame_bits);
        let decoded = decode_envelope(&mut reader, &mode).unwrap();

        // The floor pulls quiet regions up behind loud neighbors, region
        // 0 clamps into its 5-bit field, and steep falls saturate at the
        // widest coded difference.
        let want = [24, 14, 25, 13, 14, 14, 2, 0, 0, 0, 0, 9, 20, 31];
        assert_eq!(decoded[..14], want);
        assert_eq!(indices[..14], want, "encoder state must match the wire");
    }

    #[test]
    fn test_decode_stops_on_exhaustion() {
        let mode = wideband();
        let frame = [0u8; 2];
        let mut reader = BitstreamReader::new(&frame, 16);
        assert!(decode_envelope(&mut reader, &mode).is_none());
    }
}
