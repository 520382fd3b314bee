/// Scalar-quantized vector Huffman coding of region coefficients.
///
/// Each region quantizes its 20 coefficient magnitudes into small bins
/// driven by the region's quantization-domain index, groups the bins
/// into vectors (dimension 2..5 by category), and codes each vector's
/// mixed-radix combined index with the category's Huffman codebook, one
/// sign bit trailing per nonzero bin. The decoder-side magnitude
/// reconstruction lives here too so both directions share the centroid
/// scaling.

use crate::bitstream::BitstreamWriter;
use crate::fixedpoint::*;
use crate::mode::REGION_SIZE;
use crate::tables::*;

/// Quantization-domain ceiling; regions above it halve their
/// coefficients until the index fits.
pub const QUANT_INDEX_CEILING: i16 = 49;
/// Q15 factor of 1/sqrt(2) applied at odd quantization indices.
const ODD_STEP_Q15: i16 = 23170;

/// Quantize one magnitude into a bin for `category` at quantization
/// index `quant_index`.
pub fn quantize_bin(magnitude: i16, category: usize, quant_index: i16) -> i16 {
    let mut a = magnitude;
    if quant_index & 1 != 0 {
        a = mult(a, ODD_STEP_Q15);
    }
    let acc = l_mult0(a, STEP_INVERSE_TABLE[category]);
    let shift = 13 + (quant_index >> 1);
    let bin = if shift <= 0 {
        l_shl(acc, -shift)
    } else {
        l_shr(l_add(acc, l_shl(1, shift - 1)), shift)
    };
    let max_bin = CATEGORY_MAX_BIN[category] as i32;
    if bin > max_bin {
        max_bin as i16
    } else {
        bin as i16
    }
}

/// Quantize a region's coefficients into `bins`, resolving bin patterns
/// the codebook cannot express by walking the largest component down.
/// Returns the exact bit cost of coding the region (codes + sign bits).
pub fn quantize_region(coefs: &[i16], quant_index: i16, category: usize, bins: &mut [i16]) -> i32 {
    debug_assert!(category < 7);
    let radix = CATEGORY_MAX_BIN[category] as usize + 1;
    let dim = VECTOR_DIMENSION[category] as usize;
    let (_, widths) = vector_codes(category);

    for (bin, &c) in bins.iter_mut().zip(coefs.iter()).take(REGION_SIZE) {
        *bin = quantize_bin(abs_s(c), category, quant_index);
    }

    let mut bits = 0i32;
    for v in 0..VECTORS_PER_REGION[category] as usize {
        let vector = &mut bins[v * dim..(v + 1) * dim];
        let index = loop {
            let index = combined_index(vector, radix);
            if widths[index] > 0 {
                break index;
            }
            let mut largest = 0;
            for t in 1..dim {
                if vector[t] > vector[largest] {
                    largest = t;
                }
            }
            vector[largest] -= 1;
        };
        bits += widths[index] as i32;
        bits += vector.iter().filter(|&&k| k > 0).count() as i32;
    }
    bits
}

/// Emit a quantized region: each vector's Huffman code, then one sign
/// bit (1 = negative) per nonzero bin.
pub fn encode_region(
    writer: &mut BitstreamWriter,
    coefs: &[i16],
    bins: &[i16],
    category: usize,
) {
    debug_assert!(category < 7);
    let radix = CATEGORY_MAX_BIN[category] as usize + 1;
    let dim = VECTOR_DIMENSION[category] as usize;
    let (codes, widths) = vector_codes(category);

    for v in 0..VECTORS_PER_REGION[category] as usize {
        let vector = &bins[v * dim..(v + 1) * dim];
        let index = combined_index(vector, radix);
        writer.write_bits(codes[index] as u16, widths[index] as usize);
        for (j, &k) in vector.iter().enumerate() {
            if k > 0 {
                let negative = coefs[v * dim + j] < 0;
                writer.write_bits(negative as u16, 1);
            }
        }
    }
}

/// Mixed-radix combined index of one bin vector.
fn combined_index(vector: &[i16], radix: usize) -> usize {
    let mut index = 0usize;
    let mut scale = 1usize;
    for &k in vector {
        index += k as usize * scale;
        scale *= radix;
    }
    index
}

/// Decoder-side magnitude for bin `k`: centroid scaled by the region's
/// standard deviation, rounded out of Q12.
pub fn reconstruct_magnitude(category: usize, k: usize, stddev: i16) -> i16 {
    let acc = l_mult0(QUANT_CENTROID_TABLE[category][k], stddev);
    extract_l(l_shr(l_add(acc, 2048), 12))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitstream::BitstreamReader;

    #[test]
    fn test_quantize_bin_known_values() {
        assert_eq!(quantize_bin(7000, 0, 10), 13);
        assert_eq!(quantize_bin(7000, 2, 10), 6);
        assert_eq!(quantize_bin(4500, 3, 13), 4);
        assert_eq!(quantize_bin(123, 1, 2), 9);
        assert_eq!(quantize_bin(20000, 0, 25), 10);
        assert_eq!(quantize_bin(0, 0, 10), 0);
    }

    #[test]
    fn test_region_roundtrip_all_categories() {
        let coefs: [i16; REGION_SIZE] = [
            900, -750, 620, 0, -340, 210, 0, 0, 180, -90, 60, 0, -45, 30, 0, 15, -10, 5, 0, -2,
        ];
        let quant_index = 12;
        for category in 0..7usize {
            let mut bins = [0i16; REGION_SIZE];
            let bits = quantize_region(&coefs, quant_index, category, &mut bins);

            let mut writer = BitstreamWriter::new(960);
            encode_region(&mut writer, &coefs, &bins, category);
            assert_eq!(writer.bits_written() as i32, bits, "category {}", category);

            let frame = writer.finish();
            let mut reader = BitstreamReader::new(&frame, 960);
            let radix = CATEGORY_MAX_BIN[category] as usize + 1;
            let dim = VECTOR_DIMENSION[category] as usize;
            for v in 0..VECTORS_PER_REGION[category] as usize {
                let mut index = reader.read_tree(vector_tree(category)).unwrap() as usize;
                for j in 0..dim {
                    let k = (index % radix) as i16;
                    index /= radix;
                    assert_eq!(
                        k,
                        bins[v * dim + j],
                        "category {} vector {} component {}",
                        category,
                        v,
                        j
                    );
                    if k > 0 {
                        let sign = reader.read_bit().unwrap();
                        assert_eq!(sign == 1, coefs[v * dim + j] < 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_uncodable_vectors_walk_down() {
        // A region of full-scale values quantizes to the top bin
        // everywhere; categories whose codebooks skip dense patterns
        // must still find a codable neighbor.
        let coefs = [32767i16; REGION_SIZE];
        for category in 0..7usize {
            let mut bins = [0i16; REGION_SIZE];
            let bits = quantize_region(&coefs, 0, category, &mut bins);
            assert!(bits > 0);
            let (_, widths) = vector_codes(category);
            let radix = CATEGORY_MAX_BIN[category] as usize + 1;
            let dim = VECTOR_DIMENSION[category] as usize;
            for v in 0..VECTORS_PER_REGION[category] as usize {
                let index = super::combined_index(&bins[v * dim..(v + 1) * dim], radix);
                assert!(widths[index] > 0, "category {} vector {} uncodable", category, v);
            }
        }
    }

    #[test]
    fn test_reconstruct_magnitude_scales_with_stddev() {
        assert_eq!(reconstruct_magnitude(0, 0, 1000), 0);
        assert_eq!(reconstruct_magnitude(2, 3, 100), 218);
        assert_eq!(reconstruct_magnitude(2, 3, 10000), 21799);
        // Oversized products wrap through the low half-word; the
        // deviations that produce them only arise from corrupt frames,
        // which the decoder conceals rather than renders.
        assert_eq!(reconstruct_magnitude(0, 13, 32767), 23723);
    }
}
