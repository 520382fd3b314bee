/// Staged fixed-point type-IV DCT.
///
/// One routine serves analysis and synthesis: the transform is its own
/// inverse up to a power-of-two gain (two passes scale the input by
/// 2^-(stages + 2)), which the MLT layer compensates with its gain
/// shift. Works on 320-point (5 stages) and 640-point (6 stages) frames.
///
/// Pipeline per call:
///   1. Butterfly stages: split each span into half-sums and
///      half-differences (each halved, alternate differences negated)
///      until spans reach the 10-point core.
///   2. 10x10 cosine core on each group of ten.
///   3. Rotation stages: recombine pairs of adjacent spans with Q15
///      (cos, sin) twiddles back up to the full length.

use crate::fixedpoint::*;
use crate::tables::*;

/// Span length at which butterflies stop and the cosine core runs.
const CORE_LENGTH: usize = 10;

/// In-place DCT-IV over the first `length` entries of `data`.
pub fn dct_iv(data: &mut [i16], length: usize) {
    debug_assert!(length == 320 || length == 640);
    let mut buf_a = [0i16; 640];
    let mut buf_b = [0i16; 640];
    buf_a[..length].copy_from_slice(&data[..length]);
    let (mut src, mut dst) = (&mut buf_a[..], &mut buf_b[..]);

    // ── Phase 1: butterfly decomposition down to 10-point spans ──────────
    let mut span = length;
    while span > CORE_LENGTH {
        butterfly_stage(src, dst, length, span);
        std::mem::swap(&mut src, &mut dst);
        span /= 2;
    }

    // ── Phase 2: 10-point cosine core on each group ──────────────────────
    core_transform(src, dst, length);
    std::mem::swap(&mut src, &mut dst);

    // ── Phase 3: rotation recombination back to full length ──────────────
    span = 2 * CORE_LENGTH;
    while span <= length {
        rotation_stage(src, dst, length, span);
        std::mem::swap(&mut src, &mut dst);
        span *= 2;
    }

    data[..length].copy_from_slice(&src[..length]);
}

/// One butterfly stage: each `span`-long block becomes half-sums in its
/// low half and half-differences (alternate entries negated) in its high
/// half.
fn butterfly_stage(src: &[i16], dst: &mut [i16], length: usize, span: usize) {
    let half = span / 2;
    let mut base = 0;
    while base < length {
        for m in 0..half {
            let a = src[base + 2 * m];
            let b = src[base + 2 * m + 1];
            let sum = extract_l(l_shr(l_add(a as i32, b as i32), 1));
            let mut diff = extract_l(l_shr(l_sub(a as i32, b as i32), 1));
            if m & 1 != 0 {
                diff = negate(diff);
            }
            dst[base + m] = sum;
            dst[base + half + m] = diff;
        }
        base += span;
    }
}

/// Dense 10x10 cosine multiply on each group of ten values.
fn core_transform(src: &[i16], dst: &mut [i16], length: usize) {
    let mut base = 0;
    while base < length {
        for k in 0..CORE_LENGTH {
            let mut acc = 0i32;
            for j in 0..CORE_LENGTH {
                acc = l_mac(acc, src[base + j], DCT_CORE_MATRIX[k + j * 10]);
            }
            dst[base + k] = itu_round(acc);
        }
        base += CORE_LENGTH;
    }
}

/// One rotation stage: merge the two halves of each `span`-long block
/// with (cos, sin) twiddles, writing the merged block outward-in.
fn rotation_stage(src: &[i16], dst: &mut [i16], length: usize, span: usize) {
    let half = span / 2;
    let table = rotation_table(span);
    let mut base = 0;
    while base < length {
        for n in 0..half {
            let c = table[2 * n];
            let s = table[2 * n + 1];
            let p = src[base + n];
            let q = src[base + half + (half - 1 - n)];
            dst[base + n] = itu_round(l_mac(l_mult(c, p), s, q));
            dst[base + span - 1 - n] = itu_round(l_mac(l_mult(c, q), negate(s), p));
        }
        base += span;
    }
}

fn rotation_table(span: usize) -> &'static [i16] {
    match span {
        20 => &ROTATION_COS_SIN_20,
        40 => &ROTATION_COS_SIN_40,
        80 => &ROTATION_COS_SIN_80,
        160 => &ROTATION_COS_SIN_160,
        320 => &ROTATION_COS_SIN_320,
        640 => &ROTATION_COS_SIN_640,
        _ => unreachable!("no rotation table for span {}", span),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_input_stays_zero() {
        for &n in &[320usize, 640] {
            let mut data = [0i16; 640];
            dct_iv(&mut data, n);
            assert!(data.iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_impulse_response_320() {
        let mut data = [0i16; 640];
        data[0] = 16384;
        dct_iv(&mut data, 320);
        // An impulse spreads into a near-flat spectrum.
        assert_eq!(
            &data[..12],
            &[114, 114, 115, 115, 113, 115, 115, 114, 114, 114, 114, 114]
        );
        let energy: i32 = data[..320].iter().map(|&v| (v as i32).abs()).sum();
        assert_eq!(energy, 23333);
    }

    #[test]
    fn test_impulse_response_640() {
        let mut data = [0i16; 640];
        data[3] = -12000;
        dct_iv(&mut data, 640);
        assert_eq!(&data[..8], &[-42, -42, -42, -42, -41, -42, -42, -41]);
        let energy: i32 = data[..640].iter().map(|&v| (v as i32).abs()).sum();
        assert_eq!(energy, 17240);
    }

    #[test]
    fn test_double_transform_scales_down() {
        // Two passes reproduce the input at 2^-(stages + 2) gain, here
        // 2^-7 for the 320-point frame.
        let mut data = [0i16; 640];
        for (i, v) in data[..320].iter_mut().enumerate() {
            *v = ((i as i16) % 97) * 256 - 12000;
        }
        let reference: Vec<i16> = data[..320].to_vec();
        dct_iv(&mut data, 320);
        dct_iv(&mut data, 320);
        for (i, (&got, &want)) in data[..320].iter().zip(reference.iter()).enumerate() {
            let scaled = want >> 7;
            assert!(
                (got as i32 - scaled as i32).abs() <= 4,
                "bin {}: {} vs {} (input {})",
                i,
                got,
                scaled,
                want
            );
        }
    }
}
