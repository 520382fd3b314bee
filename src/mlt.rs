/// Modulated lapped transform: analysis fold + DCT-IV on the way in,
/// DCT-IV + overlap-add on the way out.
///
/// The analysis side folds the current frame against the sine window and
/// keeps the windowed fold of the frame as history, so each call sees
/// half a frame of look-back; the synthesis side overlap-adds against
/// its own half-frame history. End-to-end delay is one frame.

use crate::dct4::dct_iv;
use crate::fixedpoint::*;
use crate::tables::{MLT_WINDOW_320, MLT_WINDOW_640};

/// Peak band the folded signal is normalized into before the transform.
const MAG_TARGET_LOW: i16 = 8192;
const MAG_TARGET_HIGH: i16 = 16383;
/// Shift applied to silent frames, also the largest upward shift.
const MAG_SHIFT_MAX: i16 = 9;

fn window(length: usize) -> &'static [i16] {
    match length {
        320 => &MLT_WINDOW_320,
        640 => &MLT_WINDOW_640,
        _ => unreachable!("no window for length {}", length),
    }
}

/// Forward transform of one frame.
///
/// `history` holds the windowed fold of the previous frame (half a frame
/// long) and is replaced with this frame's fold. Writes `length`
/// coefficients and returns the magnitude shift that was applied.
pub fn mlt_forward(pcm: &[i16], history: &mut [i16], length: usize, coefs: &mut [i16]) -> i16 {
    let half = length / 2;
    let win = window(length);
    debug_assert_eq!(history.len(), half);
    let mut folded = [0i16; 640];

    // First half: current frame folded against the window tail, negated.
    for n in 0..half {
        let mut acc = l_mult(win[length + half - 1 - n], pcm[half - 1 - n]);
        acc = l_mac(acc, win[length + half + n], pcm[half + n]);
        folded[n] = negate(itu_round(acc));
    }
    // Second half is the previous frame's fold.
    folded[half..length].copy_from_slice(history);
    // Refold the current frame for the next call.
    for j in 0..half {
        let mut acc = l_mult(win[j], pcm[j]);
        acc = l_mac(acc, negate(win[length - 1 - j]), pcm[length - 1 - j]);
        history[j] = itu_round(acc);
    }

    let mag_shift = compute_mag_shift(&folded[..length]);
    if mag_shift != 0 {
        for v in folded[..length].iter_mut() {
            *v = shl(*v, mag_shift);
        }
    }

    dct_iv(&mut folded, length);
    coefs[..length].copy_from_slice(&folded[..length]);
    mag_shift
}

/// Shift that lands the folded peak in [8192, 16383]. Silence gets the
/// maximum shift; hot input can shift negative.
fn compute_mag_shift(folded: &[i16]) -> i16 {
    let mut peak = 0i16;
    for &v in folded {
        let a = abs_s(v);
        if a > peak {
            peak = a;
        }
    }
    if peak == 0 {
        return MAG_SHIFT_MAX;
    }
    let mut shift = 0i16;
    let mut t = peak;
    while t < MAG_TARGET_LOW && shift < MAG_SHIFT_MAX {
        t <<= 1;
        shift += 1;
    }
    while t > MAG_TARGET_HIGH {
        t >>= 1;
        shift -= 1;
    }
    shift
}

/// Inverse transform of one frame.
///
/// `out_shift` is the synthesis gain (inverse-transform gain minus the
/// frame's magnitude shift) and is applied before overlap-add so the
/// stored history is already at output scale. `history` holds the first
/// half of the previous frame's shifted transform.
pub fn mlt_inverse(
    coefs: &[i16],
    history: &mut [i16],
    length: usize,
    out_shift: i16,
    pcm: &mut [i16],
) {
    let half = length / 2;
    let win = window(length);
    debug_assert_eq!(history.len(), half);
    let mut g = [0i16; 640];
    g[..length].copy_from_slice(&coefs[..length]);
    dct_iv(&mut g, length);
    if out_shift > 0 {
        for v in g[..length].iter_mut() {
            *v = shl(*v, out_shift);
        }
    } else if out_shift < 0 {
        for v in g[..length].iter_mut() {
            *v = shr(*v, -out_shift);
        }
    }

    for t in 0..length {
        let acc = if t < half {
            let acc = l_mult(win[t], g[half + t]);
            l_mac(acc, negate(win[length + t]), history[half - 1 - t])
        } else {
            let acc = l_mult(negate(win[t]), g[length + half - 1 - t]);
            l_mac(acc, negate(win[length + t]), history[t - half])
        };
        pcm[t] = itu_round(acc);
    }
    history.copy_from_slice(&g[..half]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_gets_max_shift() {
        let mut history = [0i16; 160];
        let mut coefs = [0i16; 320];
        let shift = mlt_forward(&[0i16; 320], &mut history, 320, &mut coefs);
        assert_eq!(shift, 9);
        assert!(coefs.iter().all(|&v| v == 0));
        assert!(history.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_constant_input_concentrates_dc() {
        let pcm = [1000i16; 320];
        let mut history = [0i16; 160];
        let mut coefs = [0i16; 320];
        let shift = mlt_forward(&pcm, &mut history, 320, &mut coefs);
        assert_eq!(shift, 3);
        assert_eq!(
            &coefs[..8],
            &[-10353, -4027, 1343, 1343, -806, -806, 575, 576]
        );
        assert_eq!(&history[..6], &[-998, -993, -988, -983, -978, -973]);

        // Once the history is warm the spectrum collapses to the DC
        // line; window rounding leaves at most one LSB in the other
        // bins, and only in a minority of them.
        let shift2 = mlt_forward(&pcm, &mut history, 320, &mut coefs);
        assert_eq!(shift2, 3);
        assert_eq!(coefs[0], -12650);
        assert!(coefs[1..].iter().all(|&v| (v as i32).abs() <= 1));
        let residue = coefs[1..].iter().filter(|&&v| v != 0).count();
        assert!(residue < 80, "{} bins carry rounding residue", residue);
    }

    #[test]
    fn test_forward_inverse_reconstructs() {
        let pcm = [1000i16; 320];
        let mut analysis_history = [0i16; 160];
        let mut synthesis_history = [0i16; 160];
        let mut coefs = [0i16; 320];
        let mut out = [0i16; 320];
        for frame in 0..3 {
            let shift = mlt_forward(&pcm, &mut analysis_history, 320, &mut coefs);
            mlt_inverse(&coefs, &mut synthesis_history, 320, 7 - shift, &mut out);
            if frame >= 1 {
                for (i, &v) in out.iter().enumerate() {
                    assert!(
                        (v as i32 - 1000).abs() <= 64,
                        "frame {} sample {} = {}",
                        frame,
                        i,
                        v
                    );
                }
            }
        }
    }
}
