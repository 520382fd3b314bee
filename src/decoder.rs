/// Frame decoder.
///
/// Implements the decode pipeline: envelope decode -> categorization ->
/// vector decode -> noise fill -> inverse MLT. Lost or corrupt frames
/// are concealed by replaying the previous frame's spectrum once, then
/// muting.

use log::debug;

use crate::bitstream::BitstreamReader;
use crate::categorize::categorize;
use crate::envelope::{decode_envelope, REGION_POWER_MAX, REGION_POWER_MIN};
use crate::fixedpoint::*;
use crate::mlt::mlt_inverse;
use crate::mode::{Mode, MAX_DCT_LENGTH, MAX_REGIONS, REGION_SIZE};
use crate::sqvh::reconstruct_magnitude;
use crate::tables::*;

/// Average region power index the synthesis shift steers toward.
const MAG_SHIFT_TARGET: i16 = 18;
/// Highest deviation index a frame with a legal envelope can reach;
/// the shift limit below enforces it.
const STDDEV_INDEX_CEILING: i16 = 25;
/// Last entry of `REGION_STDDEV_TABLE`.
const STDDEV_INDEX_MAX: i16 = 29;
/// Comfort-noise amplitude armed into the spectrum history at init.
const COMFORT_NOISE_LEVEL: i16 = 20;

/// Decoder state persisting across frames.
pub struct DecoderState {
    pub mode: Mode,
    pub prng_state: [i16; 4],
    pub mlt_history: [i16; MAX_DCT_LENGTH / 2],
    pub old_spectrum: [i16; MAX_DCT_LENGTH],
    pub old_mag_shift: i16,
}

impl DecoderState {
    pub fn new(mode: Mode) -> Self {
        let mut state = DecoderState {
            mode,
            prng_state: [1, 1, 1, 1],
            mlt_history: [0; MAX_DCT_LENGTH / 2],
            old_spectrum: [0; MAX_DCT_LENGTH],
            old_mag_shift: 0,
        };
        // Arm the replay spectrum with low-level comfort noise so a
        // loss before the first good frame plays quiet noise instead
        // of a hard mute.
        for base in (0..mode.num_valid_coefs).step_by(10) {
            let word = noise_prng(&mut state.prng_state);
            for p in 0..10 {
                state.old_spectrum[base + p] = if (word as u16 >> p) & 1 != 0 {
                    COMFORT_NOISE_LEVEL
                } else {
                    -COMFORT_NOISE_LEVEL
                };
            }
        }
        state
    }

    /// Decode one frame into `pcm` (`mode.samples_per_frame()` samples).
    /// `None` marks a lost frame. Returns true when the output came
    /// from concealment rather than the frame data.
    ///
    /// Frame length is policed by the caller; a short byte slice here
    /// simply runs the reader dry early, like a frame whose payload
    /// was truncated at the bit level.
    pub fn decode_frame(&mut self, frame: Option<&[u8]>, pcm: &mut [i16]) -> bool {
        let mode = self.mode;
        debug_assert_eq!(pcm.len(), mode.samples_per_frame());
        let bytes = match frame {
            Some(bytes) => bytes,
            None => return self.conceal(pcm),
        };

        let mut reader = BitstreamReader::new(bytes, mode.frame_bits);
        let indices = match decode_envelope(&mut reader, &mode) {
            Some(indices) => indices,
            None => return self.conceal(pcm),
        };
        let rate_control = match reader.read_bits(mode.rate_control_bits) {
            Some(value) => value as usize,
            None => return self.conceal(pcm),
        };

        let alloc = categorize(&indices, reader.remaining() as i32, &mode);
        let mut categories = alloc.categories;
        for &region in &alloc.balance[..rate_control] {
            categories[region] += 1;
        }

        // Synthesis shift from the envelope: steer the average power
        // toward the target, but never let the loudest region's
        // deviation index leave the table.
        let mut sum = 0i32;
        let mut max_index = REGION_POWER_MIN;
        for &v in &indices[..mode.num_regions] {
            sum += v as i32;
            if v > max_index {
                max_index = v;
            }
        }
        let n = mode.num_regions as i32;
        let average = (2 * sum + n).div_euclid(2 * n);
        let mut mag_shift = (MAG_SHIFT_TARGET as i32 - average) >> 1;
        let limit = (STDDEV_INDEX_CEILING as i32 - max_index as i32) >> 1;
        if mag_shift > limit {
            mag_shift = limit;
        }
        let mag_shift = mag_shift as i16;

        let mut stddev = [0i16; MAX_REGIONS];
        for region in 0..mode.num_regions {
            let t = (indices[region] as i32 + 2 * mag_shift as i32)
                .clamp(0, STDDEV_INDEX_MAX as i32);
            stddev[region] = REGION_STDDEV_TABLE[t as usize];
        }

        let mut coefs = [0i16; MAX_DCT_LENGTH];
        let mut underrun = false;
        for region in 0..mode.num_regions {
            let base = region * REGION_SIZE;
            let category = categories[region] as usize;
            if category < 7 && !underrun {
                let dim = VECTOR_DIMENSION[category] as usize;
                let radix = CATEGORY_MAX_BIN[category] + 1;
                'vectors: for v in 0..VECTORS_PER_REGION[category] as usize {
                    let mut index = match reader.read_tree(vector_tree(category)) {
                        Some(symbol) => symbol,
                        None => {
                            // Ran dry mid-region: this and every later
                            // region fall back to noise fill.
                            underrun = true;
                            for c in categories[region..mode.num_regions].iter_mut() {
                                *c = 7;
                            }
                            for c in coefs[base..base + REGION_SIZE].iter_mut() {
                                *c = 0;
                            }
                            break 'vectors;
                        }
                    };
                    for j in 0..dim {
                        let k = index % radix;
                        index /= radix;
                        if k > 0 {
                            let magnitude =
                                reconstruct_magnitude(category, k as usize, stddev[region]);
                            let sign = match reader.read_bit() {
                                Some(bit) => bit,
                                None => break,
                            };
                            coefs[base + v * dim + j] = if sign != 0 {
                                negate(magnitude)
                            } else {
                                magnitude
                            };
                        }
                    }
                }
            }

            let category = categories[region] as usize;
            if category >= 5 {
                let fill = noise_fill_level(&coefs[base..base + REGION_SIZE], category, stddev[region]);
                let mut word_even = noise_prng(&mut self.prng_state);
                let mut word_odd = noise_prng(&mut self.prng_state);
                for p in (0..REGION_SIZE).step_by(2) {
                    if category == 7 || coefs[base + p] == 0 {
                        coefs[base + p] = if word_even & 1 != 0 { fill } else { negate(fill) };
                    }
                    if category == 7 || coefs[base + p + 1] == 0 {
                        coefs[base + p + 1] = if word_odd & 1 != 0 { fill } else { negate(fill) };
                    }
                    word_even = shr(word_even, 1);
                    word_odd = shr(word_odd, 1);
                }
            }
        }

        // Legality: the unused tail must be all ones and every envelope
        // index in range, or the whole frame is discarded.
        let mut bad = false;
        while reader.remaining() > 0 {
            if reader.read_bit() == Some(0) {
                bad = true;
            }
        }
        for &v in &indices[..mode.num_regions] {
            if !(REGION_POWER_MIN..=REGION_POWER_MAX).contains(&v) {
                bad = true;
            }
        }
        if bad {
            debug!("corrupt frame, concealing");
            return self.conceal(pcm);
        }

        self.old_spectrum[..mode.dct_length].copy_from_slice(&coefs[..mode.dct_length]);
        self.old_mag_shift = mag_shift;
        mlt_inverse(
            &coefs,
            &mut self.mlt_history[..mode.dct_length / 2],
            mode.dct_length,
            mode.inverse_gain_shift - mag_shift,
            pcm,
        );
        false
    }

    /// Fill `pcm` for a lost or discarded frame: replay the previous
    /// spectrum once, after that go silent and clear the overlap so
    /// the next good frame starts from a clean synthesis state.
    fn conceal(&mut self, pcm: &mut [i16]) -> bool {
        let mode = self.mode;
        let length = mode.dct_length;
        if self.old_spectrum[..length].iter().all(|&v| v == 0) {
            self.mlt_history[..length / 2].fill(0);
            pcm.fill(0);
            return true;
        }
        debug!("concealing frame from previous spectrum");
        let coefs = self.old_spectrum;
        let mag_shift = self.old_mag_shift;
        self.old_spectrum[..length].fill(0);
        self.old_mag_shift = 0;
        mlt_inverse(
            &coefs,
            &mut self.mlt_history[..length / 2],
            length,
            mode.inverse_gain_shift - mag_shift,
            pcm,
        );
        true
    }
}

/// Noise amplitude for one region. Categories 5 and 6 scale by how
/// much of the region was actually coded; category 7 regions carry no
/// coefficient data at all and fill at a fixed fraction of the
/// deviation.
fn noise_fill_level(region_coefs: &[i16], category: usize, stddev: i16) -> i16 {
    match category {
        5 => {
            let mut count = 0usize;
            for &c in region_coefs {
                if c != 0 {
                    count += 1;
                    if l_sub(abs_s(c) as i32, l_shl(stddev as i32, 1)) > 0 {
                        count += 4;
                    }
                }
            }
            if count < REGION_SIZE {
                mult(stddev, NOISE_FILL_FACTOR_CAT5[count])
            } else {
                0
            }
        }
        6 => {
            let count = region_coefs.iter().filter(|&&c| c != 0).count();
            mult(stddev, NOISE_FILL_FACTOR_CAT6[count])
        }
        _ => mult(stddev, NOISE_FILL_FACTOR_CAT7),
    }
}

/// 4-tap PRNG for noise fill.
fn noise_prng(state: &mut [i16; 4]) -> i16 {
    let sum = l_add(state[0] as i32, state[3] as i32);
    let mut val = extract_l(sum);
    if (val as u16) & 0x8000 != 0 {
        val = add(val, 1);
    }
    state[3] = state[2];
    state[2] = state[1];
    state[1] = state[0];
    state[0] = val;
    val
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::EncoderState;

    #[test]
    fn test_noise_prng() {
        let mut state: [i16; 4] = [1, 1, 1, 1];
        let v1 = noise_prng(&mut state);
        assert_eq!(v1, 2);
        assert_eq!(state, [2, 1, 1, 1]);

        let mut seq = vec![v1];
        for _ in 0..7 {
            seq.push(noise_prng(&mut state));
        }
        assert_eq!(seq, [2, 3, 4, 5, 7, 10, 14, 19]);
    }

    #[test]
    fn test_fresh_decoder_conceals_with_comfort_noise() {
        let mode = Mode::new(16000, 24000).unwrap();
        let mut dec = DecoderState::new(mode);
        let mut pcm = [0i16; 320];
        assert!(dec.decode_frame(None, &mut pcm));
        assert_eq!(&pcm[..8], &[-1, -1, 0, -2, 3, 0, 0, 0]);
        let peak = pcm.iter().map(|&s| (s as i32).abs()).max().unwrap();
        assert_eq!(peak, 621);

        // The replay spectrum is spent: a second loss is exact silence.
        assert!(dec.decode_frame(None, &mut pcm));
        assert!(pcm.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_ultra_wideband_comfort_noise() {
        let mode = Mode::new(32000, 48000).unwrap();
        let mut dec = DecoderState::new(mode);
        let mut pcm = [0i16; 640];
        assert!(dec.decode_frame(None, &mut pcm));
        assert_eq!(&pcm[..8], &[0, -1, -2, 2, 0, -3, 4, 0]);
        let peak = pcm.iter().map(|&s| (s as i32).abs()).max().unwrap();
        assert_eq!(peak, 1005);
    }

    #[test]
    fn test_silence_frame_decodes_to_silence() {
        let mode = Mode::new(16000, 24000).unwrap();
        let mut enc = EncoderState::new(mode);
        let mut dec = DecoderState::new(mode);
        let frame = enc.encode_frame(&[0i16; 320]);
        let mut pcm = [1i16; 320];
        assert!(!dec.decode_frame(Some(&frame), &mut pcm));
        assert!(pcm.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_corrupt_tail_is_concealed() {
        // Zeroing stuffed tail bytes violates the all-ones fill rule.
        let mode = Mode::new(16000, 24000).unwrap();
        let mut enc = EncoderState::new(mode);
        let mut dec = DecoderState::new(mode);
        let mut frame = enc.encode_frame(&[0i16; 320]);
        let len = frame.len();
        frame[len - 1] = 0;
        frame[len - 2] = 0;
        let mut pcm = [0i16; 320];
        assert!(dec.decode_frame(Some(&frame), &mut pcm));
    }

    #[test]
    fn test_truncated_frame_is_concealed() {
        let mode = Mode::new(16000, 24000).unwrap();
        let mut dec = DecoderState::new(mode);
        let mut pcm = [0i16; 320];
        assert!(dec.decode_frame(Some(&[0xFFu8; 3]), &mut pcm));
    }

    #[test]
    fn test_truncated_payload_noise_fills() {
        // A payload cut after the envelope leaves the remaining
        // regions to noise fill at the envelope's (silent) level; the
        // frame still passes the consistency checks.
        let mode = Mode::new(16000, 24000).unwrap();
        let mut enc = EncoderState::new(mode);
        let mut dec = DecoderState::new(mode);
        let frame = enc.encode_frame(&[0i16; 320]);
        let mut pcm = [0i16; 320];
        assert!(!dec.decode_frame(Some(&frame[..10]), &mut pcm));
        let peak = pcm.iter().map(|&s| (s as i32).abs()).max().unwrap();
        assert!(peak <= 4, "quiet noise fill expected, peak {}", peak);
    }

    #[test]
    fn test_loss_replays_then_mutes() {
        let mode = Mode::new(16000, 24000).unwrap();
        let mut enc = EncoderState::new(mode);
        let mut dec = DecoderState::new(mode);
        let mut pcm = [0i16; 320];
        for frame_no in 0..3 {
            let mut tone = [0i16; 320];
            for (i, v) in tone.iter_mut().enumerate() {
                let t = (frame_no * 320 + i) as f64 / 16000.0;
                *v = (8000.0 * (2.0 * std::f64::consts::PI * 440.0 * t).sin()) as i16;
            }
            let frame = enc.encode_frame(&tone);
            assert!(!dec.decode_frame(Some(&frame), &mut pcm));
        }

        // First loss replays the held spectrum at full level.
        assert!(dec.decode_frame(None, &mut pcm));
        let peak = pcm.iter().map(|&s| (s as i32).abs()).max().unwrap();
        assert!(peak > 1000, "replayed frame peak {}", peak);

        // Second loss mutes completely.
        assert!(dec.decode_frame(None, &mut pcm));
        assert!(pcm.iter().all(|&s| s == 0));
    }
}
