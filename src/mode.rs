/// Operating mode: a validated sample-rate / bit-rate pair and the frame
/// geometry derived from it.

use log::debug;
use thiserror::Error;

/// Coefficients per power region.
pub const REGION_SIZE: usize = 20;
/// Region count of the widest mode, for sizing fixed buffers.
pub const MAX_REGIONS: usize = 28;
/// Transform length of the widest mode, for sizing fixed buffers.
pub const MAX_DCT_LENGTH: usize = 640;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("unsupported sample rate {0} Hz (expected 16000 or 32000)")]
    SampleRate(u32),
    #[error("unsupported bit rate {bit_rate} bps at {sample_rate} Hz \
             (expected a multiple of 400 in {min}..={max})")]
    BitRate {
        sample_rate: u32,
        bit_rate: u32,
        min: u32,
        max: u32,
    },
}

/// Frame geometry for one encoder or decoder instance.
///
/// 16 kHz frames span 320 samples over 14 regions; 32 kHz frames span
/// 640 samples over 28 regions. Both are 20 ms, so a frame carries
/// `bit_rate / 50` bits, always a whole number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub sample_rate: u32,
    pub bit_rate: u32,
    pub num_regions: usize,
    pub dct_length: usize,
    pub num_valid_coefs: usize,
    pub frame_bits: usize,
    pub rate_control_bits: usize,
    pub rate_control_possibilities: usize,
    pub stages: usize,
    pub inverse_gain_shift: i16,
}

impl Mode {
    pub fn new(sample_rate: u32, bit_rate: u32) -> Result<Self, ModeError> {
        let (min, max, num_regions, dct_length) = match sample_rate {
            16000 => (16000, 32000, 14, 320),
            32000 => (24000, 48000, 28, 640),
            other => return Err(ModeError::SampleRate(other)),
        };
        if bit_rate % 400 != 0 || bit_rate < min || bit_rate > max {
            return Err(ModeError::BitRate {
                sample_rate,
                bit_rate,
                min,
                max,
            });
        }
        let stages = if dct_length == 320 { 5 } else { 6 };
        let rate_control_bits = if num_regions == 14 { 4 } else { 5 };
        let mode = Mode {
            sample_rate,
            bit_rate,
            num_regions,
            dct_length,
            num_valid_coefs: num_regions * REGION_SIZE,
            frame_bits: (bit_rate / 50) as usize,
            rate_control_bits,
            rate_control_possibilities: 1 << rate_control_bits,
            stages,
            inverse_gain_shift: stages as i16 + 2,
        };
        debug!(
            "mode: {} Hz at {} bps, {} regions, {} bits per frame",
            sample_rate, bit_rate, num_regions, mode.frame_bits
        );
        Ok(mode)
    }

    /// PCM samples per 20 ms frame.
    pub fn samples_per_frame(&self) -> usize {
        self.dct_length
    }

    /// Encoded frame length in bytes.
    pub fn frame_bytes(&self) -> usize {
        self.frame_bits / 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wideband_geometry() {
        let m = Mode::new(16000, 24000).unwrap();
        assert_eq!(m.num_regions, 14);
        assert_eq!(m.dct_length, 320);
        assert_eq!(m.num_valid_coefs, 280);
        assert_eq!(m.frame_bits, 480);
        assert_eq!(m.frame_bytes(), 60);
        assert_eq!(m.rate_control_bits, 4);
        assert_eq!(m.inverse_gain_shift, 7);
    }

    #[test]
    fn test_ultra_wideband_geometry() {
        let m = Mode::new(32000, 48000).unwrap();
        assert_eq!(m.num_regions, 28);
        assert_eq!(m.dct_length, 640);
        assert_eq!(m.num_valid_coefs, 560);
        assert_eq!(m.frame_bits, 960);
        assert_eq!(m.rate_control_bits, 5);
        assert_eq!(m.rate_control_possibilities, 32);
        assert_eq!(m.inverse_gain_shift, 8);
    }

    #[test]
    fn test_rejects_bad_rates() {
        assert_eq!(Mode::new(44100, 24000), Err(ModeError::SampleRate(44100)));
        assert!(matches!(
            Mode::new(16000, 15600),
            Err(ModeError::BitRate { .. })
        ));
        assert!(matches!(
            Mode::new(16000, 24100),
            Err(ModeError::BitRate { .. })
        ));
        assert!(matches!(
            Mode::new(32000, 16000),
            Err(ModeError::BitRate { .. })
        ));
    }

    #[test]
    fn test_accepts_every_step_rate() {
        for bit_rate in (16000..=32000).step_by(400) {
            let m = Mode::new(16000, bit_rate).unwrap();
            assert_eq!(m.frame_bits % 8, 0, "frame not byte-aligned at {}", bit_rate);
        }
        for bit_rate in (24000..=48000).step_by(400) {
            let m = Mode::new(32000, bit_rate).unwrap();
            assert_eq!(m.frame_bits % 8, 0, "frame not byte-aligned at {}", bit_rate);
        }
    }
}
