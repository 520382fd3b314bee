pub mod bitstream;
pub mod categorize;
pub mod dct4;
pub mod decoder;
pub mod encoder;
pub mod envelope;
pub mod fixedpoint;
pub mod mlt;
pub mod mode;
pub mod sqvh;
pub mod tables;
pub mod wav;

use thiserror::Error;

use decoder::DecoderState;
use encoder::EncoderState;
pub use mode::{Mode, ModeError};

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Mode(#[from] ModeError),
    /// Input is not exactly one frame of samples.
    #[error("input must be exactly {expected} samples, got {got}")]
    InputLength { expected: usize, got: usize },
}

/// Errors that can occur during decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Mode(#[from] ModeError),
    /// Coded frame is not exactly one frame of bytes.
    #[error("frame must be exactly {expected} bytes, got {got}")]
    FrameLength { expected: usize, got: usize },
    /// Output buffer is not exactly one frame of samples.
    #[error("output must be exactly {expected} samples, got {got}")]
    OutputLength { expected: usize, got: usize },
}

/// Wideband transform audio encoder.
///
/// Consumes 20 ms frames of 16-bit PCM (320 samples at 16 kHz, 640 at
/// 32 kHz) and produces fixed-size coded frames of
/// `frame_bytes()` bytes each.
pub struct G7221Encoder {
    state: EncoderState,
}

impl G7221Encoder {
    /// Create an encoder. Sample rate is 16000 or 32000 Hz; bit rate
    /// is any multiple of 400 in 16000..=32000 bps (16 kHz) or
    /// 24000..=48000 bps (32 kHz).
    pub fn new(sample_rate: u32, bit_rate: u32) -> Result<Self, EncodeError> {
        let mode = Mode::new(sample_rate, bit_rate)?;
        Ok(G7221Encoder {
            state: EncoderState::new(mode),
        })
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }

    /// PCM samples consumed per frame.
    pub fn samples_per_frame(&self) -> usize {
        self.state.mode.samples_per_frame()
    }

    /// Coded bytes produced per frame.
    pub fn frame_bytes(&self) -> usize {
        self.state.mode.frame_bytes()
    }

    /// Encode one frame. `input` must hold exactly
    /// `samples_per_frame()` samples.
    pub fn encode_frame(&mut self, input: &[i16]) -> Result<Vec<u8>, EncodeError> {
        let needed = self.samples_per_frame();
        if input.len() != needed {
            return Err(EncodeError::InputLength {
                expected: needed,
                got: input.len(),
            });
        }
        Ok(self.state.encode_frame(input))
    }
}

/// Wideband transform audio decoder.
///
/// Decodes fixed-size coded frames back to 20 ms of 16-bit PCM.
/// Lost frames (`None`) and frames that fail the consistency checks
/// are concealed: the previous frame's spectrum is replayed once,
/// after which the decoder mutes until good data returns.
pub struct G7221Decoder {
    state: DecoderState,
}

impl G7221Decoder {
    /// Create a decoder. Accepts the same rates as [`G7221Encoder`].
    pub fn new(sample_rate: u32, bit_rate: u32) -> Result<Self, DecodeError> {
        let mode = Mode::new(sample_rate, bit_rate)?;
        Ok(G7221Decoder {
            state: DecoderState::new(mode),
        })
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }

    /// PCM samples produced per frame.
    pub fn samples_per_frame(&self) -> usize {
        self.state.mode.samples_per_frame()
    }

    /// Coded bytes expected per frame.
    pub fn frame_bytes(&self) -> usize {
        self.state.mode.frame_bytes()
    }

    /// Decode one frame into `output`. Pass `None` for a lost frame.
    /// Returns true when the output came from concealment.
    ///
    /// A present frame must be exactly `frame_bytes()` long; both
    /// length checks reject before any decoder state is touched.
    /// Damage inside a well-sized frame is never an error: it conceals
    /// like a loss.
    pub fn decode_frame(
        &mut self,
        frame: Option<&[u8]>,
        output: &mut [i16],
    ) -> Result<bool, DecodeError> {
        if let Some(bytes) = frame {
            let needed = self.frame_bytes();
            if bytes.len() != needed {
                return Err(DecodeError::FrameLength {
                    expected: needed,
                    got: bytes.len(),
                });
            }
        }
        let needed = self.samples_per_frame();
        if output.len() != needed {
            return Err(DecodeError::OutputLength {
                expected: needed,
                got: output.len(),
            });
        }
        Ok(self.state.decode_frame(frame, output))
    }

    /// Produce one frame of concealment output without a coded frame,
    /// as if a lost frame had been passed to
    /// [`decode_frame`](Self::decode_frame).
    pub fn recover_frame(&mut self) -> Vec<i16> {
        let mut pcm = vec![0i16; self.samples_per_frame()];
        self.state.decode_frame(None, &mut pcm);
        pcm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine_frame(frame_no: usize, n: usize, sample_rate: u32, freq: f64, amp: f64) -> Vec<i16> {
        (0..n)
            .map(|i| {
                let t = (frame_no * n + i) as f64 / sample_rate as f64;
                (amp * (2.0 * std::f64::consts::PI * freq * t).sin()) as i16
            })
            .collect()
    }

    /// Signal-to-noise ratio of the decode against the one-frame
    /// delayed input, skipping the warm-up frame.
    fn roundtrip_snr(sample_rate: u32, bit_rate: u32) -> f64 {
        let mut enc = G7221Encoder::new(sample_rate, bit_rate).unwrap();
        let mut dec = G7221Decoder::new(sample_rate, bit_rate).unwrap();
        let n = enc.samples_per_frame();
        let frames = 10;
        let mut inputs = Vec::new();
        let mut outputs = Vec::new();
        for frame_no in 0..frames {
            let pcm = sine_frame(frame_no, n, sample_rate, 440.0, 8000.0);
            let coded = enc.encode_frame(&pcm).unwrap();
            assert_eq!(coded.len(), enc.frame_bytes());
            let mut out = vec![0i16; n];
            let concealed = dec.decode_frame(Some(&coded), &mut out).unwrap();
            assert!(!concealed, "good frame {} concealed", frame_no);
            inputs.push(pcm);
            outputs.push(out);
        }
        let mut signal = 0.0f64;
        let mut noise = 0.0f64;
        for frame_no in 1..frames - 1 {
            for i in 0..n {
                let s = inputs[frame_no][i] as f64;
                let r = outputs[frame_no + 1][i] as f64;
                signal += s * s;
                noise += (s - r) * (s - r);
            }
        }
        10.0 * (signal / noise).log10()
    }

    #[test]
    fn test_roundtrip_sine_wideband() {
        let snr = roundtrip_snr(16000, 24000);
        assert!(snr > 15.0, "16 kHz roundtrip SNR {:.1} dB", snr);
    }

    #[test]
    fn test_roundtrip_sine_ultra_wideband() {
        let snr = roundtrip_snr(32000, 48000);
        assert!(snr > 15.0, "32 kHz roundtrip SNR {:.1} dB", snr);
    }

    #[test]
    fn test_roundtrip_lowest_rates() {
        assert!(roundtrip_snr(16000, 16000) > 12.0);
        assert!(roundtrip_snr(32000, 24000) > 12.0);
    }

    #[test]
    fn test_every_rate_decodes_own_output() {
        for &(sample_rate, lo, hi) in &[(16000u32, 16000u32, 32000u32), (32000, 24000, 48000)] {
            for bit_rate in (lo..=hi).step_by(2000) {
                let mut enc = G7221Encoder::new(sample_rate, bit_rate).unwrap();
                let mut dec = G7221Decoder::new(sample_rate, bit_rate).unwrap();
                let n = enc.samples_per_frame();
                for frame_no in 0..3 {
                    let pcm = sine_frame(frame_no, n, sample_rate, 880.0, 6000.0);
                    let coded = enc.encode_frame(&pcm).unwrap();
                    let mut out = vec![0i16; n];
                    let concealed = dec.decode_frame(Some(&coded), &mut out).unwrap();
                    assert!(!concealed, "{} bps frame {}", bit_rate, frame_no);
                }
            }
        }
    }

    #[test]
    fn test_lost_frames_conceal_then_mute() {
        let mut enc = G7221Encoder::new(16000, 24000).unwrap();
        let mut dec = G7221Decoder::new(16000, 24000).unwrap();
        let mut out = [0i16; 320];
        for frame_no in 0..3 {
            let pcm = sine_frame(frame_no, 320, 16000, 440.0, 8000.0);
            let coded = enc.encode_frame(&pcm).unwrap();
            assert!(!dec.decode_frame(Some(&coded), &mut out).unwrap());
        }
        assert!(dec.decode_frame(None, &mut out).unwrap());
        assert!(out.iter().any(|&s| s.abs() > 1000));
        assert!(dec.decode_frame(None, &mut out).unwrap());
        assert!(out.iter().all(|&s| s == 0));
        // Recovery: the next good frame decodes normally again.
        let pcm = sine_frame(5, 320, 16000, 440.0, 8000.0);
        let coded = enc.encode_frame(&pcm).unwrap();
        assert!(!dec.decode_frame(Some(&coded), &mut out).unwrap());
    }

    #[test]
    fn test_rejects_invalid_modes() {
        assert!(matches!(
            G7221Encoder::new(44100, 24000),
            Err(EncodeError::Mode(ModeError::SampleRate(44100)))
        ));
        assert!(matches!(
            G7221Encoder::new(16000, 33000),
            Err(EncodeError::Mode(ModeError::BitRate { .. }))
        ));
        assert!(matches!(
            G7221Decoder::new(32000, 16000),
            Err(DecodeError::Mode(ModeError::BitRate { .. }))
        ));
    }

    #[test]
    fn test_length_contract_is_enforced() {
        let mut enc = G7221Encoder::new(16000, 24000).unwrap();
        assert!(matches!(
            enc.encode_frame(&[0i16; 100]),
            Err(EncodeError::InputLength { expected: 320, got: 100 })
        ));
        assert!(matches!(
            enc.encode_frame(&[0i16; 321]),
            Err(EncodeError::InputLength { expected: 320, got: 321 })
        ));

        let mut dec = G7221Decoder::new(16000, 24000).unwrap();
        let mut short = [0i16; 100];
        assert!(matches!(
            dec.decode_frame(None, &mut short),
            Err(DecodeError::OutputLength { expected: 320, got: 100 })
        ));
        let mut out = [0i16; 320];
        assert!(matches!(
            dec.decode_frame(Some(&[0u8; 10]), &mut out),
            Err(DecodeError::FrameLength { expected: 60, got: 10 })
        ));

        // A rejected call must leave the instance usable.
        let coded = enc.encode_frame(&[0i16; 320]).unwrap();
        assert!(!dec.decode_frame(Some(&coded), &mut out).unwrap());
        assert!(out.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_damaged_frames_conceal_without_error() {
        let mut enc = G7221Encoder::new(16000, 24000).unwrap();
        let mut dec = G7221Decoder::new(16000, 24000).unwrap();
        let mut out = [0i16; 320];
        let coded = enc.encode_frame(&[0i16; 320]).unwrap();
        assert!(!dec.decode_frame(Some(&coded), &mut out).unwrap());

        // Damage inside a well-sized frame: concealed, not an error.
        let mut damaged = coded.clone();
        let len = damaged.len();
        damaged[len - 1] = 0;
        damaged[len - 2] = 0;
        assert!(dec.decode_frame(Some(&damaged), &mut out).unwrap());
    }

    #[test]
    fn test_recover_frame_matches_lost_frame() {
        let mut a = G7221Decoder::new(16000, 24000).unwrap();
        let mut b = G7221Decoder::new(16000, 24000).unwrap();
        let recovered = a.recover_frame();
        let mut lost = [0i16; 320];
        assert!(b.decode_frame(None, &mut lost).unwrap());
        assert_eq!(recovered, lost);
        assert!(recovered.iter().any(|&s| s != 0));

        // The replay spectrum is spent: a second recovery is silence.
        assert!(a.recover_frame().iter().all(|&s| s == 0));
    }
}
