//! Mono 16-bit PCM WAV reading and writing for the command-line tool.

use std::io::{self, Read, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

/// Errors raised while parsing a WAV file.
#[derive(Debug, Error)]
pub enum WavError {
    #[error("not a RIFF/WAVE file")]
    NotRiff,
    #[error("no fmt chunk before data chunk")]
    MissingFmt,
    #[error("no data chunk found")]
    MissingData,
    #[error("unsupported audio format {0}, only PCM is supported")]
    UnsupportedFormat(u16),
    #[error("unsupported sample width {0}, only 16-bit is supported")]
    UnsupportedWidth(u16),
    #[error("unsupported channel count {0}")]
    UnsupportedChannels(u16),
    #[error(transparent)]
    Io(#[from] io::Error),
}

struct FmtChunk {
    audio_format: u16,
    num_channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

/// Read a WAV file and return its samples and sample rate.
///
/// Only mono or stereo 16-bit PCM files are accepted. Stereo input is
/// downmixed to mono by averaging the channels. A data chunk shorter
/// than its declared size yields the samples that are present.
pub fn read_wav<R: Read>(reader: &mut R) -> Result<(Vec<i16>, u32), WavError> {
    let mut tag = [0u8; 4];
    reader.read_exact(&mut tag)?;
    if &tag != b"RIFF" {
        return Err(WavError::NotRiff);
    }
    let _riff_size = reader.read_u32::<LittleEndian>()?;
    reader.read_exact(&mut tag)?;
    if &tag != b"WAVE" {
        return Err(WavError::NotRiff);
    }

    let mut fmt: Option<FmtChunk> = None;
    loop {
        match reader.read_exact(&mut tag) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(WavError::MissingData)
            }
            Err(e) => return Err(e.into()),
        }
        let chunk_size = reader.read_u32::<LittleEndian>()? as u64;

        match &tag {
            b"fmt " => {
                let audio_format = reader.read_u16::<LittleEndian>()?;
                let num_channels = reader.read_u16::<LittleEndian>()?;
                let sample_rate = reader.read_u32::<LittleEndian>()?;
                let _byte_rate = reader.read_u32::<LittleEndian>()?;
                let _block_align = reader.read_u16::<LittleEndian>()?;
                let bits_per_sample = reader.read_u16::<LittleEndian>()?;
                fmt = Some(FmtChunk {
                    audio_format,
                    num_channels,
                    sample_rate,
                    bits_per_sample,
                });
                skip_bytes(reader, chunk_size.saturating_sub(16))?;
            }
            b"data" => {
                let fmt = fmt.ok_or(WavError::MissingFmt)?;
                if fmt.audio_format != 1 {
                    return Err(WavError::UnsupportedFormat(fmt.audio_format));
                }
                if fmt.bits_per_sample != 16 {
                    return Err(WavError::UnsupportedWidth(fmt.bits_per_sample));
                }
                let samples = match fmt.num_channels {
                    1 => read_mono(reader, chunk_size / 2)?,
                    2 => read_stereo(reader, chunk_size / 4)?,
                    n => return Err(WavError::UnsupportedChannels(n)),
                };
                return Ok((samples, fmt.sample_rate));
            }
            _ => {
                // Chunks are padded to an even byte count.
                skip_bytes(reader, chunk_size + (chunk_size & 1))?;
            }
        }
    }
}

fn skip_bytes<R: Read>(reader: &mut R, count: u64) -> io::Result<()> {
    io::copy(&mut reader.take(count), &mut io::sink())?;
    Ok(())
}

fn read_mono<R: Read>(reader: &mut R, count: u64) -> Result<Vec<i16>, WavError> {
    // A wild chunk size must not drive the allocation.
    let mut samples = Vec::with_capacity(count.min(1 << 20) as usize);
    for _ in 0..count {
        match reader.read_i16::<LittleEndian>() {
            Ok(s) => samples.push(s),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(samples)
}

fn read_stereo<R: Read>(reader: &mut R, count: u64) -> Result<Vec<i16>, WavError> {
    let mut samples = Vec::with_capacity(count.min(1 << 20) as usize);
    for _ in 0..count {
        let left = match reader.read_i16::<LittleEndian>() {
            Ok(s) => s as i32,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };
        let right = match reader.read_i16::<LittleEndian>() {
            Ok(s) => s as i32,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        };
        samples.push(((left + right) / 2) as i16);
    }
    Ok(samples)
}

/// Streaming WAV writer. The header is written up front with
/// placeholder sizes and patched when the writer is finished.
pub struct WavWriter<W: Write + Seek> {
    inner: W,
    sample_rate: u32,
    samples_written: u32,
}

impl<W: Write + Seek> WavWriter<W> {
    pub fn new(mut inner: W, sample_rate: u32) -> io::Result<Self> {
        inner.write_all(&[0u8; 44])?;
        Ok(WavWriter {
            inner,
            sample_rate,
            samples_written: 0,
        })
    }

    pub fn write_samples(&mut self, samples: &[i16]) -> io::Result<()> {
        for &s in samples {
            self.inner.write_i16::<LittleEndian>(s)?;
        }
        self.samples_written += samples.len() as u32;
        Ok(())
    }

    /// Patch the header with the final sizes and return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        let data_size = self.samples_written * 2;
        self.inner.seek(SeekFrom::Start(0))?;
        write_header(&mut self.inner, self.sample_rate, data_size)?;
        Ok(self.inner)
    }
}

fn write_header<W: Write>(w: &mut W, sample_rate: u32, data_size: u32) -> io::Result<()> {
    w.write_all(b"RIFF")?;
    w.write_u32::<LittleEndian>(36 + data_size)?;
    w.write_all(b"WAVE")?;
    w.write_all(b"fmt ")?;
    w.write_u32::<LittleEndian>(16)?;
    w.write_u16::<LittleEndian>(1)?; // PCM
    w.write_u16::<LittleEndian>(1)?; // mono
    w.write_u32::<LittleEndian>(sample_rate)?;
    w.write_u32::<LittleEndian>(sample_rate * 2)?;
    w.write_u16::<LittleEndian>(2)?; // block align
    w.write_u16::<LittleEndian>(16)?; // bits per sample
    w.write_all(b"data")?;
    w.write_u32::<LittleEndian>(data_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fmt_chunk(channels: u16, sample_rate: u32, bits: u16) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(b"fmt ");
        v.extend_from_slice(&16u32.to_le_bytes());
        v.extend_from_slice(&1u16.to_le_bytes());
        v.extend_from_slice(&channels.to_le_bytes());
        v.extend_from_slice(&sample_rate.to_le_bytes());
        let byte_rate = sample_rate * channels as u32 * (bits as u32 / 8);
        v.extend_from_slice(&byte_rate.to_le_bytes());
        v.extend_from_slice(&(channels * bits / 8).to_le_bytes());
        v.extend_from_slice(&bits.to_le_bytes());
        v
    }

    fn riff(body: &[u8]) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(b"RIFF");
        v.extend_from_slice(&(4 + body.len() as u32).to_le_bytes());
        v.extend_from_slice(b"WAVE");
        v.extend_from_slice(body);
        v
    }

    fn data_chunk(payload: &[u8]) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(b"data");
        v.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        v.extend_from_slice(payload);
        v
    }

    #[test]
    fn test_header_layout() {
        let mut w = WavWriter::new(Cursor::new(Vec::new()), 16000).unwrap();
        w.write_samples(&[0i16; 320]).unwrap();
        let buf = w.finish().unwrap().into_inner();

        assert_eq!(&buf[0..4], b"RIFF");
        let riff_size = u32::from_le_bytes(buf[4..8].try_into().unwrap());
        assert_eq!(riff_size, 36 + 640);
        assert_eq!(&buf[8..12], b"WAVE");
        assert_eq!(&buf[12..16], b"fmt ");
        let audio_fmt = u16::from_le_bytes(buf[20..22].try_into().unwrap());
        assert_eq!(audio_fmt, 1);
        let channels = u16::from_le_bytes(buf[22..24].try_into().unwrap());
        assert_eq!(channels, 1);
        let rate = u32::from_le_bytes(buf[24..28].try_into().unwrap());
        assert_eq!(rate, 16000);
        assert_eq!(&buf[36..40], b"data");
        let data_size = u32::from_le_bytes(buf[40..44].try_into().unwrap());
        assert_eq!(data_size, 640);
        assert_eq!(buf.len(), 44 + 640);
    }

    #[test]
    fn test_roundtrip() {
        let samples = [100i16, -200, 300, -400, 500];
        let mut w = WavWriter::new(Cursor::new(Vec::new()), 32000).unwrap();
        w.write_samples(&samples).unwrap();
        let buf = w.finish().unwrap().into_inner();

        let (read_back, rate) = read_wav(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(rate, 32000);
        assert_eq!(read_back, samples);
    }

    #[test]
    fn test_stereo_downmix() {
        let mut payload = Vec::new();
        for (l, r) in [(100i16, 300i16), (-500, -100), (32000, 32000)] {
            payload.extend_from_slice(&l.to_le_bytes());
            payload.extend_from_slice(&r.to_le_bytes());
        }
        let mut body = fmt_chunk(2, 16000, 16);
        body.extend_from_slice(&data_chunk(&payload));
        let bytes = riff(&body);

        let (samples, _) = read_wav(&mut Cursor::new(&bytes)).unwrap();
        assert_eq!(samples, [200, -300, 32000]);
    }

    #[test]
    fn test_skips_unknown_chunks() {
        let mut body = Vec::new();
        body.extend_from_slice(b"LIST");
        body.extend_from_slice(&3u32.to_le_bytes());
        body.extend_from_slice(&[1, 2, 3, 0]); // padded to even length
        body.extend_from_slice(&fmt_chunk(1, 16000, 16));
        body.extend_from_slice(&data_chunk(&42i16.to_le_bytes()));
        let bytes = riff(&body);

        let (samples, rate) = read_wav(&mut Cursor::new(&bytes)).unwrap();
        assert_eq!(rate, 16000);
        assert_eq!(samples, [42]);
    }

    #[test]
    fn test_truncated_data_chunk() {
        let mut body = fmt_chunk(1, 16000, 16);
        body.extend_from_slice(b"data");
        body.extend_from_slice(&100u32.to_le_bytes());
        body.extend_from_slice(&7i16.to_le_bytes());
        body.extend_from_slice(&(-7i16).to_le_bytes());
        let bytes = riff(&body);

        let (samples, _) = read_wav(&mut Cursor::new(&bytes)).unwrap();
        assert_eq!(samples, [7, -7]);
    }

    #[test]
    fn test_rejects_non_wav() {
        let bytes = b"RIFX\x00\x00\x00\x00WAVE";
        assert!(matches!(
            read_wav(&mut Cursor::new(&bytes[..])),
            Err(WavError::NotRiff)
        ));

        let mut body = fmt_chunk(1, 16000, 8);
        body.extend_from_slice(&data_chunk(&[0]));
        assert!(matches!(
            read_wav(&mut Cursor::new(&riff(&body))),
            Err(WavError::UnsupportedWidth(8))
        ));

        let mut body = fmt_chunk(4, 16000, 16);
        body.extend_from_slice(&data_chunk(&[0, 0]));
        assert!(matches!(
            read_wav(&mut Cursor::new(&riff(&body))),
            Err(WavError::UnsupportedChannels(4))
        ));
    }
}
