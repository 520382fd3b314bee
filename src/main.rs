use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use clap::{Parser, Subcommand};
use log::debug;
use thiserror::Error;

use g7221_codec::wav::{self, WavError, WavWriter};
use g7221_codec::{DecodeError, EncodeError, G7221Decoder, G7221Encoder, Mode, ModeError};

/// Stream header: magic, then sample rate and bit rate as u32 LE.
const MAGIC: &[u8; 4] = b"G721";
const HEADER_BYTES: u64 = 12;

#[derive(Parser)]
#[command(name = "g7221_codec", version, about = "G.722.1 wideband audio codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a WAV file into a .g721 stream.
    Encode {
        /// Input WAV file (16 kHz or 32 kHz, 16-bit PCM).
        input: PathBuf,
        /// Output .g721 stream.
        output: PathBuf,
        /// Bit rate in bits per second.
        #[arg(long, default_value_t = 24000)]
        bit_rate: u32,
    },
    /// Decode a .g721 stream back to a WAV file.
    Decode {
        /// Input .g721 stream.
        input: PathBuf,
        /// Output WAV file.
        output: PathBuf,
    },
    /// Print the header and frame layout of a .g721 stream.
    Info {
        /// Input .g721 stream.
        input: PathBuf,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Wav(#[from] WavError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Mode(#[from] ModeError),
    #[error("not a .g721 stream (bad magic)")]
    BadMagic,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            bit_rate,
        } => encode_file(&input, &output, bit_rate),
        Commands::Decode { input, output } => decode_file(&input, &output),
        Commands::Info { input } => info_file(&input),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn encode_file(input: &Path, output: &Path, bit_rate: u32) -> Result<(), CliError> {
    let (samples, sample_rate) = wav::read_wav(&mut File::open(input)?)?;
    eprintln!(
        "WAV: {} samples, {} Hz, {:.1} ms",
        samples.len(),
        sample_rate,
        samples.len() as f64 / sample_rate as f64 * 1000.0
    );

    let mut encoder = G7221Encoder::new(sample_rate, bit_rate)?;
    let samples_per_frame = encoder.samples_per_frame();
    let num_frames = samples.len() / samples_per_frame;
    let leftover = samples.len() % samples_per_frame;
    if leftover != 0 {
        debug!("dropping {} trailing samples short of a frame", leftover);
    }

    let mut out = BufWriter::new(File::create(output)?);
    out.write_all(MAGIC)?;
    out.write_u32::<LittleEndian>(sample_rate)?;
    out.write_u32::<LittleEndian>(bit_rate)?;

    for frame in samples.chunks_exact(samples_per_frame) {
        let coded = encoder.encode_frame(frame)?;
        out.write_all(&coded)?;
    }
    out.flush()?;

    eprintln!(
        "Encoded {} frames at {} bps ({} bytes/frame) to {}",
        num_frames,
        bit_rate,
        encoder.frame_bytes(),
        output.display()
    );
    Ok(())
}

fn decode_file(input: &Path, output: &Path) -> Result<(), CliError> {
    let mut stream = BufReader::new(File::open(input)?);
    let (sample_rate, bit_rate) = read_stream_header(&mut stream)?;
    eprintln!("Stream: {} Hz, {} bps", sample_rate, bit_rate);

    let mut decoder = G7221Decoder::new(sample_rate, bit_rate)?;
    let mut frame = vec![0u8; decoder.frame_bytes()];
    let mut pcm = vec![0i16; decoder.samples_per_frame()];

    let mut wav = WavWriter::new(BufWriter::new(File::create(output)?), sample_rate)?;
    let mut num_frames = 0usize;
    let mut concealed = 0usize;
    loop {
        // A partial trailing frame is dropped, not decoded.
        match stream.read_exact(&mut frame) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
        if decoder.decode_frame(Some(&frame), &mut pcm)? {
            concealed += 1;
        }
        wav.write_samples(&pcm)?;
        num_frames += 1;
    }
    wav.finish()?.flush()?;

    let total_samples = num_frames * pcm.len();
    eprintln!(
        "Decoded {} frames ({:.1} ms) to {}",
        num_frames,
        total_samples as f64 / sample_rate as f64 * 1000.0,
        output.display()
    );
    if concealed > 0 {
        eprintln!("{} damaged frames were concealed", concealed);
    }
    Ok(())
}

fn info_file(input: &Path) -> Result<(), CliError> {
    let mut stream = File::open(input)?;
    let (sample_rate, bit_rate) = read_stream_header(&mut stream)?;
    let mode = Mode::new(sample_rate, bit_rate)?;

    let frame_bytes = mode.frame_bits / 8;
    let payload = stream.metadata()?.len().saturating_sub(HEADER_BYTES);
    let num_frames = payload / frame_bytes as u64;

    println!("sample rate: {} Hz", mode.sample_rate);
    println!("bit rate:    {} bps", mode.bit_rate);
    println!(
        "frame:       {} bytes, {} samples (20 ms)",
        frame_bytes, mode.dct_length
    );
    println!("regions:     {}", mode.num_regions);
    println!(
        "frames:      {} ({:.2} s)",
        num_frames,
        num_frames as f64 * 0.020
    );
    if payload % frame_bytes as u64 != 0 {
        println!("trailing:    {} bytes (partial frame)", payload % frame_bytes as u64);
    }
    Ok(())
}

fn read_stream_header<R: Read>(stream: &mut R) -> Result<(u32, u32), CliError> {
    let mut magic = [0u8; 4];
    stream.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(CliError::BadMagic);
    }
    let sample_rate = stream.read_u32::<LittleEndian>()?;
    let bit_rate = stream.read_u32::<LittleEndian>()?;
    Ok((sample_rate, bit_rate))
}
