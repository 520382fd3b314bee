//! Per-frame encode and decode throughput at both sample rates.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use g7221_codec::{G7221Decoder, G7221Encoder};

fn sine_frame(len: usize, sample_rate: u32) -> Vec<i16> {
    (0..len)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (8000.0 * (2.0 * std::f64::consts::PI * 440.0 * t).sin()) as i16
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    for (sample_rate, bit_rate) in [(16000u32, 24000u32), (32000, 48000)] {
        let mut enc = G7221Encoder::new(sample_rate, bit_rate).unwrap();
        let pcm = sine_frame(enc.samples_per_frame(), sample_rate);
        c.bench_function(&format!("encode_{}hz_{}bps", sample_rate, bit_rate), |b| {
            b.iter(|| enc.encode_frame(black_box(&pcm)).unwrap())
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    for (sample_rate, bit_rate) in [(16000u32, 24000u32), (32000, 48000)] {
        let mut enc = G7221Encoder::new(sample_rate, bit_rate).unwrap();
        let pcm = sine_frame(enc.samples_per_frame(), sample_rate);
        let coded = enc.encode_frame(&pcm).unwrap();

        let mut dec = G7221Decoder::new(sample_rate, bit_rate).unwrap();
        let mut out = vec![0i16; dec.samples_per_frame()];
        c.bench_function(&format!("decode_{}hz_{}bps", sample_rate, bit_rate), |b| {
            b.iter(|| dec.decode_frame(black_box(Some(&coded)), &mut out).unwrap())
        });
    }
}

fn bench_conceal(c: &mut Criterion) {
    let mut dec = G7221Decoder::new(16000, 24000).unwrap();
    let mut out = vec![0i16; dec.samples_per_frame()];
    c.bench_function("conceal_16000hz", |b| {
        b.iter(|| dec.decode_frame(black_box(None), &mut out).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_conceal);
criterion_main!(benches);
