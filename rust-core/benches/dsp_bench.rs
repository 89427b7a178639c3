//! Benchmarks for the modulation workbench DSP chain
//!
//! Run with: cargo bench -p modem-workbench-core --bench dsp_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use modem_workbench::filters::{convolve_same, convolve_same_fft};
use modem_workbench::{
    compute_spectrum, demodulate, design_band_pass, fft, hilbert, modulate, synthesize,
    ModulationSpec, OscillatorDescriptor, Scheme, TimeSeries,
};

const FS: f64 = 8192.0;

fn message(samples: usize) -> TimeSeries {
    synthesize(
        &[
            OscillatorDescriptor::sine(1.0, 20.0),
            OscillatorDescriptor::cosine(0.5, 55.0),
        ],
        samples as f64 / FS,
        FS,
    )
}

// ============================================================================
// Fourier Benchmarks
// ============================================================================

fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");

    for size in [256usize, 1024, 4096, 16384].iter() {
        let signal = message(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("radix2", size), size, |b, _| {
            b.iter(|| fft(black_box(signal.values())))
        });

        group.bench_with_input(BenchmarkId::new("hilbert", size), size, |b, _| {
            b.iter(|| hilbert(black_box(&signal)))
        });

        group.bench_with_input(BenchmarkId::new("spectrum", size), size, |b, _| {
            b.iter(|| compute_spectrum(black_box(&signal), FS))
        });
    }

    group.finish();
}

// ============================================================================
// FIR Benchmarks
// ============================================================================

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_pass_convolution");
    let signal = message(8192);
    group.throughput(Throughput::Elements(signal.len() as u64));

    for order in [31usize, 127, 255, 1023].iter() {
        let coeffs = design_band_pass(*order, FS, 10.0, 200.0);

        group.bench_with_input(BenchmarkId::new("direct", order), order, |b, _| {
            b.iter(|| convolve_same(black_box(signal.values()), &coeffs))
        });

        group.bench_with_input(BenchmarkId::new("fft", order), order, |b, _| {
            b.iter(|| convolve_same_fft(black_box(signal.values()), &coeffs))
        });
    }

    group.finish();
}

// ============================================================================
// Modulation Benchmarks
// ============================================================================

fn bench_modulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("modulation");
    let signal = message(8192);
    group.throughput(Throughput::Elements(signal.len() as u64));

    for scheme in Scheme::ALL.iter() {
        let spec = ModulationSpec::new(1000.0, 0.5, *scheme).with_sampling_rate(FS);
        let modulated = modulate(&signal, &spec);

        group.bench_with_input(BenchmarkId::new("modulate", scheme), scheme, |b, _| {
            b.iter(|| modulate(black_box(&signal), &spec))
        });

        group.bench_with_input(BenchmarkId::new("demodulate", scheme), scheme, |b, s| {
            b.iter(|| demodulate(black_box(&modulated), 1000.0, FS, 0.5, *s))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fft, bench_convolution, bench_modulation);
criterion_main!(benches);
