//! Benchmarks for the Atbash and Vigenère transforms.
//!
//! Measures per-call throughput on a fixed paragraph for every preset
//! alphabet, plus the cost of building a configuration.

use clasicrypt::{AlphabetPreset, Atbash, Configuration, TextCipher, Vigenere};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Key used consistently across all Vigenère benchmarks.
const BENCH_KEY: &str = "BenchmarkKey";

/// Mixed-case text with punctuation, so every run exercises both the
/// substitution and the pass-through paths.
const BENCH_TEXT: &str = "En un lugar de la Mancha, de cuyo nombre no quiero acordarme, \
    no ha mucho tiempo que vivía un hidalgo de los de lanza en astillero, \
    adarga antigua, rocín flaco y galgo corredor. ";

fn bench_text() -> String {
    BENCH_TEXT.repeat(16)
}

/// Benchmarks `Configuration::from_preset()`, which builds the index map.
fn bench_configuration(c: &mut Criterion) {
    let mut group = c.benchmark_group("configuration");
    for preset in AlphabetPreset::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(preset), &preset, |b, &preset| {
            b.iter(|| Configuration::from_preset(black_box(preset), true, true));
        });
    }
    group.finish();
}

/// Benchmarks `Atbash::transform()` across presets.
fn bench_atbash(c: &mut Criterion) {
    let text = bench_text();
    let mut group = c.benchmark_group("atbash");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for preset in AlphabetPreset::ALL {
        let config = Configuration::from_preset(preset, true, true);
        group.bench_with_input(BenchmarkId::from_parameter(preset), &config, |b, config| {
            b.iter(|| Atbash::transform(black_box(&text), config).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks Vigenère encryption and decryption across presets.
fn bench_vigenere(c: &mut Criterion) {
    let text = bench_text();

    for (name, decrypt) in [("vigenere_encrypt", false), ("vigenere_decrypt", true)] {
        let mut group = c.benchmark_group(name);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for preset in AlphabetPreset::ALL {
            let cipher = Vigenere::new(Configuration::from_preset(preset, true, true));
            group.bench_with_input(BenchmarkId::from_parameter(preset), &cipher, |b, cipher| {
                b.iter(|| {
                    if decrypt {
                        cipher.decrypt(black_box(&text), BENCH_KEY).unwrap()
                    } else {
                        cipher.encrypt(black_box(&text), BENCH_KEY).unwrap()
                    }
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_configuration, bench_atbash, bench_vigenere);
criterion_main!(benches);
