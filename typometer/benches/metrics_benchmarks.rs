use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use typometer::{TypingSession, Wpm, line_count, word_count};

const SENTENCE: &str = "the quick brown fox jumps over the lazy dog\n";

fn text_of(lines: usize) -> String {
    SENTENCE.repeat(lines)
}

fn benchmark_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting");

    for lines in [1, 100, 10_000] {
        let text = text_of(lines);

        group.bench_with_input(BenchmarkId::new("word_count", lines), &text, |b, text| {
            b.iter(|| word_count(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("line_count", lines), &text, |b, text| {
            b.iter(|| line_count(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_wpm_calculations(c: &mut Criterion) {
    c.bench_function("wpm_calculate", |b| {
        b.iter(|| Wpm::calculate(black_box(120), black_box(1.75)))
    });
}

fn benchmark_typing_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing_session");

    for lines in [1, 10, 100] {
        let text = text_of(lines);

        // Replays every prefix of the text, one change per keystroke
        group.bench_with_input(
            BenchmarkId::new("keystrokes", lines),
            &text,
            |b, text| {
                b.iter(|| {
                    let mut session = TypingSession::new();
                    for (now, (index, _)) in text.char_indices().enumerate() {
                        black_box(session.on_text_changed(&text[..index], now as u64 * 80));
                    }
                    black_box(session)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_counting,
    benchmark_wpm_calculations,
    benchmark_typing_session
);
criterion_main!(benches);
