use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use pinyin_core::converter::{convert_with_dict, CaseMode, ConvertOptions, ToneMode};
use pinyin_core::dict::SyllableDict;

fn bench_convert(c: &mut Criterion) {
    let dict = SyllableDict::global();
    let text = "中国人说你好, the 绿水 and 青山 of 北京市 2024!".repeat(16);

    let stripped = ConvertOptions::default();
    c.bench_function("convert_stripped", |b| {
        b.iter(|| convert_with_dict(dict, black_box(&text), &stripped))
    });

    let marked = ConvertOptions::new()
        .with_tone(ToneMode::Marked)
        .with_case(CaseMode::FirstUpper)
        .with_separator("-");
    c.bench_function("convert_marked_first_upper", |b| {
        b.iter(|| convert_with_dict(dict, black_box(&text), &marked))
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
