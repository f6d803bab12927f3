use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qmamehook_ini_rust::{
    decode, encode, FieldKind, ModeCategory, ModeSelection, Synchronizer, DEFAULT_HEADER,
};

fn sample_ini() -> String {
    let mut text = DEFAULT_HEADER.to_string();
    text.push_str("[Output]\n");
    for player in 1..=4 {
        text.push_str(&format!("P{0}_CtmRecoil = cmw {0} F0x2x1\n", player));
        text.push_str(&format!("P{0}_Clip = cmw {0} XX\n", player));
        text.push_str(&format!("P{0}_Ammo = cmw {0} FDAx%s%\n", player));
        text.push_str(&format!("P{0}_Life =\n", player));
    }
    text.push_str("Credits = cmw 1 XX\n");
    text
}

fn benchmark_load(c: &mut Criterion) {
    let text = sample_ini();
    let mut sync = Synchronizer::new();

    c.bench_function("sync_load", |b| {
        b.iter(|| {
            sync.load(black_box(&text));
        })
    });
}

fn benchmark_write(c: &mut Criterion) {
    let text = sample_ini();
    let mut sync = Synchronizer::new();
    sync.load(&text);

    c.bench_function("sync_field_change", |b| {
        b.iter(|| sync.apply_field_change(&FieldKind::Clip, None, black_box("F2x1x255xF3x1x0xF4x1x0")))
    });

    c.bench_function("sync_mode_change", |b| {
        b.iter(|| {
            sync.apply_mode_change(
                ModeCategory::Display,
                black_box(ModeCategory::Display.code("3B")),
            )
        })
    });
}

fn benchmark_codec(c: &mut Criterion) {
    let modes = ModeCategory::ALL
        .into_iter()
        .filter_map(|category| category.options().first().and_then(|o| category.code(o.code)))
        .fold(ModeSelection::new(), |modes, code| modes.with(code));

    c.bench_function("codec_round_trip", |b| {
        b.iter(|| decode(&encode(black_box(&modes))))
    });
}

criterion_group!(benches, benchmark_load, benchmark_write, benchmark_codec);
criterion_main!(benches);
