//! Benchmarks for shortcut validation.
//!
//! These benchmarks measure validating a shortcut against a table of rows and
//! parsing shortcuts from their portable text form.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shortcut_profiles::editor::{ShortcutRecordStore, ShortcutRow, ShortcutValidator};
use shortcut_profiles::keyboard::{ActionRegistry, KeyShortcut, Services};

fn build_store(services: &Services, rows: usize) -> ShortcutRecordStore {
    let mut store = ShortcutRecordStore::new();
    for index in 0..rows {
        let identifier = (index % 50 + 1) as i32;
        let mut row = ShortcutRow::blank(index % 7 == 0)
            .with_shortcut(format!("Ctrl+Alt+F{}, {}", index % 35 + 1, index % 10).parse().unwrap());
        if let Some(definition) = services.actions.definition(identifier) {
            row = row.with_action(definition);
        }
        store.append(row);
    }
    store
}

fn bench_validate(c: &mut Criterion) {
    let services = Services::default();
    let store = build_store(&services, 500);
    let validator = ShortcutValidator::new(&services, false);
    let row = store.rows()[250].id();
    let shortcut: KeyShortcut = "Ctrl+Alt+F1, 0".parse().unwrap();

    c.bench_function("validate_against_500_rows", |b| {
        b.iter(|| validator.validate(black_box(&store), black_box(&shortcut), row))
    });
}

fn bench_parse_shortcut(c: &mut Criterion) {
    c.bench_function("parse_multi_chord_shortcut", |b| {
        b.iter(|| black_box("Ctrl+Shift+K, Ctrl+Alt+Del").parse::<KeyShortcut>())
    });
}

criterion_group!(benches, bench_validate, bench_parse_shortcut);
criterion_main!(benches);
