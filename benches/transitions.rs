use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dfa_engine::prelude::*;

fn build(c: &mut Criterion) {
    c.bench_function("build modulo 5000", |b| {
        b.iter(|| ModuloAutomaton::new(black_box(5000)).unwrap())
    });
    c.bench_function("build streak 5000", |b| {
        b.iter(|| StreakAutomaton::new(black_box(5000)).unwrap())
    });
}

fn run(c: &mut Criterion) {
    let word = "1101001".repeat(10_000);

    let mut modulo = ModuloAutomaton::new(1000).unwrap();
    c.bench_function("run modulo 1000 on 70k bits", |b| {
        b.iter(|| {
            modulo.reset();
            modulo.run(black_box(word.chars())).unwrap()
        })
    });

    let streak = StreakAutomaton::new(3).unwrap();
    c.bench_function("accepts streak 3 on 70k bits", |b| {
        b.iter(|| streak.accepts(black_box(word.chars())))
    });
}

criterion_group!(benches, build, run);
criterion_main!(benches);
