use natural::{Digit, Natural};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn operand(digits: usize) -> Natural {
    Natural::from_digits(vec![Digit::MAX; digits])
}

pub fn bench_add(c: &mut Criterion) {
    let x = operand(64);
    let y = operand(48);

    c.bench_function("add 64+48 digits", |b| b.iter(|| black_box(&x) + black_box(&y)));

    c.bench_function("add_into 64+48 digits, reused buffer", |b| {
        let mut buf = Some(Natural::new());

        b.iter(|| {
            let z = buf.take().unwrap_or_default().add_into(black_box(&x), black_box(&y));
            buf = Some(z);
        })
    });
}

pub fn bench_scalar(c: &mut Criterion) {
    let x = operand(64);

    c.bench_function("mul_digit 64 digits", |b| b.iter(|| black_box(&x).mul_digit(black_box(10))));
    c.bench_function("div_rem_digit 64 digits", |b| {
        b.iter(|| black_box(&x).div_rem_digit(black_box(10)))
    });
}

pub fn bench_radix(c: &mut Criterion) {
    let x = operand(16);
    let text = x.to_string();

    c.bench_function("to_string 16 digits", |b| b.iter(|| black_box(&x).to_string()));
    c.bench_function("parse 16 digits", |b| b.iter(|| Natural::parse(black_box(&text), 10)));
}

criterion_group!(benches, bench_add, bench_scalar, bench_radix);
criterion_main!(benches);
