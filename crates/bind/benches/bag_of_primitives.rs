//! Derived vs table-driven binding of a small record

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tessera_bind::{BagOfPrimitives, TokenReader, ValueReader, read_bag, set_field_by_name};

fn sample_json() -> String {
    BagOfPrimitives::new(10, 1, false, "foo")
        .to_json()
        .unwrap_or_default()
}

fn bench_default(c: &mut Criterion) {
    let json = sample_json();
    c.bench_function("bag_of_primitives_default", |b| {
        b.iter(|| BagOfPrimitives::from_json(black_box(&json)))
    });
}

fn bench_streaming(c: &mut Criterion) {
    let json = sample_json();
    c.bench_function("bag_of_primitives_streaming", |b| {
        b.iter(|| -> tessera_bind::BindResult<BagOfPrimitives> {
            read_bag(&mut ValueReader::from_json(black_box(&json))?)
        })
    });
}

fn bench_by_hand(c: &mut Criterion) {
    let json = sample_json();
    c.bench_function("bag_of_primitives_by_hand", |b| {
        b.iter(|| -> tessera_bind::BindResult<BagOfPrimitives> {
            let mut reader = ValueReader::from_json(black_box(&json))?;
            reader.begin_object()?;
            let mut bag = BagOfPrimitives::default();
            while reader.has_next() {
                let name = reader.next_name()?;
                set_field_by_name(&mut bag, &name, &mut reader)?;
            }
            reader.end_object()?;
            Ok(bag)
        })
    });
}

criterion_group!(benches, bench_default, bench_streaming, bench_by_hand);
criterion_main!(benches);
