// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use park_alloc_engine::lot::Lot;
use park_alloc_model::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::{env, hint::black_box};

#[derive(Clone, Copy, Debug)]
enum OpKind {
    Park(VehicleClass),
    Remove,
}

#[derive(Clone, Debug)]
struct Op {
    kind: OpKind,
    plate: Plate,
}

fn gen_ops(plates: usize, n: usize, rng: &mut impl Rng) -> Vec<Op> {
    let pool: Vec<Plate> = (0..plates)
        .map(|i| Plate::new(format!("P{i:05}")).expect("non-empty plate"))
        .collect();
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let plate = pool[rng.random_range(0..pool.len())].clone();
        let kind = if rng.random_bool(0.55) {
            OpKind::Park(VehicleClass::ALL[rng.random_range(0..VehicleClass::ALL.len())])
        } else {
            OpKind::Remove
        };
        out.push(Op { kind, plate });
    }
    out
}

fn apply(lot: &Lot, ops: &[Op]) -> usize {
    let mut ok = 0usize;
    for Op { kind, plate } in ops {
        let done = match *kind {
            OpKind::Park(class) => lot.park(Vehicle::new(plate.clone(), class)).is_ok(),
            OpKind::Remove => lot.remove(plate).is_ok(),
        };
        ok += done as usize;
    }
    ok
}

fn register_churn(c: &mut Criterion, floors: usize, spots: usize, ops_n: usize) {
    let mut group = c.benchmark_group("lot_churn");
    group.throughput(Throughput::Elements(ops_n as u64));

    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED_CAFE_F00D);
    let plates = floors * spots;
    let ops = gen_ops(plates, ops_n, &mut rng);

    group.bench_function(BenchmarkId::new("park_remove", format!("{floors}x{spots}")), |b| {
        b.iter_batched(
            || Lot::with_dimensions(floors, spots).expect("valid dimensions"),
            |lot| black_box(apply(&lot, &ops)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn register_queries(c: &mut Criterion, floors: usize, spots: usize, ops_n: usize) {
    let mut group = c.benchmark_group("lot_queries");

    let mut rng = ChaCha8Rng::seed_from_u64(0xBAD5_EED5);
    let ops = gen_ops(floors * spots, ops_n, &mut rng);
    let lot = Lot::with_dimensions(floors, spots).expect("valid dimensions");
    apply(&lot, &ops);
    let probes: Vec<Plate> = ops.iter().map(|op| op.plate.clone()).take(1_000).collect();

    let label = format!("{floors}x{spots}");
    group.bench_function(BenchmarkId::new("available_per_floor", &label), |b| {
        b.iter(|| black_box(lot.available_per_floor()))
    });
    group.bench_function(BenchmarkId::new("is_full", &label), |b| {
        b.iter(|| black_box(lot.is_full()))
    });
    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function(BenchmarkId::new("find", &label), |b| {
        b.iter(|| {
            let hits = probes.iter().filter(|p| lot.find(p).is_ok()).count();
            black_box(hits)
        })
    });
    group.finish();
}

fn lot_benches(c: &mut Criterion) {
    let floors = env::var("LOT_FLOORS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8usize);
    let spots = env::var("LOT_SPOTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(256usize);
    let ops_n = env::var("LOT_OPS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10_000usize);

    register_churn(c, floors, spots, ops_n);
    register_queries(c, floors, spots, ops_n);
}

criterion_group!(benches, lot_benches);
criterion_main!(benches);
