use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stipula::parameter::ParameterController;
use stipula::store::{ParameterStore, ValueStore};

fn validation_pass(c: &mut Criterion) {
    let mut controller = ParameterController::new();
    for i in 0..100i64 {
        controller
            .declare::<i64>(format!("parameter_{i}"))
            .set_default(i)
            .is_required()
            .check_range(0, 100);
    }

    c.bench_function("validate 100 parameters, empty store", |b| {
        b.iter(|| {
            let mut store = ParameterStore::new();
            controller.validate(black_box(&mut store)).unwrap();
            store
        })
    });

    c.bench_function("validate 100 parameters, filled store", |b| {
        let mut store = ParameterStore::new();
        for i in 0..100i64 {
            store.insert(format!("parameter_{i}"), i);
        }
        b.iter(|| controller.validate(black_box(&mut store)).unwrap())
    });
}

criterion_group!(benches, validation_pass);
criterion_main!(benches);
