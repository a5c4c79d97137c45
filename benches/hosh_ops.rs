// benches/hosh_ops.rs
// Throughput of the group law, the closed-form inverse and root, and the codecs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hosh::{GroupVersion, Hosh};

fn bench_algebra(c: &mut Criterion) {
    let a = Hosh::hash(b"lots of data");
    let b = Hosh::hash(b"lots of data 2");

    c.bench_function("mul_ut40", |bench| {
        bench.iter(|| black_box(black_box(&a) * black_box(&b)));
    });

    c.bench_function("inv_ut40", |bench| {
        bench.iter(|| black_box(black_box(&a).inv()));
    });

    c.bench_function("root_7_ut40", |bench| {
        bench.iter(|| black_box(black_box(&a).root(7)));
    });

    c.bench_function("pow_1000_ut40", |bench| {
        bench.iter(|| black_box(black_box(&a).pow(1000)));
    });
}

fn bench_codecs(c: &mut Criterion) {
    c.bench_function("hash_ut40", |bench| {
        bench.iter(|| black_box(Hosh::hash(black_box(b"The vacuum is empty."))));
    });

    for version in GroupVersion::all() {
        let h = Hosh::from_blob(b"sdff", hosh::ElementKind::Generic, version);
        let cells = *h.cells();
        c.bench_function(&format!("id_ut{}", version.digits), |bench| {
            bench.iter(|| {
                let fresh = Hosh::from_cells(black_box(&cells), version).unwrap();
                black_box(fresh.id().len())
            });
        });
        let id = h.id().to_string();
        c.bench_function(&format!("from_id_ut{}", version.digits), |bench| {
            bench.iter(|| black_box(Hosh::from_id(black_box(&id)).unwrap()));
        });
    }
}

fn bench_components(c: &mut Criterion) {
    c.bench_function("components_7", |bench| {
        bench.iter(|| {
            // Fresh element each time so the component cache starts cold.
            let a = Hosh::hash(b"a");
            black_box(a.components(0, 7, 7).unwrap())
        });
    });
}

criterion_group!(benches, bench_algebra, bench_codecs, bench_components);
criterion_main!(benches);
