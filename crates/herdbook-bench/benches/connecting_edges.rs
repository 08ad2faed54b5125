//! Inbreeding-loop reconstruction benchmarks.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use herdbook_bench::generator::animal_id;
use herdbook_bench::{SizeTier, generate_registry};
use herdbook_core::{BuildOptions, Generations, Pedigree, connecting_edges, individual_pedigree};

struct Setup {
    pedigree: Pedigree,
    root: String,
    ancestor: String,
}

fn setup(tier: SizeTier) -> Setup {
    let registry = generate_registry(&tier.config(42)).expect("generates");
    let root = animal_id(tier.config(42).num_animals - 1);
    let options = BuildOptions::with_generations(Generations::new(8).expect("valid"));
    let pedigree = individual_pedigree(&registry, &root, &options).expect("known");

    // The most distant common ancestor gives the widest loop; fall back to
    // the last node when the draw produced none.
    let ancestor = pedigree
        .graph()
        .nodes()
        .iter()
        .rev()
        .find(|n| pedigree.is_common(&n.id))
        .or_else(|| pedigree.graph().nodes().last())
        .map(|n| n.id.clone())
        .expect("non-empty pedigree");

    Setup {
        pedigree,
        root,
        ancestor,
    }
}

fn bench_connecting_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("connecting_edges");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
    ] {
        let s = setup(tier);

        group.bench_function(BenchmarkId::new("distant_common", name), |b| {
            b.iter(|| connecting_edges(s.pedigree.graph().edges(), &s.root, &s.ancestor));
        });

        group.bench_function(BenchmarkId::new("inbreeding_loop", name), |b| {
            b.iter(|| s.pedigree.inbreeding_loop(&s.ancestor));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_connecting_edges);
criterion_main!(benches);
