use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use pagesim::{FrameSet, PageId, Policy, PolicyState, Simulator, MAX_FRAMES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const REFERENCES: usize = 1_000;

/// Reference string over a small page alphabet, seeded for repeatability.
fn reference_string(len: usize, pages: u32) -> Vec<PageId> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| PageId::new(rng.gen_range(0..pages))).collect()
}

fn bench_apply(c: &mut Criterion) {
    let refs = reference_string(REFERENCES, 16);
    let mut group = c.benchmark_group("apply");

    for policy in Policy::ALL {
        group.bench_function(BenchmarkId::from_parameter(policy), |b| {
            b.iter(|| {
                let mut frames = FrameSet::new(MAX_FRAMES);
                let mut state = PolicyState::new(policy, MAX_FRAMES);
                for (i, &page) in refs.iter().enumerate() {
                    let outcome = state.apply(&frames, std::hint::black_box(page), &refs[i + 1..]);
                    frames = outcome.frames;
                    state = outcome.state;
                }
                std::hint::black_box(frames)
            })
        });
    }
    group.finish();
}

fn bench_run_to_end(c: &mut Criterion) {
    let refs = reference_string(REFERENCES, 16);
    let mut group = c.benchmark_group("run_to_end");

    for policy in Policy::ALL {
        group.bench_function(BenchmarkId::from_parameter(policy), |b| {
            b.iter_batched(
                || {
                    let mut sim = Simulator::new();
                    sim.configure(policy, 4, refs.clone()).unwrap();
                    sim
                },
                |mut sim| {
                    let _ = std::hint::black_box(sim.run_to_end());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_undo_all(c: &mut Criterion) {
    let refs = reference_string(REFERENCES, 16);

    c.bench_function("undo_all", |b| {
        b.iter_batched(
            || {
                let mut sim = Simulator::new();
                sim.configure(Policy::Lru, 4, refs.clone()).unwrap();
                sim.run_to_end().unwrap();
                sim
            },
            |mut sim| while sim.step_backward() {},
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_apply, bench_run_to_end, bench_undo_all);
criterion_main!(benches);
