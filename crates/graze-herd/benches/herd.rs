use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use graze_core::{GridPos, NullObserver, TickContext};
use graze_grid::GridWorld;
use graze_herd::{Herd, HerdConfig};

fn pasture(width: u32, height: u32, sheep: i32) -> Herd {
    let mut grid = GridWorld::new(width, height).expect("grid");
    grid.fill_edible(2);
    let config = HerdConfig {
        regrow_every_ticks: 8,
        ..HerdConfig::default()
    };
    let mut herd = Herd::new(grid, config);
    for i in 0..sheep {
        let pos = GridPos::new((i * 7) % width as i32, (i * 13) % height as i32);
        let _ = herd.spawn(pos, (i % 10) as u8 + 1);
    }
    herd
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("graze-herd/tick");

    group.bench_function("100_sheep_64x64_x10", |b| {
        b.iter_batched(
            || pasture(64, 64, 100),
            |mut herd| {
                for tick in 0..10 {
                    herd.tick(&TickContext::new(tick, 42), &mut NullObserver)
                        .expect("tick");
                }
                herd
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
