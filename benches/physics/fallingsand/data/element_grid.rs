use criterion::{criterion_group, BatchSize, Criterion};
use falling_sand::physics::fallingsand::{
    data::element_grid::ElementGrid, elements::element::ElementType,
    util::vectors::RowColVector,
};

/// The default 80x60 sandbox with the top half full of sand
fn get_element_grid() -> ElementGrid {
    let mut element_grid = ElementGrid::new_seeded(80, 60, 0);
    for row in 0..30 {
        for col in 0..80 {
            element_grid
                .set(RowColVector { row, col }, ElementType::Sand)
                .unwrap();
        }
    }
    element_grid
}

fn bench_evolve(c: &mut Criterion) {
    c.bench_function("evolve", |b| {
        b.iter_batched(
            get_element_grid,
            |mut element_grid| {
                element_grid.evolve();
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_texture(c: &mut Criterion) {
    let element_grid = get_element_grid();
    c.bench_function("get_texture", |b| {
        b.iter(|| {
            element_grid.get_texture();
        })
    });
}

criterion_group!(benches, bench_evolve, bench_get_texture);
