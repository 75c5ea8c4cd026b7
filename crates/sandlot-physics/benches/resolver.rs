//! Collision resolver throughput against floors of increasing width.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use sandlot_core::{Aabb, Gravity, MovementProfile};
use sandlot_physics::{integrate, resolve_collisions, KinematicBody, MoveIntent};

const FLOOR_WIDTHS: &[usize] = &[16, 256, 4096];

fn floor(width: usize) -> Vec<Aabb> {
    (0..width)
        .map(|i| Aabb::new(i as f32 * 32.0, 64.0, 32.0, 32.0))
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_collisions");

    for &width in FLOOR_WIDTHS {
        let blocks = floor(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &blocks, |b, blocks| {
            let mut body = KinematicBody::new(
                Vec2::new(100.0, 32.0),
                Vec2::splat(32.0),
                MovementProfile::default(),
                Gravity::default(),
            );
            body.on_ground = true;
            let intent = MoveIntent {
                horizontal: 1.0,
                ..MoveIntent::IDLE
            };

            b.iter(|| {
                integrate(&mut body, intent, 1.0 / 60.0);
                black_box(resolve_collisions(&mut body, blocks.iter()))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
