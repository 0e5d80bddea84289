use criterion::{criterion_group, criterion_main, Criterion};
use image::{GrayImage, Luma};
use seamcarve::{gradient_energy, vertical_seam, Direction, SeamCarver};

fn checker(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([((x * 3) ^ (y * 5)) as u8]))
}

fn bench_energy(c: &mut Criterion) {
    let image = checker(128, 128);
    c.bench_function("energy map 128x128", |b| {
        b.iter(|| gradient_energy(&image))
    });
}

fn bench_seam(c: &mut Criterion) {
    let energy = gradient_energy(&checker(128, 128));
    c.bench_function("vertical seam 128x128", |b| {
        b.iter(|| vertical_seam(&energy))
    });
}

fn bench_carve(c: &mut Criterion) {
    let image = checker(64, 64);
    c.bench_function("carve 8 vertical seams from 64x64", |b| {
        b.iter(|| {
            SeamCarver::new(&image)
                .carve(Direction::Vertical, 8)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_energy, bench_seam, bench_carve);
criterion_main!(benches);
