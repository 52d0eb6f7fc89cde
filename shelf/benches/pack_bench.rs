use std::hint::black_box;
use std::path::Path;

use criterion::{Criterion, criterion_group, criterion_main};

use fotosheet::entities::{Photo, PrintJob, PrintSettings, Sheet};
use fotosheet::pack::pack;
use shelf::io;

criterion_main!(benches);
criterion_group!(benches, pack_synthetic_bench, pack_asset_bench, export_bench);

const N_PHOTOS: usize = 50;
const N_COPIES: usize = 20;

fn synthetic_job() -> PrintJob {
    let mut job = PrintJob::new(PrintSettings::default(), Sheet::A4).unwrap();
    for i in 0..N_PHOTOS {
        // alternate landscape, portrait and square sources
        let (w, h) = match i % 3 {
            0 => (4000, 3000),
            1 => (3000, 4000),
            _ => (2400, 2400),
        };
        job.add_photo(Photo::new(i, w, h, N_COPIES).unwrap());
    }
    job
}

/// Benchmark a full layout run over a job demanding 1000 copies
fn pack_synthetic_bench(c: &mut Criterion) {
    let job = synthetic_job();
    c.bench_function("pack_1000_copies", |b| {
        b.iter(|| pack(black_box(&job)));
    });
}

/// Benchmark layout of a realistic job file
fn pack_asset_bench(c: &mut Criterion) {
    let ext_job = io::read_job(Path::new("../assets/batch_mixed.json")).unwrap();
    let job = fotosheet::io::import(&ext_job).unwrap();
    c.bench_function("pack_batch_mixed", |b| {
        b.iter(|| pack(black_box(&job)));
    });
}

/// Benchmark solution export including per-copy raster geometry
fn export_bench(c: &mut Criterion) {
    let job = synthetic_job();
    let pages = pack(&job);
    c.bench_function("export_1000_copies", |b| {
        b.iter(|| fotosheet::io::export(black_box(&job), black_box(&pages)));
    });
}
