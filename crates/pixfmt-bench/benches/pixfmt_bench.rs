//! Benchmarks for pixfmt operations.
//!
//! Run with: `cargo bench -p pixfmt-bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pixfmt_core::{select_best_format, Picture, PictureMut, PixelFormat, PlaneMut, PlaneRef};
use pixfmt_dsp::{CpuFlags, DspConfig, DspContext, IdctDspContext};
use pixfmt_ops::{pad, shrink22, Margins, PlaneOps};

const CONFIGS: [(&str, CpuFlags); 3] = [
    ("portable", CpuFlags::empty()),
    ("simd128", CpuFlags::SIMD128),
    ("all", CpuFlags::all()),
];

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + i / 13) as u8).collect()
}

/// Format negotiation over the whole format table.
fn bench_select(c: &mut Criterion) {
    let candidates = [
        PixelFormat::Yuv420p,
        PixelFormat::Yuv422p,
        PixelFormat::Rgb24,
        PixelFormat::Gray8,
        PixelFormat::Pal8,
        PixelFormat::Rgba,
    ];
    c.bench_function("select_best_format", |b| {
        b.iter(|| {
            for src in PixelFormat::ALL {
                let _ = black_box(select_best_format(&candidates, black_box(src), true));
            }
        })
    });
}

/// Block kernels per dispatch configuration.
fn bench_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("blocks");
    let a = pattern(16 * 16);
    let b = pattern(16 * 16 + 3)[3..].to_vec();

    for (name, cpu) in CONFIGS {
        let config = DspConfig::new(cpu);
        let dsp = DspContext::new(&config);
        let idct = IdctDspContext::new(&config);

        group.bench_function(BenchmarkId::new("sad16", name), |bench| {
            bench.iter(|| (dsp.sad[0])(black_box(&a), black_box(&b), 16, 16))
        });
        group.bench_function(BenchmarkId::new("fdct_idct_put", name), |bench| {
            let mut out = [0u8; 64];
            bench.iter(|| {
                let mut block = [0i16; 64];
                (dsp.get_pixels)(&mut block, &a, 16);
                (dsp.fdct)(&mut block);
                for c in block.iter_mut() {
                    *c = (*c + 4) >> 3;
                }
                (idct.idct_put)(&mut out, 8, &mut block);
                black_box(out[0])
            })
        });
    }
    group.finish();
}

/// Plane operations on a 720x576 4:2:0 frame.
fn bench_planes(c: &mut Criterion) {
    let (w, h) = (720, 576);
    let mut group = c.benchmark_group("planes");
    group.throughput(Throughput::Elements((w * h) as u64));

    let y = pattern(w * h);
    let u = pattern(w * h / 4);
    let v = pattern(w * h / 4);
    let src = Picture::new(&[PlaneRef::new(&y, w), PlaneRef::new(&u, w / 2), PlaneRef::new(&v, w / 2)]);

    for (name, cpu) in CONFIGS {
        let ops = PlaneOps::new(&DspConfig::new(cpu));
        let (mut oy, mut ou, mut ov) = (vec![0u8; w * h], vec![0u8; w * h / 4], vec![0u8; w * h / 4]);
        group.bench_function(BenchmarkId::new("deinterlace", name), |bench| {
            bench.iter(|| {
                let mut dst = PictureMut::new(vec![
                    PlaneMut::new(&mut oy, w),
                    PlaneMut::new(&mut ou, w / 2),
                    PlaneMut::new(&mut ov, w / 2),
                ]);
                ops.deinterlace(&mut dst, &src, PixelFormat::Yuv420p, w, h)
            })
        });
    }

    let (mut oy, mut ou, mut ov) = (vec![0u8; w * h], vec![0u8; w * h / 4], vec![0u8; w * h / 4]);
    group.bench_function("pad", |bench| {
        bench.iter(|| {
            let mut dst = PictureMut::new(vec![
                PlaneMut::new(&mut oy, w),
                PlaneMut::new(&mut ou, w / 2),
                PlaneMut::new(&mut ov, w / 2),
            ]);
            pad(&mut dst, None, w, h, PixelFormat::Yuv420p, Margins::uniform(16), [16, 128, 128])
        })
    });

    let mut half = vec![0u8; w * h / 4];
    group.bench_function("shrink22", |bench| {
        bench.iter(|| shrink22(&mut half, w / 2, black_box(&y), w, w / 2, h / 2))
    });
    group.finish();
}

criterion_group!(benches, bench_select, bench_blocks, bench_planes);
criterion_main!(benches);
