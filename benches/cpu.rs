use criterion::{criterion_group, criterion_main, Criterion};
use dotmatrix::gb::{GameBoy, GameBoyOptions, Model};
use dotmatrix::testing::build_rom;

fn benchmark_step_loop(c: &mut Criterion) {
    let rom = build_rom(0x00, 0x00, 0x00, "BENCH");
    let mut gb = GameBoy::new(
        &rom,
        GameBoyOptions {
            model: Model::Dmg,
            ..Default::default()
        },
    )
    .unwrap();

    c.bench_function("step_1m_cycles", |b| {
        b.iter(|| {
            let mut cycles = 0u64;
            while cycles < 1_000_000 {
                cycles += gb.step() as u64;
            }
        })
    });
}

fn benchmark_run_frame(c: &mut Criterion) {
    let rom = build_rom(0x00, 0x00, 0x00, "BENCH");
    let mut gb = GameBoy::new(
        &rom,
        GameBoyOptions {
            model: Model::Dmg,
            ..Default::default()
        },
    )
    .unwrap();

    c.bench_function("run_frame", |b| {
        b.iter(|| {
            gb.run_frame();
        })
    });
}

criterion_group!(benches, benchmark_step_loop, benchmark_run_frame);
criterion_main!(benches);
