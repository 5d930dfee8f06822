use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::hint::black_box;
use wtop::app::App;
use wtop::config::Config;
use wtop::system::kill::TerminateError;
use wtop::system::process::{ProcessRecord, ReadError, collect_records};
use wtop::system::snapshot::{SharedSnapshot, Snapshot, SystemLoad};
use wtop::system::{LoadSource, ProcessControl};
use wtop::ui;

struct IdleLoad;

impl LoadSource for IdleLoad {
    fn system_load(&mut self) -> SystemLoad {
        SystemLoad::default()
    }
}

struct NoControl;

impl ProcessControl for NoControl {
    fn terminate(&mut self, pid: u32) -> Result<(), TerminateError> {
        Err(TerminateError::NotFound { pid })
    }
}

fn make_reads(n: usize) -> Vec<Result<ProcessRecord, ReadError>> {
    (0..n)
        .map(|i| {
            let pid = i as u32 + 1;
            if i % 50 == 0 {
                Err(ReadError::Vanished { pid })
            } else {
                Ok(ProcessRecord::new(
                    pid,
                    format!("proc_{i}"),
                    (i * 37 % 100) as f32,
                    (i % 10) as f32,
                ))
            }
        })
        .collect()
}

fn bench_snapshot_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_build_500_1000_2000");

    for size in [500usize, 1000, 2000] {
        let reads = make_reads(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &reads, |b, reads| {
            b.iter(|| {
                let snapshot = Snapshot::from_records(collect_records(black_box(reads.clone())));
                black_box(snapshot);
            })
        });
    }

    group.finish();
}

fn bench_publish_and_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_publish_load_500_1000_2000");

    for size in [500usize, 1000, 2000] {
        let snapshot = Snapshot::from_records(collect_records(make_reads(size)));
        let shared = SharedSnapshot::new();
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    shared.publish(black_box(snapshot.clone()));
                    black_box(shared.load());
                })
            },
        );
    }

    group.finish();
}

fn bench_frame_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_render_500_1000_2000");

    for size in [500usize, 1000, 2000] {
        let shared = SharedSnapshot::new();
        shared.publish(Snapshot::from_records(collect_records(make_reads(size))));
        let mut app = App::new(
            &Config::default(),
            shared,
            Box::new(IdleLoad),
            Box::new(NoControl),
        );
        app.on_tick();

        group.bench_with_input(BenchmarkId::from_parameter(size), &app, |b, app| {
            b.iter(|| {
                let backend = TestBackend::new(120, 30);
                let mut terminal = Terminal::new(backend).expect("bench terminal init failed");
                terminal
                    .draw(|frame| ui::draw(frame, black_box(app)))
                    .expect("bench draw failed");
                black_box(terminal.backend());
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_snapshot_build,
    bench_publish_and_load,
    bench_frame_render
);
criterion_main!(benches);
