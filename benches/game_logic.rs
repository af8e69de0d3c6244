use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GameState, SnakeConfig};
use tui_snake::term::{GameView, Viewport};

fn new_game() -> GameState {
    GameState::new(SnakeConfig::default().with_seed(12345).with_render(false)).unwrap()
}

fn bench_step(c: &mut Criterion) {
    let mut state = new_game();
    let mut turn = 0i64;

    c.bench_function("step", |b| {
        b.iter(|| {
            // Square spiral keeps the snake alive; reset whenever it dies anyway.
            turn = (turn + 1) % 64;
            let action = match turn / 16 {
                0 => 0,
                1 => 3,
                2 => 1,
                _ => 2,
            };
            match state.step(black_box(action)) {
                Ok(step) if !step.done => {}
                _ => {
                    state.reset();
                }
            }
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut state = new_game();

    c.bench_function("reset", |b| {
        b.iter(|| {
            black_box(state.reset());
        })
    });
}

fn bench_observation(c: &mut Criterion) {
    let state = new_game();

    c.bench_function("observation", |b| {
        b.iter(|| {
            black_box(state.observation());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = new_game();
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = tui_snake::term::FrameBuffer::new(80, 30);

    c.bench_function("render_80x30", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 30), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_reset,
    bench_observation,
    bench_render
);
criterion_main!(benches);
