use std::time::{Duration, Instant};

/// Runs `f` and returns its result together with the wall-clock time it took
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}
