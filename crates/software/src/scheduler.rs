//! Cadence for the device's polling loop.

use embassy_time::{Duration, Timer};

/// Drives `step` at a fixed cadence, forever: one call, then `interval` of suspension, with no
/// exit condition. The timer is the loop's only suspension point.
pub async fn run_forever<F: FnMut()>(mut step: F, interval: Duration) -> ! {
    loop {
        run_cycles(&mut step, interval, 1).await;
    }
}

/// Drives `step` for a bounded number of cycles at the same cadence as [`run_forever`], which
/// delegates here one cycle at a time. The bound makes the cadence testable.
pub async fn run_cycles<F: FnMut()>(mut step: F, interval: Duration, cycles: u32) {
    for _ in 0..cycles {
        step();
        Timer::after(interval).await;
    }
}
