use crate::*;
use std::time::Duration;

/// Something that can wait out the interval between auto-run ticks.
pub trait Scheduler {
    fn wait(&mut self, interval: Duration);
}

/// Waits by sleeping the current thread.
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadSleep;

impl Scheduler for ThreadSleep {
    fn wait(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

impl<F: FnMut(Duration)> Scheduler for F {
    fn wait(&mut self, interval: Duration) {
        self(interval)
    }
}

/// Solve automatically: arm auto-run and tick until the engine disarms.
///
/// The first tick is immediate; each later tick waits [`EngineConfig::auto_run_interval`] on the
/// scheduler. Returns the number of ticks taken.
pub fn run_auto<N, S>(engine: &mut Engine<N>, mut scheduler: S) -> usize
where
    N: Notifier,
    S: Scheduler,
{
    engine.start_auto_run();
    let interval = engine.config().auto_run_interval;

    let mut ticks = 1;
    while engine.tick() {
        scheduler.wait(interval);
        ticks += 1;
    }
    ticks
}
