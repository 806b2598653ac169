//! One-second tick service. Dropping the ticker cancels the interval, so a
//! session's clock never outlives the screen that owns it.

use gloo::timers::callback::Interval;

pub const TICK_MILLIS: u32 = 1_000;

pub struct SecondTicker {
    _interval: Interval,
}

impl SecondTicker {
    pub fn start(on_tick: impl FnMut() + 'static) -> Self {
        Self {
            _interval: Interval::new(TICK_MILLIS, on_tick),
        }
    }
}
