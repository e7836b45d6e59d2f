use gloo::timers::callback::{Interval, Timeout};
use memorou_core::{ScheduledEvent, Scheduler};
use yew::Callback;

/// Browser timer kept alive by the session; dropping it clears the timer.
pub(crate) enum TimerHandle {
    Interval { _interval: Interval },
    Timeout { _timeout: Timeout },
}

/// Schedules game timers on the browser event loop and forwards them to the
/// component as messages.
#[derive(Clone, Debug)]
pub(crate) struct GlooScheduler {
    callback: Callback<ScheduledEvent>,
}

impl GlooScheduler {
    pub(crate) fn new(callback: Callback<ScheduledEvent>) -> Self {
        Self { callback }
    }
}

impl Scheduler for GlooScheduler {
    type Handle = TimerHandle;

    fn schedule_recurring(&mut self, interval_ms: u32, event: ScheduledEvent) -> Self::Handle {
        let callback = self.callback.clone();
        log::trace!("every {}ms: {:?}", interval_ms, event);
        TimerHandle::Interval {
            _interval: Interval::new(interval_ms, move || callback.emit(event)),
        }
    }

    fn schedule_once(&mut self, delay_ms: u32, event: ScheduledEvent) -> Self::Handle {
        let callback = self.callback.clone();
        log::trace!("in {}ms: {:?}", delay_ms, event);
        TimerHandle::Timeout {
            _timeout: Timeout::new(delay_ms, move || callback.emit(event)),
        }
    }
}
