use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use serde::{Deserialize, Serialize};

/// Generation token of a game; bumped on every restart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl SessionId {
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    Tick,
    Resolve,
}

/// Deferred work, delivered back to the session that scheduled it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub session: SessionId,
    pub kind: TimerKind,
}

/// Timer capability injected into a game session.
///
/// Each task must deliver its event to [`GameSession::handle_event`] when
/// due. Dropping the returned handle cancels the task.
///
/// [`GameSession::handle_event`]: crate::GameSession::handle_event
pub trait Scheduler {
    type Handle;

    fn schedule_recurring(&mut self, interval_ms: u32, event: ScheduledEvent) -> Self::Handle;

    fn schedule_once(&mut self, delay_ms: u32, event: ScheduledEvent) -> Self::Handle;
}

#[derive(Debug)]
struct ManualTask {
    seq: u64,
    due_ms: u64,
    interval_ms: Option<u32>,
    event: ScheduledEvent,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Debug, Default)]
struct ManualQueue {
    now_ms: u64,
    next_seq: u64,
    tasks: Vec<ManualTask>,
}

impl ManualQueue {
    fn push(
        &mut self,
        delay_ms: u32,
        interval_ms: Option<u32>,
        event: ScheduledEvent,
    ) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.tasks.push(ManualTask {
            seq: self.next_seq,
            due_ms: self.now_ms + u64::from(delay_ms),
            interval_ms,
            event,
            cancelled: cancelled.clone(),
        });
        self.next_seq += 1;
        ManualHandle { cancelled }
    }

    fn pop_due(&mut self, until_ms: u64) -> Option<ScheduledEvent> {
        self.tasks.retain(|task| !task.cancelled.get());
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_ms <= until_ms)
            .min_by_key(|(_, task)| (task.due_ms, task.seq))
            .map(|(index, _)| index)?;

        let task = &mut self.tasks[index];
        self.now_ms = task.due_ms;
        let event = task.event;
        if let Some(interval_ms) = task.interval_ms {
            task.due_ms += u64::from(interval_ms.max(1));
            task.seq = self.next_seq;
            self.next_seq += 1;
        } else {
            self.tasks.swap_remove(index);
        }
        Some(event)
    }
}

/// Cancels its task when dropped.
#[derive(Debug)]
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

/// Virtual clock that only moves when told to.
///
/// Clones share the same queue: hand one to the session and keep one to
/// drive time forward.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Number of live tasks.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .tasks
            .iter()
            .filter(|task| !task.cancelled.get())
            .count()
    }

    /// Moves the clock forward by `ms`, handing every task that falls due to
    /// `deliver` in time order.
    ///
    /// Tasks cancelled by an earlier delivery in the same call never fire.
    pub fn advance(&self, ms: u32, mut deliver: impl FnMut(ScheduledEvent)) {
        let until_ms = self.now_ms() + u64::from(ms);
        loop {
            let event = self.queue.borrow_mut().pop_due(until_ms);
            match event {
                Some(event) => deliver(event),
                None => break,
            }
        }
        self.queue.borrow_mut().now_ms = until_ms;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_recurring(&mut self, interval_ms: u32, event: ScheduledEvent) -> Self::Handle {
        self.queue
            .borrow_mut()
            .push(interval_ms.max(1), Some(interval_ms), event)
    }

    fn schedule_once(&mut self, delay_ms: u32, event: ScheduledEvent) -> Self::Handle {
        self.queue.borrow_mut().push(delay_ms, None, event)
    }
}
