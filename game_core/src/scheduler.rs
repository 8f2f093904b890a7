//! Cancellable repeating timer
//!
//! The engine never sleeps or spawns anything itself. It asks a [`Scheduler`]
//! to fire a [`TaskId`] after a delay, and the host calls back into
//! [`Engine::on_timer`](crate::Engine::on_timer) when that happens.

use std::time::Duration;

/// Identifies one scheduled firing. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// Something that can fire a task once after a delay
pub trait Scheduler {
    fn schedule(&mut self, task: TaskId, delay: Duration);
    fn cancel(&mut self, task: TaskId);
}

/// A self-rescheduling task with at most one firing pending at any time
#[derive(Debug, Clone)]
pub struct RepeatingTask {
    interval: Duration,
    active: Option<TaskId>,
    next_id: u64,
}

impl RepeatingTask {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: None,
            next_id: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The firing currently expected, if any
    pub fn active(&self) -> Option<TaskId> {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Cancel whatever is pending, then schedule a fresh firing
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.stop(scheduler);
        self.schedule_next(scheduler);
    }

    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(task) = self.active.take() {
            scheduler.cancel(task);
        }
    }

    /// Schedule the next firing one interval from now
    pub fn schedule_next<S: Scheduler>(&mut self, scheduler: &mut S) {
        let task = TaskId(self.next_id);
        self.next_id += 1;
        self.active = Some(task);
        scheduler.schedule(task, self.interval);
    }

    /// Consume a firing. Returns `false` for anything but the pending task,
    /// so a timer that slipped past a cancel is ignored.
    pub fn fire(&mut self, task: TaskId) -> bool {
        if self.active == Some(task) {
            self.active = None;
            true
        } else {
            false
        }
    }
}

/// What a host must do to keep its real timers in sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRequest {
    Schedule { task: TaskId, delay: Duration },
    Cancel(TaskId),
}

/// Scheduler that only records requests.
///
/// Hosts drain [`TimerRequest`]s and map them onto their own timers; tests
/// fire pending tasks by hand.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    requests: Vec<TimerRequest>,
    pending: Vec<(TaskId, Duration)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all requests made since the last drain
    pub fn drain_requests(&mut self) -> Vec<TimerRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Tasks scheduled and neither fired nor cancelled
    pub fn pending(&self) -> &[(TaskId, Duration)] {
        &self.pending
    }

    /// Record that the host fired `task`
    pub fn fired(&mut self, task: TaskId) {
        self.pending.retain(|(t, _)| *t != task);
    }

    /// Pop the oldest pending task as if its timer had expired
    pub fn fire_next(&mut self) -> Option<TaskId> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.pending.remove(0).0)
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, task: TaskId, delay: Duration) {
        self.pending.push((task, delay));
        self.requests.push(TimerRequest::Schedule { task, delay });
    }

    fn cancel(&mut self, task: TaskId) {
        self.pending.retain(|(t, _)| *t != task);
        self.requests.push(TimerRequest::Cancel(task));
    }
}
