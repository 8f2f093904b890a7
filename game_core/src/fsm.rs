//! Start/restart control state machine

/// Whether play has ever been started this session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
}

/// What a press of the start control asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Restart,
}

/// The single start/restart button. First press starts, every later press
/// restarts.
#[derive(Debug, Clone)]
pub struct StartControl {
    phase: Phase,
}

impl StartControl {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Play has begun, whether or not through [`StartControl::press`]
    pub fn mark_running(&mut self) {
        self.phase = Phase::Running;
    }

    pub fn press(&mut self) -> ControlAction {
        match self.phase {
            Phase::NotStarted => {
                self.phase = Phase::Running;
                ControlAction::Start
            }
            Phase::Running => ControlAction::Restart,
        }
    }
}

impl Default for StartControl {
    fn default() -> Self {
        Self::new()
    }
}
