//! The game loop

use crate::{
    render, ControlAction, Config, ConfigError, GameState, Key, Palette, Phase, RepeatingTask,
    Scheduler, StartControl, Surface, TaskId,
};

/// Owns the session state and drives it from timer callbacks.
///
/// Hosts call [`Engine::on_timer`] when a scheduled task fires and
/// [`Engine::key_down`] on every key press. Both run to completion before
/// the next one starts, so no locking is involved.
pub struct Engine<S: Scheduler> {
    state: GameState,
    palette: Palette,
    scheduler: S,
    task: RepeatingTask,
    control: StartControl,
    ticks: u64,
}

impl<S: Scheduler> Engine<S> {
    pub fn new(config: Config, seed: u64, scheduler: S) -> Result<Self, ConfigError> {
        let task = RepeatingTask::new(config.tick_interval());
        let state = GameState::new(config, seed)?;

        Ok(Self {
            state,
            palette: Palette::default(),
            scheduler,
            task,
            control: StartControl::new(),
            ticks: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn phase(&self) -> Phase {
        self.control.phase()
    }

    /// A tick is scheduled
    pub fn is_running(&self) -> bool {
        self.task.is_active()
    }

    /// Ticks run since the engine was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Draw the idle board before anything has started
    pub fn init<T: Surface>(&self, surface: &mut T) -> Result<(), T::Error> {
        render(&self.state, &self.palette, surface)
    }

    /// Serve a fresh ball and begin ticking
    pub fn start(&mut self) {
        self.state.respawn_ball();
        self.control.mark_running();
        self.task.start(&mut self.scheduler);
        log::info!(
            "game loop started, ticking every {:?}",
            self.task.interval()
        );
    }

    /// Cancel the pending tick; nothing runs until the next start
    pub fn stop(&mut self) {
        if self.task.is_active() {
            log::info!("game loop stopped after {} ticks", self.ticks);
        }
        self.task.stop(&mut self.scheduler);
    }

    /// Stop, restore every default and start again
    pub fn reset(&mut self) {
        self.stop();
        self.state.reset();
        log::info!("game reset");
        self.start();
    }

    /// The start/restart control
    pub fn press_start(&mut self) -> ControlAction {
        let action = self.control.press();
        match action {
            ControlAction::Start => self.start(),
            ControlAction::Restart => self.reset(),
        }
        action
    }

    /// Paddles respond whether or not the loop is running
    pub fn key_down(&mut self, key: Key) -> bool {
        self.state.key_down(key)
    }

    /// One full pass: move, collide, draw
    pub fn tick<T: Surface>(&mut self, surface: &mut T) -> Result<(), T::Error> {
        self.state.step();
        self.ticks += 1;

        if let Some(side) = self.state.events.scored() {
            log::debug!(
                "{:?} scores, now on {} ({}-{})",
                side,
                self.state.score.get(side),
                self.state.score.left,
                self.state.score.right
            );
        }

        render(&self.state, &self.palette, surface)
    }

    /// Timer callback. Ticks only if `task` is the pending one, then
    /// schedules the next tick after the frame is drawn.
    ///
    /// Returns whether a tick ran. A render failure halts the loop.
    pub fn on_timer<T: Surface>(
        &mut self,
        task: TaskId,
        surface: &mut T,
    ) -> Result<bool, T::Error> {
        if !self.task.fire(task) {
            log::trace!("ignoring stale timer {:?}", task);
            return Ok(false);
        }

        if let Err(err) = self.tick(surface) {
            log::error!("render failed on tick {}, game loop halted", self.ticks);
            return Err(err);
        }

        self.task.schedule_next(&mut self.scheduler);
        Ok(true)
    }
}
