//! Run state and tick cadence

/// Default number of fast ticks per simulated second
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

/// Whether the simulation is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    Stopped,
    Running,
}

/// Tracks the run state and decides when a slow (1 Hz) tick is due
#[derive(Debug, Clone)]
pub struct SimulationClock {
    state: ClockState,
    ticks_per_second: u32,
    /// Fast ticks run since the last slow tick
    ticks_since_second: u32,
    /// Fast ticks run while Running, in total
    total_ticks: u64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICKS_PER_SECOND)
    }
}

impl SimulationClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            state: ClockState::Stopped,
            ticks_per_second: ticks_per_second.max(1),
            ticks_since_second: 0,
            total_ticks: 0,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Stopped -> Running. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        let changed = self.state == ClockState::Stopped;
        self.state = ClockState::Running;
        changed
    }

    /// Running -> Stopped. Returns false if it was already stopped.
    pub fn stop(&mut self) -> bool {
        let changed = self.state == ClockState::Running;
        self.state = ClockState::Stopped;
        changed
    }

    /// Count one fast tick. Returns true when a slow tick is due.
    ///
    /// Only call this while running.
    pub fn advance(&mut self) -> bool {
        self.total_ticks += 1;
        self.ticks_since_second += 1;
        if self.ticks_since_second >= self.ticks_per_second {
            self.ticks_since_second = 0;
            true
        } else {
            false
        }
    }
}
