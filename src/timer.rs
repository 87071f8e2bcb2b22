/// Length of a session countdown when nothing else is configured.
pub const DEFAULT_COUNTDOWN_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Expired,
}

/// One-shot countdown: started once by the first keystroke, decremented once
/// per tick, never restarted.
#[derive(Debug, Clone)]
pub struct Countdown {
    total_secs: u64,
    remaining_secs: u64,
    state: TimerState,
}

impl Countdown {
    pub fn new(total_secs: u64) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            state: TimerState::Idle,
        }
    }

    /// Returns true only for the call that actually started the countdown.
    pub fn start(&mut self) -> bool {
        if self.state != TimerState::Idle {
            return false;
        }
        self.state = TimerState::Running;
        true
    }

    pub fn tick(&mut self) -> TimerState {
        if self.state == TimerState::Running {
            self.remaining_secs = self.remaining_secs.saturating_sub(1);
            if self.remaining_secs == 0 {
                self.state = TimerState::Expired;
            }
        }
        self.state
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_SECS)
    }
}
