use crate::{
    source::{ItemLists, Source},
    timer::Countdown,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Active,
    Finished,
    TimedOut,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Finished | GamePhase::TimedOut)
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub countdown_secs: u64,
    pub source: Source,
}

/// Everything one run of the game mutates, owned by the controller.
#[derive(Debug, Clone)]
pub struct Session {
    pub score: usize,
    pub current_index: usize,
    pub source: Source,
    pub lists: ItemLists,
    pub countdown: Countdown,
    pub phase: GamePhase,
}

impl Session {
    pub fn new(lists: ItemLists, config: &SessionConfig) -> Self {
        Self {
            score: 0,
            current_index: 0,
            source: config.source,
            lists,
            countdown: Countdown::new(config.countdown_secs),
            phase: GamePhase::NotStarted,
        }
    }

    pub fn item_list(&self) -> &[String] {
        self.lists.get(self.source)
    }

    pub fn current_item(&self) -> Option<&str> {
        self.item_list()
            .get(self.current_index)
            .map(String::as_str)
    }

    /// Number of items presented so far, i.e. the denominator of the score.
    pub fn attempted(&self) -> usize {
        self.current_index
    }

    pub fn score_text(&self) -> String {
        format!("{} / {}", self.score, self.attempted())
    }
}
