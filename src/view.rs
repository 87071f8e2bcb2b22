use crate::presenter::{ItemStyle, Presenter, Prompt, TimerDisplay};

/// What the terminal currently shows; the ratatui widgets read it each draw.
#[derive(Debug, Clone)]
pub struct TerminalView {
    pub prompt: String,
    pub style: ItemStyle,
    pub score: usize,
    pub attempted: usize,
    pub timer: TimerDisplay,
    pub controls_enabled: bool,
    pub input: String,
    bell_enabled: bool,
    bell_pending: bool,
}

impl TerminalView {
    pub fn new(bell_enabled: bool) -> Self {
        Self {
            prompt: String::new(),
            style: ItemStyle::Neutral,
            score: 0,
            attempted: 0,
            timer: TimerDisplay::Remaining(0),
            controls_enabled: false,
            input: String::new(),
            bell_enabled,
            bell_pending: false,
        }
    }

    pub fn score_text(&self) -> String {
        format!("{} / {}", self.score, self.attempted)
    }

    /// The bell is rung by the event loop, at most once per draw.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Presenter for TerminalView {
    fn render_prompt(&mut self, prompt: Prompt<'_>) {
        self.prompt = prompt.text().to_string();
        self.style = ItemStyle::Neutral;
    }

    fn set_item_style(&mut self, style: ItemStyle) {
        self.style = style;
    }

    fn play_mismatch_cue(&mut self) {
        if self.bell_enabled {
            self.bell_pending = true;
        }
    }

    fn render_score(&mut self, score: usize, attempted: usize) {
        self.score = score;
        self.attempted = attempted;
    }

    fn render_timer(&mut self, timer: TimerDisplay) {
        self.timer = timer;
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}
