//! Presentation port: the surface the game controller and the share form
//! render through. The terminal UI implements it in `view`; tests implement
//! it with recorders.

pub const FINISHED_MESSAGE: &str = "The game is over";
pub const TIMES_UP_MESSAGE: &str = "Time's up";

/// What the item area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'a> {
    Item(&'a str),
    Finished,
}

impl Prompt<'_> {
    pub fn text(&self) -> &str {
        match self {
            Prompt::Item(item) => item,
            Prompt::Finished => FINISHED_MESSAGE,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ItemStyle {
    /// Typed text is still a prefix of the item.
    #[default]
    Neutral,
    Mismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDisplay {
    Remaining(u64),
    TimesUp,
}

impl TimerDisplay {
    pub fn text(&self) -> String {
        match self {
            TimerDisplay::Remaining(secs) => secs.to_string(),
            TimerDisplay::TimesUp => TIMES_UP_MESSAGE.to_string(),
        }
    }
}

pub trait Presenter {
    /// Shows the prompt as display text and input placeholder, in the
    /// neutral style.
    fn render_prompt(&mut self, prompt: Prompt<'_>);
    fn set_item_style(&mut self, style: ItemStyle);
    fn play_mismatch_cue(&mut self);
    fn render_score(&mut self, score: usize, attempted: usize);
    fn render_timer(&mut self, timer: TimerDisplay);
    fn set_controls_enabled(&mut self, enabled: bool);
    fn clear_input(&mut self);
}

pub trait FormPresenter {
    /// Returns the form's error message slot, creating it on first use.
    fn ensure_error_surface(&mut self) -> &mut String;
}
