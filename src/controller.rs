use tracing::{debug, info};

use crate::{
    presenter::{ItemStyle, Presenter, Prompt, TimerDisplay},
    session::{GamePhase, Session},
    source::Source,
    timer::TimerState,
};

/// Result of feeding the current input text to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The session is not accepting input.
    Ignored,
    /// The item still starts with the typed text.
    OnTrack,
    Mismatch,
    /// The typed text reached the item's length and the attempt was scored.
    Completed { correct: bool },
}

/// Drives one session: progression through the active item list, scoring
/// and the countdown. Every handler renders through the presenter it owns.
#[derive(Debug)]
pub struct GameController<P: Presenter> {
    session: Session,
    presenter: P,
}

impl<P: Presenter> GameController<P> {
    pub fn new(session: Session, presenter: P) -> Self {
        Self { session, presenter }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// First render of the session. Moves `NotStarted` to `Active`, or
    /// straight to `Finished` when there is nothing to type.
    pub fn start(&mut self) {
        if self.session.phase != GamePhase::NotStarted {
            return;
        }

        self.presenter
            .render_score(self.session.score, self.session.attempted());
        self.presenter.render_timer(TimerDisplay::Remaining(
            self.session.countdown.remaining_secs(),
        ));
        self.presenter.set_controls_enabled(true);
        self.show_current_or_finish();
    }

    pub fn on_input(&mut self, text: &str) -> InputOutcome {
        if self.session.phase != GamePhase::Active {
            return InputOutcome::Ignored;
        }

        if !text.is_empty() && self.session.countdown.start() {
            info!(
                secs = self.session.countdown.total_secs(),
                "countdown started"
            );
            self.presenter.render_timer(TimerDisplay::Remaining(
                self.session.countdown.remaining_secs(),
            ));
        }

        let Some(item) = self.session.current_item() else {
            self.finish();
            return InputOutcome::Ignored;
        };

        let on_track = item.starts_with(text);
        if on_track {
            self.presenter.set_item_style(ItemStyle::Neutral);
        } else {
            self.presenter.set_item_style(ItemStyle::Mismatch);
            self.presenter.play_mismatch_cue();
        }

        if text.chars().count() != item.chars().count() {
            return if on_track {
                InputOutcome::OnTrack
            } else {
                InputOutcome::Mismatch
            };
        }

        let correct = text == item;
        debug!(index = self.session.current_index, correct, "attempt completed");
        if correct {
            self.session.score += 1;
        }
        self.advance();

        InputOutcome::Completed { correct }
    }

    /// Skips the current item without scoring it.
    pub fn on_validate_click(&mut self) -> bool {
        if self.session.phase != GamePhase::Active {
            return false;
        }

        debug!(index = self.session.current_index, "item skipped");
        self.advance();
        true
    }

    pub fn on_enter_key(&mut self) -> bool {
        self.on_validate_click()
    }

    /// Swaps the active list, keeping score and position.
    pub fn on_source_toggle(&mut self, selection: &str) -> Source {
        if self.session.phase.is_over() {
            return self.session.source;
        }

        let source = Source::from_radio_value(selection);
        if source != self.session.source {
            info!(from = %self.session.source, to = %source, "source switched");
        }
        self.session.source = source;

        if self.session.phase == GamePhase::Active {
            self.show_current_or_finish();
        }
        source
    }

    pub fn on_timer_tick(&mut self) -> TimerState {
        if self.session.phase != GamePhase::Active || !self.session.countdown.is_running() {
            return self.session.countdown.state();
        }

        let state = self.session.countdown.tick();
        if state == TimerState::Expired {
            self.session.phase = GamePhase::TimedOut;
            self.presenter.render_timer(TimerDisplay::TimesUp);
            self.presenter.set_controls_enabled(false);
            info!(score = %self.session.score_text(), "time is up");
        } else {
            self.presenter.render_timer(TimerDisplay::Remaining(
                self.session.countdown.remaining_secs(),
            ));
        }
        state
    }

    fn advance(&mut self) {
        if self.session.current_index < self.session.item_list().len() {
            self.session.current_index += 1;
        }
        self.presenter
            .render_score(self.session.score, self.session.attempted());
        self.presenter.clear_input();
        self.show_current_or_finish();
    }

    fn show_current_or_finish(&mut self) {
        match self.session.current_item() {
            Some(item) => {
                self.presenter.render_prompt(Prompt::Item(item));
                if self.session.phase == GamePhase::NotStarted {
                    self.session.phase = GamePhase::Active;
                    info!(source = %self.session.source, "session started");
                }
            }
            None => self.finish(),
        }
    }

    fn finish(&mut self) {
        self.session.phase = GamePhase::Finished;
        self.presenter.render_prompt(Prompt::Finished);
        self.presenter.set_controls_enabled(false);
        info!(score = %self.session.score_text(), "session finished");
    }
}
