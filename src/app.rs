use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::{
    config::Config,
    controller::GameController,
    session::Session,
    share::{MailRequest, ShareForm},
    source::{ItemLists, ListError, Source},
    timer::TimerState,
    view::TerminalView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Playing,
    Sharing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub controller: GameController<TerminalView>,
    pub state: AppState,
    pub share_form: ShareForm,
    countdown_started: bool,
    pending_mail: Option<MailRequest>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, ListError> {
        let mut lists = ItemLists::load(
            config.words_file.as_deref(),
            config.sentences_file.as_deref(),
        )?;
        if config.shuffle {
            lists.shuffle(&mut rand::thread_rng());
        }

        Ok(Self::with_lists(lists, config))
    }

    pub fn with_lists(lists: ItemLists, config: &Config) -> Self {
        let session = Session::new(lists, &config.session_config());
        let mut controller = GameController::new(session, TerminalView::new(config.bell));
        controller.start();

        Self {
            controller,
            state: AppState::Playing,
            share_form: ShareForm::default(),
            countdown_started: false,
            pending_mail: None,
        }
    }

    pub fn view(&self) -> &TerminalView {
        self.controller.presenter()
    }

    pub fn source(&self) -> Source {
        self.controller.session().source
    }

    pub fn on_tick(&mut self) -> TimerState {
        self.controller.on_timer_tick()
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyResult::Quit;
        }

        match self.state {
            AppState::Playing => self.on_playing_key(key),
            AppState::Sharing => {
                self.on_sharing_key(key);
                KeyResult::Continue
            }
        }
    }

    /// True once after the first keystroke started the countdown.
    pub fn take_countdown_started(&mut self) -> bool {
        std::mem::take(&mut self.countdown_started)
    }

    pub fn take_pending_mail(&mut self) -> Option<MailRequest> {
        self.pending_mail.take()
    }

    pub fn take_bell(&mut self) -> bool {
        self.controller.presenter_mut().take_bell()
    }

    fn on_playing_key(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Esc => return KeyResult::Quit,
            KeyCode::Enter => {
                if self.view().controls_enabled {
                    self.controller.on_enter_key();
                }
            }
            KeyCode::F(1) => {
                self.controller.on_source_toggle(Source::Words.radio_value());
            }
            KeyCode::F(2) => {
                self.controller
                    .on_source_toggle(Source::Sentences.radio_value());
            }
            KeyCode::Tab => {
                debug!("share form opened");
                self.state = AppState::Sharing;
            }
            KeyCode::Backspace => {
                if self.view().controls_enabled {
                    self.controller.presenter_mut().input.pop();
                    self.feed_input();
                }
            }
            KeyCode::Char(c) => {
                if self.view().controls_enabled {
                    self.controller.presenter_mut().input.push(c);
                    self.feed_input();
                }
            }
            _ => {}
        }
        KeyResult::Continue
    }

    fn on_sharing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state = AppState::Playing,
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => self.share_form.switch_focus(),
            KeyCode::Backspace => {
                self.share_form.focused_mut().pop();
            }
            KeyCode::Enter => {
                let score = self.controller.session().score_text();
                if let Some(request) = self.share_form.submit(&score) {
                    self.pending_mail = Some(request);
                }
            }
            KeyCode::Char(c) => self.share_form.focused_mut().push(c),
            _ => {}
        }
    }

    fn feed_input(&mut self) {
        let was_idle = self.controller.session().countdown.state() == TimerState::Idle;
        let text = self.view().input.clone();
        self.controller.on_input(&text);

        if was_idle && self.controller.session().countdown.state() != TimerState::Idle {
            self.countdown_started = true;
        }
    }
}
