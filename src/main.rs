use azertype::{
    app::{App, KeyResult},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
    share::MailRequest,
    source::Source,
    ui,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use tracing::{info, warn};
use webbrowser::Browser;

/// copy words or sentences against the clock, then share your score
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing game: copy the displayed words or sentences as fast and as accurately as you can. The countdown starts on your first keystroke; when you are done, share your score by email."
)]
pub struct Cli {
    /// number of seconds on the countdown
    #[clap(short = 's', long)]
    seconds: Option<u64>,

    /// list to start with
    #[clap(long, value_enum)]
    source: Option<Source>,

    /// JSON file replacing the built-in word list
    #[clap(long)]
    words_file: Option<PathBuf>,

    /// JSON file replacing the built-in sentence list
    #[clap(long)]
    sentences_file: Option<PathBuf>,

    /// shuffle both lists before playing
    #[clap(long)]
    shuffle: bool,

    /// do not ring the terminal bell on typos
    #[clap(long)]
    no_bell: bool,

    /// store the resulting settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line flags win over stored settings.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(secs) = self.seconds {
            config.countdown_secs = secs;
        }
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(ref path) = self.words_file {
            config.words_file = Some(path.clone());
        }
        if let Some(ref path) = self.sentences_file {
            config.sentences_file = Some(path.clone());
        }
        if self.shuffle {
            config.shuffle = true;
        }
        if self.no_bell {
            config.bell = false;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let log_path = AppDirs::log_path();
    if let Err(err) = logging::init_file_logging(&log_path) {
        eprintln!("logging disabled, cannot open {}: {err}", log_path.display());
    }

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    if cli.save_config {
        store.save(&config)?;
        info!(path = %store.path().display(), "settings saved");
    }

    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(err) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, err).exit();
        }
    };

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(score = %app.controller.session().score_text(), "exiting");
    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    loop {
        terminal.draw(|f| ui::draw(app, f))?;

        match runner.step() {
            GameEvent::Tick => {
                app.on_tick();
            }
            GameEvent::Resize => {}
            GameEvent::Key(key) => {
                if app.on_key(key) == KeyResult::Quit {
                    break;
                }
                // the countdown's first second starts at the first keystroke
                if app.take_countdown_started() {
                    runner.restart_ticks();
                }
                if let Some(mail) = app.take_pending_mail() {
                    open_mail(&mail);
                }
            }
        }

        if app.take_bell() {
            execute!(io::stdout(), Print('\x07'))?;
        }
    }

    Ok(())
}

fn open_mail(mail: &MailRequest) {
    if !Browser::is_available() {
        info!("no mail handler available, link left on screen");
        return;
    }
    if let Err(err) = webbrowser::open(&mail.mailto_url()) {
        warn!(%err, "could not open mail client");
    }
}
