use ratatui::Frame;

use crate::{
    app::{App, AppState},
    ui::share::SharePopup,
};

/// A UI Screen boundary: responsible for rendering one app state
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Game screen - item, input, countdown and score
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(app, f.area());
    }
}

/// Game screen with the share form on top
pub struct SharingScreen;

impl Screen for SharingScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let area = f.area();
        f.render_widget(app, area);
        f.render_widget(SharePopup::new(&app.share_form), area);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Playing => Box::new(PlayingScreen),
        AppState::Sharing => Box::new(SharingScreen),
    }
}
