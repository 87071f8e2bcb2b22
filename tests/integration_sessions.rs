use azertype::{
    controller::{GameController, InputOutcome},
    presenter::{Prompt, TimerDisplay},
    session::{GamePhase, Session, SessionConfig},
    source::{ItemLists, Source},
    timer::TimerState,
    view::TerminalView,
};

fn controller(words: &[&str], sentences: &[&str], secs: u64) -> GameController<TerminalView> {
    let lists = ItemLists::new(
        words.iter().map(|s| s.to_string()).collect(),
        sentences.iter().map(|s| s.to_string()).collect(),
    );
    let config = SessionConfig {
        countdown_secs: secs,
        source: Source::Words,
    };
    let mut controller = GameController::new(Session::new(lists, &config), TerminalView::new(false));
    controller.start();
    controller
}

/// Types `text` one character at a time, like the input field does.
fn type_text(controller: &mut GameController<TerminalView>, text: &str) -> InputOutcome {
    let mut outcome = InputOutcome::Ignored;
    for c in text.chars() {
        controller.presenter_mut().input.push(c);
        let typed = controller.presenter().input.clone();
        outcome = controller.on_input(&typed);
    }
    outcome
}

fn check_bounds(controller: &GameController<TerminalView>) {
    let session = controller.session();
    assert!(session.score <= session.current_index);
    assert!(session.current_index <= session.item_list().len());
}

#[test]
fn two_correct_items_finish_with_full_score() {
    let mut c = controller(&["cat", "dog"], &["A cat.", "A dog."], 60);

    assert_eq!(type_text(&mut c, "cat"), InputOutcome::Completed { correct: true });
    check_bounds(&c);
    assert_eq!(type_text(&mut c, "dog"), InputOutcome::Completed { correct: true });
    check_bounds(&c);

    assert_eq!(c.phase(), GamePhase::Finished);
    assert_eq!(c.session().score_text(), "2 / 2");
    assert_eq!(c.session().current_item(), None);
    assert_eq!(c.presenter().prompt, Prompt::Finished.text());
    assert_eq!(c.presenter().score_text(), "2 / 2");
    assert!(!c.presenter().controls_enabled);
}

#[test]
fn countdown_expiry_stops_progress() {
    let mut c = controller(&["cat", "dog"], &["A cat.", "A dog."], 60);
    type_text(&mut c, "ca");

    let mut state = TimerState::Running;
    for _ in 0..60 {
        state = c.on_timer_tick();
    }
    assert_eq!(state, TimerState::Expired);
    assert_eq!(c.phase(), GamePhase::TimedOut);
    assert_eq!(c.presenter().timer, TimerDisplay::TimesUp);
    assert_eq!(c.presenter().timer.text(), "Time's up");

    assert_eq!(c.on_input("cat"), InputOutcome::Ignored);
    assert!(!c.on_validate_click());
    assert!(!c.on_enter_key());
    assert_eq!(c.session().current_index, 0);
    check_bounds(&c);
}

#[test]
fn mixed_session_keeps_invariants() {
    let mut c = controller(
        &["cat", "dog", "owl", "bee", "elk"],
        &["One.", "Two.", "Three.", "Four.", "Five."],
        60,
    );

    type_text(&mut c, "cat");
    check_bounds(&c);
    type_text(&mut c, "dg");
    c.on_validate_click();
    check_bounds(&c);

    let (score, index) = (c.session().score, c.session().current_index);
    c.on_source_toggle("2");
    assert_eq!(c.session().score, score);
    assert_eq!(c.session().current_index, index);
    assert_eq!(c.presenter().prompt, "Three.");

    type_text(&mut c, "Three!");
    check_bounds(&c);
    assert_eq!(c.session().score, 1);

    c.on_source_toggle("1");
    assert_eq!(c.presenter().prompt, "bee");
    type_text(&mut c, "bee");
    c.on_enter_key();
    check_bounds(&c);

    assert_eq!(c.phase(), GamePhase::Finished);
    assert_eq!(c.session().score_text(), "2 / 5");
}

#[test]
fn repeated_input_does_not_reset_countdown() {
    let mut c = controller(&["lighthouse"], &["Light."], 10);
    type_text(&mut c, "l");
    c.on_timer_tick();
    c.on_timer_tick();
    c.on_timer_tick();
    type_text(&mut c, "ight");
    assert_eq!(c.session().countdown.remaining_secs(), 7);
    assert_eq!(c.presenter().timer, TimerDisplay::Remaining(7));
}
