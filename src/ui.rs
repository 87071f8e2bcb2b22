pub mod screen;
pub mod share;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use crate::{
    app::App,
    presenter::{ItemStyle, TimerDisplay},
    source::Source,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

/// Text colour of the item on its white background.
pub const CORAL: Color = Color::Rgb(247, 108, 94);

pub fn draw(app: &App, f: &mut Frame) {
    screen::current_screen(&app.state).render(app, f);
}

pub fn item_style(style: ItemStyle) -> Style {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match style {
        ItemStyle::Neutral => bold.fg(CORAL).bg(Color::White),
        ItemStyle::Mismatch => bold.fg(Color::White).bg(Color::Red),
    }
}

fn source_line(active: Source) -> Line<'static> {
    let selected = Style::default()
        .fg(CORAL)
        .add_modifier(Modifier::BOLD);
    let unselected = Style::default().add_modifier(Modifier::DIM);

    let option = |source: Source, key: &'static str, label: &'static str| {
        let (mark, style) = if source == active {
            ("(•)", selected)
        } else {
            ("( )", unselected)
        };
        Span::styled(format!("{key} {mark} {label}"), style)
    };

    Line::from(vec![
        option(Source::Words, "F1", "words"),
        Span::raw("    "),
        option(Source::Sentences, "F2", "sentences"),
    ])
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.view();

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // source
                Constraint::Length(1), // padding
                Constraint::Length(1), // countdown
                Constraint::Min(3),    // item
                Constraint::Length(3), // input
                Constraint::Length(1), // score
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Span::styled("Azertype", bold_style.fg(CORAL)))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(source_line(self.source()))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let timer_style = match view.timer {
            TimerDisplay::Remaining(_) => bold_style,
            TimerDisplay::TimesUp => bold_style.fg(Color::Red),
        };
        Paragraph::new(Span::styled(view.timer.text(), timer_style))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        Paragraph::new(Span::styled(view.prompt.as_str(), item_style(view.style)))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[4], buf);

        // an empty input shows the item as a placeholder
        let input = if view.input.is_empty() {
            Span::styled(view.prompt.as_str(), dim_style)
        } else {
            Span::styled(view.input.as_str(), bold_style)
        };
        let input_block = Block::default().borders(Borders::ALL).border_style(
            if view.controls_enabled {
                Style::default()
            } else {
                dim_style
            },
        );
        Paragraph::new(input)
            .block(input_block)
            .render(chunks[5], buf);

        Paragraph::new(Span::styled(
            format!("Score: {}", view.score_text()),
            bold_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);

        Paragraph::new(Span::styled(
            "(enter) skip / (F1) words / (F2) sentences / (tab) share / (esc)ape",
            italic_style,
        ))
        .render(chunks[7], buf);
    }
}
