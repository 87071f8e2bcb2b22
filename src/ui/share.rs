use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;
use webbrowser::Browser;

use crate::share::{Field, ShareForm};

const MIN_WIDTH: u16 = 50;
const HEIGHT: u16 = 10;

pub struct SharePopup<'a> {
    form: &'a ShareForm,
}

impl<'a> SharePopup<'a> {
    pub fn new(form: &'a ShareForm) -> Self {
        Self { form }
    }

    fn field_line(&self, label: &'static str, value: &'a str, field: Field) -> Line<'a> {
        let focused = self.form.focus == field;
        let marker = if focused { "› " } else { "  " };
        let value_style = if focused {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(marker),
            Span::styled(label, Style::default().add_modifier(Modifier::DIM)),
            Span::styled(value, value_style),
        ])
    }
}

/// Centers a `width` x `height` box in `area`, clamped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl Widget for SharePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let link_width = self
            .form
            .last_link
            .as_deref()
            .map(|l| u16::try_from(l.width()).unwrap_or(u16::MAX).saturating_add(4))
            .unwrap_or(0);
        let popup = centered(area, MIN_WIDTH.max(link_width), HEIGHT);

        let mut lines = vec![
            self.field_line("Name:  ", &self.form.name, Field::Name),
            self.field_line("Email: ", &self.form.email, Field::Email),
            Line::default(),
        ];

        if let Some(error) = self.form.error().filter(|e| !e.is_empty()) {
            lines.push(Line::from(Span::styled(
                error,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        } else if let Some(link) = self.form.last_link.as_deref() {
            if Browser::is_available() {
                lines.push(Line::from("Opening your mail client..."));
            } else {
                lines.push(Line::from(Span::styled(
                    link,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "(enter) send / (tab) switch field / (esc) close",
            Style::default().add_modifier(Modifier::ITALIC),
        )));

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Share your score")
                    .title_alignment(Alignment::Center),
            )
            .wrap(Wrap { trim: false })
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(form: &ShareForm) -> String {
        let area = Rect::new(0, 0, 80, 20);
        let mut buffer = Buffer::empty(area);
        SharePopup::new(form).render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_fields() {
        let mut form = ShareForm::default();
        form.name = "Arthur".into();
        form.email = "arthur@earth.example".into();
        let rendered = render(&form);
        assert!(rendered.contains("Share your score"));
        assert!(rendered.contains("Arthur"));
        assert!(rendered.contains("arthur@earth.example"));
    }

    #[test]
    fn test_renders_error_message() {
        let mut form = ShareForm::default();
        form.submit("0 / 0");
        let rendered = render(&form);
        assert!(rendered.contains("The name is too short"));
    }

    #[test]
    fn test_renders_very_long_link() {
        let mut form = ShareForm::default();
        form.name = "Arthur".repeat(20_000);
        form.email = "arthur@earth.example".into();
        assert!(form.submit("1 / 1").is_some());
        assert!(form.last_link.as_ref().unwrap().len() > u16::MAX as usize);

        let rendered = render(&form);
        assert!(rendered.contains("Share your score"));
    }

    #[test]
    fn test_centered_is_clamped() {
        let area = Rect::new(0, 0, 30, 5);
        let rect = centered(area, 50, 10);
        assert_eq!(rect, Rect::new(0, 0, 30, 5));

        let rect = centered(Rect::new(0, 0, 80, 20), 50, 10);
        assert_eq!(rect, Rect::new(15, 5, 50, 10));
    }
}
