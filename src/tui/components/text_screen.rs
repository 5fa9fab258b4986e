//! # Text Screens
//!
//! The plain views the demo navigates between: a titled block of text, and a
//! one-line `Label` used for toolbar items.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::payload::Payload;
use crate::tui::view::{RenderContext, View};

pub struct TextScreen {
    title: String,
    lines: Vec<String>,
}

impl TextScreen {
    pub fn new<I, S>(title: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl View for TextScreen {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let mut text: Vec<Line> = self.lines.iter().map(|l| Line::raw(l.as_str())).collect();

        if let Some(payload) = ctx.payload {
            text.push(Line::raw(""));
            text.push(Line::from(vec![
                Span::styled("data: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    describe_payload(payload),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }
}

/// Best-effort rendering of common payload types.
pub fn describe_payload(payload: &Payload) -> String {
    if let Some(s) = payload.get::<String>() {
        return s.clone();
    }
    if let Some(s) = payload.get::<&str>() {
        return (*s).to_string();
    }
    if let Some(n) = payload.get::<i64>() {
        return n.to_string();
    }
    if let Some(n) = payload.get::<i32>() {
        return n.to_string();
    }
    if let Some(n) = payload.get::<u64>() {
        return n.to_string();
    }
    if let Some(n) = payload.get::<usize>() {
        return n.to_string();
    }
    format!("<{}>", payload.type_name())
}

/// A single line of text, sized to its content.
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl View for Label {
    fn render(&self, frame: &mut Frame, area: Rect, _ctx: &RenderContext<'_>) {
        frame.render_widget(
            Span::styled(self.text.as_str(), Style::default().fg(Color::Cyan)),
            area,
        );
    }

    fn width_hint(&self) -> Option<u16> {
        Some(self.text.width() as u16)
    }
}
