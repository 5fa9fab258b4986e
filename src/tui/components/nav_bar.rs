//! # NavBar Component
//!
//! The one-line bar above a stack screen:
//!
//! ```text
//! ‹ Back  [leading…]        Title        [trailing…]
//! ```
//!
//! The default back control is shown when the screen is not the root and no
//! decoration hid it. A `back_button_item` decoration takes its place.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::view::{RenderContext, Toolbar, View};

pub const DEFAULT_BACK_LABEL: &str = "‹ Back";
const ITEM_GAP: u16 = 1;
const DEFAULT_ITEM_WIDTH: u16 = 8;

pub struct NavBar<'a> {
    pub title: Option<&'a str>,
    pub toolbar: Toolbar<'a>,
    /// False on the root screen, where there is nothing to go back to.
    pub can_go_back: bool,
}

impl<'a> NavBar<'a> {
    pub fn for_view(view: &'a dyn View, can_go_back: bool) -> Self {
        let mut toolbar = Toolbar::default();
        view.contribute_toolbar(&mut toolbar);
        Self {
            title: view.title(),
            toolbar,
            can_go_back,
        }
    }

    pub fn shows_default_back(&self) -> bool {
        self.can_go_back && !self.toolbar.back_hidden
    }
}

fn item_width(view: &dyn View) -> u16 {
    view.width_hint().unwrap_or(DEFAULT_ITEM_WIDTH)
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let ctx = RenderContext::default();
        let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        if let Some(title) = self.title {
            frame.render_widget(
                Paragraph::new(title).style(style).alignment(Alignment::Center),
                area,
            );
        }

        // Leading items, left to right
        let mut x = area.x;
        let right_edge = area.x + area.width;
        if self.shows_default_back() {
            let width = (DEFAULT_BACK_LABEL.width() as u16).min(right_edge - x);
            frame.render_widget(
                Paragraph::new(DEFAULT_BACK_LABEL).style(Style::default().fg(Color::Cyan)),
                Rect::new(x, area.y, width, 1),
            );
            x += width + ITEM_GAP;
        }
        let leading = self.toolbar.leading_back.iter().chain(self.toolbar.leading.iter());
        for item in leading {
            if x >= right_edge {
                break;
            }
            let width = item_width(*item).min(right_edge - x);
            item.render(frame, Rect::new(x, area.y, width, 1), &ctx);
            x += width + ITEM_GAP;
        }

        // Trailing items, right to left, never over the leading ones
        let mut end = right_edge;
        for item in self.toolbar.trailing.iter() {
            let width = item_width(*item);
            if end < x + width {
                break;
            }
            end -= width;
            item.render(frame, Rect::new(end, area.y, width, 1), &ctx);
            end = end.saturating_sub(ITEM_GAP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use crate::tui::components::{Label, TextScreen, ViewExt};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(bar: &mut NavBar<'_>) -> String {
        let backend = TestBackend::new(50, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_default_back_shown_off_root() {
        let screen = TextScreen::new("Detail", ["x"]);
        let mut bar = NavBar::for_view(&screen, true);
        let text = draw(&mut bar);
        assert!(text.contains(DEFAULT_BACK_LABEL));
        assert!(text.contains("Detail"));
    }

    #[test]
    fn test_no_back_on_root() {
        let screen = TextScreen::new("Home", ["x"]);
        let mut bar = NavBar::for_view(&screen, false);
        assert!(!draw(&mut bar).contains(DEFAULT_BACK_LABEL));
    }

    #[test]
    fn test_custom_back_replaces_default() {
        let screen = TextScreen::new("Detail", ["x"]).back_button_item(Label::new("✕ Close"));
        let mut bar = NavBar::for_view(&screen, true);
        let text = draw(&mut bar);
        assert!(!text.contains(DEFAULT_BACK_LABEL));
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_leading_item_follows_default_back_by_display_width() {
        let screen = TextScreen::new("Detail", ["x"]).leading_item(Label::new("Menu"));
        let mut bar = NavBar::for_view(&screen, true);
        bar.toolbar.back_hidden = false;
        let text = draw(&mut bar);
        assert!(text.starts_with("‹ Back Menu"), "got {text:?}");
    }

    #[test]
    fn test_trailing_items_right_aligned() {
        let screen = TextScreen::new("Detail", ["x"]).trailing_item(Label::new("Edit"));
        let mut bar = NavBar::for_view(&screen, true);
        let text = draw(&mut bar);
        assert!(text.contains(DEFAULT_BACK_LABEL));
        assert!(text.trim_end().ends_with("Edit"));
    }
}
