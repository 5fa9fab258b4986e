use ratatui::layout::Rect;
use ratatui::Frame;

/// A piece of shell chrome (title bar, navigation bar).
///
/// Chrome follows the props pattern:
/// - It receives data via props (struct fields).
/// - It renders to a `Frame` within a given `Rect`.
///
/// Navigable screens implement [`View`](super::view::View) instead, which
/// renders from a shared borrow so the Navigator can own them.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
