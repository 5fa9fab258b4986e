//! # TitleBar Component
//!
//! Top status line showing where the user is:
//!
//! - The stack as a breadcrumb (`root › list › detail`)
//! - The active modal and overlay, if any
//! - A `PREVIEW` marker when mutations are being ignored
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::from_navigator(&navigator);
//! title_bar.render(frame, area);
//! ```
//!
//! Long stacks are elided from the front so the current screen stays
//! visible on narrow terminals.

use crate::core::navigator::Navigator;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " › ";

pub struct TitleBar {
    /// Stack ids, bottom first
    pub path: Vec<String>,
    /// Active modal id
    pub sheet: Option<String>,
    /// Active full-screen overlay id
    pub cover: Option<String>,
    /// Whether the Navigator is in preview mode
    pub preview: bool,
}

impl TitleBar {
    pub fn new(
        path: Vec<String>,
        sheet: Option<String>,
        cover: Option<String>,
        preview: bool,
    ) -> Self {
        Self {
            path,
            sheet,
            cover,
            preview,
        }
    }

    pub fn from_navigator<V>(navigator: &Navigator<V>) -> Self {
        Self::new(
            navigator.path().iter().map(ToString::to_string).collect(),
            navigator.sheet().map(ToString::to_string),
            navigator.cover().map(ToString::to_string),
            navigator.mode().is_preview(),
        )
    }

    /// The full title text, before any width fitting.
    pub fn text(&self) -> String {
        let mut crumbs = vec!["root".to_string()];
        crumbs.extend(self.path.iter().cloned());
        self.compose(&crumbs.join(SEPARATOR))
    }

    fn compose(&self, breadcrumb: &str) -> String {
        let mut text = format!("navstack | {breadcrumb}");
        if let Some(sheet) = &self.sheet {
            text.push_str(&format!(" | modal: {sheet}"));
        }
        if let Some(cover) = &self.cover {
            text.push_str(&format!(" | overlay: {cover}"));
        }
        if self.preview {
            text.push_str(" | PREVIEW");
        }
        text
    }

    /// Drop breadcrumbs from the front until the text fits `width`.
    fn fitted(&self, width: u16) -> String {
        let mut crumbs: Vec<&str> = std::iter::once("root")
            .chain(self.path.iter().map(String::as_str))
            .collect();
        let mut text = self.text();
        while text.width() > width as usize && crumbs.len() > 1 {
            crumbs.remove(0);
            text = self.compose(&format!("…{SEPARATOR}{}", crumbs.join(SEPARATOR)));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.fitted(area.width)), area);
    }
}
