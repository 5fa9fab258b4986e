//! # Presentation Host
//!
//! Renders a Navigator. The host borrows the Navigator and the static
//! destinations read-only, resolves the ids that are currently visible and
//! draws them in three layers:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ nav bar + stack top (or root)│  layer 1
//! │     ┌───────────────┐        │
//! │     │  modal popup  │        │  layer 2
//! │     └───────────────┘        │
//! └──────────────────────────────┘
//!   full-screen overlay on top       layer 3
//! ```
//!
//! Ids that resolve to no view draw nothing. Events go to the front-most
//! visible view; a dismiss requested through the view's `Environment` is
//! applied through the Navigator's public methods after the borrow ends.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Clear};

use crate::core::destinations::{Destinations, Presentation};
use crate::core::navigator::{NavError, Navigator};
use crate::core::screen::ScreenId;
use crate::tui::component::Component;
use crate::tui::components::NavBar;
use crate::tui::event::TuiEvent;
use crate::tui::view::{Environment, RenderContext, View};

const SHEET_WIDTH_PERCENT: u16 = 60;
const SHEET_HEIGHT_PERCENT: u16 = 60;

/// What happened when an event was offered to the visible view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostResponse {
    pub handled: bool,
    pub dismiss_requested: bool,
}

pub struct PresentationHost<'a, V> {
    navigator: &'a Navigator<V>,
    destinations: &'a Destinations<V>,
    root: &'a dyn View,
}

impl<'a, V: View + 'a> PresentationHost<'a, V> {
    pub fn new(
        navigator: &'a Navigator<V>,
        destinations: &'a Destinations<V>,
        root: &'a dyn View,
    ) -> Self {
        Self {
            navigator,
            destinations,
            root,
        }
    }

    fn resolve(&self, kind: Presentation, id: Option<&ScreenId>) -> Option<&'a V> {
        let destinations = self.destinations;
        id.and_then(|id| destinations.resolve(self.navigator, kind, id.as_str()))
    }

    pub fn resolve_top(&self) -> Option<&'a V> {
        self.resolve(Presentation::Stack, self.navigator.top())
    }

    pub fn resolve_sheet(&self) -> Option<&'a V> {
        self.resolve(Presentation::Sheet, self.navigator.sheet())
    }

    pub fn resolve_cover(&self) -> Option<&'a V> {
        self.resolve(Presentation::Cover, self.navigator.cover())
    }

    /// The stack-layer view: root when the stack is empty.
    fn stack_view(&self) -> Option<&'a dyn View> {
        match self.navigator.top() {
            None => Some(self.root),
            Some(_) => self.resolve_top().map(|v| v as &dyn View),
        }
    }

    /// The view that receives input: overlay, then modal, then stack.
    pub fn front(&self) -> Option<&'a dyn View> {
        if let Some(cover) = self.resolve_cover() {
            return Some(cover);
        }
        if let Some(sheet) = self.resolve_sheet() {
            return Some(sheet);
        }
        self.stack_view()
    }

    fn context(&self, id: Option<&'a ScreenId>) -> RenderContext<'a> {
        RenderContext {
            id,
            payload: id.and_then(|id| self.navigator.payload(id.as_str())),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let navigator = self.navigator;

        // Layer 1: stack
        let [bar_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        if let Some(view) = self.stack_view() {
            let top = navigator.top();
            NavBar::for_view(view, top.is_some()).render(frame, bar_area);
            view.render(frame, body_area, &self.context(top));
        }

        // Layer 2: modal
        if let (Some(id), Some(view)) = (navigator.sheet(), self.resolve_sheet()) {
            let popup = centered(area, SHEET_WIDTH_PERCENT, SHEET_HEIGHT_PERCENT);
            draw_framed(frame, popup, view, id, &self.context(Some(id)), Color::Yellow);
        }

        // Layer 3: overlay
        if let (Some(id), Some(view)) = (navigator.cover(), self.resolve_cover()) {
            draw_framed(frame, area, view, id, &self.context(Some(id)), Color::Magenta);
        }
    }

    pub fn handle_event(&self, event: &TuiEvent) -> HostResponse {
        let env = Environment::new();
        let handled = self
            .front()
            .is_some_and(|view| view.handle_event(event, &env));
        HostResponse {
            handled,
            dismiss_requested: env.dismiss.is_requested(),
        }
    }
}

fn draw_framed(
    frame: &mut Frame,
    area: Rect,
    view: &dyn View,
    id: &ScreenId,
    ctx: &RenderContext<'_>,
    accent: Color,
) {
    let title = view.title().unwrap_or(id.as_str());
    let block = Block::bordered()
        .title(format!(" {title} "))
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    view.render(frame, inner, ctx);
}

fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// The ambient dismiss action: close the modal/overlay if one is shown,
/// otherwise pop one screen. Does nothing at the root.
///
/// Returns true if navigation state changed.
pub fn perform_dismiss<V>(navigator: &mut Navigator<V>) -> bool {
    let before = navigator.revision();
    if navigator.sheet().is_some() || navigator.cover().is_some() {
        navigator.dismiss();
    } else if let Err(NavError::EmptyStackUnderflow) = navigator.pop(None) {
        debug!("dismiss at root ignored");
    }
    navigator.revision() != before
}

/// Offer `event` to the visible view, then apply any dismissal.
///
/// An unhandled Back falls through to [`perform_dismiss`]. Returns true if
/// the event was consumed.
pub fn route_event<V: View>(
    navigator: &mut Navigator<V>,
    destinations: &Destinations<V>,
    root: &dyn View,
    event: &TuiEvent,
) -> bool {
    let response = PresentationHost::new(navigator, destinations, root).handle_event(event);
    let default_back = !response.handled && *event == TuiEvent::Back;
    if response.dismiss_requested || default_back {
        perform_dismiss(navigator);
    }
    response.handled || default_back
}
