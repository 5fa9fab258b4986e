//! # Views
//!
//! Anything the presentation host can show for a `ScreenId` implements
//! [`View`]. Views are rendered from a shared borrow of the Navigator's
//! tables, so they never mutate navigation state directly. A view that wants
//! to go back calls the ambient [`DismissAction`] from its [`Environment`];
//! the host applies it through the Navigator once the event is handled.

use std::cell::Cell;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::payload::Payload;
use crate::core::screen::ScreenId;
use crate::tui::event::TuiEvent;

/// What the host knows about the screen being rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    /// `None` for the root view.
    pub id: Option<&'a ScreenId>,
    /// Data stored when the screen was pushed or presented "with data".
    pub payload: Option<&'a Payload>,
}

/// Request slot for "dismiss whatever is currently presented".
#[derive(Debug, Default)]
pub struct DismissAction {
    requested: Cell<bool>,
}

impl DismissAction {
    pub fn call(&self) {
        self.requested.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }
}

/// Ambient values handed to a view while it handles an event.
#[derive(Debug, Default)]
pub struct Environment {
    pub dismiss: DismissAction,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Toolbar content collected from a view's decorations.
#[derive(Default)]
pub struct Toolbar<'a> {
    pub back_hidden: bool,
    pub leading_back: Option<&'a dyn View>,
    pub leading: Vec<&'a dyn View>,
    pub trailing: Vec<&'a dyn View>,
}

pub trait View {
    /// Draw the view's body into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>);

    fn title(&self) -> Option<&str> {
        None
    }

    /// Columns this view wants when placed in a toolbar slot.
    fn width_hint(&self) -> Option<u16> {
        None
    }

    /// Add this view's toolbar items. Plain views contribute nothing.
    fn contribute_toolbar<'a>(&'a self, _toolbar: &mut Toolbar<'a>) {}

    /// Returns true if the event was consumed.
    fn handle_event(&self, _event: &TuiEvent, _env: &Environment) -> bool {
        false
    }
}

/// A type-erased view, for tables that mix view types.
pub type AnyView = Box<dyn View>;

impl<T: View + ?Sized> View for Box<T> {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        (**self).render(frame, area, ctx);
    }

    fn title(&self) -> Option<&str> {
        (**self).title()
    }

    fn width_hint(&self) -> Option<u16> {
        (**self).width_hint()
    }

    fn contribute_toolbar<'a>(&'a self, toolbar: &mut Toolbar<'a>) {
        (**self).contribute_toolbar(toolbar);
    }

    fn handle_event(&self, event: &TuiEvent, env: &Environment) -> bool {
        (**self).handle_event(event, env)
    }
}
