//! # Toolbar Decorations
//!
//! Stateless wrappers that change a screen's navigation bar:
//!
//! - [`ViewExt::back_button_item`]: hide the default back control and put a
//!   custom one in its place. Activating it (Back or Enter) calls the
//!   ambient dismiss action.
//! - [`ViewExt::leading_item`]: hide the default back control and put a
//!   custom view in the leading slot. Back is swallowed, as with a hidden
//!   back button.
//! - [`ViewExt::trailing_item`]: add a custom view to the trailing slot.
//!   The default back control stays.
//!
//! Decorations compose: `screen.trailing_item(a).back_button_item(b)` shows
//! both. They never touch the Navigator.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;
use crate::tui::view::{AnyView, Environment, RenderContext, Toolbar, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarPlacement {
    LeadingBack,
    Leading,
    Trailing,
}

impl ToolbarPlacement {
    pub fn hides_default_back(self) -> bool {
        !matches!(self, ToolbarPlacement::Trailing)
    }
}

/// `content` plus one toolbar item.
pub struct Decorated<C, I> {
    content: C,
    item: I,
    placement: ToolbarPlacement,
}

impl<C, I> Decorated<C, I> {
    pub fn new(content: C, item: I, placement: ToolbarPlacement) -> Self {
        Self {
            content,
            item,
            placement,
        }
    }
}

impl<C: View, I: View> View for Decorated<C, I> {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        self.content.render(frame, area, ctx);
    }

    fn title(&self) -> Option<&str> {
        self.content.title()
    }

    fn width_hint(&self) -> Option<u16> {
        self.content.width_hint()
    }

    fn contribute_toolbar<'a>(&'a self, toolbar: &mut Toolbar<'a>) {
        match self.placement {
            ToolbarPlacement::LeadingBack => toolbar.leading_back = Some(&self.item),
            ToolbarPlacement::Leading => toolbar.leading.push(&self.item),
            ToolbarPlacement::Trailing => toolbar.trailing.push(&self.item),
        }
        if self.placement.hides_default_back() {
            toolbar.back_hidden = true;
        }
        self.content.contribute_toolbar(toolbar);
    }

    fn handle_event(&self, event: &TuiEvent, env: &Environment) -> bool {
        if self.content.handle_event(event, env) {
            return true;
        }
        match (self.placement, event) {
            (ToolbarPlacement::LeadingBack, TuiEvent::Back | TuiEvent::Confirm) => {
                env.dismiss.call();
                true
            }
            (ToolbarPlacement::Leading, TuiEvent::Back) => true,
            _ => false,
        }
    }
}

/// Decoration methods for every view.
pub trait ViewExt: View + Sized {
    fn back_button_item<I: View>(self, custom: I) -> Decorated<Self, I> {
        Decorated::new(self, custom, ToolbarPlacement::LeadingBack)
    }

    fn leading_item<I: View>(self, custom: I) -> Decorated<Self, I> {
        Decorated::new(self, custom, ToolbarPlacement::Leading)
    }

    fn trailing_item<I: View>(self, custom: I) -> Decorated<Self, I> {
        Decorated::new(self, custom, ToolbarPlacement::Trailing)
    }

    /// Erase the view's type.
    fn any(self) -> AnyView
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<V: View> ViewExt for V {}
