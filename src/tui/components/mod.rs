//! # TUI Components
//!
//! ## Shell chrome (props-based [`Component`](super::component::Component)s)
//!
//! - `TitleBar`: breadcrumb of the stack plus modal/overlay status
//! - `NavBar`: the toolbar line above a stack screen
//!
//! ## Views (things the Navigator can show)
//!
//! - `TextScreen`: titled text, shows the screen's payload if any
//! - `Label`: one line of text, used for toolbar items
//!
//! ## Decorations
//!
//! - `toolbar`: `ViewExt::{back_button_item, leading_item, trailing_item}`
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status line)
//! ├── nav_bar.rs       (per-screen toolbar line)
//! ├── text_screen.rs   (TextScreen, Label)
//! └── toolbar.rs       (decorations)
//! ```

mod nav_bar;
mod text_screen;
mod title_bar;
pub mod toolbar;

pub use nav_bar::{DEFAULT_BACK_LABEL, NavBar};
pub use text_screen::{Label, TextScreen, describe_payload};
pub use title_bar::TitleBar;
pub use toolbar::{Decorated, ToolbarPlacement, ViewExt};
