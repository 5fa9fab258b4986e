//! # Demo Shell
//!
//! Owns a Navigator, its static destinations and a root view, and maps
//! keys to Navigator operations so every operation can be tried by hand:
//!
//! | key | operation                                  |
//! |-----|--------------------------------------------|
//! | `l` | `push("list")`                             |
//! | `d` | `push_with("detail", "item #n")`           |
//! | `g` | `push_view(generated, None)`               |
//! | `s` | `present("share")`                         |
//! | `S` | `present_view(generated, None)`            |
//! | `f` | `present_full_screen_with("player", n)`    |
//! | `F` | `present_full_screen_view(generated, None)`|
//! | `p` | `pop(None)`                                |
//! | `t` | `pop(Some("list"))`                        |
//! | `r` | `pop_to_root()`                            |
//! | `x` | `dismiss()`                                |

use log::{info, warn};

use crate::core::config::ResolvedConfig;
use crate::core::destinations::Destinations;
use crate::core::navigator::{Navigator, PopOutcome};
use crate::tui::components::{Label, TextScreen, ViewExt};
use crate::tui::event::TuiEvent;
use crate::tui::host::route_event;
use crate::tui::view::AnyView;

pub const HELP_TEXT: &str =
    "l list  d detail  g gen  s sheet  S gen-sheet  f cover  F gen-cover  p pop  t pop→list  r root  x dismiss  q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PushList,
    PushDetail,
    PushGenerated,
    PresentShare,
    PresentGenerated,
    PresentPlayer,
    CoverGenerated,
    Pop,
    PopToList,
    PopToRoot,
    Dismiss,
}

impl Command {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            'l' => Some(Command::PushList),
            'd' => Some(Command::PushDetail),
            'g' => Some(Command::PushGenerated),
            's' => Some(Command::PresentShare),
            'S' => Some(Command::PresentGenerated),
            'f' => Some(Command::PresentPlayer),
            'F' => Some(Command::CoverGenerated),
            'p' => Some(Command::Pop),
            't' => Some(Command::PopToList),
            'r' => Some(Command::PopToRoot),
            'x' => Some(Command::Dismiss),
            _ => None,
        }
    }
}

pub struct Shell {
    pub navigator: Navigator<AnyView>,
    pub destinations: Destinations<AnyView>,
    pub root: TextScreen,
    pub status_message: String,
    generated: usize,
}

impl Shell {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            navigator: Navigator::with_options(config.run_mode, config.eviction),
            destinations: default_destinations(),
            root: TextScreen::new(
                "Home",
                [
                    "navstack demo",
                    "",
                    "Use the keys below to drive the navigator.",
                    "Esc / Backspace goes back.",
                ],
            ),
            status_message: String::new(),
            generated: 0,
        }
    }

    fn next_generated(&mut self, kind: &str) -> AnyView {
        self.generated += 1;
        TextScreen::new(
            format!("Generated {}", self.generated),
            [format!("A {kind} view registered at runtime.")],
        )
        .any()
    }

    pub fn apply(&mut self, command: Command) {
        let nav = &mut self.navigator;
        match command {
            Command::PushList => nav.push("list"),
            Command::PushDetail => {
                let item = format!("item #{}", nav.depth() + 1);
                nav.push_with("detail", item);
            }
            Command::PushGenerated => {
                let view = self.next_generated("pushed");
                self.navigator.push_view(view, None);
            }
            Command::PresentShare => nav.present("share"),
            Command::PresentGenerated => {
                let view = self.next_generated("modal");
                self.navigator.present_view(view, None);
            }
            Command::PresentPlayer => {
                let track = nav.revision();
                nav.present_full_screen_with("player", track);
            }
            Command::CoverGenerated => {
                let view = self.next_generated("full-screen");
                self.navigator.present_full_screen_view(view, None);
            }
            Command::Pop => self.report_pop(None),
            Command::PopToList => self.report_pop(Some("list")),
            Command::PopToRoot => nav.pop_to_root(),
            Command::Dismiss => nav.dismiss(),
        }
    }

    fn report_pop(&mut self, to: Option<&str>) {
        self.status_message = match self.navigator.pop(to) {
            Ok(PopOutcome::PoppedOne) => String::new(),
            Ok(PopOutcome::PoppedToTarget { removed }) => format!("popped {removed} to target"),
            Ok(PopOutcome::FallbackPoppedOne) => "target not on stack, popped one".to_string(),
            Ok(PopOutcome::Suppressed) => "preview mode: ignored".to_string(),
            Err(e) => {
                warn!("{e}");
                e.to_string()
            }
        };
    }

    /// Returns false when the shell should exit.
    pub fn handle_event(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::Quit => {
                info!("Quit requested");
                return false;
            }
            TuiEvent::Resize => {}
            TuiEvent::Char(c) => match Command::from_key(c) {
                Some(command) => {
                    self.status_message.clear();
                    self.apply(command);
                }
                None => {
                    route_event(&mut self.navigator, &self.destinations, &self.root, &event);
                }
            },
            _ => {
                route_event(&mut self.navigator, &self.destinations, &self.root, &event);
            }
        }
        true
    }
}

fn default_destinations() -> Destinations<AnyView> {
    Destinations::new()
        .with(
            "list",
            TextScreen::new("List", ["Every item, in order.", "Press d to open one."])
                .trailing_item(Label::new("Edit"))
                .any(),
        )
        .with(
            "detail",
            TextScreen::new("Detail", ["One item. Its payload is below."])
                .back_button_item(Label::new("‹ Done"))
                .trailing_item(Label::new("Share"))
                .any(),
        )
        .with(
            "share",
            TextScreen::new("Share", ["Send this somewhere.", "Esc closes."]).any(),
        )
        .with(
            "player",
            TextScreen::new("Player", ["Full-screen playback."])
                .leading_item(Label::new("♪"))
                .any(),
        )
}
