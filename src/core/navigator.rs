//! # Navigator
//!
//! The navigation state container. It owns:
//!
//! ```text
//! Navigator<V>
//! ├── path: Vec<ScreenId>              // stack, last = visible screen
//! ├── sheet: Option<ScreenId>          // modal slot
//! ├── cover: Option<ScreenId>          // full-screen overlay slot
//! ├── payloads: PayloadTable           // per-id data passed "with data"
//! ├── stack_views / sheet_views / cover_views: HashMap<ScreenId, V>
//! ├── next_dynamic: u64                // never reused
//! └── revision: u64                    // bumped on every change
//! ```
//!
//! The Navigator is the only thing that mutates this state. Renderers
//! borrow it read-only and watch `revision()` to know when to redraw.
//!
//! It is single-threaded by construction: the URL handler slot holds a
//! non-`Send` closure, so a `Navigator` cannot cross threads.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::core::payload::{Payload, PayloadTable};
use crate::core::screen::ScreenId;

/// Prefix of identifiers synthesized for views registered without one.
pub const DYNAMIC_ID_PREFIX: &str = "dynamic_";

// ============================================================================
// Modes and Policies
// ============================================================================

/// Whether mutations actually apply.
///
/// `Preview` is for design-time sandboxes: every mutation becomes a logged
/// no-op so preview tooling never trips over navigation it cannot render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Live,
    Preview,
}

impl RunMode {
    pub fn is_preview(self) -> bool {
        matches!(self, RunMode::Preview)
    }
}

/// What happens to payloads and registered views when their id goes away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionPolicy {
    /// Keep every entry for the Navigator's lifetime.
    #[default]
    Retain,
    /// Drop entries once their id is on neither the stack nor a slot.
    OnLeave,
}

/// Result of a URL open request, for hosts that route links through the
/// Navigator's handler slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenUrlResult {
    Handled,
    NotHandled,
}

pub type UrlHandler = Box<dyn Fn(&str) -> OpenUrlResult>;

// ============================================================================
// Pop Results
// ============================================================================

/// What a successful `pop` actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopOutcome {
    /// No target given; the top screen was removed.
    PoppedOne,
    /// The target was found; `removed` screens above it were dropped.
    PoppedToTarget { removed: usize },
    /// The target was not on the stack; the top screen was removed instead.
    FallbackPoppedOne,
    /// Preview mode; nothing changed.
    Suppressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// `pop` needed to remove a screen but the stack was empty.
    EmptyStackUnderflow,
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::EmptyStackUnderflow => write!(f, "cannot pop: navigation stack is empty"),
        }
    }
}

impl std::error::Error for NavError {}

// ============================================================================
// Navigator
// ============================================================================

/// Where a registered view lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Table {
    Stack,
    Sheet,
    Cover,
}

pub struct Navigator<V> {
    path: Vec<ScreenId>,
    sheet: Option<ScreenId>,
    cover: Option<ScreenId>,
    payloads: PayloadTable,
    stack_views: HashMap<ScreenId, V>,
    sheet_views: HashMap<ScreenId, V>,
    cover_views: HashMap<ScreenId, V>,
    url_handler: Option<UrlHandler>,
    next_dynamic: u64,
    revision: u64,
    mode: RunMode,
    eviction: EvictionPolicy,
}

impl<V> Default for Navigator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Navigator<V> {
    /// A live Navigator that retains payloads and views.
    pub fn new() -> Self {
        Self::with_options(RunMode::Live, EvictionPolicy::Retain)
    }

    pub fn with_options(mode: RunMode, eviction: EvictionPolicy) -> Self {
        Self {
            path: Vec::new(),
            sheet: None,
            cover: None,
            payloads: PayloadTable::new(),
            stack_views: HashMap::new(),
            sheet_views: HashMap::new(),
            cover_views: HashMap::new(),
            url_handler: None,
            next_dynamic: 0,
            revision: 0,
            mode,
            eviction,
        }
    }

    // ------------------------------------------------------------------------
    // Stack
    // ------------------------------------------------------------------------

    pub fn push(&mut self, destination: impl Into<ScreenId>) {
        if self.suppressed("push") {
            return;
        }
        let id = destination.into();
        debug!("push {id} (depth {})", self.path.len() + 1);
        self.path.push(id);
        self.touch();
    }

    /// Push and store `data` for the destination, replacing any earlier payload.
    pub fn push_with<T: Any>(&mut self, destination: impl Into<ScreenId>, data: T) {
        if self.suppressed("push_with") {
            return;
        }
        let id = destination.into();
        self.payloads.insert(id.clone(), Payload::new(data));
        debug!("push {id} with data (depth {})", self.path.len() + 1);
        self.path.push(id);
        self.touch();
    }

    /// Register `view` in the stack table and push it.
    ///
    /// Returns the id used: `identifier` if given, otherwise a fresh
    /// `dynamic_<n>` that no table holds yet. Returns `None` in preview mode.
    pub fn push_view(&mut self, view: V, identifier: Option<ScreenId>) -> Option<ScreenId> {
        if self.suppressed("push_view") {
            return None;
        }
        let id = self.register(Table::Stack, view, identifier);
        debug!("push view {id} (depth {})", self.path.len() + 1);
        self.path.push(id.clone());
        self.touch();
        Some(id)
    }

    /// Pop the top screen, or everything above the last occurrence of `to`.
    ///
    /// A target that is not on the stack falls back to popping one screen,
    /// reported as [`PopOutcome::FallbackPoppedOne`].
    pub fn pop(&mut self, to: Option<&str>) -> Result<PopOutcome, NavError> {
        if self.suppressed("pop") {
            return Ok(PopOutcome::Suppressed);
        }
        match to {
            Some(target) => match self.path.iter().rposition(|id| id.as_str() == target) {
                Some(index) => {
                    let removed = self.truncate_path(index + 1);
                    debug!("pop to {target}: removed {removed}");
                    Ok(PopOutcome::PoppedToTarget { removed })
                }
                None => {
                    self.pop_last()?;
                    debug!("pop to {target}: not on stack, popped one");
                    Ok(PopOutcome::FallbackPoppedOne)
                }
            },
            None => {
                self.pop_last()?;
                Ok(PopOutcome::PoppedOne)
            }
        }
    }

    /// Empty the stack. Safe on an empty stack.
    pub fn pop_to_root(&mut self) {
        if self.suppressed("pop_to_root") {
            return;
        }
        let removed = self.truncate_path(0);
        debug!("pop to root: removed {removed}");
    }

    // ------------------------------------------------------------------------
    // Modal slot
    // ------------------------------------------------------------------------

    /// Show `destination` as the modal, replacing any current one.
    pub fn present(&mut self, destination: impl Into<ScreenId>) {
        if self.suppressed("present") {
            return;
        }
        let id = destination.into();
        self.set_sheet(id);
    }

    pub fn present_with<T: Any>(&mut self, destination: impl Into<ScreenId>, data: T) {
        if self.suppressed("present_with") {
            return;
        }
        let id = destination.into();
        self.payloads.insert(id.clone(), Payload::new(data));
        self.set_sheet(id);
    }

    pub fn present_view(&mut self, view: V, identifier: Option<ScreenId>) -> Option<ScreenId> {
        if self.suppressed("present_view") {
            return None;
        }
        let id = self.register(Table::Sheet, view, identifier);
        self.set_sheet(id.clone());
        Some(id)
    }

    // ------------------------------------------------------------------------
    // Full-screen overlay slot
    // ------------------------------------------------------------------------

    pub fn present_full_screen(&mut self, destination: impl Into<ScreenId>) {
        if self.suppressed("present_full_screen") {
            return;
        }
        let id = destination.into();
        self.set_cover(id);
    }

    pub fn present_full_screen_with<T: Any>(&mut self, destination: impl Into<ScreenId>, data: T) {
        if self.suppressed("present_full_screen_with") {
            return;
        }
        let id = destination.into();
        self.payloads.insert(id.clone(), Payload::new(data));
        self.set_cover(id);
    }

    pub fn present_full_screen_view(
        &mut self,
        view: V,
        identifier: Option<ScreenId>,
    ) -> Option<ScreenId> {
        if self.suppressed("present_full_screen_view") {
            return None;
        }
        let id = self.register(Table::Cover, view, identifier);
        self.set_cover(id.clone());
        Some(id)
    }

    /// Clear the modal and the overlay, whichever are shown.
    pub fn dismiss(&mut self) {
        if self.suppressed("dismiss") {
            return;
        }
        let sheet = self.sheet.take();
        let cover = self.cover.take();
        if sheet.is_none() && cover.is_none() {
            trace!("dismiss: nothing presented");
            return;
        }
        debug!("dismiss: sheet={sheet:?} cover={cover:?}");
        self.touch();
        for id in sheet.into_iter().chain(cover) {
            self.evict_if_gone(&id);
        }
    }

    // ------------------------------------------------------------------------
    // Payloads
    // ------------------------------------------------------------------------

    /// The payload stored for `id`, read as `T`.
    pub fn data<T: Any>(&self, id: &str) -> Option<&T> {
        self.payloads.get(id).and_then(Payload::get::<T>)
    }

    /// The payload stored for `id`, whatever its type.
    pub fn payload(&self, id: &str) -> Option<&Payload> {
        self.payloads.get(id)
    }

    // ------------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------------

    pub fn path(&self) -> &[ScreenId] {
        &self.path
    }

    pub fn top(&self) -> Option<&ScreenId> {
        self.path.last()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn sheet(&self) -> Option<&ScreenId> {
        self.sheet.as_ref()
    }

    pub fn cover(&self) -> Option<&ScreenId> {
        self.cover.as_ref()
    }

    /// Changes whenever any navigation state changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RunMode) {
        self.mode = mode;
    }

    pub fn eviction(&self) -> EvictionPolicy {
        self.eviction
    }

    pub fn stack_view(&self, id: &str) -> Option<&V> {
        self.stack_views.get(id)
    }

    pub fn sheet_view(&self, id: &str) -> Option<&V> {
        self.sheet_views.get(id)
    }

    pub fn cover_view(&self, id: &str) -> Option<&V> {
        self.cover_views.get(id)
    }

    /// Number of registered views across all three tables.
    pub fn registered_views(&self) -> usize {
        self.stack_views.len() + self.sheet_views.len() + self.cover_views.len()
    }

    pub fn payload_count(&self) -> usize {
        self.payloads.len()
    }

    // ------------------------------------------------------------------------
    // URL handler slot
    // ------------------------------------------------------------------------

    /// Store a handler for the host to call on URL opens. The Navigator never
    /// calls it.
    pub fn set_url_handler<F>(&mut self, handler: F)
    where
        F: Fn(&str) -> OpenUrlResult + 'static,
    {
        self.url_handler = Some(Box::new(handler));
    }

    pub fn clear_url_handler(&mut self) {
        self.url_handler = None;
    }

    pub fn url_handler(&self) -> Option<&UrlHandler> {
        self.url_handler.as_ref()
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Checked fresh on every call.
    fn suppressed(&self, op: &str) -> bool {
        if self.mode.is_preview() {
            debug!("{op} ignored in preview mode");
            return true;
        }
        false
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Skips counter values a caller already registered by hand.
    fn next_dynamic_id(&mut self) -> ScreenId {
        loop {
            let id = ScreenId::new(format!("{DYNAMIC_ID_PREFIX}{}", self.next_dynamic));
            self.next_dynamic += 1;
            if !self.is_registered(id.as_str()) {
                return id;
            }
            trace!("{id} already registered, skipping");
        }
    }

    fn is_registered(&self, id: &str) -> bool {
        self.stack_views.contains_key(id)
            || self.sheet_views.contains_key(id)
            || self.cover_views.contains_key(id)
    }

    fn table_mut(&mut self, table: Table) -> &mut HashMap<ScreenId, V> {
        match table {
            Table::Stack => &mut self.stack_views,
            Table::Sheet => &mut self.sheet_views,
            Table::Cover => &mut self.cover_views,
        }
    }

    fn register(&mut self, table: Table, view: V, identifier: Option<ScreenId>) -> ScreenId {
        let id = match identifier {
            Some(id) => id,
            None => self.next_dynamic_id(),
        };
        trace!("register {id} in {table:?} table");
        self.table_mut(table).insert(id.clone(), view);
        id
    }

    fn set_sheet(&mut self, id: ScreenId) {
        debug!("present {id}");
        let previous = self.sheet.replace(id);
        self.touch();
        if let Some(previous) = previous {
            self.evict_if_gone(&previous);
        }
    }

    fn set_cover(&mut self, id: ScreenId) {
        debug!("present full screen {id}");
        let previous = self.cover.replace(id);
        self.touch();
        if let Some(previous) = previous {
            self.evict_if_gone(&previous);
        }
    }

    fn pop_last(&mut self) -> Result<ScreenId, NavError> {
        let id = self.path.pop().ok_or(NavError::EmptyStackUnderflow)?;
        debug!("pop {id} (depth {})", self.path.len());
        self.touch();
        self.evict_if_gone(&id);
        Ok(id)
    }

    /// Shrink the stack to `len`, returning how many screens were removed.
    fn truncate_path(&mut self, len: usize) -> usize {
        if len >= self.path.len() {
            return 0;
        }
        let removed: Vec<ScreenId> = self.path.drain(len..).collect();
        self.touch();
        for id in &removed {
            self.evict_if_gone(id);
        }
        removed.len()
    }

    /// Under `OnLeave`, drop whatever no longer has an owner for `id`.
    fn evict_if_gone(&mut self, id: &ScreenId) {
        if self.eviction != EvictionPolicy::OnLeave {
            return;
        }
        let on_stack = self.path.contains(id);
        let is_sheet = self.sheet.as_ref() == Some(id);
        let is_cover = self.cover.as_ref() == Some(id);

        if !on_stack && self.stack_views.remove(id).is_some() {
            trace!("evicted stack view {id}");
        }
        if !is_sheet && self.sheet_views.remove(id).is_some() {
            trace!("evicted modal view {id}");
        }
        if !is_cover && self.cover_views.remove(id).is_some() {
            trace!("evicted overlay view {id}");
        }
        if !on_stack && !is_sheet && !is_cover && self.payloads.remove(id.as_str()).is_some() {
            trace!("evicted payload {id}");
        }
    }
}

impl<V> fmt::Debug for Navigator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("path", &self.path)
            .field("sheet", &self.sheet)
            .field("cover", &self.cover)
            .field("payloads", &self.payloads.len())
            .field("registered_views", &self.registered_views())
            .field("has_url_handler", &self.url_handler.is_some())
            .field("revision", &self.revision)
            .field("mode", &self.mode)
            .field("eviction", &self.eviction)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nav_with(path: &[&str]) -> Navigator<&'static str> {
        let mut nav = Navigator::new();
        for id in path {
            nav.push(*id);
        }
        nav
    }

    fn ids<'a>(nav: &'a Navigator<&'static str>) -> Vec<&'a str> {
        nav.path().iter().map(ScreenId::as_str).collect()
    }

    #[test]
    fn test_new_navigator_is_empty() {
        let nav: Navigator<()> = Navigator::new();
        assert!(nav.is_empty());
        assert!(nav.sheet().is_none());
        assert!(nav.cover().is_none());
        assert_eq!(nav.revision(), 0);
        assert_eq!(nav.mode(), RunMode::Live);
        assert_eq!(nav.eviction(), EvictionPolicy::Retain);
    }

    #[test]
    fn test_push_allows_duplicates() {
        let nav = nav_with(&["A", "B", "A"]);
        assert_eq!(ids(&nav), ["A", "B", "A"]);
        assert_eq!(nav.top().map(ScreenId::as_str), Some("A"));
    }

    #[test]
    fn test_pop_to_existing_target() {
        let mut nav = nav_with(&["A", "B", "C"]);
        assert_eq!(
            nav.pop(Some("A")),
            Ok(PopOutcome::PoppedToTarget { removed: 2 })
        );
        assert_eq!(ids(&nav), ["A"]);
    }

    #[test]
    fn test_pop_to_top_is_noop() {
        let mut nav = nav_with(&["A", "B", "C"]);
        let before = nav.revision();
        assert_eq!(
            nav.pop(Some("C")),
            Ok(PopOutcome::PoppedToTarget { removed: 0 })
        );
        assert_eq!(ids(&nav), ["A", "B", "C"]);
        assert_eq!(nav.revision(), before);
    }

    #[test]
    fn test_pop_to_uses_last_occurrence() {
        let mut nav = nav_with(&["A", "B", "A", "C"]);
        assert_eq!(
            nav.pop(Some("A")),
            Ok(PopOutcome::PoppedToTarget { removed: 1 })
        );
        assert_eq!(ids(&nav), ["A", "B", "A"]);
    }

    #[test]
    fn test_pop_to_absent_target_falls_back() {
        let mut nav = nav_with(&["A", "B", "C"]);
        assert_eq!(nav.pop(Some("Z")), Ok(PopOutcome::FallbackPoppedOne));
        assert_eq!(ids(&nav), ["A", "B"]);
    }

    #[test]
    fn test_pop_until_underflow() {
        let mut nav = nav_with(&["A"]);
        assert_eq!(nav.pop(None), Ok(PopOutcome::PoppedOne));
        assert!(nav.is_empty());
        assert_eq!(nav.pop(None), Err(NavError::EmptyStackUnderflow));
        assert_eq!(nav.pop(Some("A")), Err(NavError::EmptyStackUnderflow));
        assert!(nav.is_empty());
    }

    #[test]
    fn test_pop_to_root_is_always_safe() {
        let mut nav = nav_with(&["A", "B"]);
        nav.pop_to_root();
        assert!(nav.is_empty());
        nav.pop_to_root();
        assert!(nav.is_empty());
    }

    #[test]
    fn test_present_replaces_modal() {
        let mut nav: Navigator<()> = Navigator::new();
        nav.present("first");
        nav.present("second");
        assert_eq!(nav.sheet().map(ScreenId::as_str), Some("second"));
        assert!(nav.cover().is_none());
    }

    #[test]
    fn test_dismiss_clears_both_slots() {
        let mut nav: Navigator<()> = Navigator::new();
        nav.present("sheet");
        nav.present_full_screen("cover");
        nav.dismiss();
        assert!(nav.sheet().is_none());
        assert!(nav.cover().is_none());

        let before = nav.revision();
        nav.dismiss();
        assert_eq!(nav.revision(), before);
    }

    #[test]
    fn test_payload_survives_dismiss_by_default() {
        let mut nav: Navigator<()> = Navigator::new();
        nav.present_with("modalX", 42_i32);
        nav.dismiss();
        assert_eq!(nav.data::<i32>("modalX"), Some(&42));
    }

    #[test]
    fn test_data_returns_latest_value() {
        let mut nav: Navigator<()> = Navigator::new();
        assert!(nav.data::<i32>("detail").is_none());
        nav.push_with("detail", 1_i32);
        nav.present_full_screen_with("detail", 2_i32);
        assert_eq!(nav.data::<i32>("detail"), Some(&2));
        assert!(nav.data::<String>("detail").is_none());
        assert_eq!(nav.payload("detail").map(Payload::type_name), Some("i32"));
    }

    #[test]
    fn test_push_without_data_keeps_old_payload() {
        let mut nav: Navigator<()> = Navigator::new();
        nav.push_with("detail", "first");
        nav.push("detail");
        assert_eq!(nav.data::<&str>("detail"), Some(&"first"));
    }

    #[test]
    fn test_dynamic_ids_are_never_reused() {
        let mut nav = Navigator::with_options(RunMode::Live, EvictionPolicy::OnLeave);
        let first = nav.push_view("one", None).unwrap();
        nav.pop(None).unwrap();
        assert_eq!(nav.registered_views(), 0);
        let second = nav.push_view("two", None).unwrap();
        assert_eq!(first.as_str(), "dynamic_0");
        assert_eq!(second.as_str(), "dynamic_1");
    }

    #[test]
    fn test_synthesized_id_skips_caller_supplied_one() {
        let mut nav = Navigator::new();
        nav.push_view("named", Some(ScreenId::from("dynamic_0")));
        let generated = nav.present_view("generated", None).unwrap();

        assert_eq!(generated.as_str(), "dynamic_1");
        assert_eq!(nav.stack_view("dynamic_0"), Some(&"named"));
        assert_eq!(nav.sheet_view("dynamic_1"), Some(&"generated"));
    }

    #[test]
    fn test_on_leave_evicts_payload_of_popped_screen() {
        let mut nav: Navigator<&str> =
            Navigator::with_options(RunMode::Live, EvictionPolicy::OnLeave);
        nav.push_with("detail", 5_u32);
        nav.pop(None).unwrap();
        assert!(nav.payload("detail").is_none());
        assert_eq!(nav.payload_count(), 0);
    }

    #[test]
    fn test_view_registration_targets_matching_table() {
        let mut nav = Navigator::new();
        let pushed = nav.push_view("pushed", Some(ScreenId::from("p"))).unwrap();
        let sheet = nav.present_view("sheet", None).unwrap();
        let cover = nav.present_full_screen_view("cover", None).unwrap();

        assert_eq!(nav.stack_view(pushed.as_str()), Some(&"pushed"));
        assert_eq!(nav.sheet_view(sheet.as_str()), Some(&"sheet"));
        assert_eq!(nav.cover_view(cover.as_str()), Some(&"cover"));
        assert!(nav.stack_view(sheet.as_str()).is_none());
        assert_eq!(nav.top(), Some(&pushed));
        assert_eq!(nav.sheet(), Some(&sheet));
        assert_eq!(nav.cover(), Some(&cover));
    }

    #[test]
    fn test_retain_keeps_views_after_pop() {
        let mut nav = Navigator::new();
        let id = nav.push_view("kept", None).unwrap();
        nav.pop(None).unwrap();
        assert_eq!(nav.stack_view(id.as_str()), Some(&"kept"));
    }

    #[test]
    fn test_on_leave_evicts_when_last_occurrence_leaves() {
        let mut nav: Navigator<&str> =
            Navigator::with_options(RunMode::Live, EvictionPolicy::OnLeave);
        nav.push_with("A", 1_u8);
        nav.push("B");
        nav.push("A");
        nav.pop(None).unwrap();
        assert_eq!(nav.data::<u8>("A"), Some(&1), "A still on the stack");
        nav.pop_to_root();
        assert!(nav.data::<u8>("A").is_none());
        assert_eq!(nav.payload_count(), 0);
    }

    #[test]
    fn test_on_leave_keeps_payload_while_presented_elsewhere() {
        let mut nav: Navigator<&str> =
            Navigator::with_options(RunMode::Live, EvictionPolicy::OnLeave);
        nav.push_with("shared", "x");
        nav.present("shared");
        nav.pop(None).unwrap();
        assert_eq!(nav.data::<&str>("shared"), Some(&"x"));
        nav.dismiss();
        assert!(nav.data::<&str>("shared").is_none());
    }

    #[test]
    fn test_on_leave_evicts_replaced_modal() {
        let mut nav = Navigator::with_options(RunMode::Live, EvictionPolicy::OnLeave);
        let first = nav.present_view("first", None).unwrap();
        nav.present_view("second", None).unwrap();
        assert!(nav.sheet_view(first.as_str()).is_none());
        assert_eq!(nav.registered_views(), 1);
    }

    #[test]
    fn test_preview_mode_ignores_mutations() {
        let mut nav = Navigator::with_options(RunMode::Preview, EvictionPolicy::Retain);
        nav.push_with("A", 1_i32);
        assert_eq!(nav.push_view("v", None), None);
        nav.present("m");
        nav.present_full_screen("f");
        nav.pop_to_root();
        nav.dismiss();
        assert_eq!(nav.pop(None), Ok(PopOutcome::Suppressed));
        assert!(nav.is_empty());
        assert!(nav.sheet().is_none());
        assert!(nav.cover().is_none());
        assert!(nav.data::<i32>("A").is_none());
        assert_eq!(nav.registered_views(), 0);
        assert_eq!(nav.revision(), 0);
    }

    #[test]
    fn test_mode_is_read_on_every_call() {
        let mut nav: Navigator<()> = Navigator::new();
        nav.push("A");
        nav.set_mode(RunMode::Preview);
        nav.push("B");
        nav.set_mode(RunMode::Live);
        nav.push("C");
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_url_handler_is_stored_not_called() {
        let mut nav: Navigator<()> = Navigator::new();
        assert!(nav.url_handler().is_none());
        nav.set_url_handler(|url| {
            if url.starts_with("app://") {
                OpenUrlResult::Handled
            } else {
                OpenUrlResult::NotHandled
            }
        });
        let handler = nav.url_handler().unwrap();
        assert_eq!(handler("app://home"), OpenUrlResult::Handled);
        assert_eq!(handler("https://example.com"), OpenUrlResult::NotHandled);
        nav.clear_url_handler();
        assert!(nav.url_handler().is_none());
    }

    #[test]
    fn test_nav_error_display() {
        assert_eq!(
            NavError::EmptyStackUnderflow.to_string(),
            "cannot pop: navigation stack is empty"
        );
    }

    fn arb_ids() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-d]", 1..12)
    }

    proptest! {
        #[test]
        fn pushes_grow_stack_and_set_top(ids in arb_ids(), views in 0usize..4) {
            let mut nav: Navigator<usize> = Navigator::new();
            let mut last = None;
            for id in &ids {
                nav.push(id.as_str());
                last = Some(id.clone());
            }
            for v in 0..views {
                last = nav.push_view(v, None).map(|id| id.as_str().to_string());
            }
            prop_assert_eq!(nav.depth(), ids.len() + views);
            prop_assert_eq!(nav.top().map(|id| id.as_str().to_string()), last);
        }

        #[test]
        fn pop_to_present_target_keeps_it_on_top(ids in arb_ids(), pick in any::<prop::sample::Index>()) {
            let mut nav: Navigator<()> = Navigator::new();
            for id in &ids {
                nav.push(id.as_str());
            }
            let target = ids[pick.index(ids.len())].clone();
            let last_index = ids.iter().rposition(|id| *id == target).unwrap();
            let top_index = ids.len() - 1;

            let outcome = nav.pop(Some(target.as_str()));
            prop_assert_eq!(outcome, Ok(PopOutcome::PoppedToTarget { removed: top_index - last_index }));
            prop_assert_eq!(nav.depth(), last_index + 1);
            prop_assert_eq!(nav.top().map(ScreenId::as_str), Some(target.as_str()));
        }

        #[test]
        fn pop_to_absent_target_matches_bare_pop(ids in arb_ids()) {
            let mut targeted: Navigator<()> = Navigator::new();
            let mut bare: Navigator<()> = Navigator::new();
            for id in &ids {
                targeted.push(id.as_str());
                bare.push(id.as_str());
            }
            prop_assert_eq!(targeted.pop(Some("zz")), Ok(PopOutcome::FallbackPoppedOne));
            prop_assert_eq!(bare.pop(None), Ok(PopOutcome::PoppedOne));
            prop_assert_eq!(targeted.path(), bare.path());
        }

        #[test]
        fn pop_to_root_always_empties(ids in prop::collection::vec("[a-d]", 0..12)) {
            let mut nav: Navigator<()> = Navigator::new();
            for id in &ids {
                nav.push(id.as_str());
            }
            nav.pop_to_root();
            prop_assert!(nav.is_empty());
        }
    }
}
