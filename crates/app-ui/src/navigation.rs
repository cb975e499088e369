//! Navigation system for NexEvent
//!
//! This module provides:
//! - Route definitions with path round-tripping
//! - A named-screen navigation stack
//! - The session gate (which routes a session state permits)
//! - Path matching for deep links and the `go` command
//!
//! Navigation never decides on its own whether the user is signed in. It
//! reads the session state and conforms to it via [`gate`] and
//! [`NavigationState::sync`].

use app_state::SessionState;
use event_client::EventId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters extracted from a path
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All screens in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Login form (initial screen)
    #[default]
    Login,
    /// Account registration form
    Register,
    /// Event list
    Home,
    /// Single event
    EventDetails {
        /// Event to show
        event_id: EventId,
    },
    /// Unknown path
    NotFound,
}

impl Route {
    /// Details route for an event
    pub fn event(event_id: impl Into<EventId>) -> Self {
        Route::EventDetails { event_id: event_id.into() }
    }

    /// Convert route to URL path
    pub fn to_path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Home => "/".to_string(),
            Route::EventDetails { event_id } => {
                format!("/events/{}", urlencoding::encode(event_id.as_str()))
            }
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Check if route requires a session
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Home | Route::EventDetails { .. })
    }

    /// Check if route is one of the signed-out forms
    pub fn is_auth_form(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Home => "Home",
            Route::EventDetails { .. } => "Event Details",
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Session Gate
// =============================================================================

/// Map a requested route to the route the session state permits
///
/// Protected routes fall back to Login when signed out; the auth forms fall
/// forward to Home when signed in. Everything else passes through.
pub fn gate(route: &Route, state: &SessionState) -> Route {
    match (state.is_authenticated(), route) {
        (false, r) if r.requires_auth() => Route::Login,
        (true, r) if r.is_auth_form() => Route::Home,
        (_, r) => r.clone(),
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// Entry in the navigation stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self { route, key: uuid::Uuid::new_v4().to_string() }
    }
}

/// Named-screen stack
///
/// Never empty: the top entry is held separately from the entries below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    below: Vec<StackEntry>,
    top: StackEntry,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl NavigationStack {
    /// Create a stack holding only `root`
    pub fn new(root: Route) -> Self {
        Self { below: Vec::new(), top: StackEntry::new(root) }
    }

    /// Push a route on top
    pub fn push(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.top, StackEntry::new(route));
        self.below.push(previous);
    }

    /// Pop the top route; returns false at the root
    pub fn pop(&mut self) -> bool {
        match self.below.pop() {
            Some(entry) => {
                self.top = entry;
                true
            }
            None => false,
        }
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        self.top = StackEntry::new(route);
    }

    /// Drop everything and start over at `route`
    pub fn reset(&mut self, route: Route) {
        self.below.clear();
        self.top = StackEntry::new(route);
    }

    /// Current route
    pub fn current(&self) -> &Route {
        &self.top.route
    }

    /// Current entry
    pub fn current_entry(&self) -> &StackEntry {
        &self.top
    }

    /// Check if there is anything to go back to
    pub fn can_go_back(&self) -> bool {
        !self.below.is_empty()
    }

    /// Number of entries
    pub fn depth(&self) -> usize {
        self.below.len() + 1
    }

    /// Entries from bottom to top
    pub fn entries(&self) -> impl Iterator<Item = &StackEntry> {
        self.below.iter().chain(std::iter::once(&self.top))
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Navigation state of the running app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    stack: NavigationStack,
}

impl NavigationState {
    /// Create navigation state at the Login screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Current route
    pub fn current_route(&self) -> &Route {
        self.stack.current()
    }

    /// Underlying stack
    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// Push the gated form of `route`
    ///
    /// Returns the route that ended up on top.
    pub fn navigate(&mut self, route: Route, state: &SessionState) -> &Route {
        let target = gate(&route, state);
        if target != route {
            tracing::debug!("Navigation to {} redirected to {}", route.to_path(), target.to_path());
        }
        if target != *self.stack.current() {
            self.stack.push(target);
        }
        self.stack.current()
    }

    /// Replace the current route with the gated form of `route`
    pub fn replace(&mut self, route: Route, state: &SessionState) -> &Route {
        self.stack.replace(gate(&route, state));
        self.stack.current()
    }

    /// Go back one screen
    pub fn go_back(&mut self) -> bool {
        self.stack.pop()
    }

    /// Conform the stack to the session state
    ///
    /// When the current route is no longer permitted the whole stack is
    /// reset, so back navigation cannot return to a screen from the other
    /// side of a login or logout. Returns whether anything changed.
    pub fn sync(&mut self, state: &SessionState) -> bool {
        let current = self.stack.current();
        let permitted = gate(current, state);
        if permitted == *current {
            return false;
        }

        tracing::debug!("Session change: resetting navigation to {}", permitted.to_path());
        self.stack.reset(permitted);
        true
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    segments: Vec<PatternSegment>,
    builder: fn(RouteParams) -> Option<Route>,
}

#[derive(Debug, Clone)]
enum PatternSegment {
    Literal(String),
    Param(String),
}

/// Path router
pub struct Router {
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self { patterns: Vec::new() };

        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/login", |_| Some(Route::Login));
        router.add_route("/register", |_| Some(Route::Register));
        router.add_route("/events/:id", |params| {
            Some(Route::EventDetails { event_id: EventId::new(params.get("id")?.clone()) })
        });

        router
    }

    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(param) => PatternSegment::Param(param.to_string()),
                None => PatternSegment::Literal(s.to_string()),
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route
    ///
    /// Query strings are ignored. Unknown paths map to [`Route::NotFound`].
    pub fn match_path(&self, path: &str) -> Route {
        let pathname = path.split_once('?').map_or(path, |(p, _)| p);
        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        self.patterns
            .iter()
            .filter_map(|pattern| {
                let params = Self::match_pattern(&pattern.segments, &path_segments)?;
                (pattern.builder)(params)
            })
            .next()
            .unwrap_or(Route::NotFound)
    }

    fn match_pattern(pattern: &[PatternSegment], path: &[&str]) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, actual) in pattern.iter().zip(path) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    let decoded = urlencoding::decode(actual).ok()?.into_owned();
                    if decoded.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decoded);
                }
            }
        }

        Some(params)
    }
}

// =============================================================================
// Tests
// =============================================================================
