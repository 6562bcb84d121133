//! Layout shell state: routing, theme, notification banner, dock and the
//! scroll-driven header.
//!
//! # Invariants
//! - Unknown paths resolve to `Route::NotFound`; routing never fails.
//! - Path matching ignores ASCII case.
//! - `navigate` emits only when the resolved route changes.
//! - The header hides only while scrolling down below the first 100 px.

use crate::view::listeners::{ListenerId, ViewListeners};
use log::{debug, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Atlas,
    Dashboard,
    Archive,
    NotFound,
}

impl Route {
    /// Resolves a location path; query strings, fragments and a trailing
    /// slash are ignored.
    pub fn resolve(path: &str) -> Self {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/').to_ascii_lowercase();
        match trimmed.as_str() {
            "" => Self::Atlas,
            "/dashboard" => Self::Dashboard,
            "/archive" => Self::Archive,
            _ => Self::NotFound,
        }
    }

    /// Canonical path; `NotFound` has none.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::Atlas => Some("/"),
            Self::Dashboard => Some("/dashboard"),
            Self::Archive => Some("/archive"),
            Self::NotFound => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Atlas => "FRA Digital Atlas",
            Self::Dashboard => "Decision Support Dashboard",
            Self::Archive => "Digitization Archive",
            Self::NotFound => "Page not found",
        }
    }
}

/// Banner shown above the page until dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: &'static str,
    pub high_priority: bool,
}

/// Scroll offset past which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: u32 = 100;

const POLICY_NOTIFICATION: Notification = Notification {
    message: "Policy Update: New PMKISAN eligibility criteria effective from Q4 2024",
    high_priority: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    RouteChanged(Route),
    ThemeChanged { dark_mode: bool },
    NotificationDismissed,
    DockToggled { expanded: bool },
    HeaderChanged { scrolled: bool, hidden: bool },
}

#[derive(Debug)]
pub struct ShellState {
    route: Route,
    dark_mode: bool,
    notification_visible: bool,
    dock_expanded: bool,
    last_scroll_y: u32,
    header_scrolled: bool,
    header_hidden: bool,
    revision: u64,
    listeners: ViewListeners<ShellEvent>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new("/")
    }
}

impl ShellState {
    /// Starts in dark mode with the notification banner visible.
    pub fn new(initial_path: &str) -> Self {
        Self {
            route: Route::resolve(initial_path),
            dark_mode: true,
            notification_visible: true,
            dock_expanded: false,
            last_scroll_y: 0,
            header_scrolled: false,
            header_hidden: false,
            revision: 0,
            listeners: ViewListeners::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn dock_expanded(&self) -> bool {
        self.dock_expanded
    }

    pub fn is_scrolled(&self) -> bool {
        self.header_scrolled
    }

    pub fn header_hidden(&self) -> bool {
        self.header_hidden
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification_visible.then_some(&POLICY_NOTIFICATION)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ShellEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn navigate(&mut self, path: &str) -> Route {
        let route = Route::resolve(path);
        if route != self.route {
            debug!(
                "event=navigate module=shell route={:?} path={}",
                route,
                path.trim()
            );
            self.route = route;
            self.commit(ShellEvent::RouteChanged(route));
        }
        if route == Route::NotFound {
            warn!(
                "event=route_not_found module=shell status=rejected path={}",
                path.trim()
            );
        }
        route
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        let dark_mode = self.dark_mode;
        self.commit(ShellEvent::ThemeChanged { dark_mode });
        dark_mode
    }

    pub fn dismiss_notification(&mut self) {
        if !self.notification_visible {
            return;
        }
        self.notification_visible = false;
        self.commit(ShellEvent::NotificationDismissed);
    }

    pub fn toggle_dock(&mut self) -> bool {
        self.dock_expanded = !self.dock_expanded;
        let expanded = self.dock_expanded;
        self.commit(ShellEvent::DockToggled { expanded });
        expanded
    }

    /// Feeds the window scroll offset; emits when the header style changes.
    pub fn scroll_to(&mut self, y: u32) {
        let scrolled = y > HEADER_SCROLL_THRESHOLD;
        let hidden = scrolled && y > self.last_scroll_y;
        self.last_scroll_y = y;
        if scrolled == self.header_scrolled && hidden == self.header_hidden {
            return;
        }
        self.header_scrolled = scrolled;
        self.header_hidden = hidden;
        self.commit(ShellEvent::HeaderChanged { scrolled, hidden });
    }

    pub fn unmount(&mut self) {
        self.listeners.clear();
    }

    fn commit(&mut self, event: ShellEvent) {
        self.revision += 1;
        self.listeners.notify(&event);
    }
}
