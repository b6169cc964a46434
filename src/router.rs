//! Client-side route table and authentication gate.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Every page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Login,
    Dashboard,
    NewTicket,
    KnowledgeBase,
    Analytics,
    Profile,
    Settings,
}

impl Route {
    /// Pages listed in the navigation menu, in display order.
    pub const NAVIGATION: [Route; 6] = [
        Route::Dashboard,
        Route::NewTicket,
        Route::KnowledgeBase,
        Route::Analytics,
        Route::Profile,
        Route::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::NewTicket => "/new-ticket",
            Route::KnowledgeBase => "/knowledge-base",
            Route::Analytics => "/analytics",
            Route::Profile => "/profile",
            Route::Settings => "/settings",
        }
    }

    /// Menu label.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::NewTicket => "New Ticket",
            Route::KnowledgeBase => "Knowledge Base",
            Route::Analytics => "Analytics",
            Route::Profile => "Profile",
            Route::Settings => "Settings",
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A path that names no page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no page at '{0}'")]
pub struct UnknownPath(pub String);

/// Parsed location: a concrete page or the root path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Root,
    Page(Route),
}

impl FromStr for Location {
    type Err = UnknownPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        if path == "/" || path.is_empty() {
            return Ok(Location::Root);
        }

        [Route::Login]
            .into_iter()
            .chain(Route::NAVIGATION)
            .find(|r| r.path() == path)
            .map(Location::Page)
            .ok_or_else(|| UnknownPath(s.to_string()))
    }
}

/// Outcome of asking for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Show the page.
    Render(Route),
    /// Show a different page instead.
    Redirect(Route),
}

impl Resolution {
    /// The page that ends up on screen.
    pub fn route(&self) -> Route {
        match self {
            Resolution::Render(r) | Resolution::Redirect(r) => *r,
        }
    }
}

/// Apply the authentication gate to a location.
///
/// Signed-in users never see the login page or the bare root; signed-out
/// users are sent to login from everywhere else.
pub fn resolve(location: Location, authenticated: bool) -> Resolution {
    match (location, authenticated) {
        (Location::Root, true) | (Location::Page(Route::Login), true) => {
            Resolution::Redirect(Route::Dashboard)
        }
        (Location::Root, false) => Resolution::Redirect(Route::Login),
        (Location::Page(route), false) if route.requires_session() => {
            Resolution::Redirect(Route::Login)
        }
        (Location::Page(route), _) => Resolution::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!("/".parse::<Location>().unwrap(), Location::Root);
        assert_eq!(
            "/knowledge-base/".parse::<Location>().unwrap(),
            Location::Page(Route::KnowledgeBase)
        );
        assert_eq!(
            "/login".parse::<Location>().unwrap(),
            Location::Page(Route::Login)
        );
        assert!("/admin".parse::<Location>().is_err());
    }

    #[test]
    fn test_protected_routes_need_session() {
        for route in Route::NAVIGATION {
            assert_eq!(
                resolve(Location::Page(route), false),
                Resolution::Redirect(Route::Login)
            );
            assert_eq!(
                resolve(Location::Page(route), true),
                Resolution::Render(route)
            );
        }
    }

    #[test]
    fn test_login_and_root_redirects() {
        assert_eq!(
            resolve(Location::Page(Route::Login), false),
            Resolution::Render(Route::Login)
        );
        assert_eq!(
            resolve(Location::Page(Route::Login), true),
            Resolution::Redirect(Route::Dashboard)
        );
        assert_eq!(
            resolve(Location::Root, true),
            Resolution::Redirect(Route::Dashboard)
        );
        assert_eq!(
            resolve(Location::Root, false),
            Resolution::Redirect(Route::Login)
        );
    }
}
