//! # Router
//!
//! Owns the navigation stack and the selected tab. These are the only
//! legal ways to change either.
//!
//! ```text
//! Router
//! ├── tab: Tab            // selected top-level destination
//! ├── path: Vec<Route>    // back-stack, last = current screen
//! └── revision: u64       // bumped once per observable transition
//! ```
//!
//! Every operation is total. Popping an empty stack does nothing.
//! Initial state is `(Home, [])`.

use log::debug;

use crate::core::route::{Route, Tab};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Router {
    tab: Tab,
    path: Vec<Route>,
    revision: u64,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_tab(&self) -> Tab {
        self.tab
    }

    pub fn path(&self) -> &[Route] {
        &self.path
    }

    /// Top of the stack, or `None` when showing the context's root screen.
    pub fn current_route(&self) -> Option<Route> {
        self.path.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Counts observable transitions. Compare against a saved value to know
    /// whether a redraw is needed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn navigate(&mut self, route: Route) {
        self.path.push(route);
        self.bump();
        debug!("navigate {:?} (depth={})", route, self.path.len());
    }

    /// Select `tab` and drop the previous tab's back-stack.
    pub fn navigate_to_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.path.clear();
        self.bump();
        debug!("navigate_to_tab {:?}", tab);
    }

    /// Select `tab` and land directly on `route`, without an intermediate
    /// transition to the tab root.
    pub fn navigate_to_tab_then(&mut self, tab: Tab, route: Route) {
        self.tab = tab;
        self.path.clear();
        self.path.push(route);
        self.bump();
        debug!("navigate_to_tab {:?} then {:?}", tab, route);
    }

    /// Remove the current screen. Returns the popped route, if any.
    pub fn pop(&mut self) -> Option<Route> {
        let popped = self.path.pop();
        if let Some(route) = popped {
            self.bump();
            debug!("pop {:?} (depth={})", route, self.path.len());
        }
        popped
    }

    pub fn pop_to_root(&mut self) {
        self.path.clear();
        self.bump();
        debug!("pop_to_root");
    }

    /// Coalesced `pop_to_root` + `navigate`: the stack becomes `[route]`.
    pub fn pop_to_root_and_navigate(&mut self, route: Route) {
        self.path.clear();
        self.path.push(route);
        self.bump();
        debug!("pop_to_root_and_navigate {:?}", route);
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::{AuthRoute, MainRoute, ProfileRoute};

    fn signup() -> Route {
        Route::Auth(AuthRoute::Signup)
    }

    fn forgot() -> Route {
        Route::Auth(AuthRoute::ForgotPassword)
    }

    #[test]
    fn test_initial_state_is_home_with_empty_stack() {
        let router = Router::new();
        assert_eq!(router.current_tab(), Tab::Home);
        assert!(router.is_at_root());
        assert_eq!(router.current_route(), None);
    }

    #[test]
    fn test_navigate_pushes_in_order() {
        let mut router = Router::new();
        let routes = [Route::LOGIN, signup(), forgot(), Route::SETTINGS];
        for route in routes {
            router.navigate(route);
        }
        assert_eq!(router.path(), &routes);
        assert_eq!(router.current_route(), Some(Route::SETTINGS));
    }

    #[test]
    fn test_navigate_allows_duplicates() {
        let mut router = Router::new();
        router.navigate(signup());
        router.navigate(signup());
        assert_eq!(router.path(), &[signup(), signup()]);
    }

    #[test]
    fn test_pop_removes_last() {
        let mut router = Router::new();
        router.navigate(Route::LOGIN);
        router.navigate(signup());
        assert_eq!(router.pop(), Some(signup()));
        assert_eq!(router.path(), &[Route::LOGIN]);
    }

    #[test]
    fn test_pop_on_empty_stack_is_noop() {
        let mut router = Router::new();
        let before = router.clone();
        assert_eq!(router.pop(), None);
        assert_eq!(router.pop(), None);
        assert_eq!(router, before);
    }

    #[test]
    fn test_navigate_to_tab_clears_stack() {
        let mut router = Router::new();
        router.navigate(Route::SETTINGS);
        router.navigate(Route::EDIT_PROFILE);
        router.navigate_to_tab(Tab::Inbox);
        assert_eq!(router.current_tab(), Tab::Inbox);
        assert!(router.is_at_root());

        router.navigate_to_tab(Tab::Inbox);
        assert_eq!(router.current_tab(), Tab::Inbox);
        assert!(router.is_at_root());
    }

    #[test]
    fn test_navigate_to_tab_clears_deep_mixed_stack() {
        let mixed = [
            Route::LOGIN,
            Route::Main(MainRoute::Home),
            signup(),
            Route::SETTINGS,
            forgot(),
            Route::EDIT_PROFILE,
            Route::Main(MainRoute::Inbox),
        ];
        for tab in Tab::ALL {
            for depth in 0..=3 * mixed.len() {
                let mut router = Router::new();
                for route in mixed.iter().cycle().take(depth) {
                    router.navigate(*route);
                }
                assert_eq!(router.depth(), depth);

                router.navigate_to_tab(tab);
                assert_eq!(router.current_tab(), tab);
                assert!(router.path().is_empty());
            }
        }
    }

    #[test]
    fn test_navigate_to_tab_then_is_one_transition() {
        let mut router = Router::new();
        router.navigate(Route::Main(MainRoute::Discover));
        let rev = router.revision();
        router.navigate_to_tab_then(Tab::Profile, Route::SETTINGS);
        assert_eq!(router.current_tab(), Tab::Profile);
        assert_eq!(router.path(), &[Route::SETTINGS]);
        assert_eq!(router.revision(), rev + 1);
    }

    #[test]
    fn test_pop_to_root_keeps_tab() {
        let mut router = Router::new();
        router.navigate_to_tab(Tab::Create);
        router.navigate(Route::Main(MainRoute::Profile(ProfileRoute::Main)));
        router.pop_to_root();
        assert_eq!(router.current_tab(), Tab::Create);
        assert!(router.is_at_root());
    }

    #[test]
    fn test_pop_to_root_and_navigate_yields_single_route() {
        let mut router = Router::new();
        router.pop_to_root_and_navigate(Route::LOGIN);
        assert_eq!(router.path(), &[Route::LOGIN]);

        router.navigate(signup());
        router.navigate(forgot());
        router.pop_to_root_and_navigate(Route::EDIT_PROFILE);
        assert_eq!(router.path(), &[Route::EDIT_PROFILE]);
    }

    #[test]
    fn test_revision_tracks_transitions() {
        let mut router = Router::new();
        assert_eq!(router.revision(), 0);
        router.navigate(Route::LOGIN);
        router.pop();
        assert_eq!(router.revision(), 2);
        router.pop();
        assert_eq!(router.revision(), 2);
    }
}
