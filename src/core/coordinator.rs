//! # Coordinator
//!
//! Holds the session and drives the `Router` in response to auth changes
//! and deep links. The dependency only goes one way: the coordinator owns
//! its router, the router knows nothing about the coordinator.
//!
//! Auth transitions are explicit calls. `set_authenticated` writes the flag
//! and then runs the matching handler before returning, so anything that
//! reads router state right after sees the post-transition state:
//!
//! ```text
//! set_authenticated(true)   →  router.navigate_to_tab(Home)
//! set_authenticated(false)  →  clear user, router.pop_to_root(),
//!                              router.navigate(Auth(Login))
//! ```

use log::{info, warn};

use crate::core::deep_link::DeepLink;
use crate::core::route::{Route, Tab};
use crate::core::router::Router;
use crate::core::session::{CurrentUser, Session};

#[derive(Debug, Default)]
pub struct Coordinator {
    router: Router,
    session: Session,
}

impl Coordinator {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            session: Session::default(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// In-flow navigation (e.g. Login → Signup) goes straight to the router.
    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.session.current_user.as_ref()
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.session.is_authenticated = authenticated;
        if authenticated {
            self.handle_successful_authentication();
        } else {
            self.handle_logout();
        }
    }

    /// Record `user` as the signed-in user, then authenticate.
    pub fn sign_in(&mut self, user: CurrentUser) {
        info!("Signed in as {} ({})", user.username, user.id);
        self.session.current_user = Some(user);
        self.set_authenticated(true);
    }

    pub fn sign_out(&mut self) {
        info!("Signing out");
        self.set_authenticated(false);
    }

    fn handle_successful_authentication(&mut self) {
        self.router.navigate_to_tab(Tab::Home);
    }

    fn handle_logout(&mut self) {
        self.session.current_user = None;
        self.router.pop_to_root();
        self.router.navigate(Route::LOGIN);
    }

    /// `user_id` is reserved; every profile currently lands on the Profile tab root.
    pub fn navigate_to_profile(&mut self, _user_id: &str) {
        self.router.navigate_to_tab(Tab::Profile);
    }

    /// `content_id` is reserved; content currently lands on the Home tab root.
    pub fn navigate_to_content(&mut self, _content_id: &str) {
        self.router.navigate_to_tab(Tab::Home);
    }

    pub fn navigate_to_create(&mut self) {
        self.router.navigate_to_tab(Tab::Create);
    }

    pub fn navigate_to_settings(&mut self) {
        self.router.navigate_to_tab_then(Tab::Profile, Route::SETTINGS);
    }

    /// Navigate according to `url`. Returns whether anything happened;
    /// unrecognized or malformed links are ignored.
    pub fn resolve_deep_link(&mut self, url: &str) -> bool {
        match DeepLink::parse(url) {
            Some(link) => {
                info!("Deep link {} -> {:?}", url, link);
                self.open(&link);
                true
            }
            None => {
                warn!("Ignoring unrecognized deep link: {}", url);
                false
            }
        }
    }

    pub fn open(&mut self, link: &DeepLink) {
        match link {
            DeepLink::Profile { user_id } => self.navigate_to_profile(user_id),
            DeepLink::Content { content_id } => self.navigate_to_content(content_id),
        }
    }
}
