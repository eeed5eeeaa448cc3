//! # Deep Links
//!
//! Turns an external URL into a typed `DeepLink`. Only the URL path and the
//! `id` query parameter matter:
//!
//! | path       | query  | link                  |
//! |------------|--------|-----------------------|
//! | `/profile` | `id=…` | `Profile { user_id }` |
//! | `/content` | `id=…` | `Content { content_id }` |
//!
//! Anything else, including a URL that fails to parse, yields `None`.
//! For custom-scheme links like `loopzy://profile?id=1` the `profile` part
//! is the host, not the path, so those do not match either.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    Profile { user_id: String },
    Content { content_id: String },
}

impl DeepLink {
    pub fn parse(raw: &str) -> Option<DeepLink> {
        let url = Url::parse(raw).ok()?;
        let id = || {
            url.query_pairs()
                .find(|(name, _)| name == "id")
                .map(|(_, value)| value.into_owned())
        };
        match url.path() {
            "/profile" => id().map(|user_id| DeepLink::Profile { user_id }),
            "/content" => id().map(|content_id| DeepLink::Content { content_id }),
            _ => None,
        }
    }
}
