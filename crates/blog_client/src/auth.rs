use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard, PoisonError},
};

use shared::domain::{PostId, UserSession};

/// Capability surface of the authentication collaborator. The real session
/// store lives outside this crate; controllers only ever see this trait, so
/// implementations can be swapped for test doubles.
pub trait Authentication: Send + Sync {
    fn current_user(&self) -> Option<UserSession>;
    fn is_logged_in(&self) -> bool;
    /// Ids of the posts the current session has already liked.
    fn liked_posts(&self) -> HashSet<PostId>;
    /// Persist a newly liked post id into the session.
    fn add_liked_post(&self, id: PostId);
}

/// In-memory session store. Stands in for a browser-session-backed
/// implementation when none is wired up.
pub struct SessionAuthentication {
    user: Option<UserSession>,
    liked: Mutex<HashSet<PostId>>,
}

impl SessionAuthentication {
    pub fn logged_in(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user: Some(UserSession {
                name: name.into(),
                email: email.into(),
            }),
            liked: Mutex::new(HashSet::new()),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            user: None,
            liked: Mutex::new(HashSet::new()),
        }
    }

    pub fn with_liked_posts(self, ids: impl IntoIterator<Item = PostId>) -> Self {
        self.liked_set().extend(ids);
        self
    }

    fn liked_set(&self) -> MutexGuard<'_, HashSet<PostId>> {
        self.liked.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Authentication for SessionAuthentication {
    fn current_user(&self) -> Option<UserSession> {
        self.user.clone()
    }

    fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    fn liked_posts(&self) -> HashSet<PostId> {
        self.liked_set().clone()
    }

    fn add_liked_post(&self, id: PostId) {
        self.liked_set().insert(id);
    }
}
