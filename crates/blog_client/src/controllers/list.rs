use std::{collections::HashSet, sync::Arc, time::Duration};

use shared::domain::{BlogPost, PostId};
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, error};

use super::PageHeader;
use crate::{api::BlogApi, auth::Authentication, config::Settings};

/// Blog-list view: shows every post, supports per-post likes, and refreshes
/// on a fixed timer while the view is active.
///
/// The controller is shared between the view and its refresh task, so it is
/// constructed behind an `Arc` with the mutable state in a single inner
/// lock. `teardown` must run when the view goes away; it is the only thing
/// that stops the refresh task.
pub struct BlogListController {
    api: BlogApi,
    auth: Arc<dyn Authentication>,
    is_authenticated: bool,
    surface_write_errors: bool,
    inner: Mutex<ListState>,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
}

struct ListState {
    blogs: Vec<BlogPost>,
    message: String,
    liked_posts: HashSet<PostId>,
}

/// Snapshot handed to the render layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogListViewModel {
    pub page_header: PageHeader,
    pub message: String,
    pub is_authenticated: bool,
    pub blogs: Vec<BlogEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogEntry {
    pub post: BlogPost,
    pub liked: bool,
    pub editable: bool,
}

impl BlogListController {
    /// Seeds the liked set and login flag from the authentication
    /// collaborator, fetches the list once, then starts the refresh poll.
    /// Login status is read here only; a later login or logout does not
    /// update an active view.
    pub async fn new(
        api: BlogApi,
        auth: Arc<dyn Authentication>,
        settings: &Settings,
    ) -> Arc<Self> {
        let controller = Arc::new(Self {
            is_authenticated: auth.is_logged_in(),
            surface_write_errors: settings.surface_write_errors,
            inner: Mutex::new(ListState {
                blogs: Vec::new(),
                message: String::new(),
                liked_posts: auth.liked_posts(),
            }),
            api,
            auth,
            refresh_task: Mutex::new(None),
        });

        controller.fetch_blogs().await;

        let task =
            controller.spawn_refresh_task(Duration::from_millis(settings.poll_interval_ms));
        *controller.refresh_task.lock().await = Some(task);

        controller
    }

    fn spawn_refresh_task(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                controller.fetch_blogs().await;
            }
        })
    }

    /// Replaces the displayed collection on success; on failure only the
    /// status message changes and the previously loaded list stays up.
    pub async fn fetch_blogs(&self) {
        match self.api.list_blogs().await {
            Ok(blogs) => {
                let mut state = self.inner.lock().await;
                state.blogs = blogs;
                state.message = "Blogs list found!".to_string();
            }
            Err(err) => {
                error!(error = %err, "failed to fetch blog list");
                let mut state = self.inner.lock().await;
                state.message = "Could not get list of blogs".to_string();
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// True iff a user is logged in and authored the post.
    pub fn is_creator(&self, post: &BlogPost) -> bool {
        self.auth
            .current_user()
            .is_some_and(|user| user.email == post.author_email)
    }

    pub async fn has_liked(&self, id: &PostId) -> bool {
        self.inner.lock().await.liked_posts.contains(id)
    }

    /// Likes a post once per session. Already-liked posts are a logged no-op
    /// with no network traffic. On success the like count comes from the
    /// server response, never from a local increment.
    pub async fn like_blog(&self, id: &PostId) {
        if self.has_liked(id).await {
            debug!(post = %id, "already liked this post");
            return;
        }

        match self.api.like_blog(id).await {
            Ok(response) => {
                let mut state = self.inner.lock().await;
                if let Some(post) = state.blogs.iter_mut().find(|post| post.id == *id) {
                    post.likes = response.likes;
                }
                state.liked_posts.insert(id.clone());
                self.auth.add_liked_post(id.clone());
            }
            Err(err) => {
                error!(post = %id, error = %err, "failed to like blog post");
                if self.surface_write_errors {
                    let mut state = self.inner.lock().await;
                    state.message = format!("Could not like blog post {id}");
                }
            }
        }
    }

    /// Stops the refresh task. No fetch fires after this returns.
    pub async fn teardown(&self) {
        if let Some(task) = self.refresh_task.lock().await.take() {
            task.abort();
        }
    }

    pub async fn view_model(&self) -> BlogListViewModel {
        let state = self.inner.lock().await;
        BlogListViewModel {
            page_header: PageHeader::new("Blog List"),
            message: state.message.clone(),
            is_authenticated: self.is_authenticated,
            blogs: state
                .blogs
                .iter()
                .map(|post| BlogEntry {
                    liked: state.liked_posts.contains(&post.id),
                    editable: self.is_creator(post),
                    post: post.clone(),
                })
                .collect(),
        }
    }
}
