use std::sync::Arc;

use shared::protocol::CreateBlogRequest;
use tracing::error;

use crate::{api::BlogApi, auth::Authentication, config::Settings, router::Route};

/// Create-post view. `title` and `text` are the form's bound fields; author
/// identity comes from the authentication collaborator at submit time.
pub struct BlogAddController {
    api: BlogApi,
    auth: Arc<dyn Authentication>,
    surface_write_errors: bool,
    pub title: String,
    pub text: String,
    message: String,
}

impl BlogAddController {
    pub fn new(api: BlogApi, auth: Arc<dyn Authentication>, settings: &Settings) -> Self {
        Self {
            api,
            auth,
            surface_write_errors: settings.surface_write_errors,
            title: String::new(),
            text: String::new(),
            message: String::new(),
        }
    }

    /// Submits the form. Without a logged-in user this is a logged no-op.
    /// On success the caller navigates to the list view; on failure the form
    /// fields are left as they are so the user can retry.
    pub async fn add_blog(&mut self) -> Option<Route> {
        let Some(user) = self.auth.current_user() else {
            error!("cannot add blog post: no user is logged in");
            return None;
        };

        let request = CreateBlogRequest {
            title: self.title.clone(),
            text: self.text.clone(),
            author_name: user.name,
            author_email: user.email,
        };

        match self.api.create_blog(&request).await {
            Ok(_) => Some(Route::BlogList),
            Err(err) => {
                error!(error = %err, "failed to add blog post");
                if self.surface_write_errors {
                    self.message = "Could not add blog post".to_string();
                }
                None
            }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
