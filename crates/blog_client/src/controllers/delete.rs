use shared::domain::{BlogPost, PostId};
use tracing::error;

use crate::{api::BlogApi, config::Settings, router::Route};

/// Delete-confirmation view. Construction fetches the post so the template
/// can show what is about to be removed; a fetch failure only logs, leaving
/// the view with nothing to display.
pub struct BlogDeleteController {
    api: BlogApi,
    id: PostId,
    surface_write_errors: bool,
    blog: Option<BlogPost>,
    message: String,
}

impl BlogDeleteController {
    pub async fn new(api: BlogApi, id: PostId, settings: &Settings) -> Self {
        let mut controller = Self {
            api,
            id,
            surface_write_errors: settings.surface_write_errors,
            blog: None,
            message: String::new(),
        };

        match controller.api.get_blog(&controller.id).await {
            Ok(blog) => controller.blog = Some(blog),
            Err(err) => {
                error!(post = %controller.id, error = %err, "failed to fetch blog for delete");
            }
        }

        controller
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn blog(&self) -> Option<&BlogPost> {
        self.blog.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Deletes the post. On success the caller navigates to the list view;
    /// on failure the confirmation view stays up and the user may retry.
    pub async fn delete_blog(&mut self) -> Option<Route> {
        match self.api.delete_blog(&self.id).await {
            Ok(()) => Some(Route::BlogList),
            Err(err) => {
                error!(post = %self.id, error = %err, "failed to delete blog post");
                if self.surface_write_errors {
                    self.message = format!("Could not delete blog post {}", self.id);
                }
                None
            }
        }
    }
}
