use shared::domain::{BlogPost, PostId};
use tracing::error;

use super::PageHeader;
use crate::{api::BlogApi, config::Settings, router::Route};

/// Edit-post view. Construction fetches the post bound by the `:id` route
/// parameter into an editable copy; `save_blog` writes that copy back.
pub struct BlogEditController {
    api: BlogApi,
    id: PostId,
    surface_write_errors: bool,
    page_header: PageHeader,
    blog: Option<BlogPost>,
    message: String,
}

impl BlogEditController {
    pub async fn new(api: BlogApi, id: PostId, settings: &Settings) -> Self {
        let mut controller = Self {
            api,
            id,
            surface_write_errors: settings.surface_write_errors,
            page_header: PageHeader::new("Blog Edit"),
            blog: None,
            message: String::new(),
        };

        match controller.api.get_blog(&controller.id).await {
            Ok(blog) => {
                controller.blog = Some(blog);
                controller.message = "Blog data found!".to_string();
            }
            Err(err) => {
                error!(post = %controller.id, error = %err, "failed to fetch blog for edit");
                controller.message = format!("Could not get blog with id: {}", controller.id);
            }
        }

        controller
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn page_header(&self) -> &PageHeader {
        &self.page_header
    }

    pub fn blog(&self) -> Option<&BlogPost> {
        self.blog.as_ref()
    }

    /// Editable copy the form binds against. `None` until the read succeeds.
    pub fn blog_mut(&mut self) -> Option<&mut BlogPost> {
        self.blog.as_mut()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Writes the edited copy back. On success the caller navigates to the
    /// list view; on failure the copy is untouched and the user may retry.
    pub async fn save_blog(&mut self) -> Option<Route> {
        let Some(blog) = &self.blog else {
            error!(post = %self.id, "no blog data loaded; nothing to save");
            return None;
        };

        match self.api.update_blog(&self.id, blog).await {
            Ok(_) => Some(Route::BlogList),
            Err(err) => {
                error!(post = %self.id, error = %err, "failed to update blog post");
                if self.surface_write_errors {
                    self.message = format!("Could not update blog post {}", self.id);
                }
                None
            }
        }
    }
}
