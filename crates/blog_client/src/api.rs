use reqwest::Client;
use shared::{
    domain::{BlogPost, PostId},
    protocol::{CreateBlogRequest, LikeResponse},
};
use url::Url;

use crate::error::Result;

/// Typed client for the remote `/api/blogs` resource. Cheap to clone; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct BlogApi {
    http: Client,
    base_url: String,
}

impl BlogApi {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref();
        Url::parse(base_url)?;
        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>> {
        let res = self
            .http
            .get(format!("{}/api/blogs", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn create_blog(&self, request: &CreateBlogRequest) -> Result<BlogPost> {
        let res = self
            .http
            .post(format!("{}/api/blogs", self.base_url))
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn get_blog(&self, id: &PostId) -> Result<BlogPost> {
        let res = self
            .http
            .get(format!("{}/api/blogs/{id}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn update_blog(&self, id: &PostId, blog: &BlogPost) -> Result<BlogPost> {
        let res = self
            .http
            .put(format!("{}/api/blogs/{id}", self.base_url))
            .json(blog)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn delete_blog(&self, id: &PostId) -> Result<()> {
        self.http
            .delete(format!("{}/api/blogs/{id}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn like_blog(&self, id: &PostId) -> Result<LikeResponse> {
        let res = self
            .http
            .post(format!("{}/api/blogs/{id}/like", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }
}
