//! Client-side view/route/data-sync model for a blog REST API.
//!
//! The server and the authentication session store are external
//! collaborators: the first is reached over HTTP via [`BlogApi`], the second
//! through the [`Authentication`] capability trait. Everything else in this
//! crate is view-controller state that a render layer consumes as plain
//! snapshots.

pub mod api;
pub mod auth;
pub mod config;
pub mod controllers;
pub mod error;
pub mod router;
pub mod shell;

pub use api::BlogApi;
pub use auth::{Authentication, SessionAuthentication};
pub use config::{load_settings, Settings};
pub use controllers::{
    BlogAddController, BlogDeleteController, BlogEditController, BlogListController,
    HomeController,
};
pub use error::{ClientError, Result};
pub use router::{Route, ViewTemplate};
pub use shell::{ActiveView, BlogShell};
