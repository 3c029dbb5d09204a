use std::sync::Arc;

use tracing::info;

use crate::{
    api::BlogApi,
    auth::Authentication,
    config::Settings,
    controllers::{
        BlogAddController, BlogDeleteController, BlogEditController, BlogListController,
        HomeController,
    },
    error::Result,
    router::Route,
};

/// The view currently mounted by the shell. Login and register render
/// templates owned by the authentication collaborator, so they carry no
/// controller here.
pub enum ActiveView {
    Home(HomeController),
    BlogList(Arc<BlogListController>),
    BlogAdd(BlogAddController),
    BlogEdit(BlogEditController),
    BlogDelete(BlogDeleteController),
    Login,
    Register,
}

/// Owns the current route and view, replacing the ambient route/location
/// singletons: navigation tears the outgoing view down (cancelling the list
/// refresh poll) before the incoming controller is constructed.
pub struct BlogShell {
    api: BlogApi,
    auth: Arc<dyn Authentication>,
    settings: Settings,
    route: Route,
    view: ActiveView,
}

impl BlogShell {
    pub fn new(settings: Settings, auth: Arc<dyn Authentication>) -> Result<Self> {
        let api = BlogApi::new(&settings.api_base_url)?;
        Ok(Self {
            api,
            auth,
            settings,
            route: Route::Home,
            view: ActiveView::Home(HomeController::new()),
        })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ActiveView {
        &mut self.view
    }

    /// Resolve a raw path (unmatched paths fall back to `/`) and mount the
    /// corresponding view.
    pub async fn navigate(&mut self, path: &str) -> &ActiveView {
        let route = Route::resolve(path);
        self.enter(route).await
    }

    /// Follow a navigation returned by a controller action, if any.
    pub async fn apply(&mut self, navigation: Option<Route>) -> Option<&ActiveView> {
        match navigation {
            Some(route) => Some(self.enter(route).await),
            None => None,
        }
    }

    async fn enter(&mut self, route: Route) -> &ActiveView {
        if let ActiveView::BlogList(list) = &self.view {
            list.teardown().await;
        }

        info!(path = %route.path(), "navigating");

        self.view = match &route {
            Route::Home => ActiveView::Home(HomeController::new()),
            Route::BlogList => ActiveView::BlogList(
                BlogListController::new(self.api.clone(), Arc::clone(&self.auth), &self.settings)
                    .await,
            ),
            Route::BlogAdd => ActiveView::BlogAdd(BlogAddController::new(
                self.api.clone(),
                Arc::clone(&self.auth),
                &self.settings,
            )),
            Route::BlogEdit { id } => ActiveView::BlogEdit(
                BlogEditController::new(self.api.clone(), id.clone(), &self.settings).await,
            ),
            Route::BlogDelete { id } => ActiveView::BlogDelete(
                BlogDeleteController::new(self.api.clone(), id.clone(), &self.settings).await,
            ),
            Route::Login => ActiveView::Login,
            Route::Register => ActiveView::Register,
        };
        self.route = route;
        &self.view
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
