use shared::domain::PostId;

/// Client-side route table. Each route pairs with one view template; the
/// edit and delete routes bind the trailing path segment as the post id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    BlogList,
    BlogAdd,
    BlogEdit { id: PostId },
    BlogDelete { id: PostId },
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTemplate {
    Home,
    BlogList,
    BlogAdd,
    BlogEdit,
    BlogDelete,
    Login,
    Register,
}

impl Route {
    /// Exact match against the route table. A missing or multi-segment id
    /// does not match.
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/blogList" => Some(Route::BlogList),
            "/blogAdd" => Some(Route::BlogAdd),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            _ => {
                if let Some(id) = path.strip_prefix("/blogEdit/") {
                    parse_id(id).map(|id| Route::BlogEdit { id })
                } else if let Some(id) = path.strip_prefix("/blogDelete/") {
                    parse_id(id).map(|id| Route::BlogDelete { id })
                } else {
                    None
                }
            }
        }
    }

    /// Parse with the table's fallback: anything unmatched redirects to `/`.
    pub fn resolve(path: &str) -> Route {
        Route::parse(path).unwrap_or(Route::Home)
    }

    pub fn template(&self) -> ViewTemplate {
        match self {
            Route::Home => ViewTemplate::Home,
            Route::BlogList => ViewTemplate::BlogList,
            Route::BlogAdd => ViewTemplate::BlogAdd,
            Route::BlogEdit { .. } => ViewTemplate::BlogEdit,
            Route::BlogDelete { .. } => ViewTemplate::BlogDelete,
            Route::Login => ViewTemplate::Login,
            Route::Register => ViewTemplate::Register,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::BlogList => "/blogList".to_string(),
            Route::BlogAdd => "/blogAdd".to_string(),
            Route::BlogEdit { id } => format!("/blogEdit/{id}"),
            Route::BlogDelete { id } => format!("/blogDelete/{id}"),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
        }
    }
}

fn parse_id(segment: &str) -> Option<PostId> {
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    Some(PostId::from(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_table_entry() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/blogList"), Some(Route::BlogList));
        assert_eq!(Route::parse("/blogAdd"), Some(Route::BlogAdd));
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/register"), Some(Route::Register));
        assert_eq!(
            Route::parse("/blogEdit/42"),
            Some(Route::BlogEdit {
                id: PostId::from("42")
            })
        );
        assert_eq!(
            Route::parse("/blogDelete/abc123"),
            Some(Route::BlogDelete {
                id: PostId::from("abc123")
            })
        );
    }

    #[test]
    fn rejects_missing_or_nested_id() {
        assert_eq!(Route::parse("/blogEdit/"), None);
        assert_eq!(Route::parse("/blogEdit/42/extra"), None);
        assert_eq!(Route::parse("/blogDelete/"), None);
    }

    #[test]
    fn unmatched_paths_resolve_to_home() {
        assert_eq!(Route::resolve("/unknown"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/blogList/extra"), Route::Home);
    }

    #[test]
    fn path_round_trips_through_parse() {
        let routes = [
            Route::Home,
            Route::BlogList,
            Route::BlogAdd,
            Route::BlogEdit {
                id: PostId::from("42"),
            },
            Route::BlogDelete {
                id: PostId::from("42"),
            },
            Route::Login,
            Route::Register,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn edit_and_delete_share_id_binding_but_not_template() {
        let edit = Route::resolve("/blogEdit/7");
        let delete = Route::resolve("/blogDelete/7");
        assert_eq!(edit.template(), ViewTemplate::BlogEdit);
        assert_eq!(delete.template(), ViewTemplate::BlogDelete);
    }
}
