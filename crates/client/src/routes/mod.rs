use std::collections::HashMap;

/// Views the application can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Root upload form
    Upload,
    /// Access-by-id view reached through a share link
    Access,
}

/// Pairs a path pattern with the view that handles it. Patterns are
/// `/`-separated literals; a `:name` segment binds that segment of the
/// path as a parameter.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: String,
    view: View,
}

impl Route {
    pub fn new(pattern: impl Into<String>, view: View) -> Self {
        Self {
            pattern: pattern.into(),
            view,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn view(&self) -> View {
        self.view
    }
}

/// Immutable route table. Built once and passed to whoever owns
/// navigation; first matching route wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn matches(&self, path: &str) -> Option<RouteMatch> {
        // Query string and fragment never participate in matching
        let path = path.split(['?', '#']).next().unwrap_or(path);

        self.routes.iter().find_map(|route| {
            match_pattern(&route.pattern, path).map(|params| RouteMatch {
                view: route.view,
                params,
            })
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            Route::new("/", View::Upload),
            Route::new("/view/:id", View::Access),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: View,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        match pattern_segment.strip_prefix(':') {
            Some(name) => {
                if path_segment.is_empty() {
                    return None;
                }
                params.insert(name.to_string(), path_segment.to_string());
            }
            None => {
                if pattern_segment != path_segment {
                    return None;
                }
            }
        }
    }

    Some(params)
}

/// Owns a route table plus an explicit history stack, standing in for
/// push-state browser navigation.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    history: Vec<String>,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            history: Vec::new(),
        }
    }

    /// Resolve `path` and push it onto the history. Failed navigation
    /// leaves the history untouched.
    pub fn navigate(&mut self, path: &str) -> Result<RouteMatch, RouteError> {
        let matched = self
            .table
            .matches(path)
            .ok_or_else(|| RouteError::NoMatch(path.to_string()))?;
        self.history.push(path.to_string());
        Ok(matched)
    }

    /// Pop the current entry and resolve the previous one.
    pub fn back(&mut self) -> Option<RouteMatch> {
        self.history.pop()?;
        let previous = self.history.last()?;
        self.table.matches(previous)
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches path: {0}")]
    NoMatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_upload() {
        let table = RouteTable::default();
        let matched = table.matches("/").unwrap();
        assert_eq!(matched.view, View::Upload);
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_view_path_binds_id() {
        let table = RouteTable::default();
        let matched = table.matches("/view/42").unwrap();
        assert_eq!(matched.view, View::Access);
        assert_eq!(matched.param("id"), Some("42"));
    }

    #[test]
    fn test_query_string_ignored() {
        let table = RouteTable::default();
        let matched = table.matches("/view/abc?from=mail").unwrap();
        assert_eq!(matched.param("id"), Some("abc"));
    }

    #[test]
    fn test_unmatched_paths() {
        let table = RouteTable::default();
        assert!(table.matches("/view").is_none());
        assert!(table.matches("/view/42/extra").is_none());
        assert!(table.matches("/admin").is_none());
    }

    #[test]
    fn test_navigator_pushes_history() {
        let mut nav = Navigator::new(RouteTable::default());
        nav.navigate("/").unwrap();
        nav.navigate("/view/42").unwrap();
        assert_eq!(nav.current(), Some("/view/42"));

        let back = nav.back().unwrap();
        assert_eq!(back.view, View::Upload);
        assert_eq!(nav.current(), Some("/"));
    }

    #[test]
    fn test_failed_navigation_leaves_history() {
        let mut nav = Navigator::new(RouteTable::default());
        nav.navigate("/").unwrap();

        let err = nav.navigate("/nope").unwrap_err();
        assert!(matches!(err, RouteError::NoMatch(_)));
        assert_eq!(nav.current(), Some("/"));
    }
}
