//! Route table: location templates bound to screens and their lifecycle policy.

use std::fmt;

use crate::nav::state::MenuItem;

/// Logical console screen. Doubles as the handler identity a route binds to
/// and as the key of the view cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Collections,
    Collection,
    Documents,
    Document,
    Shell,
    Dashboard,
    Query,
    Logs,
    About,
}

impl Screen {
    /// Handler name as it appears in logs.
    pub fn name(self) -> &'static str {
        match self {
            Screen::Collections => "collections",
            Screen::Collection => "collection",
            Screen::Documents => "documents",
            Screen::Document => "document",
            Screen::Shell => "shell",
            Screen::Dashboard => "dashboard",
            Screen::Query => "query",
            Screen::Logs => "logs",
            Screen::About => "about",
        }
    }
}

/// What happens to a cached view when its route is dispatched again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotPolicy {
    /// Keep the cached instance and update its configuration in place.
    Reuse,
    /// Drop the cached instance and construct a fresh one.
    Recreate,
}

/// When the view of a route is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Mount during dispatch.
    Immediate,
    /// Fetch the collections data source first; mount on success.
    AfterCollectionsFetch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Location template made of literal and `:name` segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    template: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(template: &str) -> Self {
        let segments = split_segments(template)
            .into_iter()
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();
        Self {
            template: template.to_string(),
            segments,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Structural match against an already normalized location.
    ///
    /// Segment counts must be equal; literals compare exactly and parameters
    /// bind any non-empty component.
    pub fn matches(&self, location: &str) -> Option<RouteParams> {
        let components = split_segments(location);
        if components.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, component) in self.segments.iter().zip(components) {
            match segment {
                Segment::Literal(literal) if literal == component => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if component.is_empty() => return None,
                Segment::Param(name) => params.push(name, decode_component(component)),
            }
        }
        Some(params)
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

fn decode_component(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Strip hash-router decoration from a location: leading `#` and `/`,
/// trailing whitespace and slash, and any query string.
pub fn normalize_location(location: &str) -> &str {
    let trimmed = location
        .trim_end()
        .trim_start_matches(|c: char| c == '#' || c == '/');
    let without_query = match trimmed.find('?') {
        Some(index) => &trimmed[..index],
        None => trimmed,
    };
    without_query.strip_suffix('/').unwrap_or(without_query)
}

/// Parameters bound by a matched pattern, in template order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(String, String)>,
}

impl RouteParams {
    fn push(&mut self, name: &str, value: String) {
        self.values.push((name.to_string(), value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl fmt::Display for RouteParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (name, value)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

/// One entry of the route table.
#[derive(Clone, Debug)]
pub struct Route {
    pub pattern: RoutePattern,
    pub screen: Screen,
    pub slot: SlotPolicy,
    pub load: LoadPolicy,
    /// Parameter copied into the view's `col_id` configuration. Routes that
    /// bind parameters without naming one here construct unconfigured views.
    pub col_id_param: Option<&'static str>,
    /// Menu entry highlighted after the view renders.
    pub menu_item: Option<MenuItem>,
}

impl Route {
    fn new(template: &str, screen: Screen) -> Self {
        Self {
            pattern: RoutePattern::parse(template),
            screen,
            slot: SlotPolicy::Recreate,
            load: LoadPolicy::Immediate,
            col_id_param: None,
            menu_item: None,
        }
    }

    fn reuse(mut self) -> Self {
        self.slot = SlotPolicy::Reuse;
        self
    }

    fn after_collections_fetch(mut self) -> Self {
        self.load = LoadPolicy::AfterCollectionsFetch;
        self
    }

    fn col_id_from(mut self, param: &'static str) -> Self {
        self.col_id_param = Some(param);
        self
    }

    fn highlights(mut self, item: MenuItem) -> Self {
        self.menu_item = Some(item);
        self
    }
}

/// A route resolved against a location.
#[derive(Clone, Debug)]
pub struct RouteMatch<'a> {
    pub index: usize,
    pub route: &'a Route,
    pub params: RouteParams,
}

/// Ordered route table; the first structural match wins.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    /// The console's route table.
    ///
    /// `collection/:colid/documents/:pageid` is listed before
    /// `collection/:colid/:docid` and keeps priority over it.
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route::new("", Screen::Collections)
                    .after_collections_fetch()
                    .highlights(MenuItem::Collections),
                Route::new("collection/:colid", Screen::Collection)
                    .reuse()
                    .col_id_from("colid"),
                Route::new("collection/:colid/documents/:pageid", Screen::Documents),
                Route::new("collection/:colid/:docid", Screen::Document),
                Route::new("shell", Screen::Shell).highlights(MenuItem::Shell),
                Route::new("dashboard", Screen::Dashboard).highlights(MenuItem::Dashboard),
                Route::new("query", Screen::Query).highlights(MenuItem::Query),
                Route::new("logs", Screen::Logs).highlights(MenuItem::Logs),
                Route::new("about", Screen::About).highlights(MenuItem::About),
            ],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn resolve(&self, location: &str) -> Option<RouteMatch<'_>> {
        let location = normalize_location(location);
        self.routes
            .iter()
            .enumerate()
            .find_map(|(index, route)| {
                route.pattern.matches(location).map(|params| RouteMatch {
                    index,
                    route,
                    params,
                })
            })
    }
}
