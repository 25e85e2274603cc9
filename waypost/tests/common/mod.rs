#![allow(dead_code)]

use waypost::{
    MemoryHistory, NavigationController, RouteDefinition, RouteTable,
    testing::{RecordingSink, StaticLoader},
};

// ============================================================================
// Showcase Views
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Innkeeper,
    Faber,
    NotFound,
}

// ============================================================================
// Fixtures
// ============================================================================

/// The showcase routes, in declaration order.
pub fn showcase_routes() -> Vec<RouteDefinition<Page>> {
    vec![
        RouteDefinition::view("Home", "/home", StaticLoader::new(Page::Home)),
        RouteDefinition::view("Innkeeper", "/innkeeper", StaticLoader::new(Page::Innkeeper)),
        RouteDefinition::view("Faber", "/faber", StaticLoader::new(Page::Faber)),
        RouteDefinition::view("NotFound", "/404", StaticLoader::new(Page::NotFound)).as_fallback(),
    ]
}

pub fn showcase_table() -> RouteTable<Page> {
    RouteTable::new(showcase_routes()).unwrap()
}

pub fn showcase_router(base: &str) -> (NavigationController<Page>, RecordingSink) {
    let sink = RecordingSink::new();
    let router = NavigationController::new(
        showcase_table(),
        base,
        MemoryHistory::new(base),
        sink.clone(),
    );
    (router, sink)
}
