#![cfg(feature = "timeout")]

use std::time::Duration;
use waypost::{
    ErrorKind, MemoryHistory, NavigationController, NavigationError, RouteDefinition, RouteTable,
    loaders::{LoadTimeout, TimeoutLoader},
    testing::{GatedLoader, RecordingSink, StaticLoader},
};

mod common;
use common::Page;

#[tokio::test]
async fn test_slow_view_fails_and_completes_progress() {
    let (faber, _gate) = GatedLoader::new(Page::Faber);
    let table = RouteTable::new([
        RouteDefinition::view("Home", "/home", StaticLoader::new(Page::Home)),
        RouteDefinition::view(
            "Faber",
            "/faber",
            TimeoutLoader::new(faber, Duration::from_millis(10)),
        ),
        RouteDefinition::view("NotFound", "/404", StaticLoader::new(Page::NotFound)).as_fallback(),
    ])
    .unwrap();
    let sink = RecordingSink::new();
    let router = NavigationController::new(table, "/", MemoryHistory::default(), sink.clone());

    let err = router.push("/faber").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Load);
    let NavigationError::Load { source, .. } = err else {
        panic!("expected a load error");
    };
    assert!(source.downcast_ref::<LoadTimeout>().is_some());
    assert_eq!(sink.starts(), 1);
    assert_eq!(sink.dones(), 1);
}
