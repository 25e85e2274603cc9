use waypost::{
    AttemptId, ErrorKind, History, HookChain, HookResult, MemoryHistory, NavigationController,
    NavigationOutcome, NavigationRequest, ProgressHook, RouteDefinition, RouteTable,
    testing::{
        FailingLoader, GatedLoader, HookEvent, ProgressEvent, RecordingHook, RecordingSink,
        StaticLoader,
    },
};

mod common;
use common::{Page, showcase_router, showcase_routes};

const PAIR: [ProgressEvent; 2] = [ProgressEvent::Start, ProgressEvent::Done];

#[tokio::test]
async fn test_success_signals_once() {
    let (router, sink) = showcase_router("/");

    let navigation = router.push("/innkeeper").await.unwrap();
    assert_eq!(*navigation.view(), Page::Innkeeper);
    assert_eq!(sink.events(), PAIR);
}

#[tokio::test]
async fn test_redirect_signals_once() {
    let mut routes = showcase_routes();
    routes.push(RouteDefinition::redirect("Legacy", "/old-faber", "Faber"));
    let sink = RecordingSink::new();
    let router = NavigationController::new(
        RouteTable::new(routes).unwrap(),
        "/",
        MemoryHistory::default(),
        sink.clone(),
    );

    let navigation = router.push("/old-faber").await.unwrap();
    assert_eq!(navigation.into_view(), Page::Faber);
    assert_eq!(sink.events(), PAIR);
    assert_eq!(router.history().location(), "/faber");
    assert_eq!(router.current().unwrap().redirected_from(), Some("Legacy"));

    sink.clear();
    router.replace("/").await.unwrap();
    assert_eq!(router.history().location(), "/home");
    assert_eq!(sink.events(), PAIR);
}

#[tokio::test]
async fn test_load_failure_signals_once() {
    let mut routes = showcase_routes();
    routes.insert(0, RouteDefinition::view("Broken", "/broken", FailingLoader::new("network down")));
    let sink = RecordingSink::new();
    let router = NavigationController::new(
        RouteTable::new(routes).unwrap(),
        "/",
        MemoryHistory::default(),
        sink.clone(),
    );

    let err = router.push("/broken").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Load);
    assert_eq!(err.to_string(), "failed to load view for route Broken");
    assert_eq!(sink.events(), PAIR);
    assert!(router.is_idle());
}

#[tokio::test]
async fn test_abort_signals_once() {
    let sink = RecordingSink::new();
    let recorder = RecordingHook::with_result(HookResult::Stop);
    let hooks = HookChain::new()
        .with(recorder.clone())
        .with(ProgressHook::new(sink.clone()));
    let router = NavigationController::with_hooks(
        common::showcase_table(),
        "/",
        MemoryHistory::default(),
        hooks,
    );

    let err = router.push("/faber").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Aborted);
    assert_eq!(sink.events(), PAIR);
    assert_eq!(recorder.outcomes(), [NavigationOutcome::Aborted]);
    assert_eq!(router.history().entries(), ["/"]);
    assert!(router.current().is_none());
}

#[tokio::test]
async fn test_manual_abort_signals_once() {
    let (router, sink) = showcase_router("/");

    let attempt = router.begin(NavigationRequest::push("/faber"));
    assert_eq!(sink.events(), [ProgressEvent::Start]);
    assert_eq!(router.in_flight(), 1);

    attempt.abort();
    assert_eq!(sink.events(), PAIR);
    assert!(router.is_idle());
}

#[tokio::test]
async fn test_cancellation_signals_once() {
    let (gated, _gate) = GatedLoader::new(Page::Faber);
    let table = RouteTable::new([
        RouteDefinition::view("Home", "/home", StaticLoader::new(Page::Home)),
        RouteDefinition::view("Faber", "/faber", gated),
        RouteDefinition::view("NotFound", "/404", StaticLoader::new(Page::NotFound)).as_fallback(),
    ])
    .unwrap();
    let sink = RecordingSink::new();
    let recorder = RecordingHook::new();
    let hooks = HookChain::new()
        .with(recorder.clone())
        .with(ProgressHook::new(sink.clone()));
    let router = NavigationController::with_hooks(table, "/", MemoryHistory::default(), hooks);

    {
        let pending = router.push("/faber");
        futures::pin_mut!(pending);
        assert!(futures::poll!(pending.as_mut()).is_pending());
        assert_eq!(sink.events(), [ProgressEvent::Start]);
    }

    assert_eq!(sink.events(), PAIR);
    assert_eq!(
        recorder.events(),
        [
            HookEvent::Before(AttemptId::new(1)),
            HookEvent::After(AttemptId::new(1), NavigationOutcome::Cancelled),
        ]
    );
    assert!(router.is_idle());
    assert!(router.current().is_none());
}

#[tokio::test]
async fn test_every_attempt_is_paired() {
    let (router, sink) = showcase_router("/app");

    router.start().await.unwrap();
    router.push("/app/faber").await.unwrap();
    router.push("/app/nowhere").await.unwrap();
    router.push("/elsewhere").await.unwrap_err();
    router.push_named("Ghost").await.unwrap_err();
    router.on_location_change("/app/innkeeper").await.unwrap();

    let events = sink.events();
    assert_eq!(events.len(), 12);
    for pair in events.chunks(2) {
        assert_eq!(pair, PAIR);
    }
}

#[tokio::test]
async fn test_history_follows_navigation() {
    let (router, _sink) = showcase_router("/");

    router.start().await.unwrap();
    router.push("/innkeeper").await.unwrap();
    router.push("/faber").await.unwrap();
    router.push("/faber").await.unwrap();
    assert_eq!(router.history().entries(), ["/home", "/innkeeper", "/faber"]);

    let previous = router.history().back().unwrap();
    let navigation = router.on_location_change(&previous).await.unwrap();
    assert_eq!(navigation.route().name(), "Innkeeper");
    assert_eq!(router.history().entries(), ["/home", "/innkeeper", "/faber"]);
    assert_eq!(router.history().location(), "/innkeeper");
    assert_eq!(router.current().unwrap().name(), "Innkeeper");
}
