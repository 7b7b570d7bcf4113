use anyhow::Result;
use httpmock::prelude::*;
use paulmanteaus::app::screen::NO_RESULT_PLACEHOLDER;
use paulmanteaus::{
    render_text, DisplayState, HttpFetcher, PortmanteauSearch, SearchScreen, SearchSettings,
};

fn screen_for(server: &MockServer) -> SearchScreen<HttpFetcher, SearchSettings> {
    let settings = SearchSettings {
        endpoint: server.url("/talk"),
        ..Default::default()
    };
    SearchScreen::new(PortmanteauSearch::new(HttpFetcher::new(), settings))
}

#[tokio::test]
async fn test_trigger_updates_display() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/talk").query_param("word", "paul");
        then.status(200).json_body(serde_json::json!([
            {"source": "paulmanteauing", "combined": "paulmanteau,other"}
        ]));
    });

    let screen = screen_for(&server);
    assert!(matches!(screen.current(), DisplayState::Idle));

    let handle = screen.trigger("paul");
    handle.await?;

    api_mock.assert();
    let state = screen.current();
    let outcome = state.outcome().expect("search finished");
    assert_eq!(render_text(outcome), "paulmanteau");
    Ok(())
}

#[tokio::test]
async fn test_trigger_marks_search_in_flight() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/talk");
        then.status(200)
            .delay(std::time::Duration::from_millis(200))
            .json_body(serde_json::json!([]));
    });

    let screen = screen_for(&server);
    let handle = screen.trigger("paul");
    match screen.current() {
        DisplayState::InFlight { word } => assert_eq!(word, "paul"),
        other => panic!("expected in-flight state, got {:?}", other),
    }

    handle.await?;
    Ok(())
}

#[tokio::test]
async fn test_empty_result_shows_placeholder() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/talk");
        then.status(200).json_body(serde_json::json!([
            {"source": "pa", "combined": "px"}
        ]));
    });

    let screen = screen_for(&server);
    screen.trigger("pa").await?;

    let state = screen.current();
    assert_eq!(render_text(state.outcome().unwrap()), NO_RESULT_PLACEHOLDER);
    Ok(())
}

#[tokio::test]
async fn test_subscriber_sees_completion() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/talk");
        then.status(200).json_body(serde_json::json!([
            {"source": "paulmanteauing", "combined": "paulmanteau"}
        ]));
    });

    let screen = screen_for(&server);
    let mut display = screen.subscribe();
    screen.trigger("paul").await?;

    display.changed().await?;
    let state = display.borrow_and_update().clone();
    assert_eq!(
        state.outcome().and_then(|o| o.portmanteau.as_deref()),
        Some("paulmanteau")
    );
    Ok(())
}

#[tokio::test]
async fn test_last_completion_wins() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/talk").query_param("word", "slow");
        then.status(200)
            .delay(std::time::Duration::from_millis(300))
            .json_body(serde_json::json!([
                {"source": "slowpoke slowly", "combined": "slowmanteau"}
            ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/talk").query_param("word", "fast");
        then.status(200).json_body(serde_json::json!([
            {"source": "fast and furious", "combined": "fastmanteau"}
        ]));
    });

    let screen = screen_for(&server);
    let slow = screen.trigger("slow");
    let fast = screen.trigger("fast");
    fast.await?;
    slow.await?;

    let state = screen.current();
    assert_eq!(state.outcome().map(|o| o.word.as_str()), Some("slow"));
    Ok(())
}
