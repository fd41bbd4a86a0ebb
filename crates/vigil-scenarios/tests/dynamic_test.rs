use std::time::Duration;
use vigil_browser::BrowserSession;
use vigil_core::SuiteConfig;
use vigil_scenarios::{DynamicControlsFlow, DynamicLoadingFlow, LoadingVariant};

async fn session_and_config() -> (BrowserSession, SuiteConfig) {
    vigil_core::logging::init();
    let config = SuiteConfig::load_with_env().expect("load suite config");
    let session = BrowserSession::launch(&config.browser)
        .await
        .expect("launch browser session");
    (session, config)
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_hidden_element_revealed() {
    let (session, config) = session_and_config().await;
    let flow = DynamicLoadingFlow::new(&session, &config).expect("create flow");

    flow.open(LoadingVariant::HiddenElement)
        .await
        .expect("open dynamic loading page");

    let text = flow
        .start_and_await_greeting()
        .await
        .expect("greeting appears");
    assert!(text.contains("Hello World!"), "unexpected text: {text}");

    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_element_rendered_after_loading() {
    let (session, config) = session_and_config().await;
    let flow = DynamicLoadingFlow::new(&session, &config).expect("create flow");

    flow.open(LoadingVariant::RenderedAfter)
        .await
        .expect("open dynamic loading page");

    let text = flow
        .start_and_await_greeting()
        .await
        .expect("greeting appears");
    assert!(text.contains("Hello World!"), "unexpected text: {text}");

    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_tight_budget_recovers_through_grace() {
    let (session, config) = session_and_config().await;
    let flow = DynamicLoadingFlow::new(&session, &config).expect("create flow");

    flow.open(LoadingVariant::HiddenElement)
        .await
        .expect("open dynamic loading page");

    // The loading bar runs for ~5s; a 2s budget times out mid-load and
    // only the post-timeout grace recheck sees the greeting
    let text = flow
        .start_with_tight_budget(Duration::from_secs(2))
        .await
        .expect("greeting appears after grace period");
    assert!(text.contains("Hello World!"), "unexpected text: {text}");

    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_checkbox_remove_add_cycle() {
    let (session, config) = session_and_config().await;
    let flow = DynamicControlsFlow::new(&session, &config).expect("create flow");

    flow.open().await.expect("open dynamic controls page");

    let message = flow.remove_checkbox().await.expect("checkbox removed");
    assert!(message.contains("It's gone!"), "unexpected message: {message}");

    // The re-added checkbox is a new node; the flow resolves it fresh
    let fresh = flow.add_checkbox().await.expect("checkbox re-added");
    assert!(
        fresh.is_visible().await.expect("query fresh checkbox"),
        "re-added checkbox should be visible"
    );

    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_input_enable_and_type() {
    let (session, config) = session_and_config().await;
    let flow = DynamicControlsFlow::new(&session, &config).expect("create flow");

    flow.open().await.expect("open dynamic controls page");

    let value = flow
        .enable_and_fill_input("Hello World!")
        .await
        .expect("input enabled and filled");
    assert_eq!(value, "Hello World!");

    session.close().await.expect("close browser session");
}
