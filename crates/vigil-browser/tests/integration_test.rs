use std::time::Duration;
use vigil_browser::{BrowserActions, BrowserSession};
use vigil_core::Selector;
use vigil_sync::PollConfig;

fn browser_config() -> vigil_core::BrowserConfig {
    vigil_core::BrowserConfig::default()
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_session_launch_and_close() {
    let session = BrowserSession::launch(&browser_config())
        .await
        .expect("launch browser session");
    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_navigation_and_locate() {
    let session = BrowserSession::launch(&browser_config())
        .await
        .expect("launch browser session");

    session
        .navigate("https://the-internet.herokuapp.com/login")
        .await
        .expect("open login page");

    let username = Selector::new("#username").expect("valid selector");
    let located = session.locate(&username).await.expect("locate username");
    assert!(located.is_some(), "username field should exist");

    let missing = Selector::new("#no-such-element").expect("valid selector");
    let located = session.locate(&missing).await.expect("locate missing");
    assert!(located.is_none(), "absent selector should resolve to None");

    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_wait_until_visible_on_dynamic_page() {
    let session = BrowserSession::launch(&browser_config())
        .await
        .expect("launch browser session");

    session
        .goto("https://the-internet.herokuapp.com/dynamic_loading/1")
        .await
        .expect("open dynamic loading page");

    let start = Selector::new("#start button").expect("valid selector");
    session.click(&start).await.expect("click start");

    let finish = Selector::new("#finish").expect("valid selector");
    let config = PollConfig::new(Duration::from_secs(10), Duration::from_millis(250))
        .expect("valid poll config");

    let element = session
        .wait_until_visible(&finish, &config)
        .await
        .expect("finish element becomes visible");

    let text = element.text().await.expect("read finish text");
    assert!(text.contains("Hello World!"), "unexpected text: {text}");

    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_wait_times_out_with_descriptive_error() {
    let session = BrowserSession::launch(&browser_config())
        .await
        .expect("launch browser session");

    session
        .goto("https://the-internet.herokuapp.com/dynamic_loading/1")
        .await
        .expect("open dynamic loading page");

    // Never clicking start, so the element cannot appear
    let finish = Selector::new("#finish img").expect("valid selector");
    let config = PollConfig::new(Duration::from_millis(500), Duration::from_millis(100))
        .expect("valid poll config");

    let result = session.wait_until_visible(&finish, &config).await;
    match result {
        Err(vigil_browser::BrowserError::WaitTimeout { condition, .. }) => {
            assert!(condition.contains("#finish img"));
        }
        other => panic!("expected WaitTimeout, got {other:?}"),
    }

    session.close().await.expect("close browser session");
}
