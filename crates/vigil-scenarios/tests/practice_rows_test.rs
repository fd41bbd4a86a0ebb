use vigil_browser::BrowserSession;
use vigil_core::SuiteConfig;
use vigil_scenarios::PracticeRowsFlow;

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
async fn test_second_row_appears() {
    let (session, config) = session_and_config().await;
    let flow = PracticeRowsFlow::new(&session, &config).expect("create flow");

    flow.open().await.expect("open practice page");
    flow.add_second_row().await.expect("row 2 input appears");

    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_save_second_row() {
    let (session, config) = session_and_config().await;
    let flow = PracticeRowsFlow::new(&session, &config).expect("create flow");

    flow.open().await.expect("open practice page");
    flow.add_second_row().await.expect("row 2 input appears");

    let message = flow
        .save_second_row("Sushi")
        .await
        .expect("row 2 saves cleanly");
    assert_eq!(message, "Row 2 was saved");

    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_edit_first_row() {
    let (session, config) = session_and_config().await;
    let flow = PracticeRowsFlow::new(&session, &config).expect("create flow");

    flow.open().await.expect("open practice page");

    let value = flow
        .edit_first_row("Pucio")
        .await
        .expect("row 1 edits cleanly");
    assert_eq!(value, "Pucio");

    session.close().await.expect("close browser session");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium and network access
async fn test_instructions_disappear_after_add() {
    let (session, config) = session_and_config().await;
    let flow = PracticeRowsFlow::new(&session, &config).expect("create flow");

    flow.open().await.expect("open practice page");
    flow.instructions_disappear()
        .await
        .expect("instructions paragraph disappears");

    session.close().await.expect("close browser session");
}
