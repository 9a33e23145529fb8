mod common;

use common::{FakeLlm, FakeMarket, UNSET_CREDENTIAL_ENV, build_flow, test_config};
use invest_agent::credential::CREDENTIAL_INFO;
use invest_agent::page::{PAGE_CAPTION, PAGE_TITLE};
use invest_agent::{AgentConfig, BlockKind, ComparisonFlow, FlowState, FormInput, Page};

fn missing_key_warning() -> String {
    format!(
        "No API key found in environment variables. Ensure '{UNSET_CREDENTIAL_ENV}' is set for optimal functionality."
    )
}

#[tokio::test]
async fn compares_two_stocks_end_to_end() {
    let llm = FakeLlm::replying("Report text");
    let market = FakeMarket::new()
        .with_close("AAPL", 150.0)
        .with_close("MSFT", 300.0)
        .into_arc();
    let flow = build_flow(llm.clone(), market.clone());

    let mut page = Page::new();
    let outcome = flow
        .run(&FormInput::new("AAPL", "MSFT").with_api_key("sk-test"), &mut page)
        .await;

    assert_eq!(outcome.state, FlowState::Reporting);
    assert_eq!(
        page.lines(),
        vec![
            CREDENTIAL_INFO.to_string(),
            PAGE_TITLE.to_string(),
            PAGE_CAPTION.to_string(),
            "OpenAI Report:".to_string(),
            "Report text".to_string(),
            "AAPL Closing Price: 150.0".to_string(),
            "MSFT Closing Price: 300.0".to_string(),
        ]
    );
    assert_eq!(market.calls(), vec!["AAPL".to_string(), "MSFT".to_string()]);

    let calls = llm.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].had_credential);
    assert!(calls[0].request.prompt.contains("AAPL"));
    assert!(calls[0].request.prompt.contains("MSFT"));
}

#[tokio::test]
async fn lookup_failure_does_not_block_second_ticker() {
    let llm = FakeLlm::replying("Report text");
    let market = FakeMarket::new().with_close("AAPL", 150.0).into_arc();
    let flow = build_flow(llm, market);

    let mut page = Page::new();
    flow.run(&FormInput::new("ZZZ", "AAPL"), &mut page).await;

    let lines = page.lines();
    let failure = lines
        .iter()
        .position(|l| l == "Error retrieving financial data for ZZZ.")
        .expect("failure warning rendered");
    let price = lines
        .iter()
        .position(|l| l == "AAPL Closing Price: 150.0")
        .expect("price line rendered");
    assert!(failure < price);
    assert_eq!(page.blocks()[failure].kind, BlockKind::Warning);
}

#[tokio::test]
async fn empty_field_makes_no_outbound_calls() {
    let llm = FakeLlm::replying("Report text");
    let market = FakeMarket::new().with_close("AAPL", 150.0).into_arc();
    let flow = build_flow(llm.clone(), market.clone());

    let expected = vec![
        missing_key_warning(),
        PAGE_TITLE.to_string(),
        PAGE_CAPTION.to_string(),
    ];

    for input in [
        FormInput::new("AAPL", ""),
        FormInput::new("", "AAPL"),
        FormInput::default(),
        FormInput::default(),
    ] {
        let mut page = Page::new();
        let outcome = flow.run(&input, &mut page).await;
        assert_eq!(outcome.state, FlowState::AwaitingInput);
        assert!(outcome.credential_prompt);
        assert_eq!(page.lines(), expected);
    }

    assert_eq!(llm.call_count(), 0);
    assert!(market.calls().is_empty());
}

#[tokio::test]
async fn report_failure_does_not_block_quotes() {
    let llm = FakeLlm::failing("Incorrect API key provided");
    let market = FakeMarket::new()
        .with_close("AAPL", 150.0)
        .with_close("MSFT", 300.0)
        .into_arc();
    let flow = build_flow(llm.clone(), market);

    let mut page = Page::new();
    flow.run(&FormInput::new("AAPL", "MSFT"), &mut page).await;

    let lines = page.lines();
    assert_eq!(lines[0], missing_key_warning());
    assert_eq!(
        &lines[3..],
        &[
            "Error generating report: Authentication failed: Incorrect API key provided".to_string(),
            "AAPL Closing Price: 150.0".to_string(),
            "MSFT Closing Price: 300.0".to_string(),
        ]
    );
    assert_eq!(page.blocks()[3].kind, BlockKind::Error);

    // Without a key the request still goes out and the provider rejects it
    let calls = llm.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(!calls[0].had_credential);
}

#[tokio::test]
async fn missing_close_is_a_warning_not_an_error() {
    let llm = FakeLlm::replying("Report text");
    let market = FakeMarket::new()
        .with_missing_close("AAPL")
        .with_close("MSFT", 0.0)
        .into_arc();
    let flow = build_flow(llm, market);

    let mut page = Page::new();
    flow.run(&FormInput::new("AAPL", "MSFT"), &mut page).await;

    let blocks = page.blocks();
    let tail = &blocks[blocks.len() - 2..];
    assert_eq!(tail[0].line(), "Previous close data unavailable for AAPL.");
    assert_eq!(tail[1].line(), "Previous close data unavailable for MSFT.");
    assert!(tail.iter().all(|b| b.kind == BlockKind::Warning));
}

#[tokio::test]
async fn required_credential_gates_report_only() {
    let llm = FakeLlm::replying("Report text");
    let market = FakeMarket::new()
        .with_close("AAPL", 150.0)
        .with_close("MSFT", 300.0)
        .into_arc();
    let config = AgentConfig {
        require_credential: true,
        ..test_config()
    };
    let flow = ComparisonFlow::new(llm.clone(), market, config);

    let mut page = Page::new();
    flow.run(&FormInput::new("AAPL", "MSFT"), &mut page).await;

    assert_eq!(llm.call_count(), 0);
    assert_eq!(
        &page.lines()[3..],
        &[
            "Error generating report: no API key available".to_string(),
            "AAPL Closing Price: 150.0".to_string(),
            "MSFT Closing Price: 300.0".to_string(),
        ]
    );
}

#[tokio::test]
async fn tickers_are_passed_through_verbatim() {
    let llm = FakeLlm::replying("Report text");
    let market = FakeMarket::new().into_arc();
    let flow = build_flow(llm.clone(), market.clone());

    let mut page = Page::new();
    flow.run(&FormInput::new("aapl ", "brk.b"), &mut page).await;

    assert_eq!(market.calls(), vec!["aapl ".to_string(), "brk.b".to_string()]);
    let calls = llm.calls.lock().unwrap();
    assert!(
        calls[0]
            .request
            .prompt
            .starts_with("Compare the performance of aapl  and brk.b.")
    );
}
