mod common;

use pretty_assertions::assert_eq;
use worldaware::{
    domain::{
        bands::Outlook,
        intel::{Sentiment, IntelReport},
        parser,
    },
    infrastructure::{
        gemini::{decode_response, IntelError},
        intel_service::fetch_report,
    },
};

use common::{ticker, CannedProvider, FailingProvider, REPLY};

#[test]
fn test_parse_reply_end_to_end() {
    let parsed = parser::parse_at(REPLY, "12:00");

    assert_eq!(parsed.probability, Some(72));
    assert!(parsed.summary.starts_with("Strong data-center demand"));
    assert_eq!(parsed.sources.len(), 2);
    assert_eq!(parsed.sources[0].name, "Bloomberg");
    assert_eq!(parsed.sources[1].sentiment, Sentiment::Negative);

    let event = &parsed.feed[0];
    assert_eq!(event.time, "12:00");
    assert_eq!(event.current_price.as_deref(), Some("$120.50"));
    assert_eq!(event.target_price.as_deref(), Some("$135"));
    assert_eq!(Outlook::classify(event.long_term_prob), Outlook::Bullish);
}

#[test]
fn test_unstructured_reply_falls_back() {
    let parsed = parser::parse_at("The market is closed today.", "12:00");

    assert_eq!(parsed.probability, None);
    assert_eq!(parsed.summary, "The market is closed today.");
    assert!(parsed.sources.is_empty());
    assert!(parsed.feed.is_empty());
}

#[test]
fn test_decoded_api_body_parses() -> Result<(), IntelError> {
    let body = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": REPLY }] },
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://example.com/a", "title": "Example" } }
                ]
            }
        }]
    })
    .to_string();

    let response = decode_response(&body)?;
    let parsed = parser::parse(&response.text);

    assert_eq!(parsed.probability, Some(72));
    assert_eq!(response.citations.len(), 1);
    assert_eq!(response.citations[0].title, "Example");
    Ok(())
}

#[tokio::test]
async fn test_fetch_report_with_canned_provider() -> Result<(), IntelError> {
    let provider = CannedProvider::new(REPLY);
    let report: IntelReport = fetch_report(&provider, &ticker("NVDA")).await?;

    assert_eq!(report.parsed.probability, Some(72));
    assert_eq!(report.citations[0].uri, "https://reuters.example/nvda");
    Ok(())
}

#[tokio::test]
async fn test_fetch_report_propagates_failure() {
    let result = fetch_report(&FailingProvider, &ticker("NVDA")).await;
    assert!(matches!(result, Err(IntelError::Offline)));
}
