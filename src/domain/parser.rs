//! Extraction of structured fields from the model's free-text reply.
//!
//! The reply is expected to follow the section layout requested by the
//! prompt (`PROBABILITY:`, `SUMMARY:`, `SOURCE_BREAKDOWN:`, `TACTICAL_FEED:`),
//! but nothing is guaranteed: every field falls back to its own default
//! instead of failing the whole reply.

use chrono::Local;
use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::intel::{
    FeedKind, IntelFeedItem, NewsSourceItem, OutletIcon, ParsedIntel, Sentiment,
};

pub const SOURCE_BREAKDOWN_MARKER: &str = "SOURCE_BREAKDOWN:";
pub const TACTICAL_FEED_MARKER: &str = "TACTICAL_FEED:";

pub const EMPTY_SUMMARY: &str = "Analysis complete.";
pub const DEFAULT_CATEGORY: &str = "INTEL";
pub const DEFAULT_FEED_TEXT: &str = "No data.";
pub const DEFAULT_SOURCE_SUMMARY: &str = "No details.";
pub const DEFAULT_HORIZON_PROB: u32 = 50;

lazy_static! {
    static ref PROBABILITY: Regex = Regex::new(r"(?i)PROBABILITY:\s*([0-9]+)").expect("valid regex");
    static ref SUMMARY: Regex = Regex::new(r"(?is)SUMMARY:(.*?)SOURCE_BREAKDOWN:").expect("valid regex");
    static ref SHORT_TERM: Regex = Regex::new(r"(?i)ST_7D:\s*([0-9]+)").expect("valid regex");
    static ref MEDIUM_TERM: Regex = Regex::new(r"(?i)MT_30D:\s*([0-9]+)").expect("valid regex");
    static ref LONG_TERM: Regex = Regex::new(r"(?i)LT_1Y:\s*([0-9]+)").expect("valid regex");
    static ref CURRENT_PRICE: Regex = Regex::new(r"(?i)CURR_PRICE:\s*(.*)").expect("valid regex");
    static ref TARGET_PRICE: Regex = Regex::new(r"(?i)TGT_PRICE:\s*(.*)").expect("valid regex");
}

/// Parse a reply, stamping feed items with the current local time.
pub fn parse(text: &str) -> ParsedIntel {
    let time = Local::now().format("%H:%M").to_string();
    parse_at(text, &time)
}

/// Parse a reply, stamping feed items with `time`.
pub fn parse_at(text: &str, time: &str) -> ParsedIntel {
    ParsedIntel {
        probability: probability(text),
        summary: summary(text),
        sources: sources(text),
        feed: feed(text, time),
    }
}

/// First `PROBABILITY: <digits>` marker, if any.
pub fn probability(text: &str) -> Option<u32> {
    PROBABILITY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn summary(text: &str) -> String {
    let summary = match SUMMARY.captures(text).and_then(|caps| caps.get(1)) {
        Some(m) => m.as_str().trim().to_owned(),
        None => {
            let head = text
                .split(SOURCE_BREAKDOWN_MARKER)
                .next()
                .unwrap_or_default();
            PROBABILITY.replace(head, "").trim().to_owned()
        }
    };

    if summary.is_empty() {
        EMPTY_SUMMARY.to_owned()
    } else {
        summary
    }
}

/// Per-outlet lines between the first and second breakdown marker.
pub fn sources(text: &str) -> Vec<NewsSourceItem> {
    let Some(section) = section(text, SOURCE_BREAKDOWN_MARKER) else {
        return vec![];
    };
    let section = section
        .split(TACTICAL_FEED_MARKER)
        .next()
        .unwrap_or_default();

    section
        .split('\n')
        .filter(|line| line.contains(':'))
        .map(source_line)
        .filter(|source| source.name.chars().count() > 2)
        .collect()
}

fn source_line(line: &str) -> NewsSourceItem {
    let mut pieces = line.split(':');
    let name = strip_bullets(pieces.next().unwrap_or_default());

    let (summary, sentiment) = match pieces.next() {
        Some(detail) => {
            let mut detail = detail.split('|');
            let summary = detail.next().unwrap_or_default().trim().to_owned();
            let sentiment = detail.next().map(Sentiment::detect).unwrap_or_default();
            (summary, sentiment)
        }
        None => (DEFAULT_SOURCE_SUMMARY.to_owned(), Sentiment::Neutral),
    };

    NewsSourceItem {
        icon: OutletIcon::for_outlet(&name),
        name,
        summary,
        sentiment,
    }
}

/// Pipe-delimited event lines between the first and second feed marker.
pub fn feed(text: &str, time: &str) -> Vec<IntelFeedItem> {
    let Some(section) = section(text, TACTICAL_FEED_MARKER) else {
        return vec![];
    };

    section
        .split('\n')
        .filter(|line| line.contains('|'))
        .enumerate()
        .map(|(idx, line)| feed_line(idx, line, time))
        .collect()
}

fn feed_line(idx: usize, line: &str, time: &str) -> IntelFeedItem {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    let part = |i: usize| parts.get(i).copied();

    let category = part(0).map(strip_bullets).unwrap_or_default();
    let text = part(1).unwrap_or_default();

    IntelFeedItem {
        id: format!("tactical-{idx}"),
        category: non_empty_or(category, DEFAULT_CATEGORY),
        time: time.to_owned(),
        text: non_empty_or(text.to_owned(), DEFAULT_FEED_TEXT),
        kind: FeedKind::Intel,
        short_term_prob: horizon(&SHORT_TERM, part(2)),
        medium_term_prob: horizon(&MEDIUM_TERM, part(3)),
        long_term_prob: horizon(&LONG_TERM, part(4)),
        current_price: capture(&CURRENT_PRICE, part(5)),
        target_price: capture(&TARGET_PRICE, part(6)),
    }
}

fn horizon(re: &Regex, part: Option<&str>) -> u32 {
    capture(re, part)
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(DEFAULT_HORIZON_PROB)
}

fn capture(re: &Regex, part: Option<&str>) -> Option<String> {
    part.and_then(|p| re.captures(p))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_owned())
        .filter(|s| !s.is_empty())
}

/// Text after the first occurrence of `marker`, up to the next occurrence.
fn section<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.split(marker).nth(1)
}

fn strip_bullets(s: &str) -> String {
    s.replace(['*', '-'], "").trim().to_owned()
}

fn non_empty_or(s: String, default: &str) -> String {
    if s.is_empty() {
        default.to_owned()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const REPLY: &str = "1. PROBABILITY: 72
2. SUMMARY: Strong data-center demand keeps the outlook constructive.
3. SOURCE_BREAKDOWN:
   **Bloomberg**: Supply chain checks point to upside | positive
   - CNBC: Valuation worries linger | negative
   Reuters: Export rules remain a wildcard | neutral
   Google News: Retail chatter is upbeat | Positive
4. TACTICAL_FEED:
   Reuters | New export license granted | ST_7D: 64 | MT_30D: 70 | LT_1Y: 81 | CURR_PRICE: $120.50 | TGT_PRICE: $135
   * CNBC | Analyst downgrade | ST_7D: 35 | MT_30D: 48 | LT_1Y: 66 | CURR_PRICE: $120.50 | TGT_PRICE: $110
";

    #[test]
    fn test_full_reply() {
        let parsed = parse_at(REPLY, "09:30");

        assert_eq!(parsed.probability, Some(72));
        assert_eq!(
            parsed.summary,
            "Strong data-center demand keeps the outlook constructive.\n3."
        );

        let names: Vec<&str> = parsed.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bloomberg", "CNBC", "Reuters", "Google News"]);
        assert_eq!(parsed.sources[0].icon, OutletIcon::Terminal);
        assert_eq!(parsed.sources[0].summary, "Supply chain checks point to upside");
        assert_eq!(parsed.sources[0].sentiment, Sentiment::Positive);
        assert_eq!(parsed.sources[1].sentiment, Sentiment::Negative);
        assert_eq!(parsed.sources[2].sentiment, Sentiment::Neutral);
        assert_eq!(parsed.sources[3].sentiment, Sentiment::Positive);
        assert_eq!(parsed.sources[3].icon, OutletIcon::Google);

        assert_eq!(parsed.feed.len(), 2);
        let first = &parsed.feed[0];
        assert_eq!(first.id, "tactical-0");
        assert_eq!(first.category, "Reuters");
        assert_eq!(first.text, "New export license granted");
        assert_eq!(first.time, "09:30");
        assert_eq!(first.kind, FeedKind::Intel);
        assert_eq!(
            (first.short_term_prob, first.medium_term_prob, first.long_term_prob),
            (64, 70, 81)
        );
        assert_eq!(first.current_price.as_deref(), Some("$120.50"));
        assert_eq!(first.target_price.as_deref(), Some("$135"));
        assert_eq!(parsed.feed[1].category, "CNBC");
        assert_eq!(parsed.feed[1].id, "tactical-1");
    }

    #[test]
    fn test_missing_probability_is_none() {
        assert_eq!(probability("The outlook is mixed."), None);
        assert_eq!(probability("probability:   9"), Some(9));
        assert_eq!(probability("PROBABILITY: 40 ... PROBABILITY: 90"), Some(40));
    }

    #[test]
    fn test_summary_falls_back_to_text_before_breakdown() {
        let text = "PROBABILITY: 55\nChips are in demand.\nSOURCE_BREAKDOWN:\nCNBC: ok | neutral";
        assert_eq!(summary(text), "Chips are in demand.");
    }

    #[test]
    fn test_summary_without_markers_is_whole_text() {
        assert_eq!(summary("  Just prose.  "), "Just prose.");
    }

    #[rstest]
    #[case("")]
    #[case("PROBABILITY: 61")]
    #[case("SUMMARY:   SOURCE_BREAKDOWN:")]
    fn test_empty_summary_uses_placeholder(#[case] text: &str) {
        assert_eq!(summary(text), EMPTY_SUMMARY);
    }

    #[test]
    fn test_summary_marker_is_case_insensitive() {
        assert_eq!(summary("summary: calm\nsource_breakdown: x"), "calm");
    }

    #[test]
    fn test_sources_without_marker() {
        assert!(sources("Bloomberg: fine | positive").is_empty());
    }

    #[test]
    fn test_source_without_sentiment_is_neutral() {
        let parsed = sources("SOURCE_BREAKDOWN:\nBloomberg: Quiet session\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].summary, "Quiet session");
        assert_eq!(parsed[0].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_source_detail_stops_at_second_colon() {
        let parsed = sources("SOURCE_BREAKDOWN:\nReuters: Guidance: raised | positive\n");
        assert_eq!(parsed[0].summary, "Guidance");
        assert_eq!(parsed[0].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_short_source_names_are_dropped() {
        let parsed = sources("SOURCE_BREAKDOWN:\n3.: header\n- FT: brief | positive\nWSJ: ok | negative\n");
        let names: Vec<&str> = parsed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["WSJ"]);
    }

    #[test]
    fn test_sources_end_at_feed_marker() {
        let text = "SOURCE_BREAKDOWN:\nCNBC: up | positive\nTACTICAL_FEED:\nNote: not an outlet\n";
        assert_eq!(sources(text).len(), 1);
    }

    #[test]
    fn test_sources_stop_at_repeated_marker() {
        let text = "SOURCE_BREAKDOWN:\nCNBC: up | positive\nSOURCE_BREAKDOWN:\nReuters: down | negative\n";
        let parsed = sources(text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "CNBC");
    }

    #[test]
    fn test_feed_defaults() {
        let parsed = feed("TACTICAL_FEED:\n |  | nothing here\n", "10:00");
        assert_eq!(parsed.len(), 1);
        let item = &parsed[0];
        assert_eq!(item.category, DEFAULT_CATEGORY);
        assert_eq!(item.text, DEFAULT_FEED_TEXT);
        assert_eq!(item.short_term_prob, DEFAULT_HORIZON_PROB);
        assert_eq!(item.medium_term_prob, DEFAULT_HORIZON_PROB);
        assert_eq!(item.long_term_prob, DEFAULT_HORIZON_PROB);
        assert_eq!(item.current_price, None);
        assert_eq!(item.target_price, None);
    }

    #[test]
    fn test_feed_fields_are_positional() {
        // MT value sits in the ST slot, so neither horizon matches.
        let parsed = feed("TACTICAL_FEED:\nAP | Swap | MT_30D: 90 | ST_7D: 10\n", "10:00");
        assert_eq!(parsed[0].short_term_prob, 50);
        assert_eq!(parsed[0].medium_term_prob, 50);
    }

    #[test]
    fn test_feed_ignores_lines_without_pipes() {
        let text = "TACTICAL_FEED:\nList 3 events.\nAP | Event | st_7d: 12\n";
        let parsed = feed(text, "10:00");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id, "tactical-0");
        assert_eq!(parsed[0].short_term_prob, 12);
    }

    #[test]
    fn test_empty_reply() {
        let parsed = parse_at("", "00:00");
        assert_eq!(
            parsed,
            ParsedIntel {
                probability: None,
                summary: EMPTY_SUMMARY.to_owned(),
                sources: vec![],
                feed: vec![],
            }
        );
    }

    #[test]
    fn test_oversized_probability_is_ignored() {
        assert_eq!(probability("PROBABILITY: 99999999999"), None);
    }

    #[test]
    fn test_non_ascii_digits_do_not_match() {
        assert_eq!(probability("PROBABILITY: ٧٥\nPROBABILITY: 70"), Some(70));

        let parsed = feed("TACTICAL_FEED:\nAP | Event | ST_7D: ٣٠ | MT_30D: 61\n", "10:00");
        assert_eq!(parsed[0].short_term_prob, DEFAULT_HORIZON_PROB);
        assert_eq!(parsed[0].medium_term_prob, 61);
    }
}
