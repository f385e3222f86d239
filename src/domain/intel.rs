use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// "positive" wins over "negative" when both words appear.
    pub fn detect(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.contains("positive") {
            Sentiment::Positive
        } else if lower.contains("negative") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Glyph family shown next to an outlet name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutletIcon {
    Terminal,
    Tv,
    Globe,
    Google,
    #[default]
    Newspaper,
}

impl OutletIcon {
    pub fn for_outlet(name: &str) -> Self {
        let lower = name.to_lowercase();
        [
            ("bloomberg", OutletIcon::Terminal),
            ("cnbc", OutletIcon::Tv),
            ("reuters", OutletIcon::Globe),
            ("google", OutletIcon::Google),
        ]
        .into_iter()
        .rfind(|(needle, _)| lower.contains(needle))
        .map(|(_, icon)| icon)
        .unwrap_or_default()
    }

    pub fn glyph(self) -> &'static str {
        match self {
            OutletIcon::Terminal => ">_",
            OutletIcon::Tv => "[]",
            OutletIcon::Globe => "()",
            OutletIcon::Google => "G ",
            OutletIcon::Newspaper => "##",
        }
    }
}

/// One outlet's take on the ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSourceItem {
    pub name: String,
    pub icon: OutletIcon,
    pub summary: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum FeedKind {
    Aviation,
    Weather,
    Geo,
    Market,
    #[default]
    Intel,
}

/// A tactical event with multi-horizon likelihoods of a price increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelFeedItem {
    pub id: String,
    pub category: String,
    pub time: String,
    pub text: String,
    pub kind: FeedKind,
    /// 7 days.
    pub short_term_prob: u32,
    /// 30 days.
    pub medium_term_prob: u32,
    /// 1 year.
    pub long_term_prob: u32,
    pub current_price: Option<String>,
    pub target_price: Option<String>,
}

/// Source link returned by the search-augmented model call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub uri: String,
}

/// Raw model reply: free text plus grounding citations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelResponse {
    pub text: String,
    pub citations: Vec<Citation>,
}

/// Structured fields extracted from a model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIntel {
    /// `None` when the reply carries no probability marker.
    pub probability: Option<u32>,
    pub summary: String,
    pub sources: Vec<NewsSourceItem>,
    pub feed: Vec<IntelFeedItem>,
}

/// A parsed reply together with its citations, ready to apply to state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelReport {
    pub parsed: ParsedIntel,
    pub citations: Vec<Citation>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(" positive", Sentiment::Positive)]
    #[case("[sentiment: NEGATIVE]", Sentiment::Negative)]
    #[case("neutral", Sentiment::Neutral)]
    #[case("", Sentiment::Neutral)]
    #[case("positive/neutral/negative", Sentiment::Positive)]
    fn test_sentiment_detect(#[case] raw: &str, #[case] expected: Sentiment) {
        assert_eq!(Sentiment::detect(raw), expected);
    }

    #[rstest]
    #[case("Bloomberg", OutletIcon::Terminal)]
    #[case("CNBC", OutletIcon::Tv)]
    #[case("Reuters", OutletIcon::Globe)]
    #[case("Google News", OutletIcon::Google)]
    #[case("Financial Times", OutletIcon::Newspaper)]
    #[case("Bloomberg via Google", OutletIcon::Google)]
    fn test_outlet_icon(#[case] name: &str, #[case] expected: OutletIcon) {
        assert_eq!(OutletIcon::for_outlet(name), expected);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Sentiment::Negative.to_string(), "negative");
        assert_eq!(FeedKind::Intel.to_string(), "INTEL");
    }
}
