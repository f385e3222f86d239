use crate::{
    core::{cmd::Cmd, msg::intel::IntelMsg},
    domain::{
        intel::{Citation, IntelFeedItem, IntelReport, NewsSourceItem},
        ticker::Ticker,
    },
};

/// Summary shown after a failed model call.
pub const AWAITING_CONNECTION: &str = "Awaiting live connection...";
/// Probability shown before the first reply and after a failure.
pub const DEFAULT_PROBABILITY: u32 = 50;
/// Citations rendered under the summary.
pub const MAX_VISIBLE_CITATIONS: usize = 3;

/// Live intel fed by the model call
#[derive(Debug, Clone)]
pub struct IntelState {
    /// Ticker of the latest fetch, used by refresh.
    pub ticker: Option<Ticker>,
    pub summary: String,
    /// 0..=100. Keeps its prior value when a reply carries no probability.
    pub probability: u32,
    pub sources: Vec<NewsSourceItem>,
    pub feed: Vec<IntelFeedItem>,
    pub citations: Vec<Citation>,
    pub is_loading: bool,
    /// Id of the latest fetch. Replies carrying any other id are dropped.
    pub request_id: u64,
    /// Whether the last completed fetch succeeded.
    pub is_live: bool,
}

impl Default for IntelState {
    fn default() -> Self {
        Self {
            ticker: None,
            summary: String::new(),
            probability: DEFAULT_PROBABILITY,
            sources: vec![],
            feed: vec![],
            citations: vec![],
            is_loading: false,
            request_id: 0,
            is_live: false,
        }
    }
}

impl IntelState {
    /// Intel-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: IntelMsg) -> Vec<Cmd> {
        match msg {
            IntelMsg::ChangeTicker(ticker) => vec![self.begin_fetch(ticker)],

            IntelMsg::Refresh => match self.ticker.clone() {
                Some(ticker) => vec![self.begin_fetch(ticker)],
                None => vec![],
            },

            IntelMsg::Loaded { request_id, report } => {
                if self.is_stale(request_id) {
                    log::debug!(
                        "Dropping stale intel reply {request_id} (latest {})",
                        self.request_id
                    );
                    return vec![];
                }
                self.apply(report);
                vec![]
            }

            IntelMsg::Failed { request_id, error } => {
                if self.is_stale(request_id) {
                    log::debug!(
                        "Dropping stale intel failure {request_id} (latest {})",
                        self.request_id
                    );
                    return vec![];
                }
                self.summary = AWAITING_CONNECTION.to_owned();
                self.probability = DEFAULT_PROBABILITY;
                self.is_loading = false;
                self.is_live = false;
                vec![Cmd::LogError {
                    message: format!("Intel fetch failed: {error}"),
                }]
            }
        }
    }

    /// Clear the previous reply and issue a fetch under a fresh request id.
    /// The probability is left alone so the gauge does not jump while loading.
    fn begin_fetch(&mut self, ticker: Ticker) -> Cmd {
        self.request_id += 1;
        self.summary.clear();
        self.citations.clear();
        self.sources.clear();
        self.feed.clear();
        self.is_loading = true;
        self.ticker = Some(ticker.clone());

        Cmd::FetchIntel {
            ticker,
            request_id: self.request_id,
        }
    }

    fn apply(&mut self, report: IntelReport) {
        let parsed = report.parsed;
        if let Some(probability) = parsed.probability {
            self.probability = probability.min(100);
        }
        self.summary = parsed.summary;
        self.sources = parsed.sources;
        self.feed = parsed.feed;
        self.citations = report.citations;
        self.is_loading = false;
        self.is_live = true;
    }

    pub fn is_stale(&self, request_id: u64) -> bool {
        request_id != self.request_id
    }

    pub fn visible_citations(&self) -> &[Citation] {
        &self.citations[..self.citations.len().min(MAX_VISIBLE_CITATIONS)]
    }
}
