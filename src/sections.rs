//! Typed report sections.
//!
//! Each collector produces exactly one of these. They serialize to plain JSON
//! objects and parse back unchanged, so a written report can be compared to
//! the in-memory one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageIndexStatus {
    pub url: String,
    pub indexed: bool,
    /// Date of the last crawl, `YYYY-MM-DD`.
    pub last_crawled: String,
    pub crawl_errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexingSection {
    pub total_pages: usize,
    pub indexed_pages: usize,
    pub indexed_percentage: f64,
    /// One entry per priority page, in configured order.
    pub details: Vec<PageIndexStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryStats {
    pub query: String,
    pub clicks: u64,
    pub impressions: u64,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageStats {
    pub page: String,
    pub clicks: u64,
    pub impressions: u64,
}

/// Raw search performance as delivered by a metrics source; the collector
/// derives the totals.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceData {
    pub date_range: String,
    pub top_queries: Vec<QueryStats>,
    pub top_pages: Vec<PageStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSection {
    pub total_clicks: u64,
    pub total_impressions: u64,
    /// Click-through rate in percent.
    pub average_ctr: f64,
    pub average_position: f64,
    pub date_range: String,
    pub top_queries: Vec<QueryStats>,
    pub top_pages: Vec<PageStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlIssue {
    pub url: String,
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlHealthSection {
    pub total_errors: usize,
    pub error_details: Vec<CrawlIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSpeed {
    pub status_code: u16,
    pub response_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSection {
    pub sitemap_submitted: bool,
    pub robots_txt: bool,
    pub ssl_certificate: bool,
    pub mobile_friendly: bool,
    pub page_speed_score: u8,
    /// Absent when the site could not be reached.
    pub site_speed: Option<SiteSpeed>,
    /// Whether the brand name appears on the home page.
    pub brand_on_page: Option<bool>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandMention {
    pub variation: String,
    pub mentions: u64,
    pub sentiment: Sentiment,
    pub top_sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandMentionsSection {
    pub total_mentions: u64,
    pub variations: Vec<BrandMention>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        };
        f.write_str(label)
    }
}

/// What a metrics source knows about one keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMetrics {
    /// `None` while the keyword does not rank.
    pub position: Option<f64>,
    pub competition: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordPosition {
    pub keyword: String,
    pub position: Option<f64>,
    pub url: String,
    pub traffic_potential: Level,
    pub competition: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRankingsSection {
    /// One entry per tracked keyword, in configured order.
    pub positions: Vec<KeywordPosition>,
    /// High potential keywords outside the first result page.
    pub opportunities: Vec<String>,
}

/// Output of every collector that ran. Sections of collectors that were not
/// part of the profile stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub indexing: Option<IndexingSection>,
    pub performance: Option<PerformanceSection>,
    pub crawl_health: Option<CrawlHealthSection>,
    pub technical_seo: Option<TechnicalSection>,
    pub brand_mentions: Option<BrandMentionsSection>,
    pub keyword_rankings: Option<KeywordRankingsSection>,
    pub recommendations: Vec<String>,
    pub content_ideas: Option<Vec<String>>,
}
