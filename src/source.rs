use crate::sections::{
    BrandMention, CrawlIssue, KeywordMetrics, Level, PageIndexStatus, PageStats, PerformanceData,
    QueryStats, Sentiment,
};
use chrono::{Local, NaiveDate};

/// Where the search-console figures of a report come from.
///
/// Collectors only talk to this trait, so a live implementation can replace
/// [`PlaceholderSource`] without touching the report shape.
pub trait MetricsSource {
    fn indexing_status(&self, page: &str) -> PageIndexStatus;

    fn performance(&self, keywords: &[String], pages: &[String]) -> PerformanceData;

    fn crawl_errors(&self, pages: &[String]) -> Vec<CrawlIssue>;

    fn brand_mention(&self, variation: &str) -> BrandMention;

    fn keyword_metrics(&self, keyword: &str) -> KeywordMetrics;
}

/// Clicks, impressions and average position for the first tracked keywords.
const QUERY_FIGURES: [(u64, u64, f64); 5] = [
    (25, 180, 5.2),
    (18, 150, 6.8),
    (15, 120, 7.3),
    (12, 200, 9.1),
    (10, 100, 8.5),
];

/// Clicks and impressions for the first priority pages.
const PAGE_FIGURES: [(u64, u64); 3] = [(80, 1200), (45, 800), (25, 500)];

/// Deterministic stand-in for a search console: every page is indexed, the
/// first keywords and pages get fixed traffic figures, there are no crawl
/// errors or brand mentions and no keyword ranks yet.
#[derive(Debug, Clone)]
pub struct PlaceholderSource {
    as_of: NaiveDate,
}

impl PlaceholderSource {
    pub fn new() -> Self {
        Self {
            as_of: Local::now().date_naive(),
        }
    }

    /// A source whose crawl dates are pinned to `as_of`.
    pub fn as_of(as_of: NaiveDate) -> Self {
        Self { as_of }
    }
}

impl Default for PlaceholderSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for PlaceholderSource {
    fn indexing_status(&self, page: &str) -> PageIndexStatus {
        PageIndexStatus {
            url: page.to_string(),
            indexed: true,
            last_crawled: self.as_of.format("%Y-%m-%d").to_string(),
            crawl_errors: Vec::new(),
        }
    }

    fn performance(&self, keywords: &[String], pages: &[String]) -> PerformanceData {
        let top_queries = keywords
            .iter()
            .zip(QUERY_FIGURES)
            .map(|(query, (clicks, impressions, position))| QueryStats {
                query: query.clone(),
                clicks,
                impressions,
                position,
            })
            .collect();

        let top_pages = pages
            .iter()
            .zip(PAGE_FIGURES)
            .map(|(page, (clicks, impressions))| PageStats {
                page: page.clone(),
                clicks,
                impressions,
            })
            .collect();

        PerformanceData {
            date_range: String::from("last 7 days"),
            top_queries,
            top_pages,
        }
    }

    fn crawl_errors(&self, _pages: &[String]) -> Vec<CrawlIssue> {
        Vec::new()
    }

    fn brand_mention(&self, variation: &str) -> BrandMention {
        BrandMention {
            variation: variation.to_string(),
            mentions: 0,
            sentiment: Sentiment::Neutral,
            top_sources: Vec::new(),
        }
    }

    fn keyword_metrics(&self, _keyword: &str) -> KeywordMetrics {
        KeywordMetrics {
            position: None,
            competition: Level::Medium,
        }
    }
}
