use crate::error::Error;
use crate::options::Profile;
use crate::sections::{
    BrandMentionsSection, CrawlHealthSection, IndexingSection, KeywordRankingsSection,
    PerformanceSection, Sections, TechnicalSection,
};
use crate::site::{SiteConfig, slug_for};
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use url::Url;

/// The assembled result of one run.
///
/// Sections whose collector was not part of the profile are left out of the
/// JSON document entirely. A report is never changed after [`assemble`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub site: String,
    pub generated_at: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing: Option<IndexingSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_health: Option<CrawlHealthSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_seo: Option<TechnicalSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_mentions: Option<BrandMentionsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_rankings: Option<KeywordRankingsSection>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_ideas: Option<Vec<String>>,
}

/// Merges the collector output with the site identity and the current time.
pub fn assemble(site: &SiteConfig, profile: Profile, sections: Sections) -> Report {
    Report {
        site: site.display_url(),
        generated_at: Local::now().fixed_offset(),
        verification_code: site.verification_code.clone(),
        profile,
        indexing: sections.indexing,
        performance: sections.performance,
        crawl_health: sections.crawl_health,
        technical_seo: sections.technical_seo,
        brand_mentions: sections.brand_mentions,
        keyword_rankings: sections.keyword_rankings,
        recommendations: sections.recommendations,
        content_ideas: sections.content_ideas,
    }
}

impl Report {
    /// Returns the report as a pretty-printed JSON string.
    pub fn to_json_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn slug(&self) -> String {
        Url::parse(&self.site)
            .map(|url| slug_for(&url))
            .unwrap_or_else(|_| String::from("site"))
    }

    /// `<site-slug>_seo_report_<YYYYMMDD>_<HHMMSS>.json`
    pub fn file_name(&self) -> String {
        format!(
            "{}_seo_report_{}.json",
            self.slug(),
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}
