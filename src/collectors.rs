use crate::network::probe_site;
use crate::options::Profile;
use crate::sections::{
    BrandMentionsSection, CrawlHealthSection, IndexingSection, KeywordPosition,
    KeywordRankingsSection, Level, PerformanceSection, Sections, SiteSpeed, TechnicalSection,
};
use crate::site::SiteConfig;
use crate::source::MetricsSource;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Keywords ranking below this position are not on the first result page.
const FIRST_PAGE_POSITION: f64 = 10.0;

/// Score reported until a page speed service is wired in.
const PAGE_SPEED_SCORE: u8 = 85;

pub fn collect_indexing(pages: &[String], source: &dyn MetricsSource) -> IndexingSection {
    let details: Vec<_> = pages
        .iter()
        .map(|page| source.indexing_status(page))
        .collect();
    let total_pages = details.len();
    let indexed_pages = details.iter().filter(|d| d.indexed).count();
    let indexed_percentage = if total_pages > 0 {
        (indexed_pages as f64 / total_pages as f64) * 100.0
    } else {
        0.0
    };

    IndexingSection {
        total_pages,
        indexed_pages,
        indexed_percentage,
        details,
    }
}

pub fn collect_performance(site: &SiteConfig, source: &dyn MetricsSource) -> PerformanceSection {
    let data = source.performance(&site.keywords, &site.pages);

    let total_clicks: u64 = data.top_pages.iter().map(|p| p.clicks).sum();
    let total_impressions: u64 = data.top_pages.iter().map(|p| p.impressions).sum();
    let average_ctr = if total_impressions > 0 {
        (total_clicks as f64 / total_impressions as f64) * 100.0
    } else {
        0.0
    };
    let average_position = if data.top_queries.is_empty() {
        0.0
    } else {
        data.top_queries.iter().map(|q| q.position).sum::<f64>() / data.top_queries.len() as f64
    };

    PerformanceSection {
        total_clicks,
        total_impressions,
        average_ctr,
        average_position,
        date_range: data.date_range,
        top_queries: data.top_queries,
        top_pages: data.top_pages,
    }
}

pub fn collect_crawl_health(pages: &[String], source: &dyn MetricsSource) -> CrawlHealthSection {
    let error_details = source.crawl_errors(pages);
    for issue in &error_details {
        log::warn!("Crawl error on {}: {} ({})", issue.url, issue.message, issue.kind);
    }
    CrawlHealthSection {
        total_errors: error_details.len(),
        error_details,
    }
}

/// Technical checks, including the one availability probe of the site.
///
/// A failed probe never fails the collector: it is recorded in `issues` and
/// `site_speed`/`brand_on_page` stay empty.
pub async fn collect_technical(site: &SiteConfig, client: &reqwest::Client) -> TechnicalSection {
    let ssl_certificate = site.site_url.scheme() == "https";
    let mut section = TechnicalSection {
        sitemap_submitted: true,
        robots_txt: true,
        ssl_certificate,
        mobile_friendly: true,
        page_speed_score: PAGE_SPEED_SCORE,
        site_speed: None,
        brand_on_page: None,
        issues: Vec::new(),
    };

    if !ssl_certificate {
        section
            .issues
            .push(String::from("Site is not served over HTTPS"));
    }

    match probe_site(site.site_url.as_str(), &site.brand_name, client).await {
        Ok(probe) => {
            section.site_speed = Some(SiteSpeed {
                status_code: probe.status_code.as_u16(),
                response_time_ms: probe.response_time.as_millis() as u64,
            });
            section.brand_on_page = Some(probe.brand_found);

            if !probe.status_code.is_success() {
                section.issues.push(format!(
                    "Home page answered with status {}",
                    probe.status_code.as_u16()
                ));
            }
            if !probe.brand_found {
                section.issues.push(format!(
                    "Brand '{}' is not present on the home page",
                    site.brand_name
                ));
            }
        }
        Err(e) => {
            log::warn!("{}", e);
            section.issues.push(e.to_string());
        }
    }

    section
}

pub fn collect_brand_mentions(
    variations: &[String],
    source: &dyn MetricsSource,
) -> BrandMentionsSection {
    let variations: Vec<_> = variations
        .iter()
        .map(|v| source.brand_mention(v))
        .collect();
    BrandMentionsSection {
        total_mentions: variations.iter().map(|v| v.mentions).sum(),
        variations,
    }
}

pub fn collect_keyword_rankings(
    site: &SiteConfig,
    source: &dyn MetricsSource,
) -> KeywordRankingsSection {
    let primary = site.primary_keyword.to_lowercase();
    let positions: Vec<_> = site
        .keywords
        .iter()
        .map(|keyword| {
            let metrics = source.keyword_metrics(keyword);
            let traffic_potential = if !primary.is_empty() && keyword.to_lowercase().contains(&primary)
            {
                Level::High
            } else {
                Level::Medium
            };
            KeywordPosition {
                keyword: keyword.clone(),
                position: metrics.position,
                url: site.display_url(),
                traffic_potential,
                competition: metrics.competition,
            }
        })
        .collect();

    let opportunities = positions
        .iter()
        .filter(|p| p.traffic_potential == Level::High)
        .filter(|p| p.position.is_none_or(|pos| pos > FIRST_PAGE_POSITION))
        .map(|p| p.keyword.clone())
        .collect();

    KeywordRankingsSection {
        positions,
        opportunities,
    }
}

pub fn collect_recommendations(site: &SiteConfig) -> Vec<String> {
    site.recommendations.clone()
}

pub fn collect_content_ideas(site: &SiteConfig) -> Vec<String> {
    site.content_ideas.clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Indexing,
    Performance,
    CrawlHealth,
    BrandMentions,
    KeywordRankings,
    Technical,
    Recommendations,
    ContentIdeas,
}

impl Step {
    fn label(self) -> &'static str {
        match self {
            Step::Indexing => "Indexing status",
            Step::Performance => "Search performance",
            Step::CrawlHealth => "Crawl errors",
            Step::BrandMentions => "Brand mentions",
            Step::KeywordRankings => "Keyword rankings",
            Step::Technical => "Technical checks",
            Step::Recommendations => "Recommendations",
            Step::ContentIdeas => "Content ideas",
        }
    }
}

fn steps_for(profile: Profile) -> Vec<Step> {
    let mut steps = Vec::new();
    if profile.includes_console() {
        steps.extend([Step::Indexing, Step::Performance, Step::CrawlHealth]);
    }
    if profile.includes_brand() {
        steps.extend([Step::BrandMentions, Step::KeywordRankings]);
    }
    steps.extend([Step::Technical, Step::Recommendations]);
    if profile.includes_brand() {
        steps.push(Step::ContentIdeas);
    }
    steps
}

/// Runs every collector the profile selects, one after the other, pausing
/// `delay` between two collectors.
pub async fn collect_all(
    site: &SiteConfig,
    source: &dyn MetricsSource,
    client: &reqwest::Client,
    profile: Profile,
    delay: Duration,
    quiet: bool,
) -> Sections {
    let steps = steps_for(profile);
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(steps.len() as u64)
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template(concat!(
                "\x1b[2m[{pos}/{len}]\x1b[0m",
                " 📥 [{elapsed_precise}] [{bar:30.cyan/blue}] {msg}"
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("■┄"),
    );

    let mut sections = Sections::default();
    for (i, step) in steps.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        progress.set_message(step.label());
        log::info!("Collecting {}", step.label().to_lowercase());

        match step {
            Step::Indexing => sections.indexing = Some(collect_indexing(&site.pages, source)),
            Step::Performance => sections.performance = Some(collect_performance(site, source)),
            Step::CrawlHealth => {
                sections.crawl_health = Some(collect_crawl_health(&site.pages, source))
            }
            Step::BrandMentions => {
                sections.brand_mentions =
                    Some(collect_brand_mentions(&site.brand_variations, source))
            }
            Step::KeywordRankings => {
                sections.keyword_rankings = Some(collect_keyword_rankings(site, source))
            }
            Step::Technical => sections.technical_seo = Some(collect_technical(site, client).await),
            Step::Recommendations => sections.recommendations = collect_recommendations(site),
            Step::ContentIdeas => sections.content_ideas = Some(collect_content_ideas(site)),
        }
        progress.inc(1);
    }
    progress.finish_with_message("🏁 Complete!");

    sections
}
