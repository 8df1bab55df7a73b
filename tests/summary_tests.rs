use seoprobe::collectors::{
    collect_crawl_health, collect_indexing, collect_keyword_rankings, collect_performance,
    collect_recommendations,
};
use seoprobe::options::Profile;
use seoprobe::report::{Report, assemble};
use seoprobe::sections::{Sections, SiteSpeed, TechnicalSection};
use seoprobe::site::SiteConfig;
use seoprobe::source::PlaceholderSource;
use seoprobe::summary::{NEXT_STEPS, TOP_QUERIES, render_summary};

fn console_report(site: &SiteConfig) -> Report {
    console::set_colors_enabled(false);
    let source = PlaceholderSource::new();
    let sections = Sections {
        indexing: Some(collect_indexing(&site.pages, &source)),
        performance: Some(collect_performance(site, &source)),
        crawl_health: Some(collect_crawl_health(&site.pages, &source)),
        keyword_rankings: Some(collect_keyword_rankings(site, &source)),
        recommendations: collect_recommendations(site),
        ..Sections::default()
    };
    assemble(site, Profile::Console, sections)
}

fn numbered_lines_after(summary: &str, heading: &str) -> Vec<String> {
    summary
        .lines()
        .skip_while(|l| !l.starts_with(heading))
        .skip(1)
        .skip_while(|l| l.trim().is_empty())
        .take_while(|l| !l.trim().is_empty())
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn summary_shows_at_most_three_top_queries() {
    let site = SiteConfig::default();
    let summary = render_summary(&console_report(&site));

    let queries = numbered_lines_after(&summary, "Top 3 queries:");
    assert_eq!(queries.len(), TOP_QUERIES);
    assert!(queries[0].starts_with("1. 'создание сайтов'"));
    assert!(queries[0].contains("position 5.2, clicks 25"));
}

#[test]
fn summary_prints_only_existing_queries() {
    let mut site = SiteConfig::default();
    site.keywords.truncate(2);
    let summary = render_summary(&console_report(&site));

    let queries = numbered_lines_after(&summary, "Top 3 queries:");
    assert_eq!(queries.len(), 2);
}

#[test]
fn summary_without_keywords_has_no_top_queries() {
    let mut site = SiteConfig::default();
    site.keywords.clear();
    let summary = render_summary(&console_report(&site));

    assert!(!summary.contains("queries:"));
    assert!(summary.contains("Next steps:"));
}

#[test]
fn summary_shows_headline_figures() {
    let site = SiteConfig::default();
    let summary = render_summary(&console_report(&site));

    assert!(summary.contains("SEO summary for https://qaspilab.com"));
    assert!(summary.contains("8/8 (100.0%)"));
    assert!(summary.contains("150"));
    assert!(summary.contains("2500"));
    assert!(summary.contains("6.0%"));
}

#[test]
fn summary_limits_next_steps() {
    let site = SiteConfig::default();
    let summary = render_summary(&console_report(&site));

    let steps = numbered_lines_after(&summary, "Next steps:");
    assert_eq!(steps.len(), NEXT_STEPS);
    assert!(steps[0].starts_with("1. "));
}

#[test]
fn summary_of_an_empty_site_does_not_panic() {
    let mut site = SiteConfig::default();
    site.keywords.clear();
    site.pages.clear();
    site.recommendations.clear();
    let summary = render_summary(&console_report(&site));

    assert!(summary.contains("0/0 (0.0%)"));
    assert!(!summary.contains("Next steps:"));
}

#[test]
fn summary_lists_technical_issues() {
    let site = SiteConfig::default();
    let mut report = console_report(&site);
    report.technical_seo = Some(TechnicalSection {
        sitemap_submitted: true,
        robots_txt: true,
        ssl_certificate: true,
        mobile_friendly: true,
        page_speed_score: 85,
        site_speed: Some(SiteSpeed {
            status_code: 503,
            response_time_ms: 42,
        }),
        brand_on_page: Some(false),
        issues: vec!["Home page answered with status 503".to_string()],
    });

    let summary = render_summary(&report);
    assert!(summary.contains("Issues:"));
    assert!(summary.contains("- Home page answered with status 503"));
    assert!(summary.contains("42ms"));
}

#[test]
fn rendering_does_not_change_the_report() {
    let site = SiteConfig::default();
    let report = console_report(&site);
    let before = report.clone();
    let _ = render_summary(&report);
    assert_eq!(report, before);
}
