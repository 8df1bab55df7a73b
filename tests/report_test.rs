use chrono::{DateTime, Local};
use seoprobe::collectors::{
    collect_brand_mentions, collect_content_ideas, collect_crawl_health, collect_indexing,
    collect_keyword_rankings, collect_performance, collect_recommendations,
};
use seoprobe::options::Profile;
use seoprobe::report::{Report, assemble};
use seoprobe::sections::{Sections, TechnicalSection};
use seoprobe::site::SiteConfig;
use seoprobe::source::PlaceholderSource;
use url::Url;

fn site_with_pages(pages: &[&str]) -> SiteConfig {
    let mut site = SiteConfig::with_defaults(Url::parse("https://qaspilab.com").unwrap()).unwrap();
    site.pages = pages.iter().map(|p| p.to_string()).collect();
    site
}

/// Runs the synchronous collectors; the technical section is filled in by hand
/// so these tests stay off the network.
fn sections_for(site: &SiteConfig) -> Sections {
    let source = PlaceholderSource::new();
    Sections {
        indexing: Some(collect_indexing(&site.pages, &source)),
        performance: Some(collect_performance(site, &source)),
        crawl_health: Some(collect_crawl_health(&site.pages, &source)),
        technical_seo: Some(TechnicalSection {
            sitemap_submitted: true,
            robots_txt: true,
            ssl_certificate: true,
            mobile_friendly: true,
            page_speed_score: 85,
            site_speed: None,
            brand_on_page: None,
            issues: vec!["Site unreachable (https://qaspilab.com/): connection failed".to_string()],
        }),
        brand_mentions: Some(collect_brand_mentions(&site.brand_variations, &source)),
        keyword_rankings: Some(collect_keyword_rankings(site, &source)),
        recommendations: collect_recommendations(site),
        content_ideas: Some(collect_content_ideas(site)),
    }
}

fn full_report(site: &SiteConfig) -> Report {
    assemble(site, Profile::Full, sections_for(site))
}

#[test]
fn indexing_has_one_entry_per_page_in_order() {
    let pages = [
        "https://qaspilab.com/kk",
        "https://qaspilab.com/",
        "https://qaspilab.com/ru#faq",
        "https://qaspilab.com/en",
    ];
    let site = site_with_pages(&pages);
    let report = full_report(&site);

    let indexing = report.indexing.expect("indexing section");
    assert_eq!(indexing.details.len(), pages.len());
    let urls: Vec<_> = indexing.details.iter().map(|d| d.url.as_str()).collect();
    assert_eq!(urls, pages);
}

#[test]
fn duplicate_pages_are_kept() {
    let site = site_with_pages(&["https://qaspilab.com/", "https://qaspilab.com/"]);
    let report = full_report(&site);
    assert_eq!(report.indexing.unwrap().total_pages, 2);
}

#[test]
fn zero_pages_give_zero_counts() {
    let site = site_with_pages(&[]);
    let report = full_report(&site);

    let indexing = report.indexing.expect("indexing section");
    assert_eq!(indexing.indexed_pages, 0);
    assert_eq!(indexing.total_pages, 0);
    assert_eq!(indexing.indexed_percentage, 0.0);

    let performance = report.performance.expect("performance section");
    assert_eq!(performance.total_impressions, 0);
    assert_eq!(performance.average_ctr, 0.0);
}

#[test]
fn keyword_order_follows_config() {
    let mut site = site_with_pages(&["https://qaspilab.com/"]);
    site.keywords = vec![
        "сайт под ключ".to_string(),
        "создание сайтов".to_string(),
        "веб-дизайн Алматы".to_string(),
    ];
    let report = full_report(&site);

    let keywords: Vec<_> = report
        .keyword_rankings
        .unwrap()
        .positions
        .into_iter()
        .map(|p| p.keyword)
        .collect();
    assert_eq!(keywords, site.keywords);

    let queries: Vec<_> = report
        .performance
        .unwrap()
        .top_queries
        .into_iter()
        .map(|q| q.query)
        .collect();
    assert_eq!(queries, site.keywords);
}

#[test]
fn empty_keywords_give_empty_rankings() {
    let mut site = site_with_pages(&["https://qaspilab.com/"]);
    site.keywords.clear();
    let report = full_report(&site);

    let rankings = report.keyword_rankings.unwrap();
    assert!(rankings.positions.is_empty());
    assert!(rankings.opportunities.is_empty());
    assert!(report.performance.unwrap().top_queries.is_empty());
}

#[test]
fn timestamp_is_stamped_at_assembly() {
    let site = SiteConfig::default();
    let sections = sections_for(&site);

    let before = Local::now().fixed_offset();
    let report = assemble(&site, Profile::Full, sections);
    let after = Local::now().fixed_offset();

    assert!(report.generated_at >= before);
    assert!(report.generated_at <= after);

    let json: serde_json::Value = serde_json::from_str(&report.to_json_string().unwrap()).unwrap();
    let stamp = json["generated_at"].as_str().expect("timestamp is a string");
    let parsed = DateTime::parse_from_rfc3339(stamp).expect("timestamp is RFC 3339");
    assert_eq!(parsed, report.generated_at);
}

#[test]
fn report_carries_site_identity() {
    let site = SiteConfig::default();
    let report = full_report(&site);
    assert_eq!(report.site, "https://qaspilab.com");
    assert_eq!(report.slug(), "qaspilab");
    assert_eq!(
        report.verification_code.as_deref(),
        Some("GXcy-fPu9QDGdvjz7TreRFt2PgmTASsHFQQX3cUxcIs")
    );
    assert_eq!(report.recommendations, site.recommendations);
}

#[test]
fn sections_outside_the_profile_are_omitted() {
    let site = SiteConfig::default();
    let source = PlaceholderSource::new();
    let sections = Sections {
        brand_mentions: Some(collect_brand_mentions(&site.brand_variations, &source)),
        keyword_rankings: Some(collect_keyword_rankings(&site, &source)),
        recommendations: collect_recommendations(&site),
        content_ideas: Some(collect_content_ideas(&site)),
        ..Sections::default()
    };
    let report = assemble(&site, Profile::Brand, sections);

    let json: serde_json::Value = serde_json::from_str(&report.to_json_string().unwrap()).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("indexing"));
    assert!(!object.contains_key("performance"));
    assert!(!object.contains_key("crawl_health"));
    assert!(object.contains_key("brand_mentions"));
    assert!(object.contains_key("keyword_rankings"));
    assert_eq!(json["profile"], "brand");
}

#[test]
fn file_name_embeds_slug_and_second_resolution_time() {
    let site = SiteConfig::default();
    let report = full_report(&site);
    let expected = format!(
        "qaspilab_seo_report_{}.json",
        report.generated_at.format("%Y%m%d_%H%M%S")
    );
    assert_eq!(report.file_name(), expected);
    // qaspilab_seo_report_ + YYYYMMDD_HHMMSS + .json
    assert_eq!(report.file_name().len(), "qaspilab_seo_report_".len() + 15 + 5);
}
