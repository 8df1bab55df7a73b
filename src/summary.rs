use crate::metrics::{Metrics, side_by_side};
use crate::report::Report;
use crate::utils;
use console::style;

/// How many top queries the summary shows.
pub const TOP_QUERIES: usize = 3;

/// How many recommendations the summary shows.
pub const NEXT_STEPS: usize = 5;

const LINE_WIDTH: usize = 100;

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn overview(report: &Report) -> Metrics {
    let mut m = Metrics::default();
    m.push("🌐 Site", report.site.as_str());
    m.push(
        "🕒 Generated",
        report.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    if let Some(indexing) = &report.indexing {
        m.push(
            "📄 Indexed Pages",
            format!(
                "{}/{} ({})",
                indexing.indexed_pages,
                indexing.total_pages,
                utils::percent(indexing.indexed_percentage)
            ),
        );
    }
    if let Some(crawl) = &report.crawl_health {
        m.push("🚧 Crawl Errors", crawl.total_errors.to_string());
    }
    if let Some(technical) = &report.technical_seo {
        match &technical.site_speed {
            Some(speed) => {
                m.push("⚡️ Response Time", utils::ms(speed.response_time_ms));
                m.push("📊 Status Code", speed.status_code.to_string());
            }
            None => m.push("⚡️ Response Time", "unreachable"),
        }
        if let Some(found) = technical.brand_on_page {
            m.push("🏷️ Brand On Page", yes_no(found));
        }
        m.push("🔒 HTTPS", yes_no(technical.ssl_certificate));
    }
    m
}

fn search(report: &Report) -> Metrics {
    let mut m = Metrics::default();
    if let Some(performance) = &report.performance {
        m.push("👆 Clicks", performance.total_clicks.to_string());
        m.push("👀 Impressions", performance.total_impressions.to_string());
        m.push("📊 CTR", utils::percent(performance.average_ctr));
        m.push("📈 Avg Position", utils::decimal(performance.average_position));
    }
    if let Some(rankings) = &report.keyword_rankings {
        m.push("🎯 Keywords Tracked", rankings.positions.len().to_string());
        m.push("💡 Opportunities", rankings.opportunities.len().to_string());
    }
    if let Some(brand) = &report.brand_mentions {
        m.push("🏷️ Brand Variations", brand.variations.len().to_string());
        m.push("🔎 Brand Mentions", brand.total_mentions.to_string());
    }
    m.push("📝 Recommendations", report.recommendations.len().to_string());
    if let Some(ideas) = &report.content_ideas {
        m.push("✍️ Content Ideas", ideas.len().to_string());
    }
    m
}

/// Builds the condensed, human-readable digest of a report. Only sections
/// present in the report are shown; lists shorter than their preview size
/// are printed as they are.
pub fn render_summary(report: &Report) -> String {
    let mut out = format!(
        "\n{} {}\n\n",
        style("SEO summary for").bold(),
        style(&report.site).bold().underlined()
    );
    out.push_str(&side_by_side(&[&overview(report), &search(report)]));

    if let Some(performance) = &report.performance {
        if !performance.top_queries.is_empty() {
            out.push_str(&format!(
                "\n{}\n\n",
                style(format!("Top {} queries:", TOP_QUERIES)).bold()
            ));
            for (i, q) in performance.top_queries.iter().take(TOP_QUERIES).enumerate() {
                out.push_str(&format!(
                    "{}. '{}' {}\n",
                    i + 1,
                    q.query,
                    style(format!(
                        "position {}, clicks {}",
                        utils::decimal(q.position),
                        q.clicks
                    ))
                    .dim()
                ));
            }
        }
    }

    if let Some(technical) = &report.technical_seo {
        if !technical.issues.is_empty() {
            out.push_str(&format!("\n{}\n\n", style("Issues:").bold()));
            for issue in &technical.issues {
                out.push_str(&format!(
                    "{} {}\n",
                    style("-").red(),
                    utils::truncate_message(issue, LINE_WIDTH)
                ));
            }
        }
    }

    if !report.recommendations.is_empty() {
        out.push_str(&format!("\n{}\n\n", style("Next steps:").bold()));
        for (i, rec) in report.recommendations.iter().take(NEXT_STEPS).enumerate() {
            out.push_str(&format!(
                "{}. {}\n",
                i + 1,
                utils::truncate_message(rec, LINE_WIDTH)
            ));
        }
    }

    out
}

pub fn print_summary(report: &Report) {
    println!("{}", render_summary(report));
}
