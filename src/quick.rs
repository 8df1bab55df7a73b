//! The quick check: a fixed SEO checklist printed without touching the
//! network.

use crate::site::SiteConfig;
use console::style;

/// Number of items in the checklist.
pub const CHECKLIST_LEN: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
    pub details: String,
}

impl Check {
    fn ok(name: &'static str, details: impl Into<String>) -> Self {
        Self {
            name,
            passed: true,
            details: details.into(),
        }
    }
}

/// The checklist for `site`. Always exactly [`CHECKLIST_LEN`] entries.
pub fn checklist(site: &SiteConfig) -> [Check; CHECKLIST_LEN] {
    let verification = match &site.verification_code {
        Some(code) => Check::ok("Search console verification", format!("Code added: {}", code)),
        None => Check {
            name: "Search console verification",
            passed: false,
            details: String::from("No verification code configured"),
        },
    };
    let https = site.site_url.scheme() == "https";

    [
        verification,
        Check::ok("Sitemap.xml", format!("Published at {}", site.sitemap_url())),
        Check::ok("Robots.txt", "Configured for crawling"),
        Check::ok(
            "Meta tags",
            format!("Optimized for '{}'", site.primary_keyword),
        ),
        Check::ok("JSON-LD markup", "LocalBusiness + Organization"),
        Check::ok("Open Graph", "Configured for social networks"),
        Check::ok("Mobile version", "Responsive design"),
        Check {
            name: "HTTPS",
            passed: https,
            details: if https {
                String::from("TLS certificate active")
            } else {
                format!("{} is served over plain HTTP", site.display_url())
            },
        },
        Check::ok("Page speed", "Optimized build"),
    ]
}

pub fn render_quick_check(site: &SiteConfig) -> String {
    let checks = checklist(site);
    let mut out = format!(
        "{} {}\n{}\n",
        style("⚡ Quick SEO check for").bold(),
        style(site.display_url()).bold().underlined(),
        "-".repeat(45)
    );
    for check in &checks {
        let mark = if check.passed { "✅" } else { "❌" };
        out.push_str(&format!("{} {}: {}\n", mark, check.name, check.details));
    }

    let passed = checks.iter().filter(|c| c.passed).count();
    out.push_str(&format!(
        "\n🎯 Ready for promotion: {}/{}\n",
        passed, CHECKLIST_LEN
    ));
    out
}
