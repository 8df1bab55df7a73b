//! Static identity of the monitored site.
//!
//! A [`SiteConfig`] is built once per run, from the built-in defaults below,
//! optionally overridden by a config file and `--site-url`, and never
//! changes afterwards. The order of keywords, pages and brand variations is
//! the order they appear in the report.

use crate::error::Error;
use crate::options::{ConfigFile, parse_site_url};
use url::{Host, Url};

pub const DEFAULT_SITE_URL: &str = "https://qaspilab.com/";
pub const DEFAULT_BRAND_NAME: &str = "Qaspilab";
pub const DEFAULT_PRIMARY_KEYWORD: &str = "создание сайтов";
pub const DEFAULT_VERIFICATION_CODE: &str = "GXcy-fPu9QDGdvjz7TreRFt2PgmTASsHFQQX3cUxcIs";

/// Priority pages, relative to the site URL.
pub const DEFAULT_PAGE_PATHS: &[&str] = &[
    "/",
    "/ru",
    "/en",
    "/kk",
    "/ru#services",
    "/ru#about",
    "/ru#faq",
    "/ru#contact",
];

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "создание сайтов",
    "как сделать сайт",
    "разработка сайтов Казахстан",
    "заказать сайт Астана",
    "создать сайт Алматы",
    "веб-разработка Казахстан",
    "сайт под ключ",
    "лендинг пейдж Казахстан",
    "интернет-магазин разработка",
    "мобильные приложения Казахстан",
    "IT услуги Астана",
    "веб-дизайн Алматы",
    "профессиональная разработка сайтов",
    "как создать сайт недорого",
    "разработка сайтов под ключ",
];

pub const DEFAULT_BRAND_VARIATIONS: &[&str] = &[
    "Qaspilab",
    "Касплиб",
    "Каспилаб",
    "Qaspi Lab",
    "Qaspi-lab",
    "QaspiLab",
];

pub const DEFAULT_RECOMMENDATIONS: &[&str] = &[
    "Добавить больше контента с ключевыми словами \"создание сайтов\"",
    "Усилить упоминание бренда 'Qaspilab' в заголовках и мета-описаниях",
    "Улучшить внутреннюю перелинковку между разделами сайта",
    "Создать страницы услуг для каждого направления",
    "Оптимизировать страницы под geo-запросы: 'Астана', 'Алматы'",
    "Добавить кейсы выполненных проектов",
    "Добавить отзывы клиентов с упоминанием бренда",
    "Настроить structured data для FAQ секции",
    "Оптимизировать изображения для лучшей скорости загрузки",
    "Настроить регулярное обновление контента",
];

pub const DEFAULT_CONTENT_IDEAS: &[&str] = &[
    "Как выбрать компанию для создания сайта в Казахстане - гайд от Qaspilab",
    "Сколько стоит создать сайт - анализ рынка от Qaspilab",
    "ТОП-10 ошибок при создании сайта - опыт команды Qaspilab",
    "Почему Qaspilab - лучший выбор для создания сайта в Астане",
    "Кейс-стади: как Qaspilab помог увеличить продажи клиента",
    "Современные тренды веб-дизайна - взгляд экспертов Qaspilab",
    "Мобильная адаптация сайта - почему это важно (гайд от Qaspilab)",
    "SEO для сайта с нуля - пошаговое руководство от Qaspilab",
    "Интернет-магазин vs лендинг - что выбрать (советы Qaspilab)",
    "Как Qaspilab адаптирует сайты под казахстанский рынок",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub site_url: Url,
    pub keywords: Vec<String>,
    pub pages: Vec<String>,
    pub brand_variations: Vec<String>,
    /// Substring looked for in the home page body.
    pub brand_name: String,
    /// Keywords containing this phrase are rated high traffic potential.
    pub primary_keyword: String,
    pub verification_code: Option<String>,
    pub recommendations: Vec<String>,
    pub content_ideas: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Resolves page entries against the site URL. Absolute URLs are kept as
/// they are; anything else is treated as a path on the site.
fn resolve_pages(site_url: &Url, pages: &[String]) -> Result<Vec<String>, Error> {
    pages
        .iter()
        .map(|page| {
            site_url
                .join(page)
                .map(|u| u.to_string())
                .map_err(|e| Error::Config(format!("Invalid page '{}': {}", page, e)))
        })
        .collect()
}

impl SiteConfig {
    /// The built-in site with its default pages rebased onto `site_url`.
    /// Only http and https sites are accepted.
    pub fn with_defaults(site_url: Url) -> Result<SiteConfig, Error> {
        if !matches!(site_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Unsupported scheme '{}' in site URL {}",
                site_url.scheme(),
                site_url
            )));
        }
        let pages = resolve_pages(&site_url, &owned(DEFAULT_PAGE_PATHS))?;

        Ok(SiteConfig {
            site_url,
            keywords: owned(DEFAULT_KEYWORDS),
            pages,
            brand_variations: owned(DEFAULT_BRAND_VARIATIONS),
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            primary_keyword: DEFAULT_PRIMARY_KEYWORD.to_string(),
            verification_code: Some(DEFAULT_VERIFICATION_CODE.to_string()),
            recommendations: owned(DEFAULT_RECOMMENDATIONS),
            content_ideas: owned(DEFAULT_CONTENT_IDEAS),
        })
    }

    /// Builds the site from a config file. `site_url` (from the command line)
    /// wins over the file, which wins over the built-in site.
    pub fn from_config(config: &ConfigFile, site_url: Option<&Url>) -> Result<SiteConfig, Error> {
        let site_url = match (site_url, config.site_url.as_deref()) {
            (Some(url), _) => url.clone(),
            (None, Some(raw)) => parse_site_url(raw)
                .map_err(|e| Error::Config(format!("Invalid site_url in config: {}", e)))?,
            (None, None) => Url::parse(DEFAULT_SITE_URL)
                .map_err(|e| Error::Unexpected(format!("Invalid built-in site URL: {}", e)))?,
        };

        let mut site = SiteConfig::with_defaults(site_url)?;

        if let Some(pages) = &config.pages {
            site.pages = resolve_pages(&site.site_url, pages)?;
        }
        if let Some(keywords) = &config.keywords {
            site.keywords = keywords.clone();
        }
        if let Some(variations) = &config.brand_variations {
            site.brand_variations = variations.clone();
        }
        if let Some(name) = &config.brand_name {
            site.brand_name = name.clone();
        }
        if let Some(keyword) = &config.primary_keyword {
            site.primary_keyword = keyword.clone();
        }
        if let Some(code) = &config.verification_code {
            site.verification_code = Some(code.clone()).filter(|c| !c.is_empty());
        }
        if let Some(recommendations) = &config.recommendations {
            site.recommendations = recommendations.clone();
        }
        if let Some(ideas) = &config.content_ideas {
            site.content_ideas = ideas.clone();
        }

        Ok(site)
    }

    /// Site URL without a trailing slash, as shown in reports.
    pub fn display_url(&self) -> String {
        self.site_url.as_str().trim_end_matches('/').to_string()
    }

    pub fn sitemap_url(&self) -> String {
        format!("{}/sitemap.xml", self.display_url())
    }

    /// Short file-name friendly name of the site: `https://www.qaspilab.com`
    /// becomes `qaspilab`, `http://127.0.0.1:8080` becomes `127-0-0-1`.
    pub fn slug(&self) -> String {
        slug_for(&self.site_url)
    }
}

/// File-name friendly name for any site URL, see [`SiteConfig::slug`].
pub fn slug_for(site_url: &Url) -> String {
    let raw = match site_url.host() {
        Some(Host::Domain(domain)) => {
            let domain = domain.strip_prefix("www.").unwrap_or(domain);
            match domain.rsplit_once('.') {
                Some((name, _tld)) => name.to_string(),
                None => domain.to_string(),
            }
        }
        Some(host) => host.to_string(),
        None => String::from("site"),
    };

    let slug: String = raw
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        String::from("site")
    } else {
        slug
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let url = Url::parse(DEFAULT_SITE_URL).expect("built-in site URL is valid");
        SiteConfig::with_defaults(url).expect("built-in pages resolve")
    }
}
