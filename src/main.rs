use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use console::style;
use seoprobe::collectors::collect_all;
use seoprobe::error::Error;
use seoprobe::options::{Cli, ConfigFile};
use seoprobe::quick::render_quick_check;
use seoprobe::report::assemble;
use seoprobe::site::SiteConfig;
use seoprobe::source::PlaceholderSource;
use seoprobe::storage::{write_keywords_csv, write_report};
use seoprobe::summary::print_summary;
use seoprobe::{intents, network};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse terminal arguments.
    let options = Cli::parse();

    match run(options).await {
        Ok(code) => code,
        Err(Error::Interrupted) => {
            eprintln!("\n{} {}", style("[ABORTED]").yellow(), Error::Interrupted);
            ExitCode::from(130)
        }
        Err(e) => {
            log::debug!("Run failed with a {} error", e.kind());
            if matches!(e, Error::Unexpected(_)) {
                eprintln!("{} Unexpected failure: {}", style("[ERROR]").red(), e);
            } else {
                eprintln!("{} {}", style("[ERROR]").red(), e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(mut options: Cli) -> Result<ExitCode, Error> {
    // Load config file and apply values (CLI args take priority).
    let config = ConfigFile::load(options.config.as_ref()).map_err(Error::Config)?;
    options.apply_config(&config);
    let site = SiteConfig::from_config(&config, options.site_url.as_ref())?;

    if options.quick {
        print!("{}", render_quick_check(&site));
        return Ok(ExitCode::SUCCESS);
    }

    let quiet = options.json;
    if !quiet {
        println!(
            "{} 🚀 Full SEO check for {}",
            style("[seoprobe]").dim(),
            style(site.display_url()).bold()
        );
    }

    // Console actions are announced only, see `intents`.
    intents::submit_sitemap(&site);
    intents::request_indexing(&site, None);

    let client = network::build_client(options.user_agent(), options.request_timeout())?;
    let source = PlaceholderSource::new();
    let delay = Duration::from_millis(options.delay_ms());

    // Nothing is written when the run is interrupted during collection.
    let sections = tokio::select! {
        sections = collect_all(&site, &source, &client, options.profile(), delay, quiet) => sections,
        _ = tokio::signal::ctrl_c() => return Err(Error::Interrupted),
    };

    let report = assemble(&site, options.profile(), sections);
    let path = write_report(&report, &options.output_dir())?;

    if let Some(csv_path) = options.keywords_csv.as_ref() {
        write_keywords_csv(&report, csv_path)?;
        if !quiet {
            println!(
                "📊 The keyword CSV was written to {}",
                style(csv_path.display()).underlined().cyan()
            );
        }
    }

    if options.json {
        // Print clean JSON to stdout for piping.
        println!("{}", report.to_json_string()?);
    } else {
        print_summary(&report);
        println!(
            "📄 The JSON report was written to {}",
            style(path.display()).underlined().cyan()
        );
    }

    Ok(ExitCode::SUCCESS)
}
