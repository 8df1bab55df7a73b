use crate::error::Error;
use crate::report::Report;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the report as pretty-printed UTF-8 JSON into `dir`.
///
/// The file name embeds the site slug and the report's generation time (see
/// [`Report::file_name`]). The file is created with create-new semantics: an
/// existing report of the same name is never overwritten. A missing or
/// read-only directory, a name clash or a failed write all return an error,
/// and no partial file is left behind.
///
/// # Returns
///
/// The path of the written file.
pub fn write_report(report: &Report, dir: &Path) -> Result<PathBuf, Error> {
    let json = report.to_json_string()?;
    let path = dir.join(report.file_name());

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

    if let Err(source) = file
        .write_all(json.as_bytes())
        .and_then(|_| file.write_all(b"\n"))
        .and_then(|_| file.sync_all())
    {
        drop(file);
        let _ = fs::remove_file(&path);
        return Err(Error::Write { path, source });
    }

    log::info!("Report written to {}", path.display());
    Ok(path)
}

/// Writes the keyword positions of the report as CSV. A report without a
/// keyword section produces a file with the header row only.
pub fn write_keywords_csv(report: &Report, path: &Path) -> Result<(), Error> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| write_err(e.into()))?;
    writer
        .write_record([
            "Keyword",
            "Position",
            "URL",
            "Traffic Potential",
            "Competition",
        ])
        .map_err(|e| write_err(e.into()))?;

    if let Some(rankings) = &report.keyword_rankings {
        for p in &rankings.positions {
            let position = p.position.map(|pos| pos.to_string()).unwrap_or_default();
            let traffic_potential = p.traffic_potential.to_string();
            let competition = p.competition.to_string();
            writer
                .write_record([
                    p.keyword.as_str(),
                    position.as_str(),
                    p.url.as_str(),
                    traffic_potential.as_str(),
                    competition.as_str(),
                ])
                .map_err(|e| write_err(e.into()))?;
        }
    }
    writer.flush().map_err(write_err)?;

    Ok(())
}
