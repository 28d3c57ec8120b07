use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::core::persistence::storage_path::logs_dir;
use crate::errors::AppError;

/// Read access to the daily log files produced by the rolling appender.
///
/// The appender names files `<prefix>.<YYYY-MM-DD>`.
pub trait LogRepository {
    /// Dates with a log file present, newest first.
    fn get_log_dates(&self) -> Result<Vec<String>>;

    /// Every line of one day's log file.
    fn get_log_lines(&self, date: &str) -> Result<Vec<String>>;
}

pub struct LogRepositoryImpl {
    dir: PathBuf,
    file_prefix: String,
}

impl LogRepositoryImpl {
    pub fn new() -> Self {
        Self {
            dir: logs_dir(),
            file_prefix: "scimus-api.log".to_string(),
        }
    }

    pub fn at(dir: PathBuf, file_prefix: impl Into<String>) -> Self {
        Self {
            dir,
            file_prefix: file_prefix.into(),
        }
    }

    fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.{}", self.file_prefix, date))
    }
}

impl Default for LogRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRepository for LogRepositoryImpl {
    fn get_log_dates(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let wanted_prefix = format!("{}.", self.file_prefix);
        let mut dates = Vec::new();
        for entry in fs::read_dir(&self.dir).context("Failed to list logs directory")? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(suffix) = name.strip_prefix(&wanted_prefix) else {
                continue;
            };

            if suffix.parse::<NaiveDate>().is_ok() {
                dates.push(suffix.to_string());
            }
        }

        dates.sort();
        dates.reverse();
        Ok(dates)
    }

    fn get_log_lines(&self, date: &str) -> Result<Vec<String>> {
        // Parsing also rejects path-like input before it touches the filesystem.
        let date: NaiveDate = date
            .parse()
            .map_err(|_| AppError::BodyParsingError(format!("invalid log date: {date:?}")))?;

        let path = self.path_for(date);
        if !path.exists() {
            return Err(AppError::NotFound(format!("no log file for {date}")).into());
        }

        let file = File::open(&path).context("Failed to open log file")?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lists_dates_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        for date in ["2026-08-05", "2026-08-07", "2026-08-06"] {
            File::create(tmp.path().join(format!("api.log.{date}"))).unwrap();
        }
        // Noise that must not show up.
        File::create(tmp.path().join("api.log.not-a-date")).unwrap();
        File::create(tmp.path().join("other.log.2026-08-07")).unwrap();

        let repo = LogRepositoryImpl::at(tmp.path().to_path_buf(), "api.log");
        let dates = repo.get_log_dates().unwrap();
        assert_eq!(dates, vec!["2026-08-07", "2026-08-06", "2026-08-05"]);
    }

    #[test]
    fn reads_lines_for_a_date() {
        let tmp = tempfile::tempdir().unwrap();
        let mut f = File::create(tmp.path().join("api.log.2026-08-07")).unwrap();
        writeln!(f, "line one").unwrap();
        writeln!(f, "line two").unwrap();

        let repo = LogRepositoryImpl::at(tmp.path().to_path_buf(), "api.log");
        let lines = repo.get_log_lines("2026-08-07").unwrap();
        assert_eq!(lines, vec!["line one", "line two"]);
    }

    #[test]
    fn rejects_bad_dates_and_missing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = LogRepositoryImpl::at(tmp.path().to_path_buf(), "api.log");

        assert!(repo.get_log_lines("../etc/passwd").is_err());
        assert!(repo.get_log_lines("2026-08-07").is_err());
    }
}
