//! Logging setup for Awanku
//! Routes `log` records to stderr and a daily file, and prunes old log files

use crate::models::Settings;
use chrono::{Local, NaiveDate};
use log::info;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logging(settings: &Settings, logs_dir: &Path) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let file_layer = DailyLogFile::open(logs_dir)
        .map_err(|e| eprintln!("File logging disabled: {}", e))
        .ok()
        .map(|file| fmt::layer().with_ansi(false).with_writer(Mutex::new(file)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init();
}

/// Append-only `awanku-YYYY-MM-DD.log` that moves to a new file when the
/// local date changes
pub struct DailyLogFile {
    dir: PathBuf,
    date: NaiveDate,
    file: File,
}

impl DailyLogFile {
    pub fn open(dir: &Path) -> io::Result<Self> {
        Self::open_for(dir, Local::now().date_naive())
    }

    fn open_for(dir: &Path, date: NaiveDate) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            date,
            file: open_log(dir, date)?,
        })
    }

    fn write_on(&mut self, date: NaiveDate, buf: &[u8]) -> io::Result<usize> {
        if date != self.date {
            self.file.flush()?;
            self.file = open_log(&self.dir, date)?;
            self.date = date;
        }
        self.file.write(buf)
    }
}

impl Write for DailyLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_on(Local::now().date_naive(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn log_file_name(date: NaiveDate) -> String {
    format!("awanku-{}.log", date.format("%Y-%m-%d"))
}

fn open_log(dir: &Path, date: NaiveDate) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(log_file_name(date)))
}

/// Delete `.log` files older than the retention window
pub fn cleanup_old_logs(logs_dir: &Path, retention_days: u64) -> usize {
    if !logs_dir.exists() {
        return 0;
    }

    let retention = Duration::from_secs(retention_days * 24 * 60 * 60);
    let now = SystemTime::now();
    let mut removed = 0;

    if let Ok(entries) = fs::read_dir(logs_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "log") {
                if let Ok(meta) = fs::metadata(&path) {
                    if let Ok(modified) = meta.modified() {
                        if let Ok(age) = now.duration_since(modified) {
                            if age > retention && fs::remove_file(&path).is_ok() {
                                info!("Cleaned up old log: {:?}", path.file_name());
                                removed += 1;
                            }
                        }
                    }
                }
            }
        }
    }

    removed
}
