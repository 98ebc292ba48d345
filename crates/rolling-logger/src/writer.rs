//! Size-rotated log file writer
//!
//! `{app}.log` is the active file. When it would grow past `max_bytes` it is
//! renamed to `{app}.1.log`, older files shift up by one and anything past
//! `max_files` is deleted.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingConfig {
    /// Size limit of the active file before it is rotated
    pub max_bytes: u64,
    /// Number of rotated files kept next to the active one
    pub max_files: usize,
    /// Capacity of the in-memory line buffer
    pub buffer_lines: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            max_files: 3,
            buffer_lines: 500,
        }
    }
}

struct RollingState {
    dir: PathBuf,
    app_name: String,
    config: RollingConfig,
    file: File,
    written: u64,
    recent: VecDeque<String>,
    partial: String,
}

/// Cloneable handle; all clones share the same file and buffer
#[derive(Clone)]
pub struct RollingWriter {
    state: Arc<Mutex<RollingState>>,
}

impl RollingWriter {
    pub fn open(dir: &Path, app_name: &str, config: RollingConfig) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let active = active_path(dir, app_name);
        let file = OpenOptions::new().create(true).append(true).open(&active)?;
        let written = file.metadata()?.len();

        Ok(Self {
            state: Arc::new(Mutex::new(RollingState {
                dir: dir.to_path_buf(),
                app_name: app_name.to_string(),
                config,
                file,
                written,
                recent: VecDeque::with_capacity(config.buffer_lines),
                partial: String::new(),
            })),
        })
    }

    pub fn active_path(&self) -> PathBuf {
        match self.lock() {
            Ok(state) => active_path(&state.dir, &state.app_name),
            Err(_) => PathBuf::new(),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lock() {
            Ok(state) => state.recent.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, RollingState>> {
        self.state
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))
    }
}

fn active_path(dir: &Path, app_name: &str) -> PathBuf {
    dir.join(format!("{}.log", app_name))
}

fn rotated_path(dir: &Path, app_name: &str, n: usize) -> PathBuf {
    dir.join(format!("{}.{}.log", app_name, n))
}

impl RollingState {
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let active = active_path(&self.dir, &self.app_name);
        let max = self.config.max_files;

        if max == 0 {
            fs::remove_file(&active)?;
        } else {
            let oldest = rotated_path(&self.dir, &self.app_name, max);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for n in (1..max).rev() {
                let from = rotated_path(&self.dir, &self.app_name, n);
                if from.exists() {
                    fs::rename(&from, rotated_path(&self.dir, &self.app_name, n + 1))?;
                }
            }
            fs::rename(&active, rotated_path(&self.dir, &self.app_name, 1))?;
        }

        self.file = OpenOptions::new().create(true).append(true).open(&active)?;
        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.config.buffer_lines == 0 {
            return;
        }
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            if self.recent.len() == self.config.buffer_lines {
                self.recent.pop_front();
            }
            self.recent.push_back(line.trim_end_matches(['\r', '\n']).to_string());
        }
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.lock()?;
        if state.written > 0 && state.written + buf.len() as u64 > state.config.max_bytes {
            state.rotate()?;
        }
        state.file.write_all(buf)?;
        state.written += buf.len() as u64;
        state.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
