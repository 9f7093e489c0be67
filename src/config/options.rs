// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::source::Source;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub sources: SourceOptions,
    pub loader: LoaderOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Point both documents and the loader scripts at one directory.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.sources = SourceOptions::in_dir(dir);
        self.loader.work_dir = dir.to_path_buf();
        self
    }
}

/* ---------------- Sources ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub master: Source,
    pub detail: Source,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            master: Source::File(PathBuf::from(MASTER_FILE)),
            detail: Source::File(PathBuf::from(DETAIL_FILE)),
        }
    }
}

impl SourceOptions {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            master: Source::File(dir.join(MASTER_FILE)),
            detail: Source::File(dir.join(DETAIL_FILE)),
        }
    }
}

/* ---------------- Live acquisition ---------------- */

/// One external acquisition job: `program args…`, run in `LoaderOptions::work_dir`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobSpec {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
}

impl JobSpec {
    pub fn new(name: &str, program: &str, args: &[&str]) -> Self {
        Self {
            name: s!(name),
            program: s!(program),
            args: args.iter().map(|a| s!(*a)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderOptions {
    /// When false, an empty detail cache stays empty (no jobs, no reload).
    pub enabled: bool,
    pub work_dir: PathBuf,
    /// Ordered; jobs run strictly in this order.
    pub jobs: Vec<JobSpec>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            work_dir: PathBuf::from("."),
            jobs: DEFAULT_JOBS
                .iter()
                .map(|&(name, script)| JobSpec::new(name, DEFAULT_INTERPRETER, &[script]))
                .collect(),
        }
    }
}

impl LoaderOptions {
    pub fn job_names(&self) -> Vec<String> {
        self.jobs.iter().map(|j| j.name.clone()).collect()
    }

    pub fn set_interpreter(&mut self, program: &str) {
        for job in &mut self.jobs {
            job.program = s!(program);
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            dir: PathBuf::from("."),
            file_stem: OsString::from(DEFAULT_EXPORT_STEM),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows `format`.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.file_stem.to_string_lossy();
        self.dir.join(join!(&*stem, ".", self.format.ext()))
    }

    /// Parse user text into dir + stem. Ignores a typed extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.file_stem = stem.to_os_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_jobs_are_in_fixed_order() {
        let names = LoaderOptions::default().job_names();
        assert_eq!(names, vec![JOB_STATES, JOB_COUNTIES, JOB_UNIVERSITIES]);
    }

    #[test]
    fn export_extension_follows_format() {
        let mut opts = ExportOptions::default();
        opts.set_path("out/texas.txt");
        assert!(opts.out_path().ends_with("texas.csv"));
        opts.format = ExportFormat::Tsv;
        assert!(opts.out_path().ends_with("texas.tsv"));
        assert!(opts.out_path().starts_with("out"));
    }
}
