// src/loader.rs
//
// Live acquisition: run the external loader jobs that (re)generate the detail
// document. Jobs run one at a time, in the given order, so a later job can rely
// on files an earlier one wrote. A failing job is logged and skipped; run_all
// itself never fails. Reloading the cache afterwards is the caller's business.

use std::{path::PathBuf, process::Command};

use crate::{
    config::options::{JobSpec, LoaderOptions},
    error::JobError,
    progress::Progress,
};

/// What a successful job hands back. The payload is informational only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobOutput {
    pub payload: Option<String>,
}

/// Performs one named acquisition job.
pub trait JobRunner {
    fn run(&mut self, job: &str) -> Result<JobOutput, JobError>;
}

/* ---------------- Process-backed runner ---------------- */

/// Runs each job as `program args…` inside `work_dir`; non-zero exit is failure,
/// captured stdout is the payload.
pub struct ProcessJobRunner {
    work_dir: PathBuf,
    jobs: Vec<JobSpec>,
}

impl ProcessJobRunner {
    pub fn new(work_dir: impl Into<PathBuf>, jobs: Vec<JobSpec>) -> Self {
        Self { work_dir: work_dir.into(), jobs }
    }

    pub fn from_options(opts: &LoaderOptions) -> Self {
        Self::new(opts.work_dir.clone(), opts.jobs.clone())
    }
}

impl JobRunner for ProcessJobRunner {
    fn run(&mut self, job: &str) -> Result<JobOutput, JobError> {
        let spec = self
            .jobs
            .iter()
            .find(|j| j.name == job)
            .ok_or_else(|| JobError::Unknown(s!(job)))?;

        logd!("Loader: Exec {} {:?} in {}", spec.program, spec.args, self.work_dir.display());

        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|err| JobError::Spawn { name: s!(job), err })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(JobError::ExitStatus {
                name: s!(job),
                status: output.status.to_string(),
                stderr: last_line(&stderr),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok(JobOutput { payload: (!stdout.trim().is_empty()).then_some(stdout) })
    }
}

fn last_line(text: &str) -> String {
    s!(text.lines().rev().find(|l| !l.trim().is_empty()).unwrap_or("").trim())
}

/* ---------------- Orchestrator ---------------- */

/// Per-run outcome, in execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn attempted(&self) -> usize { self.succeeded.len() + self.failed.len() }
}

pub struct LoaderOrchestrator<'a> {
    runner: &'a mut dyn JobRunner,
}

impl<'a> LoaderOrchestrator<'a> {
    pub fn new(runner: &'a mut dyn JobRunner) -> Self {
        Self { runner }
    }

    /// Run every job strictly in order. Failures are swallowed per job.
    pub fn run_all<S: AsRef<str>>(
        &mut self,
        jobs: &[S],
        mut progress: Option<&mut dyn Progress>,
    ) -> RunSummary {
        let mut summary = RunSummary::default();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(jobs.len());
        }
        logf!("Loader: Running {} job(s)", jobs.len());

        for job in jobs {
            let job = job.as_ref();
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Running {job}…"));
            }

            match self.runner.run(job) {
                Ok(out) => {
                    logf!(
                        "Loader: {job} OK (payload {} bytes)",
                        out.payload.as_ref().map(|p| p.len()).unwrap_or(0)
                    );
                    summary.succeeded.push(s!(job));
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(job);
                    }
                }
                Err(e) => {
                    loge!("Loader: {job} failed: {e}");
                    summary.failed.push(s!(job));
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(job, &e.to_string());
                    }
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        logf!(
            "Loader: Done ok={} failed={}",
            summary.succeeded.len(),
            summary.failed.len()
        );
        summary
    }
}
