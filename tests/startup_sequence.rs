// tests/startup_sequence.rs
//
// CatalogService startup: ordering of loads, acquisition and view signals.
//
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use datausa_catalog::config::options::AppOptions;
use datausa_catalog::events::ViewEvents;
use datausa_catalog::loader::{JobOutput, JobRunner};
use datausa_catalog::model::{DetailRecord, Entity, EntityType};
use datausa_catalog::{CatalogService, JobError, LoadError};
use tempfile::tempdir;

const MASTER: &str = r#"{
    "04000US48": {"name": "Texas", "type": "State", "slug": "texas"},
    "04000US06": {"name": "California", "type": "State", "slug": "california"},
    "05000US48453": {"name": "Travis County, TX", "type": "County", "slug": "travis-county-tx"},
    "05000US06059": {"name": "Orange County, CA", "type": "County", "slug": "orange-county-ca"},
    "228778": {"name": "University of Texas at Austin", "type": "University", "slug": "ut-austin"}
}"#;

const DETAIL: &str = r#"{
    "04000US48": {"type": "State", "population": "30.5M"},
    "05000US48453": {"type": "State", "population": 1290188}
}"#;

type Log = Arc<Mutex<Vec<String>>>;

#[derive(Clone, Default)]
struct Recorder(Log);

impl Recorder {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
    fn push(&self, ev: String) {
        self.0.lock().unwrap().push(ev);
    }
}

impl ViewEvents for Recorder {
    fn on_ready(&mut self) { self.push("ready".into()); }
    fn on_acquisition_starting(&mut self) { self.push("acquire".into()); }
    fn on_visible_list_changed(&mut self, kind: EntityType) { self.push(format!("list:{kind}")); }
    fn on_detail_resolved(&mut self, id: &str, _entity: &Entity, detail: Option<&DetailRecord>) {
        self.push(format!("detail:{id}:{}", detail.is_some()));
    }
}

/// Runs nothing external; records job names and optionally writes the detail file.
struct ScriptedRunner {
    ran: Vec<String>,
    fail: Vec<&'static str>,
    write_detail: Option<(PathBuf, &'static str)>,
}

impl ScriptedRunner {
    fn new() -> Self { Self { ran: Vec::new(), fail: Vec::new(), write_detail: None } }
}

impl JobRunner for ScriptedRunner {
    fn run(&mut self, job: &str) -> Result<JobOutput, JobError> {
        self.ran.push(job.to_string());
        if self.fail.iter().any(|f| *f == job) {
            return Err(JobError::Other { name: job.to_string(), msg: "scripted failure".into() });
        }
        if let Some((path, text)) = &self.write_detail {
            fs::write(path, text).map_err(|e| JobError::Other { name: job.to_string(), msg: e.to_string() })?;
        }
        Ok(JobOutput::default())
    }
}

fn options(dir: &Path) -> AppOptions {
    AppOptions::default().with_data_dir(dir)
}

fn start(opts: &AppOptions, runner: &mut ScriptedRunner, rec: &Recorder) -> Result<CatalogService, LoadError> {
    CatalogService::start(opts, runner, Box::new(rec.clone()), None)
}

#[test]
fn populated_cache_skips_acquisition() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data-master.json"), MASTER).unwrap();
    fs::write(dir.path().join("data.json"), DETAIL).unwrap();

    let rec = Recorder::default();
    let mut runner = ScriptedRunner::new();
    let svc = start(&options(dir.path()), &mut runner, &rec).unwrap();

    assert!(runner.ran.is_empty());
    assert_eq!(rec.take(), ["ready"]);
    assert_eq!(svc.report().entities, 5);
    assert!(svc.report().acquisition.is_none());
}

#[test]
fn empty_cache_runs_every_job_in_order_then_ready() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data-master.json"), MASTER).unwrap();

    let rec = Recorder::default();
    let mut runner = ScriptedRunner::new();
    runner.fail = vec!["acquire-states"];
    let svc = start(&options(dir.path()), &mut runner, &rec).unwrap();

    assert_eq!(runner.ran, ["acquire-states", "acquire-counties", "acquire-universities"]);
    assert_eq!(rec.take(), ["acquire", "ready"]);

    let sum = svc.report().acquisition.clone().unwrap();
    assert_eq!(sum.failed, ["acquire-states"]);
    assert_eq!(sum.attempted(), 3);
    assert!(!svc.details().is_populated());
}

#[test]
fn acquisition_output_is_picked_up_on_reload() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data-master.json"), MASTER).unwrap();

    let rec = Recorder::default();
    let mut runner = ScriptedRunner::new();
    runner.write_detail = Some((dir.path().join("data.json"), DETAIL));
    let svc = start(&options(dir.path()), &mut runner, &rec).unwrap();

    assert_eq!(svc.report().details_initial, 0);
    assert_eq!(svc.report().details, 2);
    assert!(svc.lookup("04000US48").unwrap().detail.is_some());
}

#[test]
fn disabled_acquisition_leaves_cache_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data-master.json"), MASTER).unwrap();

    let mut opts = options(dir.path());
    opts.loader.enabled = false;
    let rec = Recorder::default();
    let mut runner = ScriptedRunner::new();
    start(&opts, &mut runner, &rec).unwrap();

    assert!(runner.ran.is_empty());
    assert_eq!(rec.take(), ["ready"]);
}

#[test]
fn missing_master_fails_without_signals() {
    let dir = tempdir().unwrap();
    let rec = Recorder::default();
    let mut runner = ScriptedRunner::new();

    let res = start(&options(dir.path()), &mut runner, &rec);
    assert!(matches!(res, Err(LoadError::Io { .. })));
    assert!(rec.take().is_empty());
    assert!(runner.ran.is_empty());
}

#[test]
fn detail_resolution_and_filter_signals() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data-master.json"), MASTER).unwrap();
    fs::write(dir.path().join("data.json"), DETAIL).unwrap();

    let rec = Recorder::default();
    let mut runner = ScriptedRunner::new();
    let mut svc = start(&options(dir.path()), &mut runner, &rec).unwrap();
    rec.take();

    // present, absent, and a record filed under the wrong category
    assert!(svc.get_detail("04000US48").unwrap().detail.is_some());
    assert!(svc.get_detail("228778").unwrap().detail.is_none());
    assert!(svc.get_detail("05000US48453").unwrap().detail.is_none());
    assert!(svc.get_detail("nope").is_none());
    assert_eq!(
        rec.take(),
        ["detail:04000US48:true", "detail:228778:false", "detail:05000US48453:false"]
    );

    assert!(svc.select_scope("04000US48"));
    let counties: Vec<&str> = svc.list_visible(EntityType::County).into_iter().map(|e| e.id.as_str()).collect();
    assert_eq!(counties, ["05000US48453"]);
    assert_eq!(rec.take(), ["list:State", "list:County", "list:University"]);

    // a county id is not a scope
    assert!(!svc.select_scope("05000US48453"));
    assert!(rec.take().is_empty());

    svc.set_search("orange");
    assert!(svc.scope().is_none());
    assert_eq!(svc.list_visible(EntityType::County).len(), 1);
    assert_eq!(svc.list_visible(EntityType::State).len(), 0);
    assert_eq!(rec.take().len(), 3);
}
