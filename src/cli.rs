// src/cli.rs
use std::{env, error::Error, io::{self, Write}, path::PathBuf};

use crate::{
    config::options::{AppOptions, ExportFormat},
    events::ViewEvents,
    loader::ProcessJobRunner,
    model::{display_or_na, EntityType},
    progress::Progress,
    service::CatalogService,
    source::Source,
};

#[derive(Clone, Debug, Default)]
pub struct CliArgs {
    pub options: AppOptions,
    pub search: Option<String>,
    pub state: Option<String>,
    pub kind: Option<EntityType>,
    pub show: Option<String>,
    pub export: bool,
    pub help: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }
    let stdout = io::stdout();
    run_with(args, &mut stdout.lock())
}

pub fn run_with<W: Write>(args: CliArgs, out: &mut W) -> Result<(), Box<dyn Error>> {
    let mut runner = ProcessJobRunner::from_options(&args.options.loader);
    let mut progress = CliProgress::default();

    let mut svc = CatalogService::start(
        &args.options,
        &mut runner,
        Box::new(CliEvents),
        Some(&mut progress),
    )?;

    if let Some(text) = &args.search {
        svc.set_search(text);
    } else if let Some(name) = &args.state {
        if !svc.select_scope_by_name(name) {
            return Err(format!("No state named {name:?} in the master index").into());
        }
    }

    if let Some(id) = &args.show {
        let Some(item) = svc.get_detail(id) else {
            return Err(format!("Unknown id: {id}").into());
        };
        writeln!(out, "{} ({})", item.entity.name, item.entity.kind)?;
        match item.detail {
            Some(d) => {
                for f in d.fields() {
                    writeln!(out, "  {}: {}", f.label, display_or_na(f.value))?;
                }
            }
            None => writeln!(out, "  No details found for this item.")?,
        }
        if !item.entity.url.is_empty() {
            writeln!(out, "  {}", item.entity.url)?;
        }
        return Ok(());
    }

    let kinds: Vec<EntityType> = match args.kind {
        Some(k) => vec![k],
        None => EntityType::ALL.to_vec(),
    };

    if args.export {
        let items: Vec<_> = kinds
            .iter()
            .flat_map(|&k| svc.list_visible(k))
            .filter_map(|e| svc.lookup(&e.id))
            .collect();
        let path = crate::file::write_export(&args.options.export, &items)?;
        writeln!(out, "Wrote {} rows to {}", items.len(), path.display())?;
        return Ok(());
    }

    for kind in kinds {
        let visible = svc.list_visible(kind);
        writeln!(out, "{} ({})", kind.plural(), visible.len())?;
        for e in visible {
            writeln!(out, "  {}\t{}", e.id, e.name)?;
        }
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, Box<dyn Error>> {
    let mut parsed = CliArgs::default();
    let mut data_dir: Option<PathBuf> = None;
    let mut master: Option<Source> = None;
    let mut detail: Option<Source> = None;
    let mut python: Option<String> = None;
    let mut no_acquire = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--data-dir" => data_dir = Some(PathBuf::from(value("--data-dir")?)),
            "--master" => master = Some(Source::parse(&value("--master")?)),
            "--detail" => detail = Some(Source::parse(&value("--detail")?)),
            "--python" => python = Some(value("--python")?),
            "--no-acquire" => no_acquire = true,
            "--search" => parsed.search = Some(value("--search")?),
            "--state" => parsed.state = Some(value("--state")?),
            "--type" => {
                let v = value("--type")?;
                parsed.kind = Some(EntityType::parse_loose(&v).ok_or_else(|| format!("Unknown type: {v}"))?);
            }
            "--show" => parsed.show = Some(value("--show")?),
            "--export" => {
                let v = value("--export")?;
                parsed.options.export.set_path(&v);
                parsed.export = true;
            }
            "--format" => {
                let v = value("--format")?;
                parsed.options.export.format = ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {v}"))?;
            }
            "--no-headers" => parsed.options.export.include_headers = false,
            "-h" | "--help" => parsed.help = true,
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    // data dir first, explicit sources on top
    if let Some(dir) = data_dir {
        parsed.options = parsed.options.with_data_dir(dir);
    }
    if let Some(m) = master { parsed.options.sources.master = m; }
    if let Some(d) = detail { parsed.options.sources.detail = d; }
    if let Some(p) = python { parsed.options.loader.set_interpreter(&p); }
    parsed.options.loader.enabled = !no_acquire;

    Ok(parsed)
}

/* ---------------- terminal sinks ---------------- */

struct CliEvents;

impl ViewEvents for CliEvents {
    fn on_acquisition_starting(&mut self) {
        eprintln!("No local detail data, starting live acquisition…");
    }
}

#[derive(Default)]
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, job: &str) {
        self.done += 1;
        eprintln!("  {job}: ok ({}/{})", self.done, self.total);
    }
    fn item_failed(&mut self, job: &str, err: &str) {
        self.done += 1;
        eprintln!("  {job}: FAILED ({}/{}) {err}", self.done, self.total);
    }
}
