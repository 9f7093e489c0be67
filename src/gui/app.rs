// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::{self, Receiver, TryRecvError}, Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    error::LoadError,
    loader::ProcessJobRunner,
    service::CatalogService,
};

use super::{
    components,
    progress::{GuiEvents, GuiProgress},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "DataUSA Catalog",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, AppState::default())))),
    )?;
    Ok(())
}

type StartupResult = Result<CatalogService, LoadError>;

pub struct App {
    // single source of truth for UI-side settings (UI thread only)
    pub state: AppState,

    // None until the startup thread hands it over
    pub service: Option<CatalogService>,
    startup: Option<Receiver<StartupResult>>,

    // status line (startup thread writes here too)
    pub status: Arc<Mutex<String>>,

    // master index failed; nothing to browse
    pub fatal: Option<String>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Loading catalog…")));
        let startup = spawn_startup(ctx, &state, status.clone());

        logf!(
            "Init: master={} detail={}",
            state.options.sources.master,
            state.options.sources.detail
        );

        let mut state = state;
        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into();

        Self { state, service: None, startup: Some(startup), status, fatal: None }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn is_loading(&self) -> bool { self.startup.is_some() }

    /// Pick up the service once the startup thread is done.
    fn poll_startup(&mut self) {
        let Some(rx) = &self.startup else { return };
        match rx.try_recv() {
            Ok(Ok(svc)) => {
                let r = svc.report();
                let msg = match &r.acquisition {
                    Some(sum) if r.details == 0 => format!(
                        "Ready: {} entities, still no detail data ({} of {} jobs failed)",
                        r.entities, sum.failed.len(), sum.attempted()
                    ),
                    _ => format!("Ready: {} entities, {} with detail", r.entities, r.details),
                };
                self.status(msg);
                self.service = Some(svc);
                self.startup = None;
            }
            Ok(Err(e)) => {
                loge!("Init: {e}");
                self.status(format!("Error: {e}"));
                self.fatal = Some(e.to_string());
                self.startup = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                loge!("Init: startup thread ended without a result");
                self.fatal = Some(s!("Startup thread ended unexpectedly"));
                self.startup = None;
            }
        }
    }
}

/// The whole startup sequence blocks, so it runs off the UI thread.
fn spawn_startup(ctx: &egui::Context, state: &AppState, status: Arc<Mutex<String>>) -> Receiver<StartupResult> {
    let (tx, rx) = mpsc::channel::<StartupResult>();
    let opts = state.options.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut runner = ProcessJobRunner::from_options(&opts.loader);
        let mut progress = GuiProgress::new(status.clone(), ctx.clone());
        let events = GuiEvents::new(status, ctx.clone());

        let res = CatalogService::start(&opts, &mut runner, Box::new(events), Some(&mut progress));
        let _ = tx.send(res);
        ctx.request_repaint();
    });

    rx
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_startup();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_loading() {
                    ui.spinner();
                }
                ui.label(self.status_text());
            });
        });

        if let Some(err) = &self.fatal {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading("Could not load the catalog");
                ui.label(err.as_str());
            });
            return;
        }
        if self.service.is_none() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| ui.spinner());
            });
            return;
        }

        egui::SidePanel::left("states")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| components::state_panel::draw(ui, self));

        egui::SidePanel::right("detail")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| components::detail_panel::draw(ui, self));

        egui::CentralPanel::default().show(ctx, |ui| {
            components::search_bar::draw(ui, self);
            ui.separator();
            components::action_bar::draw(ui, self);
            ui.separator();
            components::entity_lists::draw(ui, self);
        });
    }
}
