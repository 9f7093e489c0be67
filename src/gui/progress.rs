// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{
    events::ViewEvents,
    model::{DetailRecord, Entity, EntityType},
    progress::Progress,
};

fn set_status(status: &Arc<Mutex<String>>, msg: impl Into<String>) {
    if let Ok(mut s) = status.lock() {
        *s = msg.into();
    }
}

/// Job progress → status line (runs on the startup thread).
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }
    fn show(&self, msg: impl Into<String>) {
        set_status(&self.status, msg);
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.show(format!("{msg} ({}/{})", self.done + 1, self.total));
    }
    fn item_done(&mut self, job: &str) {
        self.done += 1;
        self.show(format!("Finished {job} ({}/{})", self.done, self.total));
    }
    fn item_failed(&mut self, job: &str, _err: &str) {
        self.done += 1;
        self.failed += 1;
        self.show(format!("{job} failed ({}/{}), continuing", self.done, self.total));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.show("Acquisition complete, reloading details…");
        } else {
            self.show(format!("Acquisition complete with {} failed job(s), reloading details…", self.failed));
        }
    }
}

/// Core notifications → status line + repaint requests.
pub struct GuiEvents {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
}

impl GuiEvents {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }
}

impl ViewEvents for GuiEvents {
    fn on_ready(&mut self) {
        set_status(&self.status, "Ready");
        self.ctx.request_repaint();
    }
    fn on_acquisition_starting(&mut self) {
        set_status(&self.status, "No local detail data, starting live acquisition…");
        self.ctx.request_repaint();
    }
    fn on_visible_list_changed(&mut self, _kind: EntityType) {
        self.ctx.request_repaint();
    }
    fn on_detail_resolved(&mut self, id: &str, entity: &Entity, detail: Option<&DetailRecord>) {
        logd!(
            "UI: Detail {id} ({}) known={}",
            entity.name,
            detail.map(|d| d.known_count()).unwrap_or(0)
        );
    }
}
