// src/service.rs
//
// Composition root. Owns the session: master index, detail cache, filter
// state, and the view's event sink. The startup sequence is strictly ordered:
//
//   1. master index  (fatal on failure; nothing is signalled)
//   2. detail cache  (best-effort)
//   3. if empty: signal acquisition, run loader jobs, reload the cache once
//   4. signal ready
//
// After startup the index and cache are never written again; only the filter
// changes, through the mutation methods below.

use crate::{
    config::options::AppOptions,
    detail::DetailCache,
    error::LoadError,
    events::ViewEvents,
    filter::{FilterEngine, FilterScope},
    index::CatalogIndex,
    loader::{JobRunner, LoaderOrchestrator, RunSummary},
    model::{DetailRecord, Entity, EntityType},
    progress::Progress,
};

/// What startup found and did, for status lines and logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartupReport {
    pub entities: usize,
    pub details_initial: usize,
    pub details: usize,
    /// Present when live acquisition ran.
    pub acquisition: Option<RunSummary>,
}

/// An entity together with its detail record, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved<'a> {
    pub entity: &'a Entity,
    pub detail: Option<&'a DetailRecord>,
}

pub struct CatalogService {
    index: CatalogIndex,
    details: DetailCache,
    filter: FilterEngine,
    events: Box<dyn ViewEvents + Send>,
    report: StartupReport,
}

impl CatalogService {
    /// Run the full startup sequence. Only a master-index failure is an error.
    pub fn start(
        opts: &AppOptions,
        runner: &mut dyn JobRunner,
        mut events: Box<dyn ViewEvents + Send>,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Self, LoadError> {
        logf!("Startup: Master index from {}", opts.sources.master);
        let index = CatalogIndex::load(&opts.sources.master).inspect_err(|e| {
            loge!("Startup: Master index failed: {e}");
        })?;

        let mut details = DetailCache::load(&opts.sources.detail);
        let details_initial = details.len();
        let mut acquisition = None;

        if details.is_populated() {
            logf!("Startup: Detail cache populated ({details_initial} records)");
        } else if !opts.loader.enabled {
            logw!("Startup: Detail cache empty and live acquisition disabled");
        } else {
            logf!("Startup: Detail cache empty, starting live acquisition");
            events.on_acquisition_starting();

            let jobs = opts.loader.job_names();
            let summary = LoaderOrchestrator::new(runner).run_all(&jobs, progress);

            details = DetailCache::load(&opts.sources.detail);
            if details.is_populated() {
                logf!("Startup: Reload after acquisition found {} records", details.len());
            } else {
                logw!("Startup: Detail cache still empty after acquisition");
            }
            acquisition = Some(summary);
        }

        let report = StartupReport {
            entities: index.len(),
            details_initial,
            details: details.len(),
            acquisition,
        };

        Ok(Self::assemble(index, details, events, report))
    }

    /// Build a ready service from already-loaded parts (no I/O).
    pub fn from_parts(
        index: CatalogIndex,
        details: DetailCache,
        events: Box<dyn ViewEvents + Send>,
    ) -> Self {
        let report = StartupReport {
            entities: index.len(),
            details_initial: details.len(),
            details: details.len(),
            acquisition: None,
        };
        Self::assemble(index, details, events, report)
    }

    fn assemble(
        index: CatalogIndex,
        details: DetailCache,
        events: Box<dyn ViewEvents + Send>,
        report: StartupReport,
    ) -> Self {
        let mut svc = Self { index, details, filter: FilterEngine::new(), events, report };
        logf!(
            "Startup: Ready entities={} details={}",
            svc.report.entities,
            svc.report.details
        );
        svc.events.on_ready();
        svc
    }

    /* ---------- queries ---------- */

    pub fn index(&self) -> &CatalogIndex { &self.index }
    pub fn details(&self) -> &DetailCache { &self.details }
    pub fn filter(&self) -> &FilterEngine { &self.filter }
    pub fn report(&self) -> &StartupReport { &self.report }

    /// Visible entities of one category, in source order.
    pub fn list_visible(&self, kind: EntityType) -> Vec<&Entity> {
        self.index
            .by_type(kind)
            .filter(|e| self.filter.is_visible(e))
            .collect()
    }

    /// Entity plus detail, without notifying the view.
    /// A detail record of the wrong category counts as no detail.
    pub fn lookup(&self, id: &str) -> Option<Resolved<'_>> {
        let entity = self.index.get(id)?;
        let detail = self.details.lookup(id).filter(|d| d.kind() == entity.kind);
        Some(Resolved { entity, detail })
    }

    /// User selected an entity. None only for ids not in the master index.
    pub fn get_detail(&mut self, id: &str) -> Option<Resolved<'_>> {
        let Some(entity) = self.index.get(id) else {
            logd!("Detail: Unknown id {id}");
            return None;
        };

        let detail = match self.details.lookup(id) {
            Some(d) if d.kind() == entity.kind => Some(d),
            Some(d) => {
                logw!("Detail: {id} is {} in master but {} in detail, ignoring", entity.kind, d.kind());
                None
            }
            None => None,
        };

        self.events.on_detail_resolved(id, entity, detail);
        Some(Resolved { entity, detail })
    }

    /* ---------- filter mutations ---------- */

    pub fn set_search(&mut self, text: &str) {
        self.filter.set_search(text);
        logd!("Filter: search={:?} scope={:?}", self.filter.search_text(), self.filter.scope());
        self.notify_lists();
    }

    /// Scope counties to the state with this id. False if the id is not a state.
    pub fn select_scope(&mut self, state_id: &str) -> bool {
        let Some(state) = self.index.get(state_id) else {
            logd!("Filter: Unknown scope id {state_id}");
            return false;
        };
        if !self.filter.select_scope(state) {
            return false;
        }
        logd!("Filter: scope={:?}", self.filter.scope());
        self.notify_lists();
        true
    }

    /// Scope by exact state name (CLI). False if no such state is indexed.
    pub fn select_scope_by_name(&mut self, name: &str) -> bool {
        match self.index.find_state(name).map(|e| e.id.clone()) {
            Some(id) => self.select_scope(&id),
            None => false,
        }
    }

    pub fn clear_scope(&mut self) {
        self.filter.clear_scope();
        self.notify_lists();
    }

    pub fn scope(&self) -> Option<&FilterScope> { self.filter.scope() }

    fn notify_lists(&mut self) {
        for kind in EntityType::ALL {
            self.events.on_visible_list_changed(kind);
        }
    }
}
