// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod error;
pub mod model;
pub mod source;

pub mod abbr;
pub mod detail;
pub mod filter;
pub mod index;
pub mod loader;

pub mod events;
pub mod progress;
pub mod service;

pub mod csv;
pub mod file;

pub mod cli;
pub mod gui;

pub use error::{JobError, LoadError};
pub use model::{DetailRecord, Entity, EntityType};
pub use service::CatalogService;
