//! Pagesmith CLI: site builder, watcher, and inspection commands on top of
//! `pagesmith-core`.

pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod pages;
pub mod site;
pub mod telemetry;
pub mod watch;
