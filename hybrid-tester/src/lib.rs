//! Smoke tests for the hybrid face-analysis service.
//!
//! The tester posts synthetic fixtures to the detection and comparison
//! endpoints, flips the provider configuration and puts it back, and narrates
//! every step on stdout.

pub mod api;
pub mod client;
pub mod console;
pub mod error;
pub mod logging;
pub mod probe;
pub mod report;
pub mod runner;

pub use api::{ConfigUpdate, HybridConfig, Provider, ReportedProvider};
pub use client::{DEFAULT_BASE_URL, HybridClient, Reply};
pub use console::Console;
pub use error::{ProbeError, Result};
pub use logging::init_logging;
pub use probe::SoftPolicy;
pub use report::{Outcome, Probe, ProbeReport, RunReport};
pub use runner::{BANNER, DONE, Settings, run};
