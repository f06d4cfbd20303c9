//! Command implementations for the recipebox CLI

pub mod run;

pub use run::run_run;
