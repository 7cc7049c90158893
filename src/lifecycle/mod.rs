//! Process lifecycle.
//!
//! There is only a startup path: any error after it is fatal and there is no
//! graceful shutdown, drain, or restart. The process ends when the serve
//! loop fails or it is killed externally.

pub mod startup;

pub use startup::run;
