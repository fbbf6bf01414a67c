//! Parameter-sweep harness for the grid ride-hailing simulation.
//!
//! A sweep fixes every engine parameter except one — fleet size or rider
//! spawn probability — runs the engine once (or several averaged
//! repetitions) per swept value, and reports mean wait time, mean ride time
//! and dropped-rider count per value.
//!
//! # Quick start
//!
//! ```no_run
//! use sim_experiments::{run_sweep, SweepPlan, SweepVariable};
//!
//! let plan = SweepPlan::new(SweepVariable::DriverCount, vec![5.0, 10.0, 20.0])
//!     .with_iterations(500)
//!     .with_seed(42);
//! let results = run_sweep(&plan).expect("valid plan");
//! for point in &results {
//!     println!("{}: {:?}", point.swept_value, point.mean_wait_time);
//! }
//! ```
//!
//! Validation happens before any simulation starts: a driver sweep rejects
//! non-integral values and a spawn-probability sweep rejects values outside
//! (0, 1).

pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;

pub use export::{export_to_csv, export_to_json, ExportError};
pub use metrics::{MetricsError, RunMetrics, SweepPointResult};
pub use parameters::{SweepError, SweepPlan, SweepVariable};
pub use runner::{run_single_simulation, run_sweep, run_sweep_with_progress};
