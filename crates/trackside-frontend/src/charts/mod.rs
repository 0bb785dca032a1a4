//! Chart construction and lifecycle management.
//!
//! `spec` maps view-models onto the renderer-neutral series/axis structure,
//! `registry` owns the one-live-instance-per-surface bookkeeping, and
//! `console` is the built-in headless rendering collaborator.

pub mod console;
pub mod registry;
pub mod spec;

pub use registry::{ChartBackend, ChartInstance, ChartRenderer, RenderError};
pub use spec::{ChartKind, ChartSpec, Dataset};
