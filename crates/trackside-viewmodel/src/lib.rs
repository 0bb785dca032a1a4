//! Pure transforms from raw server rows into chart-ready view-models.
//!
//! Everything in this crate is deterministic given identical input arrays,
//! including input order: series order and palette colors are derived from
//! the order rows arrive in, which is what keeps repeated renders of the
//! same data visually stable across polling refreshes.
//!
//! No I/O happens here. The backend fetches, this crate shapes, the
//! frontend renders.

pub mod color;
pub mod comparison;
pub mod feed;
pub mod series;
pub mod stats;
