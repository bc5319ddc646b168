//! Fixed defaults for clustering and zone synthesis (internal).
//!
//! Policy
//! - Defaults are constants; callers that need other values go through the
//!   `*Cfg` structs rather than editing these.

/// Upper bound on Lloyd refinement passes.
pub(crate) const MAX_ITERATIONS: usize = 100;
/// Relative outward push applied to every hull vertex.
pub(crate) const INFLATION: f64 = 0.01;
/// Smallest cluster that still gets a zone polygon.
pub(crate) const MIN_ZONE_MEMBERS: usize = 3;
