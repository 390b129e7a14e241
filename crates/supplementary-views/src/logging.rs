//! Tracing targets used by this crate.
//!
//! Factories do not log on the configuration path. Construction, the
//! type-erased host boundary, and style loading emit events under the
//! targets below, so hosts can filter them with the usual `tracing`
//! directives:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("supplementary_views::erased=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Crate-wide target.
    pub const CRATE: &str = "supplementary_views";
    /// Factory construction.
    pub const FACTORY: &str = "supplementary_views::factory";
    /// Type-erased host boundary.
    pub const ERASED: &str = "supplementary_views::erased";
    /// Style configuration loading.
    pub const STYLE: &str = "supplementary_views::style";
}
