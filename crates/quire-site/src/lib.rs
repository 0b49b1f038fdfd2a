//! Loaded Quire site: configuration, content and navigation together.
//!
//! This crate provides:
//! - [`SiteContext`]: configuration plus the scanned document set, with the
//!   navigation lookups the renderer needs
//! - [`LinkReport`]: result of checking every navigation link against content
//! - [`EngineConfig`]: the resolved configuration in the engine's JSON shape
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use quire_site::SiteContext;
//!
//! let site = SiteContext::open(None, None)?;
//!
//! let report = site.check_links();
//! for error in &report.errors {
//!     eprintln!("{error}");
//! }
//!
//! let sidebar = site.resolve_sidebar("/design/balancing", "root");
//! println!("{} sidebar sections", sidebar.len());
//! # Ok(())
//! # }
//! ```

mod context;
mod export;

pub use context::{LinkReport, SiteContext, SiteError};
pub use export::EngineConfig;
