//! The library code for the `dlpage` download-page generator. The
//! architecture can be generally broken down into two distinct steps:
//!
//! 1. Collecting release state from the release directory: per-platform
//!    artifacts ([`crate::artifact`]) and their checksum sidecars
//!    ([`crate::checksum`]).
//! 2. Rendering the collected state into the output page: platform cards
//!    and the checksum listing ([`crate::render`]) substituted into the
//!    page template ([`crate::template`]), orchestrated by
//!    [`crate::build`].
//!
//! Everything user-visible on the page is routed through a
//! [`crate::config::Locale`], so the default English edition and the
//! Chinese edition (written to a `zh` subdirectory) are the same
//! generator with different microcopy. Per-file problems (a file that
//! cannot be stat'ed, a checksum sidecar that cannot be parsed, a missing
//! installer script) degrade to sentinels or skipped entries with a
//! warning; only an unreadable template aborts a build.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod arch;
pub mod artifact;
pub mod build;
pub mod checksum;
pub mod config;
pub mod render;
pub mod scripts;
pub mod size;
pub mod template;
