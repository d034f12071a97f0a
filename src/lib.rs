//! The batch cleaner of osu! beatmap archives.
//!
//! It reads one zip holding many `.osz` beatmap archives and writes a stripped-down copy of each: the `.osu` descriptor loses identifying metadata and visual/gameplay sections, the audio track is validated and renamed to `audio.<ext>`, and the background image is optionally kept as `background.<ext>`.
//!
//! - [`descriptor`] provides the single-pass rewriter of the `.osu` text, the heart of the crate.
//! - [`asset`] sniffs and classifies files of a beatmap archive.
//! - [`audio`] validates audio tracks against the length and bitrate policy.
//! - [`background`] matches the background declaration with an image file.
//! - [`archive`] unpacks and writes zip archives.
//! - [`pipeline`] drives the whole batch.
//!
//! In detail, our policies are:
//!
//! - Never fail on a malformed descriptor. Unknown lines are kept as is.
//! - Faults of a single beatmap are reported, never abort the batch.
//! - Only archive I/O failures abort the batch.
//!
//! # Example
//!
//! ```no_run
//! use osz_cleaner::{config::Config, pipeline::clean_batch};
//!
//! let config = Config {
//!     background: true,
//!     ..Config::default()
//! };
//! let report = clean_batch(config)?;
//! println!("{} maps, {} faults", report.maps.len(), report.fault_count());
//! # Ok::<(), osz_cleaner::error::CleanError>(())
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod archive;
pub mod asset;
pub mod audio;
pub mod background;
pub mod config;
pub mod descriptor;
#[cfg(feature = "diagnostics")]
#[cfg_attr(docsrs, doc(cfg(feature = "diagnostics")))]
pub mod diagnostics;
pub mod error;
pub mod mixin;
pub mod pipeline;

pub use self::{
    config::Config,
    descriptor::{RewriteOptions, RewriteOutput, rewrite_descriptor},
    error::{CleanError, MapFault},
    pipeline::{BatchReport, Cleaner, MapReport, clean_batch},
};
