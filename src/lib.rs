//! chromap
//!
//! A lightweight Rust library for rendering graph-colouring solver output as
//! a choropleth map of a country's administrative regions. Pairs with the
//! `chromap` CLI.
//!
//! ### Features
//! - Join a solver's region-code → label solution to real GeoJSON boundaries
//! - Deterministic colour encoding per symbolic label, grey for unassigned
//! - Per-region annotations at the area-weighted centroid, plus a legend
//! - SVG/PNG output via plotters
//!
//! ### Example
//! ```no_run
//! use chromap::{datasets, reconcile, source, storage, viz};
//!
//! let (dataset, directory) = datasets::australia();
//! let registry = datasets::default_palette()?;
//! let solution = storage::load_solution("solution.json")?;
//! let regions = source::Client::default().fetch_regions(&dataset)?;
//! let records = reconcile::reconcile(&regions, &directory, &registry, &solution)?;
//! viz::render_map(&records, &registry, &viz::MapStyle::default(), "map.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod datasets;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod registry;
pub mod source;
pub mod storage;
pub mod viz;

pub use error::PipelineError;
pub use models::{RegionRecord, RenderRecord, Solution};
pub use registry::{LabelRegistry, RegionDirectory};
pub use source::{Client, DatasetSpec};
