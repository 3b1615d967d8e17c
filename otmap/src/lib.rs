//! otmap - OTBM map decoding and house footprint rendering
//!
//! This library reads OpenTibia binary maps (`.otbm`) into plain Rust values
//! and renders house floor plans as images.
//!
//! The pipeline has three layers:
//!
//! - [`node`] - Splits the escaped byte stream into a tree of nodes
//! - [`otbm`] - Walks the tree and builds a [`Map`] of tiles, towns and houses
//! - [`render`] - Rasterises each house's tiles into one grid per floor
//!
//! # Example
//!
//! ```no_run
//! use otmap::render::{write_house_footprints, PngFootprintSink};
//! use otmap::{DecoderConfig, RenderConfig};
//!
//! let config = DecoderConfig::new().with_items(false);
//! let map = otmap::decode_file_with("world.otbm", &config)?;
//!
//! let render_config = RenderConfig::default();
//! let sink = PngFootprintSink::new("minimaps");
//! for house in map.houses() {
//!     write_house_footprints(house, &sink, &render_config);
//! }
//! # Ok::<(), otmap::OtbmError>(())
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod node;
pub mod otbm;
pub mod render;

pub use config::{DecoderConfig, RenderConfig};
pub use error::{AttributeScope, OtbmError, OtbmResult};
pub use model::Map;
pub use otbm::{decode, decode_bytes, decode_file, decode_file_with, decode_with};
