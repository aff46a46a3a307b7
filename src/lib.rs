//! Involute **spur gear pair** profiles, computed from a handful of design numbers and rendered
//! as a scaled engineering drawing.
//!
//! A [`GearProfile`] derives every dimension of a gear (addendum, dedendum, outside, root and
//! base circles, tooth thickness, ...) from its pitch diameter, tooth count and pressure angle.
//! A [`GearRenderer`] samples the involute flanks of each tooth, replicates them around both
//! gears of a [`GearPair`] and emits the result as backend-neutral drawing operations, which
//! the `svg-io` backend writes out as an SVG page in millimetres.
//!
//! ```
//! use geargen::{GearPair, GearRenderer};
//!
//! let pair = GearPair::from_center_distance(100.0, 7, 23, 25.0, 0.0, 0.0).unwrap();
//! let drawing = GearRenderer::default().plot(&pair);
//! assert!(!drawing.ops.is_empty());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: write drawings as SVG using the [`svg`](https://crates.io/crates/svg) crate
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod gear;
pub mod involute;
pub mod style;
pub mod drawing;
pub mod render;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use drawing::{DrawOp, Drawing, DrawingSink};
pub use errors::ValidationError;
pub use gear::{GearPair, GearProfile};
pub use render::{GearRenderer, RenderConfig};
