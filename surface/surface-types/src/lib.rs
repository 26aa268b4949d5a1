//! Volume primitives for segmentation surface metrics.
//!
//! This crate holds the plain data types shared by the surface-distance
//! engine and the evaluation layer:
//!
//! - [`Volume`] - Dense row-major 3D array indexed by `[x0, x1, x2]`
//! - [`Spacing`] - Validated physical voxel size in millimetres
//! - [`VoxelBounds`] - Inclusive axis-aligned box in voxel index space
//!
//! # Layer 0 Crate
//!
//! No file I/O and no logging. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Example
//!
//! ```
//! use surface_types::{Spacing, Volume, VoxelBounds};
//!
//! let mut mask = Volume::filled([8, 8, 8], false).unwrap();
//! for i in 2..5 {
//!     mask[[i, 3, 3]] = true;
//! }
//!
//! let bounds = VoxelBounds::of_mask(&mask).unwrap();
//! assert_eq!(bounds.extent(), [3, 1, 1]);
//!
//! let spacing = Spacing::new(2.0, 1.0, 1.0).unwrap();
//! let volume_mm3 = mask.count_true() as f64 * spacing.voxel_volume();
//! assert!((volume_mm3 - 6.0).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod error;
mod spacing;
mod volume;

pub use bounds::VoxelBounds;
pub use error::{VolumeError, VolumeResult};
pub use spacing::Spacing;
pub use volume::Volume;

// Re-export nalgebra types for convenience
pub use nalgebra::Vector3;
