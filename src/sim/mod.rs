//! Stadium simulation core
//!
//! Everything here is pure and deterministic: the shape parameter and the
//! tolerance constants live in an immutable `Stadium` value passed by
//! reference, so trajectories for different seeds can run concurrently
//! without coordination.

pub mod collision;
pub mod convert;
pub mod image;
pub mod stadium;
pub mod state;
pub mod trajectory;

pub use collision::reflect;
pub use image::ImageSet;
pub use stadium::{Region, Stadium};
pub use state::{BoundaryState, ParametricPoint};
