//! Basic value types shared by the entity model and the reprojection core

pub mod color;
pub mod handle;
pub mod vector;

pub use color::Color;
pub use handle::Handle;
pub use vector::{Vector2, Vector3};
