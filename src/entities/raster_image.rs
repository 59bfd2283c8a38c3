//! RasterImage entity

use crate::entities::{Entity, EntityCommon};
use crate::types::{Handle, Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Image display flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ImageDisplayFlags: i16 {
        /// Show image.
        const SHOW_IMAGE = 1;
        /// Show image when not aligned with screen.
        const SHOW_NOT_ALIGNED = 2;
        /// Use clipping boundary.
        const USE_CLIPPING_BOUNDARY = 4;
        /// Transparency is on.
        const TRANSPARENCY_ON = 8;
    }
}

/// A raster image placed in the drawing.
///
/// `u_vector` and `v_vector` are the world-space extents of one pixel along
/// the image axes. Clip boundary vertices are in pixel space and are not
/// world positions.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    /// Common entity data.
    pub common: EntityCommon,
    /// Lower-left corner of the image.
    pub insertion_point: Vector3,
    /// Pixel U direction.
    pub u_vector: Vector3,
    /// Pixel V direction.
    pub v_vector: Vector3,
    /// Image size in pixels.
    pub size: Vector2,
    /// Display flags.
    pub flags: ImageDisplayFlags,
    /// Clip boundary vertices, in pixel space.
    pub clip_vertices: Vec<Vector2>,
    /// Path of the image file.
    pub file_path: String,
}

impl RasterImage {
    /// Create an image of `width` × `height` pixels at `insertion_point`,
    /// one drawing unit per pixel.
    pub fn new(
        file_path: impl Into<String>,
        insertion_point: Vector3,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            common: EntityCommon::new(),
            insertion_point,
            u_vector: Vector3::UNIT_X,
            v_vector: Vector3::UNIT_Y,
            size: Vector2::new(width, height),
            flags: ImageDisplayFlags::SHOW_IMAGE | ImageDisplayFlags::SHOW_NOT_ALIGNED,
            clip_vertices: Vec::new(),
            file_path: file_path.into(),
        }
    }
}

impl Entity for RasterImage {
    fn handle(&self) -> Handle {
        self.common.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.common.handle = handle;
    }

    fn layer(&self) -> &str {
        &self.common.layer
    }

    fn entity_type(&self) -> &'static str {
        "IMAGE"
    }
}
