//! Raster image reference

use crate::types::Vector3;

/// A placed raster image
///
/// The image file itself is described by an `IMAGEDEF` object; the two are
/// tied together through [`RasterImage::definition_handle`].
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    /// Hex handle of the image definition (340)
    pub definition_handle: String,
    /// Insertion point in WCS (10/20/30)
    pub insert_point: Vector3,
    /// U-vector of a single pixel (11/21/31)
    pub u_vector: Vector3,
    /// V-vector of a single pixel (12/22/32)
    pub v_vector: Vector3,
    /// Image width in pixels (13)
    pub width: f64,
    /// Image height in pixels (23)
    pub height: f64,
    /// Brightness 0-100 (281)
    pub brightness: i32,
    /// Contrast 0-100 (282)
    pub contrast: i32,
    /// Fade 0-100 (283)
    pub fade: i32,
}

impl RasterImage {
    pub fn new(definition_handle: impl Into<String>, insert_point: Vector3, width: f64, height: f64) -> Self {
        RasterImage {
            definition_handle: definition_handle.into(),
            insert_point,
            u_vector: Vector3::UNIT_X,
            v_vector: Vector3::new(0.0, 1.0, 0.0),
            width,
            height,
            brightness: 50,
            contrast: 50,
            fade: 0,
        }
    }

    /// Size of the image in drawing units
    pub fn world_size(&self) -> (f64, f64) {
        let u = (self.u_vector.x.powi(2) + self.u_vector.y.powi(2) + self.u_vector.z.powi(2)).sqrt();
        let v = (self.v_vector.x.powi(2) + self.v_vector.y.powi(2) + self.v_vector.z.powi(2)).sqrt();
        (u * self.width, v * self.height)
    }
}

impl Default for RasterImage {
    fn default() -> Self {
        RasterImage::new("", Vector3::ZERO, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let img = RasterImage::default();
        assert_eq!(img.brightness, 50);
        assert_eq!(img.contrast, 50);
        assert_eq!(img.fade, 0);
    }

    #[test]
    fn test_world_size() {
        let mut img = RasterImage::new("2f", Vector3::ZERO, 640.0, 480.0);
        img.u_vector = Vector3::new(0.5, 0.0, 0.0);
        img.v_vector = Vector3::new(0.0, 0.5, 0.0);
        assert_eq!(img.world_size(), (320.0, 240.0));
    }
}
