//! Image utilities
//! Keeps the physics engine from having to touch bevy's render assets until the very end

use bevy::render::{
    color::Color,
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::Image,
};

/// Representing a raw RGBA image, one pixel per cell
/// Game engine agnostic, full ownership, no lifetimes, not a component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RawImage {
    /// Builds an image from a row-major iterator of colors
    pub fn from_colors(width: usize, height: usize, colors: impl Iterator<Item = Color>) -> Self {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for color in colors {
            pixels.extend_from_slice(&color.as_rgba_u8());
        }
        debug_assert_eq!(pixels.len(), width * height * 4);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// The RGBA bytes of one pixel
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[start..start + 4]);
        Some(out)
    }

    /// Convert to a bevy image
    /// Load this into an asset server to get a texture like the following
    /// ```ignore
    /// let image: RawImage = RawImage::default();
    /// let image_handle: Handle<Image> = images.add(image.to_bevy_image());
    /// ```
    pub fn to_bevy_image(self) -> Image {
        let size = Extent3d {
            width: self.width as u32,
            height: self.height as u32,
            depth_or_array_layers: 1,
        };

        Image::new(
            size,
            TextureDimension::D2,
            self.pixels,
            TextureFormat::Rgba8UnormSrgb,
        )
    }
}
