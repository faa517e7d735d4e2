//! Drawing backend contract for particle rendering.
//!
//! The pool only needs one primitive: draw an image at a position with a
//! rotation and a colour tint. Native backends (SDL, wgpu, Canvas2D via the
//! web bridge) implement [`DrawSurface`] for whatever image handle they use.

use glam::Vec2;
use thiserror::Error;

use crate::components::tint::Tint;

/// Failure reported by a drawing backend.
///
/// These indicate host misuse (a stale image, an undersized surface), so the
/// pool hands them straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The image handle does not refer to a live resource.
    #[error("invalid image handle: {0}")]
    InvalidImage(u32),

    /// The surface cannot record any more draws this frame.
    #[error("draw surface full (capacity {capacity})")]
    SurfaceFull { capacity: usize },

    /// Backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// A target the particle pool can draw onto.
///
/// # Example Implementation
///
/// ```ignore
/// struct SdlSurface<'a> {
///     canvas: &'a mut sdl2::render::WindowCanvas,
///     textures: &'a mut [sdl2::render::Texture<'a>],
/// }
///
/// impl DrawSurface<ImageId> for SdlSurface<'_> {
///     fn draw_image(&mut self, image: ImageId, position: Vec2, rotation: f32, tint: Tint)
///         -> Result<(), DrawError>
///     {
///         let tex = self.textures.get_mut(image.0 as usize)
///             .ok_or(DrawError::InvalidImage(image.0))?;
///         tex.set_color_mod(tint.r, tint.g, tint.b);
///         tex.set_alpha_mod(tint.a);
///         // copy_ex(...).map_err(DrawError::Backend)
///         Ok(())
///     }
/// }
/// ```
pub trait DrawSurface<I> {
    /// Draw `image` centred at `position`, rotated by `rotation` radians,
    /// modulated by `tint`.
    fn draw_image(&mut self, image: I, position: Vec2, rotation: f32, tint: Tint) -> Result<(), DrawError>;
}

impl<I, S: DrawSurface<I> + ?Sized> DrawSurface<I> for &mut S {
    fn draw_image(&mut self, image: I, position: Vec2, rotation: f32, tint: Tint) -> Result<(), DrawError> {
        (**self).draw_image(image, position, rotation, tint)
    }
}
