use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::traits::{DrawError, DrawSurface};
use crate::components::image::ImageId;
use crate::components::tint::Tint;

/// One recorded particle draw, laid out for a flat GPU/JS instance buffer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Image handle, widened to f32.
    pub image: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl SpriteInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Recording draw surface: collects a frame's draws into a pre-allocated buffer.
///
/// Draws naming an unregistered image, or exceeding `max_instances`, fail
/// instead of growing or silently truncating the buffer.
pub struct DrawList {
    instances: Vec<SpriteInstance>,
    max_instances: usize,
    image_count: u32,
}

impl DrawList {
    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            max_instances,
            image_count: 0,
        }
    }

    /// Declare how many images the host has loaded. Valid ids are `0..count`.
    pub fn set_image_count(&mut self, count: u32) {
        self.image_count = count;
    }

    pub fn image_count(&self) -> u32 {
        self.image_count
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn max_instances(&self) -> usize {
        self.max_instances
    }

    /// Flat float view of the recorded instances.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl DrawSurface<ImageId> for DrawList {
    fn draw_image(&mut self, image: ImageId, position: Vec2, rotation: f32, tint: Tint) -> Result<(), DrawError> {
        if image.0 >= self.image_count {
            return Err(DrawError::InvalidImage(image.0));
        }
        if self.instances.len() >= self.max_instances {
            return Err(DrawError::SurfaceFull { capacity: self.max_instances });
        }
        let [r, g, b, a] = tint.to_f32();
        self.instances.push(SpriteInstance {
            x: position.x,
            y: position.y,
            rotation,
            image: image.0 as f32,
            r,
            g,
            b,
            a,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), SpriteInstance::STRIDE_BYTES);
    }

    #[test]
    fn records_draws_in_order() {
        let mut list = DrawList::with_capacity(4);
        list.set_image_count(2);
        list.draw_image(ImageId(1), Vec2::new(3.0, 4.0), 0.5, Tint::WHITE).unwrap();
        list.draw_image(ImageId(0), Vec2::new(5.0, 6.0), 0.0, Tint::rgba(255, 0, 0, 0)).unwrap();

        assert_eq!(list.instance_count(), 2);
        let first = list.instances()[0];
        assert_eq!(first.position(), Vec2::new(3.0, 4.0));
        assert_eq!(first.image, 1.0);
        assert_eq!(list.as_floats().len(), 2 * SpriteInstance::FLOATS);
        assert_eq!(&list.as_floats()[12..16], &[1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn unknown_image_is_rejected() {
        let mut list = DrawList::with_capacity(4);
        list.set_image_count(1);
        let err = list.draw_image(ImageId(1), Vec2::ZERO, 0.0, Tint::WHITE).unwrap_err();
        assert_eq!(err, DrawError::InvalidImage(1));
        assert_eq!(list.instance_count(), 0);
    }

    #[test]
    fn full_list_is_rejected() {
        let mut list = DrawList::with_capacity(1);
        list.set_image_count(1);
        list.draw_image(ImageId(0), Vec2::ZERO, 0.0, Tint::WHITE).unwrap();
        let err = list.draw_image(ImageId(0), Vec2::ZERO, 0.0, Tint::WHITE).unwrap_err();
        assert_eq!(err, DrawError::SurfaceFull { capacity: 1 });

        list.clear();
        assert_eq!(list.instance_count(), 0);
    }
}
