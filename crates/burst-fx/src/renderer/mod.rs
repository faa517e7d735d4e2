pub mod instance;
pub mod traits;

pub use instance::{DrawList, SpriteInstance};
pub use traits::{DrawError, DrawSurface};
