use serde::{Deserialize, Serialize};

/// Opaque handle to a pre-loaded image owned by the host.
/// The particle pool copies the handle and never loads or frees the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ImageId(pub u32);
