// extensions/mod.rs
//
// Optional behaviour layered on top of the base pool contract.
// A batch that opts into nothing here renders exactly as specified by its tint.

pub mod easing;

pub use easing::Easing;
