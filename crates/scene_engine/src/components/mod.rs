//! Built-in components
//!
//! Plain data holders consumed by the renderer and the update loop, plus the
//! behaviour-script hook trait.

pub mod sprite;
pub mod animator;
pub mod behaviour;

pub use sprite::{Sprite, SpriteFlip};
pub use animator::Animator;
pub use behaviour::BehaviourScript;
