//! Scene object model
//!
//! Game objects, their components, the registry that owns them and the
//! parent/child queries built on top.

pub mod component;
pub mod game_object;
pub mod registry;
pub mod hierarchy;
pub mod objects;

#[cfg(test)]
mod tests;

pub use component::Component;
pub use game_object::{GameObject, ObjectType, SceneObject};
pub use registry::{Registry, SceneError, SceneResult};
pub use objects::{Alignment, Button, Camera, ClickCallback, Text, UiObject};
pub use crate::foundation::collections::{ComponentId, GameObjectId};
