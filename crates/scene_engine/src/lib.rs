//! # Scene Engine
//!
//! The object model of a small real-time scene framework: game objects that
//! own a heterogeneous set of components, a registry that owns the objects,
//! and parent/child queries over them.
//!
//! ## Features
//!
//! - **Typed Components**: Attach any `'static` type and query it back by type
//! - **Registry**: Find objects by name, tag, type or owned component
//! - **Hierarchy**: Weak parent handles with world-active propagation
//! - **Object Variants**: UI objects (buttons, text) and cameras
//! - **Configuration**: TOML/RON registry settings
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! struct Health(u32);
//! scene_engine::impl_component!(Health);
//!
//! fn main() -> Result<(), SceneError> {
//!     let mut registry = Registry::new();
//!     registry.insert(GameObject::new("player").with_tag("hero").with_component(Health(100)))?;
//!     let sword = registry.spawn_child(GameObject::new("sword"), "player")?;
//!
//!     assert_eq!(registry.get_component_in_parent::<Health>(sword).map(|h| h.0), Some(100));
//!     assert!(registry.find_with_tag("hero").is_some());
//!     Ok(())
//! }
//! ```
//!
//! The registry is single-threaded and performs no locking. Wrap it in a
//! mutex if several threads must mutate one scene.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod components;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        components::{Animator, BehaviourScript, Sprite, SpriteFlip},
        config::{Config, ConfigError, SceneConfig},
        foundation::{
            math::{Color, Vec2},
            time::Time,
        },
        scene::{
            Alignment, Button, Camera, Component, ComponentId, GameObject, GameObjectId,
            ObjectType, Registry, SceneError, SceneObject, SceneResult, Text, UiObject,
        },
    };
}
