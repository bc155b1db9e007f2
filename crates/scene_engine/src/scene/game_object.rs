//! Game object implementation
//!
//! A [`GameObject`] carries identity (name, tag, layer), a local active flag,
//! an ordered set of components and an optional weak parent handle. The
//! object variants in [`objects`](super::objects) embed a `GameObject` and
//! are stored in the registry behind the [`SceneObject`] trait.

use std::any::Any;
use std::fmt;
use std::ptr;

use super::component::{Component, ComponentSlot};
use super::objects::UiObject;
use super::registry::Registry;
use crate::components::BehaviourScript;
use crate::foundation::collections::{ComponentId, GameObjectId};

/// Any object which can be placed in a scene
pub struct GameObject {
    name: String,
    tag: String,
    layer: i32,
    active: bool,
    id: Option<u32>,
    handle: Option<GameObjectId>,
    components: Vec<ComponentSlot>,
    parent: Option<GameObjectId>,
}

impl GameObject {
    /// Create an active, untagged object on layer 0
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: String::new(),
            layer: 0,
            active: true,
            id: None,
            handle: None,
            components: Vec::new(),
            parent: None,
        }
    }

    /// Set the tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the local active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the layer
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Attach a component
    pub fn with_component<C: Component>(mut self, component: C) -> Self {
        self.add_component(component);
        self
    }

    /// Attach a set of already boxed components, keeping their order
    pub fn with_components(mut self, components: impl IntoIterator<Item = Box<dyn Component>>) -> Self {
        for component in components {
            self.add_boxed_component(component);
        }
        self
    }

    /// Set the parent handle directly
    pub fn with_parent(mut self, parent: Option<GameObjectId>) -> Self {
        self.parent = parent;
        self
    }

    /// Resolve the parent by name against the registry, right now
    ///
    /// A name that matches nothing leaves the object without a parent.
    pub fn with_parent_named(mut self, registry: &Registry, parent_name: &str) -> Self {
        self.parent = registry.resolve_parent(parent_name, &self.name);
        self
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set the tag
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Get the layer
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Set the layer
    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    /// Whether this object itself is active, ignoring its parents
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate or deactivate this object; children keep their own flags
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Registration serial, assigned in insertion order and never reused
    ///
    /// `None` until the object has been inserted. A destroyed object keeps its
    /// serial so it cannot be registered a second time.
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// Registry handle, present only while the object is registered
    pub fn handle(&self) -> Option<GameObjectId> {
        self.handle
    }

    /// Whether the object currently lives in a registry
    pub fn is_registered(&self) -> bool {
        self.handle.is_some()
    }

    /// Stored parent handle; may be stale if the parent was destroyed
    pub fn parent(&self) -> Option<GameObjectId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<GameObjectId>) {
        self.parent = parent;
    }

    pub(crate) fn mark_registered(&mut self, handle: GameObjectId, id: u32) {
        self.handle = Some(handle);
        self.id = Some(id);
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.handle = None;
    }

    /// Attach a component, transferring ownership to this object
    ///
    /// Several components of the same type may be attached.
    pub fn add_component<C: Component>(&mut self, component: C) -> ComponentId {
        self.add_boxed_component(Box::new(component))
    }

    /// Attach an already boxed component
    pub fn add_boxed_component(&mut self, component: Box<dyn Component>) -> ComponentId {
        let slot = ComponentSlot::new(component);
        let id = slot.id;
        self.components.push(slot);
        id
    }

    /// Get the first component of type `C`
    pub fn get_component<C: Component>(&self) -> Option<&C> {
        self.components.iter().find_map(|slot| slot.downcast::<C>())
    }

    /// Get the first component of type `C` mutably
    pub fn get_component_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.components.iter_mut().find_map(|slot| slot.downcast_mut::<C>())
    }

    /// Get the first component of type `C` together with its id
    pub fn get_component_with_id<C: Component>(&self) -> Option<(ComponentId, &C)> {
        self.components
            .iter()
            .find_map(|slot| slot.downcast::<C>().map(|component| (slot.id, component)))
    }

    /// Get all components of type `C` in attachment order
    pub fn get_components<C: Component>(&self) -> Vec<&C> {
        self.components.iter().filter_map(|slot| slot.downcast::<C>()).collect()
    }

    /// Get all components of type `C` mutably, in attachment order
    pub fn get_components_mut<C: Component>(&mut self) -> Vec<&mut C> {
        self.components.iter_mut().filter_map(|slot| slot.downcast_mut::<C>()).collect()
    }

    /// Get a component by id, whatever its type
    pub fn component(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &*slot.component)
    }

    /// Whether a component with this id is attached
    pub fn has_component(&self, id: ComponentId) -> bool {
        self.components.iter().any(|slot| slot.id == id)
    }

    /// Ids of all attached components in attachment order
    pub fn component_ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.components.iter().map(|slot| slot.id)
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Detach a component by id, handing it back to the caller
    pub fn remove_component(&mut self, id: ComponentId) -> Option<Box<dyn Component>> {
        let index = self.components.iter().position(|slot| slot.id == id)?;
        Some(self.components.remove(index).component)
    }

    /// All attached components with the behaviour-script capability
    pub fn behaviour_scripts_mut(&mut self) -> impl Iterator<Item = &mut dyn BehaviourScript> + '_ {
        self.components
            .iter_mut()
            .filter_map(|slot| slot.component.as_behaviour_mut())
    }

    /// Whether this object and every live ancestor are active
    pub fn is_active_in_world(&self, registry: &Registry) -> bool {
        registry.world_active(self)
    }

    /// First component of type `C` on the parent object
    pub fn get_component_in_parent<'r, C: Component>(&self, registry: &'r Registry) -> Option<&'r C> {
        registry.live_parent(self)?.get_component::<C>()
    }

    /// All components of type `C` on the parent object
    pub fn get_components_in_parent<'r, C: Component>(&self, registry: &'r Registry) -> Vec<&'r C> {
        registry
            .live_parent(self)
            .map(|parent| parent.get_components::<C>())
            .unwrap_or_default()
    }

    /// First component of type `C` on any direct child, in registry order
    pub fn get_component_in_children<'r, C: Component>(&self, registry: &'r Registry) -> Option<&'r C> {
        self.handle
            .and_then(|handle| registry.get_component_in_children::<C>(handle))
    }

    /// All components of type `C` on direct children, in registry order
    pub fn get_components_in_children<'r, C: Component>(&self, registry: &'r Registry) -> Vec<&'r C> {
        self.handle
            .map(|handle| registry.get_components_in_children::<C>(handle))
            .unwrap_or_default()
    }
}

/// Identity comparison: registered objects compare by handle, anything else
/// only equals itself
impl PartialEq for GameObject {
    fn eq(&self, other: &Self) -> bool {
        match (self.handle, other.handle) {
            (Some(a), Some(b)) => a == b,
            _ => ptr::eq(self, other),
        }
    }
}

impl Eq for GameObject {}

impl fmt::Debug for GameObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameObject")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("layer", &self.layer)
            .field("active", &self.active)
            .field("id", &self.id)
            .field("parent", &self.parent)
            .field("components", &self.components)
            .finish()
    }
}

/// An object the registry can own
///
/// Every variant embeds a [`GameObject`]; the trait exposes it along with the
/// type-erasure hooks used by [`ObjectType`] filtering.
pub trait SceneObject: Any {
    /// Borrow the embedded game object
    fn game_object(&self) -> &GameObject;

    /// Mutably borrow the embedded game object
    fn game_object_mut(&mut self) -> &mut GameObject;

    /// Borrow as `Any` for concrete-type casts
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as `Any` for concrete-type casts
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// UI capability, if this object has one
    fn ui_object(&self) -> Option<&UiObject> {
        None
    }

    /// Mutable UI capability, if this object has one
    fn ui_object_mut(&mut self) -> Option<&mut UiObject> {
        None
    }
}

impl SceneObject for GameObject {
    fn game_object(&self) -> &GameObject {
        self
    }

    fn game_object_mut(&mut self) -> &mut GameObject {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A type registry queries can filter and cast objects to
///
/// [`GameObject`] matches every object, [`UiObject`] matches every UI
/// variant, and concrete variants match only themselves. A failed cast is a
/// plain `None`.
pub trait ObjectType: 'static {
    /// View `object` as `Self`, if it is one
    fn cast(object: &dyn SceneObject) -> Option<&Self>;

    /// Mutably view `object` as `Self`, if it is one
    fn cast_mut(object: &mut dyn SceneObject) -> Option<&mut Self>;
}

impl ObjectType for GameObject {
    fn cast(object: &dyn SceneObject) -> Option<&Self> {
        Some(object.game_object())
    }

    fn cast_mut(object: &mut dyn SceneObject) -> Option<&mut Self> {
        Some(object.game_object_mut())
    }
}

impl ObjectType for UiObject {
    fn cast(object: &dyn SceneObject) -> Option<&Self> {
        object.ui_object()
    }

    fn cast_mut(object: &mut dyn SceneObject) -> Option<&mut Self> {
        object.ui_object_mut()
    }
}
