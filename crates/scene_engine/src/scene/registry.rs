//! Object registry
//!
//! The [`Registry`] owns every live scene object and answers the name, tag,
//! type and component queries gameplay code uses to find them. It is an
//! explicit context value: create one per scene and pass it to whatever
//! needs to look objects up.
//!
//! Objects are stored in a generation-tagged slot map. Handles therefore stay
//! valid for exactly as long as their object lives, and a handle to a
//! destroyed object never resolves to a newer one. Scan order is insertion
//! order and is preserved across removals.

use thiserror::Error;

use super::component::Component;
use super::game_object::{GameObject, ObjectType, SceneObject};
use crate::components::BehaviourScript;
use crate::config::{ConfigError, SceneConfig};
use crate::foundation::collections::{ComponentId, GameObjectId, HandleMap};
use crate::foundation::time::Time;

/// Registry errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// The handle does not refer to a live object
    #[error("Invalid object reference: {0:?} is not registered")]
    InvalidReference(GameObjectId),

    /// The object was registered before; registration is one-shot
    #[error("Object with id {0} was already registered")]
    AlreadyRegistered(u32),

    /// Every object id has been handed out
    ///
    /// Serials stop at `u32::MAX - 1`; `u32::MAX` itself is never assigned.
    #[error("Object id space exhausted")]
    IdSpaceExhausted,

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for registry operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Owner of all live scene objects
pub struct Registry {
    objects: HandleMap<Box<dyn SceneObject>>,
    order: Vec<GameObjectId>,
    next_id: u32,
    config: SceneConfig,
}

impl Registry {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Create an empty registry with custom configuration
    ///
    /// The up-front reservation is capped at
    /// [`SceneConfig::MAX_INITIAL_CAPACITY`]; the registry still grows past it.
    pub fn with_config(config: SceneConfig) -> Self {
        let capacity = config.initial_capacity.min(SceneConfig::MAX_INITIAL_CAPACITY);
        if capacity < config.initial_capacity {
            log::warn!(
                "initial_capacity {} capped to {}",
                config.initial_capacity,
                SceneConfig::MAX_INITIAL_CAPACITY
            );
        }
        Self {
            objects: HandleMap::with_capacity_and_key(capacity),
            order: Vec::with_capacity(capacity),
            next_id: 0,
            config,
        }
    }

    /// Create a registry from a configuration file
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> SceneResult<Self> {
        Ok(Self::with_config(SceneConfig::load(path)?))
    }

    /// Get the active configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Register an object, taking ownership of it
    ///
    /// The object receives the next id in insertion order.
    pub fn insert<O: SceneObject>(&mut self, object: O) -> SceneResult<GameObjectId> {
        self.insert_boxed(Box::new(object))
    }

    /// Register an already boxed object
    pub fn insert_boxed(&mut self, mut object: Box<dyn SceneObject>) -> SceneResult<GameObjectId> {
        if let Some(id) = object.game_object().id() {
            return Err(SceneError::AlreadyRegistered(id));
        }

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(SceneError::IdSpaceExhausted)?;

        let handle = self.objects.insert_with_key(|handle| {
            object.game_object_mut().mark_registered(handle, id);
            object
        });
        self.order.push(handle);

        let object = self.objects[handle].game_object();
        log::debug!("Registered '{}' as id {} ({:?})", object.name(), id, handle);
        Ok(handle)
    }

    /// Resolve `parent_name` now, then register the object under that parent
    pub fn spawn_child<O: SceneObject>(&mut self, mut object: O, parent_name: &str) -> SceneResult<GameObjectId> {
        let parent = self.resolve_parent(parent_name, object.game_object().name());
        object.game_object_mut().set_parent(parent);
        self.insert(object)
    }

    /// Register a plain object carrying the configured default tag and layer
    pub fn create(&mut self, name: impl Into<String>) -> SceneResult<GameObjectId> {
        let object = GameObject::new(name)
            .with_tag(self.config.default_tag.clone())
            .with_layer(self.config.default_layer);
        self.insert(object)
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no objects are registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the handle refers to a live object
    pub fn contains(&self, handle: GameObjectId) -> bool {
        self.objects.contains_key(handle)
    }

    /// Get a live object's base
    pub fn get(&self, handle: GameObjectId) -> Option<&GameObject> {
        self.objects.get(handle).map(|object| object.game_object())
    }

    /// Get a live object's base mutably
    pub fn get_mut(&mut self, handle: GameObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(handle).map(|object| object.game_object_mut())
    }

    /// Get a live object as `T`, if it is one
    pub fn get_as<T: ObjectType>(&self, handle: GameObjectId) -> Option<&T> {
        T::cast(&**self.objects.get(handle)?)
    }

    /// Get a live object as `T` mutably, if it is one
    pub fn get_as_mut<T: ObjectType>(&mut self, handle: GameObjectId) -> Option<&mut T> {
        T::cast_mut(&mut **self.objects.get_mut(handle)?)
    }

    /// Handles of all live objects in insertion order
    pub fn handles(&self) -> &[GameObjectId] {
        &self.order
    }

    /// All live objects in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.scene_objects().map(|object| object.game_object())
    }

    pub(crate) fn scene_objects(&self) -> impl Iterator<Item = &dyn SceneObject> + '_ {
        self.order
            .iter()
            .filter_map(move |handle| self.objects.get(*handle))
            .map(|object| &**object)
    }

    /// Handle of the first object with this name
    pub fn find_id(&self, name: &str) -> Option<GameObjectId> {
        self.iter().find(|object| object.name() == name).and_then(GameObject::handle)
    }

    /// Find the first object with this name, viewed as `T`
    ///
    /// Only the first name match is considered. If it is not a `T` the result
    /// is `None`.
    pub fn find<T: ObjectType>(&self, name: &str) -> Option<&T> {
        let object = self.scene_objects().find(|object| object.game_object().name() == name)?;
        let found = T::cast(object);
        if found.is_none() {
            log::warn!("Object '{}' exists but is not a {}", name, std::any::type_name::<T>());
        }
        found
    }

    /// Find the first object with this name mutably, viewed as `T`
    pub fn find_mut<T: ObjectType>(&mut self, name: &str) -> Option<&mut T> {
        let handle = self.find_id(name)?;
        let found = T::cast_mut(&mut **self.objects.get_mut(handle)?);
        if found.is_none() {
            log::warn!("Object '{}' exists but is not a {}", name, std::any::type_name::<T>());
        }
        found
    }

    fn tag_matches(&self, object: &GameObject, tag: &str) -> bool {
        object.tag() == tag && (self.config.tag_queries_include_inactive || object.is_active())
    }

    /// First object with this tag, in insertion order
    pub fn find_with_tag(&self, tag: &str) -> Option<&GameObject> {
        self.iter().find(|object| self.tag_matches(object, tag))
    }

    /// All objects with this tag, in insertion order
    pub fn find_game_objects_with_tag(&self, tag: &str) -> Vec<&GameObject> {
        self.iter().filter(|object| self.tag_matches(object, tag)).collect()
    }

    /// The object owning the component with this id
    pub fn find_game_object_with_component(&self, component: ComponentId) -> Option<&GameObject> {
        self.iter().find(|object| object.has_component(component))
    }

    /// First object of type `T`
    ///
    /// Locally inactive objects are skipped unless `include_inactive` is set.
    /// Parents are not consulted.
    pub fn find_object_of_type<T: ObjectType>(&self, include_inactive: bool) -> Option<&T> {
        self.find_objects_of_type(include_inactive).into_iter().next()
    }

    /// All objects of type `T`, in insertion order
    pub fn find_objects_of_type<T: ObjectType>(&self, include_inactive: bool) -> Vec<&T> {
        self.scene_objects()
            .filter(|object| include_inactive || object.game_object().is_active())
            .filter_map(T::cast)
            .collect()
    }

    /// Remove an object from the registry and hand it back
    ///
    /// Children of the object stay registered; their parent handle goes stale
    /// and they behave as roots from then on. See [`Registry::destroy_recursive`].
    ///
    /// # Errors
    /// [`SceneError::InvalidReference`] if the handle is not live. The
    /// registry is left untouched in that case.
    pub fn destroy(&mut self, handle: GameObjectId) -> SceneResult<Box<dyn SceneObject>> {
        let mut object = self
            .objects
            .remove(handle)
            .ok_or(SceneError::InvalidReference(handle))?;
        self.order.retain(|live| *live != handle);
        object.game_object_mut().mark_destroyed();

        log::debug!("Destroyed '{}' ({:?})", object.game_object().name(), handle);
        Ok(object)
    }

    /// Remove an object together with all of its descendants
    ///
    /// Objects are returned parent-first.
    ///
    /// # Errors
    /// [`SceneError::InvalidReference`] if the handle is not live.
    pub fn destroy_recursive(&mut self, handle: GameObjectId) -> SceneResult<Vec<Box<dyn SceneObject>>> {
        if !self.contains(handle) {
            return Err(SceneError::InvalidReference(handle));
        }

        let doomed = self.descendants_of(handle);
        let mut destroyed = Vec::with_capacity(doomed.len() + 1);
        destroyed.push(self.destroy(handle)?);
        for descendant in doomed {
            destroyed.push(self.destroy(descendant)?);
        }
        Ok(destroyed)
    }

    /// Detach a component from whichever object owns it
    ///
    /// The owner stays registered. Unknown ids are ignored.
    pub fn destroy_component(&mut self, component: ComponentId) -> Option<Box<dyn Component>> {
        let owner = self
            .iter()
            .find(|object| object.has_component(component))
            .and_then(GameObject::handle)?;
        let removed = self.get_mut(owner)?.remove_component(component);
        if let Some(removed) = &removed {
            log::trace!("Removed {} {} from {:?}", removed.type_name(), component, owner);
        }
        removed
    }

    /// Remove every object
    pub fn clear(&mut self) {
        log::debug!("Clearing {} objects", self.order.len());
        for (_, mut object) in self.objects.drain() {
            object.game_object_mut().mark_destroyed();
        }
        self.order.clear();
    }

    /// Run `on_start` on every behaviour script of world-active objects
    pub fn start_behaviours(&mut self) {
        self.for_each_active_behaviour(|script| script.on_start());
    }

    /// Run `on_update` on every behaviour script of world-active objects
    pub fn update_behaviours(&mut self, time: &Time) {
        self.for_each_active_behaviour(|script| script.on_update(time));
    }

    fn for_each_active_behaviour(&mut self, mut hook: impl FnMut(&mut dyn BehaviourScript)) {
        let active: Vec<GameObjectId> = self
            .order
            .iter()
            .copied()
            .filter(|handle| self.is_active_in_world(*handle))
            .collect();

        for handle in active {
            if let Some(object) = self.get_mut(handle) {
                for script in object.behaviour_scripts_mut() {
                    hook(script);
                }
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::objects::{Button, Camera, Text, UiObject};
    use crate::foundation::math::Color;

    #[derive(Debug, PartialEq)]
    struct Weapon(&'static str);
    crate::impl_component!(Weapon);

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut registry = Registry::new();
        let a = registry.insert(GameObject::new("a")).unwrap();
        let b = registry.insert(GameObject::new("b")).unwrap();

        assert_eq!(registry.get(a).and_then(GameObject::id), Some(0));
        assert_eq!(registry.get(b).and_then(GameObject::id), Some(1));
        assert_eq!(registry.get(b).and_then(GameObject::handle), Some(b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_oversized_capacity_is_capped() {
        let mut registry = Registry::with_config(SceneConfig::default().with_initial_capacity(usize::MAX));
        let handle = registry.insert(GameObject::new("a")).unwrap();

        assert_eq!(registry.config().initial_capacity, usize::MAX);
        assert!(registry.contains(handle));
    }

    #[test]
    fn test_config_file_with_oversized_capacity_rejected() {
        let path = std::env::temp_dir().join(format!("scene_engine_{}_registry.toml", std::process::id()));
        std::fs::write(&path, format!("initial_capacity = {}\n", u32::MAX)).unwrap();
        let result = Registry::from_config_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(SceneError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_destroyed_object_cannot_be_reinserted() {
        let mut registry = Registry::new();
        let handle = registry.insert(GameObject::new("once")).unwrap();
        let object = registry.destroy(handle).unwrap();

        assert!(!object.game_object().is_registered());
        assert!(matches!(registry.insert_boxed(object), Err(SceneError::AlreadyRegistered(0))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let mut registry = Registry::new();
        let first = registry.insert(GameObject::new("twin").with_layer(1)).unwrap();
        registry.insert(GameObject::new("twin").with_layer(2)).unwrap();

        let found = registry.find::<GameObject>("twin").unwrap();
        assert_eq!(found.handle(), Some(first));
        assert_eq!(found.layer(), 1);
        assert!(registry.find::<GameObject>("nobody").is_none());
    }

    #[test]
    fn test_find_with_wrong_type_is_none() {
        let mut registry = Registry::new();
        registry.insert(Text::new("title", "font", "Hello")).unwrap();

        assert!(registry.find::<Button>("title").is_none());
        assert!(registry.find::<UiObject>("title").is_some());
        assert_eq!(registry.find::<Text>("title").map(Text::text), Some("Hello"));
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut registry = Registry::new();
        registry.insert(Text::new("score", "font", "0")).unwrap();

        registry.find_mut::<Text>("score").unwrap().set_text("10");
        registry.find_mut::<GameObject>("score").unwrap().set_active(false);

        let text = registry.find::<Text>("score").unwrap();
        assert_eq!(text.text(), "10");
        assert!(!text.game_object().is_active());
    }

    #[test]
    fn test_find_with_tag_ignores_active_state_by_default() {
        let mut registry = Registry::new();
        registry.insert(GameObject::new("sleeping").with_tag("enemy").with_active(false)).unwrap();
        registry.insert(GameObject::new("awake").with_tag("enemy")).unwrap();

        assert_eq!(registry.find_with_tag("enemy").map(GameObject::name), Some("sleeping"));
        assert_eq!(registry.find_game_objects_with_tag("enemy").len(), 2);
        assert!(registry.find_with_tag("ally").is_none());
    }

    #[test]
    fn test_tag_queries_can_skip_inactive() {
        let config = SceneConfig::default().with_tag_queries_include_inactive(false);
        let mut registry = Registry::with_config(config);
        registry.insert(GameObject::new("sleeping").with_tag("enemy").with_active(false)).unwrap();
        registry.insert(GameObject::new("awake").with_tag("enemy")).unwrap();

        assert_eq!(registry.find_with_tag("enemy").map(GameObject::name), Some("awake"));
        assert_eq!(registry.find_game_objects_with_tag("enemy").len(), 1);

        // Only the local flag counts, not the parent chain
        registry
            .spawn_child(GameObject::new("minion").with_tag("enemy"), "sleeping")
            .unwrap();
        assert_eq!(registry.find_game_objects_with_tag("enemy").len(), 2);
    }

    #[test]
    fn test_last_serial_is_reserved() {
        let mut registry = Registry::new();
        registry.next_id = u32::MAX - 1;
        let last = registry.insert(GameObject::new("last")).unwrap();

        assert_eq!(registry.get(last).and_then(GameObject::id), Some(u32::MAX - 1));
        assert!(matches!(
            registry.insert(GameObject::new("overflow")),
            Err(SceneError::IdSpaceExhausted)
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_objects_of_type_filters_variants() {
        let mut registry = Registry::new();
        registry.insert(GameObject::new("plain")).unwrap();
        registry.insert(Button::new(GameObject::new("ok"), 10.0, 5.0)).unwrap();
        registry.insert(Text::new("label", "font", "hi")).unwrap();
        registry.insert(Camera::new("cam", Color::black())).unwrap();

        assert_eq!(registry.find_objects_of_type::<GameObject>(false).len(), 4);
        assert_eq!(registry.find_objects_of_type::<UiObject>(false).len(), 2);
        assert_eq!(registry.find_objects_of_type::<Button>(false).len(), 1);
        assert!(registry.find_object_of_type::<Camera>(false).is_some());
    }

    #[test]
    fn test_find_game_object_with_component() {
        let mut registry = Registry::new();
        let mut holder = GameObject::new("holder");
        let sword = holder.add_component(Weapon("sword"));
        registry.insert(GameObject::new("bystander")).unwrap();
        let handle = registry.insert(holder).unwrap();

        let owner = registry.find_game_object_with_component(sword).unwrap();
        assert_eq!(owner.handle(), Some(handle));
    }

    #[test]
    fn test_destroy_component_keeps_owner() {
        let mut registry = Registry::new();
        let mut holder = GameObject::new("holder");
        let sword = holder.add_component(Weapon("sword"));
        holder.add_component(Weapon("bow"));
        let handle = registry.insert(holder).unwrap();

        let removed = registry.destroy_component(sword).unwrap();
        assert_eq!(removed.as_any().downcast_ref::<Weapon>(), Some(&Weapon("sword")));
        assert!(registry.contains(handle));
        assert_eq!(registry.get(handle).unwrap().get_components::<Weapon>(), vec![&Weapon("bow")]);

        // Second attempt is a silent no-op
        assert!(registry.destroy_component(sword).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_applies_config_defaults() {
        let config = SceneConfig::default().with_default_tag("Untagged").with_default_layer(4);
        let mut registry = Registry::with_config(config);
        let handle = registry.create("spawned").unwrap();

        let object = registry.get(handle).unwrap();
        assert_eq!(object.tag(), "Untagged");
        assert_eq!(object.layer(), 4);
    }

    #[test]
    fn test_clear_empties_registry() {
        let mut registry = Registry::new();
        let handle = registry.insert(GameObject::new("a")).unwrap();
        registry.insert(GameObject::new("b")).unwrap();
        registry.clear();

        assert!(registry.is_empty());
        assert!(!registry.contains(handle));
        assert!(registry.iter().next().is_none());
    }
}
