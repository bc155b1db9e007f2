//! Parent/child queries
//!
//! Parents are stored on the child as weak handles. A handle whose object has
//! been destroyed is treated as "no parent", so world-active checks and
//! in-parent lookups stay total.

use std::collections::VecDeque;

use super::component::Component;
use super::game_object::GameObject;
use super::registry::Registry;
use crate::foundation::collections::GameObjectId;

impl Registry {
    /// Look up a parent by name for a child that is being constructed
    pub(crate) fn resolve_parent(&self, parent_name: &str, child_name: &str) -> Option<GameObjectId> {
        let parent = self.find_id(parent_name);
        if parent.is_none() {
            log::warn!("Parent '{}' of '{}' not found; object has no parent", parent_name, child_name);
        }
        parent
    }

    /// The parent of `object`, if it is still registered
    pub(crate) fn live_parent(&self, object: &GameObject) -> Option<&GameObject> {
        let handle = object.parent()?;
        let parent = self.get(handle);
        if parent.is_none() {
            log::debug!("Parent {:?} of '{}' is gone; treating as root", handle, object.name());
        }
        parent
    }

    /// Handle of the live parent of an object
    pub fn parent_of(&self, handle: GameObjectId) -> Option<GameObjectId> {
        self.live_parent(self.get(handle)?).and_then(GameObject::handle)
    }

    /// Direct children of a live object in insertion order
    ///
    /// A destroyed object has no children, even if some objects still carry
    /// its stale handle.
    fn children(&self, handle: GameObjectId) -> impl Iterator<Item = &GameObject> + '_ {
        let live = self.contains(handle);
        self.iter()
            .filter(move |object| live && object.parent() == Some(handle))
    }

    /// Handles of the direct children of an object, in insertion order
    pub fn children_of(&self, handle: GameObjectId) -> Vec<GameObjectId> {
        self.children(handle)
            .filter_map(GameObject::handle)
            .collect()
    }

    /// Handles of all descendants, breadth first
    pub fn descendants_of(&self, handle: GameObjectId) -> Vec<GameObjectId> {
        let mut descendants = Vec::new();
        let mut queue: VecDeque<GameObjectId> = self.children_of(handle).into();

        while let Some(child) = queue.pop_front() {
            queue.extend(self.children_of(child));
            descendants.push(child);
        }
        descendants
    }

    pub(crate) fn world_active(&self, object: &GameObject) -> bool {
        let mut current = object;
        // Chains cannot outgrow the registry; the bound only stops a corrupted cycle.
        for _ in 0..=self.len() {
            if !current.is_active() {
                return false;
            }
            match self.live_parent(current) {
                Some(parent) => current = parent,
                None => return true,
            }
        }
        log::error!("Parent chain of '{}' does not terminate", object.name());
        false
    }

    /// Whether an object and all of its live ancestors are active
    ///
    /// Unknown handles are never active.
    pub fn is_active_in_world(&self, handle: GameObjectId) -> bool {
        self.get(handle).is_some_and(|object| self.world_active(object))
    }

    /// First component of type `C` on the parent of an object
    pub fn get_component_in_parent<C: Component>(&self, handle: GameObjectId) -> Option<&C> {
        self.get(handle)?.get_component_in_parent(self)
    }

    /// All components of type `C` on the parent of an object
    pub fn get_components_in_parent<C: Component>(&self, handle: GameObjectId) -> Vec<&C> {
        self.get(handle)
            .map(|object| object.get_components_in_parent(self))
            .unwrap_or_default()
    }

    /// First component of type `C` on any direct child, in insertion order
    pub fn get_component_in_children<C: Component>(&self, handle: GameObjectId) -> Option<&C> {
        self.children(handle)
            .find_map(|object| object.get_component::<C>())
    }

    /// All components of type `C` on direct children, in insertion order
    pub fn get_components_in_children<C: Component>(&self, handle: GameObjectId) -> Vec<&C> {
        self.children(handle)
            .flat_map(|object| object.get_components::<C>())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Light(u8);
    crate::impl_component!(Light);

    fn family(registry: &mut Registry) -> (GameObjectId, GameObjectId, GameObjectId) {
        let root = registry.insert(GameObject::new("root").with_component(Light(0))).unwrap();
        let child = registry
            .spawn_child(GameObject::new("child").with_component(Light(1)), "root")
            .unwrap();
        let grandchild = registry
            .spawn_child(GameObject::new("grandchild").with_component(Light(2)), "child")
            .unwrap();
        (root, child, grandchild)
    }

    #[test]
    fn test_parent_resolved_by_name() {
        let mut registry = Registry::new();
        let (root, child, grandchild) = family(&mut registry);

        assert_eq!(registry.parent_of(child), Some(root));
        assert_eq!(registry.parent_of(grandchild), Some(child));
        assert_eq!(registry.parent_of(root), None);
    }

    #[test]
    fn test_unknown_parent_name_means_root() {
        let mut registry = Registry::new();
        let orphan = registry.spawn_child(GameObject::new("orphan"), "missing").unwrap();

        assert_eq!(registry.get(orphan).and_then(GameObject::parent), None);
        assert!(registry.is_active_in_world(orphan));
    }

    #[test]
    fn test_world_active_is_conjunction_of_chain() {
        let mut registry = Registry::new();
        let (root, child, grandchild) = family(&mut registry);
        assert!(registry.is_active_in_world(grandchild));

        registry.get_mut(root).unwrap().set_active(false);
        assert!(!registry.is_active_in_world(child));
        assert!(!registry.is_active_in_world(grandchild));
        assert!(registry.get(grandchild).unwrap().is_active());

        registry.get_mut(root).unwrap().set_active(true);
        registry.get_mut(child).unwrap().set_active(false);
        assert!(registry.is_active_in_world(root));
        assert!(!registry.is_active_in_world(grandchild));
    }

    #[test]
    fn test_destroyed_parent_degrades_to_root() {
        let mut registry = Registry::new();
        let (root, child, _) = family(&mut registry);
        registry.get_mut(root).unwrap().set_active(false);
        registry.destroy(root).unwrap();

        assert_eq!(registry.parent_of(child), None);
        assert!(registry.is_active_in_world(child));
        assert!(registry.get_component_in_parent::<Light>(child).is_none());
    }

    #[test]
    fn test_destroyed_object_has_no_children() {
        let mut registry = Registry::new();
        let (root, child, grandchild) = family(&mut registry);
        registry.destroy(root).unwrap();

        assert!(registry.children_of(root).is_empty());
        assert!(registry.descendants_of(root).is_empty());
        assert!(registry.get_component_in_children::<Light>(root).is_none());
        assert!(registry.get_components_in_children::<Light>(root).is_empty());

        assert_eq!(registry.children_of(child), vec![grandchild]);
        assert_eq!(registry.descendants_of(child), vec![grandchild]);
    }

    #[test]
    fn test_component_in_parent() {
        let mut registry = Registry::new();
        let (root, child, _) = family(&mut registry);

        assert_eq!(registry.get_component_in_parent::<Light>(child), Some(&Light(0)));
        assert_eq!(registry.get_components_in_parent::<Light>(child), vec![&Light(0)]);
        assert!(registry.get_component_in_parent::<Light>(root).is_none());
        assert!(registry.get_components_in_parent::<Light>(root).is_empty());
    }

    #[test]
    fn test_components_in_children_only_direct_children() {
        let mut registry = Registry::new();
        let (root, _, _) = family(&mut registry);
        let sibling = GameObject::new("sibling")
            .with_component(Light(3))
            .with_component(Light(4));
        registry.spawn_child(sibling, "root").unwrap();

        assert_eq!(registry.get_component_in_children::<Light>(root), Some(&Light(1)));
        assert_eq!(
            registry.get_components_in_children::<Light>(root),
            vec![&Light(1), &Light(3), &Light(4)]
        );
    }

    #[test]
    fn test_game_object_side_queries() {
        let mut registry = Registry::new();
        let (root, child, _) = family(&mut registry);

        let child_object = registry.get(child).unwrap();
        assert!(child_object.is_active_in_world(&registry));
        assert_eq!(child_object.get_component_in_parent::<Light>(&registry), Some(&Light(0)));

        let root_object = registry.get(root).unwrap();
        assert_eq!(root_object.get_component_in_children::<Light>(&registry), Some(&Light(1)));
        assert_eq!(root_object.get_components_in_children::<Light>(&registry).len(), 1);
    }

    #[test]
    fn test_unregistered_object_with_parent() {
        let mut registry = Registry::new();
        let (root, _, _) = family(&mut registry);
        let pending = GameObject::new("pending").with_parent(Some(root));

        assert!(pending.is_active_in_world(&registry));
        assert_eq!(pending.get_component_in_parent::<Light>(&registry), Some(&Light(0)));
        assert!(pending.get_components_in_children::<Light>(&registry).is_empty());

        registry.get_mut(root).unwrap().set_active(false);
        assert!(!pending.is_active_in_world(&registry));
    }

    #[test]
    fn test_destroy_recursive_removes_descendants() {
        let mut registry = Registry::new();
        let (root, child, grandchild) = family(&mut registry);
        let bystander = registry.insert(GameObject::new("bystander")).unwrap();

        let destroyed = registry.destroy_recursive(root).unwrap();
        let names: Vec<_> = destroyed.iter().map(|object| object.game_object().name()).collect();

        assert_eq!(names, vec!["root", "child", "grandchild"]);
        assert!(!registry.contains(child));
        assert!(!registry.contains(grandchild));
        assert!(registry.contains(bystander));
        assert!(registry.descendants_of(bystander).is_empty());
    }
}
