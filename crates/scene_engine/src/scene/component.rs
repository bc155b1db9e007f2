//! Component trait and slot storage
//!
//! Components are owned by exactly one game object and looked up by their
//! concrete type. Each attached component receives a [`ComponentId`] so it can
//! be found and removed again without holding a reference into its owner.

use std::any::Any;
use std::fmt;

use crate::components::BehaviourScript;
use crate::foundation::collections::ComponentId;

/// Capability trait for anything attachable to a game object
///
/// Implement it with [`impl_component!`](crate::impl_component) rather than
/// by hand; the macro supplies the type-erasure plumbing the typed queries
/// rely on.
pub trait Component: Any {
    /// Borrow as `Any` for typed lookup
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as `Any` for typed lookup
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Name of the concrete component type, for diagnostics
    fn type_name(&self) -> &'static str;

    /// Behaviour-script capability, if this component has one
    fn as_behaviour_mut(&mut self) -> Option<&mut dyn BehaviourScript> {
        None
    }
}

/// Implement [`Component`] for one or more types
///
/// ```
/// use scene_engine::impl_component;
///
/// struct Health(u32);
/// struct Score(u64);
/// impl_component!(Health, Score);
/// ```
///
/// Prefix a type with `behaviour` to also expose its
/// [`BehaviourScript`](crate::components::BehaviourScript) implementation.
#[macro_export]
macro_rules! impl_component {
    (behaviour $ty:ty) => {
        impl $crate::scene::Component for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn type_name(&self) -> &'static str {
                ::std::any::type_name::<$ty>()
            }

            fn as_behaviour_mut(&mut self) -> Option<&mut dyn $crate::components::BehaviourScript> {
                Some(self)
            }
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::scene::Component for $ty {
                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                    self
                }

                fn type_name(&self) -> &'static str {
                    ::std::any::type_name::<$ty>()
                }
            }
        )+
    };
}

/// An attached component together with its id
pub(crate) struct ComponentSlot {
    pub(crate) id: ComponentId,
    pub(crate) component: Box<dyn Component>,
}

impl ComponentSlot {
    pub(crate) fn new(component: Box<dyn Component>) -> Self {
        Self {
            id: ComponentId::next(),
            component,
        }
    }

    pub(crate) fn downcast<C: Component>(&self) -> Option<&C> {
        self.component.as_any().downcast_ref::<C>()
    }

    pub(crate) fn downcast_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.component.as_any_mut().downcast_mut::<C>()
    }
}

impl fmt::Debug for ComponentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.component.type_name(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;
    struct Other;
    crate::impl_component!(Marker, Other);

    #[test]
    fn test_slot_downcast_matches_concrete_type_only() {
        let slot = ComponentSlot::new(Box::new(Marker));
        assert!(slot.downcast::<Marker>().is_some());
        assert!(slot.downcast::<Other>().is_none());
    }

    #[test]
    fn test_plain_component_has_no_behaviour() {
        let mut slot = ComponentSlot::new(Box::new(Marker));
        assert!(slot.component.as_behaviour_mut().is_none());
        assert!(slot.component.type_name().ends_with("Marker"));
    }
}
