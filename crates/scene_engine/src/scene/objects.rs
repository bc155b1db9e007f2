//! Object variants
//!
//! UI objects and cameras are game objects with extra placement data. Each
//! variant embeds its base and is stored in the registry like any other
//! [`SceneObject`].

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::game_object::{GameObject, ObjectType, SceneObject};
use crate::foundation::math::Color;

macro_rules! impl_object_type {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ObjectType for $ty {
                fn cast(object: &dyn SceneObject) -> Option<&Self> {
                    object.as_any().downcast_ref::<$ty>()
                }

                fn cast_mut(object: &mut dyn SceneObject) -> Option<&mut Self> {
                    object.as_any_mut().downcast_mut::<$ty>()
                }
            }
        )+
    };
}

impl_object_type!(Button, Text, Camera);

/// Base for user interface objects like [`Button`] or [`Text`]
#[derive(Debug)]
pub struct UiObject {
    base: GameObject,
    width: f64,
    height: f64,
}

impl UiObject {
    /// Create a UI object with the given size
    pub fn new(base: GameObject, width: f64, height: f64) -> Self {
        Self { base, width, height }
    }

    /// Get the width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the width
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Get the height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the height
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }
}

impl SceneObject for UiObject {
    fn game_object(&self) -> &GameObject {
        &self.base
    }

    fn game_object_mut(&mut self) -> &mut GameObject {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn ui_object(&self) -> Option<&UiObject> {
        Some(self)
    }

    fn ui_object_mut(&mut self) -> Option<&mut UiObject> {
        Some(self)
    }
}

/// Click handler registered on a [`Button`]
pub type ClickCallback = Box<dyn FnMut()>;

/// Clickable user interface item
pub struct Button {
    ui: UiObject,
    interactable: bool,
    on_click: Option<ClickCallback>,
}

impl Button {
    /// Create an interactable button without a click handler
    pub fn new(base: GameObject, width: f64, height: f64) -> Self {
        Self {
            ui: UiObject::new(base, width, height),
            interactable: true,
            on_click: None,
        }
    }

    /// Register the click handler
    pub fn with_on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click(callback);
        self
    }

    /// Replace the click handler
    pub fn on_click(&mut self, callback: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    /// Trigger the click handler
    ///
    /// Returns whether a handler ran. A non-interactable button ignores
    /// clicks.
    pub fn click(&mut self) -> bool {
        if !self.interactable {
            return false;
        }
        match self.on_click.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Whether the button reacts to clicks
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Enable or disable click handling
    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }

    /// Borrow the UI base
    pub fn ui(&self) -> &UiObject {
        &self.ui
    }

    /// Mutably borrow the UI base
    pub fn ui_mut(&mut self) -> &mut UiObject {
        &mut self.ui
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("ui", &self.ui)
            .field("interactable", &self.interactable)
            .field("has_on_click", &self.on_click.is_some())
            .finish()
    }
}

impl SceneObject for Button {
    fn game_object(&self) -> &GameObject {
        &self.ui.base
    }

    fn game_object_mut(&mut self) -> &mut GameObject {
        &mut self.ui.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn ui_object(&self) -> Option<&UiObject> {
        Some(&self.ui)
    }

    fn ui_object_mut(&mut self) -> Option<&mut UiObject> {
        Some(&mut self.ui)
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Left-aligned text
    #[default]
    Left,
    /// Center-aligned text
    Center,
    /// Right-aligned text
    Right,
}

/// A piece of text which can be rendered
#[derive(Debug)]
pub struct Text {
    ui: UiObject,
    text: String,
    font: String,
    size: i32,
    alignment: Alignment,
    color: Color,
}

impl Text {
    /// Layer text objects are placed on unless told otherwise
    pub const DEFAULT_LAYER: i32 = 1;
    /// Font size unless told otherwise
    pub const DEFAULT_SIZE: i32 = 3;
    /// Box width unless told otherwise
    pub const DEFAULT_WIDTH: f64 = 60.0;
    /// Box height unless told otherwise
    pub const DEFAULT_HEIGHT: f64 = 15.0;

    /// Create left-aligned black text with the default box on layer 1
    pub fn new(name: impl Into<String>, font: impl Into<String>, text: impl Into<String>) -> Self {
        let base = GameObject::new(name).with_layer(Self::DEFAULT_LAYER);
        Self::from_base(base, font, text)
    }

    /// Create text on top of an existing base object
    pub fn from_base(base: GameObject, font: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            ui: UiObject::new(base, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
            text: text.into(),
            font: font.into(),
            size: Self::DEFAULT_SIZE,
            alignment: Alignment::Left,
            color: Color::black(),
        }
    }

    /// Set the alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the font size
    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    /// Set the box size
    pub fn with_dimensions(mut self, width: f64, height: f64) -> Self {
        self.ui.set_width(width);
        self.ui.set_height(height);
        self
    }

    /// Get the displayed string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the displayed string
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Get the font
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Set the font
    pub fn set_font(&mut self, font: impl Into<String>) {
        self.font = font.into();
    }

    /// Get the font size
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Set the font size
    pub fn set_size(&mut self, size: i32) {
        self.size = size;
    }

    /// Get the alignment
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Set the alignment
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Get the color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Borrow the UI base
    pub fn ui(&self) -> &UiObject {
        &self.ui
    }
}

impl SceneObject for Text {
    fn game_object(&self) -> &GameObject {
        &self.ui.base
    }

    fn game_object_mut(&mut self) -> &mut GameObject {
        &mut self.ui.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn ui_object(&self) -> Option<&UiObject> {
        Some(&self.ui)
    }

    fn ui_object_mut(&mut self) -> Option<&mut UiObject> {
        Some(&mut self.ui)
    }
}

/// Point of view towards the game scene
///
/// Cameras are usually held by the scene rather than registered; insert one
/// explicitly if it should be found by registry queries.
#[derive(Debug)]
pub struct Camera {
    base: GameObject,
    background_color: Color,
    aspect_width: f64,
    aspect_height: f64,
}

impl Camera {
    /// Create a camera with no aspect ratio set
    pub fn new(name: impl Into<String>, background_color: Color) -> Self {
        Self::from_base(GameObject::new(name), background_color)
    }

    /// Create a camera on top of an existing base object
    pub fn from_base(base: GameObject, background_color: Color) -> Self {
        Self {
            base,
            background_color,
            aspect_width: 0.0,
            aspect_height: 0.0,
        }
    }

    /// Set the aspect dimensions
    pub fn with_aspect(mut self, width: f64, height: f64) -> Self {
        self.aspect_width = width;
        self.aspect_height = height;
        self
    }

    /// Get the background color
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Set the background color
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Get the aspect width
    pub fn aspect_width(&self) -> f64 {
        self.aspect_width
    }

    /// Set the aspect width
    pub fn set_aspect_width(&mut self, width: f64) {
        self.aspect_width = width;
    }

    /// Get the aspect height
    pub fn aspect_height(&self) -> f64 {
        self.aspect_height
    }

    /// Set the aspect height
    pub fn set_aspect_height(&mut self, height: f64) {
        self.aspect_height = height;
    }
}

impl SceneObject for Camera {
    fn game_object(&self) -> &GameObject {
        &self.base
    }

    fn game_object_mut(&mut self) -> &mut GameObject {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
