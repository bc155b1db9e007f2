//! Scene demo application
//!
//! Builds a small menu scene, runs one start/update pass over its behaviour
//! scripts and logs what the registry queries return. Pass a `.toml` or
//! `.ron` scene config path as the first argument to override the defaults.

use scene_engine::prelude::*;
use thiserror::Error;

/// Demo-level errors
#[derive(Error, Debug)]
enum DemoError {
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Expected object '{0}' is missing")]
    Missing(&'static str),
}

/// Spins the title sprite a little every tick
struct TitleWobble {
    angle: f64,
}

impl BehaviourScript for TitleWobble {
    fn on_start(&mut self) {
        log::info!("Title wobble starting");
    }

    fn on_update(&mut self, time: &Time) {
        self.angle += 90.0 * time.delta_time();
    }
}

scene_engine::impl_component!(behaviour TitleWobble);

fn build_menu(registry: &mut Registry) -> Result<(), DemoError> {
    let title_sprite = Sprite::new("title.png", Vec2::new(256.0, 64.0)).with_sorting(1, 0);
    registry.insert(
        GameObject::new("menu")
            .with_tag("ui_root")
            .with_component(title_sprite)
            .with_component(TitleWobble { angle: 0.0 }),
    )?;

    let start = Button::new(GameObject::new("start").with_tag("menu_item").with_layer(1), 120.0, 40.0)
        .with_on_click(|| log::info!("Start pressed"));
    registry.spawn_child(start, "menu")?;

    let quit = Button::new(GameObject::new("quit").with_tag("menu_item").with_layer(1), 120.0, 40.0)
        .with_on_click(|| log::info!("Quit pressed"));
    registry.spawn_child(quit, "menu")?;

    let version = Text::new("version", "mono.ttf", "v0.1.0").with_alignment(Alignment::Right);
    registry.spawn_child(version, "menu")?;

    // Cameras are kept out of the registry unless inserted explicitly
    let camera = Camera::new("main_camera", Color::black()).with_aspect(16.0, 9.0);
    log::info!("Camera '{}' ready", camera.game_object().name());

    Ok(())
}

fn run(config: SceneConfig) -> Result<(), DemoError> {
    let mut registry = Registry::with_config(config);
    build_menu(&mut registry)?;

    let mut time = Time::new();
    registry.start_behaviours();
    time.set_frame_rate(60.0);
    registry.update_behaviours(&time);

    let items = registry.find_game_objects_with_tag("menu_item");
    log::info!("{} menu items", items.len());

    let buttons = registry.find_objects_of_type::<Button>(false).len();
    let ui_objects = registry.find_objects_of_type::<UiObject>(false).len();
    log::info!("{} buttons among {} UI objects", buttons, ui_objects);

    registry
        .find_mut::<Button>("start")
        .ok_or(DemoError::Missing("start"))?
        .click();

    let menu = registry.find_id("menu").ok_or(DemoError::Missing("menu"))?;
    registry.get_mut(menu).ok_or(DemoError::Missing("menu"))?.set_active(false);
    let quit = registry.find_id("quit").ok_or(DemoError::Missing("quit"))?;
    log::info!("Quit button active in world after hiding menu: {}", registry.is_active_in_world(quit));

    let removed = registry.destroy_recursive(menu)?;
    log::info!("Destroyed {} objects, {} left", removed.len(), registry.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    scene_engine::foundation::logging::init();
    log::info!("Starting scene demo");

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(&path)?,
        None => SceneConfig::default(),
    };

    run(config)?;
    log::info!("Scene demo finished");
    Ok(())
}
