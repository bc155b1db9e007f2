//! Animator component

use super::sprite::Sprite;

/// Plays an ordered sequence of sprites
///
/// Frame advancement belongs to the render loop; the animator only tracks
/// what should be shown and whether playback is running.
#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    fps: f64,
    sprites: Vec<Sprite>,
    playing: bool,
    looping: bool,
    current_frame: usize,
}

impl Animator {
    /// Create a stopped, looping animator
    pub fn new(fps: f64, sprites: Vec<Sprite>) -> Self {
        Self {
            fps,
            sprites,
            playing: false,
            looping: true,
            current_frame: 0,
        }
    }

    /// Start playing the sequence
    pub fn play(&mut self, looping: bool) {
        self.looping = looping;
        self.playing = true;
    }

    /// Stop playing; the last shown sprite stays current
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether playback restarts at the end
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Get the playback rate in frames per second
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Set the playback rate in frames per second
    pub fn set_fps(&mut self, fps: f64) {
        self.fps = fps;
    }

    /// Index of the current frame
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Jump to a frame; out-of-range indices are clamped to the last frame
    pub fn set_current_frame(&mut self, frame: usize) {
        self.current_frame = frame.min(self.sprites.len().saturating_sub(1));
    }

    /// The sprite that should currently be shown
    pub fn current_sprite(&self) -> Option<&Sprite> {
        self.sprites.get(self.current_frame)
    }

    /// All frames in playback order
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }
}

crate::impl_component!(Animator);
