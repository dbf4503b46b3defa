//! Pointer input mapped onto camera parameters.
//!
//! The mapper is engine independent: the bridge forwards raw pointer
//! positions and numbered button transitions, and the mapper turns them
//! into orbit angles, zoom and detail changes.
//!
//! ```text
//!   id  button       effect
//!   0   primary      held: zoom in once per tick
//!   1   middle       held state only
//!   2   secondary    held: zoom out once per tick
//!   3   wheel up     on press: finer detail
//!   4   wheel down   on press: coarser detail
//! ```
//!
//! Holding primary and secondary together selects the debug camera and
//! suppresses zoom.

use crate::camera::OrbitCamera;
use crate::config::ViewConfig;

/// Pointer buttons recognised by the mapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
  Primary,
  Middle,
  Secondary,
  WheelUp,
  WheelDown,
}

impl PointerButton {
  /// Map a numeric button id, returning `None` for ids the mapper ignores.
  pub fn from_id(id: u32) -> Option<Self> {
    match id {
      0 => Some(Self::Primary),
      1 => Some(Self::Middle),
      2 => Some(Self::Secondary),
      3 => Some(Self::WheelUp),
      4 => Some(Self::WheelDown),
      _ => None,
    }
  }

  /// Numeric id of this button.
  pub fn id(self) -> u32 {
    match self {
      Self::Primary => 0,
      Self::Middle => 1,
      Self::Secondary => 2,
      Self::WheelUp => 3,
      Self::WheelDown => 4,
    }
  }
}

/// Held state of the three physical buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
  pub primary: bool,
  pub middle: bool,
  pub secondary: bool,
}

impl ButtonState {
  /// Per-tick distance factor, present only while exactly one of primary or
  /// secondary is held.
  pub fn held_zoom_factor(&self, config: &ViewConfig) -> Option<f32> {
    match (self.primary, self.secondary) {
      (true, false) => Some(config.zoom_in_factor),
      (false, true) => Some(config.zoom_out_factor),
      _ => None,
    }
  }

  /// The debug camera is shown while primary and secondary are both held.
  #[inline]
  pub fn debug_camera(&self) -> bool {
    self.primary && self.secondary
  }
}

/// Translates pointer events into camera updates.
#[derive(Clone, Debug)]
pub struct InputMapper {
  buttons: ButtonState,
  detail_finer_factor: f32,
  detail_coarser_factor: f32,
}

impl InputMapper {
  pub fn new(config: &ViewConfig) -> Self {
    Self {
      buttons: ButtonState::default(),
      detail_finer_factor: config.detail_finer_factor,
      detail_coarser_factor: config.detail_coarser_factor,
    }
  }

  /// Pointer moved to `(x, y)` in viewport pixels, y growing downward.
  pub fn on_pointer_move(&mut self, camera: &mut OrbitCamera, x: f32, y: f32) {
    camera.set_orbit(x, y);
  }

  /// A button with numeric `id` changed state.
  ///
  /// Returns false when the id is not one of the recognised buttons.
  pub fn on_button_change(&mut self, camera: &mut OrbitCamera, id: u32, pressed: bool) -> bool {
    let Some(button) = PointerButton::from_id(id) else {
      return false;
    };

    match button {
      PointerButton::Primary => self.buttons.primary = pressed,
      PointerButton::Middle => self.buttons.middle = pressed,
      PointerButton::Secondary => self.buttons.secondary = pressed,
      PointerButton::WheelUp => {
        if pressed {
          camera.set_detail(camera.detail() * self.detail_finer_factor);
        }
        return true;
      }
      PointerButton::WheelDown => {
        if pressed {
          camera.set_detail(camera.detail() * self.detail_coarser_factor);
        }
        return true;
      }
    }

    // Toggling the debug camera must redraw even without a recompute
    camera.mark_moved();
    true
  }

  #[inline]
  pub fn buttons(&self) -> ButtonState {
    self.buttons
  }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;
