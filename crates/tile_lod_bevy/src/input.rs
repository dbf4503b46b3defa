//! Window input forwarded to the terrain view.
//!
//! Bevy reports cursor positions in logical pixels from the window's top
//! left corner, which is the convention the orbit mapping expects. Mouse
//! buttons and wheel steps are translated into the numbered buttons of
//! [`PointerButton`].

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use tile_lod::PointerButton;

use crate::resources::TileLodView;

/// Numbered button for a physical mouse button.
pub fn mouse_button_id(button: MouseButton) -> Option<u32> {
  let button = match button {
    MouseButton::Left => PointerButton::Primary,
    MouseButton::Middle => PointerButton::Middle,
    MouseButton::Right => PointerButton::Secondary,
    _ => return None,
  };
  Some(button.id())
}

/// Numbered button for one wheel event, by the sign of its vertical scroll.
pub fn wheel_button_id(scroll_y: f32) -> Option<u32> {
  if scroll_y > 0.0 {
    Some(PointerButton::WheelUp.id())
  } else if scroll_y < 0.0 {
    Some(PointerButton::WheelDown.id())
  } else {
    None
  }
}

/// System forwarding cursor, button and wheel input to [`TileLodView`].
pub fn map_pointer_input(
  mut cursor_moved: MessageReader<CursorMoved>,
  mut wheel: MessageReader<MouseWheel>,
  mouse_button: Res<ButtonInput<MouseButton>>,
  mut view: ResMut<TileLodView>,
) {
  // Only the latest position matters for the orbit
  if let Some(event) = cursor_moved.read().last() {
    view.on_pointer_move(event.position.x, event.position.y);
  }

  for &button in mouse_button.get_just_pressed() {
    if let Some(id) = mouse_button_id(button) {
      view.on_button_change(id, true);
    }
  }
  for &button in mouse_button.get_just_released() {
    if let Some(id) = mouse_button_id(button) {
      view.on_button_change(id, false);
    }
  }

  for event in wheel.read() {
    if let Some(id) = wheel_button_id(event.y) {
      view.on_button_change(id, true);
      view.on_button_change(id, false);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mouse_buttons_map_to_pointer_ids() {
    assert_eq!(mouse_button_id(MouseButton::Left), Some(0));
    assert_eq!(mouse_button_id(MouseButton::Middle), Some(1));
    assert_eq!(mouse_button_id(MouseButton::Right), Some(2));
    assert_eq!(mouse_button_id(MouseButton::Back), None);
    assert_eq!(mouse_button_id(MouseButton::Other(7)), None);
  }

  #[test]
  fn test_wheel_direction_maps_to_pointer_ids() {
    assert_eq!(wheel_button_id(1.0), Some(3));
    assert_eq!(wheel_button_id(0.25), Some(3));
    assert_eq!(wheel_button_id(-2.0), Some(4));
    assert_eq!(wheel_button_id(0.0), None);
  }
}
