//! Keyboard input handling

use web_sys::KeyboardEvent;

/// Physical key that flaps while playing and starts a game from the menu
pub const JUMP_CODE: &str = "Space";

/// Check whether a key code is the jump key
pub fn is_jump_key(code: &str) -> bool {
    code == JUMP_CODE
}

/// Extract the physical key code from a keyboard event
pub fn get_code_from_event(event: &KeyboardEvent) -> String {
    event.code()
}
