use raylib::prelude::*;
use strata_physics::MoveIntent;

/// WASD movement, Space to jump, Left Shift to run.
pub fn read_intent(rl: &RaylibHandle) -> MoveIntent {
    let axis = |pos: KeyboardKey, neg: KeyboardKey| -> f32 {
        let mut v = 0.0;
        if rl.is_key_down(pos) {
            v += 1.0;
        }
        if rl.is_key_down(neg) {
            v -= 1.0;
        }
        v
    };
    MoveIntent {
        forward: axis(KeyboardKey::KEY_W, KeyboardKey::KEY_S),
        strafe: axis(KeyboardKey::KEY_D, KeyboardKey::KEY_A),
        jump: rl.is_key_down(KeyboardKey::KEY_SPACE),
        run: rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT),
    }
}
