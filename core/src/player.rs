use crate::constants::*;
use crate::controllers::resolve_fire_button;
use crate::input::{Canvas, InputSource};
use crate::projectiles::*;
use crate::types::*;

/// Fixed per-slot color; ids outside the four slots have none.
pub fn player_color(id: PlayerId) -> Option<Color> {
    PLAYER_COLORS.get(id).copied()
}

/// Facing after one frame of stick input.
///
/// The four checks are independent and applied in order (up, down, right,
/// left), so a horizontal deflection overrides a vertical one from the same
/// frame. A deflection under `2 * tilt` on both axes keeps `current`.
pub fn infer_facing(current: Facing, x: f32, y: f32, tilt: f32) -> Facing {
    let threshold = 2.0 * tilt;
    let mut facing = current;
    if y > threshold {
        facing = Facing::Up;
    }
    if y < -threshold {
        facing = Facing::Down;
    }
    if x > threshold {
        facing = Facing::Right;
    }
    if x < -threshold {
        facing = Facing::Left;
    }
    facing
}

impl Player {
    pub fn init(id: PlayerId, input: &impl InputSource, config: &GameConfig) -> Player {
        let hitbox = Rect::square(0.0, 0.0, config.player_size);
        let name = input.device_name(id);
        let fire_button = name.and_then(resolve_fire_button);

        match (name, fire_button) {
            (Some(name), None) => {
                tracing::warn!(player = id, name, "unrecognized controller, player cannot fire")
            }
            _ => tracing::debug!(player = id, ?name, ?fire_button, "player initialized"),
        }

        Player {
            ready: input.is_device_ready(id),
            id,
            facing: Facing::for_player(id),
            speed: config.move_speed,
            hitbox,
            fire_button,
            shot: false,
            shoot_timer: 0,
            bullet: spawn_bullet(&hitbox, config),
        }
    }

    /// One frame of movement, facing, cooldown and bullet flight.
    ///
    /// Runs whether or not the device is ready; an absent device reads as
    /// a centered stick with nothing pressed.
    pub fn update(&mut self, input: &impl InputSource, config: &GameConfig) {
        let x = input.axis(self.id, Axis::LeftX);
        let y = input.axis(self.id, Axis::LeftY);

        // Movement has no deadzone
        self.hitbox.x += self.speed * x;
        self.hitbox.y += self.speed * y;

        if x != 0.0 || y != 0.0 {
            self.facing = infer_facing(self.facing, x, y, config.tilt_dir_change);
        }

        // Cooldown
        if self.shot {
            self.shoot_timer += 1;
        }
        if self.shoot_timer >= config.shooting_cooldown {
            self.shot = false;
            self.shoot_timer = 0;
        }

        // Fire
        let firing = self
            .fire_button
            .is_some_and(|button| input.is_button_down(self.id, button));
        if firing {
            if !self.bullet.active {
                tracing::trace!(player = self.id, facing = ?self.facing, "bullet fired");
            }
            self.shot = true;
            self.bullet.active = true;
        }

        // Flight
        if self.bullet.active {
            self.bullet = move_bullet(&self.bullet, self.facing);
            if let Some(reason) = bullet_expiry(&self.bullet, config) {
                tracing::trace!(player = self.id, age = self.bullet.age, ?reason, "bullet expired");
                self.bullet.active = false;
                self.bullet.age = 0;
                self.bullet.hitbox = idle_bullet_box(&self.hitbox, config);
            }
        }
        if !self.bullet.active {
            self.bullet.hitbox = idle_bullet_box(&self.hitbox, config);
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        if !self.ready {
            return;
        }
        let Some(color) = player_color(self.id) else {
            return;
        };
        canvas.draw_rect(self.hitbox, color);
        if self.bullet.active {
            canvas.draw_rect(self.bullet.hitbox, BULLET_COLOR);
        }
    }
}
