use crate::types::*;

/// Why an active bullet was retired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    Age,
    Bounds,
}

/// Footprint of a freshly created, never-fired bullet: (x, y/2) of the owner.
pub fn spawn_bullet(owner: &Rect, config: &GameConfig) -> Bullet {
    Bullet {
        hitbox: Rect::square(owner.x, owner.y / 2.0, config.bullet_spawn_size),
        age: 0,
        speed: config.bullet_speed,
        active: false,
    }
}

/// Box an idle bullet sits in, anchored at the owner's top-left corner.
pub fn idle_bullet_box(owner: &Rect, config: &GameConfig) -> Rect {
    Rect::square(owner.x, owner.y, config.bullet_idle_size)
}

/// Advance a bullet one frame along `facing` and age it.
pub fn move_bullet(bullet: &Bullet, facing: Facing) -> Bullet {
    let (dx, dy) = facing.unit();
    Bullet {
        hitbox: Rect {
            x: bullet.hitbox.x + dx * bullet.speed,
            y: bullet.hitbox.y + dy * bullet.speed,
            ..bullet.hitbox
        },
        age: bullet.age + 1,
        ..*bullet
    }
}

/// Any edge touching or past the window border counts as out.
pub fn is_out_of_bounds(rect: &Rect, config: &GameConfig) -> bool {
    rect.right() >= config.window_width
        || rect.x <= 0.0
        || rect.bottom() >= config.window_height
        || rect.y <= 0.0
}

/// Age is checked first; both conditions retire the bullet the same way.
pub fn bullet_expiry(bullet: &Bullet, config: &GameConfig) -> Option<Expiry> {
    if bullet.age >= config.bullet_duration {
        Some(Expiry::Age)
    } else if is_out_of_bounds(&bullet.hitbox, config) {
        Some(Expiry::Bounds)
    } else {
        None
    }
}
