use serde::{Deserialize, Serialize};

// ── Primitives ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    /// Square of side `size` with its top-left corner at (x, y).
    pub const fn square(x: f32, y: f32, size: f32) -> Self {
        Rect { x, y, width: size, height: size }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

pub type PlayerId = usize;
pub type Frame = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    /// Raylib palette value as 0xRRGGBBAA.
    pub fn rgba(self) -> u32 {
        match self {
            Color::Red => 0xE62937FF,
            Color::Blue => 0x0079F1FF,
            Color::Yellow => 0xFDF900FF,
            Color::Green => 0x00E430FF,
        }
    }
}

// ── Input ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    LeftX,
    LeftY,
}

/// Gamepad buttons by physical position, independent of the printed label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PadButton {
    RightFaceDown = 0,
    RightFaceRight = 1,
    RightFaceLeft = 2,
    RightFaceUp = 3,
    Start = 4,
    Select = 5,
}

impl PadButton {
    pub const ALL: [PadButton; 6] = [
        PadButton::RightFaceDown,
        PadButton::RightFaceRight,
        PadButton::RightFaceLeft,
        PadButton::RightFaceUp,
        PadButton::Start,
        PadButton::Select,
    ];

    /// Bit for this button in a `PadState::buttons` mask.
    pub fn mask(self) -> u16 {
        1 << self as u8
    }
}

// ── Player ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Facing {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Facing {
    /// Starting direction: even ids face right, odd ids face left.
    pub fn for_player(id: PlayerId) -> Self {
        if id % 2 == 0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    /// Unit travel vector for a bullet. Up is +y.
    pub fn unit(self) -> (f32, f32) {
        match self {
            Facing::Right => (1.0, 0.0),
            Facing::Left => (-1.0, 0.0),
            Facing::Up => (0.0, 1.0),
            Facing::Down => (0.0, -1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub hitbox: Rect,
    /// Frames since the bullet became active.
    pub age: u32,
    pub speed: f32,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub ready: bool,
    pub id: PlayerId,
    pub facing: Facing,
    pub speed: f32,
    pub hitbox: Rect,
    /// `None` when the device name matched no known controller.
    pub fire_button: Option<PadButton>,
    pub shot: bool,
    pub shoot_timer: u32,
    pub bullet: Bullet,
}

// ── Config ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub move_speed: f32,
    pub tilt_dir_change: f32,
    pub shooting_cooldown: u32,
    pub bullet_duration: u32,
    pub bullet_speed: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub player_size: f32,
    pub bullet_spawn_size: f32,
    pub bullet_idle_size: f32,
}

// ── Draw output ─────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Color,
}
