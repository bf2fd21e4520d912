use padarena_core::{
    create_initial_state, draw_frame, step_mut, DrawList, FrameInput, GameConfig, GameState,
    PadState, N_PLAYERS, NULL_PAD,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Install panic hook so WASM panics show in browser console instead of silently freezing.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// JSON-serializable pad snapshot from the browser Gamepad API
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsPad {
    #[serde(default)]
    connected: bool,
    #[serde(default)]
    left_x: f32,
    #[serde(default)]
    left_y: f32,
    #[serde(default)]
    buttons: u16,
}

impl From<&JsPad> for PadState {
    fn from(p: &JsPad) -> Self {
        PadState {
            connected: p.connected,
            left_x: p.left_x,
            left_y: p.left_y,
            buttons: p.buttons,
        }
    }
}

/// One rectangle for the canvas, with a CSS color string
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: String,
}

/// JSON-serializable player summary for the HUD
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPlayer {
    id: usize,
    ready: bool,
    x: f32,
    y: f32,
    facing: u8,
    can_fire: bool,
    shot: bool,
    bullet_active: bool,
    bullet_age: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsState {
    frame: u32,
    players: Vec<JsPlayer>,
}

fn state_to_js(s: &GameState) -> JsState {
    JsState {
        frame: s.frame,
        players: s
            .players
            .iter()
            .map(|p| JsPlayer {
                id: p.id,
                ready: p.ready,
                x: p.hitbox.x,
                y: p.hitbox.y,
                facing: p.facing as u8,
                can_fire: p.fire_button.is_some(),
                shot: p.shot,
                bullet_active: p.bullet.active,
                bullet_age: p.bullet.age,
            })
            .collect(),
    }
}

fn pads_from_js(pads: &[JsPad]) -> [PadState; N_PLAYERS] {
    let mut out = [NULL_PAD; N_PLAYERS];
    for (i, p) in pads.iter().enumerate().take(N_PLAYERS) {
        out[i] = p.into();
    }
    out
}

#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
    config: GameConfig,
    names: [Option<String>; N_PLAYERS],
    canvas: DrawList,
}

impl WasmGame {
    fn step_pads(&mut self, pads: &[PadState; N_PLAYERS]) {
        step_mut(&mut self.inner, &FrameInput::new(&self.names, pads), &self.config);
    }
}

#[wasm_bindgen]
impl WasmGame {
    /// Create the four players.
    /// `names_json`: array of up to four device names (or null per empty slot).
    /// `pads_json`: array of pads present at startup, `{connected, leftX, leftY, buttons}`.
    #[wasm_bindgen(constructor)]
    pub fn new(names_json: &str, pads_json: &str) -> WasmGame {
        let given: Vec<Option<String>> = serde_json::from_str(names_json).unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("bad device names, assuming none: {e}").into());
            Vec::new()
        });
        let mut names: [Option<String>; N_PLAYERS] = Default::default();
        for (slot, name) in given.into_iter().enumerate().take(N_PLAYERS) {
            names[slot] = name;
        }
        let pads: Vec<JsPad> = serde_json::from_str(pads_json).unwrap_or_default();
        let pads = pads_from_js(&pads);

        let config = GameConfig::default();
        let inner = create_initial_state(&FrameInput::new(&names, &pads), &config);
        WasmGame {
            inner,
            config,
            names,
            canvas: DrawList::new(),
        }
    }

    /// Step the simulation by one frame from a JSON array of pad snapshots.
    /// Malformed input counts as every pad unplugged.
    pub fn step(&mut self, pads_json: &str) {
        let pads: Vec<JsPad> = serde_json::from_str(pads_json).unwrap_or_default();
        self.step_pads(&pads_from_js(&pads));
    }

    /// Step one frame for a single connected pad in slot 0; other slots absent.
    pub fn step_solo(&mut self, left_x: f32, left_y: f32, buttons: u16) {
        let mut pads = [NULL_PAD; N_PLAYERS];
        pads[0] = PadState {
            connected: true,
            left_x,
            left_y,
            buttons,
        };
        self.step_pads(&pads);
    }

    /// Rectangles to draw this frame, in order.
    pub fn draw_list(&mut self) -> JsValue {
        self.canvas.clear();
        draw_frame(&self.inner, &mut self.canvas);
        let rects: Vec<JsRect> = self
            .canvas
            .commands
            .iter()
            .map(|c| JsRect {
                x: c.rect.x,
                y: c.rect.y,
                width: c.rect.width,
                height: c.rect.height,
                color: format!("#{:08x}", c.color.rgba()),
            })
            .collect();
        serde_wasm_bindgen::to_value(&rects).unwrap_or(JsValue::NULL)
    }

    /// Export player summaries for the HUD.
    pub fn export_state(&self) -> JsValue {
        let js = state_to_js(&self.inner);
        serde_wasm_bindgen::to_value(&js).unwrap_or(JsValue::NULL)
    }

    /// Full state as JSON, for saving alongside a recording.
    pub fn export_json(&self) -> String {
        serde_json::to_string(&self.inner).unwrap_or_default()
    }

    // Quick accessors
    pub fn frame(&self) -> u32 { self.inner.frame }
    pub fn window_width(&self) -> f32 { self.config.window_width }
    pub fn window_height(&self) -> f32 { self.config.window_height }
}
