//! Browser bindings for a JavaScript renderer

use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::{GameState, Ray};
use crate::world::PointerButton;

/// A headless game the page renders by polling `blocks()`
#[wasm_bindgen]
pub struct WasmWorld {
    state: GameState,
}

#[wasm_bindgen]
impl WasmWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<WasmWorld, JsValue> {
        let config = GameConfig {
            seed,
            ..GameConfig::default()
        };
        let state = GameState::new(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to create world: {}", e)))?;
        Ok(WasmWorld { state })
    }

    #[wasm_bindgen(js_name = blockCount)]
    pub fn block_count(&self) -> usize {
        self.state.store().len()
    }

    /// Flat `[x, y, z, block_id, ...]` list of every stored block
    pub fn blocks(&self) -> Vec<i32> {
        let mut flat = Vec::with_capacity(self.state.store().len() * 4);
        for (pos, record) in self.state.store().iter() {
            flat.extend_from_slice(&[pos.x, pos.y, pos.z, record.block_type.id() as i32]);
        }
        flat
    }

    /// Queue a click along the camera ray. `button` is the DOM button index.
    #[wasm_bindgen(js_name = queueEdit)]
    #[allow(clippy::too_many_arguments)]
    pub fn queue_edit(
        &mut self,
        origin_x: f32,
        origin_y: f32,
        origin_z: f32,
        dir_x: f32,
        dir_y: f32,
        dir_z: f32,
        button: u16,
    ) {
        if let Some(button) = PointerButton::from_index(button) {
            let ray = Ray::new(
                Vec3::new(origin_x, origin_y, origin_z),
                Vec3::new(dir_x, dir_y, dir_z),
            );
            self.state.queue_edit(ray, button);
        }
    }

    /// Apply queued edits and advance entities. Returns the number of edits applied.
    pub fn tick(&mut self) -> usize {
        self.state.tick().edits_applied
    }
}
