//! # Cubeland - Procedural Voxel Sandbox
//!
//! A block world generated chunk by chunk from noise, stored sparsely and
//! edited in real time.

pub mod blocks;
pub mod config;
pub mod entity;
pub mod game;
pub mod world;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use game::GameState;

/// Common imports for internal use
pub mod prelude {
    pub use crate::blocks::BlockType;
    pub use crate::world::{BlockStore, ChunkGenerator, WorldGenConfig, CHUNK_SIZE};
    pub use glam::{IVec3, Vec3};
}

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in the browser console
    console_error_panic_hook::set_once();

    // Initialize logging for WASM
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to initialize logger: {}", e)))?;

    log::info!("Cubeland WASM module initialized");
    Ok(())
}
