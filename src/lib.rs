//! BioGame home screen crate.
//!
//! Renders the home screen of the BioGame learning app (top bar, mini-game
//! row, progress ladder) into the page and makes its rows drag-scrollable with
//! mouse or touch. Static content lives in `catalog`, the pure renderer in
//! `view` and the host-independent drag algorithm in `drag`; `dom` and
//! `screen` are the browser glue.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod config;
pub mod dom;
pub mod drag;
pub mod error;
mod screen;
pub mod view;

pub use catalog::{Catalog, MINI_GAME_NAMES, MINI_GAMES, MiniGame, MiniGameTile, RANKS, Rank};
pub use config::{ScreenConfig, Variant};
pub use drag::{DragController, DragState, GrabGuard, PageChrome, ScrollRow};
pub use error::ConfigError;
pub use view::{HomeView, Node, RowKind};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the home screen with default settings. `variant` is `"full"`
/// (default when empty) or `"compact"`.
#[wasm_bindgen]
pub fn mount_home(variant: &str) -> Result<(), JsValue> {
    let variant: Variant = variant.parse()?;
    screen::mount(ScreenConfig::with_variant(variant))
}

/// Mount the home screen from a typed config. On error the previously mounted
/// screen and the document metadata are left untouched.
pub fn mount_screen(config: ScreenConfig) -> Result<(), JsValue> {
    screen::mount(config)
}

/// Mount the home screen from a JSON `ScreenConfig`; missing fields keep their
/// defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn mount_home_with_config(json: &str) -> Result<(), JsValue> {
    screen::mount(ScreenConfig::from_json(json)?)
}

#[wasm_bindgen]
pub fn unmount_home() {
    screen::unmount();
}

/// True while any row of the mounted screen is being dragged.
#[wasm_bindgen]
pub fn is_dragging() -> bool {
    screen::is_dragging()
}
