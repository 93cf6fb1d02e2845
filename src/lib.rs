#![doc = include_str!("../README.md")]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

mod bridge;
mod config;
mod descriptor;
mod encoding;
mod error;
mod query;

#[cfg(all(target_arch = "wasm32", feature = "reactpy-client"))]
mod client;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod element;
#[cfg(target_arch = "wasm32")]
pub mod logging;

pub use bridge::{Bridge, FILE_ATTRIBUTE, Frame, FrameSource, FrameState, RenderBackend};
pub use config::{BaseUrl, DEFAULT_TAG_NAME, DevServer, FrameConfig};
pub use descriptor::{ConnectionDescriptor, FILE_PARAM, ServerLocation};
pub use encoding::{decode_component, encode_component};
pub use error::{FrameError, QueryError};
pub use query::FileQuery;

#[cfg(all(target_arch = "wasm32", feature = "reactpy-client"))]
pub use client::{ReactPyBackend, SimpleReactPyClient};
#[cfg(target_arch = "wasm32")]
pub use element::register_frame;

#[cfg(all(target_arch = "wasm32", feature = "reactpy-client"))]
mod exports {
    use wasm_bindgen::prelude::*;

    use crate::{FrameConfig, ReactPyBackend, logging, register_frame};

    /// Defines the frame element, optionally with a configuration object such as
    /// `{ tagName: "docs-frame", devServer: { port: 8001 } }`.
    ///
    /// # Errors
    ///
    /// Throws if the configuration is invalid or the tag is already defined.
    #[wasm_bindgen]
    pub fn register(config: Option<js_sys::Object>) -> Result<(), JsValue> {
        let config = match config {
            Some(object) => {
                let json = js_sys::JSON::stringify(&object)?;
                FrameConfig::from_json(&String::from(json))?
            }
            None => FrameConfig::default(),
        };
        logging::install(&config.log_level);
        register_frame(&config, ReactPyBackend)?;
        Ok(())
    }

    /// Registers `<reactpy-frame>` when the module loads.
    ///
    /// # Errors
    ///
    /// Throws if the element cannot be registered.
    #[cfg(feature = "auto-register")]
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        register(None)
    }
}
