use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::{bridge::RenderBackend, descriptor::ConnectionDescriptor, dom, error::FrameError};

#[wasm_bindgen(module = "@reactpy/client")]
extern "C" {
    /// `SimpleReactPyClient` from `@reactpy/client`.
    #[derive(Debug, Clone)]
    pub type SimpleReactPyClient;

    #[wasm_bindgen(constructor, catch, js_class = "SimpleReactPyClient")]
    fn new(props: &JsValue) -> Result<SimpleReactPyClient, JsValue>;

    #[wasm_bindgen(catch, js_name = mount)]
    fn mount_client(element: &HtmlElement, client: &SimpleReactPyClient) -> Result<(), JsValue>;
}

/// Renders frames with `@reactpy/client`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReactPyBackend;

impl RenderBackend for ReactPyBackend {
    type Target = HtmlElement;
    type Client = SimpleReactPyClient;

    fn connect(&self, descriptor: &ConnectionDescriptor) -> Result<Self::Client, FrameError> {
        let props = js_sys::JSON::parse(&descriptor.to_json()?)?;
        Ok(SimpleReactPyClient::new(&props)?)
    }

    fn mount(&self, target: &HtmlElement, client: &Self::Client) -> Result<(), FrameError> {
        Ok(mount_client(target, client)?)
    }

    fn release(&self, target: &HtmlElement, client: Self::Client) -> Result<(), FrameError> {
        drop(client);
        dom::clear(target)
    }
}
