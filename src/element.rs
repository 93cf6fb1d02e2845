//! Custom element registration.
//!
//! The element class itself is a few lines of JavaScript that forward
//! `connectedCallback` and `disconnectedCallback` to Rust. Frames are kept per
//! registration and looked up by element identity.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::{
    bridge::{Bridge, Frame, RenderBackend},
    config::FrameConfig,
    dom,
    error::FrameError,
};

type Callback = Closure<dyn FnMut(HtmlElement) -> Result<(), JsValue>>;

#[wasm_bindgen(inline_js = r#"
export function defineFrameElement(tagName, attach, detach) {
    customElements.define(tagName, class extends HTMLElement {
        connectedCallback() {
            attach(this);
        }

        disconnectedCallback() {
            detach(this);
        }
    });
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = defineFrameElement)]
    fn define_frame_element(
        tag_name: &str,
        attach: &Callback,
        detach: &Callback,
    ) -> Result<(), JsValue>;
}

struct Frames<B: RenderBackend> {
    bridge: Bridge<B>,
    frames: Vec<(HtmlElement, Frame<B::Client>)>,
}

impl<B> Frames<B>
where
    B: RenderBackend<Target = HtmlElement>,
{
    fn position(&self, element: &HtmlElement) -> Option<usize> {
        self.frames.iter().position(|(known, _)| known == element)
    }

    fn attach(&mut self, element: HtmlElement) -> Result<(), FrameError> {
        let index = self.position(&element).unwrap_or_else(|| {
            self.frames.push((element, Frame::new()));
            self.frames.len() - 1
        });
        let (element, frame) = &mut self.frames[index];
        frame.attach(&self.bridge, element)
    }

    fn detach(&mut self, element: &HtmlElement) -> Result<(), FrameError> {
        let Some(index) = self.position(element) else {
            return Ok(());
        };
        let (element, mut frame) = self.frames.swap_remove(index);
        frame.detach(&self.bridge, &element)
    }
}

fn callback<B, F>(frames: &Rc<RefCell<Frames<B>>>, mut f: F) -> Callback
where
    B: RenderBackend<Target = HtmlElement> + 'static,
    F: FnMut(&mut Frames<B>, HtmlElement) -> Result<(), FrameError> + 'static,
{
    let frames = Rc::clone(frames);
    Callback::new(move |element: HtmlElement| -> Result<(), JsValue> {
        let mut frames = frames
            .try_borrow_mut()
            .map_err(|_| FrameError::Js("re-entrant frame attachment".to_string()))?;
        f(&mut *frames, element).map_err(JsValue::from)
    })
}

/// Defines the frame element with `backend` rendering its frames.
///
/// The base URL is resolved here, once, and shared by every frame of this tag.
///
/// # Errors
///
/// Fails if the configuration is invalid, the tag is already defined, or the
/// document is unavailable.
pub fn register_frame<B>(config: &FrameConfig, backend: B) -> Result<(), FrameError>
where
    B: RenderBackend<Target = HtmlElement> + 'static,
{
    config.validate()?;
    if dom::is_defined(&config.tag_name)? {
        return Err(FrameError::AlreadyRegistered(config.tag_name.clone()));
    }

    let base_url = config.resolve_base_url(dom::document_origin)?;
    let frames = Rc::new(RefCell::new(Frames {
        bridge: Bridge::new(base_url.as_str(), backend),
        frames: Vec::new(),
    }));

    let attach = callback(&frames, Frames::<B>::attach);
    let detach = callback(&frames, |frames, element| frames.detach(&element));
    define_frame_element(&config.tag_name, &attach, &detach)?;
    // The element class lives as long as the page.
    attach.forget();
    detach.forget();

    tracing::info!(tag = %config.tag_name, %base_url, "frame element registered");
    Ok(())
}
