#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use reactpy_frame::{
    BaseUrl, ConnectionDescriptor, FrameConfig, FrameError, FrameSource, RenderBackend,
    register_frame,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Connect(ConnectionDescriptor),
    Mount,
    Release,
}

#[derive(Debug, Clone, Default)]
struct RecordingBackend {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl RecordingBackend {
    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl RenderBackend for RecordingBackend {
    type Target = HtmlElement;
    type Client = ();

    fn connect(&self, descriptor: &ConnectionDescriptor) -> Result<(), FrameError> {
        self.calls.borrow_mut().push(Call::Connect(descriptor.clone()));
        Ok(())
    }

    fn mount(&self, target: &HtmlElement, _client: &()) -> Result<(), FrameError> {
        target.set_inner_html("<p>mounted</p>");
        self.calls.borrow_mut().push(Call::Mount);
        Ok(())
    }

    fn release(&self, target: &HtmlElement, _client: ()) -> Result<(), FrameError> {
        target.set_inner_html("");
        self.calls.borrow_mut().push(Call::Release);
        Ok(())
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn create(tag: &str, file: Option<&str>) -> HtmlElement {
    let element: HtmlElement = document().create_element(tag).unwrap().unchecked_into();
    if let Some(file) = file {
        element.set_attribute("file", file).unwrap();
    }
    element
}

fn register(tag: &str) -> RecordingBackend {
    let backend = RecordingBackend::default();
    let config = FrameConfig::new()
        .with_tag_name(tag)
        .with_base_url(BaseUrl::Fixed("https://docs.example.com".to_string()));
    register_frame(&config, backend.clone()).unwrap();
    backend
}

#[wasm_bindgen_test]
fn attaching_mounts_into_the_element() {
    let backend = register("frame-mounts");
    let element = create("frame-mounts", Some("guide/intro.md"));

    document().body().unwrap().append_child(&element).unwrap();

    let route = web_sys::window().unwrap().location().pathname().unwrap();
    assert_eq!(
        backend.calls(),
        vec![
            Call::Connect(ConnectionDescriptor::new(
                "https://docs.example.com",
                route,
                "guide/intro.md"
            )),
            Call::Mount,
        ]
    );
    assert_eq!(element.inner_html(), "<p>mounted</p>");
}

#[wasm_bindgen_test]
fn missing_file_never_connects() {
    let backend = register("frame-missing-file");
    let element = create("frame-missing-file", None);

    // The thrown error is reported to the page, not to the caller.
    document().body().unwrap().append_child(&element).unwrap();

    assert!(backend.calls().is_empty());
    assert_eq!(element.inner_html(), "");
}

#[wasm_bindgen_test]
fn removing_the_element_releases_the_client() {
    let backend = register("frame-releases");
    let element = create("frame-releases", Some("a b&c"));
    let body = document().body().unwrap();

    body.append_child(&element).unwrap();
    body.remove_child(&element).unwrap();
    body.append_child(&element).unwrap();

    let calls = backend.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[2], Call::Release);
    assert_eq!(calls[0], calls[3]);
    match &calls[3] {
        Call::Connect(descriptor) => assert_eq!(descriptor.query(), "?file=a%20b%26c"),
        other => panic!("expected a connect call, got {other:?}"),
    }
}

#[wasm_bindgen_test]
fn registering_a_tag_twice_fails() {
    register("frame-twice");
    let config = FrameConfig::new().with_tag_name("frame-twice");

    let err = register_frame(&config, RecordingBackend::default()).unwrap_err();

    assert_eq!(err, FrameError::AlreadyRegistered("frame-twice".to_string()));
}

#[wasm_bindgen_test]
fn elements_read_the_document_location() {
    let element = create("div", Some("x.py"));
    let location = web_sys::window().unwrap().location();

    assert_eq!(element.attribute("file").as_deref(), Some("x.py"));
    assert_eq!(element.current_route().unwrap(), location.pathname().unwrap());
}
