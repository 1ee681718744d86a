//! Browser host: materializes view nodes and provides the DOM side of the
//! drag controller (rows, body styling, document listeners).

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, TouchEvent, window};

use crate::config::ScreenConfig;
use crate::drag::{GrabGuard, PageChrome, ScrollRow};
use crate::view::Node;

pub fn document() -> Result<Document, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    win.document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Create the element tree for `node` (detached).
pub fn build(doc: &Document, node: &Node) -> Result<Element, JsValue> {
    let el = doc.create_element(node.tag)?;
    if !node.classes.is_empty() {
        el.set_class_name(&node.class_attr());
    }
    for (name, value) in &node.attrs {
        el.set_attribute(name, value)?;
    }
    if let Some(text) = &node.text {
        el.set_text_content(Some(text.as_str()));
    }
    for child in &node.children {
        let child_el = build(doc, child)?;
        el.append_child(&child_el)?;
    }
    Ok(el)
}

/// Title, description meta, `lang` and the optional stylesheet link.
pub fn apply_document_meta(doc: &Document, config: &ScreenConfig) -> Result<(), JsValue> {
    doc.set_title(&config.document_title);
    if let Some(html) = doc.document_element() {
        html.set_attribute("lang", "en")?;
    }
    let Some(head) = doc.head() else {
        return Ok(());
    };
    let meta = match doc.query_selector("meta[name=\"description\"]")? {
        Some(el) => el,
        None => {
            let el = doc.create_element("meta")?;
            el.set_attribute("name", "description")?;
            head.append_child(&el)?;
            el
        }
    };
    meta.set_attribute("content", &config.description)?;

    if let Some(href) = &config.stylesheet {
        if doc.get_element_by_id("biogame-home-styles").is_none() {
            let link = doc.create_element("link")?;
            link.set_id("biogame-home-styles");
            link.set_attribute("rel", "stylesheet")?;
            link.set_attribute("href", href)?;
            head.append_child(&link)?;
        }
    }
    Ok(())
}

/// Row element by id, `None` when not mounted.
pub fn row_element(id: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

impl ScrollRow for HtmlElement {
    fn left_offset(&self) -> f64 {
        self.offset_left() as f64
    }
    fn scroll_offset(&self) -> f64 {
        self.scroll_left() as f64
    }
    fn set_scroll_offset(&self, value: f64) {
        // scrollLeft clamps to the scrollable range on assignment.
        self.set_scroll_left(value.round() as i32);
    }
}

/// Pointer X in page coordinates for mouse and touch events.
pub fn page_x(event: &Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(mouse.page_x() as f64);
    }
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(touch.page_x() as f64)
}

/// `cursor` and `user-select` on `<body>`.
pub struct BodyChrome {
    body: HtmlElement,
}

impl BodyChrome {
    pub fn new(doc: &Document) -> Option<Self> {
        doc.body().map(|body| Self { body })
    }
}

impl PageChrome for BodyChrome {
    fn grab(&self) {
        let style = self.body.style();
        let _ = style.set_property("cursor", "grabbing");
        let _ = style.set_property("user-select", "none");
    }

    fn release(&self) {
        let style = self.body.style();
        let _ = style.remove_property("cursor");
        let _ = style.remove_property("user-select");
    }
}

/// Live drag session: the document-level listeners plus the grabbing styling.
/// Dropping it detaches the listeners and restores the body style.
pub struct DocumentSession {
    _listeners: Vec<EventListener>,
    _grab: GrabGuard<BodyChrome>,
}

impl DocumentSession {
    /// Subscribe `on_move` to mouse/touch moves and `on_end` to mouse/touch
    /// releases on the document.
    pub fn acquire<M, E>(doc: &Document, on_move: M, on_end: E) -> Option<Self>
    where
        M: Fn(&Event) + Clone + 'static,
        E: Fn(&Event) + Clone + 'static,
    {
        let chrome = BodyChrome::new(doc)?;
        let active = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        };
        let mut listeners = Vec::with_capacity(5);
        for kind in ["mousemove", "touchmove"] {
            listeners.push(EventListener::new_with_options(
                doc,
                kind,
                active,
                on_move.clone(),
            ));
        }
        for kind in ["mouseup", "touchend", "touchcancel"] {
            listeners.push(EventListener::new(doc, kind, on_end.clone()));
        }
        gloo::console::log!("drag session acquired");
        Some(Self {
            _listeners: listeners,
            _grab: GrabGuard::new(chrome),
        })
    }
}

impl Drop for DocumentSession {
    fn drop(&mut self) {
        gloo::console::log!("drag session released");
    }
}
