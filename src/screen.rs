//! Mounted home screen: DOM tree, row listeners and the drag controller.
//!
//! Runtime state lives in a thread-local slot; every DOM callback reaches it
//! through `with_screen`. Rows are re-resolved by id on each event so a row
//! removed mid-drag degrades to a no-op.

use std::cell::RefCell;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::catalog::Catalog;
use crate::config::ScreenConfig;
use crate::dom::{self, DocumentSession};
use crate::drag::DragController;
use crate::view::{HomeView, RowKind, class};

struct Screen {
    root: Element,
    controller: DragController<RowKind, DocumentSession>,
    _row_listeners: Vec<EventListener>,
}

thread_local! {
    static SCREEN: RefCell<Option<Screen>> = const { RefCell::new(None) };
}

fn with_screen<T>(f: impl FnOnce(&mut Screen) -> T) -> Option<T> {
    SCREEN.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Render the screen and wire its draggable rows. Replaces any mounted screen.
pub fn mount(config: ScreenConfig) -> Result<(), JsValue> {
    let catalog = Catalog::builtin();
    config.validate(&catalog)?;

    let doc = dom::document()?;
    let container: Element = match &config.root_id {
        Some(id) => doc
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{id}'")))?,
        None => doc
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .into(),
    };
    let tree = HomeView::new(&config, catalog).render(|_| false);
    let root = dom::build(&doc, &tree)?;

    unmount();
    dom::apply_document_meta(&doc, &config)?;
    container.append_child(&root)?;

    let rows = config.variant.draggable_rows();
    let mut row_listeners = Vec::with_capacity(rows.len() * 2);
    for &kind in rows {
        let Some(row) = dom::row_element(kind.element_id()) else {
            continue;
        };
        for press in ["mousedown", "touchstart"] {
            row_listeners.push(EventListener::new_with_options(
                &row,
                press,
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| on_row_press(kind, event),
            ));
        }
    }

    SCREEN.with(|cell| {
        cell.replace(Some(Screen {
            root,
            controller: DragController::new(rows.iter().copied()),
            _row_listeners: row_listeners,
        }))
    });
    gloo::console::log!(
        "home screen mounted",
        format!("{:?}", config.variant),
        rows.len()
    );
    Ok(())
}

/// Tear down the mounted screen, releasing any live drag session.
pub fn unmount() {
    let Some(screen) = SCREEN.with(|cell| cell.borrow_mut().take()) else {
        return;
    };
    screen.root.remove();
    drop(screen);
    gloo::console::log!("home screen unmounted");
}

pub fn is_dragging() -> bool {
    with_screen(|screen| screen.controller.is_active()).unwrap_or(false)
}

fn on_row_press(kind: RowKind, event: &Event) {
    let Some(pointer_x) = dom::page_x(event) else {
        return;
    };
    let Some(row) = dom::row_element(kind.element_id()) else {
        return;
    };
    event.prevent_default();
    let started = with_screen(|screen| {
        screen
            .controller
            .begin(kind, pointer_x, Some(&row), acquire_session)
    })
    .unwrap_or(false);
    if started {
        let _ = row.class_list().add_1(class::DRAGGING);
    }
}

fn acquire_session() -> Option<DocumentSession> {
    let doc = dom::document().ok()?;
    let session = DocumentSession::acquire(&doc, on_document_move, on_document_release);
    if session.is_none() {
        gloo::console::warn!("drag session unavailable: document has no body");
    }
    session
}

fn on_document_move(event: &Event) {
    let Some(pointer_x) = dom::page_x(event) else {
        return;
    };
    let wrote = with_screen(|screen| {
        screen
            .controller
            .update(pointer_x, |kind| dom::row_element(kind.element_id()))
    })
    .unwrap_or(false);
    if wrote {
        event.prevent_default();
    }
}

fn on_document_release(_event: &Event) {
    let ended = with_screen(|screen| screen.controller.end()).unwrap_or_default();
    for kind in ended {
        if let Some(row) = dom::row_element(kind.element_id()) {
            let _ = row.class_list().remove_1(class::DRAGGING);
        }
    }
}
