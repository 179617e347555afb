//! Browser startup: configuration, services, and the controller's lifetime.
//!
//! The controller is installed once the DOM is parsed and parked in a
//! thread-local so its handles outlive `start()`. `pagehide` shuts it down,
//! which cancels a submission still waiting on its timer.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::config::PageConfig;
use crate::controller::{PageController, Services, document_parsed};
use crate::error::PageError;
use crate::surface::web::WebSurface;
use crate::util::clock::BrowserClock;
use crate::util::storage::LocalStorage;
use crate::util::task::BrowserSpawner;
use crate::util::timer::BrowserTimer;

/// Id of the optional `<script type="application/json">` config island.
const CONFIG_SCRIPT_ID: &str = "folio-config";

thread_local! {
    static CONTROLLER: RefCell<Option<PageController<WebSurface>>> = const { RefCell::new(None) };
}

pub(crate) fn run() {
    let Some(surface) = WebSurface::from_window() else {
        log::error!("boot: no window or document, page controller not installed");
        return;
    };

    if document_parsed(&surface.document().ready_state()) {
        install(&surface);
        return;
    }

    let deferred = surface.clone();
    let ready = Closure::once(move || install(&deferred));
    match surface.document().add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref()) {
        Ok(()) => ready.forget(),
        Err(err) => log::error!("boot: DOMContentLoaded listener rejected: {err:?}"),
    }
}

fn install(surface: &WebSurface) {
    let cfg = load_config(surface);
    let services = Services {
        store: Rc::new(LocalStorage),
        timer: Rc::new(BrowserTimer),
        spawner: Rc::new(BrowserSpawner),
        clock: Rc::new(BrowserClock),
    };
    let controller = PageController::install(surface, &cfg, services);
    CONTROLLER.with(|slot| slot.replace(Some(controller)));
    watch_pagehide();
}

/// Config from the page's JSON island, or defaults.
fn load_config(surface: &WebSurface) -> PageConfig {
    let Some(raw) = surface.document().get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(cfg) => {
            log::debug!("boot: config loaded from #{CONFIG_SCRIPT_ID}");
            cfg
        }
        Err(err) => {
            log::warn!("boot: {}; using defaults", PageError::from(err));
            PageConfig::default()
        }
    }
}

fn watch_pagehide() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let on_hide = Closure::<dyn Fn()>::new(|| {
        CONTROLLER.with(|slot| {
            if let Some(controller) = slot.borrow().as_ref() {
                controller.shutdown();
            }
        });
    });
    match window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref()) {
        Ok(()) => on_hide.forget(),
        Err(err) => log::warn!("boot: pagehide listener rejected: {err:?}"),
    }
}
