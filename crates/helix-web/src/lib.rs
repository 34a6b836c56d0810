#![cfg(target_arch = "wasm32")]
//! Canvas frontend: mounts the helix scene onto `#dna-canvas` if the page
//! has one, otherwise does nothing. Purely decorative; any init failure
//! is logged once and the page simply has no animation.

mod dom;
mod frame;
mod surface;

use helix_core::constants::DEFAULT_SEED;
use helix_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "dna-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    if let Err(e) = init() {
        log::error!("helix background init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    let Some(el) = document.get_element_by_id(CANVAS_ID) else {
        log::info!("no #{CANVAS_ID} element; helix background disabled");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;

    let surface = Rc::new(CanvasSurface::new(canvas.clone())?);
    surface.reset_transform();

    let (scene, first_paint) = Scene::mount(surface.viewport(), DEFAULT_SEED);
    surface.apply(&first_paint);
    let scene = Rc::new(RefCell::new(scene));

    // Observe the canvas itself, not the window: CSS-driven size changes
    // must also rebuild. The callback runs synchronously with respect to
    // the frame loop, so the transform reset and the layout rebuild both
    // land before the next tick draws.
    {
        let surface = surface.clone();
        let scene = scene.clone();
        dom::observe_element_resize(&canvas, move || {
            surface.reset_transform();
            scene.borrow_mut().resize(surface.viewport());
        });
    }

    frame::start_loop(scene, surface);
    Ok(())
}
