//! requestAnimationFrame driver. The tick closure re-arms itself; frame
//! pacing lives in `Scene::tick`, which skips (returns `None`) whenever
//! the host refresh outruns the capped frame rate.

use helix_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::surface::CanvasSurface;

pub fn start_loop(scene: Rc<RefCell<Scene>>, surface: Rc<CanvasSurface>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if let Some(cmds) = scene.borrow_mut().tick(now) {
            surface.apply(&cmds);
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
