use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Watch an element's own box with a `ResizeObserver`, so CSS-driven
/// size changes fire the handler even without a window resize. Observer
/// and callback live for the page lifetime.
pub fn observe_element_resize(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Ok(observer) = web::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
        observer.observe(element);
        std::mem::forget(observer);
    }
    closure.forget();
}
