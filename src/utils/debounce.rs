use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Creates a resize listener that runs `callback` once the window has stopped
/// resizing for `delay_ms`.
///
/// Returns `None` when there is no window to listen on. The listener is
/// removed when the returned value is dropped.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = create_debounced_resize_listener(move || redraw(), 150);
///     move || drop(listener)
/// });
/// ```
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        // Dropping a Timeout cancels it
        pending.borrow_mut().take();

        let cb = callback.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
