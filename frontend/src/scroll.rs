use gloo_console::error;
use invitation::{ScrollSource, ScrollTracker, first_reading, sanitize_offset};
use std::fmt;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

#[derive(Debug)]
pub enum ScrollErr {
	NoWindow,
	Listen(JsValue)
}

impl fmt::Display for ScrollErr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => f.write_str("there's no window to watch"),
			Self::Listen(e) => write!(f, "couldn't listen for scroll events: {e:?}")
		}
	}
}

pub struct WindowScroll {
	window: Window
}

impl WindowScroll {
	pub fn new() -> Result<Self, ScrollErr> {
		web_sys::window()
			.map(|window| Self { window })
			.ok_or(ScrollErr::NoWindow)
	}
}

impl ScrollSource for WindowScroll {
	type Listener = WindowListener;
	type Error = ScrollErr;

	fn read_offset(&self) -> Option<f64> {
		// some older engines only fill in pageYOffset
		first_reading(self.window.scroll_y().ok(), || self.window.page_y_offset().ok())
	}

	fn listen(&self, on_scroll: Box<dyn Fn()>) -> Result<WindowListener, ScrollErr> {
		let callback = Closure::wrap(on_scroll);

		// passive so that we never hold up the browser's own scrolling
		let options = AddEventListenerOptions::new();
		options.set_passive(true);

		self.window
			.add_event_listener_with_callback_and_add_event_listener_options(
				"scroll",
				callback.as_ref().unchecked_ref(),
				&options
			)
			.map_err(ScrollErr::Listen)?;

		Ok(WindowListener { window: self.window.clone(), callback })
	}
}

/// Keeps the js closure alive for exactly as long as it's registered
pub struct WindowListener {
	window: Window,
	callback: Closure<dyn Fn()>
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Err(e) = self.window
			.remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref()) {
			error!(format!("Couldn't stop listening for scroll events: {e:?}"));
		}
	}
}

/// The current vertical scroll offset of the window, re-rendering the calling component whenever
/// it changes. The listener lives exactly as long as the component does.
#[hook]
pub fn use_scroll_offset() -> f64 {
	let offset = use_state_eq(||
		WindowScroll::new().map_or(0.0, |source| sanitize_offset(source.read_offset()))
	);

	{
		let offset = offset.clone();
		use_effect_with((), move |_| {
			let mounted = WindowScroll::new()
				.and_then(|source| ScrollTracker::mount(source, move |y| offset.set(y)));

			let tracker = match mounted {
				Ok(tracker) => Some(tracker),
				Err(e) => {
					// the page still works, the decorations just stay put
					error!(format!("Not tracking scroll position: {e}"));
					None
				}
			};

			move || drop(tracker)
		});
	}

	*offset
}
