use std::rc::Rc;

/// Something that can report how far the page has been scrolled and tell us when that changes.
///
/// The handle returned by [`ScrollSource::listen`] owns the registration: dropping it must
/// unregister the callback, so a listener can never outlive whoever asked for it.
pub trait ScrollSource {
	type Listener;
	type Error;

	/// The raw platform reading. `None` if the platform didn't give us anything usable.
	fn read_offset(&self) -> Option<f64>;

	/// Register `on_scroll` to be called (with no throttling) on every scroll event.
	fn listen(&self, on_scroll: Box<dyn Fn()>) -> Result<Self::Listener, Self::Error>;
}

/// Turns whatever the platform reported into a usable offset. Missing or non-finite readings and
/// rubber-band overscroll (negative offsets) all count as the top of the page.
#[must_use]
pub fn sanitize_offset(raw: Option<f64>) -> f64 {
	match raw {
		Some(offset) if offset.is_finite() && offset > 0.0 => offset,
		_ => 0.0
	}
}

/// Picks the first usable reading out of two equivalent properties. `fallback` is only consulted
/// when `primary` is missing or not a finite number.
pub fn first_reading<F>(primary: Option<f64>, fallback: F) -> Option<f64>
where
	F: FnOnce() -> Option<f64>
{
	primary
		.filter(|offset| offset.is_finite())
		.or_else(fallback)
}

/// Tracks the vertical scroll offset for as long as it's alive.
///
/// Mounting reads the current position right away (so a page that loads halfway down doesn't
/// start at zero) and then registers exactly one listener. Dropping the tracker drops that
/// listener, after which `on_change` is never called again.
pub struct ScrollTracker<S: ScrollSource> {
	_listener: S::Listener
}

impl<S: ScrollSource + 'static> ScrollTracker<S> {
	pub fn mount<F>(source: S, on_change: F) -> Result<Self, S::Error>
	where
		F: Fn(f64) + 'static
	{
		let source = Rc::new(source);
		on_change(sanitize_offset(source.read_offset()));

		let reader = Rc::clone(&source);
		let listener = source.listen(Box::new(move ||
			on_change(sanitize_offset(reader.read_offset()))
		))?;

		Ok(Self { _listener: listener })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::{Cell, RefCell};

	type Callbacks = Rc<RefCell<Vec<(usize, Rc<dyn Fn()>)>>>;

	// stand-in for a browser window: a settable offset plus a list of registered callbacks
	#[derive(Clone, Default)]
	struct FakeViewport {
		offset: Rc<Cell<Option<f64>>>,
		callbacks: Callbacks,
		next_id: Rc<Cell<usize>>,
		fail_listen: bool
	}

	impl FakeViewport {
		fn at(offset: f64) -> Self {
			let viewport = Self::default();
			viewport.offset.set(Some(offset));
			viewport
		}

		fn scroll_to(&self, offset: Option<f64>) {
			self.offset.set(offset);
			let callbacks = self.callbacks.borrow().clone();
			for (_, cb) in callbacks {
				cb();
			}
		}

		fn listener_count(&self) -> usize {
			self.callbacks.borrow().len()
		}
	}

	struct FakeListener {
		id: usize,
		callbacks: Callbacks
	}

	impl Drop for FakeListener {
		fn drop(&mut self) {
			self.callbacks.borrow_mut().retain(|(id, _)| *id != self.id);
		}
	}

	#[derive(Debug, PartialEq)]
	struct Refused;

	impl ScrollSource for FakeViewport {
		type Listener = FakeListener;
		type Error = Refused;

		fn read_offset(&self) -> Option<f64> {
			self.offset.get()
		}

		fn listen(&self, on_scroll: Box<dyn Fn()>) -> Result<FakeListener, Refused> {
			if self.fail_listen {
				return Err(Refused);
			}

			let id = self.next_id.get();
			self.next_id.set(id + 1);
			self.callbacks.borrow_mut().push((id, Rc::from(on_scroll)));
			Ok(FakeListener { id, callbacks: Rc::clone(&self.callbacks) })
		}
	}

	fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl Fn(f64) + 'static) {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		(seen, move |offset| sink.borrow_mut().push(offset))
	}

	#[test]
	fn sanitizing_readings() {
		assert_eq!(sanitize_offset(Some(420.5)), 420.5);
		assert_eq!(sanitize_offset(Some(0.0)), 0.0);
		assert_eq!(sanitize_offset(None), 0.0);
		assert_eq!(sanitize_offset(Some(f64::NAN)), 0.0);
		assert_eq!(sanitize_offset(Some(f64::INFINITY)), 0.0);
		assert_eq!(sanitize_offset(Some(-12.0)), 0.0);
	}

	#[test]
	fn scroll_y_wins_when_present() {
		let consulted = Cell::new(false);
		let reading = first_reading(Some(320.0), || {
			consulted.set(true);
			Some(999.0)
		});

		assert_eq!(reading, Some(320.0));
		assert!(!consulted.get());

		// zero is a real reading, not a reason to look elsewhere
		assert_eq!(first_reading(Some(0.0), || Some(40.0)), Some(0.0));
	}

	#[test]
	fn page_y_offset_fills_in_for_missing_scroll_y() {
		assert_eq!(first_reading(None, || Some(85.0)), Some(85.0));
		assert_eq!(first_reading(Some(f64::NAN), || Some(85.0)), Some(85.0));
		assert_eq!(first_reading(Some(f64::INFINITY), || Some(12.5)), Some(12.5));
	}

	#[test]
	fn neither_property_means_top_of_page() {
		assert_eq!(first_reading(None, || None), None);
		assert_eq!(sanitize_offset(first_reading(None, || None)), 0.0);
		assert_eq!(sanitize_offset(first_reading(Some(f64::NAN), || Some(f64::NAN))), 0.0);
	}

	#[test]
	fn mount_reads_current_position_first() {
		let viewport = FakeViewport::at(750.0);
		let (seen, on_change) = recorder();

		let tracker = ScrollTracker::mount(viewport.clone(), on_change).expect("listen works");

		assert_eq!(*seen.borrow(), vec![750.0]);
		drop(tracker);
	}

	#[test]
	fn missing_reading_starts_at_top() {
		let viewport = FakeViewport::default();
		let (seen, on_change) = recorder();

		let tracker = ScrollTracker::mount(viewport, on_change).expect("listen works");

		assert_eq!(*seen.borrow(), vec![0.0]);
		drop(tracker);
	}

	#[test]
	fn every_event_is_delivered() {
		let viewport = FakeViewport::at(0.0);
		let (seen, on_change) = recorder();
		let tracker = ScrollTracker::mount(viewport.clone(), on_change).expect("listen works");

		for offset in [10.0, 10.0, 250.0, 100.0] {
			viewport.scroll_to(Some(offset));
		}
		viewport.scroll_to(None);

		assert_eq!(*seen.borrow(), vec![0.0, 10.0, 10.0, 250.0, 100.0, 0.0]);
		drop(tracker);
	}

	#[test]
	fn one_listener_per_mount_and_none_after_unmount() {
		let viewport = FakeViewport::at(0.0);
		assert_eq!(viewport.listener_count(), 0);

		let (_, on_change) = recorder();
		let tracker = ScrollTracker::mount(viewport.clone(), on_change).expect("listen works");
		assert_eq!(viewport.listener_count(), 1);
		drop(tracker);
		assert_eq!(viewport.listener_count(), 0);

		// remounting shouldn't stack registrations
		for _ in 0..3 {
			let (_, on_change) = recorder();
			let tracker = ScrollTracker::mount(viewport.clone(), on_change).expect("listen works");
			assert_eq!(viewport.listener_count(), 1);
			drop(tracker);
		}
		assert_eq!(viewport.listener_count(), 0);
	}

	#[test]
	fn no_updates_after_unmount() {
		let viewport = FakeViewport::at(0.0);
		let (seen, on_change) = recorder();
		let tracker = ScrollTracker::mount(viewport.clone(), on_change).expect("listen works");

		viewport.scroll_to(Some(500.0));
		assert_eq!(seen.borrow().last(), Some(&500.0));
		drop(tracker);

		viewport.scroll_to(Some(600.0));
		viewport.scroll_to(Some(700.0));

		assert_eq!(*seen.borrow(), vec![0.0, 500.0]);
	}

	#[test]
	fn listen_failure_is_reported() {
		let viewport = FakeViewport { fail_listen: true, ..FakeViewport::at(20.0) };
		let (seen, on_change) = recorder();

		let res = ScrollTracker::mount(viewport.clone(), on_change);

		assert!(matches!(res, Err(Refused)));
		assert_eq!(viewport.listener_count(), 0);
		// the initial read still happened
		assert_eq!(*seen.borrow(), vec![20.0]);
	}
}
