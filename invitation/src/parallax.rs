use serde::{Deserialize, Serialize};
use std::{fmt, rc::Rc};

/// The decorative layers that move with the page. Each one is driven by its own factor in
/// [`ParallaxFactors`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layer {
	Slow,
	Base,
	Fast
}

impl Layer {
	pub const ALL: [Self; 3] = [Self::Slow, Self::Base, Self::Fast];
}

/// How strongly each layer responds to scrolling. A factor of `0` pins the layer in place, and a
/// negative factor makes it drift the other way.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(default)]
pub struct ParallaxFactors {
	pub slow: f64,
	pub base: f64,
	pub fast: f64
}

impl Default for ParallaxFactors {
	fn default() -> Self {
		Self {
			slow: 0.15,
			base: 0.3,
			fast: 0.5
		}
	}
}

impl ParallaxFactors {
	#[must_use]
	pub fn factor(&self, layer: Layer) -> f64 {
		match layer {
			Layer::Slow => self.slow,
			Layer::Base => self.base,
			Layer::Fast => self.fast
		}
	}
}

/// Vertical translations (in px) for every layer at a given scroll offset.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ParallaxTransforms {
	pub offset: f64,
	pub slow: f64,
	pub base: f64,
	pub fast: f64
}

impl ParallaxTransforms {
	#[must_use]
	pub fn translation(&self, layer: Layer) -> f64 {
		match layer {
			Layer::Slow => self.slow,
			Layer::Base => self.base,
			Layer::Fast => self.fast
		}
	}

	/// The value to drop into a `transform:` declaration, e.g. `translateY(-15px)`
	#[must_use]
	pub fn css(&self, layer: Layer) -> String {
		TranslateY(self.translation(layer)).to_string()
	}

	/// A full inline `style` attribute for an element on `layer`
	#[must_use]
	pub fn style(&self, layer: Layer) -> String {
		format!("transform: {};", self.css(layer))
	}
}

struct TranslateY(f64);

impl fmt::Display for TranslateY {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// -(0 * factor) is -0.0, which would otherwise print as "-0"
		let px = if self.0 == 0.0 { 0.0 } else { self.0 };
		write!(f, "translateY({px}px)")
	}
}

/// Pure mapping from a scroll offset to per-layer translations. Scrolling down moves layers up,
/// hence the negation.
#[must_use]
pub fn map(offset: f64, factors: &ParallaxFactors) -> ParallaxTransforms {
	ParallaxTransforms {
		offset,
		slow: -(offset * factors.slow),
		base: -(offset * factors.base),
		fast: -(offset * factors.fast)
	}
}

/// Remembers the last inputs it was given so that repeated calls with the same offset and
/// factors hand back the exact same allocation. Downstream renderers can then compare with
/// [`Rc::ptr_eq`] and skip work.
#[derive(Default)]
pub struct ParallaxMapper {
	last: Option<(f64, ParallaxFactors, Rc<ParallaxTransforms>)>
}

impl ParallaxMapper {
	pub fn map(&mut self, offset: f64, factors: &ParallaxFactors) -> Rc<ParallaxTransforms> {
		match self.last {
			Some((last_offset, ref last_factors, ref transforms))
				if last_offset == offset && last_factors == factors => Rc::clone(transforms),
			_ => {
				let transforms = Rc::new(map(offset, factors));
				self.last = Some((offset, *factors, Rc::clone(&transforms)));
				transforms
			}
		}
	}
}
