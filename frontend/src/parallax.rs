use invitation::{Layer, ParallaxFactors, ParallaxMapper, ParallaxTransforms};
use std::rc::Rc;
use yew::prelude::*;
use crate::scroll::use_scroll_offset;

/// Per-layer translations for the current scroll position. Scrolling to the same place with the
/// same factors hands back the same `Rc`, so props built from it compare equal cheaply.
#[hook]
pub fn use_parallax(factors: ParallaxFactors) -> Rc<ParallaxTransforms> {
	let offset = use_scroll_offset();
	let mapper = use_mut_ref(ParallaxMapper::default);

	mapper.borrow_mut().map(offset, &factors)
}

#[derive(Properties, PartialEq)]
pub struct LayersProps {
	pub transforms: Rc<ParallaxTransforms>
}

#[derive(Properties, PartialEq)]
pub struct OrbProps {
	pub transforms: Rc<ParallaxTransforms>,
	pub layer: Layer,
	// positioning, size, color and blur all come from here
	pub class: &'static str
}

/// A blurry decorative blob that drifts with its layer
#[function_component(Orb)]
pub fn orb(props: &OrbProps) -> Html {
	html! {
		<div class={ classes!("orb", props.class) } style={ props.transforms.style(props.layer) } />
	}
}
