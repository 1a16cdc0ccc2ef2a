use yew::prelude::*;
use invitation::{ParallaxFactors, content};
use details::Details;
use gallery::Gallery;
use hero::Hero;
use parallax::use_parallax;
use rsvp::Rsvp;
use style::SharedStyle;

mod details;
mod gallery;
mod hero;
mod parallax;
mod rsvp;
mod scroll;
mod style;

#[function_component(Footer)]
fn footer() -> Html {
	html! {
		<footer style="padding: 2.5rem 0; text-align: center; color: var(--faint);">
			<p>{ content::footer_line() }</p>
		</footer>
	}
}

#[function_component(Invitation)]
pub fn invitation_page() -> Html {
	// the only thing on this page that ever changes
	let transforms = use_parallax(ParallaxFactors::default());

	html! {
		<>
			<SharedStyle />
			<div id="page">
				<Hero transforms={ transforms.clone() } />
				<Details transforms={ transforms.clone() } />
				<Gallery />
				<Rsvp transforms={ transforms } />
				<Footer />
			</div>
		</>
	}
}

fn main() {
	yew::Renderer::<Invitation>::new().render();
}
