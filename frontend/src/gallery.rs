use invitation::content;
use yew::prelude::*;
use crate::style::SectionHeading;

const STYLE: &str = r"
#gallery {
	padding: 4rem 0;
}
#gallery .section-heading {
	margin-bottom: 2.5rem;
}
#gallery-grid {
	display: grid;
	grid-template-columns: repeat(2, minmax(0, 1fr));
	gap: 0.75rem;
}
.tile {
	position: relative;
	overflow: hidden;
	border-radius: 0.75rem;
	aspect-ratio: 4 / 5;
	background-image: linear-gradient(to bottom right, rgba(245, 208, 254, 0.4), rgba(191, 219, 254, 0.4));
}
.tile > div {
	position: absolute;
	inset: 0;
}
.tile-photo {
	background-size: cover;
	background-position: center;
	opacity: 0.8;
	transition: transform 0.5s ease;
}
.tile:hover .tile-photo {
	transform: scale(1.05);
}
.tile-shade {
	background-image: linear-gradient(to top, rgba(0, 0, 0, 0.3), transparent);
	opacity: 0;
	transition: opacity 0.15s ease;
}
.tile:hover .tile-shade {
	opacity: 1;
}
@media (min-width: 640px) {
	#gallery-grid {
		grid-template-columns: repeat(3, minmax(0, 1fr));
		gap: 1rem;
	}
}
";

#[function_component(Gallery)]
pub fn gallery() -> Html {
	let tiles = content::GALLERY.iter()
		.enumerate()
		.map(|(idx, url)| html! {
			<div class="tile" key={ idx }>
				<div class="tile-photo" style={ format!("background-image: url('{url}');") } />
				<div class="tile-shade" />
			</div>
		})
		.collect::<Html>();

	html! {
		<section id="gallery">
			<style>{ STYLE }</style>
			<div class="container">
				<SectionHeading title={ content::GALLERY_TITLE } subtitle={ content::GALLERY_SUBTITLE } />
				<div id="gallery-grid">
					{ tiles }
				</div>
			</div>
		</section>
	}
}
