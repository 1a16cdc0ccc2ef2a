use invitation::{Layer, content};
use yew::prelude::*;
use crate::{parallax::{LayersProps, Orb}, style::SectionHeading};

const STYLE: &str = r"
#details {
	padding: 5rem 0;
}
.details-orb-slow {
	top: -2.5rem;
	right: 2.5rem;
	width: 18rem;
	height: 18rem;
	background-color: rgba(240, 171, 252, 0.2);
	filter: blur(64px);
}
.details-orb-base {
	bottom: 0;
	left: 2.5rem;
	width: 16rem;
	height: 16rem;
	background-color: rgba(147, 197, 253, 0.2);
	filter: blur(64px);
}
#event-grid {
	display: grid;
	gap: 1.5rem;
}
.event-card {
	padding: 1.5rem;
	box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
}
.event-card h3 {
	font-size: 1.25rem;
	font-weight: 600;
	margin: 0 0 0.5rem 0;
}
.event-card p {
	margin: 0;
}
.event-time {
	color: var(--muted);
}
.event-venue {
	margin-top: 0.5rem !important;
	color: var(--faint);
}
@media (min-width: 640px) {
	#details {
		padding: 7rem 0;
	}
	#event-grid {
		grid-template-columns: repeat(2, minmax(0, 1fr));
	}
}
";

#[function_component(Details)]
pub fn details(props: &LayersProps) -> Html {
	let t = &props.transforms;

	html! {
		<section id="details">
			<style>{ STYLE }</style>
			<div class="decor">
				<Orb transforms={ t.clone() } layer={ Layer::Slow } class="details-orb-slow" />
				<Orb transforms={ t.clone() } layer={ Layer::Base } class="details-orb-base" />
			</div>

			<div class="container">
				<SectionHeading title={ content::DETAILS_TITLE } subtitle={ content::DETAILS_SUBTITLE } />
				<div id="event-grid">
				{
					content::EVENTS.iter().map(|event| html! {
						<div class="glass event-card">
							<h3>{ event.title }</h3>
							<p class="event-time">{ event.time }</p>
							<p class="event-venue">{ event.venue }</p>
						</div>
					}).collect::<Html>()
				}
				</div>
			</div>
		</section>
	}
}
