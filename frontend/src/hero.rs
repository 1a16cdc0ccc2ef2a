use invitation::{Layer, content};
use yew::prelude::*;
use crate::parallax::{LayersProps, Orb};

const STYLE: &str = r#"
#hero {
	height: 100vh;
	height: 100svh;
	width: 100%;
	overflow: hidden;
}
#hero-scene, .hero-overlay {
	position: absolute;
	inset: 0;
}
#hero-scene > spline-viewer {
	width: 100%;
	height: 100%;
}
.hero-overlay {
	pointer-events: none;
}
#hero-fade {
	background: linear-gradient(to bottom, rgba(255, 255, 255, 0.7), rgba(255, 255, 255, 0.2), rgba(255, 255, 255, 0.8));
}
#hero-glow {
	background:
		radial-gradient(60% 60% at 50% 20%, rgba(147, 51, 234, 0.25) 0%, rgba(255, 255, 255, 0) 60%),
		radial-gradient(40% 40% at 80% 80%, rgba(59, 130, 246, 0.18) 0%, rgba(255, 255, 255, 0) 60%);
}
.hero-orb-slow {
	left: -2.5rem;
	top: 5rem;
	width: 13rem;
	height: 13rem;
	background-color: rgba(232, 121, 249, 0.3);
	filter: blur(40px);
}
.hero-orb-base {
	right: 1.5rem;
	top: 7rem;
	width: 10rem;
	height: 10rem;
	background-color: rgba(96, 165, 250, 0.3);
	filter: blur(40px);
}
.hero-orb-fast {
	left: 4rem;
	bottom: 4rem;
	width: 6rem;
	height: 6rem;
	background-color: rgba(34, 211, 238, 0.4);
	filter: blur(24px);
}
#hero-content {
	position: relative;
	z-index: 10;
	height: 100%;
	max-width: 72rem;
	margin: 0 auto;
	padding: 0 1.5rem;
	display: flex;
	align-items: center;
}
#hero-copy {
	width: 100%;
	max-width: 42rem;
	margin: 0 auto;
}
#hero-kicker {
	font-size: 0.875rem;
	letter-spacing: 0.3em;
	text-transform: uppercase;
	color: rgba(55, 65, 81, 0.8);
	margin: 0 0 1rem 0;
}
#hero-names {
	font-size: 3rem;
	font-weight: 600;
	line-height: 1.1;
	margin: 0;
}
#hero-names .name {
	background-clip: text;
	-webkit-background-clip: text;
	color: transparent;
}
#first-name {
	background-image: linear-gradient(to right, var(--fuchsia), var(--blue));
}
#second-name {
	background-image: linear-gradient(to right, var(--blue), var(--cyan));
}
#ampersand {
	margin: 0 0.75rem;
	color: #9ca3af;
}
#hero-card {
	margin-top: 2rem;
	padding: 1.5rem;
	background-color: rgba(255, 255, 255, 0.4);
	border-color: rgba(255, 255, 255, 0.6);
	box-shadow: 0 10px 40px -10px rgba(0, 0, 0, 0.25);
	display: flex;
	flex-direction: column;
	gap: 1rem;
}
#hero-card p {
	margin: 0;
}
#hero-date {
	color: #374151;
}
#hero-venue {
	color: var(--faint);
}
#hero-greeting {
	margin-top: 1.5rem;
	max-width: 36rem;
	color: var(--muted);
}
#scroll-cue {
	position: absolute;
	bottom: 1.5rem;
	left: 50%;
	transform: translateX(-50%);
	z-index: 10;
	width: 2px;
	height: 2.5rem;
	background: linear-gradient(to bottom, transparent, rgba(156, 163, 175, 0.6), transparent);
	animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}
@keyframes pulse {
	50% {
		opacity: 0.5;
	}
}
@media (min-width: 640px) {
	#hero-names {
		font-size: 3.75rem;
	}
	#hero-card {
		padding: 2rem;
		flex-direction: row;
		align-items: center;
		justify-content: space-between;
	}
}
@media (min-width: 768px) {
	#hero-names {
		font-size: 4.5rem;
	}
}
"#;

#[function_component(Hero)]
pub fn hero(props: &LayersProps) -> Html {
	let t = &props.transforms;

	html! {
		<section id="hero">
			<style>{ STYLE }</style>
			// the viewer sizes its canvas to whatever we give it
			<div id="hero-scene">
				<spline-viewer url={ content::SCENE_URL }></spline-viewer>
			</div>

			<div class="hero-overlay" id="hero-fade" />
			<div class="hero-overlay" id="hero-glow" />

			<Orb transforms={ t.clone() } layer={ Layer::Slow } class="hero-orb-slow" />
			<Orb transforms={ t.clone() } layer={ Layer::Base } class="hero-orb-base" />
			<Orb transforms={ t.clone() } layer={ Layer::Fast } class="hero-orb-fast" />

			<div id="hero-content">
				<div id="hero-copy">
					<p id="hero-kicker">{ content::KICKER }</p>
					<h1 id="hero-names">
						<span class="name" id="first-name">{ content::COUPLE.first }</span>
						<span id="ampersand">{ "&" }</span>
						<span class="name" id="second-name">{ content::COUPLE.second }</span>
					</h1>

					<div class="glass" id="hero-card">
						<div>
							<p id="hero-date">{ content::DATE }</p>
							<p id="hero-venue">{ content::MAIN_VENUE }</p>
						</div>
						<a href="#rsvp" class="cta">{ content::OPEN_INVITATION }</a>
					</div>

					<p id="hero-greeting">{ content::GREETING }</p>
				</div>
			</div>

			<div id="scroll-cue" />
		</section>
	}
}
