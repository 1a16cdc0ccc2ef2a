pub mod content;
pub mod parallax;
pub mod rsvp;
pub mod scroll;

pub use parallax::{Layer, ParallaxFactors, ParallaxMapper, ParallaxTransforms};
pub use rsvp::{RsvpChoice, RsvpDraft};
pub use scroll::{ScrollSource, ScrollTracker, first_reading, sanitize_offset};

pub static BASE_STYLE: &str = r#"
* {
	--ink: #111827;
	--muted: #4b5563;
	--faint: #6b7280;
	--fuchsia: #c026d3;
	--blue: #2563eb;
	--cyan: #06b6d4;
	--lavender: #faf5ff;
	--glass: rgba(255, 255, 255, 0.6);
	--glass-border: rgba(255, 255, 255, 0.7);
	box-sizing: border-box;
}
html {
	scroll-behavior: smooth;
}
body {
	margin: 0;
	font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
	color: var(--ink);
}
#page {
	min-height: 100vh;
	width: 100%;
	background: linear-gradient(to bottom, #ffffff, #ffffff, var(--lavender));
	overflow-x: hidden;
}
section {
	position: relative;
}
.container {
	position: relative;
	max-width: 72rem;
	margin: 0 auto;
	padding: 0 1.5rem;
}
.section-heading {
	text-align: center;
	margin-bottom: 3rem;
}
.section-heading h2 {
	font-size: 2.25rem;
	font-weight: 600;
	margin: 0;
}
.section-heading p {
	margin-top: 0.75rem;
	color: var(--muted);
}
.decor {
	position: absolute;
	inset: 0;
	overflow: hidden;
	pointer-events: none;
}
.orb {
	position: absolute;
	border-radius: 9999px;
	will-change: transform;
}
.glass {
	backdrop-filter: blur(24px);
	-webkit-backdrop-filter: blur(24px);
	background-color: var(--glass);
	border: 1px solid var(--glass-border);
	border-radius: 1rem;
}
.cta {
	display: inline-flex;
	align-items: center;
	justify-content: center;
	border: none;
	border-radius: 0.75rem;
	padding: 0.75rem 1.25rem;
	background: linear-gradient(to right, var(--fuchsia), var(--blue));
	color: white;
	font-weight: 500;
	font-size: 1rem;
	text-decoration: none;
	cursor: pointer;
	box-shadow: 0 10px 15px -3px rgba(217, 70, 239, 0.2);
	transition: transform 0.15s ease;
}
.cta:hover {
	transform: scale(1.03);
}
.cta:active {
	transform: scale(0.95);
}
@media (min-width: 640px) {
	.section-heading h2 {
		font-size: 2.5rem;
	}
}
"#;
