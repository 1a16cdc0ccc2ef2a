use gloo_console::log;
use invitation::{Layer, RsvpChoice, RsvpDraft, content};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use crate::{parallax::{LayersProps, Orb}, style::SectionHeading};

const STYLE: &str = r"
#rsvp {
	padding: 5rem 0;
}
#rsvp .container {
	max-width: 48rem;
	text-align: center;
}
#rsvp .section-heading {
	margin-bottom: 0;
}
.rsvp-orb-base {
	right: -2.5rem;
	top: 0;
	width: 18rem;
	height: 18rem;
	background-color: rgba(103, 232, 249, 0.2);
	filter: blur(64px);
}
#rsvp-form {
	margin-top: 2rem;
	display: grid;
	gap: 0.75rem;
}
#rsvp-form input, #rsvp-form select {
	width: 100%;
	border-radius: 0.75rem;
	border: 1px solid rgba(229, 231, 235, 0.7);
	background-color: rgba(255, 255, 255, 0.7);
	backdrop-filter: blur(24px);
	-webkit-backdrop-filter: blur(24px);
	padding: 0.75rem 1rem;
	font-size: 1rem;
	transition: box-shadow 0.15s ease, border-color 0.15s ease;
}
#rsvp-form input:focus, #rsvp-form select:focus {
	outline: none;
	border-color: #f0abfc;
	box-shadow: 0 0 0 2px rgba(232, 121, 249, 0.5);
}
#rsvp-form .cta:hover {
	transform: scale(1.02);
}
#rsvp-note {
	margin-top: 1.5rem;
	font-size: 0.875rem;
	color: var(--faint);
}
@media (min-width: 640px) {
	#rsvp {
		padding: 6rem 0;
	}
	#rsvp-form {
		grid-template-columns: repeat(3, minmax(0, 1fr));
	}
	#rsvp-name {
		grid-column: span 2 / span 2;
	}
	#rsvp-form .cta {
		grid-column: span 3 / span 3;
	}
}
";

#[function_component(Rsvp)]
pub fn rsvp(props: &LayersProps) -> Html {
	// nothing on the page shows the draft, so there's no need to re-render when it changes
	let draft = use_mut_ref(RsvpDraft::default);

	let name_draft = draft.clone();
	// every keystroke, so the draft never lags behind what's in the box
	let name_input = Callback::from(move |e: InputEvent|
		if let Some(input) = e.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
				name_draft.borrow_mut().name = input.value();
			}
	);

	let choice_draft = draft.clone();
	let choice_input = Callback::from(move |e: Event| {
		let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
			return;
		};

		match select.value().parse::<RsvpChoice>() {
			Ok(choice) => choice_draft.borrow_mut().choice = choice,
			Err(e) => log!(format!("Ignoring attendance choice: {e}"))
		}
	});

	// There's nowhere to send this yet, so we just keep the browser from reloading the page
	let submit = Callback::from(move |e: SubmitEvent| {
		e.prevent_default();

		match draft.borrow().preview() {
			Some(preview) => log!(format!("RSVP preview for {preview}, not sent anywhere")),
			None => log!("RSVP preview submitted without a name")
		}
	});

	html! {
		<section id="rsvp">
			<style>{ STYLE }</style>
			<div class="decor">
				<Orb transforms={ props.transforms.clone() } layer={ Layer::Base } class="rsvp-orb-base" />
			</div>

			<div class="container">
				<SectionHeading title={ content::RSVP_TITLE } subtitle={ content::RSVP_SUBTITLE } />

				<form id="rsvp-form" onsubmit={ submit }>
					<input
						id="rsvp-name"
						name="name"
						required=true
						placeholder={ content::RSVP_NAME_PLACEHOLDER }
						oninput={ name_input }
					/>
					<select id="rsvp-choice" name="choice" onchange={ choice_input }>
					{
						RsvpChoice::ALL.into_iter().map(|choice| html! {
							<option value={ choice.label() }>{ choice.label() }</option>
						}).collect::<Html>()
					}
					</select>
					<button type="submit" class="cta">{ content::RSVP_SUBMIT }</button>
				</form>

				<p id="rsvp-note">{ content::RSVP_NOTE }</p>
			</div>
		</section>
	}
}
