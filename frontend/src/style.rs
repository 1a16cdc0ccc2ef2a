use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ invitation::BASE_STYLE }</style> }
}

#[derive(Properties, PartialEq)]
pub struct HeadingProps {
	pub title: &'static str,
	pub subtitle: &'static str
}

/// The centered title + blurb that opens every section below the hero
#[function_component(SectionHeading)]
pub fn section_heading(props: &HeadingProps) -> Html {
	html! {
		<div class="section-heading">
			<h2>{ props.title }</h2>
			<p>{ props.subtitle }</p>
		</div>
	}
}
