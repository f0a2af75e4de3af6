use techvision_common::content::SectionIntro;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IntroProps {
    pub intro: SectionIntro,
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(Intro)]
pub fn intro(props: &IntroProps) -> Html {
    let (heading, blurb) = if props.dark {
        ("text-4xl font-bold mb-6", "text-lg text-orange-200 max-w-2xl mx-auto")
    } else {
        (
            "text-4xl font-bold text-gray-900 mb-6",
            "text-lg text-gray-600 max-w-2xl mx-auto",
        )
    };

    html! {
        <div class="text-center mb-16">
            <h2 class={heading}>{ &props.intro.heading }</h2>
            <p class={blurb}>{ &props.intro.blurb }</p>
        </div>
    }
}
