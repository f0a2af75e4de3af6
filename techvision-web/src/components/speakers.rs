use super::intro::Intro;
use techvision_common::content::{SectionIntro, Speaker};
use techvision_common::SectionKey;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpeakersProps {
    pub intro: SectionIntro,
    pub speakers: Vec<Speaker>,
}

#[function_component(SpeakersSection)]
pub fn speakers_section(props: &SpeakersProps) -> Html {
    html! {
        <section id={SectionKey::Speakers.id()} class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Intro intro={props.intro.clone()} />
                <div class="grid md:grid-cols-3 gap-8">
                    { for props.speakers.iter().map(speaker_card) }
                </div>
            </div>
        </section>
    }
}

fn speaker_card(speaker: &Speaker) -> Html {
    html! {
        <div key={speaker.name.clone()} class="bg-white rounded-xl shadow-lg overflow-hidden hover:shadow-xl transition-all duration-300 border-t-4 border-orange-500">
            <div class="aspect-w-1 aspect-h-1">
                <img src={speaker.image.clone()} alt={speaker.name.clone()} class="w-full h-64 object-cover" />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold text-gray-900 mb-2">{ &speaker.name }</h3>
                <p class="text-orange-600 font-medium mb-1">{ &speaker.title }</p>
                <p class="text-gray-600 text-sm mb-3">{ &speaker.affiliation }</p>
                <p class="text-gray-700 text-sm">{ &speaker.bio }</p>
            </div>
        </div>
    }
}
