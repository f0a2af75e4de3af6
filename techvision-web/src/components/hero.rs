use super::icons::{Icon, IconKind};
use techvision_common::content::Conference;
use techvision_common::SectionKey;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub conference: Conference,
    pub on_register: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let conference = &props.conference;
    let onclick = props.on_register.reform(|_: MouseEvent| ());

    html! {
        <section id={SectionKey::Home.id()} class="relative bg-gradient-to-br from-orange-600 via-red-500 to-green-600 text-white pt-20">
            <div class="absolute inset-0 bg-black/30"></div>
            <div class="absolute inset-0 opacity-10">
                <div class="absolute top-20 left-10 w-32 h-32 border-2 border-orange-300 rounded-full"></div>
                <div class="absolute top-40 right-20 w-24 h-24 border-2 border-green-300 rounded-full"></div>
                <div class="absolute bottom-20 left-1/4 w-16 h-16 border-2 border-yellow-300 rotate-45"></div>
            </div>
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 md:py-32">
                <div class="text-center">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-white via-orange-200 to-green-200 bg-clip-text text-transparent">
                        { &conference.title }
                    </h1>
                    <p class="text-xl md:text-2xl mb-8 text-orange-100 max-w-3xl mx-auto">
                        { &conference.tagline }
                    </p>
                    <div class="flex flex-col md:flex-row items-center justify-center gap-6 mb-12 text-lg">
                        <div class="flex items-center gap-2">
                            <Icon kind={IconKind::Calendar} class="w-5 h-5" />
                            <span>{ conference.display_date() }</span>
                        </div>
                        <div class="flex items-center gap-2">
                            <Icon kind={IconKind::MapPin} class="w-5 h-5" />
                            <span>{ &conference.location }</span>
                        </div>
                    </div>
                    <button
                        {onclick}
                        class="bg-gradient-to-r from-orange-500 to-green-500 hover:from-orange-400 hover:to-green-400 text-white px-8 py-4 rounded-lg font-semibold text-lg transition-all duration-300 transform hover:scale-105 shadow-lg hover:shadow-xl"
                    >
                        { "Register for Conference" }
                    </button>
                </div>
            </div>
            <div class="absolute bottom-0 left-0 right-0 h-32 bg-gradient-to-t from-white to-transparent"></div>
        </section>
    }
}
