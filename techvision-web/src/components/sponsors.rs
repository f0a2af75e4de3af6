use super::intro::Intro;
use techvision_common::content::{SectionIntro, Sponsor};
use techvision_common::SectionKey;
use tracing::warn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SponsorsProps {
    pub intro: SectionIntro,
    pub sponsors: Vec<Sponsor>,
}

#[function_component(SponsorsSection)]
pub fn sponsors_section(props: &SponsorsProps) -> Html {
    html! {
        <section id={SectionKey::Sponsors.id()} class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Intro intro={props.intro.clone()} />
                <div class="grid md:grid-cols-3 gap-8">
                    { for props.sponsors.iter().map(|sponsor| html! {
                        <SponsorCard key={sponsor.name.clone()} sponsor={sponsor.clone()} />
                    })}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SponsorCardProps {
    pub sponsor: Sponsor,
}

/// Shows the partner logo, or the partner name once the logo fails to load.
#[function_component(SponsorCard)]
pub fn sponsor_card(props: &SponsorCardProps) -> Html {
    let logo_failed = use_state(|| false);
    let sponsor = &props.sponsor;

    let onerror = {
        let logo_failed = logo_failed.clone();
        let name = sponsor.name.clone();
        Callback::from(move |_: Event| {
            warn!(sponsor = %name, "sponsor logo failed to load");
            logo_failed.set(true);
        })
    };

    html! {
        <a
            href={sponsor.website.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center justify-center p-8 bg-gradient-to-br from-orange-50 to-green-50 rounded-lg hover:from-orange-100 hover:to-green-100 transition-all duration-300 border border-orange-200 shadow-sm hover:shadow-md"
        >
            if *logo_failed {
                <div class="text-center text-gray-600 font-semibold">{ &sponsor.name }</div>
            } else {
                <img
                    src={sponsor.logo.clone()}
                    alt={sponsor.name.clone()}
                    {onerror}
                    class="max-h-20 w-auto opacity-80 hover:opacity-100 transition-opacity"
                />
            }
        </a>
    }
}
