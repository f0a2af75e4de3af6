use super::icons::{Icon, IconKind};
use super::intro::Intro;
use techvision_common::content::{SectionIntro, Venue};
use techvision_common::SectionKey;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VenueProps {
    pub intro: SectionIntro,
    pub venue: Venue,
}

fn lines(lines: &[String]) -> Html {
    html! {
        <p class="text-gray-600">
            { for lines.iter().enumerate().map(|(i, line)| html! {
                <>
                    if i > 0 { <br /> }
                    { line }
                </>
            })}
        </p>
    }
}

#[function_component(VenueSection)]
pub fn venue_section(props: &VenueProps) -> Html {
    let venue = &props.venue;

    html! {
        <section id={SectionKey::Venue.id()} class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Intro intro={props.intro.clone()} />
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h3 class="text-2xl font-semibold text-gray-900 mb-6">{ &venue.name }</h3>
                        <div class="space-y-4 mb-8">
                            <div class="flex items-start gap-3">
                                <Icon kind={IconKind::MapPin} class="w-5 h-5 text-orange-600 mt-1 flex-shrink-0" />
                                <div>
                                    <p class="font-semibold text-gray-900">{ "Address" }</p>
                                    { lines(&venue.address) }
                                </div>
                            </div>
                            <div class="flex items-start gap-3">
                                <div class="w-5 h-5 bg-green-600 rounded-full mt-2 flex-shrink-0"></div>
                                <div>
                                    <p class="font-semibold text-gray-900">{ "Transportation" }</p>
                                    { lines(&venue.transportation) }
                                </div>
                            </div>
                            <div class="flex items-start gap-3">
                                <div class="w-5 h-5 bg-blue-600 rounded-full mt-2 flex-shrink-0"></div>
                                <div>
                                    <p class="font-semibold text-gray-900">{ "Facilities" }</p>
                                    { lines(&venue.facilities) }
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="bg-gradient-to-br from-orange-100 to-green-100 rounded-lg h-80 flex items-center justify-center border-4 border-white shadow-lg">
                        <div class="text-center text-gray-700">
                            <Icon kind={IconKind::Building} class="w-12 h-12 mx-auto mb-4 text-orange-600" />
                            <p class="text-lg font-semibold">{ &venue.name }</p>
                            <p class="text-sm">{ &venue.city }</p>
                            <p class="text-xs mt-2 text-gray-600">{ &venue.tagline }</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
