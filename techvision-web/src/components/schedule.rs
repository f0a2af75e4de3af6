use super::icons::{Icon, IconKind};
use super::intro::Intro;
use techvision_common::content::{ScheduleDay, ScheduleEvent, SectionIntro};
use techvision_common::SectionKey;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScheduleProps {
    pub intro: SectionIntro,
    pub days: Vec<ScheduleDay>,
}

#[function_component(ScheduleSection)]
pub fn schedule_section(props: &ScheduleProps) -> Html {
    html! {
        <section id={SectionKey::Schedule.id()} class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Intro intro={props.intro.clone()} />
                { for props.days.iter().enumerate().map(|(i, day)| html! {
                    <div class="mb-12">
                        <h3 class="text-2xl font-semibold text-gray-900 mb-8 text-center">{ day.heading(i) }</h3>
                        <div class="space-y-4">
                            { for day.events.iter().map(event_row) }
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}

fn event_row(event: &ScheduleEvent) -> Html {
    html! {
        <div class="flex flex-col md:flex-row md:items-center bg-gradient-to-r from-orange-50 to-green-50 rounded-lg p-6 hover:from-orange-100 hover:to-green-100 transition-all duration-300 border-l-4 border-orange-500">
            <div class="flex items-center mb-4 md:mb-0 md:w-48">
                <Icon kind={IconKind::Clock} class="w-5 h-5 text-orange-600 mr-2" />
                <span class="text-orange-600 font-semibold">{ event.time.to_string() }</span>
            </div>
            <div class="flex-1">
                <h4 class="text-lg font-semibold text-gray-900 mb-1">{ &event.title }</h4>
                if let Some(presenter) = &event.presenter {
                    <p class="text-gray-600">{ format!("Presenter: {}", presenter) }</p>
                }
            </div>
        </div>
    }
}
