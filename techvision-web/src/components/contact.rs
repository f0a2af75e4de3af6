use super::icons::{Icon, IconKind};
use super::intro::Intro;
use techvision_common::content::{Contact, SectionIntro};
use techvision_common::SectionKey;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub intro: SectionIntro,
    pub contact: Contact,
    pub on_register: Callback<()>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let contact = &props.contact;
    let onclick = props.on_register.reform(|_: MouseEvent| ());

    html! {
        <section id={SectionKey::Contact.id()} class="py-20 bg-gradient-to-br from-gray-900 via-orange-900 to-green-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Intro intro={props.intro.clone()} dark={true} />
                <div class="grid md:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-semibold mb-6">{ "Get in Touch" }</h3>
                        <div class="space-y-4">
                            <div class="flex items-center gap-3">
                                <Icon kind={IconKind::Mail} class="w-5 h-5 text-orange-400" />
                                <a href={format!("mailto:{}", contact.email)}>{ &contact.email }</a>
                            </div>
                            <div class="flex items-center gap-3">
                                <Icon kind={IconKind::Phone} class="w-5 h-5 text-orange-400" />
                                <span>{ &contact.phone }</span>
                            </div>
                        </div>
                        <div class="mt-8">
                            <h4 class="text-lg font-semibold mb-4">{ "Follow Us" }</h4>
                            <div class="flex gap-4">
                                { for contact.socials.iter().map(|network| html! {
                                    <span class="text-orange-400 hover:text-orange-300 cursor-pointer font-medium">{ network }</span>
                                })}
                            </div>
                        </div>
                    </div>
                    <div>
                        <h3 class="text-2xl font-semibold mb-6">{ &contact.call_to_action.heading }</h3>
                        <p class="text-orange-200 mb-6">{ &contact.call_to_action.blurb }</p>
                        <button
                            {onclick}
                            class="bg-gradient-to-r from-orange-500 to-green-500 hover:from-orange-400 hover:to-green-400 text-white px-8 py-3 rounded-lg font-semibold transition-all duration-300 transform hover:scale-105"
                        >
                            { "Register Now" }
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
