use crate::components::{
    AboutSection, ContactSection, Footer, Hero, NavBar, RegistrationModal, ScheduleSection,
    SpeakersSection, SponsorsSection, VenueSection,
};
use crate::dom;
use crate::store::RegistrationStore;
use std::rc::Rc;
use techvision_common::{MobileMenu, RegistrationAction, SectionKey, SiteContent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let content = props.content.clone();
    let active_section = use_state(SectionKey::default);
    let menu = use_state(MobileMenu::default);
    let registration = use_reducer(RegistrationStore::default);

    // Scroll listener lives as long as the page component
    {
        let active_section = active_section.clone();
        let focus_offset = content.config.focus_offset;
        use_effect_with((), move |_| {
            let subscription =
                dom::track_active_section(focus_offset, move |key| active_section.set(key));
            move || {
                if let Some(mut subscription) = subscription {
                    subscription.release();
                }
            }
        });
    }

    let on_navigate = {
        let menu = menu.clone();
        let smooth = content.config.smooth_scroll;
        Callback::from(move |key: SectionKey| {
            let scrolled = dom::scroll_to_section(key, smooth);
            menu.set(menu.after_navigation(scrolled));
        })
    };

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(menu.toggled()))
    };

    let on_registration_action = {
        let dispatcher = registration.dispatcher();
        Callback::from(move |action: RegistrationAction| dispatcher.dispatch(action))
    };
    let on_register = on_registration_action.reform(|_: ()| RegistrationAction::Open);

    html! {
        <div class="min-h-screen bg-white">
            <RegistrationModal
                controller={(**registration).clone()}
                on_action={on_registration_action}
            />
            <NavBar
                title={content.conference.title.clone()}
                active={*active_section}
                menu={*menu}
                {on_navigate}
                {on_toggle_menu}
            />
            <Hero conference={content.conference.clone()} on_register={on_register.clone()} />
            <AboutSection about={content.about.clone()} />
            <SpeakersSection intro={content.intros.speakers.clone()} speakers={content.speakers.clone()} />
            <ScheduleSection intro={content.intros.schedule.clone()} days={content.schedule.clone()} />
            <VenueSection intro={content.intros.venue.clone()} venue={content.venue.clone()} />
            <SponsorsSection intro={content.intros.sponsors.clone()} sponsors={content.sponsors.clone()} />
            <ContactSection
                intro={content.intros.contact.clone()}
                contact={content.contact.clone()}
                {on_register}
            />
            <Footer text={content.footer.clone()} />
        </div>
    }
}
