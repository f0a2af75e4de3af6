mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod intro;
mod navbar;
mod registration_modal;
mod schedule;
mod speakers;
mod sponsors;
mod venue;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::NavBar;
pub use registration_modal::RegistrationModal;
pub use schedule::ScheduleSection;
pub use speakers::SpeakersSection;
pub use sponsors::SponsorsSection;
pub use venue::VenueSection;

use yew::prelude::*;

/// Rendered instead of the page when the embedded content fails validation.
#[function_component(ContentUnavailable)]
pub fn content_unavailable() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-white">
            <p class="text-lg text-gray-600">{ "This page is temporarily unavailable. Please try again later." }</p>
        </div>
    }
}
