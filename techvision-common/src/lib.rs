pub mod config;
pub mod content;
pub mod error;
pub mod menu;
pub mod nav;
pub mod registration;
pub mod scroll;

pub use config::SiteConfig;
pub use content::SiteContent;
pub use error::{ContentError, RegistrationError, Result};
pub use menu::MobileMenu;
pub use nav::SectionKey;
pub use registration::{
    ModalState, RegistrationAction, RegistrationController, RegistrationField,
};
pub use scroll::{ScrollSource, ScrollSubscription, ScrollTracker, SectionBounds, SectionLayout};
