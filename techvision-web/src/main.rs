mod app;
mod components;
mod dom;
mod logging;
mod store;

use app::{App, AppProps};
use components::ContentUnavailable;
use std::rc::Rc;
use techvision_common::{SiteConfig, SiteContent};
use tracing::{error, info};

fn main() {
    console_error_panic_hook::set_once();

    match SiteContent::embedded() {
        Ok(content) => {
            logging::init(&content.config.log_level);
            info!(title = %content.conference.title, "rendering site");
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(e) => {
            logging::init(&SiteConfig::default().log_level);
            error!("failed to load site content: {}", e);
            yew::Renderer::<ContentUnavailable>::new().render();
        }
    }
}
