use techvision_common::content::About;
use techvision_common::SectionKey;
use yew::prelude::*;

// Accent colours cycle across the stat cards.
const STAT_ACCENTS: [(&str, &str); 3] = [
    ("bg-orange-50 border-orange-500", "text-orange-600"),
    ("bg-green-50 border-green-500", "text-green-600"),
    ("bg-blue-50 border-blue-500", "text-blue-600"),
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: About,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutProps) -> Html {
    let about = &props.about;

    html! {
        <section id={SectionKey::About.id()} class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-gray-900 mb-6">{ &about.heading }</h2>
                    <div class="max-w-3xl mx-auto">
                        { for about.paragraphs.iter().map(|paragraph| html! {
                            <p class="text-lg text-gray-600 mb-6">{ paragraph }</p>
                        })}
                        <div class="grid md:grid-cols-3 gap-8">
                            { for about.stats.iter().enumerate().map(|(i, stat)| {
                                let (card, value) = STAT_ACCENTS[i % STAT_ACCENTS.len()];
                                html! {
                                    <div class={classes!("text-center", "p-6", "rounded-lg", "border-l-4", card)}>
                                        <div class={classes!("text-3xl", "font-bold", "mb-2", value)}>{ &stat.value }</div>
                                        <div class="text-gray-700">{ &stat.label }</div>
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
