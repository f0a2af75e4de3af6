use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub text: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="bg-black text-white py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <p class="text-gray-400">{ props.text.clone() }</p>
                </div>
            </div>
        </footer>
    }
}
