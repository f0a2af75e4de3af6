use super::icons::{Icon, IconKind};
use techvision_common::{MobileMenu, SectionKey};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub title: AttrValue,
    pub active: SectionKey,
    pub menu: MobileMenu,
    pub on_navigate: Callback<SectionKey>,
    pub on_toggle_menu: Callback<()>,
}

fn nav_button_classes(is_active: bool, mobile: bool) -> Classes {
    let layout = if mobile {
        "block px-3 py-2 rounded-md text-base font-medium w-full text-left transition-colors"
    } else {
        "px-3 py-2 rounded-md text-sm font-medium transition-colors"
    };
    let state = if is_active {
        "text-orange-600 bg-orange-50"
    } else {
        "text-gray-700 hover:text-orange-600 hover:bg-gray-50"
    };
    classes!(layout, state)
}

fn nav_entries(props: &NavBarProps, mobile: bool) -> Html {
    html! {
        { for SectionKey::ALL.into_iter().map(|key| {
            let onclick = props.on_navigate.reform(move |_: MouseEvent| key);
            html! {
                <button key={key.id()} {onclick} class={nav_button_classes(key == props.active, mobile)}>
                    { key.label() }
                </button>
            }
        })}
    }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let on_toggle = props.on_toggle_menu.reform(|_: MouseEvent| ());
    let menu_icon = if props.menu.is_open() {
        IconKind::Close
    } else {
        IconKind::Menu
    };

    html! {
        <nav class="fixed top-0 w-full bg-white/95 backdrop-blur-sm border-b border-gray-200 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <h1 class="text-2xl font-bold bg-gradient-to-r from-orange-600 to-green-600 bg-clip-text text-transparent">
                            { props.title.clone() }
                        </h1>
                    </div>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-4">
                            { nav_entries(props, false) }
                        </div>
                    </div>
                    <div class="md:hidden">
                        <button onclick={on_toggle} class="p-2 rounded-md text-gray-700 hover:text-orange-600 hover:bg-gray-50">
                            <Icon kind={menu_icon} class="w-6 h-6" />
                        </button>
                    </div>
                </div>
            </div>
            if props.menu.is_open() {
                <div class="md:hidden border-t border-gray-200 bg-white">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        { nav_entries(props, true) }
                    </div>
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_entry_is_highlighted() {
        let active = nav_button_classes(true, false);
        let idle = nav_button_classes(false, false);
        assert!(active.contains("bg-orange-50"));
        assert!(!idle.contains("bg-orange-50"));
        assert!(nav_button_classes(true, true).contains("w-full"));
        assert!(!active.contains("w-full"));
    }
}
