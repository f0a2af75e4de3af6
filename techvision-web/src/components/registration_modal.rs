use super::icons::{Icon, IconKind};
use techvision_common::registration::is_submit_key;
use techvision_common::{RegistrationAction, RegistrationController, RegistrationField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegistrationModalProps {
    pub controller: RegistrationController,
    pub on_action: Callback<RegistrationAction>,
}

fn field_label(field: RegistrationField) -> String {
    if field.is_marked_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

fn field_input(field: RegistrationField, value: &str, on_action: &Callback<RegistrationAction>) -> Html {
    let oninput = on_action.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        RegistrationAction::Update(field, input.value())
    });

    // Enter submits like the button does, without the browser's own form submission
    let onkeypress = {
        let on_action = on_action.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_submit_key(&e.key()) {
                e.prevent_default();
                on_action.emit(RegistrationAction::Submit);
            }
        })
    };

    html! {
        <div key={field.name()}>
            <label class="block text-sm font-medium text-gray-700 mb-1">{ field_label(field) }</label>
            <input
                type={field.input_type()}
                name={field.name()}
                value={value.to_string()}
                {oninput}
                {onkeypress}
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-500"
                placeholder={field.placeholder()}
            />
        </div>
    }
}

#[function_component(RegistrationModal)]
pub fn registration_modal(props: &RegistrationModalProps) -> Html {
    let controller = &props.controller;
    if !controller.is_visible() {
        return html! {};
    }

    let on_dismiss = props.on_action.reform(|_: MouseEvent| RegistrationAction::Dismiss);
    let on_cancel = props.on_action.reform(|_: MouseEvent| RegistrationAction::Cancel);
    let on_submit = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_action.emit(RegistrationAction::Submit);
        })
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center p-4">
            <div class="bg-white rounded-lg max-w-md w-full p-6">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-xl font-bold text-gray-900">{ "Conference Registration" }</h3>
                    <button type="button" onclick={on_dismiss} class="text-gray-500 hover:text-gray-700">
                        <Icon kind={IconKind::Close} class="w-6 h-6" />
                    </button>
                </div>

                <form onsubmit={on_submit} class="space-y-4">
                    { for RegistrationField::ALL.into_iter().map(|field| {
                        field_input(field, controller.form().get(field), &props.on_action)
                    })}

                    if let Some(error) = controller.error() {
                        <div class="text-red-600 text-sm bg-red-50 p-2 rounded">
                            { error.to_string() }
                        </div>
                    }

                    <div class="flex gap-3">
                        <button
                            type="submit"
                            class="flex-1 bg-gradient-to-r from-orange-500 to-green-500 text-white py-2 px-4 rounded-md hover:from-orange-600 hover:to-green-600 transition-colors"
                        >
                            { "Submit Registration" }
                        </button>
                        <button
                            type="button"
                            onclick={on_cancel}
                            class="px-4 py-2 text-gray-600 border border-gray-300 rounded-md hover:bg-gray-50"
                        >
                            { "Cancel" }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels() {
        assert_eq!(field_label(RegistrationField::Name), "Full Name *");
        assert_eq!(
            field_label(RegistrationField::PaperTitle),
            "Paper Title (if presenting)"
        );
    }
}
