//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Optional caption under the spinner.
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center p-8 gap-4">
            <div class="w-12 h-12 border-[3px] border-blue-200 dark:border-blue-900 border-t-blue-600 dark:border-t-blue-400 rounded-full animate-spin"></div>
            if let Some(text) = &props.text {
                <p class="text-gray-500 dark:text-gray-400 text-sm m-0">{text}</p>
            }
        </div>
    }
}
