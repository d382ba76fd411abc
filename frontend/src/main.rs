use log::info;
use yew::prelude::*;

mod config;
mod content;
mod components {
    pub mod decrypted_text;
    pub mod footer;
    pub mod icons;
    pub mod letter_glitch;
    pub mod navigation;
    pub mod newsletter;
    pub mod text_effect;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component]
fn App() -> Html {
    html! {
        <div>
            <Landing />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
