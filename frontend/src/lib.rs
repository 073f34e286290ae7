use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod debounce;
pub mod store;
pub mod theme;
pub mod pages {
    pub mod archive;
}

use config::Config;
use pages::archive::ArchivePage;


#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! { <ArchivePage /> }
}

pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    console_error_panic_hook::set_once();
    info!("UIU Contest Archive initializing...");

    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
