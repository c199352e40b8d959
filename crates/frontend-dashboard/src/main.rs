mod app;
mod components;
mod pages;
mod services;

use app::DashboardApp;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<DashboardApp>::new().render();
}
