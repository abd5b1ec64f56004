mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

fn main() {
    console_error_panic_hook::set_once();
    app::mount();
}
