mod app;
mod bridge;
mod charts;
mod dto;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("ergo-dash ui starting");
    mount_to_body(|| view! { <app::App /> });
}
