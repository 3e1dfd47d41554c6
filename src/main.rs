use log::info;
use octacell_page::{config, App};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Octa-Cell page");
    yew::Renderer::<App>::new().render();
}
