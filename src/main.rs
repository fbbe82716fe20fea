#[cfg(feature = "csr")]
fn main() {
    use portfolio_site::app::App;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("couldn't initialise console logging: {err}");
    }
    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // nothing to mount without a browser target
    // see lib.rs for the framework-free modules
}
