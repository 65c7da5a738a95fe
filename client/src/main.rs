//! Browser entry point. Built by `trunk` with the `csr` feature.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(client::app::App);
    }
}
