mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use pages::home::repository::{ContactDelivery, ContactRepository, LogDelivery};
pub use pages::home::utils::{ContactError, ContactMessage};

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::set_max_level(log::LevelFilter::Info);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

/// Boots the landing page: panic hook, logging, config, then mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    init_logging();
    let cfg = config::init();
    log::set_max_level(cfg.level().to_level_filter());
    log::info!("Starting {} landing page", cfg.site_name);
    router::mount_app();
}
