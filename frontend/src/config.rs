use anyhow::Context;
use serde::Deserialize;
use std::sync::OnceLock;

const CONFIG_GLOBAL: &str = "__BRIGHTSIDE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub copyright_year: u16,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Brightside".into(),
            copyright_year: 2024,
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    pub fn level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }
}

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

pub fn parse_config(raw: &str) -> anyhow::Result<SiteConfig> {
    serde_json::from_str(raw).with_context(|| format!("invalid window.{} value", CONFIG_GLOBAL))
}

#[cfg(target_arch = "wasm32")]
fn read_global() -> Option<String> {
    // Optional global object: window.__BRIGHTSIDE_CONFIG = { site_name: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &CONFIG_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global() -> Option<String> {
    None
}

fn load_from(raw: Option<String>) -> SiteConfig {
    match raw {
        Some(raw) => parse_config(&raw).unwrap_or_else(|err| {
            log::warn!("{:#}; falling back to defaults", err);
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    }
}

fn load() -> SiteConfig {
    load_from(read_global())
}

/// Reads the runtime config once; later calls return the cached value.
pub fn init() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(load)
}

pub fn site_config() -> SiteConfig {
    init().clone()
}
