use log::Level;

/// How long the glitch overlay covers the page after mount.
pub const LOADING_DELAY_MS: u32 = 2_000;

/// Stand-in for the newsletter round trip.
pub const SUBSCRIBE_DELAY_MS: u32 = 1_000;

pub const DECRYPT_SPEED_MS: u32 = 50;
pub const DECRYPT_MAX_ITERATIONS: usize = 10;
pub const GLITCH_SPEED_MS: u32 = 50;

pub const NAV_LOGO: &str = "/assets/whytehatter-logo1.png";
pub const FOOTER_LOGO: &str = "/assets/whytehatters-logo.png";
pub const FALLBACK_LOGO: &str = "/fallback-logo.png";

pub const CONTACT_EMAIL: &str = "info@whytehatters.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn logo_paths_point_at_shipped_files() {
        for url in [NAV_LOGO, FOOTER_LOGO, FALLBACK_LOGO] {
            let file = Path::new(env!("CARGO_MANIFEST_DIR")).join(url.trim_start_matches('/'));
            let bytes = std::fs::read(&file).unwrap_or_else(|err| panic!("{}: {}", file.display(), err));
            assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "{} is not a PNG", file.display());
        }
    }
}
