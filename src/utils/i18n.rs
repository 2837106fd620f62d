use tracing::warn;

/// Locales shipped in `locales/`
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "ko"];

/// Switch the UI locale, keeping the current one for unknown codes
pub fn set_locale(locale: &str) -> bool {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
        true
    } else {
        warn!("Unsupported locale {}, keeping {}", locale, &*rust_i18n::locale());
        false
    }
}
