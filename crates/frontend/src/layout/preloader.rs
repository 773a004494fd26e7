//! Full-screen loading overlay shown while the site starts.

use leptos::mount::mount_to;
use leptos::prelude::*;

use crate::config::SiteSettings;
use crate::shared::dom;

const KEYFRAMES: &str = r#"
@keyframes spin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}
@keyframes pulse {
    0%, 100% { opacity: 0.3; transform: scale(0.8); }
    50% { opacity: 1; transform: scale(1); }
}
@keyframes bounce {
    0%, 80%, 100% { transform: translateY(0); }
    40% { transform: translateY(-10px); }
}
"#;

const OVERLAY_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
background-color:var(--preloader-bg);justify-content:center;align-items:center;z-index:9999;";

const SPINNER_STYLE: &str = "border:4px solid rgba(255, 255, 255, 0.3);border-radius:50%;\
border-top:4px solid var(--primary);width:40px;height:40px;";

/// CSS `animation` shorthand for the spinner, e.g. `spin 2s linear infinite`.
pub fn spinner_animation(name: &str, duration_ms: u32) -> String {
    format!("{} {}s linear infinite", name, f64::from(duration_ms) / 1000.0)
}

/// How much longer the overlay must stay up after `elapsed_ms`.
pub fn remaining_ms(min_duration_ms: u32, elapsed_ms: i64) -> u32 {
    let remaining = i64::from(min_duration_ms) - elapsed_ms.max(0);
    remaining.clamp(0, i64::from(min_duration_ms)) as u32
}

/// Switches for a mounted overlay.
#[derive(Clone, Copy)]
pub struct PreloaderHandle {
    pub visible: RwSignal<bool>,
    /// Spinner `animation` shorthand, see [`spinner_animation`].
    pub animation: RwSignal<String>,
}

#[component]
pub fn Preloader(visible: RwSignal<bool>, animation: RwSignal<String>) -> impl IntoView {
    let spinner_style = move || format!("{}animation:{};", SPINNER_STYLE, animation.get());

    view! {
        <style id="preloader-styles">{KEYFRAMES}</style>
        <div
            id="preloader"
            style=move || {
                format!(
                    "{}display:{};",
                    OVERLAY_STYLE,
                    if visible.get() { "flex" } else { "none" },
                )
            }
        >
            <div style="text-align:center;">
                <div style=spinner_style></div>
                <div style="margin-top:1rem;color:var(--text-primary);">"Loading..."</div>
            </div>
        </div>
    }
}

/// Mount the overlay on `<body>` with the built-in animation. The
/// configured one is applied later through the returned handle.
pub fn show(settings: &SiteSettings) -> PreloaderHandle {
    let visible = RwSignal::new(true);
    let animation = RwSignal::new(spinner_animation(
        &settings.preloader_animation,
        settings.min_preloader_ms,
    ));

    match dom::document().and_then(|doc| doc.body()) {
        Some(body) => {
            mount_to(body, move || view! { <Preloader visible=visible animation=animation /> })
                .forget();
        }
        None => log::warn!("no <body> to host the preloader"),
    }

    PreloaderHandle { visible, animation }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_animation() {
        assert_eq!(spinner_animation("spin", 2000), "spin 2s linear infinite");
        assert_eq!(spinner_animation("pulse", 1500), "pulse 1.5s linear infinite");
    }

    #[test]
    fn test_remaining_is_bounded_by_minimum() {
        assert_eq!(remaining_ms(2000, 0), 2000);
        assert_eq!(remaining_ms(2000, 750), 1250);
        assert_eq!(remaining_ms(2000, 5000), 0);
        assert_eq!(remaining_ms(2000, -10), 2000);
    }
}
