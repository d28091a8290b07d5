use contracts::shared::table::DisplayMode;
use leptos::ev;
use leptos::prelude::*;

/// Текущая ширина окна браузера (px)
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::MAX)
}

/// Режим таблицы по ширине окна, обновляется при resize
pub fn use_display_mode() -> Signal<DisplayMode> {
    let mode = RwSignal::new(DisplayMode::for_viewport(viewport_width()));

    let handle = window_event_listener(ev::resize, move |_| {
        let next = DisplayMode::for_viewport(viewport_width());
        if mode.get_untracked() != next {
            mode.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    mode.into()
}
