use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Модальное окно: затемнение + поверхность с заголовком и кнопкой закрытия.
///
/// Закрывается только если и нажатие, и отпускание мыши были на затемнении:
/// выделение текста внутри окна с отпусканием снаружи окно не закрывает.
#[component]
pub fn ModalFrame(
    /// Заголовок окна
    #[prop(into)]
    title: String,
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Defer close to next tick: the overlay must not be removed during its own click dispatch.
    let close_deferred = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=move |ev: ev::MouseEvent| overlay_mouse_down.set(is_direct_overlay_event(&ev))
            on:click=move |ev: ev::MouseEvent| {
                let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
                overlay_mouse_down.set(false);
                if should_close {
                    close_deferred();
                }
            }
        >
            <div class=modal_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <span class="modal__title">{title}</span>
                    <button class="modal__close" title="Закрыть" on:click=move |_| close_deferred()>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
