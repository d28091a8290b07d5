use contracts::shared::search::RecordFilter;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Компонент поиска с debounce и кнопкой очистки.
///
/// Каждое нажатие перезапускает таймер; список фильтруется только по
/// запросу, пережившему окно ожидания. Очистка применяется сразу.
#[component]
pub fn SearchInput(
    filter: RwSignal<RecordFilter>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    // Timeout отменяется при drop: замена значения = отмена прежнего таймера
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        let now = now_ms();
        let deadline = filter
            .try_update(|f| f.type_query(new_value, now))
            .unwrap_or(now);
        let delay = deadline.saturating_sub(now) as u32;

        let timer = Timeout::new(delay, move || {
            filter.update(|f| {
                if !f.tick(now_ms()) {
                    f.settle();
                }
            });
        });
        pending.set_value(Some(timer));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        filter.update(|f| {
            f.clear();
        });
    };

    let raw_query = move || filter.with(|f| f.raw_query().to_string());
    let is_filter_active = move || filter.with(|f| !f.effective_query().trim().is_empty());

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=raw_query
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !raw_query().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
