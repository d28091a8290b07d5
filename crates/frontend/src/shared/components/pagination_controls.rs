use crate::shared::icons::icon;
use contracts::shared::table::PAGE_SIZE_OPTIONS;
use leptos::prelude::*;

/// Кнопка навигации: переход на страницу `target()`, неактивна при `disabled()`
fn nav_button(
    icon_name: &'static str,
    title: &'static str,
    target: impl Fn() -> usize + Send + Sync + 'static,
    disabled: impl Fn() -> bool + Send + Sync + 'static,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <button
            class="pagination-btn"
            title=title
            disabled=disabled
            on:click=move |_| on_page_change.run(target())
        >
            {icon(icon_name)}
        </button>
    }
}

/// Панель страниц под таблицей.
///
/// Номера страниц с 1; для пустой коллекции панель не выводится.
/// Границы не проверяются здесь: `Pagination` сам прижимает номер.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    let size_options = move || {
        PAGE_SIZE_OPTIONS
            .iter()
            .map(|&size| {
                view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size.to_string()}
                    </option>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || { total_count.get() > 0 }>
            <div class="pagination-controls">
                {nav_button("chevrons-left", "Первая страница", || 1, at_first, on_page_change)}
                {nav_button(
                    "chevron-left",
                    "Предыдущая страница",
                    move || current_page.get().saturating_sub(1),
                    at_first,
                    on_page_change,
                )}
                <span class="pagination-info">
                    {move || format!("Стр. {} из {} · записей: {}", current_page.get(), total_pages.get(), total_count.get())}
                </span>
                {nav_button(
                    "chevron-right",
                    "Следующая страница",
                    move || current_page.get() + 1,
                    at_last,
                    on_page_change,
                )}
                {nav_button(
                    "chevrons-right",
                    "Последняя страница",
                    move || total_pages.get(),
                    at_last,
                    on_page_change,
                )}
                <select
                    class="page-size-select"
                    prop:value=move || page_size.get().to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            on_page_size_change.run(size);
                        }
                    }
                >
                    {size_options()}
                </select>
            </div>
        </Show>
    }
}
