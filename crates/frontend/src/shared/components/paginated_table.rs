use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::viewport::use_display_mode;
use contracts::shared::table::{DetailLine, DisplayMode, TablePresenter, TableRecord, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use thaw::*;

/// Таблица записей с постраничным выводом.
///
/// На широком экране показывает все колонки, на узком одну колонку и
/// кнопку карточки записи. Режим не влияет на состав страницы.
#[component]
pub fn PaginatedTable<T>(
    /// Записи после фильтрации
    records: Signal<Vec<T>>,
    /// Колонка для компактного режима (по умолчанию первая)
    #[prop(optional)]
    compact_column: Option<&'static str>,
    /// Клик по строке (ключ записи)
    #[prop(optional)]
    on_row_click: Option<Callback<String>>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let presenter = {
        let base = TablePresenter::<T>::new(DEFAULT_PAGE_SIZE);
        RwSignal::new(match compact_column {
            Some(key) => base.with_compact_column(key),
            None => base,
        })
    };
    let mode = use_display_mode();
    let detail = RwSignal::new(None::<(String, Vec<DetailLine>)>);

    // Смена коллекции (фильтр, догрузка) - прижать номер страницы
    Effect::new(move |_| {
        let count = records.with(|r| r.len());
        presenter.update(|p| p.pagination_mut().set_total(count));
    });

    let pagination = move || presenter.with(|p| *p.pagination());
    let current_page = Signal::derive(move || pagination().page());
    let total_pages = Signal::derive(move || pagination().total_pages());
    let total_count = Signal::derive(move || records.with(|r| r.len()));
    let page_size = Signal::derive(move || pagination().page_size());

    let on_page_change = Callback::new(move |page: usize| {
        presenter.update(|p| p.pagination_mut().go_to(page));
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        presenter.update(|p| p.pagination_mut().set_page_size(size));
    });

    let headers = move || {
        let mode = mode.get();
        presenter.with(|p| p.headers(mode))
    };

    // Строки текущей страницы вместе с карточками для компактного режима
    let page_rows = move || {
        let mode = mode.get();
        presenter.with(|p| {
            let mut pagination = *p.pagination();
            records.with(|all| {
                let page = pagination.paginate(all);
                let rows = p.rows(mode, page.items);
                let details: Vec<Vec<DetailLine>> = if mode.is_compact() {
                    page.items.iter().map(|r| p.detail(r)).collect()
                } else {
                    Vec::new()
                };
                (rows, details)
            })
        })
    };

    let row_class = if on_row_click.is_some() { "table__row table__row--clickable" } else { "table__row" };

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {move || headers().into_iter().map(|h| view! {
                            <TableHeaderCell attr:data-key=h.key>{h.label}</TableHeaderCell>
                        }).collect_view()}
                        <Show when=move || mode.get() == DisplayMode::Compact>
                            <TableHeaderCell class="table__header-cell--action">""</TableHeaderCell>
                        </Show>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let (rows, mut details) = page_rows();
                        details.reverse();
                        rows.into_iter().map(|row| {
                            let card = if row.has_detail { details.pop() } else { None };
                            let key = row.key.clone();
                            let title = row.cells.first().cloned().unwrap_or_default();
                            view! {
                                <TableRow
                                    class=row_class
                                    on:click=move |_| {
                                        if let Some(cb) = on_row_click {
                                            cb.run(key.clone());
                                        }
                                    }
                                >
                                    {row.cells.into_iter().map(|cell| view! {
                                        <TableCell>
                                            <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                        </TableCell>
                                    }).collect_view()}
                                    {card.map(|lines| {
                                        let lines = StoredValue::new(lines);
                                        let title = title.clone();
                                        view! {
                                            <TableCell class="table__cell--action">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    attr:title="Подробнее"
                                                    on_click=move |ev: leptos::ev::MouseEvent| {
                                                        ev.stop_propagation();
                                                        detail.set(Some((title.clone(), lines.get_value())));
                                                    }
                                                >
                                                    {icon("eye")}
                                                </Button>
                                            </TableCell>
                                        }
                                    })}
                                </TableRow>
                            }
                        }).collect_view()
                    }}
                </TableBody>
            </Table>
        </div>

        <PaginationControls
            current_page=current_page
            total_pages=total_pages
            total_count=total_count
            page_size=page_size
            on_page_change=on_page_change
            on_page_size_change=on_page_size_change
        />

        {move || detail.get().map(|(title, lines)| view! {
            <ModalFrame title=title on_close=Callback::new(move |_| detail.set(None))>
                <dl class="record-card">
                    {lines.into_iter().map(|line| view! {
                        <dt class="record-card__label">{line.label}</dt>
                        <dd class="record-card__value">{line.value}</dd>
                    }).collect_view()}
                </dl>
            </ModalFrame>
        })}
    }
}
