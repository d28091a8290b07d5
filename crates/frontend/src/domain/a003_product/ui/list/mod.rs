use crate::domain::a003_product::api;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::shared::components::paginated_table::PaginatedTable;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list_state::{first_page_query, ListState};
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a003_product::aggregate::Product;
use leptos::prelude::*;
use thaw::*;

/// Открытая карточка: `None` внутри - новый товар
#[derive(Debug, Clone, PartialEq)]
struct OpenedForm(Option<String>);

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let state = ListState::<Product>::new();
    let filtered = state.filtered();
    let opened = RwSignal::new(None::<OpenedForm>);

    let fetch = move || state.load(api::fetch_page(first_page_query()), api::fetch_all);

    let on_saved = Callback::new(move |_id: String| {
        opened.set(None);
        fetch();
    });
    let on_close = Callback::new(move |_| opened.set(None));
    let open_existing = Callback::new(move |id: String| opened.set(Some(OpenedForm(Some(id)))));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Товары"}</h1>
                </div>
                <Flex class="header__actions" gap=FlexGap::Small align=FlexAlign::Center>
                    <SearchInput filter=state.filter placeholder="Артикул, наименование, категория" />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| opened.set(Some(OpenedForm(None)))>
                        {icon("plus")}
                        " Новый товар"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || state.loading.get())
                    >
                        {icon("refresh")}
                        {move || if state.loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </Flex>
            </div>

            {move || state.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <PaginatedTable records=filtered compact_column="name" on_row_click=open_existing />

            {move || opened.get().map(|OpenedForm(id)| {
                let title = if id.is_some() { "Товар" } else { "Новый товар" };
                view! {
                    <ModalFrame title=title on_close=on_close modal_class="product-details-modal">
                        <ProductDetails id=id on_saved=on_saved on_cancel=on_close />
                    </ModalFrame>
                }
            })}
        </div>
    }
}
