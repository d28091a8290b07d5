use crate::domain::a001_client::api;
use crate::shared::components::paginated_table::PaginatedTable;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list_state::{first_page_query, ListState};
use contracts::domain::a001_client::aggregate::Client;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ClientList() -> impl IntoView {
    let state = ListState::<Client>::new();
    let filtered = state.filtered();

    let fetch = move || state.load(api::fetch_page(first_page_query()), api::fetch_all);

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Клиенты"}</h1>
                </div>
                <Flex class="header__actions" gap=FlexGap::Small align=FlexAlign::Center>
                    <SearchInput filter=state.filter placeholder="Код, имя, NIF, email, город" />
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

            <PaginatedTable records=filtered compact_column="name" />
        </div>
    }
}
