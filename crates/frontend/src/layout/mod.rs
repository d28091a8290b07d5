pub mod global_context;

use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_article::ui::list::ArticleList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::shared::icons::icon;
use global_context::{AppGlobalContext, Section};
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button class="top-header__toggle" on:click=move |_| ctx.toggle_left() title="Меню">
                    {icon("menu")}
                </button>
                <span class="top-header__title">{"Бэк-офис каталога"}</span>
            </header>

            <div class="app-body">
                <Show when=move || ctx.left_open.get()>
                    <nav class="sidebar">
                        {Section::ALL.into_iter().map(|section| view! {
                            <button
                                class="sidebar__item"
                                class:sidebar__item--active=move || ctx.active.get() == section
                                on:click=move |_| ctx.activate(section)
                            >
                                {icon(section.icon())}
                                <span>{section.title()}</span>
                            </button>
                        }).collect_view()}
                    </nav>
                </Show>

                <main class="app-main">
                    {move || match ctx.active.get() {
                        Section::Clients => view! { <ClientList /> }.into_any(),
                        Section::Articles => view! { <ArticleList /> }.into_any(),
                        Section::Products => view! { <ProductList /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
