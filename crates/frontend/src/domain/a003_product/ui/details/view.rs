use super::view_model::{typed_price_edit, ProductDetailsVm};
use crate::shared::icons::icon;
use contracts::shared::pricing::{PriceEdit, PriceState};
use leptos::prelude::*;
use thaw::*;

/// Поле цены: значение из `PriceState`, ввод превращается в `PriceEdit`.
///
/// `Input` работает со своим `RwSignal<String>`; два эффекта держат его
/// в согласии с состоянием цен (пересчитанное парное поле тоже попадает сюда).
#[component]
fn PriceField(
    label: &'static str,
    vm: ProductDetailsVm,
    read: fn(&PriceState) -> String,
    edit: fn(String) -> PriceEdit,
) -> impl IntoView {
    let text = RwSignal::new(vm.prices.with_untracked(read));

    Effect::new(move |_| {
        let current = vm.prices.with(read);
        if text.get_untracked() != current {
            text.set(current);
        }
    });

    Effect::new(move |_| {
        let typed = text.get();
        if let Some(change) = vm.prices.with_untracked(|state| typed_price_edit(state, read, edit, typed)) {
            vm.edit_price(change);
        }
    });

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <Input value=text placeholder="0.00" disabled=vm.is_read_only() attr:inputmode="decimal" />
        </div>
    }
}

#[component]
pub fn ProductDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsVm::new();
    if let Some(id) = id {
        vm.load(id);
    }
    let read_only = vm.is_read_only();
    let save_disabled = vm.is_save_disabled();

    view! {
        <div class="details-container product-details">
            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            <Show when=move || vm.loading.get()>
                <Flex justify=FlexJustify::Center>
                    <Spinner />
                </Flex>
            </Show>

            <div class="details-section">
                <h4 class="details-section__title">"Основные поля"</h4>
                <div class="details-grid--3col">
                    <div class="form__group">
                        <label class="form__label">"Артикул *"</label>
                        <Input value=vm.reference placeholder="PRD-001" disabled=read_only />
                    </div>
                    <div class="form__group" style="grid-column: span 2;">
                        <label class="form__label">"Наименование *"</label>
                        <Input value=vm.name placeholder="Введите наименование" disabled=read_only />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Категория"</label>
                        <Input value=vm.category placeholder="Опционально" disabled=read_only />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Остаток"</label>
                        <Input value=vm.stock input_type=InputType::Number disabled=read_only />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Ставка НДС, %"</label>
                        <Input value=vm.tax_rate disabled=read_only />
                    </div>
                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Изображение"</label>
                        <Input value=vm.image_name placeholder="Имя файла" disabled=read_only />
                    </div>
                </div>
            </div>

            <div class="details-section">
                <h4 class="details-section__title">"Цены"</h4>
                <div class="details-grid--2col">
                    <PriceField
                        label="Закупка без НДС"
                        vm=vm
                        read=|s: &PriceState| s.purchase_ex_tax.clone()
                        edit=PriceEdit::EditPurchaseExTax
                    />
                    <PriceField
                        label="Закупка с НДС"
                        vm=vm
                        read=|s: &PriceState| s.purchase_inc_tax.clone()
                        edit=PriceEdit::EditPurchaseIncTax
                    />
                    <PriceField
                        label="Продажа без НДС"
                        vm=vm
                        read=|s: &PriceState| s.sale_ex_tax.clone()
                        edit=PriceEdit::EditSaleExTax
                    />
                    <PriceField
                        label="Продажа с НДС"
                        vm=vm
                        read=|s: &PriceState| s.sale_inc_tax.clone()
                        edit=PriceEdit::EditSaleIncTax
                    />
                </div>
                <Flex gap=FlexGap::Large class="form__margins">
                    <span>"Наценка: "{move || vm.prices.with(|s| s.margin_on_cost_text())}" %"</span>
                    <span>"Маржа: "{move || vm.prices.with(|s| s.margin_on_sale_text())}" %"</span>
                </Flex>
            </div>

            <div class="form__group">
                <label class="form__label">"Комментарий"</label>
                <Textarea value=vm.comment placeholder="Опционально" disabled=read_only attr:rows=3 />
            </div>

            <Flex justify=FlexJustify::End gap=FlexGap::Small class="details__actions">
                <Show when=move || !read_only.get()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save(on_saved)
                        disabled=save_disabled
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { " Сохранение..." } else { " Сохранить" }}
                    </Button>
                </Show>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    " Закрыть"
                </Button>
            </Flex>
        </div>
    }
}
