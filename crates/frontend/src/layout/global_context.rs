use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Раздел бэк-офиса; ключ раздела хранится в URL (`?active=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Clients,
    Articles,
    Products,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Clients, Section::Articles, Section::Products];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Clients => "a001_client",
            Section::Articles => "a002_article",
            Section::Products => "a003_product",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Clients => "Клиенты",
            Section::Articles => "Статьи",
            Section::Products => "Товары",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Clients => "customers",
            Section::Articles => "articles",
            Section::Products => "products",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Clients),
            left_open: RwSignal::new(true),
        }
    }

    /// Восстанавливает раздел из `?active=` и дальше держит URL в синхроне
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(section) = params.get("active").and_then(|key| Section::from_key(key)) {
            self.active.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get().key();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key.to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, section: Section) {
        log::debug!("activate section: {}", section.key());
        self.active.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("unknown"), None);
    }
}
