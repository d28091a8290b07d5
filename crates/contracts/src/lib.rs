//! Общие типы backend/frontend: записи каталога, поиск по спискам,
//! пересчёт цен и модель таблицы со страницами.

pub mod domain;
pub mod shared;
