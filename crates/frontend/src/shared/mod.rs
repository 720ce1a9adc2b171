pub mod components;
pub mod i18n;
pub mod state;
