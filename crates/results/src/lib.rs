//! Управление набором результатов подбора компонентов: стабильные id,
//! классификация для отображения, постраничный вывод, множественный выбор
//! и экспорт в переносимые форматы. Весь UI-слой (страницы, диалоги,
//! камера, транспорт) — внешние коллабораторы за трейтами.

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod identity;
pub mod intake;
pub mod pagination;
pub mod selection;
pub mod session;
pub mod store;

pub use classify::{classify, DisplayCategory};
pub use client::MatchingClient;
pub use config::ResultsConfig;
pub use error::ResultsError;
pub use export::{export_csv, export_json, CsvExportable, ExportFile};
pub use identity::IdAssigner;
pub use intake::IntakeSet;
pub use pagination::{PageSlot, Pagination};
pub use selection::Selectable;
pub use session::{SearchOutcome, SearchSession, SearchTicket};
pub use store::ResultStore;
