pub mod request;
pub mod response;

pub use request::{SearchMethod, SearchQuery};
pub use response::SearchResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct FindAlternatives;

impl UseCaseMetadata for FindAlternatives {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "find_alternatives"
    }

    fn display_name() -> &'static str {
        "Подбор аналогов компонентов"
    }

    fn description() -> &'static str {
        "Поиск замен электронных компонентов по файлу, артикулу или фото"
    }
}
