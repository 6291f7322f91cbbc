pub mod request;

pub use request::EmailRequest;

use crate::usecases::common::UseCaseMetadata;

pub struct EmailResults;

impl UseCaseMetadata for EmailResults {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "email_results"
    }

    fn display_name() -> &'static str {
        "Отправка результатов по почте"
    }

    fn description() -> &'static str {
        "Передача выбранных строк результатов внешнему почтовому транспорту"
    }
}
