use thiserror::Error;

/// Ошибки подсистемы результатов.
///
/// Все три класса локально восстановимы: валидация блокирует действие,
/// transport/malformed оставляют прежний набор нетронутым.
#[derive(Debug, Error)]
pub enum ResultsError {
    /// Локальная валидация до обращения к транспорту
    #[error("validation failed: {0}")]
    Validation(String),

    /// Сетевая ошибка или неуспешный ответ внешнего сервиса
    #[error("transport error: {0}")]
    Transport(String),

    /// Успешный ответ, не прошедший проверку схемы
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Уже есть незавершённый поиск, второй не запускаем
    #[error("a search is already pending")]
    SearchPending,

    #[error("export failed: {0}")]
    Export(String),
}

impl From<serde_json::Error> for ResultsError {
    fn from(err: serde_json::Error) -> Self {
        ResultsError::MalformedResponse(err.to_string())
    }
}

impl ResultsError {
    pub fn validation(message: impl Into<String>) -> Self {
        ResultsError::Validation(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        ResultsError::Transport(message.into())
    }
}
