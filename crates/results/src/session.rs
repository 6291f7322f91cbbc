use crate::client::MatchingClient;
use crate::config::ResultsConfig;
use crate::error::ResultsError;
use crate::store::ResultStore;
use contracts::usecases::u101_find_alternatives::{SearchMethod, SearchQuery, SearchResponse};
use contracts::usecases::u102_email_results::{request::DEFAULT_SUBJECT, EmailRequest};
use uuid::Uuid;

/// Билет незавершённого поиска. Заменять набор может только предъявитель
/// действующего билета — ответ пережившего свой поиск запроса отбрасывается.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(Uuid);

/// Чем закончилась попытка применить ответ поиска.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Набор заменён целиком
    Replaced { found: usize },
    /// Билет устарел или неизвестен, набор не тронут
    Stale,
}

/// Сессия поиска: владеет набором результатов, активным способом ввода и
/// охраной единственного незавершённого запроса.
///
/// Все мутации синхронны и идут через `&mut self` — одна логическая нить
/// управления, блокировки не нужны. Асинхронен только вызов клиента
/// подбора, и гонку двух ответов исключает билет, а не UI.
#[derive(Debug)]
pub struct SearchSession {
    store: ResultStore,
    method: SearchMethod,
    pending: Option<SearchTicket>,
}

impl SearchSession {
    pub fn new(config: &ResultsConfig) -> Self {
        Self {
            store: ResultStore::new(config),
            method: SearchMethod::default(),
            pending: None,
        }
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ResultStore {
        &mut self.store
    }

    pub fn method(&self) -> SearchMethod {
        self.method
    }

    /// Идёт ли поиск — вызывающий гасит кнопку отправки по этому флагу
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Начать поиск. Пока предыдущий не завершён, второй не принимается:
    /// reject-while-pending, а не last-writer-wins.
    pub fn begin(&mut self, query: &SearchQuery) -> Result<SearchTicket, ResultsError> {
        if self.pending.is_some() {
            return Err(ResultsError::SearchPending);
        }
        if query.method != self.method {
            return Err(ResultsError::validation(
                "запрос не соответствует активному способу ввода",
            ));
        }

        let ticket = SearchTicket(Uuid::new_v4());
        self.pending = Some(ticket);
        tracing::debug!(method = ?query.method, "search started");
        Ok(ticket)
    }

    /// Применить ответ завершившегося поиска. Чужой или устаревший билет
    /// не меняет ничего — это явная семантика, не побочный эффект UI.
    pub fn complete(&mut self, ticket: SearchTicket, response: SearchResponse) -> SearchOutcome {
        if self.pending != Some(ticket) {
            tracing::warn!("stale search response discarded");
            return SearchOutcome::Stale;
        }
        self.pending = None;
        let found = response.components.len();
        self.store.replace(response.components);
        SearchOutcome::Replaced { found }
    }

    /// Поиск не удался: охрана снимается, прежний набор остаётся как был —
    /// оператор просто пробует ещё раз.
    pub fn fail(&mut self, ticket: SearchTicket, error: &ResultsError) {
        if self.pending == Some(ticket) {
            self.pending = None;
            tracing::warn!(error = %error, "search failed, keeping previous result set");
        }
    }

    /// Полный цикл: охрана, вызов клиента, применение или откат.
    pub async fn run(
        &mut self,
        client: &dyn MatchingClient,
        query: SearchQuery,
    ) -> Result<SearchOutcome, ResultsError> {
        let ticket = self.begin(&query)?;
        match client.find_matches(&query).await {
            Ok(response) => Ok(self.complete(ticket, response)),
            Err(error) => {
                self.fail(ticket, &error);
                Err(error)
            }
        }
    }

    /// Сменить способ ввода: набор и выбор очищаются, незавершённый поиск
    /// лишается билета. Повторный выбор того же способа ничего не делает.
    pub fn switch_method(&mut self, method: SearchMethod) {
        if self.method == method {
            return;
        }
        self.method = method;
        self.pending = None;
        self.store.clear();
    }

    /// Собрать письмо из живого выбора. Валидация здесь, до транспорта:
    /// пустой адресат и пустой выбор — блокирующие ошибки, не исключения.
    pub fn email_request(
        &self,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<EmailRequest, ResultsError> {
        let subject = subject.into();
        let request = EmailRequest {
            recipient: recipient.into(),
            subject: if subject.is_empty() {
                DEFAULT_SUBJECT.to_string()
            } else {
                subject
            },
            message: message.into(),
            components: self
                .store
                .selected_rows()
                .into_iter()
                .map(|row| row.record)
                .collect(),
        };
        request.validate().map_err(ResultsError::Validation)?;
        Ok(request)
    }
}
