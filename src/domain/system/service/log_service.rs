use anyhow::Result;

use crate::api::dto::system_dto::PaginatedLogResponse;
use crate::core::persistence::logs::log_repository::LogRepository;

const DEFAULT_LOG_PAGE: usize = 500;
const MAX_LOG_PAGE: usize = 2000;

pub struct LogService<R: LogRepository> {
    repo: R,
}

impl<R: LogRepository> LogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_system_log_file_list(&self) -> Result<Vec<String>> {
        self.repo.get_log_dates()
    }

    pub async fn get_system_log_lines(
        &self,
        date: &str,
        cursor: Option<usize>,
        limit: Option<usize>,
    ) -> Result<PaginatedLogResponse> {
        let all = self.repo.get_log_lines(date)?;

        let cursor = cursor.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LOG_PAGE).min(MAX_LOG_PAGE);

        let lines: Vec<String> = all.iter().skip(cursor).take(limit).cloned().collect();
        let consumed = cursor + lines.len();
        let next_cursor = if consumed < all.len() {
            Some(consumed)
        } else {
            None
        };

        Ok(PaginatedLogResponse {
            date: date.to_string(),
            lines,
            next_cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockLogRepository {
        lines: Mutex<Vec<String>>,
    }

    impl LogRepository for MockLogRepository {
        fn get_log_dates(&self) -> Result<Vec<String>> {
            Ok(vec!["2026-08-07".into()])
        }

        fn get_log_lines(&self, _date: &str) -> Result<Vec<String>> {
            Ok(self.lines.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn paginates_with_cursor() {
        let service = LogService::new(MockLogRepository {
            lines: Mutex::new((0..7).map(|i| format!("line {i}")).collect()),
        });

        let page = service
            .get_system_log_lines("2026-08-07", None, Some(3))
            .await
            .unwrap();
        assert_eq!(page.lines, vec!["line 0", "line 1", "line 2"]);
        assert_eq!(page.next_cursor, Some(3));

        let page = service
            .get_system_log_lines("2026-08-07", Some(6), Some(3))
            .await
            .unwrap();
        assert_eq!(page.lines, vec!["line 6"]);
        assert_eq!(page.next_cursor, None);
    }
}
