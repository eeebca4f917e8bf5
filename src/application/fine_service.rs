use crate::domain::{self, Borrow, Fine};
use crate::ports::FineRepository;
use chrono::Utc;
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Result};

/// 罰金サービス
///
/// 延滞した返却に対して `延滞日数 × FINE_RATE_PER_DAY` の罰金を査定・永続化する。
pub struct FineService {
    fine_repository: Arc<dyn FineRepository>,
}

impl FineService {
    pub fn new(fine_repository: Arc<dyn FineRepository>) -> Self {
        Self { fine_repository }
    }

    /// 返却済み貸出の罰金を査定する
    ///
    /// 延滞がない場合は罰金レコードを作成せずNoneを返す（エラーではない）。
    pub async fn calculate_fine(&self, borrow: &Borrow) -> Result<Option<Fine>> {
        let fine = match domain::fine::assess_fine(borrow, Utc::now().date_naive()) {
            Some(fine) => fine,
            None => return Ok(None),
        };

        self.fine_repository
            .create(&fine)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        Ok(Some(fine))
    }

    /// すべての罰金を取得する
    pub async fn get_all_fines(&self) -> Result<Vec<Fine>> {
        self.fine_repository
            .find_all()
            .await
            .map_err(LibraryApplicationError::RepositoryError)
    }
}
