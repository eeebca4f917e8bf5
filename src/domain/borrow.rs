use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookId, BorrowId, MemberId, ReturnBorrowError};

/// 貸出期間のデフォルト（日数）
///
/// APIで返却期限が指定されなかった場合に適用される。
pub const BORROW_PERIOD_DAYS: i64 = 14;

/// 貸出ステータス
///
/// 遷移は `Borrowed -> Returned` のみ。延滞や紛失は状態として持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorrowStatus {
    /// 貸出中
    Borrowed,
    /// 返却済み
    Returned,
}

impl BorrowStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowStatus::Borrowed => "borrowed",
            BorrowStatus::Returned => "returned",
        }
    }

    pub fn is_returned(&self) -> bool {
        matches!(self, BorrowStatus::Returned)
    }
}

impl std::str::FromStr for BorrowStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "borrowed" => Ok(BorrowStatus::Borrowed),
            "returned" => Ok(BorrowStatus::Returned),
            _ => Err(format!("Invalid borrow status: {}", s)),
        }
    }
}

/// 貸出レコード - 1冊の書籍を1人の会員が借りた記録
///
/// 他の集約への参照はIDのみ。関連レコードの結合は読み出し側で行う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrow {
    pub borrow_id: BorrowId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: BorrowStatus,
}

/// 純粋関数：貸出を発行する
///
/// 返却日は未設定、ステータスはBorrowed。
///
/// 副作用なし。新しいBorrowを返す。
pub fn issue_borrow(
    book_id: BookId,
    member_id: MemberId,
    issue_date: NaiveDate,
    due_date: NaiveDate,
) -> Borrow {
    Borrow {
        borrow_id: BorrowId::new(),
        book_id,
        member_id,
        issue_date,
        due_date,
        return_date: None,
        status: BorrowStatus::Borrowed,
    }
}

/// 純粋関数：貸出を返却する
///
/// ビジネスルール：
/// - 返却済みの貸出は再返却不可
/// - 延滞していても返却は受け付ける（罰金は別集約で査定される）
///
/// 副作用なし。新しいBorrowを返す。
pub fn return_borrow(
    borrow: &Borrow,
    return_date: NaiveDate,
) -> Result<Borrow, ReturnBorrowError> {
    if borrow.status.is_returned() {
        return Err(ReturnBorrowError::AlreadyReturned);
    }

    Ok(Borrow {
        return_date: Some(return_date),
        status: BorrowStatus::Returned,
        ..borrow.clone()
    })
}
