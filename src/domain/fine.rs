use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Borrow, BorrowId, FineId};

/// 1日あたりの罰金額（通貨単位は未指定）
pub const FINE_RATE_PER_DAY: i64 = 10;

/// 罰金ステータス
///
/// 支払いワークフローは存在しないため、作成された罰金は常にUnpaidのまま。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FineStatus {
    /// 未払い
    Unpaid,
    /// 支払い済み
    Paid,
}

impl FineStatus {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            FineStatus::Unpaid => "unpaid",
            FineStatus::Paid => "paid",
        }
    }
}

impl std::str::FromStr for FineStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(FineStatus::Unpaid),
            "paid" => Ok(FineStatus::Paid),
            _ => Err(format!("Invalid fine status: {}", s)),
        }
    }
}

/// 罰金レコード - 貸出と1対1の延滞ペナルティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fine {
    pub fine_id: FineId,
    pub borrow_id: BorrowId,
    pub amount: i64,
    pub fine_date: NaiveDate,
    pub status: FineStatus,
}

/// 純粋関数：返却済み貸出の罰金を査定する
///
/// ビジネスルール：
/// - 延滞日数 = 返却日 - 返却期限（暦日単位）
/// - 延滞日数 > 0 の場合のみ `延滞日数 × FINE_RATE_PER_DAY` の罰金を生成
/// - 期限内の返却は罰金なし（エラーではなく不在として表現）
/// - 返却日が未設定の貸出は査定対象外
///
/// 副作用なし。生成された罰金を返す。
pub fn assess_fine(borrow: &Borrow, assessed_on: NaiveDate) -> Option<Fine> {
    let return_date = borrow.return_date?;
    let days_late = (return_date - borrow.due_date).num_days();

    if days_late <= 0 {
        return None;
    }

    Some(Fine {
        fine_id: FineId::new(),
        borrow_id: borrow.borrow_id,
        amount: days_late * FINE_RATE_PER_DAY,
        fine_date: assessed_on,
        status: FineStatus::Unpaid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookId, MemberId, borrow::issue_borrow, borrow::return_borrow};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// 0日目に貸出、10日目が期限、15日目に返却 → 罰金50
    #[test]
    fn test_assess_fine_five_days_late() {
        let borrow = issue_borrow(
            BookId::new(),
            MemberId::new(),
            date(2025, 4, 1),
            date(2025, 4, 11),
        );
        let returned = return_borrow(&borrow, date(2025, 4, 16)).unwrap();

        let fine = assess_fine(&returned, date(2025, 4, 16)).unwrap();

        assert_eq!(fine.amount, 50);
        assert_eq!(fine.status, FineStatus::Unpaid);
        assert_eq!(fine.borrow_id, borrow.borrow_id);
        assert_eq!(fine.fine_date, date(2025, 4, 16));
    }

    /// 期限当日の返却 → 罰金なし
    #[test]
    fn test_assess_fine_none_when_returned_on_due_date() {
        let borrow = issue_borrow(
            BookId::new(),
            MemberId::new(),
            date(2025, 4, 1),
            date(2025, 4, 11),
        );
        let returned = return_borrow(&borrow, date(2025, 4, 11)).unwrap();

        assert!(assess_fine(&returned, date(2025, 4, 11)).is_none());
    }

    /// 期限前の返却 → 罰金なし
    #[test]
    fn test_assess_fine_none_when_returned_early() {
        let borrow = issue_borrow(
            BookId::new(),
            MemberId::new(),
            date(2025, 4, 1),
            date(2025, 4, 11),
        );
        let returned = return_borrow(&borrow, date(2025, 4, 5)).unwrap();

        assert!(assess_fine(&returned, date(2025, 4, 5)).is_none());
    }

    /// 1日の延滞は日割りレートそのもの
    #[test]
    fn test_assess_fine_one_day_late() {
        let borrow = issue_borrow(
            BookId::new(),
            MemberId::new(),
            date(2025, 4, 1),
            date(2025, 4, 11),
        );
        let returned = return_borrow(&borrow, date(2025, 4, 12)).unwrap();

        let fine = assess_fine(&returned, date(2025, 4, 12)).unwrap();
        assert_eq!(fine.amount, FINE_RATE_PER_DAY);
    }

    /// 返却日が未設定の貸出は査定しない
    #[test]
    fn test_assess_fine_none_when_not_returned() {
        let borrow = issue_borrow(
            BookId::new(),
            MemberId::new(),
            date(2025, 4, 1),
            date(2025, 4, 11),
        );

        assert!(assess_fine(&borrow, date(2025, 4, 20)).is_none());
    }

    /// 月をまたぐ延滞も暦日で数える
    #[test]
    fn test_assess_fine_counts_calendar_days_across_months() {
        let borrow = issue_borrow(
            BookId::new(),
            MemberId::new(),
            date(2025, 4, 20),
            date(2025, 4, 28),
        );
        let returned = return_borrow(&borrow, date(2025, 5, 3)).unwrap();

        let fine = assess_fine(&returned, date(2025, 5, 3)).unwrap();
        assert_eq!(fine.amount, 5 * FINE_RATE_PER_DAY);
    }

    #[test]
    fn test_fine_status_round_trip() {
        use std::str::FromStr;

        assert_eq!(FineStatus::from_str("unpaid").unwrap(), FineStatus::Unpaid);
        assert_eq!(FineStatus::from_str("paid").unwrap(), FineStatus::Paid);
        assert!(FineStatus::from_str("UNPAID").is_err());
    }
}
