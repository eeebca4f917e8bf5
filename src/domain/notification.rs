use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MemberId, NotificationId};

/// 通知レコード - 会員に紐づく永続化されたメッセージ
///
/// 配信メカニズム（メール・SMS）は存在しない。「通知」はデータベース行のみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: NotificationId,
    pub member_id: MemberId,
    pub message: String,
    pub sent_date: NaiveDate,
}

/// 純粋関数：通知を作成する
pub fn record_notification(member_id: MemberId, message: String, sent_on: NaiveDate) -> Notification {
    Notification {
        notification_id: NotificationId::new(),
        member_id,
        message,
        sent_date: sent_on,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_notification() {
        let member_id = MemberId::new();
        let sent_on = NaiveDate::from_ymd_opt(2025, 4, 16).unwrap();

        let notification =
            record_notification(member_id, "Book returned successfully. No fine.".to_string(), sent_on);

        assert_eq!(notification.member_id, member_id);
        assert_eq!(notification.sent_date, sent_on);
        assert_eq!(notification.message, "Book returned successfully. No fine.");
    }
}
