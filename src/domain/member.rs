use serde::{Deserialize, Serialize};

use super::MemberId;

/// 会員区分
///
/// 元データは自由形式の文字列だったが、閉じたバリアントで不正な値を排除する。
/// 現時点で区分による振る舞いの違いはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberCategory {
    /// 職員
    Staff,
    /// 学生
    Student,
}

impl MemberCategory {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberCategory::Staff => "staff",
            MemberCategory::Student => "student",
        }
    }
}

impl std::str::FromStr for MemberCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(MemberCategory::Staff),
            "student" => Ok(MemberCategory::Student),
            _ => Err(format!("Invalid member category: {}", s)),
        }
    }
}

/// 会員レコード - 連絡先と区分を持つプレーンなデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
    pub category: MemberCategory,
}

/// 純粋関数：会員を登録する
pub fn register_member(
    name: String,
    email: String,
    password: String,
    address: String,
    phone: String,
    category: MemberCategory,
) -> Member {
    Member {
        member_id: MemberId::new(),
        name,
        email,
        password,
        address,
        phone,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_member_category_as_str() {
        assert_eq!(MemberCategory::Staff.as_str(), "staff");
        assert_eq!(MemberCategory::Student.as_str(), "student");
    }

    #[test]
    fn test_member_category_from_str() {
        assert_eq!(
            MemberCategory::from_str("staff").unwrap(),
            MemberCategory::Staff
        );
        assert_eq!(
            MemberCategory::from_str("student").unwrap(),
            MemberCategory::Student
        );
        assert!(MemberCategory::from_str("faculty").is_err());
    }

    #[test]
    fn test_register_member_assigns_fresh_id() {
        let member = register_member(
            "Taro".to_string(),
            "taro@example.com".to_string(),
            "secret".to_string(),
            "Tokyo".to_string(),
            "000-0000".to_string(),
            MemberCategory::Student,
        );

        assert_eq!(member.category, MemberCategory::Student);
        assert_eq!(member.email, "taro@example.com");
    }
}
