use crate::domain::{Member, value_objects::MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員リポジトリポート
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 会員を新規保存する
    async fn create(&self, member: &Member) -> Result<()>;

    /// IDで会員を取得する
    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>>;

    /// すべての会員を取得する
    async fn find_all(&self) -> Result<Vec<Member>>;

    /// 会員を上書き更新する
    ///
    /// 対象が存在しない場合はfalseを返す。
    async fn update(&self, member: &Member) -> Result<bool>;

    /// 会員を削除する
    ///
    /// 対象が存在しない場合はfalseを返す。
    async fn delete(&self, member_id: MemberId) -> Result<bool>;
}
