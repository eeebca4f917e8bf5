use crate::domain::{self, Member, MemberCategory, value_objects::MemberId};
use crate::ports::MemberRepository;
use std::sync::Arc;

use super::errors::{LibraryApplicationError, Result};

/// 会員サービス
///
/// 会員レコードのCRUDをリポジトリに委譲する。
pub struct MemberService {
    member_repository: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(member_repository: Arc<dyn MemberRepository>) -> Self {
        Self { member_repository }
    }

    /// 会員を登録する
    pub async fn add_member(
        &self,
        name: String,
        email: String,
        password: String,
        address: String,
        phone: String,
        category: MemberCategory,
    ) -> Result<Member> {
        let member = domain::member::register_member(name, email, password, address, phone, category);

        self.member_repository
            .create(&member)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        Ok(member)
    }

    /// すべての会員を取得する
    pub async fn get_all_members(&self) -> Result<Vec<Member>> {
        self.member_repository
            .find_all()
            .await
            .map_err(LibraryApplicationError::RepositoryError)
    }

    /// IDで会員を取得する
    pub async fn get_member_by_id(&self, member_id: MemberId) -> Result<Member> {
        self.member_repository
            .find_by_id(member_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?
            .ok_or(LibraryApplicationError::MemberNotFound)
    }

    /// 会員を上書き更新する
    #[allow(clippy::too_many_arguments)]
    pub async fn update_member(
        &self,
        member_id: MemberId,
        name: String,
        email: String,
        password: String,
        address: String,
        phone: String,
        category: MemberCategory,
    ) -> Result<Member> {
        let member = Member {
            member_id,
            name,
            email,
            password,
            address,
            phone,
            category,
        };

        let updated = self
            .member_repository
            .update(&member)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        if !updated {
            return Err(LibraryApplicationError::MemberNotFound);
        }

        Ok(member)
    }

    /// 会員を削除する
    pub async fn delete_member(&self, member_id: MemberId) -> Result<()> {
        let deleted = self
            .member_repository
            .delete(member_id)
            .await
            .map_err(LibraryApplicationError::RepositoryError)?;

        if !deleted {
            return Err(LibraryApplicationError::MemberNotFound);
        }

        Ok(())
    }
}
