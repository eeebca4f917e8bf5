use crate::domain::{Member, value_objects::MemberId};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// MemberRepositoryのインメモリ実装
pub struct MemberRepository {
    members: Mutex<HashMap<MemberId, Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn create(&self, member: &Member) -> Result<()> {
        let mut members = self.members.lock().unwrap();
        members.insert(member.member_id, member.clone());
        Ok(())
    }

    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        let members = self.members.lock().unwrap();
        Ok(members.get(&member_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>> {
        let members = self.members.lock().unwrap();
        Ok(members.values().cloned().collect())
    }

    async fn update(&self, member: &Member) -> Result<bool> {
        let mut members = self.members.lock().unwrap();
        if !members.contains_key(&member.member_id) {
            return Ok(false);
        }
        members.insert(member.member_id, member.clone());
        Ok(true)
    }

    async fn delete(&self, member_id: MemberId) -> Result<bool> {
        let mut members = self.members.lock().unwrap();
        Ok(members.remove(&member_id).is_some())
    }
}
