use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookId, InventoryError, InventoryId};

/// 在庫レコード - 書籍と1対1の冊数管理
///
/// 不変条件：`0 <= available_copies <= total_copies`
/// lost_copies / damaged_copies は記録のみで、どの操作からも更新されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub inventory_id: InventoryId,
    pub book_id: BookId,
    pub total_copies: i32,
    pub available_copies: i32,
    pub lost_copies: i32,
    pub damaged_copies: i32,
    pub last_updated: NaiveDate,
}

/// 純粋関数：書籍の在庫行を新規作成する
///
/// 全冊が貸出可能な状態で作成される。
pub fn create_inventory(book_id: BookId, total_copies: i32, on: NaiveDate) -> Inventory {
    Inventory {
        inventory_id: InventoryId::new(),
        book_id,
        total_copies,
        available_copies: total_copies,
        lost_copies: 0,
        damaged_copies: 0,
        last_updated: on,
    }
}

/// 純粋関数：1冊を在庫に戻す
///
/// ビジネスルール：
/// - 加算は常にちょうど1冊
/// - available_copies は total_copies を超えられない
/// - last_updated を更新日で上書きする
///
/// 副作用なし。新しいInventoryを返す。
pub fn restock_copy(inventory: &Inventory, on: NaiveDate) -> Result<Inventory, InventoryError> {
    if inventory.available_copies >= inventory.total_copies {
        return Err(InventoryError::ExceedsTotalCopies);
    }

    Ok(Inventory {
        available_copies: inventory.available_copies + 1,
        last_updated: on,
        ..inventory.clone()
    })
}

/// 純粋関数：1冊を貸出のため取り出す
///
/// ビジネスルール：
/// - 減算は常にちょうど1冊
/// - available_copies は負になれない
/// - last_updated を更新日で上書きする
///
/// 副作用なし。新しいInventoryを返す。
pub fn checkout_copy(inventory: &Inventory, on: NaiveDate) -> Result<Inventory, InventoryError> {
    if inventory.available_copies <= 0 {
        return Err(InventoryError::NoAvailableCopies);
    }

    Ok(Inventory {
        available_copies: inventory.available_copies - 1,
        last_updated: on,
        ..inventory.clone()
    })
}
