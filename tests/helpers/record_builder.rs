// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use awb_tracker::domain::{AccountState, AwbStatus, ShipmentRecord, UserAccount, UserRole};

// ==========================================
// ShipmentRecord 构建器
// ==========================================

pub struct ShipmentBuilder {
    record: ShipmentRecord,
}

impl ShipmentBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: ShipmentRecord {
                id: id.to_string(),
                supplier: "ACME Ltda".to_string(),
                waybill_number: format!("AWB-{}", id),
                ..Default::default()
            },
        }
    }

    pub fn supplier(mut self, supplier: &str) -> Self {
        self.record.supplier = supplier.to_string();
        self
    }

    pub fn waybill(mut self, number: &str) -> Self {
        self.record.waybill_number = number.to_string();
        self
    }

    pub fn status(mut self, status: AwbStatus) -> Self {
        self.record.status = status;
        self
    }

    pub fn dispatched(mut self, date: &str) -> Self {
        self.record.dispatch_date = date.to_string();
        self
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.record.brand = brand.to_string();
        self
    }

    pub fn material(mut self, material: &str) -> Self {
        self.record.material = material.to_string();
        self
    }

    pub fn documents(mut self, links: &[&str]) -> Self {
        self.record.documents = links.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> ShipmentRecord {
        self.record
    }
}

// ==========================================
// 账户
// ==========================================

pub fn admin() -> UserAccount {
    UserAccount {
        id: "u-admin".to_string(),
        name: "Admin".to_string(),
        email: "admin@example.com".to_string(),
        password: "admin-pass".to_string(),
        role: UserRole::Admin,
        state: AccountState::Active,
    }
}

pub fn operator() -> UserAccount {
    UserAccount {
        id: "u-op".to_string(),
        name: "Operador".to_string(),
        email: "op@example.com".to_string(),
        password: "op-pass".to_string(),
        role: UserRole::User,
        state: AccountState::Active,
    }
}
