// ==========================================
// 集成测试辅助
// ==========================================

#![allow(dead_code)]

pub mod memory_store;
pub mod record_builder;

pub use memory_store::MemorySheetStore;
pub use record_builder::{admin, operator, ShipmentBuilder};
