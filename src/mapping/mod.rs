// ==========================================
// 空运提单跟踪 - 映射层
// ==========================================
// 职责: 外部表格行 ↔ 规范记录
// 包含: 字段映射 / 状态规范化 / 文档链接打包 / 诊断
// ==========================================

pub mod data_cleaner;
pub mod diagnostics;
pub mod document_packer;
pub mod error;
pub mod field_mapper;
pub mod field_table;
pub mod mapper_trait;
pub mod status_normalizer;

// 重导出核心类型
pub use data_cleaner::{DataCleaner, ExternalRow};
pub use diagnostics::MappingDiagnostics;
pub use document_packer::{pack, pack_links, unpack, DOCUMENT_SLOT_COUNT};
pub use error::{MappingError, MappingResult};
pub use field_mapper::{new_record_id, ShipmentMapper, UserMapper};
pub use field_table::{EntityKind, ShipmentField, UserField};
pub use mapper_trait::EntityMapper;
pub use status_normalizer::{classify_status, normalize_status, StatusMatch};
