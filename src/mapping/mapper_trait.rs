// ==========================================
// 空运提单跟踪 - 映射器 Trait
// ==========================================
// 职责: 定义外部行 ↔ 规范记录的双向映射接口（不包含实现）
// 实现者: ShipmentMapper, UserMapper
// ==========================================

use crate::mapping::data_cleaner::ExternalRow;
use crate::mapping::diagnostics::MappingDiagnostics;
use crate::mapping::error::MappingResult;
use crate::mapping::field_table::EntityKind;
use serde_json::Value;

pub trait EntityMapper: Send + Sync {
    /// 规范记录类型
    type Record: Send;

    /// 对应的实体类型
    fn kind(&self) -> EntityKind;

    /// 记录标识（可能为空）
    fn record_id<'a>(&self, record: &'a Self::Record) -> &'a str;

    /// 写入标识
    fn assign_id(&self, record: &mut Self::Record, id: String);

    /// 外部行 → 规范记录，并记录静默修正
    ///
    /// # 保证
    /// - 所有字段都有值：文本缺省为空字符串，状态缺省为枚举默认值
    /// - 纯函数，无副作用（诊断计数除外）
    fn to_canonical_with(&self, row: &ExternalRow, diagnostics: &mut MappingDiagnostics)
        -> Self::Record;

    /// 规范记录 → 外部行（写回用，使用表格表头）
    ///
    /// # 返回
    /// - Err(MissingIdentifier): 记录没有标识，调用方必须先生成
    fn to_external(&self, record: &Self::Record) -> MappingResult<ExternalRow>;

    /// 外部行 → 规范记录（不关心诊断时使用）
    fn to_canonical(&self, row: &ExternalRow) -> Self::Record {
        let mut diagnostics = MappingDiagnostics::default();
        self.to_canonical_with(row, &mut diagnostics)
    }

    /// 批量映射远程返回的行，非对象行跳过并计数
    fn map_rows(&self, rows: &[Value], diagnostics: &mut MappingDiagnostics) -> Vec<Self::Record> {
        let mut records = Vec::with_capacity(rows.len());
        for (index, value) in rows.iter().enumerate() {
            match value.as_object() {
                Some(row) => records.push(self.to_canonical_with(row, diagnostics)),
                None => {
                    tracing::debug!(index, sheet = self.kind().sheet_name(), "跳过非对象行");
                    diagnostics.skipped_rows += 1;
                }
            }
        }
        records
    }
}
