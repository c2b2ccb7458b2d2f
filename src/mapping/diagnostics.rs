// ==========================================
// 空运提单跟踪 - 映射诊断
// ==========================================
// 职责: 统计被静默回落的字段，便于发现上游数据质量问题
// 红线: 只计数，不改变默认映射行为
// ==========================================

use serde::Serialize;

/// 一批行映射过程中的静默修正计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MappingDiagnostics {
    pub rows: usize,              // 处理的行数
    pub skipped_rows: usize,      // 非对象行（跳过）
    pub missing_ids: usize,       // 缺少标识的行
    pub coerced_statuses: usize,  // 状态文本回落到默认值
    pub dropped_documents: usize, // 非链接的文档槽位被丢弃
}

impl MappingDiagnostics {
    /// 是否存在任何静默修正
    pub fn has_issues(&self) -> bool {
        self.skipped_rows > 0
            || self.missing_ids > 0
            || self.coerced_statuses > 0
            || self.dropped_documents > 0
    }

    /// 有修正时输出一条 warn 日志
    pub fn log_summary(&self, sheet: &str) {
        if !self.has_issues() {
            tracing::debug!(sheet, rows = self.rows, "行映射完成，无静默修正");
            return;
        }
        tracing::warn!(
            sheet,
            rows = self.rows,
            skipped_rows = self.skipped_rows,
            missing_ids = self.missing_ids,
            coerced_statuses = self.coerced_statuses,
            dropped_documents = self.dropped_documents,
            "行映射存在静默修正"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_issues() {
        let mut diag = MappingDiagnostics::default();
        diag.rows = 3;
        assert!(!diag.has_issues());
        diag.coerced_statuses = 1;
        assert!(diag.has_issues());
    }
}
