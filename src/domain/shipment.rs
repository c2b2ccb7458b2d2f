// ==========================================
// 空运提单跟踪 - 运单领域模型
// ==========================================
// 红线: id 非空且在与远程表格往返时保持稳定
// 红线: status 永远是 AwbStatus 的成员
// ==========================================

use crate::domain::types::AwbStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// ShipmentRecord - 规范运单记录
// ==========================================
// 用途: 映射层写入，查询/统计/导出只读
// 文本字段缺失时为空字符串，从不为 None
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShipmentRecord {
    // ===== 主键 =====
    pub id: String, // 记录唯一标识

    // ===== 基础信息 =====
    pub supplier: String,      // 供应商
    pub dispatch_date: String, // 发运日期（原样保留表格中的文本）
    pub invoice_refs: String,  // 发票号（可能多个，原样保留）
    pub waybill_number: String, // 运单号
    pub status: AwbStatus,     // 运单状态

    // ===== 到货与货物 =====
    pub arrival_date: String, // 预计/实际到货日期
    pub brand: String,        // 品牌
    pub material: String,     // 物料
    pub remark: String,       // 备注

    // ===== 链接 =====
    pub tracking_url: String,   // 跟踪链接
    pub documents: Vec<String>, // 文档链接（按槽位顺序）
}

impl ShipmentRecord {
    /// 发票号列表（按常见分隔符拆分，去除空白项）
    pub fn invoice_list(&self) -> Vec<&str> {
        self.invoice_refs
            .split([',', ';', '/'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// 是否已有标识
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_has_empty_text_and_default_status() {
        let record = ShipmentRecord::default();
        assert_eq!(record.supplier, "");
        assert_eq!(record.status, AwbStatus::InTransit);
        assert!(record.documents.is_empty());
        assert!(!record.has_id());
    }

    #[test]
    fn test_invoice_list() {
        let record = ShipmentRecord {
            invoice_refs: "NF 101, NF 102 / NF 103;".to_string(),
            ..Default::default()
        };
        assert_eq!(record.invoice_list(), vec!["NF 101", "NF 102", "NF 103"]);
    }
}
