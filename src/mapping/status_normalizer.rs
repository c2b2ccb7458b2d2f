// ==========================================
// 空运提单跟踪 - 状态规范化
// ==========================================
// 规则: TRIM + 小写后与每个状态的文本精确比较，先到先得
//       未命中时查别名表；仍未命中则回落到默认值（在途）
// 红线: 有损策略，未知文本静默回落，绝不报错
// 红线: 空字符串与未知文本同等处理，不单独分支
// ==========================================

use crate::domain::types::AwbStatus;

/// 已知的别名拼写（去重音等）
const STATUS_ALIASES: &[(&str, AwbStatus)] = &[
    ("em transito", AwbStatus::InTransit),
    ("disponivel", AwbStatus::Available),
];

/// 规范化的匹配方式（供诊断统计使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMatch {
    Exact(AwbStatus),
    Alias(AwbStatus),
    Defaulted,
}

impl StatusMatch {
    pub fn status(&self) -> AwbStatus {
        match self {
            StatusMatch::Exact(s) | StatusMatch::Alias(s) => *s,
            StatusMatch::Defaulted => AwbStatus::default(),
        }
    }

    pub fn is_coerced(&self) -> bool {
        matches!(self, StatusMatch::Defaulted)
    }
}

/// 判定原始状态文本的匹配方式
pub fn classify_status(raw: &str) -> StatusMatch {
    let needle = raw.trim().to_lowercase();

    for status in AwbStatus::ALL {
        if needle == status.sheet_label().to_lowercase()
            || needle == status.display_label().to_lowercase()
        {
            return StatusMatch::Exact(status);
        }
    }

    STATUS_ALIASES
        .iter()
        .find(|(alias, _)| *alias == needle)
        .map(|(_, status)| StatusMatch::Alias(*status))
        .unwrap_or(StatusMatch::Defaulted)
}

/// 原始状态文本 → 规范状态（全函数）
pub fn normalize_status(raw: &str) -> AwbStatus {
    classify_status(raw).status()
}
