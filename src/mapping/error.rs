// ==========================================
// 空运提单跟踪 - 映射层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 读方向映射是全函数，不会失败；只有写方向的前置条件会报错
// ==========================================

use thiserror::Error;

/// 映射层错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MappingError {
    /// 写入前必须已有标识（由调用方生成）
    #[error("写入前缺少标识 (entity={entity})")]
    MissingIdentifier { entity: &'static str },
}

/// Result 类型别名
pub type MappingResult<T> = Result<T, MappingError>;
