// ==========================================
// 空运提单跟踪 - 文档链接打包
// ==========================================
// 外部: PDF_1 .. PDF_11 共 11 个独立列
// 内部: 按槽位顺序以 '|' 连接的单个字段
// 规则: 仅保留以 "http" 开头（区分大小写）的值，其余静默丢弃
// 已知限制: URL 内含 '|' 时不转义，拆包会错位
// ==========================================

/// 外部文档槽位数量
pub const DOCUMENT_SLOT_COUNT: usize = 11;

/// 打包分隔符
pub const DOCUMENT_DELIMITER: char = '|';

/// 外部文档列名（1 起始）
pub fn slot_header(slot: usize) -> String {
    format!("PDF_{}", slot)
}

/// 槽位值是否为可接受的链接
pub fn is_document_link(value: &str) -> bool {
    value.starts_with("http")
}

/// 打包：按原顺序保留合法链接并以 '|' 连接
pub fn pack<S: AsRef<str>>(slots: &[Option<S>]) -> String {
    slots
        .iter()
        .take(DOCUMENT_SLOT_COUNT)
        .filter_map(|slot| slot.as_ref().map(AsRef::<str>::as_ref))
        .filter(|s| is_document_link(s))
        .collect::<Vec<_>>()
        .join("|")
}

/// 打包已展开的链接列表（写回表格时使用）
pub fn pack_links<S: AsRef<str>>(links: &[S]) -> String {
    links
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|s| is_document_link(s))
        .collect::<Vec<_>>()
        .join("|")
}

/// 拆包：空字符串得到零个文档
pub fn unpack(packed: &str) -> Vec<String> {
    if packed.is_empty() {
        return Vec::new();
    }
    packed.split(DOCUMENT_DELIMITER).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_skips_missing_and_non_http() {
        let slots = [None, Some("http://a"), Some("ftp://b"), Some("http://c")];
        assert_eq!(pack(&slots), "http://a|http://c");
    }

    #[test]
    fn test_pack_prefix_is_case_sensitive() {
        let slots = [Some("HTTP://A"), Some("https://b")];
        assert_eq!(pack(&slots), "https://b");
    }

    #[test]
    fn test_pack_reads_at_most_eleven_slots() {
        let slots: Vec<Option<String>> = (1..=12).map(|i| Some(format!("http://{}", i))).collect();
        let packed = pack(&slots);
        assert_eq!(unpack(&packed).len(), DOCUMENT_SLOT_COUNT);
        assert!(!packed.contains("http://12"));
    }

    #[test]
    fn test_unpack_empty_is_zero_documents() {
        assert!(unpack("").is_empty());
    }

    #[test]
    fn test_unpack_then_pack_is_identity_for_links() {
        let packed = "http://a/1.pdf|https://b/2.pdf";
        assert_eq!(pack_links(&unpack(packed)), packed);
    }

    #[test]
    fn test_slot_header() {
        assert_eq!(slot_header(1), "PDF_1");
        assert_eq!(slot_header(11), "PDF_11");
    }
}
