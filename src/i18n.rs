// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持葡萄牙语（默认，与远程表格一致）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"pt-BR" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use awb_tracker::i18n::t;
/// let msg = t("status.delivered");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use awb_tracker::i18n::t_with_args;
/// let msg = t_with_args("export.written", &[("path", "/tmp/rastreamento_awb_1.csv")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AwbStatus;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，测试并行执行时需串行化
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(current_locale(), "en");

        set_locale(DEFAULT_LOCALE);
        assert_eq!(current_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_status_labels_follow_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale(DEFAULT_LOCALE);
        for status in AwbStatus::ALL {
            assert_eq!(status.localized_label(), status.sheet_label());
        }

        set_locale("en");
        for status in AwbStatus::ALL {
            assert_eq!(status.localized_label(), status.display_label());
        }

        set_locale(DEFAULT_LOCALE);
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args("write.failed", &[("reason", "timeout")]);
        assert_eq!(msg, "Save failed: timeout");

        set_locale(DEFAULT_LOCALE);
        let msg = t_with_args("write.failed", &[("reason", "timeout")]);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("Falha"));
    }
}
