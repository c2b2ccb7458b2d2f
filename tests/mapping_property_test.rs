// ==========================================
// 映射与引擎性质测试
// ==========================================
// 工具: proptest
// ==========================================

use awb_tracker::domain::{AwbStatus, ShipmentRecord};
use awb_tracker::engine::analytics::efficiency;
use awb_tracker::engine::QueryEngine;
use awb_tracker::mapping::{normalize_status, pack_links, unpack, EntityMapper, ShipmentMapper};
use proptest::prelude::*;

fn any_status() -> impl Strategy<Value = AwbStatus> {
    prop::sample::select(AwbStatus::ALL.to_vec())
}

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ./-]{0,12}"
}

fn document_link() -> impl Strategy<Value = String> {
    "https?://[a-z0-9./]{1,16}"
}

prop_compose! {
    fn any_record()(
        id in "[a-f0-9]{32}",
        supplier in text(),
        dispatch_date in text(),
        invoice_refs in text(),
        waybill_number in text(),
        status in any_status(),
        arrival_date in text(),
        brand in text(),
        material in text(),
        remark in text(),
        tracking_url in text(),
        documents in prop::collection::vec(document_link(), 0..5),
    ) -> ShipmentRecord {
        ShipmentRecord {
            id, supplier, dispatch_date, invoice_refs, waybill_number, status,
            arrival_date, brand, material, remark, tracking_url, documents,
        }
    }
}

proptest! {
    #[test]
    fn prop_normalize_status_is_total(raw in ".*") {
        let status = normalize_status(&raw);
        prop_assert!(AwbStatus::ALL.contains(&status));
    }

    #[test]
    fn prop_sheet_label_survives_case_and_padding(status in any_status(), pad in " {0,3}", upper in any::<bool>()) {
        let label = if upper {
            status.sheet_label().to_uppercase()
        } else {
            status.sheet_label().to_lowercase()
        };
        let raw = format!("{pad}{label}{pad}");
        prop_assert_eq!(normalize_status(&raw), status);
    }

    #[test]
    fn prop_unpack_pack_keeps_only_links(
        values in prop::collection::vec(prop_oneof![document_link(), "[a-z]{1,8}://[a-z]{1,8}"], 0..8)
    ) {
        let expected: Vec<String> = values.iter().filter(|v| v.starts_with("http")).cloned().collect();
        prop_assert_eq!(unpack(&pack_links(&values)), expected);
    }

    #[test]
    fn prop_record_round_trip(record in any_record()) {
        let row = ShipmentMapper.to_external(&record).unwrap();
        prop_assert_eq!(ShipmentMapper.to_canonical(&row), record);
    }

    #[test]
    fn prop_empty_filter_is_identity(records in prop::collection::vec(any_record(), 0..10)) {
        let visible = QueryEngine.filter(&records, "", &[]);
        prop_assert_eq!(visible.len(), records.len());
        for (a, b) in visible.iter().zip(records.iter()) {
            prop_assert!(std::ptr::eq(*a, b));
        }
    }

    #[test]
    fn prop_efficiency_is_a_percentage(total in 0usize..1000, delivered_ratio in 0.0f64..=1.0) {
        let delivered = (total as f64 * delivered_ratio) as usize;
        let value = efficiency(delivered, total);
        prop_assert!(value <= 100);
        if total == 0 {
            prop_assert_eq!(value, 0);
        }
    }
}
