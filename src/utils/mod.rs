pub mod ip;

use uuid::Uuid;

/// 校验 tracking id 是否为规范 UUID 文本格式（36 字符，带连字符）
///
/// `Uuid::try_parse` also accepts braced/simple/urn forms; the tracked URLs
/// only ever carry the hyphenated form, so everything else is rejected.
pub fn is_valid_tracking_id(id: &str) -> bool {
    id.len() == 36 && Uuid::try_parse(id).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_uuid_accepted() {
        assert!(is_valid_tracking_id("5446e98c-6efa-4295-b92f-cd62867f7f26"));
        assert!(is_valid_tracking_id(&uuid::Uuid::new_v4().to_string()));
    }

    #[test]
    fn test_malformed_ids_rejected() {
        assert!(!is_valid_tracking_id("test"));
        assert!(!is_valid_tracking_id(""));
        assert!(!is_valid_tracking_id("5446e98c6efa4295b92fcd62867f7f26")); // simple form
        assert!(!is_valid_tracking_id(
            "{5446e98c-6efa-4295-b92f-cd62867f7f26}"
        )); // braced form
        assert!(!is_valid_tracking_id("5446e98c-6efa-4295-b92f-cd62867f7f2g"));
    }
}
