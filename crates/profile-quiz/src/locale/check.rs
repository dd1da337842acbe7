use serde::Serialize;

use super::LocaleTable;

/// Keys present in one table but not the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationReport {
    pub missing_in_en: Vec<String>,
    pub missing_in_ko: Vec<String>,
}

impl TranslationReport {
    pub fn is_valid(&self) -> bool {
        self.missing_in_en.is_empty() && self.missing_in_ko.is_empty()
    }
}

pub fn validate_translations(ko: &LocaleTable, en: &LocaleTable) -> TranslationReport {
    let ko_keys = ko.key_paths();
    let en_keys = en.key_paths();

    TranslationReport {
        missing_in_en: ko_keys.difference(&en_keys).cloned().collect(),
        missing_in_ko: en_keys.difference(&ko_keys).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reports_keys_missing_on_either_side() {
        let ko = LocaleTable::from_value(json!({
            "signs": { "Leo": { "label": "사자자리", "description": "당당함" } },
            "only_ko": "한국어"
        }));
        let en = LocaleTable::from_value(json!({
            "signs": { "Leo": { "label": "Leo" } },
            "only_en": "English"
        }));

        let report = validate_translations(&ko, &en);

        assert!(!report.is_valid());
        assert_eq!(
            report.missing_in_en,
            vec!["only_ko".to_string(), "signs.Leo.description".to_string()]
        );
        assert_eq!(report.missing_in_ko, vec!["only_en".to_string()]);
    }

    #[test]
    fn identical_shapes_are_valid() {
        let ko = LocaleTable::from_value(json!({ "a": { "b": "가" } }));
        let en = LocaleTable::from_value(json!({ "a": { "b": "A" } }));
        assert!(validate_translations(&ko, &en).is_valid());
    }
}
