//! Integration tests for view-gated JSON serialization.
//!
//! Each record type carries the same values four times: once unmasked, once
//! fully masked, once keeping the last six characters and once keeping the
//! last six characters with `#` as the mask character. Records are serialized
//! with a masking view active and with no view, and the JSON compared.

#![cfg(feature = "json")]

use std::collections::{BTreeMap, BTreeSet};

use maskable::{
    FullMask, Keep, MaskConfig, MaskedValue, MaskingAdapter, MaskingPolicy, View,
    json::{to_string_with_view, to_value_with_view},
    with_view,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

type KeepSix = Keep<0, 6>;
type KeepSixHash = Keep<0, 6, '#'>;

#[derive(Clone, Copy)]
struct Masking;

impl View for Masking {
    fn masking_policy(&self) -> MaskingPolicy {
        MaskingPolicy::Enabled
    }
}

#[derive(Clone, Copy)]
enum AccountView {
    Owner,
    Auditor,
}

impl View for AccountView {
    fn masking_policy(&self) -> MaskingPolicy {
        match self {
            Self::Owner => MaskingPolicy::Disabled,
            Self::Auditor => MaskingPolicy::Enabled,
        }
    }
}

mod string_fields {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Record {
        string_value: Option<String>,
        sensitive_string: MaskedValue<Option<String>, FullMask>,
        sensitive_string_keep_last_characters: MaskedValue<Option<String>, KeepSix>,
        sensitive_string_keep_last_characters_with_custom_mask:
            MaskedValue<Option<String>, KeepSixHash>,
    }

    fn record(value: Option<&str>) -> Record {
        let value = value.map(String::from);
        Record {
            string_value: value.clone(),
            sensitive_string: value.clone().into(),
            sensitive_string_keep_last_characters: value.clone().into(),
            sensitive_string_keep_last_characters_with_custom_mask: value.into(),
        }
    }

    #[test]
    fn long_value() {
        let record = record(Some("aabbccdd"));
        assert_eq!(
            to_value_with_view(&record, Masking).unwrap(),
            json!({
                "stringValue": "aabbccdd",
                "sensitiveString": "********",
                "sensitiveStringKeepLastCharacters": "**bbccdd",
                "sensitiveStringKeepLastCharactersWithCustomMask": "##bbccdd"
            })
        );
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "stringValue": "aabbccdd",
                "sensitiveString": "aabbccdd",
                "sensitiveStringKeepLastCharacters": "aabbccdd",
                "sensitiveStringKeepLastCharactersWithCustomMask": "aabbccdd"
            })
        );
    }

    #[test]
    fn short_value() {
        let record = record(Some("aabb"));
        assert_eq!(
            to_value_with_view(&record, Masking).unwrap(),
            json!({
                "stringValue": "aabb",
                "sensitiveString": "****",
                "sensitiveStringKeepLastCharacters": "aabb",
                "sensitiveStringKeepLastCharactersWithCustomMask": "aabb"
            })
        );
    }

    #[test]
    fn null_value() {
        let record = record(None);
        let expected = json!({
            "stringValue": null,
            "sensitiveString": null,
            "sensitiveStringKeepLastCharacters": null,
            "sensitiveStringKeepLastCharactersWithCustomMask": null
        });
        assert_eq!(to_value_with_view(&record, Masking).unwrap(), expected);
        assert_eq!(serde_json::to_value(&record).unwrap(), expected);
    }
}

mod list_fields {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Record {
        string_values: Option<Vec<String>>,
        #[serde(serialize_with = "maskable::serde::serialize::<FullMask, _, _>")]
        sensitive_strings: Option<Vec<String>>,
        #[serde(serialize_with = "maskable::serde::serialize::<KeepSix, _, _>")]
        sensitive_string_keep_last_characters: Option<Vec<String>>,
        #[serde(serialize_with = "maskable::serde::serialize::<KeepSixHash, _, _>")]
        sensitive_string_keep_last_characters_with_custom_mask: Option<Vec<String>>,
    }

    fn record(values: Option<&[&str]>) -> Record {
        let values: Option<Vec<String>> =
            values.map(|values| values.iter().map(|value| (*value).to_string()).collect());
        Record {
            string_values: values.clone(),
            sensitive_strings: values.clone(),
            sensitive_string_keep_last_characters: values.clone(),
            sensitive_string_keep_last_characters_with_custom_mask: values,
        }
    }

    #[test]
    fn long_values() {
        let record = record(Some(["aabbccdd", "eeffgghh"].as_slice()));
        assert_eq!(
            to_string_with_view(&record, Masking).unwrap(),
            concat!(
                r#"{"stringValues":["aabbccdd","eeffgghh"],"#,
                r#""sensitiveStrings":["********","********"],"#,
                r#""sensitiveStringKeepLastCharacters":["**bbccdd","**ffgghh"],"#,
                r###""sensitiveStringKeepLastCharactersWithCustomMask":["##bbccdd","##ffgghh"]}"###
            )
        );
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            concat!(
                r#"{"stringValues":["aabbccdd","eeffgghh"],"#,
                r#""sensitiveStrings":["aabbccdd","eeffgghh"],"#,
                r#""sensitiveStringKeepLastCharacters":["aabbccdd","eeffgghh"],"#,
                r#""sensitiveStringKeepLastCharactersWithCustomMask":["aabbccdd","eeffgghh"]}"#
            )
        );
    }

    #[test]
    fn short_values() {
        let record = record(Some(["aabb", "ccdd"].as_slice()));
        assert_eq!(
            to_value_with_view(&record, Masking).unwrap(),
            json!({
                "stringValues": ["aabb", "ccdd"],
                "sensitiveStrings": ["****", "****"],
                "sensitiveStringKeepLastCharacters": ["aabb", "ccdd"],
                "sensitiveStringKeepLastCharactersWithCustomMask": ["aabb", "ccdd"]
            })
        );
    }

    #[test]
    fn null_list() {
        let record = record(None);
        let expected = json!({
            "stringValues": null,
            "sensitiveStrings": null,
            "sensitiveStringKeepLastCharacters": null,
            "sensitiveStringKeepLastCharactersWithCustomMask": null
        });
        assert_eq!(to_value_with_view(&record, Masking).unwrap(), expected);
        assert_eq!(serde_json::to_value(&record).unwrap(), expected);
    }

    #[test]
    fn empty_list() {
        let record = record(Some([].as_slice()));
        assert_eq!(
            to_value_with_view(&record, Masking).unwrap(),
            json!({
                "stringValues": [],
                "sensitiveStrings": [],
                "sensitiveStringKeepLastCharacters": [],
                "sensitiveStringKeepLastCharactersWithCustomMask": []
            })
        );
    }
}

mod set_fields {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Record {
        string_values: Option<BTreeSet<String>>,
        #[serde(serialize_with = "maskable::serde::serialize::<FullMask, _, _>")]
        sensitive_strings: Option<BTreeSet<String>>,
        #[serde(serialize_with = "maskable::serde::serialize::<KeepSix, _, _>")]
        sensitive_string_keep_last_characters: Option<BTreeSet<String>>,
    }

    fn record(values: &[&str]) -> Record {
        let values: BTreeSet<String> = values.iter().map(|value| (*value).to_string()).collect();
        Record {
            string_values: Some(values.clone()),
            sensitive_strings: Some(values.clone()),
            sensitive_string_keep_last_characters: Some(values),
        }
    }

    #[test]
    fn fully_masked_values_collapse() {
        let record = record(&["aabbccdd", "eeffgghh"]);
        assert_eq!(
            to_value_with_view(&record, Masking).unwrap(),
            json!({
                "stringValues": ["aabbccdd", "eeffgghh"],
                "sensitiveStrings": ["********"],
                "sensitiveStringKeepLastCharacters": ["**bbccdd", "**ffgghh"]
            })
        );
    }

    #[test]
    fn short_values_collapse_only_when_masked() {
        let record = record(&["aabb", "ccdd"]);
        assert_eq!(
            to_value_with_view(&record, Masking).unwrap(),
            json!({
                "stringValues": ["aabb", "ccdd"],
                "sensitiveStrings": ["****"],
                "sensitiveStringKeepLastCharacters": ["aabb", "ccdd"]
            })
        );
    }

    #[test]
    fn without_a_view_nothing_collapses() {
        let record = record(&["aabb", "ccdd"]);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "stringValues": ["aabb", "ccdd"],
                "sensitiveStrings": ["aabb", "ccdd"],
                "sensitiveStringKeepLastCharacters": ["aabb", "ccdd"]
            })
        );
    }
}

mod array_fields {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Record {
        string_values: [Option<String>; 3],
        sensitive_strings: MaskedValue<[Option<String>; 3], FullMask>,
        sensitive_string_keep_last_characters_with_custom_mask:
            MaskedValue<[Option<String>; 3], KeepSixHash>,
    }

    #[test]
    fn null_elements_are_kept_in_place() {
        let values = [Some("aabbccdd".to_string()), None, Some("aabb".to_string())];
        let record = Record {
            string_values: values.clone(),
            sensitive_strings: values.clone().into(),
            sensitive_string_keep_last_characters_with_custom_mask: values.into(),
        };
        assert_eq!(
            to_value_with_view(&record, Masking).unwrap(),
            json!({
                "stringValues": ["aabbccdd", null, "aabb"],
                "sensitiveStrings": ["********", null, "****"],
                "sensitiveStringKeepLastCharactersWithCustomMask": ["##bbccdd", null, "aabb"]
            })
        );
    }
}

mod map_fields {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Record {
        string_values: BTreeMap<u32, Option<String>>,
        #[serde(serialize_with = "maskable::serde::serialize::<FullMask, _, _>")]
        sensitive_strings: BTreeMap<u32, Option<String>>,
        #[serde(serialize_with = "maskable::serde::serialize::<KeepSix, _, _>")]
        sensitive_string_keep_last_characters: BTreeMap<u32, Option<String>>,
        #[serde(serialize_with = "maskable::serde::serialize::<KeepSixHash, _, _>")]
        sensitive_string_keep_last_characters_with_custom_mask: BTreeMap<u32, Option<String>>,
    }

    fn record(first: Option<&str>, second: Option<&str>) -> Record {
        let values: BTreeMap<u32, Option<String>> =
            [(1, first.map(String::from)), (2, second.map(String::from))]
                .into_iter()
                .collect();
        Record {
            string_values: values.clone(),
            sensitive_strings: values.clone(),
            sensitive_string_keep_last_characters: values.clone(),
            sensitive_string_keep_last_characters_with_custom_mask: values,
        }
    }

    #[test]
    fn values_are_masked_and_keys_are_not() {
        let record = record(Some("aabbccdd"), Some("eeffgghh"));
        assert_eq!(
            to_value_with_view(&record, Masking).unwrap(),
            json!({
                "stringValues": {"1": "aabbccdd", "2": "eeffgghh"},
                "sensitiveStrings": {"1": "********", "2": "********"},
                "sensitiveStringKeepLastCharacters": {"1": "**bbccdd", "2": "**ffgghh"},
                "sensitiveStringKeepLastCharactersWithCustomMask": {"1": "##bbccdd", "2": "##ffgghh"}
            })
        );
    }

    #[test]
    fn null_values_stay_null() {
        let record = record(Some("aabb"), None);
        assert_eq!(
            to_value_with_view(&record, Masking).unwrap(),
            json!({
                "stringValues": {"1": "aabb", "2": null},
                "sensitiveStrings": {"1": "****", "2": null},
                "sensitiveStringKeepLastCharacters": {"1": "aabb", "2": null},
                "sensitiveStringKeepLastCharactersWithCustomMask": {"1": "aabb", "2": null}
            })
        );
    }

    #[test]
    fn no_view_passes_everything_through() {
        let record = record(Some("aabbccdd"), None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sensitiveStrings"], json!({"1": "aabbccdd", "2": null}));
    }
}

mod views {
    use super::*;

    #[derive(Serialize)]
    struct Account {
        holder: String,
        #[serde(serialize_with = "maskable::serde::serialize::<Keep<0, 4>, _, _>")]
        iban: String,
    }

    fn account() -> Account {
        Account {
            holder: "Ada".into(),
            iban: "DE89370400440532013000".into(),
        }
    }

    #[test]
    fn view_selects_masking_per_call() {
        let account = account();
        assert_eq!(
            to_string_with_view(&account, AccountView::Auditor).unwrap(),
            r#"{"holder":"Ada","iban":"******************3000"}"#
        );
        assert_eq!(
            to_string_with_view(&account, AccountView::Owner).unwrap(),
            r#"{"holder":"Ada","iban":"DE89370400440532013000"}"#
        );
    }

    #[test]
    fn nested_scopes_restore_the_outer_view() {
        let account = account();
        let (inner, outer) = with_view(AccountView::Auditor, || {
            let inner = with_view(AccountView::Owner, || serde_json::to_string(&account));
            (inner, serde_json::to_string(&account))
        });
        assert_eq!(inner.unwrap(), r#"{"holder":"Ada","iban":"DE89370400440532013000"}"#);
        assert_eq!(outer.unwrap(), r#"{"holder":"Ada","iban":"******************3000"}"#);
    }

    #[test]
    fn adapter_view_overrides_the_ambient_scope() {
        let adapter = MaskingAdapter::new(MaskConfig::keep_last(2));
        let value = "secret".to_string();
        let json = with_view(MaskingPolicy::Disabled, || {
            serde_json::to_string(&adapter.view(&value, AccountView::Auditor))
        })
        .unwrap();
        assert_eq!(json, r#""****et""#);
    }
}

mod deserialization {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Record {
        name: String,
        secret: MaskedValue<String, FullMask>,
    }

    #[test]
    fn deserializes_raw_values() {
        let record: Record = serde_json::from_str(r#"{"name":"a","secret":"raw"}"#).unwrap();
        assert_eq!(record.secret.expose(), "raw");
        assert_eq!(
            to_string_with_view(&record, Masking).unwrap(),
            r#"{"name":"a","secret":"***"}"#
        );
    }

    #[test]
    fn masked_output_does_not_round_trip_to_the_original() {
        let record = Record {
            name: "a".into(),
            secret: "raw".to_string().into(),
        };
        let json = to_string_with_view(&record, Masking).unwrap();
        let restored: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.secret.expose(), "***");
    }
}
