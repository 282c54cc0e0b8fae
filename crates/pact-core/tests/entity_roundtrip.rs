//! Serde roundtrip and JsonSchema validation tests for all record types.

use chrono::Utc;
use pact_core::entities::*;
use pact_core::enums::*;
use pact_core::responses::*;
use schemars::schema_for;
use serde_json::{Map, json};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn attributes(value: serde_json::Value) -> Map<String, serde_json::Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn sample_partner() -> Partner {
    let now = Utc::now();
    Partner {
        id: "3f1c0a".into(),
        name: "Rogers Communications".into(),
        industry: "Telecommunications".into(),
        added_date: now,
        last_updated: now,
        attributes: attributes(json!({
            "partnership_type": "Media Partner",
            "annual_value": "$12M",
            "contact_info": {"name": "John Rogers", "email": "john.rogers@rogers.com"}
        })),
    }
}

fn sample_research() -> ResearchEntry {
    ResearchEntry {
        id: "9ab2".into(),
        partner_id: "3f1c0a".into(),
        source: "Financial Database".into(),
        search_query: Some("TechCorp Inc. financial health".into()),
        data: json!({"credit_rating": "AA", "growth_forecast": "Positive"}),
        added_date: Utc::now(),
        attributes: Map::new(),
    }
}

roundtrip_and_validate!(partner_roundtrip, Partner, sample_partner());

roundtrip_and_validate!(
    partner_without_attributes_roundtrip,
    Partner,
    Partner {
        attributes: Map::new(),
        ..sample_partner()
    }
);

roundtrip_and_validate!(research_roundtrip, ResearchEntry, sample_research());

roundtrip_and_validate!(
    research_without_query_roundtrip,
    ResearchEntry,
    ResearchEntry {
        search_query: None,
        attributes: attributes(json!({"confidence": "high"})),
        ..sample_research()
    }
);

roundtrip_and_validate!(
    history_roundtrip,
    HistoryEntry,
    HistoryEntry {
        timestamp: Utc::now(),
        operation: HistoryOperation::Add,
        data_type: DataType::Research,
        data_id: "9ab2".into(),
    }
);

roundtrip_and_validate!(
    duplicate_result_roundtrip,
    OpResult<Partner>,
    OpResult::error(
        "Partner 'Rogers Communications' already exists",
        Some(sample_partner())
    )
);

roundtrip_and_validate!(
    not_found_result_roundtrip,
    OpResult<PartnerLookup>,
    OpResult::error("Partner with ID 'nope' not found", None)
);

roundtrip_and_validate!(
    lookup_roundtrip,
    PartnerLookup,
    PartnerLookup {
        partner: sample_partner(),
        pool: Pool::Current,
    }
);

roundtrip_and_validate!(
    partner_research_roundtrip,
    PartnerResearch,
    PartnerResearch {
        partner_id: "3f1c0a".into(),
        research_count: 1,
        research_entries: vec![sample_research()],
    }
);

roundtrip_and_validate!(
    history_window_roundtrip,
    HistoryWindow,
    HistoryWindow {
        count: 0,
        history: Vec::new(),
    }
);

#[test]
fn stored_partner_reads_legacy_document_shape() {
    let raw = json!({
        "name": "HealthFit Co.",
        "industry": "Health & Fitness",
        "potential_value": "$2-4M",
        "partnership_category": "Wellness Partner",
        "id": "c0ffee",
        "added_date": "2025-03-01T10:00:00.123456Z",
        "last_updated": "2025-03-01T10:00:00.123456Z"
    });
    let partner: Partner = serde_json::from_value(raw).unwrap();
    assert_eq!(partner.id, "c0ffee");
    assert_eq!(partner.attributes.len(), 2);
    assert_eq!(partner.attributes["potential_value"], json!("$2-4M"));
}
