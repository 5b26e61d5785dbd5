//! Integration tests for JSON interoperability.
//!
//! Validates that mappings deserialise directly from JSON text, serialise
//! back to equivalent documents, and that the conversion bridge builds the
//! same trees as the serde path.

#![cfg(feature = "serde_json")]

mod common;

use anyhow::{Result, ensure};
use common::mapping;
use deep_merge::{JsonMapping, JsonValue, merge};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn mappings_deserialise_from_json_text() -> Result<()> {
    let parsed: JsonMapping =
        serde_json::from_str(r#"{"server": {"port": 8080}, "tags": ["a", "b"]}"#)?;
    let expected = mapping(json!({"server": {"port": 8080}, "tags": ["a", "b"]}));
    ensure!(
        parsed == expected,
        "parsed mapping must match the bridge conversion",
    );
    Ok(())
}

#[rstest]
#[case::object(json!({"key": 1}), true)]
#[case::empty_object(json!({}), true)]
#[case::array(json!([1, 2]), false)]
#[case::string(json!("text"), false)]
#[case::null(json!(null), false)]
fn untagged_values_classify_objects_against_leaves(
    #[case] document: serde_json::Value,
    #[case] expect_map: bool,
) -> Result<()> {
    let value: JsonValue = serde_json::from_value(document)?;
    ensure!(
        value.is_map() == expect_map,
        "expected is_map() == {expect_map} for {value:?}",
    );
    Ok(())
}

#[rstest]
fn serialisation_round_trips_through_text() -> Result<()> {
    let original = mapping(json!({
        "name": "demo",
        "limits": {"cpu": 2},
        "features": ["a", {"inline": true}],
    }));

    let text = serde_json::to_string(&original)?;
    let reparsed: JsonMapping = serde_json::from_str(&text)?;

    ensure!(reparsed == original, "round trip must preserve the mapping");
    Ok(())
}

#[rstest]
fn bridge_conversion_agrees_with_serde_deserialisation() -> Result<()> {
    let document = json!({
        "server": {"host": "localhost", "port": 8080},
        "tags": ["a", "b"],
        "debug": null,
    });

    let through_bridge = JsonMapping::try_from(document.clone())?;
    let through_serde: JsonMapping = serde_json::from_value(document)?;

    ensure!(
        through_bridge == through_serde,
        "both paths must build the same mapping",
    );
    Ok(())
}

#[rstest]
fn layered_documents_merge_and_serialise_losslessly() -> Result<()> {
    let base: JsonMapping = serde_json::from_str(
        r#"{"service": {"name": "api", "replicas": 1}, "log": {"level": "info"}}"#,
    )?;
    let overlay: JsonMapping =
        serde_json::from_str(r#"{"service": {"replicas": 3}, "log": {"format": "json"}}"#)?;

    let merged = merge(None, [&base, &overlay])?;

    let observed = serde_json::to_value(&merged)?;
    let expected = json!({
        "service": {"name": "api", "replicas": 3},
        "log": {"level": "info", "format": "json"},
    });
    ensure!(
        observed == expected,
        "expected {expected} but observed {observed}",
    );
    Ok(())
}
