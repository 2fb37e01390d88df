//! Code for parsing the vendor product catalog from a JSON document

use std::convert::TryFrom;

use serde::Deserialize;

use crate::error::{Error, Result, SchemaError};

/// The product records of the first release in the catalog.
#[derive(Debug)]
pub struct CatalogDef {
    pub products: Vec<ProductDef>,
}

#[derive(Debug, serde::Deserialize)]
struct ReleaseDef {
    products: Vec<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct RecordDef {
    pid: Option<u32>,
    id: Option<u32>,
    name: String,
    features: Option<FeaturesDef>,
}

#[derive(Debug)]
pub struct ProductDef {
    pub id: u32,
    pub name: String,
    pub features: Option<FeaturesDef>,
}

/// Capabilities follow loose truthiness: any truthy JSON value enables one, `false`, `null`, `0`
/// and `""` do not.
#[derive(Debug, Default, serde::Deserialize)]
pub struct FeaturesDef {
    #[serde(default, deserialize_with = "truthy")]
    pub hev: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub color: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub chain: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub matrix: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub relays: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub buttons: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub infrared: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub multizone: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub extended_multizone: bool,

    #[serde(default, deserialize_with = "bounds_prefix")]
    pub temperature_range: Option<[u32; 2]>,
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<bool, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// Reads `[min, max, ..]`, ignoring anything past the first two elements.
fn bounds_prefix<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<[u32; 2]>, D::Error> {
    use serde::de::Error as _;

    let values = match Option::<Vec<serde_json::Value>>::deserialize(deserializer)? {
        Some(values) => values,
        None => return Ok(None),
    };

    let bound = |index: usize| {
        values.get(index).and_then(serde_json::Value::as_u64).and_then(|n| u32::try_from(n).ok())
    };
    match (bound(0), bound(1)) {
        (Some(min), Some(max)) => Ok(Some([min, max])),
        _ => Err(D::Error::custom("temperature_range must start with two integer bounds")),
    }
}

pub fn parse(data: &[u8]) -> Result<CatalogDef> {
    let document: serde_json::Value = serde_json::from_slice(data).map_err(Error::Parse)?;

    // Later releases are never consulted, so they are not validated either
    let mut releases =
        Vec::<serde_json::Value>::deserialize(document).map_err(SchemaError::InvalidDocument)?;
    if releases.is_empty() {
        return Err(SchemaError::NoRelease.into());
    }
    let release = ReleaseDef::deserialize(releases.swap_remove(0))
        .map_err(SchemaError::InvalidRelease)?;

    let mut products = Vec::with_capacity(release.products.len());
    for (index, record) in release.products.into_iter().enumerate() {
        let invalid = |source: serde_json::Error| SchemaError::InvalidProduct { index, source };

        let record = RecordDef::deserialize(record).map_err(invalid)?;
        let id = match record.pid.or(record.id) {
            Some(id) => id,
            None => return Err(invalid(serde::de::Error::missing_field("pid")).into()),
        };
        products.push(ProductDef { id, name: record.name, features: record.features });
    }

    Ok(CatalogDef { products })
}
