use serde::{Deserialize, Deserializer, Serialize};

/// One search hit. Identity is `object_id`; everything else is display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u64,
}

/// Records in response order. Duplicate ids are kept as delivered.
pub type Collection = Vec<Record>;

// The live feed sends `null` for missing titles, urls and counts.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
