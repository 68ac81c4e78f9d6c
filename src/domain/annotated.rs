use serde::Serialize;

/// An entity together with its derived favorite flag.
///
/// Serializes flattened, so an object entity `{"id": 33}` becomes
/// `{"id": 33, "favorited": true}`. Non-object entities (bare strings)
/// serialize as `{"value": ..., "favorited": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated<E> {
    pub entity: E,
    pub favorited: bool,
}

impl<E> Annotated<E> {
    pub fn new(entity: E, favorited: bool) -> Self {
        Self { entity, favorited }
    }
}

impl<E: Serialize> Serialize for Annotated<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::Error as _;

        let value = serde_json::to_value(&self.entity).map_err(S::Error::custom)?;
        let mut object = match value {
            serde_json::Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("value".into(), other);
                map
            }
        };
        object.insert("favorited".into(), self.favorited.into());
        object.serialize(serializer)
    }
}
