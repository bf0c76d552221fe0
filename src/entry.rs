/// A key and its optional attached record.
///
/// An absent record is a valid state for a stored key and is distinct from the key not being in
/// the tree at all.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: Option<U>,
}
