use crate::core::{DataSet, UserRecord};

/// Per-record mapping applied by the dashboard. Returns the record unchanged.
pub fn transform_user(record: UserRecord) -> UserRecord {
    record
}

/// Order-preserving map over a DataSet. Never filters, never reorders.
pub struct Transformer<F = fn(UserRecord) -> UserRecord>
where
    F: Fn(UserRecord) -> UserRecord,
{
    map_fn: F,
}

impl Transformer {
    pub fn identity() -> Self {
        Self {
            map_fn: transform_user,
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F> Transformer<F>
where
    F: Fn(UserRecord) -> UserRecord,
{
    pub fn new(map_fn: F) -> Self {
        Self { map_fn }
    }

    pub fn apply(&self, data: DataSet) -> DataSet {
        data.into_iter().map(&self.map_fn).collect()
    }
}
