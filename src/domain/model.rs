use serde::{Deserialize, Serialize};
use std::fmt;

/// 單一使用者記錄。欄位不做解讀，原樣保留收到的 JSON。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord {
    pub data: serde_json::Value,
}

impl UserRecord {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }
}

/// Records in the order the endpoint returned them.
pub type DataSet = Vec<UserRecord>;

/// Rendered output of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    markup: &'static str,
}

impl View {
    pub const fn new(markup: &'static str) -> Self {
        Self { markup }
    }

    pub fn as_str(&self) -> &str {
        self.markup
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.markup)
    }
}
