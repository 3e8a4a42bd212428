use serde::Deserialize;

/// /api/snapshot 返回的最新收盘价；区间内没有数据时 last_close 为空
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub symbol: String,
    pub measurement: String,
    #[serde(default)]
    pub last_close: Option<f64>,
}
