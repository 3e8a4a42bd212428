use crate::coerce;
use serde::Serialize;
use serde_json::Value;

/// 单根K线 (OHLCV)，时间为epoch秒
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// 把后端的一行原始数据转成K线；时间或任一价格字段无效时丢弃整行
    pub fn from_row(row: &Value) -> Option<Self> {
        let obj = row.as_object()?;
        let time = coerce::epoch_secs(obj.get("_time")?)?;
        let open = coerce::finite_f64(obj.get("o")?)?;
        let high = coerce::finite_f64(obj.get("h")?)?;
        let low = coerce::finite_f64(obj.get("l")?)?;
        let close = coerce::finite_f64(obj.get("c")?)?;
        // volume 缺失或无效时取 0，不丢行
        let volume = obj.get("v").and_then(coerce::finite_f64).unwrap_or(0.0);

        Some(Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// 整个响应体 -> 按时间升序的K线序列；响应体不是数组时返回空序列
    pub fn series_from_response(body: &Value) -> Vec<Self> {
        let rows = match body.as_array() {
            Some(rows) => rows,
            None => return Vec::new(),
        };

        let mut candles: Vec<Candle> = rows.iter().filter_map(Candle::from_row).collect();
        // sort_by_key is stable, so equal timestamps keep input order
        candles.sort_by_key(|c| c.time);
        candles
    }
}
