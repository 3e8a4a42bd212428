use crate::coerce;
use serde::Serialize;
use serde_json::{Map, Value};

/// 指标序列中的一个点
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorPoint {
    pub time: i64,
    pub value: f64,
}

/// 七个固定指标字段，各自独立成序列
///
/// 每个序列只包含该字段存在且为数字的行，所以长度和时间戳
/// 可能互不相同。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorSeries {
    pub bb_l: Vec<IndicatorPoint>,
    pub bb_m: Vec<IndicatorPoint>,
    pub bb_u: Vec<IndicatorPoint>,
    pub macd: Vec<IndicatorPoint>,
    pub macds: Vec<IndicatorPoint>,
    pub macdh: Vec<IndicatorPoint>,
    pub rsi: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// 整个响应体 -> 七个指标序列；响应体不是数组时全部为空
    pub fn from_response(body: &Value) -> Self {
        let rows = match body.as_array() {
            Some(rows) => rows,
            None => return Self::default(),
        };

        // 先给每行挂上解析后的时间戳，时间无效的整行丢弃
        let mut stamped: Vec<(i64, &Map<String, Value>)> = rows
            .iter()
            .filter_map(|row| {
                let obj = row.as_object()?;
                let time = coerce::epoch_secs(obj.get("_time")?)?;
                Some((time, obj))
            })
            .collect();
        stamped.sort_by_key(|(time, _)| *time);

        Self {
            bb_l: extract_line(&stamped, "bb_l"),
            bb_m: extract_line(&stamped, "bb_m"),
            bb_u: extract_line(&stamped, "bb_u"),
            macd: extract_line(&stamped, "macd"),
            macds: extract_line(&stamped, "macds"),
            macdh: extract_line(&stamped, "macdh"),
            rsi: extract_line(&stamped, "rsi"),
        }
    }
}

/// 字段在某行缺失或不是数字时只跳过该行，不影响其他字段的序列
fn extract_line(rows: &[(i64, &Map<String, Value>)], field: &str) -> Vec<IndicatorPoint> {
    rows.iter()
        .filter_map(|(time, obj)| {
            let value = coerce::finite_f64(obj.get(field)?)?;
            Some(IndicatorPoint { time: *time, value })
        })
        .collect()
}
