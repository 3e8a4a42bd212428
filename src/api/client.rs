use crate::config::BackendConfig;
use crate::error::{AppError, Result};
use crate::models::{Candle, Granularity, IndicatorSeries, Snapshot};

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::num::NonZeroU32;
use tracing::debug;

pub struct BackendClient {
    client: reqwest::Client,
    config: BackendConfig,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let quota =
            Quota::per_minute(NonZeroU32::new(config.rate_limit_per_minute.max(1)).unwrap());

        Self {
            client,
            config,
            rate_limiter: RateLimiter::direct(quota),
        }
    }

    /// 获取K线历史数据，按时间升序返回
    pub async fn fetch_candles(
        &self,
        symbol: &str,
        granularity: Granularity,
        start: &str,
        end: &str,
    ) -> Result<Vec<Candle>> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}/api/history", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("granularity", granularity.as_str()),
                ("start", start),
                ("end", end),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::BackendApi(format!(
                "history failed: Status {status}: {text}"
            )));
        }

        let body = loose_json(response).await?;
        let candles = Candle::series_from_response(&body);
        debug!("history: {} candles for {}", candles.len(), symbol);
        Ok(candles)
    }

    /// 获取技术指标序列；fields 为空时请求全部字段
    pub async fn fetch_indicators(
        &self,
        symbol: &str,
        granularity: Granularity,
        start: &str,
        end: &str,
        fields: &[String],
    ) -> Result<IndicatorSeries> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}/api/indicators", self.config.base_url);
        let mut request = self.client.get(&url).query(&[
            ("symbol", symbol),
            ("granularity", granularity.as_str()),
            ("start", start),
            ("end", end),
        ]);
        if !fields.is_empty() {
            request = request.query(&[("fields", fields.join(",").as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::BackendApi(format!(
                "indicators failed: Status {status}: {text}"
            )));
        }

        let body = loose_json(response).await?;
        let series = IndicatorSeries::from_response(&body);
        debug!("indicators: {} rsi points for {}", series.rsi.len(), symbol);
        Ok(series)
    }

    /// 获取最近24小时的最新收盘价
    pub async fn fetch_snapshot(
        &self,
        symbol: &str,
        measurement: Option<&str>,
    ) -> Result<Snapshot> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}/api/snapshot", self.config.base_url);
        let mut request = self.client.get(&url).query(&[("symbol", symbol)]);
        if let Some(measurement) = measurement {
            request = request.query(&[("measurement", measurement)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::BackendApi(format!(
                "snapshot failed: Status {status}: {text}"
            )));
        }

        let snapshot: Snapshot = response.json().await?;
        Ok(snapshot)
    }
}

/// 宽松解析响应体；不是合法JSON时当作空载荷，交给上层按非数组处理
async fn loose_json(response: reqwest::Response) -> Result<Value> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
}
