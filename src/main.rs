use chartfeed::api::BackendClient;
use chartfeed::config::Settings;
use chartfeed::models::{Granularity, IndicatorPoint};

use clap::Parser;
use tracing::{info, warn};

/// 图表数据拉取工具 (K线 + 技术指标)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 交易标的 (如 X:BTCUSD)
    symbol: String,

    /// K线粒度 (day | minute)
    #[arg(short, long, default_value = "day")]
    granularity: Granularity,

    /// 开始时间 (ISO8601, 如 2024-01-01T00:00:00Z)
    #[arg(long)]
    start: String,

    /// 结束时间 (ISO8601)
    #[arg(long)]
    end: String,

    /// 只请求指定的指标字段 (逗号分隔, 如 rsi,macd)
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,

    /// 同时查询最新收盘价
    #[arg(long)]
    snapshot: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chartfeed=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let settings = Settings::load()?;
    info!("Backend: {}", settings.backend.base_url);

    let client = BackendClient::new(settings.backend.clone());

    info!(
        "Fetching {} candles for {} ({} -> {})",
        args.granularity, args.symbol, args.start, args.end
    );
    let candles = client
        .fetch_candles(&args.symbol, args.granularity, &args.start, &args.end)
        .await?;

    if candles.is_empty() {
        warn!("No candles returned for {}", args.symbol);
    } else {
        println!(
            "\n========== CANDLES: {} ({}) ==========",
            args.symbol, args.granularity
        );
        println!(
            "{:<17} {:>12} {:>12} {:>12} {:>12} {:>14}",
            "Time", "Open", "High", "Low", "Close", "Volume"
        );
        println!("{}", "-".repeat(84));
        for candle in &candles {
            println!(
                "{:<17} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>14.2}",
                format_time(candle.time),
                candle.open,
                candle.high,
                candle.low,
                candle.close,
                candle.volume
            );
        }
        println!("==========================================\n");
    }

    info!("Fetching indicator series...");
    let series = client
        .fetch_indicators(
            &args.symbol,
            args.granularity,
            &args.start,
            &args.end,
            &args.fields,
        )
        .await?;

    println!("\n========== INDICATORS: {} ==========", args.symbol);
    print_series("bb_l", &series.bb_l);
    print_series("bb_m", &series.bb_m);
    print_series("bb_u", &series.bb_u);
    print_series("macd", &series.macd);
    print_series("macds", &series.macds);
    print_series("macdh", &series.macdh);
    print_series("rsi", &series.rsi);
    println!("====================================\n");

    if args.snapshot {
        let snapshot = client.fetch_snapshot(&args.symbol, None).await?;
        match snapshot.last_close {
            Some(close) => info!(
                "Latest close for {} ({}): {}",
                snapshot.symbol, snapshot.measurement, close
            ),
            None => warn!("No snapshot data for {}", snapshot.symbol),
        }
    }

    Ok(())
}

fn print_series(name: &str, points: &[IndicatorPoint]) {
    match points.last() {
        Some(last) => println!(
            "{:<6} {:>6} points, last {:>12.4} @ {}",
            name,
            points.len(),
            last.value,
            format_time(last.time)
        ),
        None => println!("{:<6} {:>6} points", name, 0),
    }
}

fn format_time(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| secs.to_string())
}
