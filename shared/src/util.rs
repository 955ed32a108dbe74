/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as record ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
///
/// A redemption writes a transaction and an order in the same millisecond,
/// so a bare timestamp is not enough to keep their ids apart.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Snowflake id rendered as the string ids used by persisted records
pub fn record_id() -> String {
    snowflake_id().to_string()
}

/// 本地时间，用于账单与订单的展示时间 (e.g. `2024/3/20 14:05:09`)
pub fn display_time() -> String {
    chrono::Local::now().format("%Y/%-m/%-d %H:%M:%S").to_string()
}

/// 本地日期 `YYYY-MM-DD`，活动起止时间的默认值
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// ISO-8601 UTC 时间戳，用于商品的 `createdAt`
pub fn iso_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
