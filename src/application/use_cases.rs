use crate::domain::{
    logging::{LogComponent, get_logger},
    lottery::{DrawNumber, DrawRecord, DrawRecordSource},
};

/// Fetch `latest` and up to `count - 1` earlier draws, one request at a time.
///
/// Misses are skipped; the result stays in descending draw order.
pub async fn fetch_recent_draws<S: DrawRecordSource>(
    source: &S,
    latest: DrawNumber,
    count: usize,
) -> Vec<DrawRecord> {
    let mut records = Vec::with_capacity(count);
    let mut missing = Vec::new();

    for number in latest.descending(count) {
        match source.fetch_draw(number).await {
            Some(record) => records.push(record),
            None => missing.push(number.value()),
        }
    }

    if missing.is_empty() {
        get_logger().info(
            LogComponent::Application("RecentDraws"),
            &format!("✅ Loaded {} draws ending at {}", records.len(), latest),
        );
    } else {
        get_logger().warn(
            LogComponent::Application("RecentDraws"),
            &format!("⚠️ Loaded {} draws, skipped {:?}", records.len(), missing),
        );
    }
    records
}
