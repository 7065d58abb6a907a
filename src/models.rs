use crate::range::RangePreset;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub preset: RangePreset,
}

#[derive(Debug, Deserialize)]
pub struct OverviewQuery {
    pub preset: Option<RangePreset>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RangeResponse {
    pub preset: RangePreset,
    pub from: String,
    pub to: String,
}

/// Echo of the window the backend aggregated over.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RangeEcho {
    pub from: String,
    pub to: String,
}

/// Counts and amounts for one order category, broken down by payment state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderBreakdown {
    pub paid_count: u64,
    pub paid_amount: f64,
    pub pending_count: u64,
    pub pending_amount: f64,
    pub refunded_count: u64,
    pub refunded_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelStock {
    pub channel: String,
    pub total: u64,
    pub unused: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WithdrawalSummary {
    pub pending_count: u64,
    pub pending_amount: f64,
}

/// Pre-aggregated statistics payload returned by the backend. The shape is
/// owned by the backend; this application only reads and formats it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OverviewSnapshot {
    pub range: RangeEcho,
    pub product_orders: OrderBreakdown,
    pub recharge_orders: OrderBreakdown,
    pub channel_stock: Vec<ChannelStock>,
    pub user_total: u64,
    pub withdrawals: WithdrawalSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_decodes_backend_payload() {
        let payload = serde_json::json!({
            "range": { "from": "2024-03-04", "to": "2024-03-10" },
            "product_orders": {
                "paid_count": 12, "paid_amount": 340.5,
                "pending_count": 2, "pending_amount": 58.0,
                "refunded_count": 1, "refunded_amount": 19.9
            },
            "recharge_orders": {
                "paid_count": 4, "paid_amount": 120.0,
                "pending_count": 0, "pending_amount": 0.0,
                "refunded_count": 0, "refunded_amount": 0.0
            },
            "channel_stock": [
                { "channel": "retail", "total": 500, "unused": 213 }
            ],
            "user_total": 873,
            "withdrawals": { "pending_count": 3, "pending_amount": 92.4 },
            "extra_field_from_newer_backend": true
        });

        let snapshot: OverviewSnapshot = serde_json::from_value(payload).unwrap();
        assert_eq!(snapshot.range.from, "2024-03-04");
        assert_eq!(snapshot.product_orders.paid_count, 12);
        assert_eq!(snapshot.channel_stock.len(), 1);
        assert_eq!(snapshot.channel_stock[0].unused, 213);
        assert_eq!(snapshot.user_total, 873);
    }
}
