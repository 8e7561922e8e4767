use chrono::{DateTime, Utc};

use super::value_objects::{OrderId, OrderStatus};

pub const RECENT_CONFIRMED_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: OrderId, status: OrderStatus, order_date: DateTime<Utc>) -> Self {
        Self {
            id,
            status,
            order_date,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == OrderStatus::Confirmed
    }
}

/// Keeps confirmed orders only, newest `order_date` first, ties broken by
/// ascending id, truncated to [`RECENT_CONFIRMED_LIMIT`].
pub fn select_recent_confirmed(orders: impl IntoIterator<Item = Order>) -> Vec<Order> {
    let mut confirmed: Vec<Order> = orders.into_iter().filter(Order::is_confirmed).collect();
    confirmed.sort_by(|a, b| {
        b.order_date
            .cmp(&a.order_date)
            .then_with(|| a.id.cmp(&b.id))
    });
    confirmed.truncate(RECENT_CONFIRMED_LIMIT);
    confirmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn base_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn order(id: &str, status: OrderStatus, minutes: i64) -> Order {
        Order::from_repository(
            OrderId::new(id),
            status,
            base_date() + Duration::minutes(minutes),
        )
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn should_keep_only_confirmed_orders() {
        let selected = select_recent_confirmed(vec![
            order("O1", OrderStatus::Pending, 1),
            order("O2", OrderStatus::Confirmed, 2),
            order("O3", OrderStatus::Cancelled, 3),
            order("O4", OrderStatus::Shipped, 4),
        ]);

        assert_eq!(ids(&selected), vec!["O2"]);
    }

    #[test]
    fn should_order_newest_first_and_cap_at_five() {
        let orders = (0..8)
            .map(|i| order(&format!("O{}", i), OrderStatus::Confirmed, i))
            .collect::<Vec<_>>();

        let selected = select_recent_confirmed(orders);

        assert_eq!(ids(&selected), vec!["O7", "O6", "O5", "O4", "O3"]);
    }

    #[test]
    fn should_break_date_ties_by_id() {
        let selected = select_recent_confirmed(vec![
            order("B", OrderStatus::Confirmed, 0),
            order("C", OrderStatus::Confirmed, 0),
            order("A", OrderStatus::Confirmed, 0),
        ]);

        assert_eq!(ids(&selected), vec!["A", "B", "C"]);
    }

    #[test]
    fn should_return_empty_when_nothing_confirmed() {
        let selected = select_recent_confirmed(vec![order("O1", OrderStatus::Pending, 0)]);
        assert!(selected.is_empty());
    }

    fn status_strategy() -> impl Strategy<Value = OrderStatus> {
        prop_oneof![
            Just(OrderStatus::Pending),
            Just(OrderStatus::Confirmed),
            Just(OrderStatus::Shipped),
            Just(OrderStatus::Cancelled),
        ]
    }

    proptest! {
        #[test]
        fn selection_is_bounded_confirmed_and_sorted(
            rows in prop::collection::vec((status_strategy(), 0i64..50), 0..30)
        ) {
            let orders: Vec<Order> = rows
                .into_iter()
                .enumerate()
                .map(|(i, (status, minutes))| order(&format!("O{:03}", i), status, minutes))
                .collect();
            let confirmed_count = orders.iter().filter(|o| o.is_confirmed()).count();

            let selected = select_recent_confirmed(orders);

            prop_assert_eq!(selected.len(), confirmed_count.min(RECENT_CONFIRMED_LIMIT));
            prop_assert!(selected.iter().all(Order::is_confirmed));
            for pair in selected.windows(2) {
                prop_assert!(pair[0].order_date >= pair[1].order_date);
            }
        }
    }
}
