use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A position inside a portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: i64,
    pub portfolio_id: i64,
    /// Ticker in canonical form, trimmed and uppercased.
    pub symbol: String,
    pub quantity: Decimal,
    pub acquisition_price: Decimal,
    pub acquisition_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a position to a portfolio.
///
/// Carries the requesting user's id so the service can check the
/// portfolio actually belongs to them; the stored row does not keep it.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub portfolio_id: i64,
    pub user_id: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub acquisition_price: Decimal,
    pub acquisition_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_holding_from_camel_case_json() {
        let payload: NewHolding = serde_json::from_str(
            r#"{
                "portfolioId": 3,
                "userId": "auth0|1",
                "symbol": "aapl",
                "quantity": 2.5,
                "acquisitionPrice": 187.32,
                "acquisitionDate": "2024-11-05"
            }"#,
        )
        .unwrap();

        assert_eq!(payload.portfolio_id, 3);
        assert_eq!(payload.quantity, dec!(2.5));
        assert_eq!(payload.acquisition_price, dec!(187.32));
        assert_eq!(
            payload.acquisition_date,
            NaiveDate::from_ymd_opt(2024, 11, 5).unwrap()
        );
    }

    #[test]
    fn test_holding_serializes_camel_case() {
        let holding = Holding {
            id: 1,
            portfolio_id: 3,
            symbol: "AAPL".to_string(),
            quantity: dec!(2.5),
            acquisition_price: dec!(187.32),
            acquisition_date: NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&holding).unwrap();
        assert_eq!(json["portfolioId"], 3);
        assert_eq!(json["acquisitionDate"], "2024-11-05");
    }
}
