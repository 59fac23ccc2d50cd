//! Retail information for a volume.

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// Whether and how a volume can be bought in the requesting country.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SaleInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    /// `FOR_SALE`, `FREE`, `NOT_FOR_SALE` or `FOR_PREORDER`.
    #[serde(deserialize_with = "null_as_default")]
    pub saleability: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_ebook: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub list_price: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub retail_price: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub buy_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub offers: Vec<Offer>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    /// Offers report prices in micros rather than `amount`.
    #[serde(deserialize_with = "null_as_default")]
    pub amount_in_micros: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_code: String,
}

impl Price {
    /// The price in currency units, whichever way the API reported it.
    pub fn value(&self) -> f64 {
        if self.amount != 0.0 {
            self.amount
        } else {
            self.amount_in_micros / 1_000_000.0
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Offer {
    #[serde(deserialize_with = "null_as_default")]
    pub finsky_offer_type: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub list_price: Price,
    #[serde(deserialize_with = "null_as_default")]
    pub retail_price: Price,
}

#[cfg(test)]
mod tests {
    use super::Price;

    #[test]
    fn test_price_value_from_micros() {
        let price = Price {
            amount_in_micros: 27_990_000.0,
            currency_code: "USD".to_string(),
            ..Default::default()
        };
        assert_eq!(price.value(), 27.99);

        let price = Price {
            amount: 12.5,
            ..Default::default()
        };
        assert_eq!(price.value(), 12.5);
    }
}
