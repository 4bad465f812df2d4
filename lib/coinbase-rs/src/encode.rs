use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::Number;
use crate::api::{Coded, Listed};
use crate::model::*;
use crate::money::{CoinbaseCurrency, CoinbaseMoney};

impl Serialize for CoinbaseCurrency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

// Always the `{amount, currency}` shape, with the amount's scale intact.
impl Serialize for CoinbaseMoney {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut money = serializer.serialize_struct("CoinbaseMoney", 2)?;
        money.serialize_field("amount", &self.amount.to_string())?;
        money.serialize_field("currency", &self.currency)?;
        money.end()
    }
}

impl Serialize for CoinbaseBuySellLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let CoinbaseBuySellLevel::Unrecognized { code, numeric: false } = self {
            return serializer.serialize_str(code);
        }
        match self.code().parse::<Number>() {
            Ok(level) => level.serialize(serializer),
            Err(_) => serializer.serialize_str(self.code()),
        }
    }
}

impl Serialize for CoinbaseTransactionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl Serialize for CoinbaseAccountChangeCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

struct Element<'a, T>(&'a T);

impl<'a, T: Listed> Serialize for Element<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match T::ELEMENT {
            Some(key) => {
                let mut wrapper = serializer.serialize_map(Some(1))?;
                wrapper.serialize_entry(key, self.0)?;
                wrapper.end()
            }
            None => self.0.serialize(serializer),
        }
    }
}

struct Elements<'a, T>(&'a [T]);

impl<'a, T: Listed> Serialize for Elements<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter().map(Element))
    }
}

impl<T: Listed> Serialize for CoinbasePaginatedResource<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut page = serializer.serialize_map(Some(4))?;
        page.serialize_entry(T::COLLECTION, &Elements(&self.data))?;
        page.serialize_entry("total_count", &self.total_count)?;
        page.serialize_entry("num_pages", &self.num_pages)?;
        page.serialize_entry("current_page", &self.current_page)?;
        page.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::*;
    use crate::mapper::Mapper;
    use pretty_assertions::assert_eq;
    use serde_json::{json, to_value};

    #[test]
    fn test_money_keeps_scale() -> Result<()> {
        let money: CoinbaseMoney = "BTC 7.10000000".parse()?;
        assert_eq!(to_value(&money)?, json!({ "amount": "7.10000000", "currency": "BTC" }));
        Ok(())
    }

    #[test]
    fn test_levels_keep_their_wire_form() -> Result<()> {
        let unrecognized = |code: &str, numeric| CoinbaseBuySellLevel::Unrecognized { code: code.to_owned(), numeric };
        assert_eq!(to_value(&CoinbaseBuySellLevel::Two)?, json!(2));
        assert_eq!(to_value(&unrecognized("9", true))?, json!(9));
        assert_eq!(to_value(&unrecognized("007", false))?, json!("007"));
        assert_eq!(to_value(&unrecognized("9", false))?, json!("9"));
        assert_eq!(to_value(&unrecognized("gold", false))?, json!("gold"));
        assert_eq!(to_value(&CoinbaseTransactionStatus::Unrecognized("refunded".to_owned()))?, json!("refunded"));
        Ok(())
    }

    #[test]
    fn test_contacts_page_shape() -> Result<()> {
        let page = CoinbaseContacts {
            data: vec![CoinbaseContact { email: "test@test.com".to_owned() }],
            total_count: 1,
            num_pages: 1,
            current_page: 1,
        };
        let expected = json!({
            "contacts": [{ "contact": { "email": "test@test.com" } }],
            "total_count": 1,
            "num_pages": 1,
            "current_page": 1,
        });
        assert_eq!(to_value(&page)?, expected);
        let mapper = Mapper::default();
        let decoded: CoinbaseContacts = mapper.decode(&mapper.encode(&page)?)?;
        assert_eq!(decoded, page);
        Ok(())
    }

    #[test]
    fn test_transaction_hash_is_written_as_hsh() -> Result<()> {
        let mut transaction = CoinbaseTransaction {
            id: "52d8d8685a62c7613e000277".to_owned(),
            created_at: chrono::DateTime::parse_from_rfc3339("2014-01-16T23:14:48-08:00").unwrap(),
            transaction_hash: None,
            amount: "BTC 1.00000000".parse()?,
            request: false,
            status: CoinbaseTransactionStatus::Complete,
            sender: None,
            recipient: None,
            recipient_address: None,
            notes: None,
            idempotency_key: None,
        };
        let value = to_value(&transaction)?;
        assert_eq!(value["hsh"], json!(null));
        assert_eq!(value["created_at"], json!("2014-01-16T23:14:48-08:00"));
        assert_eq!(value["status"], json!("complete"));
        transaction.transaction_hash = Some("abc".to_owned());
        assert_eq!(to_value(&transaction)?["hsh"], json!("abc"));
        Ok(())
    }
}
