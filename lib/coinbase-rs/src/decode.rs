use chrono::DateTime;
use serde_json::Value;
use crate::api::{Decode, Listed};
use crate::errors::*;
use crate::mapper::Mapper;
use crate::model::*;
use crate::money::{parse_amount, split_compound, CoinbaseCurrency, CoinbaseMoney};
use crate::node::Node;

fn timestamp(node: &Node) -> Result<Timestamp> {
    let raw = node.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .map_err(|e| node.mismatch(&format!("invalid ISO-8601 timestamp '{}': {}", raw, e)))
}

fn optional<T: Decode>(node: &Node, key: &str, mapper: &Mapper) -> Result<Option<T>> {
    match node.optional_field(key)? {
        Some(field) => Ok(Some(T::decode(&field, mapper)?)),
        None => Ok(None),
    }
}

fn required<T: Decode>(node: &Node, key: &str, mapper: &Mapper) -> Result<T> {
    T::decode(&node.field(key)?, mapper)
}

impl Decode for CoinbaseCurrency {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        mapper.recognize(node, node.as_str()?.to_owned())
    }
}

/**
 * Money arrives as `{"amount", "currency"}`, as `{"cents", "currency_iso"}`
 * or as a compound `"BTC 1.20000000"` string. All three land in the same
 * `CoinbaseMoney`.
 */
impl Decode for CoinbaseMoney {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        match node.value() {
            Value::String(raw) => {
                let (code, amount) = split_compound(raw)
                    .ok_or_else(|| node.mismatch(&format!("expected 'CODE AMOUNT', found '{}'", raw)))?;
                let amount = parse_amount(amount)
                    .ok_or_else(|| node.mismatch(&format!("invalid decimal amount '{}'", amount)))?;
                let currency = mapper.recognize(node, code.to_owned())?;
                Ok(CoinbaseMoney::new(currency, amount))
            }
            Value::Object(map) if map.contains_key("cents") => {
                let currency: CoinbaseCurrency = required(node, "currency_iso", mapper)?;
                let cents = node.field("cents")?;
                let count = cents.as_i64()?;
                CoinbaseMoney::from_cents(currency, count)
                    .ok_or_else(|| cents.mismatch("cannot scale cents of a currency with unknown precision"))
            }
            Value::Object(_) => {
                let field = node.field("amount")?;
                let raw = field.as_str()?;
                let amount = parse_amount(raw)
                    .ok_or_else(|| field.mismatch(&format!("invalid decimal amount '{}'", raw)))?;
                Ok(CoinbaseMoney::new(required(node, "currency", mapper)?, amount))
            }
            _ => Err(node.mismatch("expected money object or 'CODE AMOUNT' string")),
        }
    }
}

impl Decode for CoinbaseBuySellLevel {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        let (raw, numeric) = match node.value() {
            Value::Number(n) => (n.to_string(), true),
            Value::String(s) => (s.to_owned(), false),
            _ => return Err(node.mismatch("expected buy/sell level number")),
        };
        match mapper.recognize(node, raw)? {
            CoinbaseBuySellLevel::Unrecognized { code, .. } => Ok(CoinbaseBuySellLevel::Unrecognized { code, numeric }),
            known => Ok(known),
        }
    }
}

impl Decode for CoinbaseTransactionStatus {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        mapper.recognize(node, node.as_str()?.to_owned())
    }
}

impl Decode for CoinbaseAccountChangeCategory {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        mapper.recognize(node, node.as_str()?.to_owned())
    }
}

impl Decode for CoinbaseMerchantLogo {
    fn decode(node: &Node, _mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseMerchantLogo {
            small: node.optional_str_field("small")?,
            medium: node.optional_str_field("medium")?,
            url: node.optional_str_field("url")?,
        })
    }
}

impl Decode for CoinbaseMerchant {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseMerchant {
            company_name: node.str_field("company_name")?,
            logo: optional(node, "logo", mapper)?,
        })
    }
}

impl Decode for CoinbaseUser {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseUser {
            id: node.str_field("id")?,
            name: node.optional_str_field("name")?,
            email: node.optional_str_field("email")?,
            time_zone: node.optional_str_field("time_zone")?,
            native_currency: optional(node, "native_currency", mapper)?,
            buy_level: optional(node, "buy_level", mapper)?,
            sell_level: optional(node, "sell_level", mapper)?,
            balance: optional(node, "balance", mapper)?,
            buy_limit: optional(node, "buy_limit", mapper)?,
            sell_limit: optional(node, "sell_limit", mapper)?,
            merchant: optional(node, "merchant", mapper)?,
        })
    }
}

impl Decode for CoinbaseAddress {
    fn decode(node: &Node, _mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseAddress {
            address: node.str_field("address")?,
            callback_url: node.optional_str_field("callback_url")?,
            label: node.optional_str_field("label")?,
            created_at: timestamp(&node.field("created_at")?)?,
        })
    }
}

impl Decode for CoinbaseContact {
    fn decode(node: &Node, _mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseContact {
            email: node.str_field("email")?,
        })
    }
}

impl Decode for CoinbaseTransaction {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseTransaction {
            id: node.str_field("id")?,
            created_at: timestamp(&node.field("created_at")?)?,
            transaction_hash: node.optional_str_field("hsh")?,
            amount: required(node, "amount", mapper)?,
            request: node.bool_field("request")?,
            status: required(node, "status", mapper)?,
            sender: optional(node, "sender", mapper)?,
            recipient: optional(node, "recipient", mapper)?,
            recipient_address: node.optional_str_field("recipient_address")?,
            notes: node.optional_str_field("notes")?,
            idempotency_key: node.optional_str_field("idempotency_key")?,
        })
    }
}

impl Decode for CoinbaseCache {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseCache {
            notes_present: node.bool_field("notes_present")?,
            category: required(node, "category", mapper)?,
            other_user: optional(node, "other_user", mapper)?,
        })
    }
}

impl Decode for CoinbaseAccountChange {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseAccountChange {
            id: node.str_field("id")?,
            created_at: timestamp(&node.field("created_at")?)?,
            transaction_id: node.optional_str_field("transaction_id")?,
            confirmed: node.bool_field("confirmed")?,
            amount: required(node, "amount", mapper)?,
            cache: required(node, "cache", mapper)?,
        })
    }
}

impl<T: Listed> Decode for CoinbasePaginatedResource<T> {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        let mut data = vec![];
        for item in node.field(T::COLLECTION)?.items()? {
            let element = match T::ELEMENT {
                Some(key) => item.field(key)?,
                None => item,
            };
            data.push(T::decode(&element, mapper)?);
        }
        let total_count = node.u64_field("total_count")?;
        let num_pages = node.u64_field("num_pages")?;
        let current_page = node.u64_field("current_page")?;
        if num_pages > 0 && current_page > num_pages {
            let msg = format!("current page {} is past the last page {}", current_page, num_pages);
            return Err(node.field("current_page")?.mismatch(&msg));
        }
        Ok(CoinbasePaginatedResource { data, total_count, num_pages, current_page })
    }
}

impl Decode for CoinbaseAccountChanges {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseAccountChanges {
            current_user: required(node, "current_user", mapper)?,
            balance: required(node, "balance", mapper)?,
            changes: CoinbasePaginatedResource::decode(node, mapper)?,
        })
    }
}

impl Decode for CoinbaseTransactions {
    fn decode(node: &Node, mapper: &Mapper) -> Result<Self> {
        Ok(CoinbaseTransactions {
            current_user: required(node, "current_user", mapper)?,
            balance: required(node, "balance", mapper)?,
            native_balance: optional(node, "native_balance", mapper)?,
            transactions: CoinbasePaginatedResource::decode(node, mapper)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecodeConfig;

    fn mismatch_path(err: Error) -> String {
        match err.kind() {
            ErrorKind::SchemaMismatch(path, _) => path.to_owned(),
            other => panic!("expected schema mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_money_wire_shapes_agree() -> Result<()> {
        let mapper = Mapper::default();
        let object: CoinbaseMoney = mapper.decode_str(r#"{"amount": "1.20000000", "currency": "BTC"}"#)?;
        let cents: CoinbaseMoney = mapper.decode_str(r#"{"cents": 120000000, "currency_iso": "BTC"}"#)?;
        let compound: CoinbaseMoney = mapper.decode_str(r#""BTC 1.20000000""#)?;
        assert_eq!(object, cents);
        assert_eq!(object, compound);
        assert_eq!(cents.to_string(), "BTC 1.20000000");
        assert_eq!(compound.scale(), 8);
        Ok(())
    }

    #[test]
    fn test_money_rejects_floats_and_garbage() {
        let mapper = Mapper::default();
        let err = mapper.decode_str::<CoinbaseMoney>(r#"{"amount": 1.2, "currency": "BTC"}"#).unwrap_err();
        assert_eq!(mismatch_path(err), "amount");
        let err = mapper.decode_str::<CoinbaseMoney>(r#"{"amount": "1,2", "currency": "BTC"}"#).unwrap_err();
        assert_eq!(mismatch_path(err), "amount");
        let err = mapper.decode_str::<CoinbaseMoney>(r#"{"amount": "1.2"}"#).unwrap_err();
        assert_eq!(mismatch_path(err), "currency");
        let err = mapper.decode_str::<CoinbaseMoney>("true").unwrap_err();
        assert_eq!(mismatch_path(err), "$");
    }

    #[test]
    fn test_unknown_currency() -> Result<()> {
        let doc = r#"{"amount": "5", "currency": "DOGE"}"#;
        let lenient: CoinbaseMoney = Mapper::default().decode_str(doc)?;
        assert_eq!(lenient.currency, CoinbaseCurrency::Unrecognized("DOGE".to_owned()));
        let err = Mapper::new(DecodeConfig::strict()).decode_str::<CoinbaseMoney>(doc).unwrap_err();
        match err.kind() {
            ErrorKind::UnknownEnumValue(path, value) => {
                assert_eq!(path, "currency");
                assert_eq!(value, "DOGE");
            }
            other => panic!("expected unknown enum value, got {:?}", other),
        }
        let err = Mapper::default()
            .decode_str::<CoinbaseMoney>(r#"{"cents": 5, "currency_iso": "DOGE"}"#)
            .unwrap_err();
        assert_eq!(mismatch_path(err), "cents");
        Ok(())
    }

    #[test]
    fn test_timestamps_compare_as_instants() -> Result<()> {
        let doc = r#"{"address": "1abc", "created_at": "2014-02-14T16:50:18-08:00"}"#;
        let address: CoinbaseAddress = Mapper::default().decode_str(doc)?;
        assert_eq!(address.created_at, DateTime::parse_from_rfc3339("2014-02-15T00:50:18Z").unwrap());
        assert_eq!(address.callback_url, None);
        assert_eq!(address.label, None);

        let err = Mapper::default()
            .decode_str::<CoinbaseAddress>(r#"{"address": "1abc", "created_at": "yesterday"}"#)
            .unwrap_err();
        assert_eq!(mismatch_path(err), "created_at");
        Ok(())
    }

    #[test]
    fn test_levels_and_categories() -> Result<()> {
        let mapper = Mapper::default();
        assert_eq!(mapper.decode_str::<CoinbaseBuySellLevel>("3")?, CoinbaseBuySellLevel::Three);
        assert_eq!(mapper.decode_str::<CoinbaseBuySellLevel>(r#""2""#)?, CoinbaseBuySellLevel::Two);
        assert_eq!(
            mapper.decode_str::<CoinbaseBuySellLevel>("4")?,
            CoinbaseBuySellLevel::Unrecognized { code: "4".to_owned(), numeric: true }
        );
        assert_eq!(
            mapper.decode_str::<CoinbaseBuySellLevel>(r#""007""#)?,
            CoinbaseBuySellLevel::Unrecognized { code: "007".to_owned(), numeric: false }
        );
        assert_eq!(mapper.decode_str::<CoinbaseAccountChangeCategory>(r#""invoice""#)?, CoinbaseAccountChangeCategory::Invoice);
        assert!(mapper.decode_str::<CoinbaseBuySellLevel>("true").is_err());
        let strict = Mapper::new(DecodeConfig::strict());
        assert!(strict.decode_str::<CoinbaseAccountChangeCategory>(r#""rebate""#).is_err());
        Ok(())
    }

    #[test]
    fn test_page_counters() {
        let mapper = Mapper::default();
        let err = mapper
            .decode_str::<CoinbaseContacts>(r#"{"contacts": [], "total_count": 0, "num_pages": 1, "current_page": 2}"#)
            .unwrap_err();
        assert_eq!(mismatch_path(err), "current_page");
        let err = mapper
            .decode_str::<CoinbaseContacts>(r#"{"contacts": [], "total_count": -1, "num_pages": 0, "current_page": 0}"#)
            .unwrap_err();
        assert_eq!(mismatch_path(err), "total_count");
        let err = mapper
            .decode_str::<CoinbaseContacts>(r#"{"contacts": [{"contact": {}}], "total_count": 1, "num_pages": 1, "current_page": 1}"#)
            .unwrap_err();
        assert_eq!(mismatch_path(err), "contacts[0].contact.email");
        let empty = mapper
            .decode_str::<CoinbaseContacts>(r#"{"contacts": [], "total_count": 0, "num_pages": 0, "current_page": 1}"#)
            .unwrap();
        assert!(empty.data.is_empty());
        assert!(!empty.has_next_page());
    }

    #[test]
    fn test_unknown_fields_are_ignored() -> Result<()> {
        let doc = r#"{"contact": {"email": "a@b.c", "avatar": {"url": null}}}"#;
        let node: Value = serde_json::from_str(doc)?;
        let contact = CoinbaseContact::decode(&Node::root(&node).field("contact")?, &Mapper::default())?;
        assert_eq!(contact.email, "a@b.c");
        Ok(())
    }
}
