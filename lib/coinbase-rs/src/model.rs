use chrono::{DateTime, FixedOffset};
use crate::api::{Coded, Listed};
use crate::money::{CoinbaseCurrency, CoinbaseMoney};

pub type Timestamp = DateTime<FixedOffset>;

/**
 * A Coinbase user. Snapshots embedded in transactions and account changes
 * only carry `id`, `email` and `name`; everything else is filled for full
 * user documents.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub time_zone: Option<String>,
    pub native_currency: Option<CoinbaseCurrency>,
    pub buy_level: Option<CoinbaseBuySellLevel>,
    pub sell_level: Option<CoinbaseBuySellLevel>,
    pub balance: Option<CoinbaseMoney>,
    pub buy_limit: Option<CoinbaseMoney>,
    pub sell_limit: Option<CoinbaseMoney>,
    pub merchant: Option<CoinbaseMerchant>,
}

impl CoinbaseUser {
    pub fn snapshot(id: &str, email: &str, name: &str) -> Self {
        CoinbaseUser {
            id: id.to_owned(),
            name: Some(name.to_owned()),
            email: Some(email.to_owned()),
            time_zone: None,
            native_currency: None,
            buy_level: None,
            sell_level: None,
            balance: None,
            buy_limit: None,
            sell_limit: None,
            merchant: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseMerchant {
    pub company_name: String,
    pub logo: Option<CoinbaseMerchantLogo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseMerchantLogo {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub url: Option<String>,
}

// Verification tier, sent as 1, 2 or 3.
#[derive(Debug, Clone, PartialEq)]
pub enum CoinbaseBuySellLevel {
    One,
    Two,
    Three,
    // `numeric` is set when the code arrived as a JSON number rather than a string.
    Unrecognized { code: String, numeric: bool },
}

impl Coded for CoinbaseBuySellLevel {
    fn from_code(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(CoinbaseBuySellLevel::One),
            "2" => Some(CoinbaseBuySellLevel::Two),
            "3" => Some(CoinbaseBuySellLevel::Three),
            _ => None,
        }
    }

    fn unrecognized(raw: String) -> Self {
        CoinbaseBuySellLevel::Unrecognized { code: raw, numeric: false }
    }

    fn code(&self) -> &str {
        match self {
            CoinbaseBuySellLevel::One => "1",
            CoinbaseBuySellLevel::Two => "2",
            CoinbaseBuySellLevel::Three => "3",
            CoinbaseBuySellLevel::Unrecognized { code, .. } => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseAddress {
    pub address: String,
    pub callback_url: Option<String>,
    pub label: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseContact {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseTransaction {
    pub id: String,
    pub created_at: Timestamp,
    // Null until the transfer hits the blockchain.
    #[serde(rename = "hsh")]
    pub transaction_hash: Option<String>,
    pub amount: CoinbaseMoney,
    pub request: bool,
    pub status: CoinbaseTransactionStatus,
    pub sender: Option<CoinbaseUser>,
    pub recipient: Option<CoinbaseUser>,
    // Either an email or a blockchain address.
    pub recipient_address: Option<String>,
    pub notes: Option<String>,
    pub idempotency_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoinbaseTransactionStatus {
    Pending,
    Complete,
    Unrecognized(String),
}

impl Coded for CoinbaseTransactionStatus {
    fn from_code(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(CoinbaseTransactionStatus::Pending),
            "complete" => Some(CoinbaseTransactionStatus::Complete),
            _ => None,
        }
    }

    fn unrecognized(raw: String) -> Self {
        CoinbaseTransactionStatus::Unrecognized(raw)
    }

    fn code(&self) -> &str {
        match self {
            CoinbaseTransactionStatus::Pending => "pending",
            CoinbaseTransactionStatus::Complete => "complete",
            CoinbaseTransactionStatus::Unrecognized(raw) => raw,
        }
    }
}

/**
 * A ledger entry against the account balance, optionally tied to a transaction.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseAccountChange {
    pub id: String,
    pub created_at: Timestamp,
    pub transaction_id: Option<String>,
    pub confirmed: bool,
    pub amount: CoinbaseMoney,
    pub cache: CoinbaseCache,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseCache {
    pub notes_present: bool,
    pub category: CoinbaseAccountChangeCategory,
    pub other_user: Option<CoinbaseUser>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoinbaseAccountChangeCategory {
    Tx,
    Request,
    Transfer,
    Invoice,
    Unrecognized(String),
}

impl Coded for CoinbaseAccountChangeCategory {
    fn from_code(raw: &str) -> Option<Self> {
        match raw {
            "tx" => Some(CoinbaseAccountChangeCategory::Tx),
            "request" => Some(CoinbaseAccountChangeCategory::Request),
            "transfer" => Some(CoinbaseAccountChangeCategory::Transfer),
            "invoice" => Some(CoinbaseAccountChangeCategory::Invoice),
            _ => None,
        }
    }

    fn unrecognized(raw: String) -> Self {
        CoinbaseAccountChangeCategory::Unrecognized(raw)
    }

    fn code(&self) -> &str {
        match self {
            CoinbaseAccountChangeCategory::Tx => "tx",
            CoinbaseAccountChangeCategory::Request => "request",
            CoinbaseAccountChangeCategory::Transfer => "transfer",
            CoinbaseAccountChangeCategory::Invoice => "invoice",
            CoinbaseAccountChangeCategory::Unrecognized(raw) => raw,
        }
    }
}

/**
 * One page of a listing. Serializes under the element type's collection key,
 * next to the three page counters.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct CoinbasePaginatedResource<T> {
    pub data: Vec<T>,
    pub total_count: u64,
    pub num_pages: u64,
    pub current_page: u64,
}

impl<T> CoinbasePaginatedResource<T> {
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.num_pages
    }
}

pub type CoinbaseUsers = CoinbasePaginatedResource<CoinbaseUser>;
pub type CoinbaseAddresses = CoinbasePaginatedResource<CoinbaseAddress>;
pub type CoinbaseContacts = CoinbasePaginatedResource<CoinbaseContact>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseAccountChanges {
    pub current_user: CoinbaseUser,
    pub balance: CoinbaseMoney,
    #[serde(flatten)]
    pub changes: CoinbasePaginatedResource<CoinbaseAccountChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinbaseTransactions {
    pub current_user: CoinbaseUser,
    pub balance: CoinbaseMoney,
    pub native_balance: Option<CoinbaseMoney>,
    #[serde(flatten)]
    pub transactions: CoinbasePaginatedResource<CoinbaseTransaction>,
}

impl Listed for CoinbaseUser {
    const COLLECTION: &'static str = "users";
    const ELEMENT: Option<&'static str> = Some("user");
}

impl Listed for CoinbaseAddress {
    const COLLECTION: &'static str = "addresses";
    const ELEMENT: Option<&'static str> = Some("address");
}

impl Listed for CoinbaseContact {
    const COLLECTION: &'static str = "contacts";
    const ELEMENT: Option<&'static str> = Some("contact");
}

impl Listed for CoinbaseTransaction {
    const COLLECTION: &'static str = "transactions";
    const ELEMENT: Option<&'static str> = Some("transaction");
}

impl Listed for CoinbaseAccountChange {
    const COLLECTION: &'static str = "account_changes";
    const ELEMENT: Option<&'static str> = None;
}
