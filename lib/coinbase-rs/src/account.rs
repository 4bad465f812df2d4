use crate::errors::*;
use crate::mapper::Mapper;
use crate::model::*;
use crate::money::CoinbaseMoney;

/**
 * Entry points for the account API documents, one per response shape.
 */
pub struct Account {
    pub mapper: Mapper
}

impl Account {
    pub fn account_changes(&self, body: &[u8]) -> Result<CoinbaseAccountChanges> {
        let changes: CoinbaseAccountChanges = self.mapper.decode(body)?;
        Ok(changes)
    }

    pub fn users(&self, body: &[u8]) -> Result<CoinbaseUsers> {
        let users: CoinbaseUsers = self.mapper.decode(body)?;
        Ok(users)
    }

    pub fn balance(&self, body: &[u8]) -> Result<CoinbaseMoney> {
        let balance: CoinbaseMoney = self.mapper.decode(body)?;
        Ok(balance)
    }

    pub fn addresses(&self, body: &[u8]) -> Result<CoinbaseAddresses> {
        let addresses: CoinbaseAddresses = self.mapper.decode(body)?;
        Ok(addresses)
    }

    pub fn contacts(&self, body: &[u8]) -> Result<CoinbaseContacts> {
        let contacts: CoinbaseContacts = self.mapper.decode(body)?;
        Ok(contacts)
    }

    pub fn transactions(&self, body: &[u8]) -> Result<CoinbaseTransactions> {
        let transactions: CoinbaseTransactions = self.mapper.decode(body)?;
        Ok(transactions)
    }
}
