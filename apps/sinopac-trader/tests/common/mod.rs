//! Recording fake of the brokerage SDK.
//!
//! `FakeConnector` hands out `FakeBroker` clients that share one
//! `FakeState`, so a test keeps a handle on the state after the session has
//! taken ownership of the connector.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use sinopac_trader::application::ports::{BrokerConnector, BrokerError, BrokerPort, TradingMode};
use sinopac_trader::domain::{
    Account, AccountInfo, Action, Contract, Credentials, KBar, OrderRequest, OrderStatus,
    PositionDetail, PositionSummary, SecurityType, Tick, TicksQuery, Trade,
};

/// Code the fake treats as missing from every contract table.
pub const MISSING_CONTRACT: &str = "9999";

/// Shared, inspectable fake state.
#[derive(Default)]
pub struct FakeState {
    pub accounts: Mutex<Vec<Account>>,
    pub login_error: Mutex<Option<BrokerError>>,
    pub logout_error: Mutex<Option<BrokerError>>,
    pub summary: Mutex<Vec<PositionSummary>>,
    pub detail: Mutex<Vec<PositionDetail>>,
    pub calls: Mutex<Vec<&'static str>>,
    pub connects: Mutex<Vec<TradingMode>>,
    pub logins: Mutex<Vec<Credentials>>,
    pub tick_queries: Mutex<Vec<(String, TicksQuery)>>,
    pub kbar_queries: Mutex<Vec<(String, NaiveDate, NaiveDate)>>,
    pub contract_lookups: Mutex<Vec<(SecurityType, String)>>,
    pub orders: Mutex<Vec<(Contract, OrderRequest, Account)>>,
    pub trades: Mutex<Vec<Trade>>,
}

impl FakeState {
    pub fn with_accounts(accounts: Vec<Account>) -> Arc<Self> {
        let state = Self::default();
        *state.accounts.lock() = accounts;
        Arc::new(state)
    }

    /// How many times a port method was called.
    pub fn count(&self, method: &str) -> usize {
        self.calls.lock().iter().filter(|m| **m == method).count()
    }

    /// Total port calls of any kind.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, method: &'static str) {
        self.calls.lock().push(method);
    }
}

/// Connector producing clients over a shared state.
pub struct FakeConnector {
    pub state: Arc<FakeState>,
}

impl FakeConnector {
    pub fn new(state: &Arc<FakeState>) -> Self {
        Self {
            state: Arc::clone(state),
        }
    }
}

impl BrokerConnector for FakeConnector {
    type Client = FakeBroker;

    fn connect(&self, mode: TradingMode) -> Result<Self::Client, BrokerError> {
        self.state.connects.lock().push(mode);
        Ok(FakeBroker {
            state: Arc::clone(&self.state),
        })
    }
}

/// Fake SDK client.
pub struct FakeBroker {
    state: Arc<FakeState>,
}

fn contract(security_type: SecurityType, code: &str) -> Result<Contract, BrokerError> {
    if code == MISSING_CONTRACT {
        return Err(BrokerError::ContractNotFound {
            code: code.to_string(),
        });
    }
    let exchange = match security_type {
        SecurityType::Future => "TAIFEX",
        _ => "TSE",
    };
    Ok(Contract {
        security_type,
        exchange: exchange.to_string(),
        code: code.to_string(),
        symbol: format!("{exchange}{code}"),
        name: format!("Contract {code}"),
        category: String::new(),
        reference: None,
        limit_up: None,
        limit_down: None,
    })
}

#[async_trait]
impl BrokerPort for FakeBroker {
    async fn login(&self, credentials: &Credentials) -> Result<Vec<Account>, BrokerError> {
        self.state.record("login");
        self.state.logins.lock().push(credentials.clone());
        if let Some(err) = self.state.login_error.lock().clone() {
            return Err(err);
        }
        Ok(self.state.accounts.lock().clone())
    }

    async fn stock_contract(&self, code: &str) -> Result<Contract, BrokerError> {
        self.state.record("stock_contract");
        self.state
            .contract_lookups
            .lock()
            .push((SecurityType::Stock, code.to_string()));
        contract(SecurityType::Stock, code)
    }

    async fn future_contract(&self, code: &str) -> Result<Contract, BrokerError> {
        self.state.record("future_contract");
        self.state
            .contract_lookups
            .lock()
            .push((SecurityType::Future, code.to_string()));
        contract(SecurityType::Future, code)
    }

    async fn ticks(
        &self,
        contract: &Contract,
        query: TicksQuery,
    ) -> Result<Vec<Tick>, BrokerError> {
        self.state.record("ticks");
        self.state
            .tick_queries
            .lock()
            .push((contract.code.clone(), query));
        let ts = query.date.and_hms_opt(13, 30, 0).unwrap();
        let count = query.last_count.unwrap_or(1);
        Ok((0..count)
            .map(|i| Tick {
                ts,
                close: Decimal::new(1000 + i64::from(i), 0),
                volume: 1,
                bid_price: Decimal::new(999, 0),
                bid_volume: 5,
                ask_price: Decimal::new(1001, 0),
                ask_volume: 5,
                tick_type: 1,
            })
            .collect())
    }

    async fn kbars(
        &self,
        contract: &Contract,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<KBar>, BrokerError> {
        self.state.record("kbars");
        self.state
            .kbar_queries
            .lock()
            .push((contract.code.clone(), start, end));
        Ok(vec![KBar {
            ts: start.and_hms_opt(9, 1, 0).unwrap(),
            open: Decimal::new(1075, 0),
            high: Decimal::new(1080, 0),
            low: Decimal::new(1070, 0),
            close: Decimal::new(1075, 0),
            volume: 245,
            amount: Decimal::new(263_375_000, 0),
        }])
    }

    async fn place_order(
        &self,
        contract: &Contract,
        order: &OrderRequest,
        account: &Account,
    ) -> Result<Trade, BrokerError> {
        self.state.record("place_order");
        self.state
            .orders
            .lock()
            .push((contract.clone(), order.clone(), account.clone()));
        let seq = self.state.trades.lock().len() + 1;
        let trade = Trade {
            contract_code: contract.code.clone(),
            order: order.clone(),
            order_id: format!("ord-{seq}"),
            seqno: format!("{seq:06}"),
            ordno: String::new(),
            status: OrderStatus::PendingSubmit,
            status_code: "00".to_string(),
            msg: String::new(),
        };
        self.state.trades.lock().push(trade.clone());
        Ok(trade)
    }

    async fn position_summary(
        &self,
        _account: &Account,
    ) -> Result<Vec<PositionSummary>, BrokerError> {
        self.state.record("position_summary");
        Ok(self.state.summary.lock().clone())
    }

    async fn list_positions(&self, _account: &Account) -> Result<Vec<PositionDetail>, BrokerError> {
        self.state.record("list_positions");
        Ok(self.state.detail.lock().clone())
    }

    async fn logout(&self) -> Result<(), BrokerError> {
        self.state.record("logout");
        match self.state.logout_error.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn info(account_id: &str, signed: bool) -> AccountInfo {
    AccountInfo {
        account_id: account_id.to_string(),
        broker_id: "9A95".to_string(),
        person_id: "A123456789".to_string(),
        username: "Tester".to_string(),
        signed,
    }
}

pub fn stock_account(signed: bool) -> Account {
    Account::Stock(info("0123456", signed))
}

pub fn future_account(signed: bool) -> Account {
    Account::Future(info("7654321", signed))
}

pub fn summary_row(code: &str, quantity: u32) -> PositionSummary {
    PositionSummary {
        code: code.to_string(),
        direction: Action::Buy,
        quantity,
        price: Decimal::new(5000, 1),
        last_price: Decimal::new(5100, 1),
        pnl: Decimal::new(10_000, 0),
    }
}

pub fn api_credentials() -> Credentials {
    Credentials::api_key("KEY123456", "SECRET987")
}
