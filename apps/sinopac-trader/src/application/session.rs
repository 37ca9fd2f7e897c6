//! Trader session.
//!
//! Owns the SDK client handle and the login state. Every query and order
//! goes through a guard that refuses to touch the broker unless the session
//! is logged in; order placement additionally requires a signed account.
//!
//! # State machine
//!
//! ```text
//!            login ok
//! LoggedOut ─────────▶ LoggedIn
//!     ▲                   │
//!     └───────────────────┘
//!            logout
//! ```
//!
//! A failed login leaves the session in `LoggedOut`. Nothing logs in again
//! on its own.

use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::application::ports::{BrokerConnector, BrokerError, BrokerPort, TradingMode};
use crate::config::credentials::load_credentials;
use crate::domain::order::translator;
use crate::domain::{
    Account, AccountKind, Contract, Credentials, Inventory, KBar, OrderRequest, OrderTicket,
    PositionSummary, Tick, TicksQuery, Trade,
};
use crate::error::SessionError;

/// Number of ticks returned by [`TraderSession::get_ticks`].
pub const RECENT_TICK_COUNT: u32 = 10;

/// Login state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Initial state, and the state after logout or a failed login.
    #[default]
    LoggedOut,
    /// Login returned at least one account.
    LoggedIn,
}

/// A brokerage session.
///
/// Single owner, no internal locking: `login` and `logout` take `&mut self`,
/// everything else `&self`.
pub struct TraderSession<C: BrokerConnector> {
    connector: C,
    client: Option<C::Client>,
    state: SessionState,
    stock_account: Option<Account>,
    future_account: Option<Account>,
    mode: TradingMode,
}

impl<C: BrokerConnector> std::fmt::Debug for TraderSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraderSession")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("has_client", &self.client.is_some())
            .field("stock_account", &self.stock_account)
            .field("future_account", &self.future_account)
            .finish_non_exhaustive()
    }
}

impl<C: BrokerConnector> TraderSession<C> {
    /// Create a logged-out session.
    pub fn new(connector: C, mode: TradingMode) -> Self {
        Self {
            connector,
            client: None,
            state: SessionState::LoggedOut,
            stock_account: None,
            future_account: None,
            mode,
        }
    }

    /// Create a session and log in with the credentials stored at `path`.
    ///
    /// Never fails: a missing or incomplete credential file, or a failed
    /// login, is logged and leaves the session logged out.
    pub async fn open(connector: C, mode: TradingMode, path: &Path) -> Self {
        let mut session = Self::new(connector, mode);

        let credentials = match load_credentials(path) {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Cannot load credentials");
                return session;
            }
        };

        // login() has already logged the failure.
        let _ = session.login(mode, &credentials).await;
        session
    }

    /// Current login state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// True once login has returned accounts and logout has not been called.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn)
    }

    /// Environment of the current (or next) client.
    #[must_use]
    pub const fn mode(&self) -> TradingMode {
        self.mode
    }

    /// Stock account found at login.
    #[must_use]
    pub const fn stock_account(&self) -> Option<&Account> {
        self.stock_account.as_ref()
    }

    /// Futures account found at login.
    #[must_use]
    pub const fn future_account(&self) -> Option<&Account> {
        self.future_account.as_ref()
    }

    /// Log in.
    ///
    /// Creates a client for `mode`, calls the SDK login once and sorts the
    /// returned accounts into the stock and future slots.
    ///
    /// A session that is already logged in is logged out first; if that
    /// logout fails, the error is returned and the current session is kept.
    /// A login that returns no accounts closes the new vendor session again.
    pub async fn login(
        &mut self,
        mode: TradingMode,
        credentials: &Credentials,
    ) -> Result<(), SessionError> {
        if self.is_logged_in() {
            tracing::info!("Already logged in, closing the current session first");
            self.logout().await?;
        }

        self.mode = mode;
        self.state = SessionState::LoggedOut;
        self.client = None;
        self.stock_account = None;
        self.future_account = None;

        tracing::info!(mode = %mode, scheme = credentials.scheme(), "Logging in");

        let client = self.connector.connect(mode).map_err(|e| {
            tracing::error!(error = %e, "Failed to create broker client");
            SessionError::from(e)
        })?;

        let accounts = client.login(credentials).await.map_err(|e| {
            tracing::error!(error = %e, "Login failed");
            SessionError::from(e)
        })?;

        if accounts.is_empty() {
            tracing::error!("Login failed: broker returned no accounts");
            if let Err(e) = client.logout().await {
                tracing::warn!(error = %e, "Failed to close session without accounts");
            }
            return Err(SessionError::NoAccounts);
        }

        for account in accounts {
            tracing::info!(
                kind = %account.kind(),
                account_id = account.account_id(),
                signed = account.is_signed(),
                "Account available"
            );
            match account.kind() {
                AccountKind::Stock => self.stock_account = Some(account),
                AccountKind::Future => self.future_account = Some(account),
            }
        }

        for account in [&self.stock_account, &self.future_account]
            .into_iter()
            .flatten()
            .filter(|a| a.is_signed())
        {
            tracing::info!(kind = %account.kind(), "Account is signed, orders allowed");
        }

        self.client = Some(client);
        self.state = SessionState::LoggedIn;
        tracing::info!("Login succeeded");
        Ok(())
    }

    /// The most recent ticks of a stock for today.
    pub async fn get_ticks(&self, contract_id: &str) -> Result<Vec<Tick>, SessionError> {
        let client = self.guard("get ticks")?;

        let result = async {
            let contract = client.stock_contract(contract_id).await?;
            let query = TicksQuery::last(Local::now().date_naive(), RECENT_TICK_COUNT);
            client.ticks(&contract, query).await
        }
        .await;

        result.map_err(|e| {
            tracing::error!(contract_id, error = %e, "Failed to fetch ticks");
            SessionError::from(e)
        })
    }

    /// K-bars of a stock from `start` through `end` (today when omitted).
    pub async fn get_kbars(
        &self,
        contract_id: &str,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Vec<KBar>, SessionError> {
        let client = self.guard("get k-bars")?;
        let end = end.unwrap_or_else(|| Local::now().date_naive());

        let result = async {
            let contract = client.stock_contract(contract_id).await?;
            client.kbars(&contract, start, end).await
        }
        .await;

        result.map_err(|e| {
            tracing::error!(
                contract_id,
                start = %start,
                end = %end,
                error = %e,
                "Failed to fetch k-bars"
            );
            SessionError::from(e)
        })
    }

    /// Place an order.
    ///
    /// Checks run in this order, and any failure stops before the broker
    /// sees an order: logged in, known account type, account present,
    /// account signed, all three tokens translate. Only then is the
    /// contract resolved and the order submitted, once.
    pub async fn place_order(&self, ticket: &OrderTicket) -> Result<Trade, SessionError> {
        let client = self.guard("place order")?;
        let account = self.resolve_account(&ticket.account_type)?;

        if !account.is_signed() {
            tracing::error!(
                kind = %account.kind(),
                account_id = account.account_id(),
                "Account is not signed, cannot place order"
            );
            return Err(SessionError::AccountNotSigned {
                kind: account.kind(),
                account_id: account.account_id().to_string(),
            });
        }

        let translated =
            translator::translate(&ticket.action, &ticket.order_type, &ticket.price_type)
                .map_err(|e| {
                    tracing::error!(error = %e, "Unsupported order parameter");
                    SessionError::from(e)
                })?;
        let order = OrderRequest::from_ticket(ticket, translated);

        if self.mode.is_live() {
            tracing::warn!(
                contract_id = %ticket.contract_id,
                "Submitting LIVE order - this will execute real trades"
            );
        }

        tracing::info!(
            contract_id = %ticket.contract_id,
            account_id = account.account_id(),
            action = %order.action,
            order_type = %order.order_type,
            time_in_force = %order.time_in_force,
            price = %order.price,
            quantity = order.quantity,
            "Submitting order"
        );

        let result = async {
            let contract = resolve_contract(client, account.kind(), &ticket.contract_id).await?;
            client.place_order(&contract, &order, account).await
        }
        .await;

        match result {
            Ok(trade) => {
                tracing::info!(
                    seqno = %trade.seqno,
                    status = %trade.status,
                    "Order submitted: {}",
                    trade
                );
                Ok(trade)
            }
            Err(e) => {
                tracing::error!(contract_id = %ticket.contract_id, error = %e, "Order failed");
                Err(SessionError::from(e))
            }
        }
    }

    /// Per-contract position summary for the stock or future account.
    pub async fn get_positions(
        &self,
        account_type: &str,
    ) -> Result<Vec<PositionSummary>, SessionError> {
        let client = self.guard("get positions")?;
        let account = self.resolve_account(account_type)?;

        client.position_summary(account).await.map_err(|e| {
            tracing::error!(
                account_id = account.account_id(),
                error = %e,
                "Failed to fetch positions"
            );
            SessionError::from(e)
        })
    }

    /// Holdings of the stock or future account, summarized or per lot.
    pub async fn get_inventory(
        &self,
        account_type: &str,
        detail: bool,
    ) -> Result<Inventory, SessionError> {
        let client = self.guard("get inventory")?;
        let account = self.resolve_account(account_type)?;

        let result = if detail {
            client.list_positions(account).await.map(Inventory::Detail)
        } else {
            client.position_summary(account).await.map(Inventory::Summary)
        };

        let inventory = result.map_err(|e| {
            tracing::error!(
                account_id = account.account_id(),
                error = %e,
                "Failed to fetch inventory"
            );
            SessionError::from(e)
        })?;

        if inventory.is_empty() {
            tracing::info!(account_id = account.account_id(), "No open positions");
        } else if detail {
            tracing::info!("Inventory detail:\n{}", inventory);
        } else {
            tracing::info!("Inventory summary:\n{}", inventory);
        }

        Ok(inventory)
    }

    /// Log out.
    ///
    /// Succeeds without contacting the broker when not logged in. If the
    /// SDK logout fails the session stays logged in.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        let client = match (&self.client, self.state) {
            (Some(client), SessionState::LoggedIn) => client,
            _ => {
                tracing::info!("Not logged in, nothing to log out");
                return Ok(());
            }
        };

        client.logout().await.map_err(|e| {
            tracing::error!(error = %e, "Logout failed");
            SessionError::from(e)
        })?;

        self.state = SessionState::LoggedOut;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Return the client if logged in.
    fn guard(&self, operation: &str) -> Result<&C::Client, SessionError> {
        match (&self.client, self.state) {
            (Some(client), SessionState::LoggedIn) => Ok(client),
            _ => {
                tracing::error!(operation, "Not logged in");
                Err(SessionError::NotLoggedIn)
            }
        }
    }

    /// Parse an account-type token and return the matching account.
    fn resolve_account(&self, account_type: &str) -> Result<&Account, SessionError> {
        let kind: AccountKind = account_type.parse().map_err(|e| {
            tracing::error!(account_type, "Unsupported account type");
            SessionError::from(e)
        })?;

        let slot = match kind {
            AccountKind::Stock => &self.stock_account,
            AccountKind::Future => &self.future_account,
        };

        slot.as_ref().ok_or_else(|| {
            tracing::error!(kind = %kind, "No account of this kind");
            SessionError::AccountUnavailable { kind }
        })
    }
}

/// Look the contract up in the table that matches the account kind.
async fn resolve_contract<B: BrokerPort>(
    client: &B,
    kind: AccountKind,
    code: &str,
) -> Result<Contract, BrokerError> {
    match kind {
        AccountKind::Stock => client.stock_contract(code).await,
        AccountKind::Future => client.future_contract(code).await,
    }
}
