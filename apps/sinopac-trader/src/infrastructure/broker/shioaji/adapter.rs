//! Shioaji gateway adapter implementing `BrokerConnector` and `BrokerPort`.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::application::ports::{BrokerConnector, BrokerError, BrokerPort, TradingMode};
use crate::domain::{
    Account, Contract, Credentials, KBar, OrderRequest, PositionDetail, PositionSummary, Tick,
    TicksQuery, Trade,
};

use super::api_types::{
    ColumnarKbars, ColumnarTicks, GatewayAccount, KbarsRequest, LoginRequest, LoginResponse,
    PlaceOrderRequest, TicksRequest, TradeResponse,
};
use super::config::GatewayConfig;
use super::error::GatewayError;
use super::http_client::GatewayHttpClient;

/// Creates gateway clients bound to a trading mode.
#[derive(Debug, Clone, Default)]
pub struct ShioajiGatewayConnector {
    config: GatewayConfig,
}

impl ShioajiGatewayConnector {
    /// Create a connector.
    #[must_use]
    pub const fn new(config: GatewayConfig) -> Self {
        Self { config }
    }
}

impl BrokerConnector for ShioajiGatewayConnector {
    type Client = ShioajiGatewayClient;

    fn connect(&self, mode: TradingMode) -> Result<Self::Client, BrokerError> {
        ShioajiGatewayClient::new(&self.config, mode).map_err(BrokerError::from)
    }
}

/// One SDK session on the gateway.
#[derive(Debug)]
pub struct ShioajiGatewayClient {
    http: GatewayHttpClient,
    mode: TradingMode,
}

impl ShioajiGatewayClient {
    /// Create a client. Does not contact the gateway.
    pub fn new(config: &GatewayConfig, mode: TradingMode) -> Result<Self, GatewayError> {
        tracing::debug!(base_url = %config.base_url, mode = %mode, "Creating gateway client");
        Ok(Self {
            http: GatewayHttpClient::new(config)?,
            mode,
        })
    }

    /// Environment this client logs into.
    #[must_use]
    pub const fn mode(&self) -> TradingMode {
        self.mode
    }

    async fn contract(&self, table: &str, code: &str) -> Result<Contract, BrokerError> {
        let result: Result<Contract, GatewayError> = self
            .http
            .get(&["api", "v1", "contracts", table, code])
            .await;

        match result {
            Ok(contract) => Ok(contract),
            Err(GatewayError::NotFound { .. }) => Err(BrokerError::ContractNotFound {
                code: code.to_string(),
            }),
            Err(e) => Err(BrokerError::from(e)),
        }
    }
}

#[async_trait]
impl BrokerPort for ShioajiGatewayClient {
    async fn login(&self, credentials: &Credentials) -> Result<Vec<Account>, BrokerError> {
        let body = LoginRequest::new(credentials, self.mode);

        let response: LoginResponse = self
            .http
            .post(&["api", "v1", "login"], &body)
            .await
            .map_err(BrokerError::from)?;

        self.http.set_token(Some(response.token));

        let accounts = response
            .accounts
            .into_iter()
            .filter_map(|raw| {
                let tag = raw.account_type.clone();
                let account = GatewayAccount::into_account(raw);
                if account.is_none() {
                    tracing::debug!(account_type = %tag, "Skipping unsupported account type");
                }
                account
            })
            .collect();

        Ok(accounts)
    }

    async fn stock_contract(&self, code: &str) -> Result<Contract, BrokerError> {
        self.contract("stocks", code).await
    }

    async fn future_contract(&self, code: &str) -> Result<Contract, BrokerError> {
        self.contract("futures", code).await
    }

    async fn ticks(
        &self,
        contract: &Contract,
        query: TicksQuery,
    ) -> Result<Vec<Tick>, BrokerError> {
        let columns: ColumnarTicks = self
            .http
            .post(&["api", "v1", "data", "ticks"], &TicksRequest::new(contract, query))
            .await
            .map_err(BrokerError::from)?;

        columns.into_rows().map_err(BrokerError::from)
    }

    async fn kbars(
        &self,
        contract: &Contract,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<KBar>, BrokerError> {
        let body = KbarsRequest {
            contract,
            start,
            end,
        };

        let columns: ColumnarKbars = self
            .http
            .post(&["api", "v1", "data", "kbars"], &body)
            .await
            .map_err(BrokerError::from)?;

        columns.into_rows().map_err(BrokerError::from)
    }

    async fn place_order(
        &self,
        contract: &Contract,
        order: &OrderRequest,
        account: &Account,
    ) -> Result<Trade, BrokerError> {
        let body = PlaceOrderRequest::new(contract, order, account);

        tracing::debug!(
            code = %contract.code,
            action = body.order.action,
            order_type = body.order.order_type,
            price_type = body.order.price_type,
            "Posting order to gateway"
        );

        let response: TradeResponse = self
            .http
            .post(&["api", "v1", "orders"], &body)
            .await
            .map_err(BrokerError::from)?;

        Ok(response.into_trade())
    }

    async fn position_summary(
        &self,
        account: &Account,
    ) -> Result<Vec<PositionSummary>, BrokerError> {
        self.http
            .get(&[
                "api",
                "v1",
                "accounts",
                account.account_id(),
                "positions",
                "summary",
            ])
            .await
            .map_err(BrokerError::from)
    }

    async fn list_positions(&self, account: &Account) -> Result<Vec<PositionDetail>, BrokerError> {
        self.http
            .get(&["api", "v1", "accounts", account.account_id(), "positions"])
            .await
            .map_err(BrokerError::from)
    }

    async fn logout(&self) -> Result<(), BrokerError> {
        let _: serde_json::Value = self
            .http
            .post(&["api", "v1", "logout"], &serde_json::json!({}))
            .await
            .map_err(BrokerError::from)?;

        self.http.set_token(None);
        Ok(())
    }
}
