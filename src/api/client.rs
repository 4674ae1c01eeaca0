//! Node client: one async method per RPC call

use num_bigint::BigInt;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;

use super::Method;
use crate::config::ClientConfig;
use crate::constants::{DEFAULT_NEXUS, TX_EXPIRATION_SECS};
use crate::crypto::{Hash, SigningRequest, TransactionSigner};
use crate::decode::{FromNode, Paginated};
use crate::model::*;
use crate::rpc::{Dispatcher, HttpTransport, SdkError, Transport, TransportError};

/// Outcome of [`NodeClient::sign_and_send_transaction`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentTransaction {
    /// Hash computed by the signer
    pub hash: Hash,
    /// The node's `sendRawTransaction` result
    pub reply: String,
}

/// Client bound to one node endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NodeClient<T = HttpTransport> {
    dispatcher: Dispatcher<T>,
    nexus: String,
}

impl NodeClient<HttpTransport> {
    pub fn new(url: impl Into<String>) -> Result<Self, TransportError> {
        Ok(Self::with_transport(url, HttpTransport::new()?))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::with_timeouts(
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self::with_transport(config.url.clone(), transport).with_nexus(config.nexus.clone()))
    }
}

impl<T: Transport> NodeClient<T> {
    pub fn with_transport(url: impl Into<String>, transport: T) -> Self {
        Self {
            dispatcher: Dispatcher::new(url, transport),
            nexus: DEFAULT_NEXUS.to_string(),
        }
    }

    /// Nexus name stamped on transactions built by this client
    pub fn with_nexus(mut self, nexus: impl Into<String>) -> Self {
        self.nexus = nexus.into();
        self
    }

    pub fn url(&self) -> &str {
        self.dispatcher.url()
    }

    pub fn nexus(&self) -> &str {
        &self.nexus
    }

    async fn invoke<R: FromNode>(&self, method: Method, params: Vec<Value>) -> Result<R, SdkError> {
        debug_assert!(method.accepts(&params), "bad parameters for {method}");
        self.dispatcher.call_decoded(method.name(), &params).await
    }

    /// Account details: balances, stake and registered name
    pub async fn get_account(&self, account: &str) -> Result<Account, SdkError> {
        self.invoke(Method::GetAccount, vec![json!(account)]).await
    }

    /// Address registered under `name`
    pub async fn look_up_name(&self, name: &str) -> Result<String, SdkError> {
        self.invoke(Method::LookUpName, vec![json!(name)]).await
    }

    pub async fn get_block_height(&self, chain: &str) -> Result<i32, SdkError> {
        self.invoke(Method::GetBlockHeight, vec![json!(chain)]).await
    }

    pub async fn get_block_transaction_count_by_hash(
        &self,
        block_hash: &str,
    ) -> Result<i32, SdkError> {
        self.invoke(Method::GetBlockTransactionCountByHash, vec![json!(block_hash)])
            .await
    }

    pub async fn get_block_by_hash(&self, block_hash: &str) -> Result<Block, SdkError> {
        self.invoke(Method::GetBlockByHash, vec![json!(block_hash)]).await
    }

    /// Serialized block as hex text
    pub async fn get_raw_block_by_hash(&self, block_hash: &str) -> Result<String, SdkError> {
        self.invoke(Method::GetRawBlockByHash, vec![json!(block_hash)]).await
    }

    pub async fn get_block_by_height(&self, chain: &str, height: u32) -> Result<Block, SdkError> {
        self.invoke(Method::GetBlockByHeight, vec![json!(chain), json!(height)])
            .await
    }

    pub async fn get_raw_block_by_height(
        &self,
        chain: &str,
        height: u32,
    ) -> Result<String, SdkError> {
        self.invoke(Method::GetRawBlockByHeight, vec![json!(chain), json!(height)])
            .await
    }

    pub async fn get_transaction_by_block_hash_and_index(
        &self,
        block_hash: &str,
        index: i32,
    ) -> Result<Transaction, SdkError> {
        self.invoke(
            Method::GetTransactionByBlockHashAndIndex,
            vec![json!(block_hash), json!(index)],
        )
        .await
    }

    /// One page of an address's transaction history
    pub async fn get_address_transactions(
        &self,
        account: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Paginated<AccountTransactions>, SdkError> {
        self.invoke(
            Method::GetAddressTransactions,
            vec![json!(account), json!(page), json!(page_size)],
        )
        .await
    }

    pub async fn get_address_transaction_count(
        &self,
        account: &str,
        chain: &str,
    ) -> Result<i32, SdkError> {
        self.invoke(
            Method::GetAddressTransactionCount,
            vec![json!(account), json!(chain)],
        )
        .await
    }

    /// Submit a signed transaction given as base16 text. Returns its hash.
    pub async fn send_raw_transaction(&self, tx_data: &str) -> Result<String, SdkError> {
        self.invoke(Method::SendRawTransaction, vec![json!(tx_data)]).await
    }

    /// Run a script against current state without committing anything
    pub async fn invoke_raw_script(
        &self,
        chain: &str,
        script_data: &str,
    ) -> Result<Script, SdkError> {
        self.invoke(Method::InvokeRawScript, vec![json!(chain), json!(script_data)])
            .await
    }

    pub async fn get_transaction(&self, hash: &str) -> Result<Transaction, SdkError> {
        self.invoke(Method::GetTransaction, vec![json!(hash)]).await
    }

    /// Remove a pending transaction from the mempool
    pub async fn cancel_transaction(&self, hash: &str) -> Result<String, SdkError> {
        self.invoke(Method::CancelTransaction, vec![json!(hash)]).await
    }

    pub async fn get_chains(&self) -> Result<Vec<Chain>, SdkError> {
        self.invoke(Method::GetChains, vec![]).await
    }

    pub async fn get_nexus(&self, extended: bool) -> Result<Nexus, SdkError> {
        self.invoke(Method::GetNexus, vec![json!(extended)]).await
    }

    pub async fn get_organization(&self, id: &str) -> Result<Organization, SdkError> {
        self.invoke(Method::GetOrganization, vec![json!(id)]).await
    }

    pub async fn get_leaderboard(&self, name: &str) -> Result<Leaderboard, SdkError> {
        self.invoke(Method::GetLeaderboard, vec![json!(name)]).await
    }

    pub async fn get_tokens(&self, extended: bool) -> Result<Vec<Token>, SdkError> {
        self.invoke(Method::GetTokens, vec![json!(extended)]).await
    }

    pub async fn get_token(&self, symbol: &str, extended: bool) -> Result<Token, SdkError> {
        self.invoke(Method::GetToken, vec![json!(symbol), json!(extended)])
            .await
    }

    pub async fn get_token_data(&self, symbol: &str, id: &str) -> Result<TokenData, SdkError> {
        self.invoke(Method::GetTokenData, vec![json!(symbol), json!(id)])
            .await
    }

    pub async fn get_nft(
        &self,
        symbol: &str,
        id: &str,
        extended: bool,
    ) -> Result<TokenData, SdkError> {
        self.invoke(
            Method::GetNft,
            vec![json!(symbol), json!(id), json!(extended)],
        )
        .await
    }

    pub async fn get_token_balance(
        &self,
        account: &str,
        token_symbol: &str,
        chain: &str,
    ) -> Result<Balance, SdkError> {
        self.invoke(
            Method::GetTokenBalance,
            vec![json!(account), json!(token_symbol), json!(chain)],
        )
        .await
    }

    pub async fn get_auctions_count(&self, chain: &str, symbol: &str) -> Result<i32, SdkError> {
        self.invoke(Method::GetAuctionsCount, vec![json!(chain), json!(symbol)])
            .await
    }

    pub async fn get_auctions(
        &self,
        chain: &str,
        symbol: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Paginated<Vec<Auction>>, SdkError> {
        self.invoke(
            Method::GetAuctions,
            vec![json!(chain), json!(symbol), json!(page), json!(page_size)],
        )
        .await
    }

    pub async fn get_auction(
        &self,
        chain: &str,
        symbol: &str,
        id: &str,
    ) -> Result<Auction, SdkError> {
        self.invoke(
            Method::GetAuction,
            vec![json!(chain), json!(symbol), json!(id)],
        )
        .await
    }

    pub async fn get_archive(&self, hash: &str) -> Result<Archive, SdkError> {
        self.invoke(Method::GetArchive, vec![json!(hash)]).await
    }

    pub async fn write_archive(
        &self,
        hash: &str,
        block_index: i32,
        block_content: &str,
    ) -> Result<bool, SdkError> {
        self.invoke(
            Method::WriteArchive,
            vec![json!(hash), json!(block_index), json!(block_content)],
        )
        .await
    }

    pub async fn read_archive(&self, hash: &str, block_index: i32) -> Result<String, SdkError> {
        self.invoke(Method::ReadArchive, vec![json!(hash), json!(block_index)])
            .await
    }

    pub async fn get_contract(
        &self,
        chain: &str,
        contract_name: &str,
    ) -> Result<Contract, SdkError> {
        self.invoke(Method::GetContract, vec![json!(chain), json!(contract_name)])
            .await
    }

    pub async fn get_peers(&self) -> Result<Vec<Peer>, SdkError> {
        self.invoke(Method::GetPeers, vec![]).await
    }

    pub async fn relay_send(&self, receipt_hex: &str) -> Result<bool, SdkError> {
        self.invoke(Method::RelaySend, vec![json!(receipt_hex)]).await
    }

    pub async fn relay_receive(&self, account: &str) -> Result<Vec<Receipt>, SdkError> {
        self.invoke(Method::RelayReceive, vec![json!(account)]).await
    }

    pub async fn get_events(&self, account: &str) -> Result<Vec<Event>, SdkError> {
        self.invoke(Method::GetEvents, vec![json!(account)]).await
    }

    pub async fn get_platforms(&self) -> Result<Vec<Platform>, SdkError> {
        self.invoke(Method::GetPlatforms, vec![]).await
    }

    pub async fn get_validators(&self) -> Result<Vec<Validator>, SdkError> {
        self.invoke(Method::GetValidators, vec![]).await
    }

    pub async fn settle_swap(
        &self,
        source_platform: &str,
        dest_platform: &str,
        hash: &str,
    ) -> Result<String, SdkError> {
        self.invoke(
            Method::SettleSwap,
            vec![json!(source_platform), json!(dest_platform), json!(hash)],
        )
        .await
    }

    pub async fn get_swaps_for_address(&self, account: &str) -> Result<Vec<Swap>, SdkError> {
        self.invoke(Method::GetSwapsForAddress, vec![json!(account)])
            .await
    }

    /// Open OTC exchange orders
    pub async fn get_otc(&self) -> Result<Vec<ExchangeOrder>, SdkError> {
        self.invoke(Method::GetOtc, vec![]).await
    }

    /// Open an OTC order. Returns the order uid as decimal text.
    pub async fn create_otc_order(
        &self,
        from: &Address,
        provider: &Address,
        base_symbol: &str,
        quote_symbol: &str,
        amount: &BigInt,
        price: &BigInt,
    ) -> Result<String, SdkError> {
        self.invoke(
            Method::OpenOtcOrder,
            vec![
                json!(from.as_str()),
                json!(provider.as_str()),
                json!(base_symbol),
                json!(quote_symbol),
                json!(amount.to_string()),
                json!(price.to_string()),
            ],
        )
        .await
    }

    pub async fn take_order(&self, from: &Address, uid: &BigInt) -> Result<String, SdkError> {
        self.invoke(
            Method::TakeOrder,
            vec![json!(from.as_str()), json!(uid.to_string())],
        )
        .await
    }

    /// Build, sign and submit a transaction running `script` on `chain`.
    ///
    /// The transaction expires one hour from now. Nothing is sent when the
    /// signer fails. A failed submission comes back as [`SdkError::Submit`],
    /// which still carries the transaction hash.
    pub async fn sign_and_send_transaction<S>(
        &self,
        signer: &S,
        script: &[u8],
        chain: &str,
    ) -> Result<SentTransaction, SdkError>
    where
        S: TransactionSigner + ?Sized,
    {
        let request = SigningRequest {
            nexus: &self.nexus,
            chain,
            script,
            expiration: Timestamp::now().after(Duration::from_secs(TX_EXPIRATION_SECS)),
        };
        let signed = signer.sign(&request)?;
        info!(hash = %signed.hash, chain, nexus = %self.nexus, "submitting signed transaction");

        let reply = self
            .send_raw_transaction(&hex::encode_upper(&signed.bytes))
            .await
            .map_err(|source| SdkError::Submit {
                hash: signed.hash,
                source: Box::new(source),
            })?;
        Ok(SentTransaction {
            hash: signed.hash,
            reply,
        })
    }
}
