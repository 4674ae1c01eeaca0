//! Chains, blocks, transactions and the events they emit

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Timestamp;
use crate::decode::{DecodeError, Fields, FromNode};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub name: String,
    pub address: String,
    pub parent_address: String,
    pub height: u32,
    /// Names of the contracts deployed on this chain
    pub contracts: Vec<String>,
}

impl FromNode for Chain {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            name: f.string("name")?,
            address: f.string("address")?,
            parent_address: f.string("parentAddress")?,
            height: f.int("height")?,
            contracts: f.list("contracts")?,
        })
    }
}

/// Kind tag of a ledger event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventKind {
    #[default]
    Unknown,
    ChainCreate,
    TokenCreate,
    TokenSend,
    TokenReceive,
    TokenMint,
    TokenBurn,
    TokenStake,
    TokenClaim,
    AddressRegister,
    AddressLink,
    AddressUnlink,
    OrganizationCreate,
    OrganizationAdd,
    OrganizationRemove,
    GasEscrow,
    GasPayment,
    AddressUnregister,
    OrderCreated,
    OrderCancelled,
    OrderFilled,
    OrderClosed,
    FeedCreate,
    FeedUpdate,
    FileCreate,
    FileDelete,
    ValidatorPropose,
    ValidatorElect,
    ValidatorRemove,
    ValidatorSwitch,
    PackedNFT,
    ValueCreate,
    ValueUpdate,
    PollCreated,
    PollClosed,
    PollVote,
    ChannelCreate,
    ChannelRefill,
    ChannelSettle,
    LeaderboardCreate,
    LeaderboardInsert,
    LeaderboardReset,
    PlatformCreate,
    ChainSwap,
    ContractRegister,
    ContractDeploy,
    AddressMigration,
    ContractUpgrade,
    Log,
    Inflation,
    OwnerAdded,
    OwnerRemoved,
    DomainCreate,
    DomainDelete,
    TaskStart,
    TaskStop,
    CrownRewards,
    Infusion,
    Crowdsale,
    OrderBid,
    ContractKill,
    OrganizationKill,
    MasterClaim,
    ExecutionFailure,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub address: String,
    pub kind: EventKind,
    /// Hex-encoded event payload
    pub data: String,
}

impl FromNode for Event {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            address: f.string("address")?,
            kind: f.tag("kind")?,
            data: f.string("data")?,
        })
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: String,
    pub chain_address: String,
    pub timestamp: Timestamp,
    pub confirmations: i32,
    pub block_height: i32,
    pub block_hash: String,
    pub script: String,
    pub events: Vec<Event>,
    pub result: String,
    pub fee: String,
}

impl FromNode for Transaction {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            hash: f.string("hash")?,
            chain_address: f.string("chainAddress")?,
            timestamp: f.timestamp("timestamp")?,
            confirmations: f.int("confirmations")?,
            block_height: f.int("blockHeight")?,
            block_hash: f.string("blockHash")?,
            script: f.string("script")?,
            events: f.list("events")?,
            result: f.string("result")?,
            fee: f.string("fee")?,
        })
    }
}

/// Transaction history of one address
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTransactions {
    pub address: String,
    pub txs: Vec<Transaction>,
}

impl FromNode for AccountTransactions {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            address: f.string("address")?,
            txs: f.list("txs")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub hash: String,
    pub previous_hash: String,
    pub timestamp: Timestamp,
    pub height: u32,
    pub chain_address: String,
    pub protocol: u32,
    pub txs: Vec<Transaction>,
    pub validator_address: String,
    pub reward: String,
}

impl FromNode for Block {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            hash: f.string("hash")?,
            previous_hash: f.string("previousHash")?,
            timestamp: f.timestamp("timestamp")?,
            height: f.int("height")?,
            chain_address: f.string("chainAddress")?,
            protocol: f.int("protocol")?,
            txs: f.list("txs")?,
            validator_address: f.string("validatorAddress")?,
            reward: f.string("reward")?,
        })
    }
}
