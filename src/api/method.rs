//! The fixed table of RPC methods the client knows about

use serde_json::Value;
use std::str::FromStr;

/// Wire type of one positional parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Text,
    Int,
    UInt,
    Bool,
    /// Address text
    Address,
    /// Decimal text of an arbitrary precision integer
    BigInt,
}

impl ParamType {
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ParamType::Text | ParamType::Address => value.is_string(),
            ParamType::Int => value.is_i64(),
            ParamType::UInt => value.is_u64(),
            ParamType::Bool => value.is_boolean(),
            ParamType::BigInt => value
                .as_str()
                .is_some_and(|text| num_bigint::BigInt::from_str(text).is_ok()),
        }
    }
}

pub type ParamSignature = &'static [(&'static str, ParamType)];

/// One entry per node RPC.
///
/// The table binds each wire name to its ordered parameter signature. The
/// result decoder of each entry is the return type of the matching
/// [`NodeClient`](super::NodeClient) method, e.g. `GetAuctions` decodes as
/// `Paginated<Vec<Auction>>` through its `FromNode` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GetAccount,
    LookUpName,
    GetBlockHeight,
    GetBlockTransactionCountByHash,
    GetBlockByHash,
    GetRawBlockByHash,
    GetBlockByHeight,
    GetRawBlockByHeight,
    GetTransactionByBlockHashAndIndex,
    GetAddressTransactions,
    GetAddressTransactionCount,
    SendRawTransaction,
    InvokeRawScript,
    GetTransaction,
    CancelTransaction,
    GetChains,
    GetNexus,
    GetOrganization,
    GetLeaderboard,
    GetTokens,
    GetToken,
    GetTokenData,
    GetNft,
    GetTokenBalance,
    GetAuctionsCount,
    GetAuctions,
    GetAuction,
    GetArchive,
    WriteArchive,
    ReadArchive,
    GetContract,
    GetPeers,
    RelaySend,
    RelayReceive,
    GetEvents,
    GetPlatforms,
    GetValidators,
    SettleSwap,
    GetSwapsForAddress,
    GetOtc,
    OpenOtcOrder,
    TakeOrder,
}

use ParamType::*;

impl Method {
    pub const ALL: [Method; 42] = [
        Method::GetAccount,
        Method::LookUpName,
        Method::GetBlockHeight,
        Method::GetBlockTransactionCountByHash,
        Method::GetBlockByHash,
        Method::GetRawBlockByHash,
        Method::GetBlockByHeight,
        Method::GetRawBlockByHeight,
        Method::GetTransactionByBlockHashAndIndex,
        Method::GetAddressTransactions,
        Method::GetAddressTransactionCount,
        Method::SendRawTransaction,
        Method::InvokeRawScript,
        Method::GetTransaction,
        Method::CancelTransaction,
        Method::GetChains,
        Method::GetNexus,
        Method::GetOrganization,
        Method::GetLeaderboard,
        Method::GetTokens,
        Method::GetToken,
        Method::GetTokenData,
        Method::GetNft,
        Method::GetTokenBalance,
        Method::GetAuctionsCount,
        Method::GetAuctions,
        Method::GetAuction,
        Method::GetArchive,
        Method::WriteArchive,
        Method::ReadArchive,
        Method::GetContract,
        Method::GetPeers,
        Method::RelaySend,
        Method::RelayReceive,
        Method::GetEvents,
        Method::GetPlatforms,
        Method::GetValidators,
        Method::SettleSwap,
        Method::GetSwapsForAddress,
        Method::GetOtc,
        Method::OpenOtcOrder,
        Method::TakeOrder,
    ];

    /// Name sent in the `method` member
    pub const fn name(&self) -> &'static str {
        match self {
            Method::GetAccount => "getAccount",
            Method::LookUpName => "lookUpName",
            Method::GetBlockHeight => "getBlockHeight",
            Method::GetBlockTransactionCountByHash => "getBlockTransactionCountByHash",
            Method::GetBlockByHash => "getBlockByHash",
            Method::GetRawBlockByHash => "getRawBlockByHash",
            Method::GetBlockByHeight => "getBlockByHeight",
            Method::GetRawBlockByHeight => "getRawBlockByHeight",
            Method::GetTransactionByBlockHashAndIndex => "getTransactionByBlockHashAndIndex",
            Method::GetAddressTransactions => "getAddressTransactions",
            Method::GetAddressTransactionCount => "getAddressTransactionCount",
            Method::SendRawTransaction => "sendRawTransaction",
            Method::InvokeRawScript => "invokeRawScript",
            Method::GetTransaction => "getTransaction",
            Method::CancelTransaction => "cancelTransaction",
            Method::GetChains => "getChains",
            Method::GetNexus => "getNexus",
            Method::GetOrganization => "getOrganization",
            Method::GetLeaderboard => "getLeaderboard",
            Method::GetTokens => "getTokens",
            Method::GetToken => "getToken",
            Method::GetTokenData => "getTokenData",
            Method::GetNft => "getNFT",
            Method::GetTokenBalance => "getTokenBalance",
            Method::GetAuctionsCount => "getAuctionsCount",
            Method::GetAuctions => "getAuctions",
            Method::GetAuction => "getAuction",
            Method::GetArchive => "getArchive",
            Method::WriteArchive => "writeArchive",
            Method::ReadArchive => "readArchive",
            Method::GetContract => "getContract",
            Method::GetPeers => "getPeers",
            Method::RelaySend => "relaySend",
            Method::RelayReceive => "relayReceive",
            Method::GetEvents => "getEvents",
            Method::GetPlatforms => "getPlatforms",
            Method::GetValidators => "getValidators",
            Method::SettleSwap => "settleSwap",
            Method::GetSwapsForAddress => "getSwapsForAddress",
            Method::GetOtc => "getOTC",
            Method::OpenOtcOrder => "openOTCOrder",
            Method::TakeOrder => "takeOrder",
        }
    }

    /// Ordered parameter names and types
    pub const fn params(&self) -> ParamSignature {
        match self {
            Method::GetAccount => &[("account", Text)],
            Method::LookUpName => &[("name", Text)],
            Method::GetBlockHeight => &[("chainInput", Text)],
            Method::GetBlockTransactionCountByHash => &[("blockHash", Text)],
            Method::GetBlockByHash => &[("blockHash", Text)],
            Method::GetRawBlockByHash => &[("blockHash", Text)],
            Method::GetBlockByHeight => &[("chainInput", Text), ("height", UInt)],
            Method::GetRawBlockByHeight => &[("chainInput", Text), ("height", UInt)],
            Method::GetTransactionByBlockHashAndIndex => &[("blockHash", Text), ("index", Int)],
            Method::GetAddressTransactions => {
                &[("account", Text), ("page", UInt), ("pageSize", UInt)]
            }
            Method::GetAddressTransactionCount => &[("account", Text), ("chainInput", Text)],
            Method::SendRawTransaction => &[("txData", Text)],
            Method::InvokeRawScript => &[("chainInput", Text), ("scriptData", Text)],
            Method::GetTransaction => &[("hashText", Text)],
            Method::CancelTransaction => &[("hashText", Text)],
            Method::GetChains => &[],
            Method::GetNexus => &[("extended", Bool)],
            Method::GetOrganization => &[("ID", Text)],
            Method::GetLeaderboard => &[("name", Text)],
            Method::GetTokens => &[("extended", Bool)],
            Method::GetToken => &[("symbol", Text), ("extended", Bool)],
            Method::GetTokenData => &[("symbol", Text), ("IDtext", Text)],
            Method::GetNft => &[("symbol", Text), ("IDtext", Text), ("extended", Bool)],
            Method::GetTokenBalance => {
                &[("account", Text), ("tokenSymbol", Text), ("chainInput", Text)]
            }
            Method::GetAuctionsCount => &[("chainAddressOrName", Text), ("symbol", Text)],
            Method::GetAuctions => &[
                ("chainAddressOrName", Text),
                ("symbol", Text),
                ("page", UInt),
                ("pageSize", UInt),
            ],
            Method::GetAuction => {
                &[("chainAddressOrName", Text), ("symbol", Text), ("IDtext", Text)]
            }
            Method::GetArchive => &[("hashText", Text)],
            Method::WriteArchive => {
                &[("hashText", Text), ("blockIndex", Int), ("blockContent", Text)]
            }
            Method::ReadArchive => &[("hashText", Text), ("blockIndex", Int)],
            Method::GetContract => &[("chainAddressOrName", Text), ("contractName", Text)],
            Method::GetPeers => &[],
            Method::RelaySend => &[("receiptHex", Text)],
            Method::RelayReceive => &[("account", Text)],
            Method::GetEvents => &[("account", Text)],
            Method::GetPlatforms => &[],
            Method::GetValidators => &[],
            Method::SettleSwap => {
                &[("sourcePlatform", Text), ("destPlatform", Text), ("hashText", Text)]
            }
            Method::GetSwapsForAddress => &[("account", Text)],
            Method::GetOtc => &[],
            Method::OpenOtcOrder => &[
                ("from", Address),
                ("provider", Address),
                ("baseSymbol", Text),
                ("quoteSymbol", Text),
                ("amount", BigInt),
                ("price", BigInt),
            ],
            Method::TakeOrder => &[("from", Address), ("uid", BigInt)],
        }
    }

    /// Whether the result is wrapped in a page envelope
    pub const fn is_paginated(&self) -> bool {
        matches!(self, Method::GetAddressTransactions | Method::GetAuctions)
    }

    pub fn from_name(name: &str) -> Option<Method> {
        Method::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Positional params match this method's signature in count and type
    pub fn accepts(&self, params: &[Value]) -> bool {
        let signature = self.params();
        signature.len() == params.len()
            && signature
                .iter()
                .zip(params)
                .all(|((_, ty), value)| ty.accepts(value))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
