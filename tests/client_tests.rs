//! End-to-end tests against an in-process mock node

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use num_bigint::BigInt;
use pha_client::api::{Method, NodeClient};
use pha_client::crypto::{
    LocalSigner, LocalTransaction, PrivateKey, SignError, SignedTransaction, SigningRequest,
    TransactionSigner,
};
use pha_client::model::{Address, ExchangeOrderSide, Timestamp};
use pha_client::otc::{router, Offer, OfferBook, OtcState};
use pha_client::rpc::{ErrorKind, JsonRpcRequest};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

const SELLER: &str = "P2K9zmyFDNGN6n6hHiTUAz6jqn29s6G1YbiDBxvLRjrw9";
const BUYER: &str = "P9dKgENhREKbRNsecvVeX4MKzXbxpnm7BfZhLtEzHZmAZ";

type Reply = dyn Fn(&JsonRpcRequest) -> (StatusCode, String) + Send + Sync;

#[derive(Clone)]
struct MockNode {
    reply: Arc<Reply>,
    seen: Arc<Mutex<Vec<JsonRpcRequest>>>,
}

impl MockNode {
    fn requests(&self) -> Vec<JsonRpcRequest> {
        self.seen.lock().unwrap().clone()
    }
}

async fn handle(
    State(node): State<MockNode>,
    Json(request): Json<JsonRpcRequest>,
) -> (StatusCode, String) {
    let reply = (node.reply)(&request);
    node.seen.lock().unwrap().push(request);
    reply
}

/// Serve `reply` on an ephemeral port; returns the endpoint URL
async fn spawn_node<F>(reply: F) -> (String, MockNode)
where
    F: Fn(&JsonRpcRequest) -> (StatusCode, String) + Send + Sync + 'static,
{
    let node = MockNode {
        reply: Arc::new(reply),
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/rpc", post(handle))
        .with_state(node.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/rpc"), node)
}

fn result(value: Value) -> (StatusCode, String) {
    (StatusCode::OK, json!({ "jsonrpc": "2.0", "id": "1", "result": value }).to_string())
}

fn raw(body: &str) -> (StatusCode, String) {
    (StatusCode::OK, body.to_string())
}

async fn client_for<F>(reply: F) -> (NodeClient, MockNode)
where
    F: Fn(&JsonRpcRequest) -> (StatusCode, String) + Send + Sync + 'static,
{
    let (url, node) = spawn_node(reply).await;
    (NodeClient::new(url).unwrap(), node)
}

// ============================================================================
// ENVELOPE AND CLASSIFICATION
// ============================================================================

#[tokio::test]
async fn test_request_envelope_on_the_wire() {
    let (client, node) = client_for(|_| result(json!(1234))).await;

    assert_eq!(client.get_block_height("main").await.unwrap(), 1234);

    let requests = node.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].jsonrpc, "2.0");
    assert_eq!(requests[0].id, json!("1"));
    assert_eq!(requests[0].method, "getBlockHeight");
    assert_eq!(requests[0].params, vec![json!("main")]);
}

#[tokio::test]
async fn test_non_json_body() {
    let (client, _) = client_for(|_| raw("<html>oops</html>")).await;
    let err = client.get_chains().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FailedParsingJson);
    assert_eq!(err.message(), "failed to parse JSON");
}

#[tokio::test]
async fn test_api_error_message_passed_through() {
    let (client, _) = client_for(|_| raw(r#"{"error":{"message":"x"}}"#)).await;
    let err = client.get_chains().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ApiError);
    assert_eq!(err.message(), "x");
}

#[tokio::test]
async fn test_missing_result_is_malformed() {
    let (client, _) = client_for(|_| raw(r#"{"nothing":1}"#)).await;
    let err = client.get_chains().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    assert_eq!(err.message(), "malformed response");
}

#[tokio::test]
async fn test_refused_connection() {
    let client = NodeClient::new("http://127.0.0.1:1/rpc").unwrap();
    let err = client.get_chains().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WebRequestError);
}

#[tokio::test]
async fn test_http_error_status() {
    let (client, _) =
        client_for(|_| (StatusCode::INTERNAL_SERVER_ERROR, "down".to_string())).await;
    let err = client.get_peers().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WebRequestError);
    assert!(err.message().contains("500"));
}

#[tokio::test]
async fn test_wrong_result_shape_is_decode_error() {
    let (client, _) = client_for(|_| result(json!({ "height": 5 }))).await;
    let err = client.get_chains().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeError);
}

// ============================================================================
// DECODING
// ============================================================================

#[tokio::test]
async fn test_address_transactions_page() {
    let (client, node) = client_for(|_| {
        raw(r#"{"result":{"page":2,"totalPages":5,"result":{"address":"a","txs":[]}}}"#)
    })
    .await;

    let page = client.get_address_transactions(SELLER, 2, 20).await.unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 5);
    assert!(page.has_next());
    assert_eq!(page.value.address, "a");
    assert!(page.value.txs.is_empty());

    assert_eq!(
        node.requests()[0].params,
        vec![json!(SELLER), json!(2), json!(20)]
    );
}

#[tokio::test]
async fn test_chains_in_order() {
    let (client, _) = client_for(|_| {
        result(json!([
            { "name": "main", "height": "10" },
            { "name": "privacy", "parentAddress": "S1" },
            { "name": "apps" },
        ]))
    })
    .await;

    let chains = client.get_chains().await.unwrap();
    let names: Vec<_> = chains.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["main", "privacy", "apps"]);
    assert_eq!(chains[0].height, 10);
    assert_eq!(chains[1].parent_address, "S1");
}

#[tokio::test]
async fn test_null_array_is_empty() {
    let (client, _) = client_for(|_| result(Value::Null)).await;
    assert!(client.get_validators().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_account_without_nested_records() {
    let (client, _) = client_for(|_| result(json!({ "address": SELLER, "name": "anonymous" }))).await;

    let account = client.get_account(SELLER).await.unwrap();
    assert_eq!(account.name, "anonymous");
    assert_eq!(account.stake.amount, "");
    assert!(account.balances.is_empty());
}

#[tokio::test]
async fn test_otc_orders() {
    let (client, _) = client_for(|_| {
        result(json!([{
            "uid": "340282366920938463463374607431768211457",
            "timestamp": 1_700_000_000,
            "creator": SELLER,
            "provider": SELLER,
            "amount": "100",
            "baseSymbol": "KCAL",
            "price": "20",
            "quoteSymbol": "SOUL",
            "side": "Buy",
            "type": "OTC",
        }]))
    })
    .await;

    let orders = client.get_otc().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].side, ExchangeOrderSide::Buy);
    assert_eq!(
        orders[0].uid.to_string(),
        "340282366920938463463374607431768211457"
    );
    assert_eq!(orders[0].timestamp, Timestamp::from_secs(1_700_000_000));
}

#[tokio::test]
async fn test_unknown_order_side_fails() {
    let (client, _) = client_for(|_| result(json!([{ "side": "Hold" }]))).await;
    let err = client.get_otc().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeError);
    assert!(err.message().contains("Hold"));
}

#[tokio::test]
async fn test_big_integers_sent_as_text() {
    let (client, node) = client_for(|_| result(json!("77"))).await;
    let seller: Address = SELLER.parse().unwrap();
    let amount: BigInt = "1000000000000000000000".parse().unwrap();

    let uid = client
        .create_otc_order(&seller, &seller, "KCAL", "SOUL", &amount, &BigInt::from(20))
        .await
        .unwrap();
    assert_eq!(uid, "77");

    let request = &node.requests()[0];
    assert_eq!(request.method, "openOTCOrder");
    assert_eq!(
        request.params,
        vec![
            json!(SELLER),
            json!(SELLER),
            json!("KCAL"),
            json!("SOUL"),
            json!("1000000000000000000000"),
            json!("20"),
        ]
    );
}

// ============================================================================
// FACADE
// ============================================================================

/// Canned result for every method in the table
fn facade_node(request: &JsonRpcRequest) -> (StatusCode, String) {
    let value = match request.method.as_str() {
        "getAccount" => json!({
            "address": SELLER,
            "name": "alice",
            "stakes": { "amount": "10" },
            "balances": [{ "symbol": "SOUL", "amount": "5", "decimals": 8 }],
        }),
        "lookUpName" => json!(SELLER),
        "getBlockHeight" => json!(77),
        "getBlockTransactionCountByHash" => json!("3"),
        "getBlockByHash" => json!({ "hash": "B1", "height": 9, "txs": [{ "hash": "T1" }] }),
        "getRawBlockByHash" => json!("0A0B"),
        "getBlockByHeight" => json!({ "hash": "B2", "height": 10 }),
        "getRawBlockByHeight" => json!("0C0D"),
        "getTransactionByBlockHashAndIndex" => json!({
            "hash": "T2",
            "blockHeight": 10,
            "events": [{ "kind": "TokenSend", "address": SELLER }],
        }),
        "getAddressTransactions" => json!({
            "page": 1,
            "totalPages": 3,
            "result": { "address": SELLER, "txs": [{ "hash": "T3" }] },
        }),
        "getAddressTransactionCount" => json!(4),
        "sendRawTransaction" => json!("T4"),
        "invokeRawScript" => json!({ "result": "01", "results": ["01", "02"] }),
        "getTransaction" => json!({ "hash": "T5", "confirmations": 2 }),
        "cancelTransaction" => json!("T5"),
        "getChains" => json!([{ "name": "main" }]),
        "getNexus" => json!({ "name": "simnet", "tokens": [{ "symbol": "SOUL", "decimals": 8 }] }),
        "getOrganization" => json!({ "id": "validators", "members": [SELLER] }),
        "getLeaderboard" => json!({ "name": "top", "rows": [{ "address": SELLER, "value": "100" }] }),
        "getTokens" => json!([{ "symbol": "SOUL" }, { "symbol": "KCAL" }]),
        "getToken" => json!({ "symbol": "KCAL", "decimals": 10 }),
        "getTokenData" => json!({ "iD": "42", "forSale": "true" }),
        "getNFT" => json!({ "iD": "43", "ownerAddress": SELLER }),
        "getTokenBalance" => json!({ "symbol": "SOUL", "amount": "5", "decimals": 8 }),
        "getAuctionsCount" => json!(2),
        "getAuctions" => json!({
            "page": 1,
            "totalPages": 1,
            "result": [{ "tokenId": "42", "price": "100" }],
        }),
        "getAuction" => json!({ "tokenId": "42", "startDate": 1_700_000_000 }),
        "getArchive" => json!({ "hash": "A1", "size": 1024, "blockCount": 2 }),
        "writeArchive" => json!(true),
        "readArchive" => json!("BEEF"),
        "getContract" => json!({ "name": "stake", "methods": [{ "name": "Stake", "returnType": "None" }] }),
        "getPeers" => json!([{ "url": "tcp:1.2.3.4:7073", "pow": 5 }]),
        "relaySend" => json!(true),
        "relayReceive" => json!([{ "nexus": "simnet", "index": "1" }]),
        "getEvents" => json!([{ "kind": "TokenReceive", "address": SELLER }]),
        "getPlatforms" => json!([{ "platform": "neo", "chain": "N1" }]),
        "getValidators" => json!([{ "address": SELLER, "type": "Primary" }]),
        "settleSwap" => json!("T6"),
        "getSwapsForAddress" => json!([{ "sourcePlatform": "neo", "symbol": "SOUL" }]),
        "getOTC" => json!([{ "uid": "5", "side": "Sell" }]),
        "openOTCOrder" => json!("9"),
        "takeOrder" => json!("T7"),
        _ => return raw(r#"{"error":"unsupported"}"#),
    };
    result(value)
}

#[tokio::test]
async fn test_every_operation_matches_method_table() {
    let (c, node) = client_for(facade_node).await;
    let seller: Address = SELLER.parse().unwrap();

    let account = c.get_account(SELLER).await.unwrap();
    assert_eq!(account.stake.amount, "10");
    assert_eq!(account.balance("SOUL").unwrap().decimals, 8);
    assert_eq!(c.look_up_name("alice").await.unwrap(), SELLER);
    assert_eq!(c.get_block_height("main").await.unwrap(), 77);
    assert_eq!(c.get_block_transaction_count_by_hash("B1").await.unwrap(), 3);
    assert_eq!(c.get_block_by_hash("B1").await.unwrap().txs[0].hash, "T1");
    assert_eq!(c.get_raw_block_by_hash("B1").await.unwrap(), "0A0B");
    assert_eq!(c.get_block_by_height("main", 10).await.unwrap().hash, "B2");
    assert_eq!(c.get_raw_block_by_height("main", 10).await.unwrap(), "0C0D");

    let tx = c.get_transaction_by_block_hash_and_index("B2", 0).await.unwrap();
    assert_eq!(tx.block_height, 10);
    assert_eq!(tx.events.len(), 1);

    let page = c.get_address_transactions(SELLER, 1, 10).await.unwrap();
    assert_eq!((page.page, page.total_pages), (1, 3));
    assert_eq!(page.value.txs[0].hash, "T3");

    assert_eq!(c.get_address_transaction_count(SELLER, "main").await.unwrap(), 4);
    assert_eq!(c.send_raw_transaction("0D00").await.unwrap(), "T4");
    assert_eq!(c.invoke_raw_script("main", "0D00").await.unwrap().results, ["01", "02"]);
    assert_eq!(c.get_transaction("T5").await.unwrap().confirmations, 2);
    assert_eq!(c.cancel_transaction("T5").await.unwrap(), "T5");
    assert_eq!(c.get_chains().await.unwrap()[0].name, "main");
    assert!(c.get_nexus(true).await.unwrap().token("SOUL").is_some());
    assert_eq!(c.get_organization("validators").await.unwrap().members, [SELLER]);
    assert_eq!(c.get_leaderboard("top").await.unwrap().rows[0].value, "100");
    assert_eq!(c.get_tokens(false).await.unwrap().len(), 2);
    assert_eq!(c.get_token("KCAL", false).await.unwrap().decimals, 10);
    assert!(c.get_token_data("CROWN", "42").await.unwrap().for_sale);
    assert_eq!(c.get_nft("CROWN", "43", true).await.unwrap().owner_address, SELLER);
    assert_eq!(c.get_token_balance(SELLER, "SOUL", "main").await.unwrap().amount, "5");
    assert_eq!(c.get_auctions_count("main", "CROWN").await.unwrap(), 2);

    let auctions = c.get_auctions("main", "CROWN", 1, 20).await.unwrap();
    assert!(!auctions.has_next());
    assert_eq!(auctions.value[0].token_id, "42");

    let auction = c.get_auction("main", "CROWN", "42").await.unwrap();
    assert_eq!(auction.start_date, Timestamp::from_secs(1_700_000_000));
    assert_eq!(c.get_archive("A1").await.unwrap().block_count, 2);
    assert!(c.write_archive("A1", 0, "BEEF").await.unwrap());
    assert_eq!(c.read_archive("A1", 0).await.unwrap(), "BEEF");
    assert!(c.get_contract("main", "stake").await.unwrap().method("Stake").is_some());
    assert_eq!(c.get_peers().await.unwrap()[0].pow, 5);
    assert!(c.relay_send("AABB").await.unwrap());
    assert_eq!(c.relay_receive(SELLER).await.unwrap()[0].index, "1");
    assert_eq!(c.get_events(SELLER).await.unwrap()[0].address, SELLER);
    assert_eq!(c.get_platforms().await.unwrap()[0].chain, "N1");
    assert_eq!(c.get_validators().await.unwrap()[0].validator_type, "Primary");
    assert_eq!(c.settle_swap("neo", "phantasma", "H1").await.unwrap(), "T6");
    assert_eq!(c.get_swaps_for_address(SELLER).await.unwrap()[0].symbol, "SOUL");
    assert_eq!(c.get_otc().await.unwrap()[0].side, ExchangeOrderSide::Sell);
    assert_eq!(
        c.create_otc_order(&seller, &seller, "SOUL", "KCAL", &BigInt::from(5), &BigInt::from(2))
            .await
            .unwrap(),
        "9"
    );
    assert_eq!(c.take_order(&seller, &BigInt::from(9)).await.unwrap(), "T7");

    let requests = node.requests();
    assert_eq!(requests.len(), Method::ALL.len());
    let mut seen = HashSet::new();
    for request in &requests {
        let method = Method::from_name(&request.method)
            .unwrap_or_else(|| panic!("unknown method {}", request.method));
        assert!(
            method.accepts(&request.params),
            "{method} sent {:?}",
            request.params
        );
        seen.insert(method);
    }
    assert_eq!(seen.len(), Method::ALL.len());
}

// ============================================================================
// SIGN AND SEND
// ============================================================================

struct RefusingSigner;

impl TransactionSigner for RefusingSigner {
    fn sign(&self, _request: &SigningRequest<'_>) -> Result<SignedTransaction, SignError> {
        Err(SignError::Refused("locked".into()))
    }
}

#[tokio::test]
async fn test_sign_and_send() {
    let (client, node) = client_for(|_| result(json!("TXHASH"))).await;
    let signer = LocalSigner::new(PrivateKey::generate());
    let before = Timestamp::now();

    let sent = client
        .sign_and_send_transaction(&signer, &[0x0D, 0x00], "main")
        .await
        .unwrap();
    assert_eq!(sent.reply, "TXHASH");

    let request = &node.requests()[0];
    assert_eq!(request.method, "sendRawTransaction");
    let tx_data = request.params[0].as_str().unwrap();
    let tx = LocalTransaction::from_bytes(&hex::decode(tx_data).unwrap()).unwrap();

    assert_eq!(tx.body.nexus, "simnet");
    assert_eq!(tx.body.chain, "main");
    assert_eq!(tx.body.script, vec![0x0D, 0x00]);
    assert!(tx.body.expiration >= before.as_secs() + 3600);
    assert!(tx.body.expiration <= Timestamp::now().as_secs() + 3600);
    assert_eq!(tx.body.hash().unwrap(), sent.hash);
    assert!(tx.verify().unwrap());
}

#[tokio::test]
async fn test_configured_nexus_used() {
    let (client, node) = client_for(|_| result(json!("TXHASH"))).await;
    let client = client.with_nexus("mainnet");
    let signer = LocalSigner::new(PrivateKey::generate());

    client
        .sign_and_send_transaction(&signer, b"script", "main")
        .await
        .unwrap();

    let tx_data = node.requests()[0].params[0].as_str().unwrap().to_string();
    let tx = LocalTransaction::from_bytes(&hex::decode(tx_data).unwrap()).unwrap();
    assert_eq!(tx.body.nexus, "mainnet");
}

#[tokio::test]
async fn test_signer_failure_sends_nothing() {
    let (client, node) = client_for(|_| result(json!("TXHASH"))).await;

    let err = client
        .sign_and_send_transaction(&RefusingSigner, b"script", "main")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SigningError);
    assert_eq!(err.transaction_hash(), None);
    assert!(node.requests().is_empty());
}

#[tokio::test]
async fn test_rejected_submission_keeps_hash() {
    let (client, node) = client_for(|_| raw(r#"{"error":{"message":"rejected"}}"#)).await;
    let signer = LocalSigner::new(PrivateKey::generate());

    let err = client
        .sign_and_send_transaction(&signer, b"script", "main")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ApiError);
    assert_eq!(err.message(), "rejected");

    let tx_data = node.requests()[0].params[0].as_str().unwrap().to_string();
    let tx = LocalTransaction::from_bytes(&hex::decode(tx_data).unwrap()).unwrap();
    assert_eq!(err.transaction_hash(), Some(tx.body.hash().unwrap()));
}

#[tokio::test]
async fn test_unreachable_node_keeps_hash() {
    let client = NodeClient::new("http://127.0.0.1:1/rpc").unwrap();
    let signer = LocalSigner::new(PrivateKey::generate());

    let err = client
        .sign_and_send_transaction(&signer, b"script", "main")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WebRequestError);
    assert!(err.transaction_hash().is_some());
}

// ============================================================================
// OTC SERVER
// ============================================================================

fn otc_node(request: &JsonRpcRequest) -> (StatusCode, String) {
    match request.method.as_str() {
        "getOTC" => result(json!([{ "uid": "5", "side": "Sell", "baseSymbol": "KCAL" }])),
        "openOTCOrder" => result(json!("9")),
        "takeOrder" if request.params[1] == json!("404") => {
            raw(r#"{"error":{"message":"order not found"}}"#)
        }
        "takeOrder" => result(json!("TAKEN")),
        _ => raw(r#"{"error":"unsupported"}"#),
    }
}

async fn spawn_otc(offers: Vec<Offer>) -> (String, OfferBook) {
    let (url, _) = spawn_node(otc_node).await;
    let offers = OfferBook::from_offers(offers);
    let state = Arc::new(OtcState {
        client: NodeClient::new(url).unwrap(),
        offers: offers.clone(),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    (format!("http://{addr}"), offers)
}

fn seeded_offer(id: &str) -> Offer {
    Offer {
        id: id.to_string(),
        seller: SELLER.parse().unwrap(),
        sell_symbol: "KCAL".into(),
        sell_amount: "100".into(),
        buy_symbol: "SOUL".into(),
        buy_amount: "20".into(),
    }
}

async fn body_json(response: reqwest::Response) -> (u16, Value) {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap();
    (status, serde_json::from_str(&text).unwrap())
}

#[tokio::test]
async fn test_otc_lists_offers_and_orders() {
    let (base, _) = spawn_otc(vec![seeded_offer("1"), seeded_offer("2")]).await;
    let http = reqwest::Client::new();

    let (status, offers) = body_json(http.get(format!("{base}/offers")).send().await.unwrap()).await;
    assert_eq!(status, 200);
    assert_eq!(offers.as_array().unwrap().len(), 2);
    assert_eq!(offers[0]["sellSymbol"], "KCAL");

    let (status, orders) = body_json(http.get(format!("{base}/orders")).send().await.unwrap()).await;
    assert_eq!(status, 200);
    assert_eq!(orders[0]["uid"], "5");
    assert_eq!(orders[0]["side"], "Sell");
}

#[tokio::test]
async fn test_otc_create_then_take() {
    let (base, offers) = spawn_otc(Vec::new()).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{base}/take/create"))
        .form(&[
            ("address", SELLER),
            ("sellSymbol", "KCAL"),
            ("sellAmount", "100"),
            ("buySymbol", "SOUL"),
            ("buyAmount", "20"),
        ])
        .send()
        .await
        .unwrap();
    let (status, created) = body_json(response).await;
    assert_eq!(status, 200);
    assert_eq!(created["id"], "9");
    assert_eq!(offers.get("9").await.unwrap().seller.as_str(), SELLER);

    let response = http
        .post(format!("{base}/take/buy"))
        .form(&[("address", BUYER), ("uid", "9")])
        .send()
        .await
        .unwrap();
    let (status, taken) = body_json(response).await;
    assert_eq!(status, 200);
    assert_eq!(taken["result"], "TAKEN");
    assert!(offers.is_empty().await);
}

#[tokio::test]
async fn test_otc_take_matches_offer_by_number() {
    let (base, offers) = spawn_otc(vec![seeded_offer("9")]).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{base}/take/buy"))
        .form(&[("address", BUYER), ("uid", " 09")])
        .send()
        .await
        .unwrap();
    let (status, taken) = body_json(response).await;
    assert_eq!(status, 200);
    assert_eq!(taken["result"], "TAKEN");
    assert!(offers.get("9").await.is_none());
}

#[tokio::test]
async fn test_otc_error_mapping() {
    let (base, offers) = spawn_otc(vec![seeded_offer("404")]).await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{base}/take/buy"))
        .form(&[("address", "nope"), ("uid", "404")])
        .send()
        .await
        .unwrap();
    let (status, body) = body_json(response).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "BAD_REQUEST");

    let response = http
        .post(format!("{base}/take/buy"))
        .form(&[("address", BUYER), ("uid", "404")])
        .send()
        .await
        .unwrap();
    let (status, body) = body_json(response).await;
    assert_eq!(status, 422);
    assert_eq!(body["error"], "API_ERROR");
    assert_eq!(body["message"], "order not found");
    assert_eq!(offers.len().await, 1);
}
