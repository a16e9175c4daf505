// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// NODE API INTEGRATION TESTS — sente-client
//
// Each test starts an in-process warp server that answers the three Stacks
// node endpoints the client uses, then drives the pool flows through real
// HTTP requests.
//
// Run: cargo test -p sente-client --test api_mock
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use sente_client::{
    wait_for_transaction, ClarityError, ClarityValue, ClientError, ContractPrincipal, Network,
    PoolContract, StacksClient, TxStatus, WaitOptions, WalletSession,
};
use sente_core::SlippageTolerance;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use warp::http::StatusCode;
use warp::Filter;

const DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const USER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
const TX_ID: &str = "0x5f2c0f1c2f3e4d5c6b7a8998a7b6c5d4e3f201122334455667788990aabbccdd";

// ─────────────────────────────────────────────────────────────────
// MOCK NODE
// ─────────────────────────────────────────────────────────────────

struct MockNode {
    /// `Err(cause)` answers `{"okay": false, "cause": ...}`
    pool_info: Result<ClarityValue, String>,
    liquidity: ClarityValue,
    balances: Value,
    /// Polls answered 404 before the tx shows up
    tx_missing_polls: usize,
    /// Polls answered "pending" once the tx is visible
    tx_pending_polls: usize,
    tx_polls: AtomicUsize,
    read_calls: Mutex<Vec<(String, Value)>>,
}

impl MockNode {
    fn new() -> Self {
        Self {
            pool_info: Ok(make_pool_info(100_000_000, 200_000_000, 141_421_356)),
            liquidity: ClarityValue::OptionalNone,
            balances: make_balances(0, 0),
            tx_missing_polls: 0,
            tx_pending_polls: 0,
            tx_polls: AtomicUsize::new(0),
            read_calls: Mutex::new(Vec::new()),
        }
    }
}

fn make_pool_info(reserve0: u128, reserve1: u128, total_supply: u128) -> ClarityValue {
    ClarityValue::ResponseOk(Box::new(ClarityValue::tuple([
        ("reserve0", ClarityValue::UInt(reserve0)),
        ("reserve1", ClarityValue::UInt(reserve1)),
        ("total-supply", ClarityValue::UInt(total_supply)),
    ])))
}

fn make_balances(token_a: u128, token_b: u128) -> Value {
    json!({
        "stx": { "balance": "10000000", "locked": "0", "total_sent": "0", "total_received": "0" },
        "fungible_tokens": {
            format!("{}.token-a::token-a", DEPLOYER): { "balance": token_a.to_string() },
            format!("{}.token-b::token-b", DEPLOYER): { "balance": token_b.to_string() },
        },
        "non_fungible_tokens": {}
    })
}

fn tx_json(status: &str) -> Value {
    json!({
        "tx_id": TX_ID,
        "tx_status": status,
        "tx_type": "contract_call",
        "sender_address": USER,
        "block_height": if status == "pending" { Value::Null } else { json!(812) },
        "fee_rate": "2000",
        "burn_block_time": 1_700_000_000u64,
    })
}

fn with_node(
    node: Arc<MockNode>,
) -> impl Filter<Extract = (Arc<MockNode>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || node.clone())
}

async fn spawn_node(node: Arc<MockNode>) -> String {
    let call_read = warp::path!("v2" / "contracts" / "call-read" / String / String / String)
        .and(warp::post())
        .and(warp::body::json())
        .and(with_node(node.clone()))
        .map(
            |_address: String, _name: String, function: String, body: Value, node: Arc<MockNode>| {
                node.read_calls
                    .lock()
                    .unwrap()
                    .push((function.clone(), body));
                let reply = match function.as_str() {
                    "get-pool-info" => match &node.pool_info {
                        Ok(v) => json!({ "okay": true, "result": v.to_hex().unwrap() }),
                        Err(cause) => json!({ "okay": false, "cause": cause }),
                    },
                    "get-liquidity" => json!({ "okay": true, "result": node.liquidity.to_hex().unwrap() }),
                    other => json!({ "okay": false, "cause": format!("Unchecked(NoSuchPublicFunction({}))", other) }),
                };
                warp::reply::json(&reply)
            },
        );

    let balances = warp::path!("extended" / "v1" / "address" / String / "balances")
        .and(warp::get())
        .and(with_node(node.clone()))
        .map(|_principal: String, node: Arc<MockNode>| warp::reply::json(&node.balances));

    let tx = warp::path!("extended" / "v1" / "tx" / String)
        .and(warp::get())
        .and(with_node(node))
        .map(|_tx_id: String, node: Arc<MockNode>| {
            let poll = node.tx_polls.fetch_add(1, Ordering::SeqCst);
            if poll < node.tx_missing_polls {
                let body = json!({ "error": "could not find transaction by ID" });
                return warp::reply::with_status(warp::reply::json(&body), StatusCode::NOT_FOUND);
            }
            let status = if poll < node.tx_missing_polls + node.tx_pending_polls {
                "pending"
            } else {
                "success"
            };
            warp::reply::with_status(warp::reply::json(&tx_json(status)), StatusCode::OK)
        });

    let (addr, server) =
        warp::serve(call_read.or(balances).or(tx)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    format!("http://{}", addr)
}

async fn make_pool(node: Arc<MockNode>) -> PoolContract {
    let url = spawn_node(node).await;
    PoolContract::new(
        StacksClient::new(&url).unwrap(),
        format!("{}.sente-dex", DEPLOYER).parse().unwrap(),
        Network::Devnet,
    )
}

fn token(name: &str) -> ContractPrincipal {
    format!("{}.{}", DEPLOYER, name).parse().unwrap()
}

fn user_session() -> WalletSession {
    let session = WalletSession::new();
    session.connect(USER).unwrap();
    session
}

fn fast_wait(max_attempts: u32) -> WaitOptions {
    WaitOptions {
        interval: Duration::from_millis(5),
        max_attempts,
    }
}

// ─────────────────────────────────────────────────────────────────
// READ-ONLY CALLS
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_pool_info_sends_hex_args() {
    let node = Arc::new(MockNode::new());
    let pool = make_pool(node.clone()).await;

    let state = pool.get_pool_info(&token("token-a"), &token("token-b")).await.unwrap();
    assert_eq!(state.reserve0, 100_000_000);
    assert_eq!(state.reserve1, 200_000_000);

    let calls = node.read_calls.lock().unwrap();
    let (function, body) = &calls[0];
    assert_eq!(function, "get-pool-info");
    assert_eq!(body["sender"], DEPLOYER);
    let args = body["arguments"].as_array().unwrap();
    assert_eq!(args.len(), 2);
    assert_eq!(
        ClarityValue::from_hex(args[0].as_str().unwrap()).unwrap(),
        ClarityValue::from(token("token-a"))
    );
}

#[tokio::test]
async fn test_read_only_failure_surfaces_cause() {
    let mut node = MockNode::new();
    node.pool_info = Err("Runtime(UnwrapFailure)".to_string());
    let pool = make_pool(Arc::new(node)).await;

    match pool.get_pool_info(&token("token-a"), &token("token-b")).await {
        Err(ClientError::ReadOnlyFailed(cause)) => assert!(cause.contains("UnwrapFailure")),
        other => panic!("expected ReadOnlyFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_reserve_field_fails_loudly() {
    let mut node = MockNode::new();
    node.pool_info = Ok(ClarityValue::ResponseOk(Box::new(ClarityValue::tuple([
        ("reserve0", ClarityValue::UInt(1)),
        ("total-supply", ClarityValue::UInt(1)),
    ]))));
    let pool = make_pool(Arc::new(node)).await;

    let result = pool.get_pool_info(&token("token-a"), &token("token-b")).await;
    assert!(matches!(
        result,
        Err(ClientError::Decode(ClarityError::MissingField(ref f))) if f == "reserve1"
    ));
}

#[tokio::test]
async fn test_unknown_endpoint_is_api_error() {
    let url = spawn_node(Arc::new(MockNode::new())).await;
    let client = StacksClient::new(&format!("{}/not-a-node", url)).unwrap();
    let user = USER.parse().unwrap();

    match client.get_balances(&user).await {
        Err(ClientError::Api { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected Api error, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────────
// PREPARED FLOWS
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_prepare_swap_builds_bounded_call() {
    let mut node = MockNode::new();
    node.balances = make_balances(5_000_000, 0);
    let pool = make_pool(Arc::new(node)).await;

    let prepared = pool
        .prepare_swap(
            &user_session(),
            &token("token-a"),
            &token("token-b"),
            1_000_000,
            SlippageTolerance::from_percent(0.5).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(prepared.quote.fee, 3_000);
    assert_eq!(prepared.quote.amount_out, 1_974_316);
    assert_eq!(prepared.min_amount_out, 1_964_444);
    assert_eq!(prepared.call.function_name, "swap-tokens");
    assert_eq!(prepared.call.stx_address.as_deref(), Some(USER));

    let args = prepared.call.decoded_args().unwrap();
    assert_eq!(args[2], ClarityValue::UInt(1_000_000));
    assert_eq!(args[3], ClarityValue::UInt(1_964_444));
}

#[tokio::test]
async fn test_prepare_swap_insufficient_balance() {
    let mut node = MockNode::new();
    node.balances = make_balances(999_999, 0);
    let pool = make_pool(Arc::new(node)).await;

    let result = pool
        .prepare_swap(
            &user_session(),
            &token("token-a"),
            &token("token-b"),
            1_000_000,
            SlippageTolerance::default(),
        )
        .await;
    assert!(matches!(
        result,
        Err(ClientError::InsufficientBalance { have: 999_999, need: 1_000_000 })
    ));
}

#[tokio::test]
async fn test_prepare_swap_without_wallet_makes_no_request() {
    let node = Arc::new(MockNode::new());
    let pool = make_pool(node.clone()).await;

    let result = pool
        .prepare_swap(
            &WalletSession::new(),
            &token("token-a"),
            &token("token-b"),
            1,
            SlippageTolerance::default(),
        )
        .await;
    assert!(matches!(result, Err(ClientError::WalletNotConnected)));
    assert!(node.read_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_first_deposit_creates_pool() {
    let mut node = MockNode::new();
    node.pool_info = Ok(ClarityValue::OptionalNone);
    node.balances = make_balances(100, 400);
    let pool = make_pool(Arc::new(node)).await;

    let prepared = pool
        .prepare_add_liquidity(
            &user_session(),
            &token("token-a"),
            &token("token-b"),
            100,
            400,
            SlippageTolerance::from_percent(0.5).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(prepared.expected_shares, 200);
    assert_eq!(prepared.min_liquidity, 199);
    assert_eq!(prepared.call.function_name, "add-liquidity");
}

#[tokio::test]
async fn test_add_liquidity_checks_second_token() {
    let mut node = MockNode::new();
    node.balances = make_balances(100, 10);
    let pool = make_pool(Arc::new(node)).await;

    let result = pool
        .prepare_add_liquidity(
            &user_session(),
            &token("token-a"),
            &token("token-b"),
            100,
            400,
            SlippageTolerance::default(),
        )
        .await;
    assert!(matches!(
        result,
        Err(ClientError::InsufficientBalance { have: 10, need: 400 })
    ));
}

fn make_liquidity(shares: u128) -> ClarityValue {
    ClarityValue::OptionalSome(Box::new(ClarityValue::tuple([
        ("liquidity", ClarityValue::UInt(shares)),
        ("token0-amount", ClarityValue::UInt(25)),
        ("token1-amount", ClarityValue::UInt(100)),
        ("value", ClarityValue::UInt(125)),
        ("unclaimed-fees", ClarityValue::UInt(0)),
    ])))
}

#[tokio::test]
async fn test_prepare_remove_liquidity() {
    let mut node = MockNode::new();
    node.pool_info = Ok(make_pool_info(100, 400, 200));
    node.liquidity = make_liquidity(50);
    let pool = make_pool(Arc::new(node)).await;

    let prepared = pool
        .prepare_remove_liquidity(
            &user_session(),
            &token("token-a"),
            &token("token-b"),
            50,
            SlippageTolerance::from_percent(1.0).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!((prepared.amount0, prepared.amount1), (25, 100));
    assert_eq!((prepared.min_amount0, prepared.min_amount1), (24, 99));
    let args = prepared.call.decoded_args().unwrap();
    assert_eq!(args[2], ClarityValue::UInt(50));
}

#[tokio::test]
async fn test_remove_more_than_held() {
    let mut node = MockNode::new();
    node.pool_info = Ok(make_pool_info(100, 400, 200));
    node.liquidity = make_liquidity(50);
    let pool = make_pool(Arc::new(node)).await;

    let result = pool
        .prepare_remove_liquidity(
            &user_session(),
            &token("token-a"),
            &token("token-b"),
            60,
            SlippageTolerance::default(),
        )
        .await;
    assert!(matches!(
        result,
        Err(ClientError::InsufficientBalance { have: 50, need: 60 })
    ));
}

#[tokio::test]
async fn test_fetch_position_share_of_pool() {
    let mut node = MockNode::new();
    node.pool_info = Ok(make_pool_info(100, 400, 200));
    node.liquidity = make_liquidity(50);
    let pool = make_pool(Arc::new(node)).await;

    let user = USER.parse().unwrap();
    let (info, position) = pool
        .fetch_position(&user, &token("token-a"), &token("token-b"))
        .await
        .unwrap();
    assert_eq!(info.liquidity, 50);
    assert_eq!(position.share_of_pool_bps, 2_500);
    assert_eq!((position.amount0, position.amount1), (25, 100));
}

// ─────────────────────────────────────────────────────────────────
// TRANSACTION TRACKING
// ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_wait_until_success() {
    let mut node = MockNode::new();
    node.tx_missing_polls = 1;
    node.tx_pending_polls = 2;
    let node = Arc::new(node);
    let url = spawn_node(node.clone()).await;
    let client = StacksClient::new(&url).unwrap();

    let record = wait_for_transaction(&client, TX_ID, fast_wait(10)).await.unwrap();
    assert_eq!(record.tx_status, TxStatus::Success);
    assert_eq!(record.block_height, Some(812));
    assert_eq!(record.fee_rate, 2_000);
    assert_eq!(node.tx_polls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_wait_times_out() {
    let mut node = MockNode::new();
    node.tx_pending_polls = usize::MAX / 2;
    let url = spawn_node(Arc::new(node)).await;
    let client = StacksClient::new(&url).unwrap();

    let result = wait_for_transaction(&client, TX_ID, fast_wait(3)).await;
    assert!(matches!(result, Err(ClientError::WaitTimeout { attempts: 3 })));
}

#[tokio::test]
async fn test_tx_never_seen_is_not_found() {
    let mut node = MockNode::new();
    node.tx_missing_polls = usize::MAX / 2;
    let url = spawn_node(Arc::new(node)).await;
    let client = StacksClient::new(&url).unwrap();

    let result = wait_for_transaction(&client, TX_ID, fast_wait(20)).await;
    assert!(matches!(result, Err(ClientError::TxNotFound(_))));
}

// ─────────────────────────────────────────────────────────────────
// TRANSPORT FAILURES
// ─────────────────────────────────────────────────────────────────

async fn spawn_slow_node(delay: Duration) -> String {
    let slow = warp::any().and_then(move || async move {
        tokio::time::sleep(delay).await;
        Ok::<_, warp::Rejection>(warp::reply::json(&tx_json("success")))
    });
    let (addr, server) = warp::serve(slow).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_slow_node_times_out() {
    let url = spawn_slow_node(Duration::from_secs(5)).await;
    let client = StacksClient::with_timeout(&url, Duration::from_millis(100)).unwrap();

    let result = client.get_transaction(TX_ID).await;
    assert!(matches!(result, Err(ClientError::Timeout)));
}

#[tokio::test]
async fn test_slow_node_within_timeout_answers() {
    let url = spawn_slow_node(Duration::from_millis(20)).await;
    let client = StacksClient::with_timeout(&url, Duration::from_secs(5)).unwrap();

    let record = client.get_transaction(TX_ID).await.unwrap();
    assert_eq!(record.tx_status, TxStatus::Success);
}

#[tokio::test]
async fn test_connection_error_keeps_cause() {
    use std::error::Error;

    // Bind then drop to get a port nobody listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = StacksClient::new(&format!("http://127.0.0.1:{}", port)).unwrap();

    let err = client.get_transaction(TX_ID).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(err.source().is_some());
}
