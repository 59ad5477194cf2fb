use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

use tickerdash_core::{
    normalize_feed, HttpClient, HttpError, HttpRequest, HttpResponse, IngestionConfig,
    IngestionErrorKind, TickerIngestion,
};

/// Expected outcome of ingesting one feed body.
#[derive(Debug, Clone, Copy)]
enum Expect {
    Symbols(&'static [&'static str]),
    Fails(IngestionErrorKind),
}

struct FeedCase {
    name: &'static str,
    status: u16,
    body: &'static str,
    expect: Expect,
}

fn feed_cases() -> Vec<FeedCase> {
    vec![
        FeedCase {
            name: "string numerics",
            status: 200,
            body: r#"{"success":true,"result":[
                {"symbol":"ETHUSDT","close":"2650.75","change_24h":"-1.23","volume":"987654"}
            ]}"#,
            expect: Expect::Symbols(&["ETHUSDT"]),
        },
        FeedCase {
            name: "json numerics without success flag",
            status: 200,
            body: r#"{"result":[{"symbol":"BTCUSDT","close":43250.5,"change_24h":2.45}]}"#,
            expect: Expect::Symbols(&["BTCUSDT"]),
        },
        FeedCase {
            name: "extra upstream fields are ignored",
            status: 200,
            body: r#"{"success":true,"result":[
                {"symbol":"BTCUSD","close":"1","change_24h":"0","mark_price":"1.01","oi":"10","product_id":27}
            ]}"#,
            expect: Expect::Symbols(&["BTCUSD"]),
        },
        FeedCase {
            name: "symbol case is preserved",
            status: 200,
            body: r#"{"result":[{"symbol":"btcUSDT","close":"1","change_24h":"0"}]}"#,
            expect: Expect::Symbols(&["btcUSDT"]),
        },
        FeedCase {
            name: "mixed valid and invalid",
            status: 200,
            body: r#"{"result":[
                {"symbol":"","close":"10","change_24h":"1"},
                {"symbol":"AAA","close":"1","change_24h":"x"},
                {"symbol":"BBB","close":"-1","change_24h":"1"},
                {"symbol":"CCC","close":"1","change_24h":"1","volume":"lots"},
                {"symbol":"DDD","close":"1","change_24h":"1"},
                null,
                {"symbol":"EEE","close":"2","change_24h":"-2","volume":null}
            ]}"#,
            expect: Expect::Symbols(&["DDD", "EEE"]),
        },
        FeedCase {
            name: "out-of-range number drops only its record",
            status: 200,
            body: r#"{"result":[
                {"symbol":"BTCUSDT","close":"43250.5","change_24h":"2.45"},
                {"symbol":"BADUSDT","close":1e400,"change_24h":"1"},
                {"symbol":"HUGEUSDT","close":"1","change_24h":"0","volume":-1e999}
            ]}"#,
            expect: Expect::Symbols(&["BTCUSDT"]),
        },
        FeedCase {
            name: "empty result list",
            status: 200,
            body: r#"{"success":true,"result":[]}"#,
            expect: Expect::Fails(IngestionErrorKind::NoValidRecords),
        },
        FeedCase {
            name: "all records invalid",
            status: 200,
            body: r#"{"result":[{"symbol":"","close":"1","change_24h":"1"},{"close":"1"}]}"#,
            expect: Expect::Fails(IngestionErrorKind::NoValidRecords),
        },
        FeedCase {
            name: "result is not a list",
            status: 200,
            body: r#"{"success":true,"result":{"symbol":"BTCUSDT"}}"#,
            expect: Expect::Fails(IngestionErrorKind::TransportOrShape),
        },
        FeedCase {
            name: "upstream failure flag",
            status: 200,
            body: r#"{"success":false,"error":{"code":"internal_server_error"}}"#,
            expect: Expect::Fails(IngestionErrorKind::TransportOrShape),
        },
        FeedCase {
            name: "not json",
            status: 200,
            body: "upstream connect error",
            expect: Expect::Fails(IngestionErrorKind::TransportOrShape),
        },
        FeedCase {
            name: "not found",
            status: 404,
            body: r#"{"result":[{"symbol":"BTCUSDT","close":"1","change_24h":"1"}]}"#,
            expect: Expect::Fails(IngestionErrorKind::TransportOrShape),
        },
        FeedCase {
            name: "rate limited",
            status: 429,
            body: "",
            expect: Expect::Fails(IngestionErrorKind::TransportOrShape),
        },
    ]
}

struct StaticHttpClient {
    status: u16,
    body: &'static str,
}

impl HttpClient for StaticHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = HttpResponse::with_status(self.status, self.body);
        Box::pin(async move { Ok(response) })
    }
}

#[test]
fn fetch_outcome_matches_contract_for_every_feed_case() {
    for case in feed_cases() {
        let ingestion = TickerIngestion::with_http_client(
            Arc::new(StaticHttpClient {
                status: case.status,
                body: case.body,
            }),
            IngestionConfig::default(),
        );

        let outcome = block_on(ingestion.fetch());
        match (case.expect, outcome) {
            (Expect::Symbols(expected), Ok(snapshot)) => {
                let symbols: Vec<_> = snapshot
                    .tickers()
                    .iter()
                    .map(|ticker| ticker.symbol().as_str())
                    .collect();
                assert_eq!(symbols, expected, "case '{}': symbols", case.name);
            }
            (Expect::Fails(kind), Err(error)) => {
                assert_eq!(error.kind(), kind, "case '{}': error kind", case.name);
                assert!(
                    !error.message().is_empty(),
                    "case '{}': error message should not be empty",
                    case.name
                );
            }
            (expect, outcome) => {
                panic!("case '{}': expected {expect:?}, got {outcome:?}", case.name)
            }
        }
    }
}

#[test]
fn every_surfaced_ticker_satisfies_record_invariants() {
    for case in feed_cases().into_iter().filter(|case| case.status == 200) {
        let Ok(tickers) = normalize_feed(case.body, 50) else {
            continue;
        };

        for ticker in &tickers {
            assert!(
                !ticker.symbol().as_str().trim().is_empty(),
                "case '{}': empty symbol surfaced",
                case.name
            );
            assert!(
                ticker.price().is_finite() && ticker.price() > 0.0,
                "case '{}': price",
                case.name
            );
            assert!(
                ticker.change_percent().is_finite(),
                "case '{}': change",
                case.name
            );
            assert!(
                ticker.volume().is_finite() && ticker.volume() >= 0.0,
                "case '{}': volume",
                case.name
            );
        }
    }
}

fn block_on<F>(future: F) -> F::Output
where
    F: Future,
{
    let waker = noop_waker();
    let mut context = Context::from_waker(&waker);
    let mut future = std::pin::pin!(future);

    loop {
        match future.as_mut().poll(&mut context) {
            Poll::Ready(output) => return output,
            Poll::Pending => std::thread::yield_now(),
        }
    }
}

fn noop_waker() -> Waker {
    // SAFETY: The vtable functions never dereference the data pointer and are no-op operations.
    unsafe { Waker::from_raw(noop_raw_waker()) }
}

fn noop_raw_waker() -> RawWaker {
    RawWaker::new(std::ptr::null(), &NOOP_RAW_WAKER_VTABLE)
}

unsafe fn noop_raw_waker_clone(_: *const ()) -> RawWaker {
    noop_raw_waker()
}

unsafe fn noop_raw_waker_wake(_: *const ()) {}

unsafe fn noop_raw_waker_wake_by_ref(_: *const ()) {}

unsafe fn noop_raw_waker_drop(_: *const ()) {}

static NOOP_RAW_WAKER_VTABLE: RawWakerVTable = RawWakerVTable::new(
    noop_raw_waker_clone,
    noop_raw_waker_wake,
    noop_raw_waker_wake_by_ref,
    noop_raw_waker_drop,
);
