use std::fs;
use tracing::{error, info};

use floatfx::client::ExchangeClient;
use floatfx::core::{ExchangeError, FetchError};
use floatfx::providers::FloatRatesProvider;

// Mock FloatRates feed shared by the tests below
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const USD_TABLE: &str = r#"{
        "eur": {"code": "EUR", "alphaCode": "EUR", "numericCode": "978", "name": "Euro",
                "rate": 0.8571, "date": "Sat, 18 Oct 2026 11:55:01 GMT", "inverseRate": 1.1667},
        "kzt": {"code": "KZT", "alphaCode": "KZT", "numericCode": "398", "name": "Kazakhstani Tenge",
                "rate": 478.51, "date": "Sat, 18 Oct 2026 11:55:01 GMT", "inverseRate": 0.0020898},
        "jpy": {"code": "JPY", "alphaCode": "JPY", "numericCode": "392", "name": "Japanese Yen",
                "rate": 149.2, "date": "Sat, 18 Oct 2026 11:55:01 GMT", "inverseRate": 0.0067024}
    }"#;

    pub const EUR_TABLE: &str = r#"{
        "usd": {"code": "USD", "alphaCode": "USD", "numericCode": "840", "name": "U.S. Dollar",
                "rate": 1.1667, "date": "Sat, 18 Oct 2026 11:55:01 GMT", "inverseRate": 0.8571},
        "kzt": {"code": "KZT", "alphaCode": "KZT", "numericCode": "398", "name": "Kazakhstani Tenge",
                "rate": 558.2, "date": "Sat, 18 Oct 2026 11:55:01 GMT", "inverseRate": 0.0017915}
    }"#;

    pub async fn mount_table(server: &MockServer, base: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/daily/{base}.json")))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }

    pub async fn create_mock_server() -> MockServer {
        let mock_server = MockServer::start().await;
        mount_table(&mock_server, "usd", 200, USD_TABLE).await;
        mount_table(&mock_server, "eur", 200, EUR_TABLE).await;
        mock_server
    }
}

async fn create_client(uri: &str) -> ExchangeClient {
    let provider = FloatRatesProvider::new(uri);
    ExchangeClient::create(Box::new(provider))
        .await
        .expect("Failed to create client")
}

#[test_log::test(tokio::test)]
async fn test_catalog_from_mock_feed() {
    let mock_server = test_utils::create_mock_server().await;
    let client = create_client(&mock_server.uri()).await;

    let entries = client.list_entries().unwrap();
    info!(?entries, "Catalog entries");
    assert_eq!(
        entries,
        vec![
            "EUR : Euro",
            "JPY : Japanese Yen",
            "KZT : Kazakhstani Tenge",
            "USD : United States dollar",
        ]
    );

    for code in ["usd", "USD", "Usd", "kzt", "jPy"] {
        assert!(client.code_exists(code), "{code} should be known");
    }
    assert!(!client.code_exists("GBP"));
}

#[test_log::test(tokio::test)]
async fn test_usd_to_kzt_rate() {
    let mock_server = test_utils::create_mock_server().await;
    let mut client = create_client(&mock_server.uri()).await;

    assert!(matches!(client.last_result(), Err(ExchangeError::NoResult)));

    client.get_rate("USD", "KZT").await.unwrap();
    let result = client.last_result().unwrap();
    assert_eq!(result.from, "USD");
    assert_eq!(result.to, "KZT");
    assert_eq!(result.rate, 478.51);
    assert_eq!(result.inverse_rate, 0.0020898);
    assert_eq!(result.date, "Sat, 18 Oct 2026 11:55:01 GMT");

    let summary = client.last_result_summary().unwrap();
    assert!(summary.contains("1 USD ="));
    assert!(summary.contains("1 KZT ="));
}

#[test_log::test(tokio::test)]
async fn test_upstream_failures_keep_state() {
    let mock_server = test_utils::create_mock_server().await;
    test_utils::mount_table(&mock_server, "jpy", 503, "").await;
    test_utils::mount_table(&mock_server, "kzt", 200, r#"{"usd": {"code": "#).await;

    let mut client = create_client(&mock_server.uri()).await;
    client.get_rate("eur", "kzt").await.unwrap();
    let before = client.last_result().unwrap().clone();

    let err = client.get_rate("JPY", "USD").await.unwrap_err();
    assert!(matches!(
        err,
        ExchangeError::Fetch(FetchError::UpstreamStatus { .. })
    ));

    let err = client.get_rate("KZT", "USD").await.unwrap_err();
    assert!(matches!(err, ExchangeError::Fetch(FetchError::Decode { .. })));

    // JPY is catalogued but missing from the EUR table
    let err = client.get_rate("EUR", "JPY").await.unwrap_err();
    assert!(matches!(err, ExchangeError::UnknownTargetInFeed { .. }));

    assert_eq!(client.last_result().unwrap(), &before);
    assert_eq!(client.catalog().len(), 4);
}

#[test_log::test(tokio::test)]
async fn test_create_fails_on_bad_bootstrap() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_table(&mock_server, "usd", 200, "not json").await;

    let provider = FloatRatesProvider::new(&mock_server.uri());
    let result = ExchangeClient::create(Box::new(provider)).await;
    assert!(matches!(
        result,
        Err(ExchangeError::Fetch(FetchError::Decode { .. }))
    ));
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_server = test_utils::create_mock_server().await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    let config_content = format!(
        r#"
        providers:
          floatrates:
            base_url: {}
    "#,
        mock_server.uri()
    );
    fs::write(config_path, &config_content).expect("Failed to write config file");

    for command in [
        floatfx::AppCommand::List,
        floatfx::AppCommand::Check("kzt".to_string()),
        floatfx::AppCommand::Rate {
            from: "usd".to_string(),
            to: "eur".to_string(),
        },
    ] {
        let result = floatfx::run_command(command, Some(config_path.to_str().unwrap())).await;
        assert!(
            result.is_ok(),
            "Main function failed with: {:?}",
            result.err()
        );
    }

    let result = floatfx::run_command(
        floatfx::AppCommand::Rate {
            from: "usd".to_string(),
            to: "gbp".to_string(),
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Unknown target currency code: GBP")
    );
}

#[test_log::test(tokio::test)]
#[ignore = "requires network access to floatrates.com"]
async fn test_real_floatrates_api() {
    let mut client = create_client(floatfx::core::config::DEFAULT_FLOATRATES_URL).await;
    assert!(client.code_exists("USD"));
    info!(count = client.catalog().len(), "Loaded live catalog");

    match client.get_rate("USD", "EUR").await {
        Ok(()) => {
            let result = client.last_result().unwrap();
            info!(?result, "Received live rate");
            assert!(result.rate > 0.0, "Rate should be positive");
        }
        Err(e) => {
            error!("Rate request failed: {e}\n{e:?}");
            panic!("Rate request failed: {e}");
        }
    }
}
