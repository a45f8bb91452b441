//! Adapter tests against mock upstream servers.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use price_compare::config::ApiKey;
use price_compare::domain::{IN_STOCK, OUT_OF_STOCK, Store};
use price_compare::infrastructure::providers::{
    FlipkartAdapter, FlipkartConfig, HttpClient, PriceProvider, ProviderError, RainforestAdapter,
    RainforestConfig,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rainforest(server: &MockServer, timeout_ms: u64) -> RainforestAdapter {
    RainforestAdapter::new(
        RainforestConfig::new(Some(ApiKey::new("test-key"))).with_base_url(server.uri()),
        HttpClient::new(timeout_ms).unwrap(),
    )
}

fn flipkart(server: &MockServer) -> FlipkartAdapter {
    FlipkartAdapter::new(
        FlipkartConfig {
            base_url: server.uri(),
        },
        HttpClient::new(2000).unwrap(),
    )
}

mod rainforest {
    use super::*;

    #[tokio::test]
    async fn sends_fixed_search_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/request"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("type", "search"))
            .and(query_param("amazon_domain", "amazon.in"))
            .and(query_param("search_term", "iphone 15"))
            .and(query_param("sort_by", "featured"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "search_results": [
                    {
                        "price": {"raw": "₹1,299.00", "value": 1299.0},
                        "link": "https://www.amazon.in/dp/B0TEST",
                        "availability": {"type": "In Stock."}
                    },
                    {"price": {"raw": "₹9.00"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let quote = rainforest(&server, 2000)
            .lookup("iphone 15")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(quote.store, Store::Amazon);
        assert_eq!(quote.price, Some(1299.0));
        assert_eq!(quote.url, "https://www.amazon.in/dp/B0TEST");
        assert_eq!(quote.status, "In Stock.");
        assert_eq!(quote.shipping, "See on Amazon");
        assert!(!quote.best);
    }

    #[tokio::test]
    async fn missing_optional_fields_use_defaults() {
        let server = MockServer::start().await;
        Mock::given(path("/request"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "search_results": [{"title": "No price listed"}]
            })))
            .mount(&server)
            .await;

        let quote = rainforest(&server, 2000).lookup("pen").await.unwrap().unwrap();
        assert!(quote.price.is_none());
        assert_eq!(quote.url, "https://www.amazon.in");
        assert_eq!(quote.status, IN_STOCK);
    }

    #[tokio::test]
    async fn empty_results_are_no_quote() {
        let server = MockServer::start().await;
        Mock::given(path("/request"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"search_results": []})))
            .mount(&server)
            .await;

        let adapter = rainforest(&server, 2000);
        assert!(adapter.lookup("zzz").await.unwrap().is_none());
        assert!(adapter.quote("zzz").await.is_none());
    }

    #[tokio::test]
    async fn rejected_key_is_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(path("/request"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let adapter = rainforest(&server, 2000);
        assert!(matches!(
            adapter.lookup("pen").await,
            Err(ProviderError::Authentication { .. })
        ));
        assert!(adapter.quote("pen").await.is_none());
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(path("/request"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"search_results": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let result = rainforest(&server, 50).lookup("pen").await;
        assert!(matches!(result, Err(ProviderError::Timeout { .. })));
    }

    #[tokio::test]
    async fn non_json_body_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(path("/request"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = rainforest(&server, 2000).lookup("pen").await;
        assert!(matches!(result, Err(ProviderError::ProtocolError { .. })));
    }
}

mod flipkart {
    use super::*;

    #[tokio::test]
    async fn encodes_query_into_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/iphone%2015"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [{
                    "name": "Apple iPhone 15",
                    "current_price": 65999,
                    "link": "https://www.flipkart.com/apple-iphone-15/p/itm",
                    "in_stock": true
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let quote = flipkart(&server).lookup("iphone 15").await.unwrap().unwrap();
        assert_eq!(quote.store, Store::Flipkart);
        assert_eq!(quote.price, Some(65999.0));
        assert_eq!(quote.url, "https://www.flipkart.com/apple-iphone-15/p/itm");
        assert_eq!(quote.status, IN_STOCK);
        assert_eq!(quote.shipping, "See on Flipkart");
    }

    #[tokio::test]
    async fn accepts_results_field_and_fallbacks() {
        let server = MockServer::start().await;
        Mock::given(path("/search/kettle"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "price": "₹1,049",
                    "query_url": "https://www.flipkart.com/search?q=kettle",
                    "in_stock": false
                }]
            })))
            .mount(&server)
            .await;

        let quote = flipkart(&server).lookup("kettle").await.unwrap().unwrap();
        assert_eq!(quote.price, Some(1049.0));
        assert_eq!(quote.url, "https://www.flipkart.com/search?q=kettle");
        assert_eq!(quote.status, OUT_OF_STOCK);
    }

    #[tokio::test]
    async fn no_result_list_is_no_quote() {
        let server = MockServer::start().await;
        Mock::given(path("/search/nothing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_result": 0})))
            .mount(&server)
            .await;

        assert!(flipkart(&server).lookup("nothing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn dot_only_query_is_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
            .expect(0)
            .mount(&server)
            .await;

        let adapter = flipkart(&server);
        assert!(matches!(
            adapter.lookup("..").await,
            Err(ProviderError::InvalidRequest { .. })
        ));
        assert!(adapter.quote(".").await.is_none());
    }

    #[tokio::test]
    async fn server_error_is_swallowed() {
        let server = MockServer::start().await;
        Mock::given(path("/search/kettle"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let adapter = flipkart(&server);
        let result = adapter.lookup("kettle").await;
        assert!(result.as_ref().is_err_and(ProviderError::is_transport));
        assert!(adapter.quote("kettle").await.is_none());
    }
}
