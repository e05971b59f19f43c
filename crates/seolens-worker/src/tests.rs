#[cfg(test)]
mod worker_tests {
    use crate::{Route, query_param, requested_target, route, validate_target_url};
    use seolens_core::relay::RelayResponse;
    use url::Url;
    use worker::Method;

    fn relay(query: &str) -> Url {
        Url::parse(&format!("https://relay.example.com/api/proxy{query}")).unwrap()
    }

    #[test]
    fn test_query_param_is_decoded() {
        let url = relay("?url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc&keyword=rust");
        assert_eq!(
            query_param(&url, "url").as_deref(),
            Some("https://example.com/a?b=c")
        );
        assert_eq!(query_param(&url, "keyword").as_deref(), Some("rust"));
    }

    #[test]
    fn test_query_param_missing_or_blank() {
        assert_eq!(query_param(&relay(""), "url"), None);
        assert_eq!(query_param(&relay("?url="), "url"), None);
        assert_eq!(query_param(&relay("?url=%20%20"), "url"), None);
        assert_eq!(query_param(&relay("?target=x"), "url"), None);
    }

    #[test]
    fn test_url_validation_http_and_https() {
        assert!(validate_target_url("http://example.com").is_ok());
        assert!(validate_target_url("https://example.com/blog?page=2").is_ok());
    }

    #[test]
    fn test_url_validation_invalid_scheme() {
        let test_cases = vec![
            "ftp://example.com",
            "file:///etc/passwd",
            "javascript:alert(1)",
            "data:text/html,<script>alert(1)</script>",
        ];

        for url in test_cases {
            assert!(
                validate_target_url(url).is_err(),
                "URL {} should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_url_validation_garbage() {
        assert!(validate_target_url("not a url").is_err());
        assert!(validate_target_url("").is_err());
    }

    #[test]
    fn test_url_validation_localhost() {
        let test_cases = vec![
            "http://localhost",
            "https://127.0.0.1",
            "http://[::1]",
            "https://localhost:8080",
            "http://app.localhost",
            "http://0.0.0.0",
            "http://[::ffff:127.0.0.1]/",
            "http://[::ffff:7f00:1]/",
        ];

        for url in test_cases {
            assert!(
                validate_target_url(url).is_err(),
                "URL {} should be blocked",
                url
            );
        }
    }

    #[test]
    fn test_url_validation_private_ips() {
        let test_cases = vec![
            "http://192.168.1.1",
            "https://10.0.0.1",
            "http://172.16.0.1",
            "http://172.31.255.1",
            "https://169.254.1.1",
            "http://100.64.0.1",
            "http://100.127.255.254",
            "http://[::ffff:192.168.0.1]/",
            "http://[fc00::1]/",
            "http://[fd12:3456::1]/",
            "http://[fe80::1]/",
        ];

        for url in test_cases {
            assert!(
                validate_target_url(url).is_err(),
                "URL {} should be blocked as private",
                url
            );
        }
    }

    #[test]
    fn test_url_validation_valid_public() {
        let test_cases = vec![
            "https://example.com",
            "http://google.com",
            "https://github.com",
            "http://172.32.0.1",
            "https://8.8.8.8",
            "http://100.128.0.1",
            "http://[2606:4700::1111]/",
            "http://[::ffff:8.8.8.8]/",
        ];

        for url in test_cases {
            assert!(
                validate_target_url(url).is_ok(),
                "URL {} should be allowed",
                url
            );
        }
    }

    #[test]
    fn test_missing_target_answer() {
        let body = requested_target(&relay("")).unwrap_err();
        assert_eq!(body, RelayResponse::error("Falta la URL", None));
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Falta la URL"}"#
        );
    }

    #[test]
    fn test_blocked_target_answer_names_the_target() {
        let body = requested_target(&relay("?url=http%3A%2F%2F127.0.0.1%2F")).unwrap_err();
        match body {
            RelayResponse::Error { details, .. } => {
                assert_eq!(details.as_deref(), Some("http://127.0.0.1/"));
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_valid_target() {
        let target = requested_target(&relay("?url=https%3A%2F%2Fexample.com%2Fpost")).unwrap();
        assert_eq!(target.as_str(), "https://example.com/post");
    }

    #[test]
    fn test_routes() {
        assert_eq!(route(&Method::Options, "/anything"), Route::Preflight);
        assert_eq!(route(&Method::Get, "/api/proxy"), Route::Proxy);
        assert_eq!(route(&Method::Get, "/api/audit"), Route::Audit);
        assert_eq!(route(&Method::Get, "/"), Route::Health);
        assert_eq!(route(&Method::Get, "/health"), Route::Health);
    }

    #[test]
    fn test_unknown_routes_answer_with_json_errors() {
        assert_eq!(
            route(&Method::Get, "/missing"),
            Route::Reject(404, RelayResponse::error("Not Found", None))
        );
        assert_eq!(
            route(&Method::Post, "/api/proxy"),
            Route::Reject(405, RelayResponse::error("Method Not Allowed", None))
        );
    }
}
