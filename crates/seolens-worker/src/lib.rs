//! Cloudflare Worker for seolens
//!
//! Relays remote pages to browser clients that cannot fetch them cross-origin,
//! and runs the audit server-side for clients that only want the report.

use seolens_core::relay::{RelayResponse, TARGET_PARAM};
use seolens_core::{RuleTable, audit_html};
use std::net::{Ipv4Addr, Ipv6Addr};
use url::Host;
use worker::*;

const USER_AGENT: &str = concat!("seolens/", env!("CARGO_PKG_VERSION"), " (Cloudflare Worker)");
const KEYWORD_PARAM: &str = "keyword";

const MISSING_URL: &str = "Falta la URL";
const FETCH_FAILED: &str = "Error al obtener la URL";

/// First value of a query parameter, percent-decoded
fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Loopback, private, link-local, carrier-grade NAT and unspecified addresses
fn is_blocked_ipv4(ip: Ipv4Addr) -> bool {
    let [first, second, ..] = ip.octets();
    ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
        || (first == 100 && (second & 0xc0) == 64)
}

fn is_blocked_ipv6(ip: Ipv6Addr) -> bool {
    if let Some(mapped) = ip.to_ipv4_mapped() {
        return is_blocked_ipv4(mapped);
    }
    let first = ip.segments()[0];
    ip.is_loopback()
        || ip.is_unspecified()
        // unique local fc00::/7
        || (first & 0xfe00) == 0xfc00
        // link local fe80::/10
        || (first & 0xffc0) == 0xfe80
}

/// Only public http(s) hosts may be fetched through the relay
fn validate_target_url(target: &str) -> std::result::Result<Url, String> {
    let url = Url::parse(target).map_err(|e| format!("URL no válida: {e}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("Esquema no permitido: {}", url.scheme()));
    }

    match url.host() {
        None => return Err("La URL no tiene host".to_string()),
        Some(Host::Domain(domain)) => {
            let domain = domain.to_ascii_lowercase();
            if domain == "localhost" || domain.ends_with(".localhost") {
                return Err("Host no permitido".to_string());
            }
        }
        Some(Host::Ipv4(ip)) => {
            if is_blocked_ipv4(ip) {
                return Err("Host no permitido".to_string());
            }
        }
        Some(Host::Ipv6(ip)) => {
            if is_blocked_ipv6(ip) {
                return Err("Host no permitido".to_string());
            }
        }
    }

    Ok(url)
}

fn json_response(body: &impl serde::Serialize, status: u16, headers: Headers) -> Result<Response> {
    headers.set("Content-Type", "application/json")?;
    Response::ok(serde_json::to_string(body)?).map(|r| r.with_headers(headers).with_status(status))
}

async fn fetch_target(target: &Url) -> std::result::Result<String, String> {
    let mut request = Request::new(target.as_str(), Method::Get).map_err(|e| e.to_string())?;
    request
        .headers_mut()
        .and_then(|h| h.set("User-Agent", USER_AGENT))
        .map_err(|e| e.to_string())?;

    let mut response = Fetch::Request(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.text().await.map_err(|e| e.to_string())
}

/// Resolve the `url` parameter or produce the 400 answer for it
fn requested_target(url: &Url) -> std::result::Result<Url, RelayResponse> {
    let target = query_param(url, TARGET_PARAM)
        .ok_or_else(|| RelayResponse::error(MISSING_URL, None))?;
    validate_target_url(&target).map_err(|reason| RelayResponse::error(reason, Some(target)))
}

async fn handle_proxy(url: &Url, headers: Headers) -> Result<Response> {
    let target = match requested_target(url) {
        Ok(target) => target,
        Err(body) => return json_response(&body, 400, headers),
    };

    console_log!("[Worker] Relaying {}", target);
    match fetch_target(&target).await {
        Ok(html) => {
            console_log!("[Worker] Fetched {} bytes", html.len());
            json_response(&RelayResponse::contents(html), 200, headers)
        }
        Err(details) => {
            console_error!("[Worker] Fetch of {} failed: {}", target, details);
            json_response(&RelayResponse::error(FETCH_FAILED, Some(details)), 500, headers)
        }
    }
}

async fn handle_audit(url: &Url, headers: Headers) -> Result<Response> {
    let target = match requested_target(url) {
        Ok(target) => target,
        Err(body) => return json_response(&body, 400, headers),
    };

    let html = match fetch_target(&target).await {
        Ok(html) => html,
        Err(details) => {
            console_error!("[Worker] Fetch of {} failed: {}", target, details);
            let body = RelayResponse::error(FETCH_FAILED, Some(details));
            return json_response(&body, 500, headers);
        }
    };

    let mut rules = RuleTable::default();
    if let Some(keyword) = query_param(url, KEYWORD_PARAM) {
        rules = rules.with_keyword(keyword);
    }

    match audit_html(&html, target.as_str(), &rules) {
        Ok(report) => {
            console_log!("[Worker] {} scored {}/100", report.url, report.final_score);
            json_response(&report, 200, headers)
        }
        Err(e) => json_response(&RelayResponse::error(e.to_string(), None), 400, headers),
    }
}

/// What the worker does with a request
#[derive(Debug, PartialEq)]
enum Route {
    Preflight,
    Proxy,
    Audit,
    Health,
    Reject(u16, RelayResponse),
}

fn route(method: &Method, path: &str) -> Route {
    if *method == Method::Options {
        return Route::Preflight;
    }
    if *method != Method::Get {
        return Route::Reject(405, RelayResponse::error("Method Not Allowed", None));
    }

    match path {
        "/api/proxy" => Route::Proxy,
        "/api/audit" => Route::Audit,
        "/" | "/health" => Route::Health,
        _ => Route::Reject(404, RelayResponse::error("Not Found", None)),
    }
}

#[event(fetch)]
async fn main(req: Request, _env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    let url = req.url()?;
    console_log!("[Worker] {} {}", req.method(), url.path());

    // CORS headers
    let headers = Headers::new();
    headers.set("Access-Control-Allow-Origin", "*")?;
    headers.set("Access-Control-Allow-Methods", "GET, OPTIONS")?;
    headers.set("Access-Control-Allow-Headers", "Content-Type")?;

    match route(&req.method(), url.path()) {
        Route::Preflight => Response::empty().map(|r| r.with_headers(headers)),
        Route::Proxy => handle_proxy(&url, headers).await,
        Route::Audit => handle_audit(&url, headers).await,
        Route::Health => {
            let health = serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION")
            });
            json_response(&health, 200, headers)
        }
        Route::Reject(status, body) => json_response(&body, status, headers),
    }
}

#[cfg(test)]
mod tests;
