//! お問い合わせの送信
//!
//! 送信先が設定されていればfetchでPOSTし、無ければ一定時間待って成功を返す。

use futures::future::LocalBoxFuture;
use gloo::timers::future::TimeoutFuture;
use portfolio_common::{
    ContactConfig, ContactPayload, GatewayError, SimulatedGateway, Sleeper, SubmitGateway,
};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザのタイマーで待つ
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

impl Sleeper for GlooSleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(millis))
    }
}

/// JSONをPOSTする送信先
#[derive(Debug, Clone)]
pub struct FetchGateway {
    endpoint: String,
}

impl FetchGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl SubmitGateway for FetchGateway {
    fn deliver(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), GatewayError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let body = serde_json::to_string(&payload)
                .map_err(|e| GatewayError::Encode(e.to_string()))?;
            post_json(&endpoint, &body).await
        })
    }
}

async fn post_json(endpoint: &str, body: &str) -> Result<(), GatewayError> {
    let window = web_sys::window().ok_or_else(|| network("no window"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(GatewayError::Rejected {
            status: resp.status(),
        });
    }
    Ok(())
}

fn network(message: &str) -> GatewayError {
    GatewayError::Network(message.to_string())
}

fn js_error(value: JsValue) -> GatewayError {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    GatewayError::Network(message)
}

/// 設定に応じた送信先
pub fn gateway_for(config: &ContactConfig) -> Box<dyn SubmitGateway> {
    match config.endpoint.as_deref() {
        Some(endpoint) if !endpoint.trim().is_empty() => Box::new(FetchGateway::new(endpoint)),
        _ => Box::new(SimulatedGateway::new(GlooSleeper, config.latency())),
    }
}
