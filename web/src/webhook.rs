use shared_types::BookingPayload;

/// Automation endpoint that turns a submission into a confirmation email.
pub const WEBHOOK_URL: &str = "https://hook.eu1.make.com/9yxlvnpcj6y2he1yi94455hezy3aht8k";

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("failed to serialize booking payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("browser window unavailable")]
    NoWindow,
    #[error("failed to build webhook request")]
    Request,
    #[error("webhook request did not complete")]
    Transport,
}

/// Posts one booking to the webhook. The request is sent cross-origin in
/// no-cors mode, so the response is opaque: the caller learns whether the
/// fetch itself completed, never whether the endpoint accepted the body.
#[cfg(feature = "hydrate")]
pub async fn send_booking(payload: &BookingPayload) -> Result<(), WebhookError> {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode};

    let body = serde_json::to_string(payload)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::NoCors);
    opts.set_body(&JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(WEBHOOK_URL, &opts).map_err(|_| WebhookError::Request)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| WebhookError::Request)?;

    let window = web_sys::window().ok_or(WebhookError::NoWindow)?;
    JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| WebhookError::Transport)?;

    Ok(())
}

// The form never submits during the server-rendered pass; this stub keeps
// the call site identical across both build targets.
#[cfg(not(feature = "hydrate"))]
pub async fn send_booking(_payload: &BookingPayload) -> Result<(), WebhookError> {
    Ok(())
}
