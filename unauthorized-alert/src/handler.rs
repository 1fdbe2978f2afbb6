use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use notify::{Notification, Publisher};

use crate::config::Config;
use crate::event::AccessDeniedAlert;
use crate::models::AlertResponse;


pub const SUBJECT: &str = "ALERT: Unauthorized S3 Access";

/// Everything an invocation needs, built once in `main` and shared by reference.
pub struct AlertContext<P> {
    pub config: Config,
    pub publisher: P,
}

pub async fn function_handler<P: Publisher + Sync>(event: LambdaEvent<Value>, ctx: &AlertContext<P>) -> Result<AlertResponse, Error> {
    let LambdaEvent { payload, context } = event;
    tracing::debug!("Handling request {}", context.request_id);

    handle(payload, ctx).await
}

/// Formats the alert for `event` and publishes it once.
///
/// A publish failure is returned as the invocation error; the success response is only
/// produced after the notification went out.
pub async fn handle<P: Publisher + Sync>(event: Value, ctx: &AlertContext<P>) -> Result<AlertResponse, Error> {
    tracing::info!("Event Received: {}", event);

    let alert = AccessDeniedAlert::from_event(&event);
    let notification = Notification::new(&ctx.config.topic_arn, SUBJECT, alert.message());

    ctx.publisher
        .publish(&notification)
        .await
        .inspect_err(|err| tracing::error!("Failed to send alert: {}", err))?;

    Ok(AlertResponse::sent())
}
