use std::future::Future;

use aws_sdk_sns::Client;


/// A message bound for a notification topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub topic: String,
    pub subject: String,
    pub message: String,
}

impl Notification {
    pub fn new(topic: impl Into<String>, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            topic: topic.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}


#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("failed to publish notification to {topic}: {source}")]
    Publish {
        topic: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}


/// Anything that can deliver a [`Notification`] to its topic.
pub trait Publisher {
    fn publish(&self, notification: &Notification) -> impl Future<Output = Result<(), NotifyError>> + Send;
}


/// Publishes notifications through SNS. The client is built once and reused for every call.
#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: Client,
}

impl SnsPublisher {
    pub fn new(client: Client) -> Self {
        SnsPublisher { client }
    }

    pub async fn from_env() -> Self {
        SnsPublisher::new(Client::new(&aws_config::load_from_env().await))
    }
}

impl Publisher for SnsPublisher {
    async fn publish(&self, notification: &Notification) -> Result<(), NotifyError> {
        let output = self.client
            .publish()
            .topic_arn(&notification.topic)
            .subject(&notification.subject)
            .message(&notification.message)
            .send()
            .await
            .map_err(|err| NotifyError::Publish {
                topic: notification.topic.clone(),
                source: Box::new(aws_sdk_sns::Error::from(err)),
            })?;

        tracing::info!(
            "Published notification to {}, message id: {}",
            notification.topic,
            output.message_id().unwrap_or("none")
        );
        Ok(())
    }
}
