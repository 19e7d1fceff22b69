// Control service - Use case for sending commands to the car
use crate::domain::control::{ControlAck, ControlCommand};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait DeviceControl: Send + Sync {
    /// Deliver one command to the control endpoint.
    async fn send_control(&self, command: ControlCommand) -> anyhow::Result<ControlAck>;
}

#[derive(Clone)]
pub struct ControlService {
    control: Arc<dyn DeviceControl>,
}

impl ControlService {
    pub fn new(control: Arc<dyn DeviceControl>) -> Self {
        Self { control }
    }

    /// Send a command once and log what came back. Nothing is retried.
    pub async fn send(&self, command: ControlCommand) -> anyhow::Result<ControlAck> {
        match self.control.send_control(command).await {
            Ok(ack) if ack.is_ok() => {
                tracing::info!("Control response for {}: {}", command, ack.status);
                Ok(ack)
            }
            Ok(ack) => {
                tracing::warn!(
                    "Control {} rejected: {}",
                    command,
                    ack.msg.as_deref().unwrap_or(&ack.status)
                );
                Ok(ack)
            }
            Err(e) => {
                tracing::error!("Error sending control {}: {:?}", command, e);
                Err(e)
            }
        }
    }

    /// Send without waiting for the response.
    pub fn dispatch(&self, command: ControlCommand) -> tokio::task::JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let _ = service.send(command).await;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingControl {
        sent: Mutex<Vec<ControlCommand>>,
        reject: bool,
    }

    #[async_trait]
    impl DeviceControl for RecordingControl {
        async fn send_control(&self, command: ControlCommand) -> anyhow::Result<ControlAck> {
            self.sent.lock().unwrap().push(command);
            if command == ControlCommand::TakePhoto {
                anyhow::bail!("connection reset");
            }
            let status = if self.reject { "error" } else { "ok" };
            Ok(ControlAck {
                status: status.to_string(),
                msg: self.reject.then(|| "unknown device".to_string()),
            })
        }
    }

    #[tokio::test]
    async fn test_send_returns_ack() {
        let control = Arc::new(RecordingControl::default());
        let service = ControlService::new(control.clone());

        let ack = service.send(ControlCommand::Forward).await.unwrap();

        assert!(ack.is_ok());
        assert_eq!(*control.sent.lock().unwrap(), vec![ControlCommand::Forward]);
    }

    #[tokio::test]
    async fn test_rejection_is_not_an_error() {
        let control = Arc::new(RecordingControl {
            reject: true,
            ..Default::default()
        });
        let service = ControlService::new(control);

        let ack = service.send(ControlCommand::LedOn).await.unwrap();
        assert!(!ack.is_ok());
    }

    #[tokio::test]
    async fn test_transport_error_is_returned_once() {
        let control = Arc::new(RecordingControl::default());
        let service = ControlService::new(control.clone());

        assert!(service.send(ControlCommand::TakePhoto).await.is_err());
        assert_eq!(control.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_sends_in_background() {
        let control = Arc::new(RecordingControl::default());
        let service = ControlService::new(control.clone());

        service.dispatch(ControlCommand::Stop).await.unwrap();

        assert_eq!(*control.sent.lock().unwrap(), vec![ControlCommand::Stop]);
    }
}
