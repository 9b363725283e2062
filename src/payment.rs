// Payment simulation. The gateway is a fixed-delay stand-in for a real
// payment provider; the processor does the two store writes (payment
// insert, then request status flip) with no compensation between them.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;
use tokio::sync::Notify;
use tokio::time::{sleep, timeout};
use tracing::{error, info, warn};

use crate::records::{self, Payment, PaymentMethod, PaymentStatus};
use crate::repository::{PaymentRepository, RequestRepository};
use crate::store::StoreError;

// Reference gateway latency.
pub const SIMULATED_GATEWAY_DELAY_MS: u64 = 2000;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("gateway declined the charge: {0}")]
    Declined(String),

    #[error("charge timed out after {0}ms")]
    Timeout(u64),

    #[error("payment for request '{0}' was cancelled")]
    Cancelled(String),

    #[error("could not record the payment")]
    Storage(#[from] StoreError),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    async fn charge(&self, amount: u32, method: PaymentMethod) -> Result<(), PaymentError>;
}

// Always-approving gateway with a fixed processing delay.
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(SIMULATED_GATEWAY_DELAY_MS))
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, _amount: u32, _method: PaymentMethod) -> Result<(), PaymentError> {
        sleep(self.delay).await;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 100,
            max_backoff_ms: 10000,
            backoff_multiplier: 2.0,
            jitter_factor: 0.1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub charge_timeout_ms: u64,
    pub retry: RetryConfig,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            charge_timeout_ms: 10000,
            retry: RetryConfig::default(),
        }
    }
}

// Exponential backoff with jitter to avoid retry bursts.
fn backoff_delay(retry_attempt: u32, config: &RetryConfig) -> Duration {
    let base_backoff_ms = (config.initial_backoff_ms as f64
        * config.backoff_multiplier.powf(retry_attempt as f64))
    .min(config.max_backoff_ms as f64);

    let jitter = rand::random::<f64>() * config.jitter_factor * base_backoff_ms;
    let backoff_ms = base_backoff_ms * (1.0 - config.jitter_factor / 2.0) + jitter;

    Duration::from_millis(backoff_ms as u64)
}

pub struct PaymentProcessor {
    gateway: Arc<dyn PaymentGateway>,
    payments: Arc<dyn PaymentRepository>,
    requests: Arc<dyn RequestRepository>,
    config: ProcessorConfig,
    in_flight: DashMap<String, Arc<Notify>>,
}

impl PaymentProcessor {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        payments: Arc<dyn PaymentRepository>,
        requests: Arc<dyn RequestRepository>,
        config: ProcessorConfig,
    ) -> Self {
        Self {
            gateway,
            payments,
            requests,
            config,
            in_flight: DashMap::new(),
        }
    }

    // Charge the gateway, then append the payment record and flip the
    // matching request pending -> approved. A payment whose request id
    // matches nothing is still recorded, as the dashboard tolerates
    // orphaned payments. Cancelled or timed-out charges write nothing.
    pub async fn complete_payment(
        &self,
        request_id: &str,
        amount: u32,
        method: PaymentMethod,
    ) -> Result<Payment, PaymentError> {
        let cancel = Arc::new(Notify::new());
        self.in_flight
            .insert(request_id.to_string(), cancel.clone());
        let charged = self
            .charge_with_retry(request_id, amount, method, &cancel)
            .await;
        self.in_flight.remove(request_id);
        charged?;

        let payment = Payment {
            id: records::next_id(),
            amount,
            accommodation_id: request_id.to_string(),
            payment_method: method,
            status: PaymentStatus::Completed,
            date: records::now_iso(),
        };

        if let Err(err) = self.payments.append(payment.clone()).await {
            error!(request_id, %err, "failed to record payment");
            return Err(err.into());
        }

        match self.requests.mark_approved(request_id, &payment.id).await {
            Ok(Some(request)) => {
                info!(request_id, payment_id = %payment.id, room = %request.room_id,
                    "payment completed, request approved");
            }
            Ok(None) => {
                warn!(request_id, payment_id = %payment.id,
                    "payment recorded but no accommodation request matches");
            }
            Err(err) => {
                // The payment record above is not rolled back.
                error!(request_id, %err, "failed to update request after payment");
                return Err(err.into());
            }
        }

        Ok(payment)
    }

    // Abort an in-flight charge before it reaches the store. Returns false
    // when no charge for the request is pending.
    pub fn cancel(&self, request_id: &str) -> bool {
        match self.in_flight.get(request_id) {
            Some(entry) => {
                entry.value().notify_one();
                true
            }
            None => false,
        }
    }

    async fn charge_with_retry(
        &self,
        request_id: &str,
        amount: u32,
        method: PaymentMethod,
        cancel: &Notify,
    ) -> Result<(), PaymentError> {
        let charge_timeout = Duration::from_millis(self.config.charge_timeout_ms);
        let mut attempt: u32 = 0;

        loop {
            let charge = timeout(charge_timeout, self.gateway.charge(amount, method));
            tokio::select! {
                outcome = charge => match outcome {
                    Ok(Ok(())) => return Ok(()),
                    Ok(Err(err)) => return Err(err),
                    Err(_) => {
                        if attempt >= self.config.retry.max_retries {
                            return Err(PaymentError::Timeout(self.config.charge_timeout_ms));
                        }
                        attempt += 1;
                        warn!(request_id, attempt, "charge attempt timed out, retrying");
                        sleep(backoff_delay(attempt, &self.config.retry)).await;
                    }
                },
                _ = cancel.notified() => {
                    info!(request_id, "in-flight charge cancelled");
                    return Err(PaymentError::Cancelled(request_id.to_string()));
                }
            }
        }
    }
}
