// Typed repositories over the session store. Services depend on these
// traits rather than on raw store keys, so a real datastore can replace
// the session-backed implementations without touching the flow logic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::records::{AccommodationRequest, Payment, RequestStatus, User};
use crate::store::{SessionStore, StoreError, KEY_PAYMENTS, KEY_REQUESTS, KEY_USER};

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn current(&self) -> Option<User>;
    // One user per session: each call overwrites the previous record.
    async fn replace(&self, user: User) -> Result<(), StoreError>;
    async fn clear(&self);
}

#[async_trait]
pub trait RequestRepository: Send + Sync + 'static {
    async fn list(&self) -> Vec<AccommodationRequest>;
    async fn find(&self, id: &str) -> Option<AccommodationRequest>;
    async fn append(&self, request: AccommodationRequest) -> Result<(), StoreError>;
    // Flip the matching request pending -> approved and attach the payment id.
    // Returns the updated request, or None when no request matches.
    async fn mark_approved(
        &self,
        id: &str,
        payment_id: &str,
    ) -> Result<Option<AccommodationRequest>, StoreError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    async fn list(&self) -> Vec<Payment>;
    async fn append(&self, payment: Payment) -> Result<(), StoreError>;
}

pub struct SessionUserRepository {
    store: Arc<SessionStore>,
}

impl SessionUserRepository {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for SessionUserRepository {
    async fn current(&self) -> Option<User> {
        self.store.get_json(KEY_USER)
    }

    async fn replace(&self, user: User) -> Result<(), StoreError> {
        self.store.set_json(KEY_USER, &user)
    }

    async fn clear(&self) {
        self.store.remove(KEY_USER);
    }
}

pub struct SessionRequestRepository {
    store: Arc<SessionStore>,
}

impl SessionRequestRepository {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RequestRepository for SessionRequestRepository {
    async fn list(&self) -> Vec<AccommodationRequest> {
        self.store.get_json(KEY_REQUESTS)
    }

    async fn find(&self, id: &str) -> Option<AccommodationRequest> {
        self.list().await.into_iter().find(|r| r.id == id)
    }

    async fn append(&self, request: AccommodationRequest) -> Result<(), StoreError> {
        let mut requests = self.list().await;
        requests.push(request);
        self.store.set_json(KEY_REQUESTS, &requests)
    }

    async fn mark_approved(
        &self,
        id: &str,
        payment_id: &str,
    ) -> Result<Option<AccommodationRequest>, StoreError> {
        let mut requests = self.list().await;
        let mut updated = None;

        for request in requests.iter_mut() {
            if request.id == id {
                request.status = RequestStatus::Approved;
                request.payment_id = Some(payment_id.to_string());
                updated = Some(request.clone());
            }
        }

        self.store.set_json(KEY_REQUESTS, &requests)?;
        Ok(updated)
    }
}

pub struct SessionPaymentRepository {
    store: Arc<SessionStore>,
}

impl SessionPaymentRepository {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PaymentRepository for SessionPaymentRepository {
    async fn list(&self) -> Vec<Payment> {
        self.store.get_json(KEY_PAYMENTS)
    }

    async fn append(&self, payment: Payment) -> Result<(), StoreError> {
        let mut payments = self.list().await;
        payments.push(payment);
        self.store.set_json(KEY_PAYMENTS, &payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RoomKind;
    use crate::records::{self, PaymentMethod, PaymentStatus, StayDuration};

    fn sample_request(id: &str) -> AccommodationRequest {
        AccommodationRequest {
            id: id.to_string(),
            hostel_id: "1".to_string(),
            hostel_name: "Al-Hikmah Male Hostel A".to_string(),
            room_id: "A201".to_string(),
            room_type: RoomKind::FourPerson,
            duration: StayDuration::FullYear,
            price: 70000,
            status: RequestStatus::Pending,
            created_at: records::now_iso(),
            payment_id: None,
        }
    }

    #[tokio::test]
    async fn test_request_append_and_find() {
        let store = Arc::new(SessionStore::new());
        let repo = SessionRequestRepository::new(store);

        repo.append(sample_request("r1")).await.unwrap();
        repo.append(sample_request("r2")).await.unwrap();

        assert_eq!(repo.list().await.len(), 2);
        assert_eq!(repo.find("r2").await.unwrap().id, "r2");
        assert!(repo.find("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_mark_approved_updates_only_the_match() {
        let store = Arc::new(SessionStore::new());
        let repo = SessionRequestRepository::new(store);

        repo.append(sample_request("r1")).await.unwrap();
        repo.append(sample_request("r2")).await.unwrap();

        let updated = repo.mark_approved("r1", "p9").await.unwrap().unwrap();
        assert_eq!(updated.status, RequestStatus::Approved);
        assert_eq!(updated.payment_id.as_deref(), Some("p9"));

        let untouched = repo.find("r2").await.unwrap();
        assert_eq!(untouched.status, RequestStatus::Pending);
        assert!(untouched.payment_id.is_none());
    }

    #[tokio::test]
    async fn test_mark_approved_missing_id_is_none() {
        let store = Arc::new(SessionStore::new());
        let repo = SessionRequestRepository::new(store);
        repo.append(sample_request("r1")).await.unwrap();

        assert!(repo.mark_approved("ghost", "p1").await.unwrap().is_none());
        assert_eq!(
            repo.find("r1").await.unwrap().status,
            RequestStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_user_replace_and_clear() {
        let store = Arc::new(SessionStore::new());
        let repo = SessionUserRepository::new(store);

        assert!(repo.current().await.is_none());

        let user = User {
            id: "123".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            matric_number: "20/03SEN078".to_string(),
            role: "student".to_string(),
            faculty: None,
            department: None,
            level: None,
        };
        repo.replace(user.clone()).await.unwrap();
        assert_eq!(repo.current().await.unwrap(), user);

        repo.clear().await;
        assert!(repo.current().await.is_none());
    }

    #[tokio::test]
    async fn test_payments_share_the_store_with_requests() {
        let store = Arc::new(SessionStore::new());
        let requests = SessionRequestRepository::new(store.clone());
        let payments = SessionPaymentRepository::new(store);

        requests.append(sample_request("r1")).await.unwrap();
        payments
            .append(Payment {
                id: "p1".to_string(),
                amount: 70000,
                accommodation_id: "r1".to_string(),
                payment_method: PaymentMethod::CreditCard,
                status: PaymentStatus::Completed,
                date: records::now_iso(),
            })
            .await
            .unwrap();

        assert_eq!(requests.list().await.len(), 1);
        assert_eq!(payments.list().await.len(), 1);
    }
}
