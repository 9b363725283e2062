// Core library for the student accommodation booking flow

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod filter;
pub mod payment;
pub mod records;
pub mod repository;
pub mod routing;
pub mod store;

// Re-export key types for convenience
pub use auth::{AuthConfig, AuthError, AuthService, RegistrationForm};
pub use booking::{BookingError, BookingFlow, FlowState};
pub use catalog::{Catalog, CatalogError, Hostel, HostelGender, Room, RoomKind};
pub use filter::{
    available_count, filter_rooms, group_by_kind, Availability, PriceRange, RoomFilter,
};
pub use payment::{
    PaymentError, PaymentGateway, PaymentProcessor, ProcessorConfig, RetryConfig,
    SimulatedGateway,
};
pub use records::{
    AccommodationRequest, Payment, PaymentMethod, PaymentStatus, RequestStatus, StayDuration,
    User,
};
pub use repository::{
    PaymentRepository, RequestRepository, SessionPaymentRepository, SessionRequestRepository,
    SessionUserRepository, UserRepository,
};
pub use routing::{resolve, Destination, Route};
pub use store::{SessionStore, StoreError, StoreStatsReport};
