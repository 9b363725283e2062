// Booking flow state machine: room selection -> confirmation -> persisted
// accommodation request. Submission is fire-and-forget; there is no
// rollback path and no availability re-check at submission time.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::catalog::{Catalog, Hostel, Room};
use crate::records::{self, AccommodationRequest, RequestStatus, StayDuration};
use crate::repository::RequestRepository;
use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Browsing,
    RoomSelected,
    ConfirmationPending,
    Requested,
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlowState::Browsing => "browsing",
            FlowState::RoomSelected => "room selected",
            FlowState::ConfirmationPending => "confirmation pending",
            FlowState::Requested => "requested",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("hostel '{0}' not found")]
    HostelNotFound(String),

    #[error("room '{0}' not found in this hostel")]
    RoomNotFound(String),

    #[error("room '{0}' is occupied")]
    RoomUnavailable(String),

    #[error("{action} is not allowed while {state}")]
    InvalidTransition {
        action: &'static str,
        state: FlowState,
    },

    #[error("could not save the accommodation request")]
    Storage(#[from] StoreError),
}

// One user's walk through the booking flow for a single hostel.
pub struct BookingFlow {
    hostel: Hostel,
    state: FlowState,
    selected: Option<Room>,
    duration: StayDuration,
    requests: Arc<dyn RequestRepository>,
}

impl BookingFlow {
    // Unknown hostel ids fail here, before any flow state exists; the
    // caller redirects to the hostel list and no request is created.
    pub fn open(
        catalog: &Catalog,
        hostel_id: &str,
        requests: Arc<dyn RequestRepository>,
    ) -> Result<Self, BookingError> {
        let hostel = catalog
            .hostel(hostel_id)
            .ok_or_else(|| BookingError::HostelNotFound(hostel_id.to_string()))?
            .clone();

        Ok(Self {
            hostel,
            state: FlowState::Browsing,
            selected: None,
            duration: StayDuration::FullYear,
            requests,
        })
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn hostel(&self) -> &Hostel {
        &self.hostel
    }

    pub fn selected_room(&self) -> Option<&Room> {
        self.selected.as_ref()
    }

    // Record a room into the draft. Occupied rooms cannot be selected;
    // re-selecting a different room before confirming is allowed. Nothing
    // is persisted yet.
    pub fn select_room(&mut self, room_id: &str) -> Result<(), BookingError> {
        match self.state {
            FlowState::Browsing | FlowState::RoomSelected => {}
            state => {
                return Err(BookingError::InvalidTransition {
                    action: "select_room",
                    state,
                })
            }
        }

        let room = self
            .hostel
            .room(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_string()))?;
        if !room.available {
            return Err(BookingError::RoomUnavailable(room_id.to_string()));
        }

        debug!(hostel = %self.hostel.id, room = %room_id, "room selected");
        self.selected = Some(room.clone());
        self.state = FlowState::RoomSelected;
        Ok(())
    }

    pub fn set_duration(&mut self, duration: StayDuration) {
        self.duration = duration;
    }

    pub fn duration(&self) -> StayDuration {
        self.duration
    }

    // Pure visibility transition; no data changes.
    pub fn confirm_selection(&mut self) -> Result<(), BookingError> {
        if self.state != FlowState::RoomSelected {
            return Err(BookingError::InvalidTransition {
                action: "confirm_selection",
                state: self.state,
            });
        }
        self.state = FlowState::ConfirmationPending;
        Ok(())
    }

    // Closing the confirmation dialog returns to the selected room.
    pub fn cancel_confirmation(&mut self) -> Result<(), BookingError> {
        if self.state != FlowState::ConfirmationPending {
            return Err(BookingError::InvalidTransition {
                action: "cancel_confirmation",
                state: self.state,
            });
        }
        self.state = FlowState::RoomSelected;
        Ok(())
    }

    // Synthesize the accommodation request and append it to the request
    // store. The room's availability is not re-checked here: two sessions
    // that selected the same room both succeed.
    pub async fn submit_request(&mut self) -> Result<AccommodationRequest, BookingError> {
        if self.state != FlowState::ConfirmationPending {
            return Err(BookingError::InvalidTransition {
                action: "submit_request",
                state: self.state,
            });
        }
        let room = self
            .selected
            .as_ref()
            .ok_or(BookingError::InvalidTransition {
                action: "submit_request",
                state: FlowState::Browsing,
            })?;

        let request = AccommodationRequest {
            id: records::next_id(),
            hostel_id: self.hostel.id.clone(),
            hostel_name: self.hostel.name.clone(),
            room_id: room.id.clone(),
            room_type: room.kind,
            duration: self.duration,
            price: self.duration.price_for(room.price),
            status: RequestStatus::Pending,
            created_at: records::now_iso(),
            payment_id: None,
        };

        if let Err(err) = self.requests.append(request.clone()).await {
            error!(request_id = %request.id, %err, "failed to persist accommodation request");
            return Err(err.into());
        }

        info!(request_id = %request.id, room = %request.room_id, "accommodation request submitted");
        self.state = FlowState::Requested;
        Ok(request)
    }
}
