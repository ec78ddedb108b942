//! # Command Layer
//!
//! The record logic for each collection lives in its own submodule. Commands
//! take a [`StorageBackend`](crate::store::backend::StorageBackend), do one
//! whole-file read-modify-write, and return a [`CmdResult`].
//!
//! ## Outcomes and Channels
//!
//! A lookup that misses is not an error. It comes back as
//! [`Outcome::NotFound`] with a message, and the call returns `Ok`.
//!
//! Each [`CmdMessage`] names the [`Channel`] it belongs to:
//! - [`Channel::Log`]: emitted through the `log` facade when the command
//!   produces it, and also returned so the caller can inspect it.
//! - [`Channel::User`]: human-facing text. Never logged; the caller prints it.
//!
//! Which channel an operation uses is fixed per operation (see each module).
//!
//! ## Testing Strategy
//!
//! Command tests run against `MemBackend` and assert on `CmdResult`
//! contents and the stored collection.
//!
//! ## Command Modules
//!
//! - [`customer`]: customer records; absent file is an error
//! - [`hotel`]: hotel records and the live `Hotel` session operations
//! - [`reservation`]: reservation records; absent file is empty

use crate::model::{Customer, HotelRecord, Reservation};
use serde::Serialize;

pub mod customer;
pub mod hotel;
pub mod reservation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Log,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub channel: Channel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            channel: Channel::Log,
            content: content.into(),
        }
    }

    /// Route this message to the user-facing channel instead of the log.
    pub fn for_user(mut self) -> Self {
        self.channel = Channel::User;
        self
    }
}

/// What a command did, independent of how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Created,
    Found,
    #[default]
    Listed,
    Modified,
    /// Number of records removed.
    Removed(usize),
    NotFound,
    /// The backing collection does not exist.
    NoRecords,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub customers: Vec<Customer>,
    pub hotels: Vec<HotelRecord>,
    pub reservations: Vec<Reservation>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            ..Default::default()
        }
    }

    /// Record a message, emitting it first if it belongs to the log channel.
    pub fn add_message(&mut self, message: CmdMessage) {
        if message.channel == Channel::Log {
            match message.level {
                MessageLevel::Warning => log::warn!("{}", message.content),
                MessageLevel::Info | MessageLevel::Success => log::info!("{}", message.content),
            }
        }
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_hotels(mut self, hotels: Vec<HotelRecord>) -> Self {
        self.hotels = hotels;
        self
    }

    pub fn with_reservations(mut self, reservations: Vec<Reservation>) -> Self {
        self.reservations = reservations;
        self
    }

    pub fn user_messages(&self) -> impl Iterator<Item = &CmdMessage> {
        self.messages.iter().filter(|m| m.channel == Channel::User)
    }

    pub fn log_messages(&self) -> impl Iterator<Item = &CmdMessage> {
        self.messages.iter().filter(|m| m.channel == Channel::Log)
    }
}
