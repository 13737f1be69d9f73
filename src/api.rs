//! [Geo Together](https://www.geotogether.com) cloud API client.

mod client;
mod error;
mod models;
mod session;
pub mod transport;

pub use self::{
    client::{Client, DEFAULT_BASE_URL},
    error::{ApiError, AuthenticationError, Error},
    session::{Credentials, Session, State, SystemId},
    transport::{Request, Response, Transport, TransportError},
};
