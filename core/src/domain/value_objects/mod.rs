//! Value objects exchanged between the wizard, the services and the adapters

pub mod notification;
pub mod redirect;
pub mod registration_request;
pub mod resolved_address;
pub mod session_token;

pub use notification::Notification;
pub use redirect::Redirect;
pub use registration_request::RegistrationRequest;
pub use resolved_address::ResolvedAddress;
pub use session_token::SessionToken;
