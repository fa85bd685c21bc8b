pub mod enquiry;
pub mod request;

pub use enquiry::{Channel, Enquiry, EnquiryPayload, Incoterm, Quantity, Topic, EMPTY_FIELD};
pub use request::ContactResponse;
