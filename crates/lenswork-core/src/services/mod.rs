pub mod descriptions;

pub use descriptions::{DescriptionService, DescriptionTicket};
