mod email;

pub use email::{HttpEmailService, IEmailService, InMemoryEmailService, SentEmail};
