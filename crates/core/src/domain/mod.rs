pub mod agent;
pub mod faq;
pub mod metrics;
pub mod product;
pub mod response;
pub mod social;
pub mod transcript;
