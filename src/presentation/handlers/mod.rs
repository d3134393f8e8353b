mod generate;
mod generate_json;
mod health;
mod job_status;
mod request;

pub use generate::generate_handler;
pub use generate_json::generate_json_handler;
pub use health::health_handler;
pub use job_status::job_status_handler;
pub use request::{GenerateRequest, RequestValidationError, validate};
