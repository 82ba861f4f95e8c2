pub mod body;
pub mod errors;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
