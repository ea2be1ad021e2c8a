pub mod app;
pub mod certs;
pub mod client;

pub use app::{FirebaseApp, FirebasePlatform};
pub use client::FirebaseClient;
