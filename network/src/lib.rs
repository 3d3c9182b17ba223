mod error;
mod ffnn;
mod network;

pub use error::NetworkError;
pub use ffnn::{Activation, FfnnNetwork};
pub use network::Network;
