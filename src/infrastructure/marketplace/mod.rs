//! Marketplace access for collection floor prices

pub mod fragment_client;

pub use fragment_client::FragmentClient;
