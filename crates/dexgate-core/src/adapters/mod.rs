//! Upstream adapters.
//!
//! Each adapter implements [`CreatureSource`](crate::data_source::CreatureSource)
//! over a specific REST service.

pub mod pokeapi;

pub use pokeapi::PokeApiAdapter;
