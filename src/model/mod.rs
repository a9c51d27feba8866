//! Data models for petshop.
//!
//! - [`Owner`]: A person who may own zero or more pets
//! - [`Pet`]: An animal referencing its owner through `owner_id`
//! - [`NewOwner`] / [`NewPet`]: Insert payloads without a generated id

mod owner;
mod pet;

pub use owner::{NewOwner, Owner};
pub use pet::{NewPet, Pet};
