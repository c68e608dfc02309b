//! # Sunrise Repository
//!
//! Read-only access to the category catalog:
//!
//! ```text
//! CategoryMenuBuilder
//!   ↓  Arc<dyn CategoryRepository>   (catalog interface)
//! InMemoryCategoryRepository          (fixture / snapshot backed)
//!   ↓
//! CategoryCollection                  (roots + parent index)
//! ```

pub mod category;
pub mod collection;
pub mod memory;
pub mod traits;

pub use category::*;
pub use collection::*;
pub use memory::*;
pub use traits::*;
