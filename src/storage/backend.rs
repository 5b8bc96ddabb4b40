//! Listing source abstraction.
//!
//! The filter engine treats the listing collection as injected, read-only
//! input. [`ListingSource`] is the seam the worker loads it through, so the
//! catalog format can change without touching the application layer.

use crate::domain::error::Result;
use crate::domain::Listing;

/// A read-only provider of listings.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::storage::JsonCatalog): a JSON catalog file
///
/// # Examples
///
/// ```no_run
/// use propsift::storage::{JsonCatalog, ListingSource};
///
/// let catalog = JsonCatalog::new("/tmp/listings.json");
/// let listings = catalog.load_listings()?;
/// # Ok::<(), propsift::PropsiftError>(())
/// ```
pub trait ListingSource: Send {
    /// Loads every listing, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying catalog cannot be read or parsed.
    /// Individual malformed attributes are not errors; they degrade to
    /// defaults.
    fn load_listings(&self) -> Result<Vec<Listing>>;

    /// Human-readable location of the source, for logs and messages.
    fn location(&self) -> String;
}
