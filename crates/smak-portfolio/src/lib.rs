//! Photo portfolios for Smak.
//!
//! A portfolio is a directory of sets; a set is a directory of photos with an
//! optional description template named after the set:
//!
//! ```text
//! photos/
//! ├── travel/
//! │   ├── travel.html.twig
//! │   ├── beach.jpg
//! │   └── harbour.PNG
//! └── portraits/
//!     └── anna.jpeg
//! ```
//!
//! [`PortfolioPlugin`] exposes the collection to shells as `%plugin:portfolio%`.

mod collection;
mod error;
mod plugin;
mod set;

pub use collection::Collection;
pub use error::PortfolioError;
pub use plugin::PortfolioPlugin;
pub use set::{DEFAULT_PHOTO_EXTENSIONS, DEFAULT_TEMPLATE_EXTENSIONS, Photo, Set};
