//! Supplementary view factories for sectioned grids and lists.
//!
//! Grids show headers and footers ("supplementary views") next to their
//! item views. The host grid owns the reuse pool and the layout; this crate
//! supplies the piece in between: a factory that tells the host which view
//! type to dequeue and then configures the dequeued view for a position.
//!
//! - **Factories**: [`SupplementaryViewFactory`] is what the host calls;
//!   [`ViewFactory`] implements it from a style closure and a data closure
//! - **Type erasure**: [`ErasedViewFactory`] for hosts pooling `Box<dyn Any>`
//! - **Titled views**: [`TitledSupplementaryView`] with a loadable
//!   [`TitledViewStyle`]
//!
//! # Example
//!
//! ```
//! use supplementary_views::prelude::*;
//!
//! struct Grid {
//!     sections: Vec<String>,
//! }
//!
//! let factory = TitledViewFactory::<String, Grid>::new(
//!     TitledViewStyle::new().with_bold(true).into_configurator(),
//!     |mut view, item, _kind, grid, index_path| {
//!         let count = grid.sections.len();
//!         view.title = match item {
//!             Some(title) => format!("{} ({}/{})", title, index_path.section() + 1, count),
//!             None => "—".to_string(),
//!         };
//!         view
//!     },
//! );
//!
//! let grid = Grid { sections: vec!["Fruit".into(), "Vegetables".into()] };
//! let path = IndexPath::for_section(1);
//! let kind = SupplementaryKind::HEADER;
//! let item = grid.sections.get(path.section());
//!
//! let identifier = factory.reuse_identifier(item, &kind, &path);
//! assert_eq!(identifier, "TitledSupplementaryView");
//!
//! let view = factory.configure(TitledSupplementaryView::default(), item, &kind, &grid, &path);
//! assert_eq!(view.title, "Vegetables (2/2)");
//! assert!(view.bold);
//! ```

pub mod color;
pub mod erased;
pub mod factory;
pub mod index;
pub mod kind;
pub mod logging;
pub mod titled;
pub mod view;

mod error;

pub use color::Color;
pub use erased::{BoxedViewFactory, ErasedViewFactory, RejectedView};
pub use error::{Error, Result};
pub use factory::{DataConfigurator, StyleConfigurator, SupplementaryViewFactory, ViewFactory};
pub use index::IndexPath;
pub use kind::SupplementaryKind;
pub use titled::{TitleAlignment, TitledSupplementaryView, TitledViewFactory, TitledViewStyle};
pub use view::{ReusableView, ViewIdentifier};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::erased::{BoxedViewFactory, ErasedViewFactory, RejectedView};
    pub use crate::factory::{SupplementaryViewFactory, ViewFactory};
    pub use crate::index::IndexPath;
    pub use crate::kind::SupplementaryKind;
    pub use crate::titled::{
        TitleAlignment, TitledSupplementaryView, TitledViewFactory, TitledViewStyle,
    };
    pub use crate::view::{ReusableView, ViewIdentifier};
}
