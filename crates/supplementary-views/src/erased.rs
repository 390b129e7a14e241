//! Type-erased factories for hosts that pool views as `Box<dyn Any>`.
//!
//! A host that serves several view types from one reuse pool cannot name a
//! single `SupplementaryViewFactory::View` type. [`ErasedViewFactory`] is the
//! object-safe face of any factory: the host passes a boxed view in and
//! gets a boxed view back. Every [`SupplementaryViewFactory`] implements it.
//!
//! The only new failure here is a view of the wrong concrete type, which is
//! reported as a [`RejectedView`] without running any configurator. The
//! rejected view travels back with the error so the host can still pool it.

use std::any::{Any, type_name};

use crate::error::Error;
use crate::factory::SupplementaryViewFactory;
use crate::index::IndexPath;
use crate::kind::SupplementaryKind;
use crate::logging::targets;
use crate::view::{ReusableView, ViewIdentifier};

/// Type alias for a boxed, type-erased factory.
pub type BoxedViewFactory<T, H> = Box<dyn ErasedViewFactory<T, H> + Send + Sync>;

/// A view that an erased factory refused to configure.
///
/// Holds the [`Error::ViewTypeMismatch`] describing the refusal and the
/// untouched view the host passed in.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct RejectedView {
    error: Error,
    view: Box<dyn Any>,
}

impl RejectedView {
    /// Returns the error that caused the rejection.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Returns the rejected view, dropping the error.
    pub fn into_view(self) -> Box<dyn Any> {
        self.view
    }

    /// Splits the rejection into its error and the rejected view.
    pub fn into_parts(self) -> (Error, Box<dyn Any>) {
        (self.error, self.view)
    }
}

impl From<RejectedView> for Error {
    fn from(rejected: RejectedView) -> Self {
        rejected.error
    }
}

/// Object-safe form of [`SupplementaryViewFactory`].
pub trait ErasedViewFactory<T: ?Sized, H: ?Sized> {
    /// Returns the name of the concrete view type this factory expects.
    fn view_type_name(&self) -> &'static str;

    /// See [`SupplementaryViewFactory::reuse_identifier`].
    fn reuse_identifier_any(
        &self,
        item: Option<&T>,
        kind: &SupplementaryKind,
        index_path: &IndexPath,
    ) -> ViewIdentifier;

    /// Configures a boxed view.
    ///
    /// If `view` is not the factory's concrete view type, no configurator
    /// runs and the view comes back inside a [`RejectedView`] carrying
    /// [`Error::ViewTypeMismatch`].
    fn configure_any(
        &self,
        view: Box<dyn Any>,
        item: Option<&T>,
        kind: &SupplementaryKind,
        host: &H,
        index_path: &IndexPath,
    ) -> Result<Box<dyn Any>, RejectedView>;
}

impl<F, T: ?Sized, H: ?Sized> ErasedViewFactory<T, H> for F
where
    F: SupplementaryViewFactory<Item = T, Host = H>,
    F::View: 'static,
{
    fn view_type_name(&self) -> &'static str {
        type_name::<F::View>()
    }

    fn reuse_identifier_any(
        &self,
        item: Option<&T>,
        kind: &SupplementaryKind,
        index_path: &IndexPath,
    ) -> ViewIdentifier {
        self.reuse_identifier(item, kind, index_path)
    }

    fn configure_any(
        &self,
        view: Box<dyn Any>,
        item: Option<&T>,
        kind: &SupplementaryKind,
        host: &H,
        index_path: &IndexPath,
    ) -> Result<Box<dyn Any>, RejectedView> {
        let view = view.downcast::<F::View>().map_err(|view| {
            let expected = type_name::<F::View>();
            let identifier = <F::View as ReusableView>::REUSE_IDENTIFIER;
            tracing::debug!(
                target: targets::ERASED,
                expected,
                identifier,
                ?index_path,
                "host supplied a view of the wrong type"
            );
            RejectedView {
                error: Error::view_type_mismatch(expected, identifier),
                view,
            }
        })?;

        let view = self.configure(*view, item, kind, host, index_path);
        Ok(Box::new(view))
    }
}
