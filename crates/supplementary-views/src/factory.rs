//! Supplementary view factories.
//!
//! A factory sits between a host grid, which only knows how to ask for a
//! reuse identifier and for a configured view, and the application code
//! that knows how a header or footer should look and what it should show.
//!
//! Configuration is split in two:
//!
//! - **Style**: static visual attributes (fonts, colors, backgrounds). It runs
//!   on every `configure` call and sees nothing but the view.
//! - **Data**: binds the item at a position into the view's content. It runs
//!   after style and receives the item, kind, host and index path.
//!
//! # Usage
//!
//! ```
//! use supplementary_views::{
//!     Color, IndexPath, SupplementaryKind, SupplementaryViewFactory, TitledSupplementaryView,
//!     TitledViewFactory,
//! };
//!
//! struct Grid;
//!
//! let factory = TitledViewFactory::<String, Grid>::new(
//!     |view| view.background_color = Some(Color::LIGHT_GRAY),
//!     |mut view, item, _kind, _grid, _index_path| {
//!         view.title = item.cloned().unwrap_or_default();
//!         view
//!     },
//! );
//!
//! let title = String::from("Fruit");
//! let view = factory.configure(
//!     TitledSupplementaryView::default(),
//!     Some(&title),
//!     &SupplementaryKind::HEADER,
//!     &Grid,
//!     &IndexPath::for_section(0),
//! );
//! assert_eq!(view.title, "Fruit");
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::index::IndexPath;
use crate::kind::SupplementaryKind;
use crate::logging::targets;
use crate::view::{ReusableView, ViewIdentifier};

/// The capability a host grid needs from a supplementary view factory.
///
/// The host asks for a reuse identifier, dequeues (or creates) a view for
/// that identifier from its pool, and hands it to [`configure`]. It then
/// displays the view that `configure` returns, which need not be the
/// instance it passed in.
///
/// [`configure`]: SupplementaryViewFactory::configure
pub trait SupplementaryViewFactory {
    /// The data item bound to a position.
    type Item: ?Sized;
    /// The concrete view type this factory configures.
    type View: ReusableView;
    /// The host container passed through to data configuration.
    type Host: ?Sized;

    /// Returns the reuse identifier of the view to dequeue for a position.
    fn reuse_identifier(
        &self,
        item: Option<&Self::Item>,
        kind: &SupplementaryKind,
        index_path: &IndexPath,
    ) -> ViewIdentifier;

    /// Applies style and then data configuration to `view`, returning the
    /// view to display.
    fn configure(
        &self,
        view: Self::View,
        item: Option<&Self::Item>,
        kind: &SupplementaryKind,
        host: &Self::Host,
        index_path: &IndexPath,
    ) -> Self::View;
}

impl<F> SupplementaryViewFactory for Arc<F>
where
    F: SupplementaryViewFactory + ?Sized,
{
    type Item = F::Item;
    type View = F::View;
    type Host = F::Host;

    fn reuse_identifier(
        &self,
        item: Option<&Self::Item>,
        kind: &SupplementaryKind,
        index_path: &IndexPath,
    ) -> ViewIdentifier {
        (**self).reuse_identifier(item, kind, index_path)
    }

    fn configure(
        &self,
        view: Self::View,
        item: Option<&Self::Item>,
        kind: &SupplementaryKind,
        host: &Self::Host,
        index_path: &IndexPath,
    ) -> Self::View {
        (**self).configure(view, item, kind, host, index_path)
    }
}

/// Type alias for a style configurator.
///
/// Applies data-independent visual attributes to a view.
pub type StyleConfigurator<V> = Arc<dyn Fn(&mut V) + Send + Sync>;

/// Type alias for a data configurator.
///
/// Binds the item (or its absence) into the view and returns the view to
/// display.
pub type DataConfigurator<V, T, H> =
    Arc<dyn Fn(V, Option<&T>, &SupplementaryKind, &H, &IndexPath) -> V + Send + Sync>;

/// A supplementary view factory built from a style configurator and a data
/// configurator.
///
/// The factory holds no state besides its two configurators. It never keeps
/// a view past a `configure` call, and cloning it shares the configurators.
///
/// Every call to [`reuse_identifier`](SupplementaryViewFactory::reuse_identifier)
/// returns `V::REUSE_IDENTIFIER`, whatever the item, kind or index path. One
/// factory serves exactly one view type; use separate factories when headers
/// and footers need different view types.
pub struct ViewFactory<V, T: ?Sized, H: ?Sized> {
    style: StyleConfigurator<V>,
    data: DataConfigurator<V, T, H>,
}

impl<V, T: ?Sized, H: ?Sized> ViewFactory<V, T, H>
where
    V: ReusableView,
{
    /// Creates a factory from a style configurator and a data configurator.
    ///
    /// The closures' parameter types come from `V`, `T` and `H`, so name them
    /// at the call site with a turbofish (or annotate the closure parameters).
    /// A type annotation on the binding alone leaves them unknown while the
    /// closure bodies are checked.
    ///
    /// ```
    /// use supplementary_views::{
    ///     IndexPath, ReusableView, SupplementaryKind, SupplementaryViewFactory, ViewFactory,
    /// };
    ///
    /// #[derive(Default)]
    /// struct CountView {
    ///     text: String,
    ///     dimmed: bool,
    /// }
    ///
    /// impl ReusableView for CountView {
    ///     const REUSE_IDENTIFIER: &'static str = "CountView";
    /// }
    ///
    /// struct Grid {
    ///     item_count: usize,
    /// }
    ///
    /// let factory = ViewFactory::<CountView, str, Grid>::new(
    ///     |view| view.dimmed = true,
    ///     |mut view, item, _kind, grid, _index_path| {
    ///         view.text = format!("{}: {}", item.unwrap_or("Total"), grid.item_count);
    ///         view
    ///     },
    /// );
    ///
    /// let view = factory.configure(
    ///     CountView::default(),
    ///     None,
    ///     &SupplementaryKind::FOOTER,
    ///     &Grid { item_count: 12 },
    ///     &IndexPath::for_section(0),
    /// );
    /// assert_eq!(view.text, "Total: 12");
    /// assert!(view.dimmed);
    /// ```
    pub fn new<S, D>(style: S, data: D) -> Self
    where
        S: Fn(&mut V) + Send + Sync + 'static,
        D: Fn(V, Option<&T>, &SupplementaryKind, &H, &IndexPath) -> V + Send + Sync + 'static,
    {
        Self::from_arcs(Arc::new(style), Arc::new(data))
    }

    /// Creates a factory from configurators that are already shared.
    pub fn from_arcs(style: StyleConfigurator<V>, data: DataConfigurator<V, T, H>) -> Self {
        tracing::trace!(
            target: targets::FACTORY,
            view = V::REUSE_IDENTIFIER,
            "created supplementary view factory"
        );
        Self { style, data }
    }

    /// Returns a human-readable description of this factory's type.
    pub fn description(&self) -> String {
        format!(
            "<ViewFactory<{}, {}>>",
            short_type_name::<V>(),
            short_type_name::<T>()
        )
    }
}

impl<V, T: ?Sized, H: ?Sized> SupplementaryViewFactory for ViewFactory<V, T, H>
where
    V: ReusableView,
{
    type Item = T;
    type View = V;
    type Host = H;

    fn reuse_identifier(
        &self,
        _item: Option<&T>,
        _kind: &SupplementaryKind,
        _index_path: &IndexPath,
    ) -> ViewIdentifier {
        V::view_identifier()
    }

    fn configure(
        &self,
        mut view: V,
        item: Option<&T>,
        kind: &SupplementaryKind,
        host: &H,
        index_path: &IndexPath,
    ) -> V {
        (self.style)(&mut view);
        (self.data)(view, item, kind, host, index_path)
    }
}

impl<V, T: ?Sized, H: ?Sized> Clone for ViewFactory<V, T, H> {
    fn clone(&self) -> Self {
        Self {
            style: Arc::clone(&self.style),
            data: Arc::clone(&self.data),
        }
    }
}

impl<V, T: ?Sized, H: ?Sized> fmt::Display for ViewFactory<V, T, H>
where
    V: ReusableView,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl<V, T: ?Sized, H: ?Sized> fmt::Debug for ViewFactory<V, T, H>
where
    V: ReusableView,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewFactory")
            .field("reuse_identifier", &V::REUSE_IDENTIFIER)
            .finish_non_exhaustive()
    }
}

/// Strips module paths from every segment of a type name, so
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut token = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            token.push(c);
        } else {
            out.push_str(token.rsplit("::").next().unwrap_or_default());
            token.clear();
            out.push(c);
        }
    }
    out.push_str(token.rsplit("::").next().unwrap_or_default());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct LabelView {
        id: u32,
        text: String,
        background: Option<&'static str>,
    }

    impl ReusableView for LabelView {
        const REUSE_IDENTIFIER: &'static str = "LabelView";
    }

    struct Grid {
        item_count: usize,
    }

    fn label_factory() -> ViewFactory<LabelView, String, Grid> {
        ViewFactory::<LabelView, String, Grid>::new(
            |view: &mut LabelView| view.background = Some("gray"),
            |mut view: LabelView,
             item: Option<&String>,
             _kind: &SupplementaryKind,
             _grid: &Grid,
             _path: &IndexPath| {
                view.text = item.cloned().unwrap_or_else(|| "—".to_string());
                view
            },
        )
    }

    #[test]
    fn test_reuse_identifier_is_constant() {
        let factory = label_factory();
        let item = "Q3 Sales".to_string();

        let header = SupplementaryKind::HEADER;
        let footer = SupplementaryKind::FOOTER;
        let badge = SupplementaryKind::new("badge");

        let ids = [
            factory.reuse_identifier(Some(&item), &header, &IndexPath::for_section(0)),
            factory.reuse_identifier(None, &header, &IndexPath::for_section(0)),
            factory.reuse_identifier(Some(&item), &footer, &IndexPath::new(4, 2)),
            factory.reuse_identifier(None, &badge, &IndexPath::new(9, 9)),
        ];

        for id in ids {
            assert_eq!(id, LabelView::view_identifier());
        }
    }

    #[test]
    fn test_style_runs_before_data_exactly_once() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let style_calls = calls.clone();
        let data_calls = calls.clone();
        let factory = ViewFactory::<LabelView, String, Grid>::new(
            move |_view| style_calls.lock().push("style"),
            move |view, _item, _kind, _grid, _path| {
                data_calls.lock().push("data");
                view
            },
        );

        factory.configure(
            LabelView::default(),
            None,
            &SupplementaryKind::HEADER,
            &Grid { item_count: 0 },
            &IndexPath::for_section(0),
        );

        assert_eq!(*calls.lock(), vec!["style", "data"]);
    }

    #[test]
    fn test_data_sees_styled_view_and_all_inputs() {
        let seen = Arc::new(Mutex::new(None));

        let recv = seen.clone();
        let factory = ViewFactory::<LabelView, String, Grid>::new(
            |view| view.background = Some("blue"),
            move |view, item, kind, grid, path| {
                *recv.lock() = Some((
                    view.background,
                    item.cloned(),
                    kind.clone(),
                    grid.item_count,
                    *path,
                ));
                view
            },
        );

        let item = "North".to_string();
        factory.configure(
            LabelView::default(),
            Some(&item),
            &SupplementaryKind::FOOTER,
            &Grid { item_count: 12 },
            &IndexPath::new(3, 1),
        );

        let seen = seen.lock().take().unwrap();
        assert_eq!(seen.0, Some("blue"));
        assert_eq!(seen.1.as_deref(), Some("North"));
        assert_eq!(seen.2, SupplementaryKind::FOOTER);
        assert_eq!(seen.3, 12);
        assert_eq!(seen.4, IndexPath::new(3, 1));
    }

    #[test]
    fn test_configure_returns_data_result() {
        let factory = ViewFactory::<LabelView, String, Grid>::new(
            |view| view.background = Some("red"),
            |view, _item, _kind, _grid, _path| LabelView {
                id: view.id + 100,
                text: "replacement".into(),
                background: None,
            },
        );

        let original = LabelView {
            id: 1,
            ..Default::default()
        };
        let configured = factory.configure(
            original,
            None,
            &SupplementaryKind::HEADER,
            &Grid { item_count: 0 },
            &IndexPath::for_section(0),
        );

        assert_eq!(configured.id, 101);
        assert_eq!(configured.text, "replacement");
        assert_eq!(configured.background, None);
    }

    #[test]
    fn test_configure_is_idempotent() {
        let factory = label_factory();
        let grid = Grid { item_count: 1 };
        let item = "Totals".to_string();
        let path = IndexPath::for_section(1);

        let once = factory.configure(
            LabelView::default(),
            Some(&item),
            &SupplementaryKind::HEADER,
            &grid,
            &path,
        );
        let twice = factory.configure(
            once.clone(),
            Some(&item),
            &SupplementaryKind::HEADER,
            &grid,
            &path,
        );

        assert_eq!(once, twice);
    }

    #[test]
    fn test_absent_item() {
        let factory = label_factory();
        let view = factory.configure(
            LabelView::default(),
            None,
            &SupplementaryKind::HEADER,
            &Grid { item_count: 0 },
            &IndexPath::for_section(0),
        );
        assert_eq!(view.text, "—");
        assert_eq!(view.background, Some("gray"));
    }

    #[test]
    fn test_factories_do_not_share_state() {
        let a = ViewFactory::<LabelView, String, Grid>::new(
            |view| view.background = Some("a"),
            |mut view, item, _kind, _grid, _path| {
                view.text = format!("a:{}", item.map(String::as_str).unwrap_or(""));
                view
            },
        );
        let b = ViewFactory::<LabelView, String, Grid>::new(
            |view| view.background = Some("b"),
            |mut view, item, _kind, _grid, _path| {
                view.text = format!("b:{}", item.map(String::as_str).unwrap_or(""));
                view
            },
        );

        let grid = Grid { item_count: 2 };
        let first = "one".to_string();
        let second = "two".to_string();
        let path = IndexPath::for_section(0);

        let kind = SupplementaryKind::HEADER;

        let va = a.configure(LabelView::default(), Some(&first), &kind, &grid, &path);
        let vb = b.configure(LabelView::default(), Some(&second), &kind, &grid, &path);
        let va2 = a.configure(LabelView::default(), Some(&first), &kind, &grid, &path);

        assert_eq!(va.text, "a:one");
        assert_eq!(va.background, Some("a"));
        assert_eq!(vb.text, "b:two");
        assert_eq!(vb.background, Some("b"));
        assert_eq!(va, va2);
    }

    #[test]
    fn test_clone_shares_configurators() {
        let calls = Arc::new(Mutex::new(0));

        let recv = calls.clone();
        let factory = ViewFactory::<LabelView, String, Grid>::new(
            move |_view| *recv.lock() += 1,
            |view, _item, _kind, _grid, _path| view,
        );
        let cloned = factory.clone();

        let grid = Grid { item_count: 0 };
        let path = IndexPath::for_section(0);
        let kind = SupplementaryKind::HEADER;
        factory.configure(LabelView::default(), None, &kind, &grid, &path);
        cloned.configure(LabelView::default(), None, &kind, &grid, &path);

        assert_eq!(*calls.lock(), 2);
    }

    #[test]
    #[should_panic(expected = "style failed")]
    fn test_style_panic_propagates() {
        let factory = ViewFactory::<LabelView, String, Grid>::new(
            |_view| panic!("style failed"),
            |view, _item, _kind, _grid, _path| view,
        );
        factory.configure(
            LabelView::default(),
            None,
            &SupplementaryKind::HEADER,
            &Grid { item_count: 0 },
            &IndexPath::for_section(0),
        );
    }

    #[test]
    #[should_panic(expected = "data failed")]
    fn test_data_panic_propagates_after_style() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let style_calls = calls.clone();
        let data_calls = calls.clone();
        let factory = ViewFactory::<LabelView, String, Grid>::new(
            move |_view| style_calls.lock().push("style"),
            move |_view, _item, _kind, _grid, _path| {
                assert_eq!(*data_calls.lock(), vec!["style"]);
                panic!("data failed")
            },
        );
        factory.configure(
            LabelView::default(),
            None,
            &SupplementaryKind::HEADER,
            &Grid { item_count: 0 },
            &IndexPath::for_section(0),
        );
    }

    #[test]
    fn test_arc_factory() {
        let factory = Arc::new(label_factory());
        let item = "Shared".to_string();
        let view = factory.configure(
            LabelView::default(),
            Some(&item),
            &SupplementaryKind::HEADER,
            &Grid { item_count: 0 },
            &IndexPath::for_section(0),
        );
        assert_eq!(view.text, "Shared");
        assert_eq!(
            factory.reuse_identifier(None, &SupplementaryKind::HEADER, &IndexPath::default()),
            "LabelView"
        );
    }

    #[test]
    fn test_description() {
        let factory = label_factory();
        assert_eq!(factory.description(), "<ViewFactory<LabelView, String>>");
        assert_eq!(factory.to_string(), factory.description());
        assert!(format!("{:?}", factory).contains("LabelView"));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
        assert_eq!(short_type_name::<Option<&str>>(), "Option<&str>");
    }
}
