//! A ready-made titled supplementary view and its style configuration.
//!
//! [`TitledSupplementaryView`] is the header/footer most grids need: a single
//! line of text over an optional background. [`TitledViewStyle`] holds its
//! static look and can be loaded from a theme file, then passed straight to
//! a factory as the style configurator.
//!
//! # Example
//!
//! ```
//! use supplementary_views::{TitledViewFactory, TitledViewStyle, TitleAlignment};
//!
//! struct Grid;
//!
//! let style = TitledViewStyle::from_toml_str(r##"
//!     font_size = 15.0
//!     bold = true
//!     background_color = "#F2F2F7"
//!     alignment = "center"
//! "##).unwrap();
//! assert_eq!(style.alignment, TitleAlignment::Center);
//!
//! let factory = TitledViewFactory::<String, Grid>::new(
//!     style.into_configurator(),
//!     |mut view, item, _kind, _grid, _index_path| {
//!         view.title = item.cloned().unwrap_or_default();
//!         view
//!     },
//! );
//! # let _ = factory;
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::factory::ViewFactory;
use crate::logging::targets;
use crate::view::ReusableView;

/// A factory producing [`TitledSupplementaryView`]s.
pub type TitledViewFactory<T, H> = ViewFactory<TitledSupplementaryView, T, H>;

/// Horizontal placement of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlignment {
    /// Aligned to the leading edge.
    #[default]
    Leading,
    /// Centered.
    Center,
    /// Aligned to the trailing edge.
    Trailing,
}

/// A supplementary view showing a single title.
///
/// Hosts create these with [`Default`] and recycle them through their reuse
/// pool; [`prepare_for_reuse`](Self::prepare_for_reuse) clears the content a
/// previous item left behind while keeping the style.
#[derive(Debug, Clone, PartialEq)]
pub struct TitledSupplementaryView {
    /// The title text.
    pub title: String,
    /// Font size in points.
    pub font_size: f32,
    /// Whether the title uses a bold weight.
    pub bold: bool,
    /// Title color.
    pub text_color: Color,
    /// Background fill, or `None` for a transparent view.
    pub background_color: Option<Color>,
    /// Horizontal placement of the title.
    pub alignment: TitleAlignment,
    /// Horizontal inset of the title from the view edges.
    pub insets: f32,
}

impl Default for TitledSupplementaryView {
    fn default() -> Self {
        let style = TitledViewStyle::default();
        Self {
            title: String::new(),
            font_size: style.font_size,
            bold: style.bold,
            text_color: style.text_color,
            background_color: style.background_color,
            alignment: style.alignment,
            insets: style.insets,
        }
    }
}

impl TitledSupplementaryView {
    /// Creates a view with the given title and default style.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Clears per-item content before the view is handed out again.
    pub fn prepare_for_reuse(&mut self) {
        self.title.clear();
    }
}

impl ReusableView for TitledSupplementaryView {
    const REUSE_IDENTIFIER: &'static str = "TitledSupplementaryView";
}

/// Static visual attributes of a [`TitledSupplementaryView`].
///
/// Missing fields fall back to their defaults when deserializing, so a theme
/// file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitledViewStyle {
    /// Font size in points.
    pub font_size: f32,
    /// Whether titles use a bold weight.
    pub bold: bool,
    /// Title color.
    pub text_color: Color,
    /// Background fill, or `None` to leave the view transparent.
    pub background_color: Option<Color>,
    /// Horizontal placement of the title.
    pub alignment: TitleAlignment,
    /// Horizontal inset of the title from the view edges.
    pub insets: f32,
}

impl Default for TitledViewStyle {
    fn default() -> Self {
        Self {
            font_size: 13.0,
            bold: false,
            text_color: Color::DARK_GRAY,
            background_color: None,
            alignment: TitleAlignment::Leading,
            insets: 16.0,
        }
    }
}

impl TitledViewStyle {
    /// Creates the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a style from a TOML table.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| {
            tracing::warn!(target: targets::STYLE, "Failed to parse titled view style: {}", e);
            e.into()
        })
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the bold weight.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the title alignment.
    pub fn with_alignment(mut self, alignment: TitleAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the horizontal insets.
    pub fn with_insets(mut self, insets: f32) -> Self {
        self.insets = insets;
        self
    }

    /// Applies this style to a view. The title is left untouched.
    pub fn apply(&self, view: &mut TitledSupplementaryView) {
        view.font_size = self.font_size;
        view.bold = self.bold;
        view.text_color = self.text_color;
        view.background_color = self.background_color;
        view.alignment = self.alignment;
        view.insets = self.insets;
    }

    /// Turns this style into a style configurator for a factory.
    pub fn into_configurator(
        self,
    ) -> impl Fn(&mut TitledSupplementaryView) + Send + Sync + 'static {
        move |view| self.apply(view)
    }
}
