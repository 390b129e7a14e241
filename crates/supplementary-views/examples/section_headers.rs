//! Section header walkthrough
//!
//! Builds a titled header factory from a TOML style, then configures the
//! header of every section of a small in-memory grid, recycling one view the
//! way a host grid would while scrolling.
//!
//! Run with: RUST_LOG=supplementary_views=trace cargo run -p supplementary-views --example section_headers

use supplementary_views::prelude::*;
use tracing_subscriber::EnvFilter;

const STYLE: &str = r##"
font_size = 15.0
bold = true
text_color = "#1C1C1E"
background_color = "#F2F2F7"
alignment = "leading"
"##;

struct Grid {
    titles: Vec<Option<String>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let style = TitledViewStyle::from_toml_str(STYLE)?;
    let factory = TitledViewFactory::<String, Grid>::new(
        style.into_configurator(),
        |mut view, item, kind, grid, index_path| {
            let count = grid.titles.len();
            view.title = match item {
                Some(title) => title.to_uppercase(),
                None => format!("{} {} of {}", kind, index_path.section() + 1, count),
            };
            view
        },
    );
    println!("{factory}");

    let grid = Grid {
        titles: vec![Some("Fruit".into()), None, Some("Dairy".into())],
    };
    let kind = SupplementaryKind::HEADER;

    let mut recycled = TitledSupplementaryView::default();
    for (section, title) in grid.titles.iter().enumerate() {
        let path = IndexPath::for_section(section);
        let identifier = factory.reuse_identifier(title.as_ref(), &kind, &path);

        recycled.prepare_for_reuse();
        let view = factory.configure(recycled, title.as_ref(), &kind, &grid, &path);
        println!(
            "{:?} [{}] {:?} bold={} background={:?}",
            path, identifier, view.title, view.bold, view.background_color
        );
        recycled = view;
    }

    Ok(())
}
