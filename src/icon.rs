// SPDX-License-Identifier: MPL-2.0
//! Window icon, rendered from the branding SVG at startup.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

/// Embedded so packaging does not need to locate assets on disk.
const SVG_SOURCE: &str = include_str!("../assets/branding/iced_showcase.svg");

/// Square RGBA rendering of the branding SVG, or `None` when the SVG does
/// not parse or `size` is zero.
fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(error = %err, "window icon could not be parsed");
            return None;
        }
    };

    let view = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / view.width(),
        size as f32 / view.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.data().to_vec())
}

/// Window icon for the title bar and task switcher.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}
