//! PNG rendering of solved tile maps
//!
//! Each cell becomes a square of `cell_pixels` pixels split into four strips,
//! one per bar. Orientation follows the grid's checkerboard rule: vertical
//! cells place bar 0 in the leftmost strip, horizontal cells place bar 0 in
//! the top strip. That layout is what makes the touching-bar relations of
//! the solver correspond to borders in the picture.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::assignment::Solution;
use crate::io::configuration::BARS_PER_TILE;
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::grid::Orientation;

/// Render a solution into an RGBA image
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_pixels` is smaller than the number of
/// bars or the image would be too large, and `UnknownColor` if a tile uses a
/// color the palette does not define
pub fn render_solution(
    solution: &Solution,
    palette: &[[u8; 4]],
    cell_pixels: u32,
) -> Result<RgbaImage> {
    if (cell_pixels as usize) < BARS_PER_TILE {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &format!("must be at least {BARS_PER_TILE}"),
        ));
    }

    let dimensions = solution.dimensions();
    let width = image_side(dimensions.cols(), cell_pixels)?;
    let height = image_side(dimensions.rows(), cell_pixels)?;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (row, col, orientation, tile) in solution.cells() {
        let mut colors = [Rgba([0, 0, 0, 0]); BARS_PER_TILE];
        for (slot, &color) in colors.iter_mut().zip(tile.bars()) {
            *slot = palette_color(palette, color)?;
        }

        let origin_x = col as u32 * cell_pixels;
        let origin_y = row as u32 * cell_pixels;
        for dy in 0..cell_pixels {
            for dx in 0..cell_pixels {
                let along = match orientation {
                    Orientation::Vertical => dx,
                    Orientation::Horizontal => dy,
                };
                let bar = (along as usize * BARS_PER_TILE) / cell_pixels as usize;
                if let Some(&color) = colors.get(bar) {
                    img.put_pixel(origin_x + dx, origin_y + dy, color);
                }
            }
        }
    }

    Ok(img)
}

/// Render a solution and save it as a PNG file, creating parent directories
///
/// # Errors
///
/// Returns the errors of [`render_solution`], `FileSystem` if the parent
/// directory cannot be created and `ImageExport` if saving fails
pub fn export_solution_as_png(
    solution: &Solution,
    palette: &[[u8; 4]],
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_solution(solution, palette, cell_pixels)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn palette_color(palette: &[[u8; 4]], color: u32) -> Result<Rgba<u8>> {
    palette
        .get(color as usize)
        .map(|&rgba| Rgba(rgba))
        .ok_or(TilingError::UnknownColor {
            color,
            palette_size: palette.len(),
        })
}

fn image_side(cells: usize, cell_pixels: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(cell_pixels))
        .ok_or_else(|| {
            invalid_parameter(
                "cell_pixels",
                &cell_pixels,
                &format!("image side for {cells} cells overflows"),
            )
        })
}
