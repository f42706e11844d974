// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the altitude heat-map of a grid. The output is a
//! plain text PPM image (P3): that format is trivial to produce and can be
//! opened (or converted to png) by pretty much any image tool.

use derive_builder::Builder;
use descent::{Grid, Path};

/// A 24 bits colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The stops of the gradient used to colour the altitudes: the lowest
/// altitudes are blue, the intermediate ones green and the highest ones red.
const GRADIENT: [(f64, Rgb); 3] = [
    (0.0, Rgb(0, 0, 255)),
    (0.5, Rgb(0, 255, 0)),
    (1.0, Rgb(255, 0, 0)),
];

/// The largest square (in pixels) that can be drawn for one cell
pub const MAX_SCALE: usize = 256;

/// The errors that can occur when rendering a heat-map
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The scaled image dimensions cannot be represented
    #[error("a {width}x{height} grid drawn at scale {scale} is too large to be rendered")]
    TooLarge { width: usize, height: usize, scale: usize },
}

/// This is how you configure the output heat-map e.g.
/// if you want bigger cells or if you want to hide the path.
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct HeatmapConfig {
    /// The size (in pixels) of the square drawn for each cell (1 to MAX_SCALE)
    #[builder(default="1")]
    scale: usize,
    /// This flag must be true (default) if you want to see the cells visited
    /// by the path (if one was given)
    #[builder(default="true")]
    show_path: bool,
    /// The colour used to paint the cells of the path
    #[builder(default="Rgb(255, 255, 255)")]
    path_colour: Rgb,
}

impl HeatmapConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.scale {
            Some(scale) if scale == 0 || scale > MAX_SCALE =>
                Err(format!("scale must be between 1 and {MAX_SCALE} (got {scale})")),
            _ => Ok(()),
        }
    }
}

/// This structure contains all the information one requires to produce the
/// heat-map of some grid
pub struct Heatmap<'a> {
    /// The terrain
    grid: &'a Grid,
    /// The path to overlay on top of the terrain (if any)
    path: Option<&'a Path>,
}

impl<'a> Heatmap<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Heatmap { grid, path: None }
    }
    /// Overlays the given path on top of the heat-map
    pub fn with_path(mut self, path: &'a Path) -> Self {
        self.path = Some(path);
        self
    }

    /// This is the method you will want to use in order to create the output
    /// image. The first row of pixels shows the row `y = 0` of the grid.
    ///
    /// # Example
    /// ```
    /// # use descent::Grid;
    /// # use descent_viz::*;
    /// let grid   = Grid::from_rows(&[vec![0, 10]]).unwrap();
    /// let config = HeatmapConfigBuilder::default().build().unwrap();
    /// let ppm    = Heatmap::new(&grid).as_ppm(&config).unwrap();
    /// assert_eq!("P3\n2 1\n255\n0 0 255 255 0 0\n", ppm);
    /// ```
    ///
    /// # Errors
    /// When the scaled dimensions of the image overflow.
    pub fn as_ppm(&self, config: &HeatmapConfig) -> Result<String, Error> {
        let scale = config.scale;
        let (width, height) = (self.grid.width(), self.grid.height());
        let too_large = Error::TooLarge { width, height, scale };
        let image_width = width.checked_mul(scale).ok_or(too_large)?;
        let image_height = height.checked_mul(scale).ok_or(too_large)?;
        let pixels = self.pixels(config);

        let mut out = format!("P3\n{image_width} {image_height}\n255\n");
        for y in 0..height {
            let mut line = String::new();
            for x in 0..width {
                let Rgb(r, g, b) = pixels[y * width + x];
                for _ in 0..scale {
                    if !line.is_empty() {
                        line.push(' ');
                    }
                    line.push_str(&format!("{r} {g} {b}"));
                }
            }
            line.push('\n');
            for _ in 0..scale {
                out.push_str(&line);
            }
        }
        Ok(out)
    }

    /// The colour of each cell, in row major order
    fn pixels(&self, config: &HeatmapConfig) -> Vec<Rgb> {
        let highest = self.grid.max_altitude().unwrap_or(0);
        let mut pixels = self.grid.altitudes().iter()
            .map(|altitude| Self::colour(Self::offset(*altitude, highest)))
            .collect::<Vec<_>>();

        if config.show_path {
            if let Some(path) = self.path {
                for node in path.nodes() {
                    pixels[self.grid.index(node.x, node.y)] = config.path_colour;
                }
            }
        }
        pixels
    }

    /// The position of an altitude on the gradient: its ratio to the highest
    /// altitude, clamped to [0, 1]. A terrain without any positive altitude
    /// is entirely blue.
    fn offset(altitude: isize, highest: isize) -> f64 {
        if highest <= 0 {
            0.0
        } else {
            (altitude as f64 / highest as f64).clamp(0.0, 1.0)
        }
    }

    /// Linearly interpolates the colour of the given offset between the two
    /// gradient stops surrounding it.
    fn colour(offset: f64) -> Rgb {
        let offset = offset.clamp(0.0, 1.0);
        let (mut before, mut after) = (GRADIENT[0], GRADIENT[GRADIENT.len() - 1]);
        for pair in GRADIENT.windows(2) {
            if offset >= pair[0].0 && offset <= pair[1].0 {
                before = pair[0];
                after = pair[1];
                break;
            }
        }
        let ratio = (offset - before.0) / (after.0 - before.0);
        let mix = |a: u8, b: u8| (a as f64 + ratio * (b as f64 - a as f64)).round() as u8;

        let (Rgb(r0, g0, b0), Rgb(r1, g1, b1)) = (before.1, after.1);
        Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_heatmap {
    use descent::{Graph, Grid, PathFinder, SequentialPathFinder};

    use crate::{Error, Heatmap, HeatmapConfigBuilder, Rgb, MAX_SCALE};

    fn default_config() -> crate::HeatmapConfig {
        HeatmapConfigBuilder::default().build().unwrap()
    }

    #[test]
    fn gradient_stops_are_blue_green_red() {
        assert_eq!(Rgb(0, 0, 255), Heatmap::colour(0.0));
        assert_eq!(Rgb(0, 255, 0), Heatmap::colour(0.5));
        assert_eq!(Rgb(255, 0, 0), Heatmap::colour(1.0));
    }
    #[test]
    fn colours_are_interpolated_between_the_stops() {
        assert_eq!(Rgb(0, 128, 128), Heatmap::colour(0.25));
        assert_eq!(Rgb(128, 128, 0), Heatmap::colour(0.75));
    }
    #[test]
    fn offsets_are_clamped() {
        assert_eq!(0.0, Heatmap::offset(-5, 10));
        assert_eq!(0.5, Heatmap::offset(5, 10));
        assert_eq!(1.0, Heatmap::offset(10, 10));
        assert_eq!(0.0, Heatmap::offset(-5, -1));
        assert_eq!(0.0, Heatmap::offset(0, 0));
    }
    #[test]
    fn header_gives_the_scaled_dimensions() {
        let grid = Grid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let config = HeatmapConfigBuilder::default().scale(3).build().unwrap();
        let ppm = Heatmap::new(&grid).as_ppm(&config).unwrap();
        assert!(ppm.starts_with("P3\n9 6\n255\n"));
        // one line per pixel row, three values per pixel
        let rows = ppm.lines().skip(3).collect::<Vec<_>>();
        assert_eq!(6, rows.len());
        assert!(rows.iter().all(|r| r.split(' ').count() == 27));
    }
    #[test]
    fn each_cell_is_a_square_of_pixels() {
        let grid = Grid::from_rows(&[vec![0, 10]]).unwrap();
        let config = HeatmapConfigBuilder::default().scale(2).build().unwrap();
        let ppm = Heatmap::new(&grid).as_ppm(&config).unwrap();
        let expected = "P3\n4 2\n255\n\
            0 0 255 0 0 255 255 0 0 255 0 0\n\
            0 0 255 0 0 255 255 0 0 255 0 0\n";
        assert_eq!(expected, ppm);
    }
    #[test]
    fn the_path_is_painted_on_top_of_the_terrain() {
        let grid = Grid::from_rows(&[vec![10, 0, 5]]).unwrap();
        let graph = Graph::new(&grid);
        let best = SequentialPathFinder::new(&graph).find_best_path().unwrap();

        let config = HeatmapConfigBuilder::default().path_colour(Rgb(1, 2, 3)).build().unwrap();
        let ppm = Heatmap::new(&grid).with_path(&best).as_ppm(&config).unwrap();
        assert_eq!("P3\n3 1\n255\n1 2 3 1 2 3 0 255 0\n", ppm);
    }
    #[test]
    fn the_path_can_be_hidden() {
        let grid = Grid::from_rows(&[vec![10, 0, 5]]).unwrap();
        let graph = Graph::new(&grid);
        let best = SequentialPathFinder::new(&graph).find_best_path().unwrap();

        let config = HeatmapConfigBuilder::default().show_path(false).build().unwrap();
        let ppm = Heatmap::new(&grid).with_path(&best).as_ppm(&config).unwrap();
        assert_eq!("P3\n3 1\n255\n255 0 0 0 0 255 0 255 0\n", ppm);
    }
    #[test]
    fn an_empty_grid_yields_an_empty_image() {
        let grid = Grid::new(0, 0, vec![]).unwrap();
        assert_eq!("P3\n0 0\n255\n", Heatmap::new(&grid).as_ppm(&default_config()).unwrap());
    }
    #[test]
    fn the_scale_must_be_positive_and_bounded() {
        assert!(HeatmapConfigBuilder::default().scale(0).build().is_err());
        assert!(HeatmapConfigBuilder::default().scale(MAX_SCALE + 1).build().is_err());
        assert!(HeatmapConfigBuilder::default().scale(MAX_SCALE).build().is_ok());
    }
    #[test]
    fn overflowing_image_dimensions_are_an_error() {
        let grid = Grid::new(usize::MAX, 0, vec![]).unwrap();
        let config = HeatmapConfigBuilder::default().scale(2).build().unwrap();
        assert_eq!(
            Err(Error::TooLarge { width: usize::MAX, height: 0, scale: 2 }),
            Heatmap::new(&grid).as_ppm(&config)
        );
    }
}
