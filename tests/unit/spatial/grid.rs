//! Tests for the RGB pixel grid

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use ndarray::Array3;
    use unshred::spatial::PixelGrid;

    // New grids are black with the requested dimensions
    #[test]
    fn test_new_grid_dimensions() {
        let grid = PixelGrid::new(7, 3);

        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(6, 2), Some([0, 0, 0]));
        assert_eq!(grid.get(7, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    // Writes land at (x, y) and out-of-range writes are dropped
    #[test]
    fn test_set_and_get() {
        let mut grid = PixelGrid::new(4, 4);
        grid.set(1, 2, [10, 20, 30]);
        grid.set(9, 9, [1, 1, 1]);

        assert_eq!(grid.get(1, 2), Some([10, 20, 30]));
        assert_eq!(grid.get(2, 1), Some([0, 0, 0]));
    }

    // Conversion through the image crate keeps every pixel
    #[test]
    fn test_rgb_image_round_trip() {
        let image = RgbImage::from_fn(5, 4, |x, y| Rgb([x as u8, y as u8, (x + y) as u8]));
        let grid = PixelGrid::from_rgb_image(&image);

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.get(3, 2), Some([3, 2, 5]));
        assert_eq!(grid.to_rgb_image(), image);
    }

    // Column views run top to bottom with one row per pixel
    #[test]
    fn test_column_view() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| [x as u8, y as u8, 0]);
        let column = grid.column(2).unwrap();

        assert_eq!(column.dim(), (2, 3));
        assert_eq!(column[[0, 0]], 2);
        assert_eq!(column[[1, 1]], 1);
        assert!(grid.column(3).is_none());
    }

    // Column ranges copy exactly the requested columns
    #[test]
    fn test_columns_copy() {
        let grid = PixelGrid::from_fn(6, 2, |x, _| [x as u8, 0, 0]);
        let part = grid.columns(2, 5).unwrap();

        assert_eq!(part.width(), 3);
        assert_eq!(part.get(0, 1), Some([2, 0, 0]));
        assert_eq!(part.get(2, 0), Some([4, 0, 0]));
        assert!(grid.columns(4, 7).is_none());
        assert!(grid.columns(3, 2).is_none());
    }

    // Arrays without three channels are rejected
    #[test]
    fn test_from_array_channel_check() {
        assert!(PixelGrid::from_array(Array3::zeros((2, 2, 4))).is_none());
        assert!(PixelGrid::from_array(Array3::zeros((2, 2, 3))).is_some());
    }
}
