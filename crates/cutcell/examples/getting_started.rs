use cutcell::{cube_volume_fraction, quad_area_fraction};

fn main() {
    // The plane x = 0.25 cuts a quarter off the cell.
    let quad = [-1.0f32, 3.0, 3.0, -1.0];
    let cube = [-1.0f32, 3.0, 3.0, -1.0, -1.0, 3.0, 3.0, -1.0];

    assert!((quad_area_fraction(quad) - 0.25).abs() < 1.0e-6);
    assert!((cube_volume_fraction(cube) - 0.25).abs() < 1.0e-6);
}
