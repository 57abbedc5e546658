use cutcell::grid::CubeGrid;
use cutcell::math::Point;

fn main() {
    let radius = 0.3f32;
    let center = Point::new(0.5, 0.5, 0.5);

    for nodes in [11, 21, 41, 81] {
        let spacing = 1.0 / (nodes - 1) as f32;
        let grid = CubeGrid::from_fn([nodes; 3], spacing, |p| (p - center).norm() - radius)
            .expect("the sphere grid is well-formed");

        println!(
            "{nodes:>3} nodes per axis: volume {:.6}, area {:.6}",
            grid.inside_volume(),
            grid.interface_area()
        );
    }

    let exact_volume = 4.0 / 3.0 * core::f32::consts::PI * radius.powi(3);
    let exact_area = 4.0 * core::f32::consts::PI * radius.powi(2);
    println!("exact:                 volume {exact_volume:.6}, area {exact_area:.6}");
}
