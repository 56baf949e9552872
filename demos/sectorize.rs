//! Split an ellipse into sectors and compare the summed sector areas
//! with the closed-form ellipse area.
//!
//! Run with `cargo run --example sectorize`.

use geomat::geometry::Ellipse;
use geomat::utils::RAD2DEG;

fn main() {
    let ellipse = Ellipse::new(250.0, 150.0);
    println!("ellipse a={}, b={}, area={:.3}", ellipse.a, ellipse.b, ellipse.area());

    let result = ellipse.sectorize(8, 0.0);
    let mut total = 0.0;
    for (i, sector) in result.sectors.iter().enumerate() {
        let area = sector.area();
        total += area;
        println!(
            "sector {i}: theta0={:7.2}°  theta1={:7.2}°  area={:12.3}",
            sector.theta0 * RAD2DEG,
            sector.theta1 * RAD2DEG,
            area
        );
    }
    println!("sum of sector areas: {total:.3}");
}
