//! Walk through the matrix API: construction, elimination and the
//! derived quantities.
//!
//! Run with `cargo run --example matrix_demo`.

use geomat::matrix::Matrix;

fn main() {
    let mut m = Matrix::from_rows(vec![
        vec![4.0, 3.0, 2.0],
        vec![3.0, 2.0, 1.0],
        vec![2.0, 1.0, 0.0],
    ]);
    println!("m ({}x{}):\n{m:#}", m.rows(), m.cols());
    println!("det   = {}", m.det());
    println!("trace = {}", m.trace());
    println!("rank  = {}", m.rank());

    m.gaussian_elimination();
    println!("row-echelon form:\n{m:#}");

    let mut widened = m.clone();
    widened
        .add_column(&[10.0, 9.0, 8.0])
        .unwrap()
        .add_row(&[20.0, 21.0, 22.0, 23.0])
        .unwrap();
    println!("after add_column/add_row ({}x{}):\n{widened:#}", widened.rows(), widened.cols());

    let reshaped = Matrix::from_flat(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 3).unwrap();
    println!("flat buffer reshaped to width 3 (tail zero-padded):\n{reshaped:#}");

    let product = Matrix::<f64>::identity(3).mul(&Matrix::from_shape(3, 4)).unwrap();
    println!("identity * from_shape(3, 4):\n{product:#}");
}
