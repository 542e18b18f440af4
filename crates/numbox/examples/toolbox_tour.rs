use ndarray::array;
use numbox::{array_statistics, matrix_multiplication};

fn main() {
    env_logger::init();

    // Random matrix generation is only reachable through the operations module
    let matrix1 = numbox::operations::create_random_matrix(3, 2).expect("failed to create matrix");
    let matrix2 = numbox::operations::create_random_matrix(2, 4).expect("failed to create matrix");

    println!("Matrix 1 ({}x{}):\n{}", matrix1.nrows(), matrix1.ncols(), matrix1);
    println!("Matrix 2 ({}x{}):\n{}", matrix2.nrows(), matrix2.ncols(), matrix2);

    let product = matrix_multiplication(&matrix1, &matrix2).expect("shapes were chosen to match");
    println!("Product ({}x{}):\n{}", product.nrows(), product.ncols(), product);

    let values = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let stats = array_statistics(&values).expect("input is non-empty and finite");
    println!(
        "Statistics: mean={} median={} std_dev={}",
        stats.mean, stats.median, stats.std_dev
    );
}
