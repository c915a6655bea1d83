//! Load a matrix back from disk and run the arithmetic operations on it

use sptx::{load_matrix, save_matrix, Result};

fn main() -> Result<()> {
    let filename = "example_matrix.sptx";

    if !std::path::Path::new(filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    println!("Reading sparse matrix from '{filename}'...");
    let matrix = load_matrix(filename)?;
    println!("   Dimensions: {}", matrix.shape());
    println!("   Non-zeros: {}", matrix.nnz());

    // A - A is the all-zero matrix of the same shape
    let zero = matrix.subtract(&matrix)?;
    println!("A - A non-zeros: {}", zero.nnz());

    // Transposing twice gets the original back
    assert_eq!(matrix.transpose().transpose(), matrix);

    let squared = matrix.multiply(&matrix.transpose())?;
    println!("A * A^T dimensions: {}", squared.shape());
    println!("A * A^T non-zeros: {}", squared.nnz());

    save_matrix("product.sptx", &squared)?;
    println!("Product saved to 'product.sptx'");
    Ok(())
}
