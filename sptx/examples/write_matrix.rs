//! Write a sparse matrix to an .sptx file

use sptx::{save_matrix, Result, SparseMatrix};

fn main() -> Result<()> {
    let mut matrix = SparseMatrix::new(1_000, 1_000);

    // A sparse diagonal band
    for i in 0..1_000 {
        matrix.set(i, i, (i as i64 % 9) + 1);
        if i + 1 < 1_000 {
            matrix.set(i, i + 1, -1);
        }
    }

    println!("Matrix dimensions: {}", matrix.shape());
    println!("Non-zeros: {}", matrix.nnz());

    save_matrix("example_matrix.sptx", &matrix)?;
    println!("Written to 'example_matrix.sptx'");
    println!("\nRun 'cargo run --example matrix_arithmetic' to read it back!");
    Ok(())
}
