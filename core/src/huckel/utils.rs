use nalgebra::{DMatrix, DVector, SymmetricEigen};

#[inline(always)]
/// Create a symmetric, square matrix. Function is only run for upper triangle of the matrix
pub(crate) fn symmetric_matrix(
    n: usize,
    mut func: impl FnMut(usize, usize) -> f64,
) -> DMatrix<f64> {
    let m = DMatrix::from_fn(n, n, |i, j| if i <= j { func(i, j) } else { 0.0 });
    DMatrix::from_fn(n, n, |i, j| if i <= j { m[(i, j)] } else { m[(j, i)] })
}

/// Symmetric eigendecomposition with eigenvalues sorted ascending and the
/// eigenvector columns permuted in lock-step. The downstream Aufbau filling
/// relies on this ordering.
pub(crate) fn sorted_eigs(matrix: DMatrix<f64>) -> (DMatrix<f64>, DVector<f64>) {
    let eigs = SymmetricEigen::new(matrix);
    let (eigenvectors, eigenvalues) = (eigs.eigenvectors, eigs.eigenvalues);

    let mut val_vec_pairs = eigenvalues
        .into_iter()
        .zip(eigenvectors.column_iter())
        .collect::<Vec<_>>();

    val_vec_pairs.sort_unstable_by(|(a, _), (b, _)| a.total_cmp(b));

    let (values, vectors): (Vec<_>, Vec<_>) = val_vec_pairs.into_iter().unzip();

    (
        DMatrix::from_columns(&vectors),
        DVector::from_column_slice(&values),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;

    #[test]
    fn symmetric_matrix_mirrors_the_upper_triangle() {
        let m = symmetric_matrix(3, |i, j| (i * 10 + j) as f64);
        for (i, j) in itertools::iproduct!(0..3, 0..3) {
            assert_eq!(m[(i, j)], m[(j, i)]);
        }
        assert_eq!(m[(2, 1)], 12.0);
    }

    #[test]
    fn eigenvalues_are_ascending_and_eigenvectors_orthonormal() {
        let matrix = symmetric_matrix(4, |i, j| {
            if i == j {
                -11.4
            } else if j == i + 1 {
                -0.8
            } else {
                0.0
            }
        });

        let (coefficients, energies) = sorted_eigs(matrix);

        for (a, b) in energies.iter().tuple_windows() {
            assert!(a <= b, "eigenvalues out of order: {a} > {b}");
        }

        let gram = coefficients.transpose() * &coefficients;
        assert_abs_diff_eq!(gram, DMatrix::identity(4, 4), epsilon = 1e-10);
    }
}
