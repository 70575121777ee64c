use nalgebra::DMatrix;

use super::utils;

/// Mulliken populations derived from the orbital coefficients and the
/// occupation vector.
#[derive(Debug)]
pub struct PopulationAnalysis {
    /// spin-up density matrix; its trace is the spin-up electron count
    pub density_up: DMatrix<f64>,
    /// spin-down density matrix; its trace is the spin-down electron count
    pub density_down: DMatrix<f64>,
    /// per-atom Mulliken charge, relative to one electron per carbon center
    pub mulliken_charges: Vec<f64>,
    /// per-atom excess of spin-up over spin-down density
    pub spin_densities: Vec<f64>,
    /// π bond-order matrix; only off-diagonal entries are meaningful
    pub bond_orders: DMatrix<f64>,
}

/// Computes spin-resolved density matrices and the per-atom and per-bond
/// quantities derived from them. A singly occupied orbital counts as
/// spin-up by convention.
pub fn analyze(coefficients: &DMatrix<f64>, occupations: &[u32]) -> PopulationAnalysis {
    assert_eq!(
        coefficients.ncols(),
        occupations.len(),
        "one occupation per orbital"
    );

    // the occupations are an energy-ordered prefix, so each spin channel
    // occupies the first n_spin coefficient columns
    let n_up = occupations.iter().filter(|&&occ| occ >= 1).count();
    let n_down = occupations.iter().filter(|&&occ| occ == 2).count();

    let density_up = density_matrix(coefficients, n_up);
    let density_down = density_matrix(coefficients, n_down);

    let n = coefficients.nrows();
    let mulliken_charges = (0..n)
        .map(|i| 1.0 - (density_up[(i, i)] + density_down[(i, i)]))
        .collect();
    let spin_densities = (0..n)
        .map(|i| density_up[(i, i)] - density_down[(i, i)])
        .collect();

    let bond_orders = density_up.zip_map(&density_down, |up, down| 2.0 * (up * up + down * down));

    PopulationAnalysis {
        density_up,
        density_down,
        mulliken_charges,
        spin_densities,
        bond_orders,
    }
}

/// Density matrix of one spin channel, summed over its `n_occupied`
/// lowest-energy orbitals.
fn density_matrix(coefficients: &DMatrix<f64>, n_occupied: usize) -> DMatrix<f64> {
    utils::symmetric_matrix(coefficients.nrows(), |i, j| {
        (0..n_occupied)
            .map(|k| coefficients[(i, k)] * coefficients[(j, k)])
            .sum()
    })
}
