use itertools::Itertools;
use nalgebra::{DMatrix, Vector3};

use super::HuckelParameters;

/// Builds the Hückel Hamiltonian over the given π-centers: the on-site
/// energy α on the diagonal, the coupling energy β between centers closer
/// than the distance cutoff, zero elsewhere. Symmetric by construction.
///
/// Pair enumeration is O(N²), which is fine at the few hundred atoms this
/// model is used for. Coincident centers have distance zero and couple like
/// any bonded pair.
pub fn build_hamiltonian(
    centers: &[Vector3<f64>],
    parameters: &HuckelParameters,
) -> DMatrix<f64> {
    let n = centers.len();

    let mut hamiltonian = DMatrix::from_diagonal_element(n, n, parameters.on_site_energy);
    for (i, j) in (0..n).tuple_combinations() {
        let distance = (centers[j] - centers[i]).norm();
        if distance < parameters.distance_cutoff {
            hamiltonian[(i, j)] = parameters.coupling_energy;
            hamiltonian[(j, i)] = parameters.coupling_energy;
        }
    }

    hamiltonian
}
