pub mod hamiltonian;
pub mod occupation;
pub mod population;
pub(crate) mod utils;

pub use hamiltonian::build_hamiltonian;
pub use occupation::assign_occupations;
pub use population::PopulationAnalysis;

use nalgebra::DMatrix;

use crate::{error::HuckelError, molecule::Molecule};

/// The empirical parameters of a Hückel calculation.
#[derive(Debug, Clone, Copy)]
pub struct HuckelParameters {
    /// two carbon atoms closer than this are treated as π-bonded
    pub distance_cutoff: f64,
    /// the on-site energy α of a carbon 2p orbital
    pub on_site_energy: f64,
    /// the coupling energy β between bonded neighbors
    pub coupling_energy: f64,
    /// net molecular charge, subtracted from the neutral π-electron count
    pub net_charge: i32,
}

impl Default for HuckelParameters {
    fn default() -> Self {
        Self {
            distance_cutoff: 1.5,
            on_site_energy: -11.4,
            coupling_energy: -0.8,
            net_charge: 0,
        }
    }
}

impl HuckelParameters {
    fn validate(&self) -> Result<(), HuckelError> {
        for (name, value) in [
            ("distance_cutoff", self.distance_cutoff),
            ("on_site_energy", self.on_site_energy),
            ("coupling_energy", self.coupling_energy),
        ] {
            if !value.is_finite() {
                return Err(HuckelError::InvalidParameter { name });
            }
        }
        Ok(())
    }
}

/// The output of a Hückel analysis
#[derive(Debug)]
#[non_exhaustive]
pub struct HuckelOutput {
    /// the orbital energies, sorted in ascending order
    pub orbital_energies: Vec<f64>,
    /// orbital coefficients; column k belongs to `orbital_energies[k]`
    pub coefficients: DMatrix<f64>,
    /// electrons per orbital, aligned with `orbital_energies`
    pub occupations: Vec<u32>,
    /// the total π-electronic energy
    pub total_energy: f64,
    /// spin-up density matrix
    pub density_up: DMatrix<f64>,
    /// spin-down density matrix
    pub density_down: DMatrix<f64>,
    /// per-atom Mulliken charge
    pub mulliken_charges: Vec<f64>,
    /// per-atom spin density
    pub spin_densities: Vec<f64>,
    /// π bond-order matrix, meaningful off-diagonal only
    pub bond_orders: DMatrix<f64>,
}

/// Runs the full Hückel pipeline on the π-system of a molecule: Hamiltonian
/// construction, eigendecomposition, Aufbau occupation, total energy and
/// Mulliken population analysis. One pass, no state retained between calls.
pub fn huckel_analysis(
    molecule: &Molecule,
    parameters: &HuckelParameters,
) -> Result<HuckelOutput, HuckelError> {
    parameters.validate()?;

    let centers = molecule.pi_centers();
    if centers.is_empty() {
        return Err(HuckelError::EmptyPiSystem);
    }
    // a NaN coordinate would otherwise slip through the distance cutoff,
    // since `NaN < cutoff` is false
    if let Some(atom) = centers.iter().position(|p| !p.iter().all(|x| x.is_finite())) {
        return Err(HuckelError::NonFiniteGeometry { atom });
    }

    let n_orbitals = centers.len();
    log::info!("found {n_orbitals} carbon atoms in the π-system");

    let hamiltonian = hamiltonian::build_hamiltonian(&centers, parameters);
    log::debug!("hückel hamiltonian: {hamiltonian:0.4}");

    let (coefficients, energies) = utils::sorted_eigs(hamiltonian);
    let orbital_energies = energies.as_slice().to_vec();
    log::debug!("orbital energies: {orbital_energies:0.4?}");

    let occupations = occupation::assign_occupations(n_orbitals, parameters.net_charge)?;

    let total_energy = total_energy(&orbital_energies, &occupations);
    log::info!("total π-electronic energy: {total_energy:0.4}");

    let population::PopulationAnalysis {
        density_up,
        density_down,
        mulliken_charges,
        spin_densities,
        bond_orders,
    } = population::analyze(&coefficients, &occupations);

    Ok(HuckelOutput {
        orbital_energies,
        coefficients,
        occupations,
        total_energy,
        density_up,
        density_down,
        mulliken_charges,
        spin_densities,
        bond_orders,
    })
}

/// Sums the orbital energies weighted by their electron counts.
pub fn total_energy(orbital_energies: &[f64], occupations: &[u32]) -> f64 {
    assert_eq!(
        orbital_energies.len(),
        occupations.len(),
        "one occupation per orbital"
    );

    orbital_energies
        .iter()
        .zip(occupations)
        .map(|(energy, &occupation)| energy * f64::from(occupation))
        .sum()
}
