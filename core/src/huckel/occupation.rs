use crate::error::HuckelError;

/// Fills the orbitals with the charge-adjusted electron count in Aufbau
/// order: every orbital below the Fermi level doubly occupied, at most one
/// singly occupied orbital above them, the rest empty.
///
/// Each carbon contributes one π-electron, so the count is
/// `n_orbitals - net_charge`. A count outside `[0, 2·n_orbitals]` has no
/// representation in this model and is rejected.
///
/// Degenerate orbital energies get no special treatment: with an odd
/// electron count the unpaired electron lands in the lowest remaining slot
/// of the sorted order, even inside a degenerate block. Hund's-rule
/// multiplicities are out of scope for this model.
pub fn assign_occupations(n_orbitals: usize, net_charge: i32) -> Result<Vec<u32>, HuckelError> {
    let electron_count = n_orbitals as i64 - i64::from(net_charge);
    if electron_count < 0 || electron_count > 2 * n_orbitals as i64 {
        return Err(HuckelError::UnrepresentableCharge {
            electron_count,
            capacity: 2 * n_orbitals,
        });
    }
    let electron_count = electron_count as usize;

    let doubly_occupied = electron_count / 2;
    let singly_occupied = electron_count % 2;
    log::info!(
        "{electron_count} π-electrons: {doubly_occupied} doubly occupied orbitals, {singly_occupied} singly occupied"
    );

    let mut occupations = vec![0; n_orbitals];
    occupations[..doubly_occupied].fill(2);
    if singly_occupied == 1 {
        occupations[doubly_occupied] = 1;
    }

    Ok(occupations)
}
