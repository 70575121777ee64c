use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;

use huckel_core::huckel::{huckel_analysis, HuckelOutput, HuckelParameters};
use huckel_core::molecule::Molecule;

/// Hückel molecular-orbital analysis of planar conjugated hydrocarbons
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A path to the molecule (.xyz or .json) to analyze
    molecule: PathBuf,

    /// The net charge of the molecule
    #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
    charge: i32,

    /// Two carbon atoms closer than this are treated as π-bonded
    #[arg(long, default_value_t = 1.5)]
    distance_cutoff: f64,

    /// The on-site energy α of a carbon 2p orbital, in eV
    #[arg(long, default_value_t = -11.4, allow_negative_numbers = true)]
    on_site_energy: f64,

    /// The coupling energy β between bonded carbon atoms, in eV
    #[arg(long, default_value_t = -0.8, allow_negative_numbers = true)]
    coupling_energy: f64,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();

    let molecule = Molecule::load(&args.molecule).with_context(|| {
        format!(
            "failed to read molecule geometry from {}",
            args.molecule.display()
        )
    })?;

    let parameters = HuckelParameters {
        distance_cutoff: args.distance_cutoff,
        on_site_energy: args.on_site_energy,
        coupling_energy: args.coupling_energy,
        net_charge: args.charge,
    };

    let start = Instant::now();
    let output = huckel_analysis(&molecule, &parameters)?;
    println!(
        "hückel analysis of {} π-centers finished in {:0.2?}",
        output.orbital_energies.len(),
        start.elapsed()
    );

    print_report(&output);

    Ok(())
}

fn print_report(output: &HuckelOutput) {
    let electron_count: u32 = output.occupations.iter().sum();
    println!("number of π-electrons: {electron_count}");

    println!("\norbital energies (eV)");
    println!("  MO     Energy  Occupation");
    for (index, (energy, occupation)) in output
        .orbital_energies
        .iter()
        .zip(&output.occupations)
        .enumerate()
    {
        println!("{:4} {:10.3}  {:10}", index + 1, energy, occupation);
    }

    println!("\ntotal energy: {:.3} eV", output.total_energy);

    println!("\nMulliken charges");
    println!("Atom   Charge     Spin");
    for (index, (charge, spin)) in output
        .mulliken_charges
        .iter()
        .zip(&output.spin_densities)
        .enumerate()
    {
        println!("{:3} {:+9.3} {:+9.3}", index + 1, charge, spin);
    }

    println!("\nπ Bond order");
    println!("Atom pair  Bond order");
    let n = output.bond_orders.nrows();
    for (i, j) in (0..n).tuple_combinations() {
        println!("{:3} {:3}       {:.3}", i + 1, j + 1, output.bond_orders[(i, j)]);
    }
}
