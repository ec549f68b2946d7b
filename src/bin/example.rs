//! Beam Solver Example - I-girder under mixed loading

use beam_solver::prelude::*;

fn main() {
    env_logger::init();

    println!("=== Beam Solver Example: Simply-Supported I-Girder ===\n");

    // Welded I-girder, dimensions in meters
    let girder =
        ISection::symmetric(0.45, 0.2, 0.015, 0.009).expect("Failed to build section");
    let inertia = girder.moment_of_inertia();
    println!("Section depth:   {:.3} m", girder.depth());
    println!("Section area:    {:.5} m^2", girder.area());
    println!("Strong-axis I:   {:.6e} m^4\n", inertia);

    // 9 m span, structural steel (E = 200 GPa)
    let mut beam = Beam::new(9.0, 200.0e9, inertia).expect("Failed to create beam");

    // 25 kN point load at 3 m, 4 kN/m over the full span,
    // and a 10 kN*m counterclockwise moment at 6 m
    beam.add_load(Load::point(25_000.0, 3.0)).expect("load");
    beam.add_load(Load::distributed(4_000.0, 0.0, 9.0)).expect("load");
    beam.add_load(Load::moment(10_000.0, 6.0)).expect("load");

    let results = beam.analyze(201).expect("Analysis failed");

    println!("Reactions:");
    for r in &results.reactions.reactions {
        println!("  x = {:>4.1} m: R = {:>10.1} N", r.position, r.force);
    }

    let e = &results.extremes;
    println!("\nExtremes:");
    println!(
        "  shear:      {:>10.1} N    at x = {:.2} m",
        e.max_shear, e.max_shear_position
    );
    println!(
        "  moment:     {:>10.1} N*m  at x = {:.2} m",
        e.max_moment, e.max_moment_position
    );
    println!(
        "  deflection: {:>10.6} m    at x = {:.2} m",
        e.max_deflection, e.max_deflection_position
    );

    println!("\nDeflection formula:\n  y(x) = {}", results.diagrams.deflection);

    let station = 4.5;
    println!(
        "\nAt x = {station} m: V = {:.1} N, M = {:.1} N*m, y = {:.6} m",
        results.diagrams.shear_at(station).unwrap(),
        results.diagrams.moment_at(station).unwrap(),
        results.diagrams.deflection_at(station).unwrap(),
    );
}
