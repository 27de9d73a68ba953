use clap::Parser;

use quadmap_generator::export;
use quadmap_generator::params::GenerationParams;
use quadmap_generator::pipeline;
use quadmap_generator::stats;

#[derive(Parser, Debug)]
#[command(name = "quadmap_generator")]
#[command(about = "Generate a quadrangulated hex-lattice map mesh")]
struct Args {
    /// Number of concentric hex rings
    #[arg(short, long, default_value = "10")]
    rings: usize,

    /// Lattice spacing between adjacent points
    #[arg(long, default_value = "40.0")]
    spacing: f64,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of relaxation iterations
    #[arg(short, long, default_value = "500")]
    iterations: usize,

    /// Relaxation strength in (0, 1]
    #[arg(long, default_value = "0.08")]
    strength: f64,

    /// Output JSON path (defaults to quadmap_seed<seed>_ring<rings>.json)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let params = GenerationParams {
        ring_count: args.rings,
        lattice_spacing: args.spacing,
        random_seed: seed,
        relaxation_iterations: args.iterations,
        relaxation_strength: args.strength,
    };

    println!("Generating quad map with seed: {}", seed);
    println!(
        "Rings: {}, spacing: {}, {} relaxation iterations at strength {}",
        params.ring_count,
        params.lattice_spacing,
        params.relaxation_iterations,
        params.relaxation_strength
    );

    let mesh = match pipeline::generate_mesh(&params) {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
    };

    let area = stats::area_stats(&mesh);
    println!("Total quads: {}", area.face_count);
    println!("Total vertices: {}", mesh.vertices.len());
    println!("Average area: {:.2}", area.mean);
    println!("Min/Max area: {:.2} / {:.2}", area.min, area.max);
    println!("Area variation: {:.1}%", area.variation_percent());

    let map = export::build_map_data(&mesh, &params);
    let path = args
        .output
        .unwrap_or_else(|| export::default_output_name(&params));

    if let Err(e) = export::write_map_json(&map, &path) {
        eprintln!("Failed to write {}: {}", path, e);
        std::process::exit(1);
    }
    println!("Map written to {}", path);
}
