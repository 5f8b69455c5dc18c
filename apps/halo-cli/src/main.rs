use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

use halo_graph::ExprKind;
use halo_material::{
    AssetSink, FunctionLibrary, JsonFileSink, MaterialError, SinkError, YamlFileSink, generate,
};
use halo_project::ProjectError;

#[derive(Parser)]
#[command(name = "halo-cli")]
#[command(about = "Halo CLI - Procedural circle material generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate spec file syntax and structure
    Validate {
        /// Path to the material spec YAML file
        spec_path: PathBuf,
    },
    /// Generate a material and publish its description
    Generate {
        /// Path to the material spec YAML file
        spec_path: PathBuf,
        /// Directory the material description is written to
        #[arg(short, long)]
        out: PathBuf,
        /// Also write a JSON copy next to the YAML
        #[arg(long)]
        json: bool,
    },
    /// Export the generated graph in Graphviz dot form
    ExportDot {
        /// Path to the material spec YAML file
        spec_path: PathBuf,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Spec error: {0}")]
    Project(#[from] ProjectError),

    #[error("Generation error: {0}")]
    Material(#[from] MaterialError),

    #[error("Publish error: {0}")]
    Sink(#[from] SinkError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { spec_path } => cmd_validate(&spec_path),
        Commands::Generate {
            spec_path,
            out,
            json,
        } => cmd_generate(&spec_path, &out, json),
        Commands::ExportDot { spec_path, output } => cmd_export_dot(&spec_path, output.as_deref()),
    }
}

fn cmd_validate(spec_path: &Path) -> AppResult<()> {
    println!("Validating spec: {}", spec_path.display());
    let spec = halo_project::load_yaml(spec_path)?;
    println!("✓ Spec is valid ({} circles)", spec.circles.len());
    Ok(())
}

fn cmd_generate(spec_path: &Path, out: &Path, json: bool) -> AppResult<()> {
    let spec = halo_project::load_yaml(spec_path)?;
    tracing::info!(name = %spec.name, circles = spec.circles.len(), "generating material");

    let material = generate(&spec, &FunctionLibrary::standard())?;

    let mut sink = YamlFileSink::new(out);
    sink.publish(&material)?;
    if json {
        JsonFileSink::new(out).publish(&material)?;
    }

    let params = material
        .graph
        .nodes()
        .iter()
        .filter(|n| {
            matches!(
                n.kind,
                ExprKind::ScalarParam { .. } | ExprKind::VectorParam { .. }
            )
        })
        .count();

    println!("✓ Generated material: {}", material.name);
    println!("  Circles: {}", spec.circles.len());
    println!("  Nodes: {}", material.graph.len());
    println!("  Parameters: {}", params);
    println!("  Written to: {}", sink.path_for(&material.name).display());
    Ok(())
}

fn cmd_export_dot(spec_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let spec = halo_project::load_yaml(spec_path)?;
    let material = generate(&spec, &FunctionLibrary::standard())?;

    match output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            halo_graph::dot::write_dot(&material.graph, &mut file)?;
            println!("✓ Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            halo_graph::dot::write_dot(&material.graph, &mut handle)?;
        }
    }
    Ok(())
}
