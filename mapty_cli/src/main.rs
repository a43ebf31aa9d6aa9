use clap::{Args, Parser, Subcommand};
use mapty_core::*;
use std::path::PathBuf;

/// Zoom level used for map links
const MAP_ZOOM_LEVEL: u8 = 16;

#[derive(Parser)]
#[command(name = "mapty")]
#[command(about = "Running and cycling workout journal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new workout
    Add {
        #[command(subcommand)]
        workout: AddCommand,
    },

    /// List recorded workouts, newest first (default)
    List,

    /// Show where a workout took place
    Locate {
        /// Workout id as printed by `add` or `list`
        id: String,
    },

    /// Remove every recorded workout
    Reset,
}

#[derive(Subcommand)]
enum AddCommand {
    /// Record a run
    Running {
        #[command(flatten)]
        location: Location,

        /// Distance in kilometers
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,

        /// Duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: f64,

        /// Cadence in steps per minute
        #[arg(long, allow_negative_numbers = true)]
        cadence: f64,
    },

    /// Record a ride
    Cycling {
        #[command(flatten)]
        location: Location,

        /// Distance in kilometers
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,

        /// Duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: f64,

        /// Elevation gain in meters
        #[arg(long, allow_negative_numbers = true)]
        elevation: f64,
    },
}

#[derive(Args)]
struct Location {
    /// Latitude of the workout
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the workout
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,
}

impl AddCommand {
    fn into_parts(self) -> (WorkoutInput, Coordinates) {
        match self {
            AddCommand::Running {
                location,
                distance,
                duration,
                cadence,
            } => (
                WorkoutInput::Running {
                    distance_km: distance,
                    duration_min: duration,
                    cadence_spm: cadence,
                },
                Coordinates::new(location.lat, location.lng),
            ),
            AddCommand::Cycling {
                location,
                distance,
                duration,
                elevation,
            } => (
                WorkoutInput::Cycling {
                    distance_km: distance,
                    duration_min: duration,
                    elevation_gain_m: elevation,
                },
                Coordinates::new(location.lat, location.lng),
            ),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    mapty_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);

    let mut journal = Journal::open_with_key(FileTextStore::new(data_dir), config.storage.key)?;

    match cli.command {
        Some(Commands::Add { workout }) => cmd_add(&mut journal, workout),
        Some(Commands::Locate { id }) => cmd_locate(&journal, &id),
        Some(Commands::Reset) => cmd_reset(&mut journal),
        Some(Commands::List) | None => cmd_list(&journal),
    }
}

fn cmd_add<S: TextStore>(journal: &mut Journal<S>, command: AddCommand) -> Result<()> {
    let (input, coords) = command.into_parts();
    let workout = match journal.record(input, coords) {
        Ok(workout) => workout,
        Err(e) => {
            eprintln!("✗ {}", e);
            return Err(e);
        }
    };

    println!("✓ Logged {}", workout.description());
    print!("{}", render_workout(workout));
    Ok(())
}

fn cmd_list<S: TextStore>(journal: &Journal<S>) -> Result<()> {
    if journal.is_empty() {
        println!("No workouts recorded yet.");
        return Ok(());
    }

    // Newest first, like the sidebar list
    for workout in journal.workouts().iter().rev() {
        print!("{}", render_workout(workout));
    }
    Ok(())
}

fn cmd_locate<S: TextStore>(journal: &Journal<S>, id: &str) -> Result<()> {
    let id = WorkoutId::from(id);
    match journal.locate(&id) {
        Some(coords) => {
            println!("Workout {}", id);
            println!("  at {}", coords);
            println!("  {}", map_link(coords));
        }
        None => println!("No workout with id {}", id),
    }
    Ok(())
}

fn cmd_reset<S: TextStore>(journal: &mut Journal<S>) -> Result<()> {
    let count = journal.len();
    journal.reset()?;
    println!("✓ Removed {} workouts", count);
    Ok(())
}

fn icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃",
        WorkoutKind::Cycling => "🚴",
    }
}

fn map_link(coords: Coordinates) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map={zoom}/{lat}/{lng}",
        lat = coords.lat,
        lng = coords.lng,
        zoom = MAP_ZOOM_LEVEL
    )
}

/// Two-line summary of a workout
fn render_workout(workout: &Workout) -> String {
    let extra = match workout.detail() {
        WorkoutDetail::Running { cadence_spm, .. } => format!("🦶 {} spm", cadence_spm),
        WorkoutDetail::Cycling {
            elevation_gain_m, ..
        } => format!("⛰ {} m", elevation_gain_m),
    };

    format!(
        "{} {}  [{}]\n   {} km · ⏱ {} min · ⚡ {} · {}\n",
        icon(workout.kind()),
        workout.description(),
        workout.id(),
        workout.distance_km(),
        workout.duration_min(),
        workout.rate(),
        extra
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_running() {
        let run = Workout::running(Coordinates::new(39.0, -12.0), 5.0, 24.0, 178.0);
        let text = render_workout(&run);
        assert!(text.contains("5 km"));
        assert!(text.contains("24 min"));
        assert!(text.contains("4.8 min/km"));
        assert!(text.contains("178 spm"));
        assert!(text.contains(run.id().as_str()));
    }

    #[test]
    fn test_render_cycling() {
        let ride = Workout::cycling(Coordinates::new(39.0, -12.0), 27.0, 95.0, 523.0);
        let text = render_workout(&ride);
        assert!(text.contains("17.1 km/h"));
        assert!(text.contains("523 m"));
    }

    #[test]
    fn test_map_link() {
        let link = map_link(Coordinates::new(39.5, -12.0));
        assert_eq!(
            link,
            "https://www.openstreetmap.org/?mlat=39.5&mlon=-12#map=16/39.5/-12"
        );
    }
}
