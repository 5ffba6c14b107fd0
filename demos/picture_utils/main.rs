//! Picture Script Utility
//!
//! A command-line tool for checking picture scripts and simulating them tick by tick.
//!
//! # Features
//!
//! - **check**: Parse a script and report the first invalid line
//! - **simulate**: Run a script through the engine and print render parameters as JSON
//!
//! # Script Format
//!
//! One `name=v1,v2,...` property per line; blank lines are skipped.
//!
//! # Engine Configuration
//!
//! `--config FILE` loads an optional TOML file with the `EngineConfig` fields
//! (`chip_size`, `field_width`, `field_height`, `tick_ms`, `blink_period_ticks`,
//! `store_capacity`). `WWAPIC_*` environment variables override both, e.g.
//! `WWAPIC_TICK_MS=20`.
//!
//! # Usage
//!
//! ```bash
//! # Check a script
//! cargo run --example picture_utils -- check demos/picture_utils/sample.pic
//!
//! # Simulate 100 ticks, printing every 10th frame
//! cargo run --example picture_utils -- simulate demos/picture_utils/sample.pic --ticks 100 --every 10
//!
//! # Use a custom field and trigger part
//! cargo run --example picture_utils -- simulate demos/picture_utils/sample.pic --config demos/picture_utils/engine.toml --trigger 3,4,120
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use serde_json::json;
use wwapic_rs::prelude::{picture::blink, *};

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Check(opts) => run_check(&opts),
		Command::Simulate(opts) => run_simulate(&opts),
	}
}

#[derive(Parser)]
#[command(name = "picture_utils")]
#[command(author = "wwapic-rs project")]
#[command(version)]
#[command(about = "Check and simulate picture scripts", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Parse a picture script and report errors
	Check(CheckArgs),
	/// Run a picture script through the engine
	Simulate(SimulateArgs),
}

#[derive(Args)]
struct SourceArgs {
	/// Picture script, one property per line
	#[arg(value_name = "SCRIPT")]
	script: PathBuf,

	/// Number of the part defining the picture
	#[arg(long, value_name = "NUMBER", default_value_t = 0)]
	parts_number: i32,

	/// Trigger part as `x,y,id`
	#[arg(long, value_name = "X,Y,ID", value_delimiter = ',', num_args = 3)]
	trigger: Option<Vec<i32>>,

	/// Primary image crop as `x,y` in chips
	#[arg(long, value_name = "X,Y", value_delimiter = ',', num_args = 2)]
	crop: Option<Vec<i32>>,

	/// Secondary image crop as `x,y` in chips
	#[arg(long, value_name = "X,Y", value_delimiter = ',', num_args = 2)]
	second_crop: Option<Vec<i32>>,

	/// Sound played when the picture appears
	#[arg(long, value_name = "INDEX", default_value_t = 0)]
	sound: u32,
}

#[derive(Args)]
struct CheckArgs {
	#[command(flatten)]
	source: SourceArgs,

	/// TOML engine configuration
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,
}

#[derive(Args)]
struct SimulateArgs {
	#[command(flatten)]
	source: SourceArgs,

	/// Number of ticks to run
	#[arg(short, long, value_name = "COUNT", default_value_t = 100)]
	ticks: u32,

	/// Print render parameters every COUNT ticks
	#[arg(short, long, value_name = "COUNT", default_value_t = 1)]
	every: u32,

	/// TOML engine configuration
	#[arg(short, long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Pretty print JSON
	#[arg(short, long, default_value_t = false)]
	pretty: bool,
}

/// Host that logs every callback
struct LoggingHost;

impl PictureHost for LoggingHost {
	fn play_sound(&mut self, index: u32) {
		info!("Play sound {index}");
	}

	fn appear_parts(&mut self, appearance: &PartsAppearance) {
		info!(
			"Appear {} part {} at ({}, {}), triggered at {}",
			appearance.parts_type,
			appearance.parts_id,
			appearance.x,
			appearance.y,
			appearance.trigger_pos
		);
	}

	fn start_picture_waiting(&mut self, picture: PicturePointer) {
		info!("Picture {picture} is waiting");
	}

	fn stop_picture_waiting(&mut self, picture: PicturePointer) {
		info!("Picture {picture} stopped waiting");
	}
}

/// Loads the engine configuration from an optional TOML file and `WWAPIC_*` variables
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
	let mut builder = config::Config::builder();
	if let Some(path) = path {
		if !path.exists() {
			bail!("Configuration file not found: {}", path.display());
		}
		builder = builder.add_source(config::File::from(path));
	}
	let config = builder
		.add_source(config::Environment::with_prefix("WWAPIC").try_parsing(true))
		.build()
		.context("Failed to load engine configuration")?
		.try_deserialize::<EngineConfig>()
		.context("Invalid engine configuration")?;
	debug!("Engine configuration: {config:?}");
	Ok(config)
}

fn coord_arg(values: Option<&[i32]>) -> Coord<i32> {
	match values {
		Some(&[x, y, ..]) => Coord::new(x, y),
		_ => Coord::default(),
	}
}

/// Builds the picture source and reads the script lines
fn load_script(args: &SourceArgs) -> Result<(PictureSource, Vec<String>)> {
	let text = fs::read_to_string(&args.script)
		.with_context(|| format!("Failed to read script: {}", args.script.display()))?;
	let lines = text.lines().filter(|line| !line.trim().is_empty()).map(str::to_string).collect();

	let mut source = PictureSource::new(PicturePointer::new(args.parts_number, 0))
		.with_image(coord_arg(args.crop.as_deref()), coord_arg(args.second_crop.as_deref()))
		.with_sound(args.sound);
	if let Some(&[x, y, id]) = args.trigger.as_deref() {
		source = source.with_trigger(Coord::new(x, y), id);
	}
	Ok((source, lines))
}

/// Handle check command
fn run_check(opts: &CheckArgs) -> Result<()> {
	let config = load_config(opts.config.as_deref())?;
	let (source, lines) = load_script(&opts.source)?;

	let mut picture = Picture::new(source, config);
	for (number, line) in lines.iter().enumerate() {
		picture
			.apply_line(line)
			.with_context(|| format!("{}:{}: `{line}`", opts.source.script.display(), number + 1))?;
	}

	println!("✓ {} line(s) OK", lines.len());
	let properties = picture.properties();
	println!("  Position:   {}", picture.pos());
	println!("  Size:       {}", picture.size());
	let fill = if picture.is_fill() { " (fill)" } else { "" };
	println!("  Repeat:     {}{fill}", properties.repeat_count());
	if let Some(time) = properties.time() {
		println!("  Time:       {time} ms");
	}
	if let Some(wait) = properties.wait() {
		println!("  Wait:       {} ms, target part {}", wait.delay_ms(), wait.target_parts_id());
	}
	for animation in picture.animations() {
		println!("  Animation:  {} -> {}", animation.kind(), animation.target());
	}
	for next in picture.next_pictures() {
		println!("  Next:       {next}");
	}
	Ok(())
}

/// Handle simulate command
fn run_simulate(opts: &SimulateArgs) -> Result<()> {
	if opts.every == 0 {
		bail!("--every must be at least 1");
	}

	let config = load_config(opts.config.as_deref())?;
	let (source, lines) = load_script(&opts.source)?;

	let mut host = LoggingHost;
	let mut store = PictureStore::with_config(config.with_store_capacity(1));
	store
		.create_picture(0, source, &lines)
		.with_context(|| format!("Invalid script: {}", opts.source.script.display()))?;
	store.start(&mut host);

	blink::reset();
	for tick in 1..=opts.ticks {
		for next in store.update(&mut host) {
			info!("Tick {tick}: timed out, next picture {next}");
		}
		blink::advance(config.blink_period_ticks);

		if tick % opts.every != 0 {
			continue;
		}
		let Some(picture) = store.get_picture(0)? else {
			break;
		};
		let frame = json!({
			"tick": tick,
			"elapsed_ms": u64::from(tick) * u64::from(config.tick_ms),
			"state": picture.state(),
			"render": picture.render(),
		});
		if opts.pretty {
			println!("{}", serde_json::to_string_pretty(&frame)?);
		} else {
			println!("{frame}");
		}
	}
	Ok(())
}
