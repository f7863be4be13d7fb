use drawpad::script::parse_script;
use drawpad::{Session, Snapshot};
use std::io::Read;

#[derive(thiserror::Error, Debug)]
#[error("no global tracing subscriber set")]
struct NoTracingSubscriber;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.with_writer(std::io::stderr)
			.finish(),
	)
	.map_err(|_| NoTracingSubscriber)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing` for any dependency that logs through `log`.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;
	Ok(())
}

const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 480;

fn main() -> anyhow::Result<()> {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		eprintln!("{error}");
	}

	let mut source = String::new();
	std::io::stdin().read_to_string(&mut source)?;
	let commands = parse_script(&source)?;
	tracing::info!(commands = commands.len(), "replaying touch script");

	let mut session = Session::builder()
		.width(CANVAS_WIDTH)
		.height(CANVAS_HEIGHT)
		.build()?;
	let mut shares = 0;
	let mut sink = |snapshot: Snapshot| {
		shares += 1;
		tracing::info!(
			width = snapshot.width,
			height = snapshot.height,
			bytes = snapshot.data.len(),
			"shared drawing"
		);
	};
	for command in &commands {
		command.apply(&mut session, &mut sink);
	}
	if session.is_drawing() {
		tracing::warn!("script ended during a stroke");
	}
	tracing::info!(shares, "done");
	Ok(())
}
