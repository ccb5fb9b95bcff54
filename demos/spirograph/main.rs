//! Spirograph demo — drives a session through one transition and logs the
//! fitted bounds of every 30th frame.
//!
//! Usage:
//! ```text
//! cargo run --example spirograph                        # default target
//! cargo run --example spirograph -- 70 30 45 12         # major minor offset samples
//! RUST_LOG=spirograph=debug cargo run --example spirograph
//! ```

use std::time::Duration;

use spirograph::{CurveParameters, Parameter, SpirographError, SpirographSession, Viewport};

/// Display refresh interval (60 Hz).
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Log every n-th frame.
const LOG_EVERY: u32 = 30;

/// Parse up to four positional numbers as the target parameters.
fn parse_target() -> CurveParameters {
    let values: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    Parameter::ALL.into_iter().zip(values).fold(
        CurveParameters::new(70.0, 30.0, 45.0, 12.0),
        |p, (param, v)| p.with(param, v),
    )
}

fn main() -> Result<(), SpirographError> {
    // Default: WARN for everything, INFO for the demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=spirograph=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("spirograph=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut session = SpirographSession::default();
    session.set_pending(parse_target());
    tracing::info!(target_params = ?session.pending(), "committing");

    let viewport = Viewport::new(800.0, 600.0)?;
    let limits = session.config().limits;

    let mut now = Duration::ZERO;
    session.commit(now)?;

    let mut frame_index = 0_u32;
    loop {
        let frame = session.tick(now)?;
        let finished = !session.is_animating(now);
        if frame_index % LOG_EVERY == 0 || finished {
            let fitted = viewport.fit(&frame.points, &limits)?;
            if let Some(bounds) = fitted.bounds() {
                tracing::info!(
                    frame = frame_index,
                    progress = format_args!("{:.3}", frame.progress),
                    width = format_args!("{:.1}", bounds.width()),
                    height = format_args!("{:.1}", bounds.height()),
                    "frame"
                );
            }
        }
        if finished {
            break;
        }
        now += FRAME_INTERVAL;
        frame_index += 1;
    }

    tracing::info!(params = ?session.displayed_at(now), "done");
    Ok(())
}
