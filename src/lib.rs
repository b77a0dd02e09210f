//! Static heads-up GTO lookups.
//!
//! Hand-authored preflop and flop strategy tables, a preflop equity table,
//! linear EV arithmetic, and range-notation expansion. Nothing here is
//! solved: every frequency is a constant typed into [`strategy::Book`].

pub mod cards;
pub mod dto;
pub mod equity;
pub mod ranges;
pub mod strategy;
pub mod tables;

#[cfg(feature = "server")]
pub mod analysis;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot sizes, bet amounts, and expected values in big blinds.
pub type Chips = f32;
/// Expected values of actions in big blinds.
pub type Utility = f32;
/// Action frequencies, equities, and fold equity.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and dealing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Effective stack depth every table entry assumes, in big blinds.
pub const STACK: Chips = 100.0;
/// Equity assumed for any hand missing from the equity table.
pub const DEFAULT_EQUITY: Probability = 0.5;
/// Ranks per side of the starting-hand matrix.
pub const GRID: usize = 13;
/// Number of strategically distinct starting hands.
pub const N_CLASSES: usize = GRID * GRID;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
