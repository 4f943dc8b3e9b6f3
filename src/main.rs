//! smps - Switch-Mode Converter Sizing Calculator
//!
//! One-shot sizing reports for Boost and Buck converters.
//!
//! # Usage
//!
//! ```bash
//! smps boost --v-in 10 --v-out 20 --i-load 2 --frequency 100k \
//!            --inductance 100u --capacitance 10u
//! smps buck --v-in 12 --v-out 3.3 --i-load 1.5 --frequency 500k
//! ```

use clap::{Parser, Subcommand};
use smps_core::{
    error::{Result, SmpsError},
    units, BoostDesign, BuckDesign,
};

/// Switch-mode converter sizing calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Size a step-up (boost) converter
    Boost {
        /// Input voltage (V)
        #[arg(long, value_parser = engineering_value)]
        v_in: f64,

        /// Output voltage (V)
        #[arg(long, value_parser = engineering_value)]
        v_out: f64,

        /// Load current (A)
        #[arg(long, value_parser = engineering_value)]
        i_load: f64,

        /// Switching frequency (Hz)
        #[arg(long, value_parser = engineering_value)]
        frequency: f64,

        /// Chosen inductance (H)
        #[arg(long, value_parser = engineering_value)]
        inductance: f64,

        /// Output capacitance (F)
        #[arg(long, value_parser = engineering_value)]
        capacitance: f64,
    },

    /// Size a step-down (buck) converter
    Buck {
        /// Input voltage (V)
        #[arg(long, value_parser = engineering_value)]
        v_in: f64,

        /// Output voltage (V)
        #[arg(long, value_parser = engineering_value)]
        v_out: f64,

        /// Load current (A)
        #[arg(long, value_parser = engineering_value)]
        i_load: f64,

        /// Switching frequency (Hz)
        #[arg(long, value_parser = engineering_value)]
        frequency: f64,
    },
}

/// Parse a CLI value in plain or engineering notation (`0.5`, `100k`, `4.7u`).
fn engineering_value(text: &str) -> Result<f64> {
    units::parse_value(text).ok_or_else(|| SmpsError::invalid_value(text))
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Boost {
            v_in,
            v_out,
            i_load,
            frequency,
            inductance,
            capacitance,
        } => {
            let design = BoostDesign {
                v_in,
                v_out,
                i_load,
                switching_frequency: frequency,
                inductance,
                capacitance,
            };
            println!("{}", design.report());
        }

        Command::Buck {
            v_in,
            v_out,
            i_load,
            frequency,
        } => {
            let design = BuckDesign {
                v_in,
                v_out,
                i_load,
                switching_frequency: frequency,
            };
            println!("{}", design.report());
        }
    }

    Ok(())
}
