//! Utility to format a joule quantity from the command line
//!
//! Usage: format_joules <joules> [--locale ID] [--style short|medium|long] [--food]

use energy_fmt::config::ServerConfig;
use energy_fmt::energy::{
    is_valid_locale_identifier, normalize_locale_identifier, EnergyFormatter, FormatterConfig,
    UnitStyle,
};

fn usage() -> String {
    "Usage: format_joules <joules> [--locale ID] [--style short|medium|long] [--food]".to_string()
}

enum Command {
    Format { joules: f64, config: FormatterConfig },
    Help,
}

/// Parse arguments on top of the environment configuration
fn parse_args<I>(args: I, mut config: FormatterConfig) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut joules: Option<f64> = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--locale" => {
                let raw = args.next().ok_or_else(usage)?;
                config.locale_identifier = normalize_locale_identifier(&raw)
                    .filter(|locale| is_valid_locale_identifier(locale))
                    .ok_or_else(|| format!("Not a locale identifier: '{}'", raw))?;
            }
            "--style" => {
                let raw = args.next().ok_or_else(usage)?;
                config.unit_style =
                    UnitStyle::from_str(&raw).ok_or_else(|| format!("Unknown style '{}'", raw))?;
            }
            "--food" => config.is_for_food_energy_use = true,
            "-h" | "--help" => return Ok(Command::Help),
            value => {
                let parsed: f64 = value
                    .parse()
                    .map_err(|_| format!("Not a number: '{}'\n{}", value, usage()))?;
                if joules.is_some() {
                    return Err(format!("Unexpected extra value '{}'\n{}", value, usage()));
                }
                joules = Some(parsed);
            }
        }
    }

    let joules = joules.ok_or_else(usage)?;
    Ok(Command::Format { joules, config })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env().formatter;

    let (joules, config) = match parse_args(std::env::args().skip(1), config)? {
        Command::Format { joules, config } => (joules, config),
        Command::Help => {
            println!("{}", usage());
            return Ok(());
        }
    };

    let formatter = EnergyFormatter::new(config)?;
    let formatted = formatter.format_joules(joules)?;

    println!("{}", formatted.text);
    println!("  Unit: {}", formatted.unit);
    println!("  Locale: {}", formatter.config().locale_identifier);

    Ok(())
}
