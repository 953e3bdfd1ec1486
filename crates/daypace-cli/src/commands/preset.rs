use clap::Subcommand;
use daypace_core::{format_minute, preset, presets, Config, PacingConfig};

#[derive(Subcommand)]
pub enum PresetAction {
    /// List built-in presets
    List,
    /// Show the pacing values of a preset
    Show {
        /// Preset name
        name: String,
    },
    /// Copy a preset's pacing into the stored config
    Apply {
        /// Preset name
        name: String,
    },
}

pub fn run(action: PresetAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PresetAction::List => {
            for p in presets() {
                println!("{:<12} {}", p.name, p.description);
            }
        }
        PresetAction::Show { name } => {
            let found = preset(&name).ok_or_else(|| format!("unknown preset: {name}"))?;
            print_pacing(&found.pacing);
        }
        PresetAction::Apply { name } => {
            let found = preset(&name).ok_or_else(|| format!("unknown preset: {name}"))?;
            let mut config = Config::load()?;
            config.pacing = found.pacing;
            config.save()?;
            println!("preset '{}' applied", found.name);
        }
    }
    Ok(())
}

fn print_pacing(pacing: &PacingConfig) {
    let normalized = pacing.normalized();
    println!("start         {}", format_minute(normalized.start));
    match normalized.end {
        Some(end) => println!("end           {}", format_minute(end)),
        None => println!("end           open"),
    }
    println!("break_every   {}m", normalized.break_every);
    println!("break_length  {}m", normalized.break_length);
    println!("warmup        {}m", normalized.warmup_length);
    println!("wrap          {}m", normalized.wrap_length);
    println!("auto_lunch    {}", normalized.auto_lunch);
}
